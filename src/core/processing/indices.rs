//! Normalized-difference spectral indices.
use ndarray::{Array2, Zip};

use crate::core::processing::EPS;
use crate::error::{Error, Result};

/// Normalized difference `(a - b) / (a + b + EPS)` pixel-wise.
///
/// The inputs are nodata-propagated radiance grids, so a pixel that is
/// exactly 0 in either input is forced to NaN after the formula as a second
/// mask. NaN inputs fall through the arithmetic unchanged; nothing here
/// raises on division edge cases.
pub fn normalized_difference(a: &Array2<f32>, b: &Array2<f32>) -> Result<Array2<f32>> {
    if a.dim() != b.dim() {
        return Err(Error::ShapeMismatch {
            expected: a.dim(),
            found: b.dim(),
        });
    }

    let mut index = Array2::zeros(a.dim());
    Zip::from(a).and(b).and(&mut index).for_each(|&a, &b, out| {
        *out = if a == 0.0 || b == 0.0 {
            f32::NAN
        } else {
            (a - b) / (a + b + EPS)
        };
    });
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use ndarray::arr2;

    #[test]
    fn test_antisymmetric_where_defined() {
        let a = arr2(&[[3.0_f32, 1.5], [0.25, 7.0]]);
        let b = arr2(&[[1.0_f32, 4.5], [0.75, 2.0]]);
        let ab = normalized_difference(&a, &b).unwrap();
        let ba = normalized_difference(&b, &a).unwrap();
        for (x, y) in ab.iter().zip(ba.iter()) {
            assert_abs_diff_eq!(*x, -*y, epsilon = 1e-6);
        }
    }

    #[test]
    fn test_identical_grids() {
        let a = arr2(&[[2.0_f32, 0.0], [5.0, -3.0]]);
        let index = normalized_difference(&a, &a).unwrap();
        assert_eq!(index[[0, 0]], 0.0);
        assert!(index[[0, 1]].is_nan());
        assert_eq!(index[[1, 0]], 0.0);
        assert_eq!(index[[1, 1]], 0.0);
    }

    #[test]
    fn test_nan_inputs_propagate() {
        let a = arr2(&[[f32::NAN, 2.0]]);
        let b = arr2(&[[1.0_f32, f32::NAN]]);
        let index = normalized_difference(&a, &b).unwrap();
        assert!(index[[0, 0]].is_nan());
        assert!(index[[0, 1]].is_nan());
    }

    #[test]
    fn test_opposite_values_do_not_raise() {
        // a + b == 0; the guard keeps the division finite-by-construction
        let a = arr2(&[[1.0_f32]]);
        let b = arr2(&[[-1.0_f32]]);
        let index = normalized_difference(&a, &b).unwrap();
        assert!(index[[0, 0]].is_finite());
    }

    #[test]
    fn test_shape_mismatch_is_an_error() {
        let a = Array2::<f32>::zeros((2, 2));
        let b = Array2::<f32>::zeros((2, 3));
        assert!(matches!(
            normalized_difference(&a, &b),
            Err(Error::ShapeMismatch { .. })
        ));
    }
}
