//! NaN-ignoring summary statistics for derived products.
use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Minimum and maximum of the valid (non-NaN) samples of one grid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStats {
    pub min: f32,
    pub max: f32,
}

/// Fold a grid down to its valid min/max, or `None` when every sample is NaN.
pub fn nan_min_max(grid: &Array2<f32>) -> Option<GridStats> {
    let mut stats: Option<GridStats> = None;
    for &v in grid.iter() {
        if v.is_nan() {
            continue;
        }
        stats = Some(match stats {
            None => GridStats { min: v, max: v },
            Some(s) => GridStats {
                min: s.min.min(v),
                max: s.max.max(v),
            },
        });
    }
    stats
}
