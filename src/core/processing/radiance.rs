//! Radiometric correction: raw digital numbers to TOA spectral radiance.
use ndarray::Array2;

use crate::core::calibration::RadianceScaling;

/// Apply the linear rescaling `L = mult * DN + add` per pixel.
///
/// A digital number of exactly 0 is the sensor's fill convention, not a
/// physically valid signal, so those pixels become NaN regardless of the
/// rescaling factors. The NaN established here is the nodata mask every
/// downstream product propagates.
pub fn to_radiance(raw: &Array2<f32>, scaling: RadianceScaling) -> Array2<f32> {
    let mult = scaling.mult as f32;
    let add = scaling.add as f32;
    raw.mapv(|dn| if dn == 0.0 { f32::NAN } else { mult * dn + add })
}
