//! Thermal chain: brightness temperature, surface emissivity, and land
//! surface temperature.
//!
//! Three pure per-pixel stages with forward-only data dependency: thermal
//! radiance feeds BT, NDVI feeds emissivity, and BT plus emissivity feed LST.
use ndarray::{Array2, Zip};

use crate::core::processing::EPS;
use crate::error::{Error, Result};

/// Emissivity assigned below the bare-soil NDVI threshold.
const SOIL_EMISSIVITY: f32 = 0.977;
/// Emissivity assigned above the full-vegetation NDVI threshold.
const VEGETATION_EMISSIVITY: f32 = 0.990;
/// NDVI bounds of the mixed-pixel branch.
const NDVI_SOIL: f32 = 0.2;
const NDVI_VEGETATION: f32 = 0.5;

/// Emitted radiance wavelength of TIRS band 10, in meters.
const WAVELENGTH: f32 = 10.8e-6;
/// Radiation constant h*c/k, in meter-kelvin.
const RHO: f32 = 1.438e-2;
const KELVIN_OFFSET: f32 = 273.15;

/// Brightness temperature in kelvin via the inverse Planck function,
/// `BT = K2 / ln(K1 / (L + EPS) + 1)`.
///
/// A thermal radiance of exactly 0 is forced to NaN after the formula, the
/// same fill convention as radiometric correction. Negative radiance ends up
/// as a non-positive logarithm argument and silently yields NaN, never a
/// panic.
pub fn brightness_temperature(radiance: &Array2<f32>, k1: f64, k2: f64) -> Array2<f32> {
    let k1 = k1 as f32;
    let k2 = k2 as f32;
    radiance.mapv(|l| {
        if l == 0.0 {
            f32::NAN
        } else {
            k2 / ((k1 / (l + EPS)) + 1.0).ln()
        }
    })
}

/// Piecewise emissivity from NDVI.
///
/// Below 0.2 the pixel is treated as bare soil, above 0.5 as full
/// vegetation, and in between it scales with the squared vegetation fraction
/// `pv = ((NDVI - 0.2) / 0.3)^2`. The mixed branch tops out at 0.980 while
/// the vegetation branch sits at 0.990; that step at NDVI = 0.5 is inherited
/// from the published formula and preserved as-is. NaN NDVI stays NaN.
pub fn emissivity(ndvi: &Array2<f32>) -> Array2<f32> {
    ndvi.mapv(|v| {
        if v.is_nan() {
            f32::NAN
        } else if v < NDVI_SOIL {
            SOIL_EMISSIVITY
        } else if v > NDVI_VEGETATION {
            VEGETATION_EMISSIVITY
        } else {
            let pv = ((v - NDVI_SOIL) / (NDVI_VEGETATION - NDVI_SOIL)).powi(2);
            SOIL_EMISSIVITY + 0.003 * pv
        }
    })
}

/// Land surface temperature in degrees Celsius,
/// `LST = BT / (1 + ((wavelength * BT) / rho) * ln(e + EPS)) - 273.15`.
///
/// A pixel is NaN whenever the BT or emissivity input is NaN.
pub fn land_surface_temperature(
    bt: &Array2<f32>,
    emissivity: &Array2<f32>,
) -> Result<Array2<f32>> {
    if bt.dim() != emissivity.dim() {
        return Err(Error::ShapeMismatch {
            expected: bt.dim(),
            found: emissivity.dim(),
        });
    }

    let mut lst = Array2::zeros(bt.dim());
    Zip::from(bt)
        .and(emissivity)
        .and(&mut lst)
        .for_each(|&bt, &e, out| {
            *out = if bt.is_nan() || e.is_nan() {
                f32::NAN
            } else {
                bt / (1.0 + ((WAVELENGTH * bt) / RHO) * (e + EPS).ln()) - KELVIN_OFFSET
            };
        });
    Ok(lst)
}
