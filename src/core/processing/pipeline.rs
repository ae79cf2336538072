//! Pure product-derivation pipeline over in-memory corrected bands.
//!
//! Everything here operates on grids already loaded and radiometrically
//! corrected; reading scenes and persisting results lives in `api`/`io`.
use std::collections::BTreeMap;

use ndarray::Array2;
use tracing::warn;

use crate::core::calibration::CalibrationTable;
use crate::core::params::ProcessingParams;
use crate::core::processing::indices::normalized_difference;
use crate::core::processing::thermal::{
    brightness_temperature, emissivity, land_surface_temperature,
};
use crate::error::{Error, Result};
use crate::types::{Band, Product};

/// Corrected radiance grids keyed by band.
pub type BandGrids = BTreeMap<Band, Array2<f32>>;

/// Derive every requested product from the corrected bands.
///
/// Bands needed by a requested non-optional product are mandatory; a missing
/// one aborts with `MissingRequiredBand` before anything is derived. NDWI is
/// downgraded to a skip with a warning when the green band is absent.
/// Intermediates (NDVI for emissivity, BT and emissivity for LST) are
/// computed once and reused, whether or not they were requested themselves.
pub fn derive_products(
    bands: &BandGrids,
    table: &CalibrationTable,
    params: &ProcessingParams,
) -> Result<Vec<(Product, Array2<f32>)>> {
    let mut requested: Vec<Product> = Vec::new();
    for &product in &params.products {
        if !requested.contains(&product) {
            requested.push(product);
        }
    }

    for &product in &requested {
        if product.is_optional() {
            continue;
        }
        for &band in product.required_bands() {
            if !bands.contains_key(&band) {
                return Err(Error::MissingRequiredBand { band, product });
            }
        }
    }

    let needs_ndvi = requested
        .iter()
        .any(|p| matches!(p, Product::Ndvi | Product::Emissivity | Product::Lst));
    let needs_bt = requested
        .iter()
        .any(|p| matches!(p, Product::Bt | Product::Lst));
    let needs_emissivity = requested
        .iter()
        .any(|p| matches!(p, Product::Emissivity | Product::Lst));

    let mut ndvi = None;
    let mut bt = None;
    let mut emis = None;
    let mut lst = None;

    if needs_ndvi {
        ndvi = Some(normalized_difference(
            &bands[&Band::Nir],
            &bands[&Band::Red],
        )?);
    }
    if needs_bt {
        let (k1, k2) = table.thermal_constants()?;
        bt = Some(brightness_temperature(&bands[&Band::Tirs1], k1, k2));
    }
    if let (true, Some(ndvi)) = (needs_emissivity, ndvi.as_ref()) {
        emis = Some(emissivity(ndvi));
    }
    if let (true, Some(bt), Some(emis)) = (
        requested.contains(&Product::Lst),
        bt.as_ref(),
        emis.as_ref(),
    ) {
        lst = Some(land_surface_temperature(bt, emis)?);
    }

    let mut products = Vec::with_capacity(requested.len());
    for &product in &requested {
        let grid = match product {
            Product::Ndvi => ndvi.take(),
            Product::Bt => bt.take(),
            Product::Emissivity => emis.take(),
            Product::Lst => lst.take(),
            Product::Ndbi => Some(normalized_difference(
                &bands[&Band::Swir1],
                &bands[&Band::Nir],
            )?),
            Product::Nbr => Some(normalized_difference(
                &bands[&Band::Nir],
                &bands[&Band::Swir2],
            )?),
            Product::Ndwi => match (bands.get(&Band::Green), bands.get(&Band::Nir)) {
                (Some(green), Some(nir)) => Some(normalized_difference(green, nir)?),
                _ => {
                    warn!("green band unavailable, skipping NDWI");
                    None
                }
            },
        };
        if let Some(grid) = grid {
            products.push((product, grid));
        }
    }

    Ok(products)
}
