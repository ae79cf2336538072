//! High-level, ergonomic library API: process a Landsat scene directory to a
//! set of derived rasters on disk. Prefer these entrypoints over the
//! low-level processing modules when embedding LSTPRO.
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::calibration::CalibrationTable;
use crate::core::params::ProcessingParams;
use crate::core::processing::pipeline::{BandGrids, derive_products};
use crate::core::processing::radiance::to_radiance;
use crate::core::processing::stats::{GridStats, nan_min_max};
use crate::error::Result;
use crate::io::scene::{find_band_file, find_mtl_file};
use crate::io::writers::geotiff::write_f32;
use crate::io::writers::report::write_run_report;
use crate::io::{GdalBandReader, RasterMetadata};
use crate::types::{Band, Product};

/// One persisted product with its valid-range summary.
#[derive(Debug, Clone, Serialize)]
pub struct ProductSummary {
    pub product: Product,
    pub path: PathBuf,
    /// `None` when every pixel of the product is nodata
    pub stats: Option<GridStats>,
}

/// Outcome of one scene run.
#[derive(Debug, Clone, Serialize)]
pub struct SceneReport {
    /// Band numbers that were radiometrically corrected
    pub corrected_bands: Vec<u32>,
    /// Band numbers listed in the MTL but skipped (no raster, or incomplete
    /// rescaling factors)
    pub skipped_bands: Vec<u32>,
    pub products: Vec<ProductSummary>,
}

/// Run the full pipeline over one scene directory.
///
/// Resolves and parses the MTL metadata, corrects every calibrated band
/// present on disk (absent bands are skipped with a warning), derives the
/// requested products, persists each as a float32 GeoTIFF under
/// `output_dir`, and writes a JSON run report alongside them.
pub fn process_scene_to_path(
    scene_dir: &Path,
    output_dir: &Path,
    params: &ProcessingParams,
) -> Result<SceneReport> {
    let mtl_path = find_mtl_file(scene_dir)?;
    info!("using MTL metadata: {}", mtl_path.display());

    let table = CalibrationTable::parse(&fs::read_to_string(&mtl_path)?)?;
    for number in table.band_numbers() {
        if let Some(scaling) = table.scaling(number) {
            debug!(
                "band {}: mult = {:e}, add = {}",
                number, scaling.mult, scaling.add
            );
        }
    }

    fs::create_dir_all(output_dir)?;

    let mut grids = BandGrids::new();
    let mut reference: Option<RasterMetadata> = None;
    let mut corrected_bands = Vec::new();
    let mut skipped_bands = Vec::new();

    for number in table.band_numbers().collect::<Vec<_>>() {
        let Some(path) = find_band_file(scene_dir, number)? else {
            warn!("band {} raster not found in scene, skipping", number);
            skipped_bands.push(number);
            continue;
        };
        let Some(scaling) = table.scaling(number) else {
            warn!(
                "band {} has incomplete radiance rescaling factors, skipping",
                number
            );
            skipped_bands.push(number);
            continue;
        };

        let reader = GdalBandReader::open(&path)?;
        let raw = reader.read_band(1)?;
        let radiance = to_radiance(&raw, scaling);

        if reference.is_none() {
            reference = Some(reader.metadata.clone());
        }

        if params.write_radiance {
            let out = output_dir.join(format!("{}_B{}.TIF", params.radiance_prefix, number));
            write_f32(&out, &radiance, &reader.metadata)?;
            info!("corrected band {} saved to {}", number, out.display());
        }

        corrected_bands.push(number);
        if let Some(band) = Band::from_number(number) {
            grids.insert(band, radiance);
        }
    }

    let products = derive_products(&grids, &table, params)?;

    let mut summaries = Vec::with_capacity(products.len());
    // a derived product implies at least one corrected band, so the
    // reference metadata is present whenever this loop runs
    if let Some(reference) = &reference {
        for (product, grid) in &products {
            let path = output_dir.join(product.file_name());
            write_f32(&path, grid, reference)?;

            let stats = nan_min_max(grid);
            match stats {
                Some(s) => info!("{}: min = {:.2}, max = {:.2}", product, s.min, s.max),
                None => warn!("{}: no valid pixels", product),
            }
            summaries.push(ProductSummary {
                product: *product,
                path,
                stats,
            });
        }
    }

    write_run_report(&output_dir.join("lst_report.json"), scene_dir, &summaries)?;

    Ok(SceneReport {
        corrected_bands,
        skipped_bands,
        products: summaries,
    })
}
