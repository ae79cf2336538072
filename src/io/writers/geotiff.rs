use gdal::DriverManager;
use gdal::raster::Buffer;
use ndarray::Array2;
use std::path::Path;

use crate::io::gdal::{RasterError, RasterMetadata};

/// Write one grid as a single-band float32 GeoTIFF.
///
/// The spatial reference is copied from the source scene; the nodata value is
/// always NaN, matching the sentinel the pipeline carries in the samples
/// themselves.
pub fn write_f32(
    output: &Path,
    grid: &Array2<f32>,
    meta: &RasterMetadata,
) -> Result<(), RasterError> {
    let (rows, cols) = grid.dim();
    let driver = DriverManager::get_driver_by_name("GTiff")?;
    let mut ds = driver.create_with_band_type::<f32, _>(output, cols, rows, 1)?;

    ds.set_geo_transform(&meta.geotransform)?;
    if !meta.projection.is_empty() {
        ds.set_projection(&meta.projection)?;
    }

    let mut band = ds.rasterband(1)?;
    band.set_no_data_value(Some(f64::NAN))?;
    let mut buf = Buffer::new((cols, rows), grid.iter().copied().collect());
    band.write((0, 0), (cols, rows), &mut buf)?;
    Ok(())
}
