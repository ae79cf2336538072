use gdal::{Dataset, errors::GdalError};
use ndarray::Array2;
use std::path::Path;
use thiserror::Error;

/// Errors encountered reading or writing rasters through GDAL
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("GDAL error: {0}")]
    Gdal(#[from] GdalError),
    #[error("unsupported raster: {0}")]
    Unsupported(String),
    #[error("dimension mismatch: expected {0}x{1}, got {2}x{3}")]
    DimensionMismatch(usize, usize, usize, usize),
}

/// Spatial-reference descriptor of a raster, carried through the pipeline
/// unchanged except for dtype/nodata updates on write.
#[derive(Debug, Clone)]
pub struct RasterMetadata {
    /// Width (pixels) of the raster
    pub size_x: usize,
    /// Height (lines) of the raster
    pub size_y: usize,
    /// Affine geotransform coefficients ([origin_x, pixel_width, rot_x, origin_y, rot_y, pixel_height])
    pub geotransform: [f64; 6],
    /// Projection in WKT format
    pub projection: String,
    /// Declared nodata value of band 1, if any
    pub nodata: Option<f64>,
}

/// Reader for single-band rasters in any GDAL-supported format
pub struct GdalBandReader {
    pub dataset: Dataset,
    pub metadata: RasterMetadata,
}

impl GdalBandReader {
    /// Open a GDAL-supported raster (e.g., GeoTIFF) and capture its spatial
    /// metadata.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, RasterError> {
        let dataset = Dataset::open(path.as_ref())?;
        let (size_x, size_y) = dataset.raster_size();
        if dataset.raster_count() == 0 {
            return Err(RasterError::Unsupported("no raster bands found".into()));
        }
        let geotransform = match dataset.geo_transform() {
            Ok(gt) => gt,
            Err(_) => [0.0, 1.0, 0.0, 0.0, 0.0, 1.0],
        };
        let projection = dataset.projection();
        let nodata = dataset.rasterband(1)?.no_data_value();
        Ok(GdalBandReader {
            dataset,
            metadata: RasterMetadata {
                size_x: size_x as usize,
                size_y: size_y as usize,
                geotransform,
                projection,
                nodata,
            },
        })
    }

    /// Read one band (1-based index) as an f32 ndarray of shape
    /// (height, width), regardless of the stored sample type.
    pub fn read_band(&self, index: usize) -> Result<Array2<f32>, RasterError> {
        if index == 0 || index > self.dataset.raster_count() as usize {
            return Err(RasterError::Unsupported(format!(
                "band index {} out of range",
                index
            )));
        }
        let band = self.dataset.rasterband(index)?;
        let window = (self.metadata.size_x, self.metadata.size_y);
        let buf = band.read_as::<f32>((0, 0), window, window, None)?;
        let data = buf.data().to_vec();
        Array2::from_shape_vec((self.metadata.size_y, self.metadata.size_x), data).map_err(|_| {
            RasterError::DimensionMismatch(
                self.metadata.size_x,
                self.metadata.size_y,
                window.0,
                window.1,
            )
        })
    }
}
