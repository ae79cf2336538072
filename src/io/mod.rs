//! I/O layer for reading Landsat scenes and writing derived rasters.
//! Provides scene-directory discovery, a GDAL-backed band reader, and
//! writers for float32 GeoTIFF products and the JSON run report.
pub mod gdal;
pub use gdal::{GdalBandReader, RasterError, RasterMetadata};

pub mod scene;

pub mod writers;
