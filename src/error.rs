//! Crate-level error type and `Result` alias for stable, structured error
//! handling. Converts underlying I/O and raster errors, and provides semantic
//! variants for the fatal conditions a run can hit.
use std::path::PathBuf;

use thiserror::Error;

use crate::types::{Band, Product};

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("raster I/O error: {0}")]
    Raster(#[from] crate::io::RasterError),

    #[error("no MTL metadata file found in {}", .dir.display())]
    MissingMetadata { dir: PathBuf },

    #[error("malformed calibration constant: {key} = {value}")]
    MalformedConstant { key: String, value: String },

    #[error("band {band}, required by {product}, is not available in this scene")]
    MissingRequiredBand { band: Band, product: Product },

    #[error("thermal constants K1/K2 are missing from the MTL metadata")]
    MissingThermalConstants,

    #[error("raster shape mismatch: expected {expected:?}, found {found:?}")]
    ShapeMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },

    #[error("report serialization error: {0}")]
    Report(#[from] serde_json::Error),
}
