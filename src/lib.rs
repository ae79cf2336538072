#![doc = r#"
LSTPRO — a Landsat Level-1 scene processor.

This crate turns the raw digital numbers of a Landsat 8/9 scene into
physically meaningful rasters: top-of-atmosphere spectral radiance per band,
normalized-difference indices (NDVI, NDBI, NBR, NDWI), brightness
temperature, surface emissivity, and land surface temperature. It powers the
LSTPRO CLI and can be embedded in your own Rust applications.

Requirements
------------
- GDAL development headers and runtime available on your system.
- Rust 2024 edition toolchain.

Quick start: process a scene directory
--------------------------------------
```rust,no_run
use std::path::Path;
use lstpro::{ProcessingParams, Product, process_scene_to_path};

fn main() -> lstpro::Result<()> {
    let params = ProcessingParams {
        products: vec![Product::Ndvi, Product::Bt, Product::Lst],
        write_radiance: true,
        radiance_prefix: "TOA_Radiance".to_string(),
    };

    let report = process_scene_to_path(
        Path::new("/data/LC09_L1TP_147049_20250105_20250105_02_T1"),
        Path::new("/out"),
        &params,
    )?;

    for summary in &report.products {
        if let Some(stats) = summary.stats {
            println!("{}: min = {:.2}, max = {:.2}", summary.product, stats.min, stats.max);
        }
    }
    Ok(())
}
```

Working with grids directly
---------------------------
The per-pixel building blocks are plain functions over `ndarray::Array2<f32>`
grids, usable without any disk I/O:

```rust
use ndarray::arr2;
use lstpro::core::calibration::RadianceScaling;
use lstpro::core::processing::indices::normalized_difference;
use lstpro::core::processing::radiance::to_radiance;

let raw = arr2(&[[0.0_f32, 100.0], [200.0, 300.0]]);
let radiance = to_radiance(&raw, RadianceScaling { mult: 0.01, add: 5.0 });
assert!(radiance[[0, 0]].is_nan()); // DN 0 is the fill convention

let ndvi = normalized_difference(&radiance, &radiance).unwrap();
assert_eq!(ndvi[[1, 1]], 0.0);
```

Nodata convention
-----------------
A raw digital number of 0 marks "no observation". Radiometric correction
turns those pixels into NaN once, and every downstream formula propagates
the NaN; derived rasters are written with a NaN nodata value. Floating-point
edge cases (division by zero, logarithm of non-positive values) never panic,
they yield NaN.

Error handling
--------------
All public functions return `lstpro::Result<T>`; match on `lstpro::Error` to
handle specific cases, e.g. a missing MTL file or missing mandatory band.

```rust,no_run
use std::path::Path;
use lstpro::{Error, ProcessingParams, process_scene_to_path};

fn main() {
    let params = ProcessingParams::default();
    match process_scene_to_path(Path::new("/bad/scene"), Path::new("/out"), &params) {
        Ok(report) => println!("{} products written", report.products.len()),
        Err(Error::MissingMetadata { dir }) => eprintln!("no MTL in {}", dir.display()),
        Err(Error::MissingRequiredBand { band, product }) => {
            eprintln!("{} needs band {}", product, band)
        }
        Err(other) => eprintln!("{}", other),
    }
}
```

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`core`] — calibration table, radiometric correction, indices, thermal chain.
- [`io`] — scene discovery, GDAL reader, GeoTIFF/report writers.
- [`types`] — `Band` and `Product` enums.
- [`error`] — crate-level `Error` and `Result`.
"#]

// Core modules (public)
pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
// Types
pub use core::calibration::{CalibrationTable, RadianceScaling};
pub use core::params::ProcessingParams;
pub use core::processing::stats::GridStats;
pub use error::{Error, Result};
pub use types::{Band, Product};

// Readers and writers
pub use io::gdal::{GdalBandReader, RasterError, RasterMetadata};

// High-level API re-exports
pub use api::{ProductSummary, SceneReport, process_scene_to_path};
