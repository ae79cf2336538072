use std::fs;
use std::path::Path;

use approx::assert_abs_diff_eq;
use ndarray::{Array2, arr2};

use lstpro::api::process_scene_to_path;
use lstpro::io::writers::geotiff::write_f32;
use lstpro::io::{GdalBandReader, RasterMetadata};
use lstpro::{Band, Error, ProcessingParams, Product};

fn test_metadata(rows: usize, cols: usize) -> RasterMetadata {
    RasterMetadata {
        size_x: cols,
        size_y: rows,
        geotransform: [600_000.0, 30.0, 0.0, 1_500_000.0, 0.0, -30.0],
        projection: String::new(),
        nodata: None,
    }
}

fn write_band(scene_dir: &Path, band: u32, grid: &Array2<f32>) {
    let (rows, cols) = grid.dim();
    let path = scene_dir.join(format!("SYNTH_B{}.TIF", band));
    write_f32(&path, grid, &test_metadata(rows, cols)).unwrap();
}

/// Synthetic 2x2 scene with one fill pixel (DN 0) in the red band.
fn write_scene(scene_dir: &Path, with_swir2: bool) {
    let mtl = r#"
      GROUP = LEVEL1_RADIOMETRIC_RESCALING
        RADIANCE_MULT_BAND_3 = 0.01
        RADIANCE_MULT_BAND_4 = 0.01
        RADIANCE_MULT_BAND_5 = 0.01
        RADIANCE_MULT_BAND_6 = 0.01
        RADIANCE_MULT_BAND_7 = 0.01
        RADIANCE_MULT_BAND_10 = 0.1
        RADIANCE_ADD_BAND_3 = 1.0
        RADIANCE_ADD_BAND_4 = 1.0
        RADIANCE_ADD_BAND_5 = 1.0
        RADIANCE_ADD_BAND_6 = 1.0
        RADIANCE_ADD_BAND_7 = 1.0
        RADIANCE_ADD_BAND_10 = 0.1
      END_GROUP = LEVEL1_RADIOMETRIC_RESCALING
      GROUP = LEVEL1_THERMAL_CONSTANTS
        K1_CONSTANT_BAND_10 = 774.8853
        K2_CONSTANT_BAND_10 = 1321.0789
      END_GROUP = LEVEL1_THERMAL_CONSTANTS
    "#;
    fs::write(scene_dir.join("SYNTH_MTL.txt"), mtl).unwrap();

    write_band(scene_dir, 3, &arr2(&[[1.0_f32, 2.0], [3.0, 4.0]]));
    write_band(scene_dir, 4, &arr2(&[[10.0_f32, 0.0], [30.0, 40.0]]));
    write_band(scene_dir, 5, &arr2(&[[50.0_f32, 60.0], [70.0, 80.0]]));
    write_band(scene_dir, 6, &arr2(&[[5.0_f32, 6.0], [7.0, 8.0]]));
    if with_swir2 {
        write_band(scene_dir, 7, &arr2(&[[9.0_f32, 10.0], [11.0, 12.0]]));
    }
    write_band(scene_dir, 10, &arr2(&[[10.0_f32, 20.0], [30.0, 40.0]]));
}

fn read_product(output_dir: &Path, product: Product) -> Array2<f32> {
    let reader = GdalBandReader::open(output_dir.join(product.file_name())).unwrap();
    reader.read_band(1).unwrap()
}

#[test]
fn test_full_scene_run() {
    let scene = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_scene(scene.path(), true);

    let report =
        process_scene_to_path(scene.path(), out.path(), &ProcessingParams::default()).unwrap();

    assert_eq!(report.corrected_bands, vec![3, 4, 5, 6, 7, 10]);
    assert!(report.skipped_bands.is_empty());
    assert_eq!(report.products.len(), 7);
    assert!(out.path().join("lst_report.json").exists());
    for summary in &report.products {
        assert!(summary.path.exists());
        assert!(summary.stats.is_some());
    }

    // radiance output carries the linear rescaling and the fill pixel
    let b4 = GdalBandReader::open(out.path().join("TOA_Radiance_B4.TIF")).unwrap();
    assert!(b4.metadata.nodata.is_some_and(f64::is_nan));
    let radiance = b4.read_band(1).unwrap();
    assert_abs_diff_eq!(radiance[[0, 0]], 1.1, epsilon = 1e-5);
    assert!(radiance[[0, 1]].is_nan());

    // NDVI = (nir - red) / (nir + red) on corrected values
    let ndvi = read_product(out.path(), Product::Ndvi);
    assert_abs_diff_eq!(ndvi[[0, 0]], (1.5 - 1.1) / (1.5 + 1.1), epsilon = 1e-4);
    assert!(ndvi[[0, 1]].is_nan());

    // the fill pixel propagates through emissivity into LST even though the
    // thermal band is valid there
    let bt = read_product(out.path(), Product::Bt);
    let lst = read_product(out.path(), Product::Lst);
    assert!(bt[[0, 1]].is_finite());
    assert!(lst[[0, 1]].is_nan());
    assert!(lst[[0, 0]].is_finite());
}

#[test]
fn test_missing_swir2_fails_only_when_nbr_requested() {
    let scene = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    write_scene(scene.path(), false);

    let err = process_scene_to_path(scene.path(), out.path(), &ProcessingParams::default())
        .unwrap_err();
    assert!(matches!(
        err,
        Error::MissingRequiredBand {
            band: Band::Swir2,
            product: Product::Nbr,
        }
    ));

    let params = ProcessingParams {
        products: vec![
            Product::Ndvi,
            Product::Ndbi,
            Product::Ndwi,
            Product::Bt,
            Product::Emissivity,
            Product::Lst,
        ],
        ..ProcessingParams::default()
    };
    let report = process_scene_to_path(scene.path(), out.path(), &params).unwrap();
    assert_eq!(report.products.len(), 6);
    assert_eq!(report.skipped_bands, vec![7]);
}

#[test]
fn test_missing_mtl_aborts() {
    let scene = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();

    let err = process_scene_to_path(scene.path(), out.path(), &ProcessingParams::default())
        .unwrap_err();
    assert!(matches!(err, Error::MissingMetadata { .. }));
}

#[test]
fn test_geotiff_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("grid.tif");
    let grid = arr2(&[[1.5_f32, f32::NAN], [-2.25, 0.0]]);

    write_f32(&path, &grid, &test_metadata(2, 2)).unwrap();

    let reader = GdalBandReader::open(&path).unwrap();
    assert_eq!(reader.metadata.size_x, 2);
    assert_eq!(reader.metadata.size_y, 2);
    assert_eq!(reader.metadata.geotransform[1], 30.0);
    assert!(reader.metadata.nodata.is_some_and(f64::is_nan));

    let back = reader.read_band(1).unwrap();
    assert_eq!(back[[0, 0]], 1.5);
    assert!(back[[0, 1]].is_nan());
    assert_eq!(back[[1, 0]], -2.25);
    assert_eq!(back[[1, 1]], 0.0);
}
