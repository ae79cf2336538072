//! Scene-directory discovery.
//!
//! A Landsat Level-1 scene is a flat directory holding one `*_MTL.txt`
//! metadata file and one single-band GeoTIFF per spectral band, named
//! `<scene_id>_B<n>.TIF`. Matching is case-insensitive on the suffix so
//! lowercase exports are picked up too.
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Locate the MTL metadata file, or fail with `MissingMetadata`.
pub fn find_mtl_file(scene_dir: &Path) -> Result<PathBuf> {
    for entry in fs::read_dir(scene_dir)? {
        let path = entry?.path();
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.to_ascii_lowercase().ends_with("_mtl.txt") {
                return Ok(path);
            }
        }
    }
    Err(Error::MissingMetadata {
        dir: scene_dir.to_path_buf(),
    })
}

/// Locate the raster for one band number, `None` when the scene does not
/// carry it. The suffix is matched in full, so `_B1` never shadows `_B10`.
pub fn find_band_file(scene_dir: &Path, band_number: u32) -> Result<Option<PathBuf>> {
    let tif = format!("_b{}.tif", band_number);
    let tiff = format!("_b{}.tiff", band_number);
    for entry in fs::read_dir(scene_dir)? {
        let path = entry?.path();
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            let name = name.to_ascii_lowercase();
            if name.ends_with(&tif) || name.ends_with(&tiff) {
                return Ok(Some(path));
            }
        }
    }
    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;

    #[test]
    fn test_find_mtl_file() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("LC09_L1TP_147049_MTL.txt")).unwrap();
        File::create(dir.path().join("LC09_L1TP_147049_B4.TIF")).unwrap();

        let mtl = find_mtl_file(dir.path()).unwrap();
        assert!(mtl.to_string_lossy().ends_with("_MTL.txt"));
    }

    #[test]
    fn test_missing_mtl_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            find_mtl_file(dir.path()),
            Err(Error::MissingMetadata { .. })
        ));
    }

    #[test]
    fn test_band_suffix_is_matched_in_full() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("scene_B10.TIF")).unwrap();

        assert!(find_band_file(dir.path(), 1).unwrap().is_none());
        let b10 = find_band_file(dir.path(), 10).unwrap().unwrap();
        assert!(b10.to_string_lossy().ends_with("_B10.TIF"));
    }

    #[test]
    fn test_lowercase_extension_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        File::create(dir.path().join("scene_b5.tif")).unwrap();
        assert!(find_band_file(dir.path(), 5).unwrap().is_some());
    }
}
