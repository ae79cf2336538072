//! Shared types used across LSTPRO.
//! Includes the `Band` identifiers of the Landsat 8/9 OLI/TIRS bands the
//! pipeline consumes and the `Product` enum naming every derived raster.
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Spectral bands the pipeline knows how to consume, identified by their
/// Landsat 8/9 band number.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
pub enum Band {
    Green,
    Red,
    Nir,
    Swir1,
    Swir2,
    Tirs1,
}

impl Band {
    /// Band number as it appears in MTL tags and raster file names.
    pub const fn number(self) -> u32 {
        match self {
            Band::Green => 3,
            Band::Red => 4,
            Band::Nir => 5,
            Band::Swir1 => 6,
            Band::Swir2 => 7,
            Band::Tirs1 => 10,
        }
    }

    pub fn from_number(number: u32) -> Option<Band> {
        match number {
            3 => Some(Band::Green),
            4 => Some(Band::Red),
            5 => Some(Band::Nir),
            6 => Some(Band::Swir1),
            7 => Some(Band::Swir2),
            10 => Some(Band::Tirs1),
            _ => None,
        }
    }
}

impl std::fmt::Display for Band {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "B{}", self.number())
    }
}

/// Derived rasters the pipeline can produce. Each is written exactly once
/// per run as a single-band float32 GeoTIFF.
#[derive(
    Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
pub enum Product {
    Ndvi,
    Ndbi,
    Nbr,
    Ndwi,
    Bt,
    Emissivity,
    Lst,
}

impl Product {
    /// File name of the persisted raster.
    pub const fn file_name(self) -> &'static str {
        match self {
            Product::Ndvi => "NDVI.TIF",
            Product::Ndbi => "NDBI.TIF",
            Product::Nbr => "NBR.TIF",
            Product::Ndwi => "NDWI.TIF",
            Product::Bt => "BT.TIF",
            Product::Emissivity => "EMISSIVITY.TIF",
            Product::Lst => "LST.TIF",
        }
    }

    /// Corrected bands this product reads, directly or through the
    /// intermediate chain (NDVI feeds emissivity, BT and emissivity feed LST).
    pub const fn required_bands(self) -> &'static [Band] {
        match self {
            Product::Ndvi => &[Band::Nir, Band::Red],
            Product::Ndbi => &[Band::Swir1, Band::Nir],
            Product::Nbr => &[Band::Nir, Band::Swir2],
            Product::Ndwi => &[Band::Green, Band::Nir],
            Product::Bt => &[Band::Tirs1],
            Product::Emissivity => &[Band::Nir, Band::Red],
            Product::Lst => &[Band::Tirs1, Band::Nir, Band::Red],
        }
    }

    /// NDWI is the only product allowed to be skipped when its bands are
    /// absent from the scene; every other product aborts the run instead.
    pub const fn is_optional(self) -> bool {
        matches!(self, Product::Ndwi)
    }
}

impl std::fmt::Display for Product {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Product::Ndvi => "NDVI",
            Product::Ndbi => "NDBI",
            Product::Nbr => "NBR",
            Product::Ndwi => "NDWI",
            Product::Bt => "BT",
            Product::Emissivity => "Emissivity",
            Product::Lst => "LST",
        };
        write!(f, "{}", s)
    }
}
