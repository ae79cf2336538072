use serde::{Deserialize, Serialize};

use crate::types::Product;

/// Processing parameters suitable for config files and presets
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessingParams {
    /// Products to derive, in output order
    pub products: Vec<Product>,
    /// If true, persist every corrected band as `<radiance_prefix>_B<n>.TIF`
    pub write_radiance: bool,
    /// File-name prefix for persisted corrected bands
    pub radiance_prefix: String,
}

impl Default for ProcessingParams {
    fn default() -> Self {
        Self {
            products: vec![
                Product::Ndvi,
                Product::Ndbi,
                Product::Nbr,
                Product::Ndwi,
                Product::Bt,
                Product::Emissivity,
                Product::Lst,
            ],
            write_radiance: true,
            radiance_prefix: "TOA_Radiance".to_string(),
        }
    }
}
