use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::api::ProductSummary;
use crate::error::Result;

#[derive(Serialize)]
struct RunReport<'a> {
    scene: String,
    generated: String,
    products: &'a [ProductSummary],
}

/// Write a JSON sidecar summarizing the run: which products were produced,
/// where they live, and their valid min/max. Purely informational.
pub fn write_run_report(
    output_path: &Path,
    scene_dir: &Path,
    products: &[ProductSummary],
) -> Result<()> {
    let report = RunReport {
        scene: scene_dir.display().to_string(),
        generated: chrono::Utc::now().to_rfc3339(),
        products,
    };
    let json = serde_json::to_string_pretty(&report)?;
    std::fs::write(output_path, json)?;
    info!("run report written to {}", output_path.display());
    Ok(())
}
