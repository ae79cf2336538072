use clap::Parser;
use std::path::PathBuf;

use lstpro::Product;

#[derive(Parser)]
#[command(name = "lstpro", version, about = "LSTPRO CLI")]
pub struct CliArgs {
    /// Scene directory containing the MTL file and per-band rasters
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output directory for corrected bands and derived products
    #[arg(short, long)]
    pub output_dir: PathBuf,

    /// Products to derive (comma-separated); defaults to the full set
    #[arg(long, value_enum, value_delimiter = ',')]
    pub products: Vec<Product>,

    /// Skip writing per-band TOA radiance rasters
    #[arg(long, default_value_t = false)]
    pub no_radiance: bool,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}
