use tracing::info;

use lstpro::ProcessingParams;
use lstpro::api::process_scene_to_path;

use super::args::CliArgs;

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    let mut params = ProcessingParams::default();
    if !args.products.is_empty() {
        params.products = args.products.clone();
    }
    params.write_radiance = !args.no_radiance;

    info!("processing scene: {:?}", args.input);
    let report = process_scene_to_path(&args.input, &args.output_dir, &params)?;

    println!(
        "Corrected {} band(s), skipped {}.",
        report.corrected_bands.len(),
        report.skipped_bands.len()
    );
    for summary in &report.products {
        match summary.stats {
            Some(s) => println!("{}: min = {:.2}, max = {:.2}", summary.product, s.min, s.max),
            None => println!("{}: no valid pixels", summary.product),
        }
    }

    Ok(())
}
