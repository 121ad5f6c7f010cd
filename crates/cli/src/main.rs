//! SafeBuild - Site Safety Advisor Entry Point

use clap::Parser;
use safebuild::{init_logging, run, Cli, Settings};
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let settings = Settings::load(cli.config.as_deref())?;
    init_logging(&settings.log_level)?;

    info!("=== SafeBuild v{} ===", env!("CARGO_PKG_VERSION"));

    run(cli, settings)?;
    Ok(())
}
