//! data-playground command line entry point

use anyhow::Result;
use clap::Parser;
use data_playground::cli::{self, Cli};
use data_playground::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG overrides the configured filter
    let settings = cli::effective_settings(&cli);
    init_logging(&settings.log_filter);

    let output = cli::run(cli)?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
