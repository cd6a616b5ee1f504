use anyhow::{Context, Result};
use checklistgen::Config;
use log::error;

fn main() -> Result<()> {
    let config = Config::parse();
    let _logger = checklistgen::logging::init_logging(config.verbose)?;

    if let Err(err) = run(&config) {
        error!("{:#}", err);
        return Err(err);
    }

    Ok(())
}

fn run(config: &Config) -> Result<()> {
    config.validate().context("Invalid configuration")?;

    let summary = checklistgen::generate(config)?;

    println!(
        "Generated: {} ({} items)",
        summary.output.display(),
        summary.items
    );

    Ok(())
}
