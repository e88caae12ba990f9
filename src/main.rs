use anyhow::{Context, Result};
use costcheck::config::Config;
use costcheck::logging::init_logging;
use costcheck::report::build_report;
use std::io::Write;
use tracing::{info, warn};

fn main() -> Result<()> {
    let config = Config::load().context("Failed to load configuration")?;
    config.validate().context("Invalid configuration")?;

    init_logging(&config.logging).map_err(|e| anyhow::anyhow!("Failed to init logging: {}", e))?;
    info!("costcheck {} starting", env!("APP_VERSION"));

    let report = build_report(&config);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write!(out, "{}", report)?;
    out.flush()?;

    if report.matches_expected {
        info!("Diagnostic complete");
    } else {
        warn!("Diagnostic complete; string sample did not match the expected total");
    }
    Ok(())
}
