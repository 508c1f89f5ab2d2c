// src/pipeline/validate.rs

use crate::error::Result;
use crate::models::Config;

/// Validate configuration and report the effective values.
pub fn run_validate(config: &Config) -> Result<()> {
    log::info!("Validating configuration...");

    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {e}");
        return Err(e);
    }

    log::info!("✓ Config OK");
    log::info!("    User-Agent: {}", config.fetch.user_agent);
    log::info!("    Timeout: {}s", config.fetch.timeout_secs);
    log::info!("    Sort recent first: {}", config.fetch.sort_recent_first);
    log::info!("    Pretty output: {}", config.output.pretty);
    Ok(())
}
