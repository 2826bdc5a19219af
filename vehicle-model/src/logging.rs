//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

use crate::config::ModelConfig;

/// Install a global fmt subscriber filtered by `filter` (EnvFilter syntax).
///
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install tracing subscriber: {}", e))
}

/// Install the subscriber using the configured log filter.
pub fn init_from_config(config: &ModelConfig) -> anyhow::Result<()> {
    init(&config.log_filter)
}
