use anyhow::Context;
use desk_config::DeskConfig;

/// Load `.env`, then the layered configuration.
pub fn load_config() -> anyhow::Result<DeskConfig> {
    let config = DeskConfig::load_with_dotenv().context("failed to load examdesk configuration")?;
    tracing::debug!(base_url = %config.api.base_url(), backend = ?config.session.backend, "configuration loaded");
    Ok(config)
}
