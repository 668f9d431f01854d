//! CLI configuration — thin wrapper around `vitrine_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--site-url, --token, --timeout).

use vitrine_api::{SiteClient, SiteClientBuilder};

use crate::cli::GlobalOpts;
use crate::error::CliError;

pub use vitrine_config::{Config, config_path, load_config, save_config};

/// Loaded config with global flag overrides applied on top.
pub fn resolve(global: &GlobalOpts) -> Result<Config, CliError> {
    let mut config = load_config()?;
    if let Some(url) = &global.site_url {
        config.site_url.clone_from(url);
    }
    if let Some(token) = &global.token {
        config.token = Some(token.clone());
    }
    if let Some(timeout) = global.timeout {
        config.timeout_secs = timeout;
    }
    config.parsed_site_url()?;
    Ok(config)
}

/// Build an API client from resolved configuration. Takes the token out of
/// the config so the plain copy doesn't linger.
pub fn build_client(config: &mut Config) -> Result<SiteClient, CliError> {
    let client = SiteClientBuilder::new(config.site_url.clone())
        .timeout(config.timeout())
        .token(config.take_token())
        .build()?;
    Ok(client)
}

/// Whether a token is available, deciding if unpublished events can be
/// requested.
pub fn has_token(config: &Config) -> bool {
    config.token.is_some()
}
