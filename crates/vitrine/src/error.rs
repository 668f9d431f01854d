//! CLI error type with miette diagnostics.

use miette::Diagnostic;
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    #[error("configuration error")]
    #[diagnostic(code(vitrine::config), help("run `vitrine config show` to inspect the active configuration"))]
    Config(#[from] vitrine_config::ConfigError),

    #[error("API request failed")]
    #[diagnostic(code(vitrine::api))]
    Api(#[from] vitrine_api::Error),

    #[error("invalid value for {field}: {reason}")]
    #[diagnostic(code(vitrine::validation))]
    Validation { field: String, reason: String },
}
