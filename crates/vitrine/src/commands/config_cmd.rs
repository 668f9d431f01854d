//! Config subcommand handlers.

use std::fmt::Write as _;

use crate::cli::{ConfigArgs, ConfigCommand, GlobalOpts};
use crate::config::{self, Config};
use crate::error::CliError;
use crate::output;

/// Format config for display, masking the token.
fn format_config_redacted(config: &Config) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "site_url = \"{}\"", config.site_url);
    if config.token.is_some() {
        let _ = writeln!(out, "token = \"****\"");
    }
    let _ = writeln!(out, "timeout_secs = {}", config.timeout_secs);
    let _ = write!(out, "advance_interval_ms = {}", config.advance_interval_ms);
    out
}

pub fn handle(args: ConfigArgs, global: &GlobalOpts) -> Result<(), CliError> {
    match args.command {
        ConfigCommand::Show => {
            let config = config::resolve(global)?;
            output::print_output(&format_config_redacted(&config), global.quiet);
            Ok(())
        }

        ConfigCommand::Path => {
            let path = config::config_path()?;
            output::print_output(&path.display().to_string(), global.quiet);
            Ok(())
        }

        ConfigCommand::Set { key, value } => {
            let path = config::config_path()?;
            let mut config = config::load_config()?;
            apply_set(&mut config, &key, &value)?;
            config::save_config(&config, &path)?;
            if !global.quiet {
                eprintln!("Updated {key}");
            }
            Ok(())
        }
    }
}

fn apply_set(config: &mut Config, key: &str, value: &str) -> Result<(), CliError> {
    let parse_u64 = |field: &str| {
        value.parse::<u64>().map_err(|_| CliError::Validation {
            field: field.to_owned(),
            reason: format!("expected a number, got '{value}'"),
        })
    };

    match key {
        "site_url" => {
            config.site_url = value.to_owned();
            config.parsed_site_url()?;
        }
        "timeout_secs" => config.timeout_secs = parse_u64("timeout_secs")?,
        "advance_interval_ms" => config.advance_interval_ms = parse_u64("advance_interval_ms")?,
        other => {
            return Err(CliError::Validation {
                field: "key".into(),
                reason: format!(
                    "unknown key '{other}' (expected site_url, timeout_secs, or advance_interval_ms)"
                ),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn set_validates_keys_and_values() {
        let mut config = Config::default();
        apply_set(&mut config, "timeout_secs", "10").unwrap();
        assert_eq!(config.timeout_secs, 10);
        assert!(apply_set(&mut config, "timeout_secs", "soon").is_err());
        assert!(apply_set(&mut config, "site_url", "not a url").is_err());
        assert!(apply_set(&mut config, "token", "abc").is_err());
    }

    #[test]
    fn show_masks_the_token() {
        let config = Config {
            token: Some("super-secret".into()),
            ..Config::default()
        };
        let shown = format_config_redacted(&config);
        assert!(shown.contains("token = \"****\""));
        assert!(!shown.contains("super-secret"));
    }
}
