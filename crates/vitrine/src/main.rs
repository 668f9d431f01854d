//! `vitrine` binary entry point.

mod cli;
mod commands;
mod config;
mod error;
mod output;

use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

#[tokio::main]
async fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.global.verbose, cli.global.quiet);

    match cli.command {
        Command::Events(args) => {
            let mut config = config::resolve(&cli.global)?;
            let has_token = config::has_token(&config);
            let client = config::build_client(&mut config)?;
            commands::events::handle(&client, args, &cli.global, has_token).await?;
        }

        Command::Next => {
            let mut config = config::resolve(&cli.global)?;
            let client = config::build_client(&mut config)?;
            commands::next::handle(&client, &cli.global).await?;
        }

        Command::Config(args) => commands::config_cmd::handle(args, &cli.global)?,

        Command::Completions(args) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_owned();
            clap_complete::generate(args.shell, &mut cmd, name, &mut std::io::stdout());
        }
    }

    Ok(())
}

/// Verbosity to tracing filter: warnings by default, `-v` info, `-vv`
/// debug, `-vvv` trace, `-q` errors only. `RUST_LOG` still wins when set.
fn init_tracing(verbose: u8, quiet: bool) {
    let default = match verbose {
        _ if quiet => "error",
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("vitrine={default},vitrine_core={default},vitrine_api={default}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
