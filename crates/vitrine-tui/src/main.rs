//! vitrine-tui — terminal spotlight and agenda for the association's events.

mod action;
mod app;
mod data_bridge;
mod event;
mod screen;
mod screens;
mod theme;
mod tui;
mod widgets;

use std::sync::Arc;

use color_eyre::eyre::{Result, eyre};
use directories::ProjectDirs;
use tracing::info;
use tracing_subscriber::EnvFilter;

use vitrine_api::SiteClientBuilder;
use vitrine_config::load_config;
use vitrine_core::EventFeed;

use crate::app::App;

/// Log to a file in the platform data directory. The terminal belongs to
/// ratatui while the app runs, so stderr is not an option.
fn init_logging() -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let dirs = ProjectDirs::from("org", "vitrine", "vitrine")
        .ok_or_else(|| eyre!("could not determine a data directory for logs"))?;
    let log_dir = dirs.data_local_dir();
    std::fs::create_dir_all(log_dir)?;

    let appender = tracing_appender::rolling::never(log_dir, "vitrine-tui.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _log_guard = init_logging()?;

    let mut config = load_config()?;
    info!(site_url = %config.site_url, "starting vitrine-tui");

    let token = config.take_token();
    let include_unpublished = token.is_some();
    let client = SiteClientBuilder::new(&config.site_url)
        .token(token)
        .timeout(config.timeout())
        .build()?;

    let feed = Arc::new(EventFeed::new(client, include_unpublished));

    App::new(feed, config.advance_interval()).run().await
}
