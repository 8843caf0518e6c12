//! HTTP server binary.
//!
//! Loads `~/.config/soulscape/config.toml` (or `$SOULSCAPE_CONFIG`), builds
//! the analyzer once and serves until Ctrl-C.

use soulscape::SoulscapeConfig;
use soulscape::analyzer::Analyzer;
use soulscape::config::CONFIG_ENV;
use soulscape::server::AnalysisServer;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = SoulscapeConfig::resolve_config_path(std::env::var_os(CONFIG_ENV));
    let mut config = SoulscapeConfig::load_or_default(&config_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    config.apply_port_override(std::env::var("PORT").ok().as_deref());

    let analyzer = Arc::new(Analyzer::from_config(&config)?);
    let server = AnalysisServer::start(analyzer, &config.server).await?;
    tracing::info!(addr = %server.addr(), "soulscape-server ready");

    tokio::signal::ctrl_c().await?;
    tracing::info!("shutting down");
    server.shutdown();
    Ok(())
}
