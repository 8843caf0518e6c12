//! Headless host bridge binary for stdin/stdout JSON communication.
//!
//! Reads `{"id", "text"}` requests as newline-delimited JSON from stdin and
//! writes one response line per request to stdout. Config lookup matches
//! `soulscape-server`: `$SOULSCAPE_CONFIG`, then the default path.
//!
//! All tracing/diagnostic output goes to stderr so that stdout remains a
//! clean JSON protocol channel.

use soulscape::SoulscapeConfig;
use soulscape::analyzer::Analyzer;
use soulscape::config::CONFIG_ENV;
use soulscape::host::stdio::run_stdio_bridge;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = SoulscapeConfig::resolve_config_path(std::env::var_os(CONFIG_ENV));
    let config = SoulscapeConfig::load_or_default(&config_path)?;

    // Initialise tracing to stderr only (stdout is reserved for the JSON
    // protocol).
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.logging.filter)),
        )
        .init();

    tracing::info!("soulscape-host starting");

    let analyzer = Analyzer::from_config(&config)?;
    let stats = run_stdio_bridge(&analyzer).await.map_err(|e| {
        tracing::error!(error = %e, "soulscape-host exited with error");
        anyhow::anyhow!("soulscape-host failed: {e}")
    })?;

    tracing::info!(
        answered = stats.answered,
        failed = stats.failed,
        "soulscape-host shut down cleanly"
    );
    Ok(())
}
