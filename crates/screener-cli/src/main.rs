use std::sync::Arc;

use alpaca_data::AlpacaDataClient;
use anyhow::Result;
use report_builder::{render_report, write_dated_report};
use screener_orchestrator::WatchlistScreener;

mod config;
mod watchlist;

use config::ScreenerConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env, init tracing
    dotenvy::dotenv().ok();

    let json_logging = std::env::var("RUST_LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);
    if json_logging {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
            )
            .init();
    }

    let config = ScreenerConfig::from_env()?;
    let client = AlpacaDataClient::from_env()?;

    tracing::info!("Starting robotics stock screener");
    tracing::info!("Data endpoint: {}", client.base_url());

    let watchlist = watchlist::load(&config.watchlist_path)?;
    tracing::info!("Loaded watch-list: {} symbols", watchlist.len());

    let screener = WatchlistScreener::new(Arc::new(client));
    let summary = screener.run(&watchlist).await;

    if summary.results.is_empty() {
        tracing::info!("No qualifying stocks, report not written");
        return Ok(());
    }

    let generated_at = chrono::Utc::now();
    let markdown = render_report(summary.results, generated_at);
    let path = write_dated_report(&config.report_dir, &markdown, generated_at.date_naive())?;
    tracing::info!("Report written to {}", path.display());

    Ok(())
}
