use anyhow::Result;
use std::env;
use std::path::PathBuf;

/// Runtime configuration for the screener binary. Alpaca credentials are
/// resolved separately by `AlpacaDataClient::from_env`.
#[derive(Debug, Clone)]
pub struct ScreenerConfig {
    pub watchlist_path: PathBuf,
    pub report_dir: PathBuf,
}

impl ScreenerConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            watchlist_path: env::var("WATCHLIST_PATH")
                .unwrap_or_else(|_| "data/watchlist.json".to_string())
                .into(),
            report_dir: env::var("REPORT_DIR")
                .unwrap_or_else(|_| "output".to_string())
                .into(),
        })
    }
}
