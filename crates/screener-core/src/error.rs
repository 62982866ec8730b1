use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScreenerError {
    /// Transport error or non-success status from the market-data vendor.
    /// Recovered per symbol: the orchestrator skips and keeps going.
    #[error("Market data error: {0}")]
    MarketData(String),

    /// The watch-list document is missing or malformed. Fatal before any
    /// symbol is processed.
    #[error("Watchlist load error: {0}")]
    WatchlistLoad(String),

    /// The report sink is unwritable. Fatal after processing; results were
    /// computed but could not be persisted.
    #[error("Report write error: {0}")]
    ReportWrite(#[from] std::io::Error),
}
