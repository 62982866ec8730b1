use serde::{Deserialize, Serialize};

/// Watch-list category tag. The screen keys its qualitative
/// recommendations off this closed set; tags it does not recognize are
/// preserved as `Other` and still go through the numeric gates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockCategory {
    AiChips,
    IndustrialAutomation,
    MachineVision,
    MedicalRobotics,
    HomeRobotics,
    Other(String),
}

impl StockCategory {
    pub fn as_str(&self) -> &str {
        match self {
            StockCategory::AiChips => "AI chips",
            StockCategory::IndustrialAutomation => "industrial automation",
            StockCategory::MachineVision => "machine vision",
            StockCategory::MedicalRobotics => "medical robotics",
            StockCategory::HomeRobotics => "home robotics",
            StockCategory::Other(s) => s,
        }
    }
}

impl From<String> for StockCategory {
    fn from(s: String) -> Self {
        match s.as_str() {
            "AI chips" => StockCategory::AiChips,
            "industrial automation" => StockCategory::IndustrialAutomation,
            "machine vision" => StockCategory::MachineVision,
            "medical robotics" => StockCategory::MedicalRobotics,
            "home robotics" => StockCategory::HomeRobotics,
            _ => StockCategory::Other(s),
        }
    }
}

impl From<StockCategory> for String {
    fn from(category: StockCategory) -> Self {
        category.as_str().to_string()
    }
}

/// One configured symbol in the watch-list document. Loaded once per run,
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WatchlistEntry {
    pub symbol: String,
    pub name: String,
    pub category: StockCategory,
    pub description: String,
}

/// Vendor daily OHLCV bar. Every field is optional: the vendor omits
/// fields for thin sessions and partial snapshots, and the normalizer
/// supplies the documented defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DailyBar {
    pub open: Option<f64>,
    pub high: Option<f64>,
    pub low: Option<f64>,
    pub close: Option<f64>,
    pub volume: Option<f64>,
}

/// Point-in-time market data bundle for one symbol: the snapshot endpoint
/// fields plus a trailing window of daily bars for volume averaging.
/// Fetched fresh per symbol, never persisted.
#[derive(Debug, Clone, Default)]
pub struct RawSnapshot {
    pub latest_trade_price: Option<f64>,
    pub daily_bar: Option<DailyBar>,
    pub prev_daily_bar: Option<DailyBar>,
    pub history: Vec<DailyBar>,
}

/// Canonical per-symbol metrics derived from a `RawSnapshot`.
///
/// The 52-week range is approximated from the latest daily bar rather
/// than a full year of history, so `low_52w <= current_price` does not
/// always hold. `position_52w` is exactly 50 for a degenerate range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StockMetrics {
    pub current_price: f64,
    pub high_52w: f64,
    pub low_52w: f64,
    /// Where the current price sits inside the high/low range, 0-100.
    pub position_52w: f64,
    pub avg_volume: f64,
    /// One-day percentage change from the previous daily close.
    pub day_change_pct: f64,
}

/// Why a symbol failed a screening gate. One variant per gate so the
/// orchestrator can log a distinct reason for every skip.
#[derive(Debug, Clone, PartialEq)]
pub enum RejectReason {
    PriceTooLow(f64),
    PriceTooHigh(f64),
    VolumeTooLow(f64),
}

impl std::fmt::Display for RejectReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RejectReason::PriceTooLow(price) => write!(f, "price too low (${:.2})", price),
            RejectReason::PriceTooHigh(price) => write!(f, "price too high (${:.2})", price),
            RejectReason::VolumeTooLow(volume) => write!(f, "volume too low ({:.0})", volume),
        }
    }
}

/// Screening decision for one symbol.
#[derive(Debug, Clone)]
pub enum ScreenOutcome {
    Pass(ScreenResult),
    Reject(RejectReason),
}

/// A symbol that passed every gate, with the metrics it passed on and an
/// ordered, non-empty list of recommendation reasons. Created by the
/// screen engine, consumed once by the report builder.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenResult {
    pub entry: WatchlistEntry,
    pub metrics: StockMetrics,
    pub reasons: Vec<String>,
}
