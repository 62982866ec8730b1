use screener_core::{DailyBar, RawSnapshot};
use serde::Deserialize;

/// `GET /v2/stocks/{symbol}/snapshot` payload. Field names follow the
/// vendor's camelCase / single-letter wire format.
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    #[serde(rename = "latestTrade")]
    pub latest_trade: Option<TradeWire>,
    #[serde(rename = "dailyBar")]
    pub daily_bar: Option<BarWire>,
    #[serde(rename = "prevDailyBar")]
    pub prev_daily_bar: Option<BarWire>,
}

/// Latest trade inside a snapshot.
#[derive(Debug, Clone, Deserialize)]
pub struct TradeWire {
    #[serde(rename = "p")]
    pub price: Option<f64>,
}

/// One OHLCV bar on the wire.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct BarWire {
    #[serde(rename = "o")]
    pub open: Option<f64>,
    #[serde(rename = "h")]
    pub high: Option<f64>,
    #[serde(rename = "l")]
    pub low: Option<f64>,
    #[serde(rename = "c")]
    pub close: Option<f64>,
    #[serde(rename = "v")]
    pub volume: Option<f64>,
}

/// `GET /v2/stocks/{symbol}/bars` payload. `bars` is null when the
/// window holds no sessions; `next_page_token` signals bars beyond the
/// requested page, which this client does not follow.
#[derive(Debug, Clone, Deserialize)]
pub struct BarsResponse {
    #[serde(default)]
    pub bars: Option<Vec<BarWire>>,
    pub symbol: Option<String>,
    pub next_page_token: Option<String>,
}

impl From<BarWire> for DailyBar {
    fn from(bar: BarWire) -> Self {
        DailyBar {
            open: bar.open,
            high: bar.high,
            low: bar.low,
            close: bar.close,
            volume: bar.volume,
        }
    }
}

impl Snapshot {
    /// Combine the snapshot fields with a separately fetched bar history
    /// into the canonical per-symbol bundle.
    pub fn into_raw(self, history: Vec<DailyBar>) -> RawSnapshot {
        RawSnapshot {
            latest_trade_price: self.latest_trade.and_then(|t| t.price),
            daily_bar: self.daily_bar.map(Into::into),
            prev_daily_bar: self.prev_daily_bar.map(Into::into),
            history,
        }
    }
}
