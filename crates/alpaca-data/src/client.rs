use crate::models::{BarsResponse, Snapshot};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{Duration, Utc};
use reqwest::{header, Client};
use screener_core::{DailyBar, MarketDataProvider, RawSnapshot, ScreenerError};

/// Trailing window the volume average is computed over.
const BARS_WINDOW_DAYS: i64 = 100;
const BARS_LIMIT: u32 = 100;

pub struct AlpacaDataClient {
    client: Client,
    base_url: String,
    api_key: String,
    secret_key: String,
}

impl AlpacaDataClient {
    /// Create a new market data client
    pub fn new(api_key: String, secret_key: String, base_url: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(15))
            .build()?;

        Ok(Self {
            client,
            base_url,
            api_key,
            secret_key,
        })
    }

    /// Create client from environment variables.
    /// Accepts both APCA_API_KEY_ID / APCA_API_SECRET_KEY (standard Alpaca names)
    /// and ALPACA_API_KEY / ALPACA_SECRET_KEY as fallbacks.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("APCA_API_KEY_ID")
            .or_else(|_| std::env::var("ALPACA_API_KEY"))
            .map_err(|_| anyhow!("APCA_API_KEY_ID (or ALPACA_API_KEY) not set"))?;
        let secret_key = std::env::var("APCA_API_SECRET_KEY")
            .or_else(|_| std::env::var("ALPACA_SECRET_KEY"))
            .map_err(|_| anyhow!("APCA_API_SECRET_KEY (or ALPACA_SECRET_KEY) not set"))?;
        let base_url = std::env::var("ALPACA_DATA_URL")
            .unwrap_or_else(|_| "https://data.alpaca.markets".to_string());

        Self::new(api_key, secret_key, base_url)
    }

    /// Get authorization headers
    fn auth_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            "APCA-API-KEY-ID",
            header::HeaderValue::from_str(&self.api_key)
                .expect("API key contains invalid header characters"),
        );
        headers.insert(
            "APCA-API-SECRET-KEY",
            header::HeaderValue::from_str(&self.secret_key)
                .expect("Secret key contains invalid header characters"),
        );
        headers
    }

    /// Get the snapshot for a symbol (latest trade, today's bar, previous
    /// daily bar).
    pub async fn get_snapshot(&self, symbol: &str) -> Result<Snapshot, ScreenerError> {
        let url = format!("{}/v2/stocks/{}/snapshot", self.base_url, symbol);

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers())
            .send()
            .await
            .map_err(|e| ScreenerError::MarketData(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ScreenerError::MarketData(format!(
                "Snapshot HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        response
            .json::<Snapshot>()
            .await
            .map_err(|e| ScreenerError::MarketData(e.to_string()))
    }

    /// Get the trailing daily bars used for volume averaging.
    pub async fn get_daily_bars(&self, symbol: &str) -> Result<Vec<DailyBar>, ScreenerError> {
        let url = format!("{}/v2/stocks/{}/bars", self.base_url, symbol);
        let start = (Utc::now() - Duration::days(BARS_WINDOW_DAYS)).to_rfc3339();
        let limit = BARS_LIMIT.to_string();

        let response = self
            .client
            .get(&url)
            .headers(self.auth_headers())
            .query(&[
                ("timeframe", "1Day"),
                ("start", start.as_str()),
                ("limit", limit.as_str()),
            ])
            .send()
            .await
            .map_err(|e| ScreenerError::MarketData(e.to_string()))?;

        if !response.status().is_success() {
            return Err(ScreenerError::MarketData(format!(
                "Bars HTTP {}: {}",
                response.status(),
                response.text().await.unwrap_or_default()
            )));
        }

        let body: BarsResponse = response
            .json()
            .await
            .map_err(|e| ScreenerError::MarketData(e.to_string()))?;

        if body.next_page_token.is_some() {
            tracing::debug!(
                "{}: more bars available beyond the {}-bar page, not fetched",
                symbol,
                BARS_LIMIT
            );
        }

        Ok(body
            .bars
            .unwrap_or_default()
            .into_iter()
            .map(Into::into)
            .collect())
    }

    /// Get the base URL (for logging/diagnostics)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl MarketDataProvider for AlpacaDataClient {
    async fn fetch(&self, symbol: &str) -> Result<RawSnapshot, ScreenerError> {
        let snapshot = self.get_snapshot(symbol).await?;

        // A bars miss degrades to an empty history (average volume 0);
        // only the snapshot call decides whether the symbol has data.
        let history = match self.get_daily_bars(symbol).await {
            Ok(bars) => bars,
            Err(e) => {
                tracing::warn!("{}: daily bars unavailable: {}", symbol, e);
                Vec::new()
            }
        };

        Ok(snapshot.into_raw(history))
    }
}
