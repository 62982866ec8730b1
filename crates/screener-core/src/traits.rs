use crate::{RawSnapshot, ScreenerError};
use async_trait::async_trait;

/// Seam to the market-data vendor. One call per symbol, returning the
/// snapshot fields plus the trailing daily bars used for volume
/// averaging. Implementations decide which partial failures degrade to
/// missing fields and which surface as `ScreenerError::MarketData`.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    async fn fetch(&self, symbol: &str) -> Result<RawSnapshot, ScreenerError>;
}
