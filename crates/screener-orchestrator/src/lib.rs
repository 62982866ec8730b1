use screen_engine::{normalize, screen};
use screener_core::{MarketDataProvider, ScreenOutcome, ScreenResult, WatchlistEntry};
use std::sync::Arc;

/// Outcome of one full watch-list pass: everything that qualified, plus
/// how many symbols were skipped (fetch failure, no data, or rejection).
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub results: Vec<ScreenResult>,
    pub skipped: usize,
}

pub struct WatchlistScreener {
    provider: Arc<dyn MarketDataProvider>,
}

impl WatchlistScreener {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Screen the watch-list strictly in listed order.
    ///
    /// Symbols are independent: a failed or rejected symbol is skipped
    /// and counted, with no retries, and the run moves on to the next
    /// entry.
    pub async fn run(&self, watchlist: &[WatchlistEntry]) -> RunSummary {
        let mut results = Vec::new();
        let mut skipped = 0usize;

        for entry in watchlist {
            tracing::info!("Analyzing {} - {}", entry.symbol, entry.name);

            let raw = match self.provider.fetch(&entry.symbol).await {
                Ok(raw) => raw,
                Err(e) => {
                    tracing::warn!("  {}: fetch failed: {}", entry.symbol, e);
                    skipped += 1;
                    continue;
                }
            };

            let metrics = match normalize(&raw) {
                Some(metrics) => metrics,
                None => {
                    tracing::info!("  {}: skipped, no usable price data", entry.symbol);
                    skipped += 1;
                    continue;
                }
            };

            match screen(entry, &metrics) {
                ScreenOutcome::Pass(result) => {
                    tracing::info!(
                        "  ✓ {} passed - ${:.2}, 52w position {:.0}%",
                        entry.symbol,
                        metrics.current_price,
                        metrics.position_52w
                    );
                    results.push(result);
                }
                ScreenOutcome::Reject(reason) => {
                    tracing::info!("  {}: skipped, {}", entry.symbol, reason);
                    skipped += 1;
                }
            }
        }

        tracing::info!(
            "Screen complete: {} qualified, {} skipped",
            results.len(),
            skipped
        );

        RunSummary { results, skipped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use screener_core::{DailyBar, RawSnapshot, ScreenerError, StockCategory};
    use std::collections::HashMap;

    struct FixtureProvider {
        snapshots: HashMap<String, RawSnapshot>,
    }

    impl FixtureProvider {
        fn new(snapshots: Vec<(&str, RawSnapshot)>) -> Arc<Self> {
            Arc::new(Self {
                snapshots: snapshots
                    .into_iter()
                    .map(|(symbol, raw)| (symbol.to_string(), raw))
                    .collect(),
            })
        }
    }

    #[async_trait]
    impl MarketDataProvider for FixtureProvider {
        async fn fetch(&self, symbol: &str) -> Result<RawSnapshot, ScreenerError> {
            self.snapshots
                .get(symbol)
                .cloned()
                .ok_or_else(|| ScreenerError::MarketData(format!("no data for {}", symbol)))
        }
    }

    fn entry(symbol: &str, category: StockCategory) -> WatchlistEntry {
        WatchlistEntry {
            symbol: symbol.to_string(),
            name: format!("{} Inc", symbol),
            category,
            description: "A test company".to_string(),
        }
    }

    fn snapshot(price: f64, high: f64, low: f64, prev_close: f64, volume: f64) -> RawSnapshot {
        RawSnapshot {
            latest_trade_price: Some(price),
            daily_bar: Some(DailyBar {
                open: None,
                high: Some(high),
                low: Some(low),
                close: Some(price),
                volume: Some(volume),
            }),
            prev_daily_bar: Some(DailyBar {
                close: Some(prev_close),
                ..Default::default()
            }),
            history: (0..10)
                .map(|_| DailyBar {
                    volume: Some(volume),
                    ..Default::default()
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn mid_range_machine_vision_symbol_passes() {
        let provider =
            FixtureProvider::new(vec![("X", snapshot(50.0, 100.0, 0.0, 49.0, 1_000_000.0))]);
        let screener = WatchlistScreener::new(provider);

        let summary = screener
            .run(&[entry("X", StockCategory::MachineVision)])
            .await;

        assert_eq!(summary.results.len(), 1);
        assert_eq!(summary.skipped, 0);

        let result = &summary.results[0];
        assert_eq!(result.metrics.position_52w, 50.0);
        assert!((result.metrics.day_change_pct - 2.0408163265306123).abs() < 1e-9);
        assert!(result.reasons.iter().any(|r| r.contains("Machine vision")));
        assert!(result.reasons.iter().any(|r| r.contains("mid-range")));
    }

    #[tokio::test]
    async fn below_floor_price_is_skipped() {
        let provider =
            FixtureProvider::new(vec![("PENNY", snapshot(5.0, 10.0, 1.0, 5.0, 1_000_000.0))]);
        let screener = WatchlistScreener::new(provider);

        let summary = screener
            .run(&[entry("PENNY", StockCategory::HomeRobotics)])
            .await;

        assert!(summary.results.is_empty());
        assert_eq!(summary.skipped, 1);
    }

    #[tokio::test]
    async fn thin_volume_is_skipped_with_passing_price() {
        let provider =
            FixtureProvider::new(vec![("THIN", snapshot(50.0, 100.0, 0.0, 49.0, 100_000.0))]);
        let screener = WatchlistScreener::new(provider);

        let summary = screener
            .run(&[entry("THIN", StockCategory::MachineVision)])
            .await;

        assert!(summary.results.is_empty());
        assert_eq!(summary.skipped, 1);
    }

    #[tokio::test]
    async fn fetch_failure_skips_only_that_symbol() {
        let provider =
            FixtureProvider::new(vec![("GOOD", snapshot(50.0, 100.0, 0.0, 49.0, 1_000_000.0))]);
        let screener = WatchlistScreener::new(provider);

        let summary = screener
            .run(&[
                entry("MISSING", StockCategory::AiChips),
                entry("GOOD", StockCategory::MachineVision),
            ])
            .await;

        assert_eq!(summary.results.len(), 1);
        assert_eq!(summary.results[0].entry.symbol, "GOOD");
        assert_eq!(summary.skipped, 1);
    }

    #[tokio::test]
    async fn snapshot_without_prices_counts_as_skipped() {
        let provider = FixtureProvider::new(vec![("EMPTY", RawSnapshot::default())]);
        let screener = WatchlistScreener::new(provider);

        let summary = screener
            .run(&[entry("EMPTY", StockCategory::MedicalRobotics)])
            .await;

        assert!(summary.results.is_empty());
        assert_eq!(summary.skipped, 1);
    }

    #[tokio::test]
    async fn results_keep_watchlist_fetch_order() {
        let provider = FixtureProvider::new(vec![
            ("A", snapshot(50.0, 100.0, 0.0, 49.0, 1_000_000.0)),
            ("B", snapshot(60.0, 100.0, 0.0, 59.0, 1_000_000.0)),
        ]);
        let screener = WatchlistScreener::new(provider);

        let summary = screener
            .run(&[
                entry("A", StockCategory::MachineVision),
                entry("B", StockCategory::MachineVision),
            ])
            .await;

        let symbols: Vec<&str> = summary
            .results
            .iter()
            .map(|r| r.entry.symbol.as_str())
            .collect();
        assert_eq!(symbols, vec!["A", "B"]);
    }
}
