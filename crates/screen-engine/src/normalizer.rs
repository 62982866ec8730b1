use screener_core::{RawSnapshot, StockMetrics};

/// Convert a raw vendor snapshot into canonical metrics.
///
/// Returns `None` only when neither a latest trade price nor a daily
/// close is available; every other missing field degrades to a
/// documented default, so a partial payload never fails.
pub fn normalize(raw: &RawSnapshot) -> Option<StockMetrics> {
    let daily = raw.daily_bar.clone().unwrap_or_default();

    let current_price = raw
        .latest_trade_price
        .filter(|p| *p > 0.0)
        .or_else(|| daily.close.filter(|c| *c > 0.0))?;

    // Degenerate single-point range when the bar's own extremes are missing.
    let high_52w = daily.high.unwrap_or(current_price);
    let low_52w = daily.low.unwrap_or(current_price);

    let avg_volume = if raw.history.is_empty() {
        0.0
    } else {
        let total: f64 = raw
            .history
            .iter()
            .map(|bar| bar.volume.unwrap_or(0.0))
            .sum();
        total / raw.history.len() as f64
    };

    // One-day change from the previous daily close; 0 when unavailable.
    let day_change_pct = raw
        .prev_daily_bar
        .as_ref()
        .and_then(|bar| bar.close)
        .filter(|close| *close != 0.0)
        .map(|prev_close| (current_price - prev_close) / prev_close * 100.0)
        .unwrap_or(0.0);

    // Neutral midpoint when the range is degenerate.
    let position_52w = if high_52w > low_52w {
        (current_price - low_52w) / (high_52w - low_52w) * 100.0
    } else {
        50.0
    };

    Some(StockMetrics {
        current_price,
        high_52w,
        low_52w,
        position_52w,
        avg_volume,
        day_change_pct,
    })
}
