//! Deterministic markdown rendering of screen results, plus the dated
//! file sink.

pub mod sink;

pub use sink::write_dated_report;

use chrono::{DateTime, Utc};
use screener_core::ScreenResult;

const DATA_SOURCE: &str = "Alpaca Market Data API";

/// Render the ranked markdown report.
///
/// Results are ordered by ascending 52-week position (stable, so ties
/// keep fetch order); the output is fully determined by the results and
/// the timestamp.
pub fn render_report(mut results: Vec<ScreenResult>, generated_at: DateTime<Utc>) -> String {
    results.sort_by(|a, b| {
        a.metrics
            .position_52w
            .partial_cmp(&b.metrics.position_52w)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut out = String::new();
    out.push_str("# Robotics Stock Screen Report\n\n");
    out.push_str(&format!(
        "**Generated**: {}\n\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str(&format!("**Data source**: {}\n\n", DATA_SOURCE));
    out.push_str("**Screening criteria**:\n");
    out.push_str("- Price range: $10 - $500\n");
    out.push_str("- Average daily volume: > 500,000 shares\n\n");

    out.push_str("## Overview\n\n");
    out.push_str(&format!(
        "{} robotics stocks passed the screen\n\n",
        results.len()
    ));

    out.push_str(
        "| Symbol | Name | Category | Price | Daily Change | 52w Position | Avg Volume |\n",
    );
    out.push_str(
        "|--------|------|----------|-------|--------------|--------------|------------|\n",
    );
    for result in &results {
        out.push_str(&format!(
            "| {} | {} | {} | ${:.2} | {:+.2}% | {:.0}% | {} |\n",
            result.entry.symbol,
            result.entry.name,
            result.entry.category.as_str(),
            result.metrics.current_price,
            result.metrics.day_change_pct,
            result.metrics.position_52w,
            format_thousands(result.metrics.avg_volume),
        ));
    }

    out.push_str("\n## Details\n\n");
    for (i, result) in results.iter().enumerate() {
        out.push_str(&format!(
            "### {}. {} - {}\n\n",
            i + 1,
            result.entry.symbol,
            result.entry.name
        ));
        out.push_str(&format!(
            "**Category**: {}\n\n",
            result.entry.category.as_str()
        ));
        out.push_str(&format!("**Company**: {}\n\n", result.entry.description));
        out.push_str(&format!(
            "**Current price**: ${:.2}\n\n",
            result.metrics.current_price
        ));
        out.push_str(&format!(
            "**52-week range**: ${:.2} - ${:.2}\n\n",
            result.metrics.low_52w, result.metrics.high_52w
        ));
        out.push_str(&format!(
            "**52-week position**: {:.0}%\n\n",
            result.metrics.position_52w
        ));
        out.push_str(&format!(
            "**Daily change**: {:+.2}%\n\n",
            result.metrics.day_change_pct
        ));
        out.push_str(&format!(
            "**Average daily volume**: {} shares\n\n",
            format_thousands(result.metrics.avg_volume)
        ));
        out.push_str("**Why it qualified**:\n");
        for reason in &result.reasons {
            out.push_str(&format!("- {}\n", reason));
        }
        out.push('\n');
    }

    out.push_str("---\n\n");
    out.push_str("*This report is for informational purposes only and is not investment advice.*\n");
    out
}

/// 1234567.8 -> "1,234,568" (rounded to whole shares).
fn format_thousands(value: f64) -> String {
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
