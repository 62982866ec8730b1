use screener_core::{
    RejectReason, ScreenOutcome, ScreenResult, StockCategory, StockMetrics, WatchlistEntry,
};

/// Price floor: penny-territory names are screened out.
pub const MIN_PRICE: f64 = 10.0;
/// Price ceiling.
pub const MAX_PRICE: f64 = 500.0;
/// Minimum average daily volume, in shares.
pub const MIN_AVG_VOLUME: f64 = 500_000.0;

/// Below this price an AI-chip name counts as reasonably valued.
const AI_CHIPS_VALUE_PRICE: f64 = 150.0;
/// 52-week position bands for the qualitative reasons.
const LOW_POSITION_PCT: f64 = 30.0;
const HIGH_POSITION_PCT: f64 = 80.0;

/// Apply the screening gates in fixed order; the first failing gate
/// rejects with its own reason. Passers get an ordered, non-empty list
/// of recommendation reasons.
pub fn screen(entry: &WatchlistEntry, metrics: &StockMetrics) -> ScreenOutcome {
    if metrics.current_price < MIN_PRICE {
        return ScreenOutcome::Reject(RejectReason::PriceTooLow(metrics.current_price));
    }
    if metrics.current_price > MAX_PRICE {
        return ScreenOutcome::Reject(RejectReason::PriceTooHigh(metrics.current_price));
    }
    if metrics.avg_volume < MIN_AVG_VOLUME {
        return ScreenOutcome::Reject(RejectReason::VolumeTooLow(metrics.avg_volume));
    }

    let mut reasons = Vec::new();
    if let Some(reason) = category_reason(&entry.category, metrics.current_price) {
        reasons.push(reason.to_string());
    }
    reasons.push(position_reason(metrics.position_52w));

    if reasons.is_empty() {
        // Unreachable today (a position reason always fires); kept so a
        // passing result can never carry an empty reason list.
        reasons.push("Meets baseline screening criteria".to_string());
    }

    ScreenOutcome::Pass(ScreenResult {
        entry: entry.clone(),
        metrics: metrics.clone(),
        reasons,
    })
}

/// Static category -> recommendation statement table. `AiChips` picks the
/// valuation-specific line below the price threshold; unrecognized tags
/// contribute nothing.
fn category_reason(category: &StockCategory, current_price: f64) -> Option<&'static str> {
    match category {
        StockCategory::AiChips if current_price < AI_CHIPS_VALUE_PRICE => {
            Some("AI chip leader trading at a relatively reasonable valuation")
        }
        StockCategory::AiChips => Some("AI chip leader, the core compute source for robotics"),
        StockCategory::IndustrialAutomation => {
            Some("Industrial automation beneficiary with a clear smart-manufacturing trend")
        }
        StockCategory::MachineVision => {
            Some("Machine vision is the eyes of robotics, demand growth is well supported")
        }
        StockCategory::MedicalRobotics => {
            Some("Medical robotics penetration still has substantial room to grow")
        }
        StockCategory::HomeRobotics => {
            Some("Household service robot adoption still has room to expand")
        }
        StockCategory::Other(_) => None,
    }
}

/// Exactly one of the three bands fires for any position value.
fn position_reason(position_52w: f64) -> String {
    if position_52w < LOW_POSITION_PCT {
        format!(
            "Price sits in the lower 52-week range ({:.0}%)",
            position_52w
        )
    } else if position_52w > HIGH_POSITION_PCT {
        format!(
            "Price is near its 52-week high ({:.0}%), watch the risk",
            position_52w
        )
    } else {
        format!(
            "Price is mid-range over 52 weeks ({:.0}%), a reasonable position",
            position_52w
        )
    }
}
