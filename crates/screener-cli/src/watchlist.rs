use screener_core::{ScreenerError, WatchlistEntry};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Watch-list document shape: `{"stocks": [...]}`.
#[derive(Debug, Deserialize)]
struct WatchlistDocument {
    stocks: Vec<WatchlistEntry>,
}

/// Load the watch-list. Any failure here is fatal to the run: the screen
/// cannot proceed without its configured universe.
pub fn load(path: &Path) -> Result<Vec<WatchlistEntry>, ScreenerError> {
    let raw = fs::read_to_string(path)
        .map_err(|e| ScreenerError::WatchlistLoad(format!("{}: {}", path.display(), e)))?;
    parse(&raw).map_err(|e| ScreenerError::WatchlistLoad(format!("{}: {}", path.display(), e)))
}

fn parse(raw: &str) -> Result<Vec<WatchlistEntry>, serde_json::Error> {
    let doc: WatchlistDocument = serde_json::from_str(raw)?;
    Ok(doc.stocks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use screener_core::StockCategory;

    #[test]
    fn parses_pool_document() {
        let stocks = parse(
            r#"{
                "stocks": [
                    {
                        "symbol": "NVDA",
                        "name": "NVIDIA",
                        "category": "AI chips",
                        "description": "GPU platforms for robot training and inference"
                    },
                    {
                        "symbol": "ISRG",
                        "name": "Intuitive Surgical",
                        "category": "medical robotics",
                        "description": "Robotic-assisted surgical systems"
                    }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(stocks.len(), 2);
        assert_eq!(stocks[0].symbol, "NVDA");
        assert_eq!(stocks[0].category, StockCategory::AiChips);
        assert_eq!(stocks[1].category, StockCategory::MedicalRobotics);
    }

    #[test]
    fn malformed_document_is_an_error() {
        assert!(parse("{\"stocks\": [{\"symbol\": 42}]}").is_err());
        assert!(parse("not json").is_err());
    }

    #[test]
    fn missing_file_is_a_watchlist_load_error() {
        let err = load(Path::new("/nonexistent/watchlist.json")).unwrap_err();
        assert!(matches!(err, ScreenerError::WatchlistLoad(_)));
    }
}
