pub mod client;
pub mod models;

pub use client::AlpacaDataClient;
pub use models::{BarWire, BarsResponse, Snapshot, TradeWire};
