//! Market Data
//!
//! Static sample rows for the market table. Nothing here is live.

mod assets;
mod format;

pub use assets::{filter_assets, find_asset, sample_assets, series_for, MarketAsset, SeriesPoint};
pub use format::{format_change, format_usd};
