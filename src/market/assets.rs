//! Sample Assets
//!
//! Hard-coded market rows and monthly price series shown on the site.

use serde::{Deserialize, Serialize};

/// One row of the market table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketAsset {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    /// 24h change in percent
    pub change: f64,
    pub market_cap: f64,
    pub volume: f64,
    #[serde(default)]
    pub highlight: bool,
}

impl MarketAsset {
    fn new(id: &str, name: &str, symbol: &str, price: f64, change: f64, market_cap: f64, volume: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            symbol: symbol.to_string(),
            price,
            change,
            market_cap,
            volume,
            highlight: false,
        }
    }

    fn highlighted(mut self) -> Self {
        self.highlight = true;
        self
    }

    pub fn is_up(&self) -> bool {
        self.change > 0.0
    }
}

/// A point on the monthly price chart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

const MONTHS: [&str; 8] = ["Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug"];

/// Multipliers of the current price for assets without a recorded series
const FALLBACK_SHAPE: [f64; 8] = [0.7, 0.8, 0.75, 0.85, 0.9, 0.95, 0.98, 1.0];

/// The eight sample rows, in display order
pub fn sample_assets() -> Vec<MarketAsset> {
    vec![
        MarketAsset::new("btc", "Bitcoin", "BTC", 61245.82, 2.54, 1_198_432_687_423.0, 28_765_345_987.0),
        MarketAsset::new("eth", "Ethereum", "ETH", 3324.17, -0.87, 398_754_321_654.0, 15_432_789_654.0),
        MarketAsset::new("sol", "Solana", "SOL", 129.35, 5.67, 52_457_896_321.0, 5_678_912_345.0),
        MarketAsset::new("bnb", "Binance Coin", "BNB", 584.21, 1.23, 89_765_432_123.0, 3_421_567_890.0),
        MarketAsset::new("ada", "Cardano", "ADA", 0.58, -2.18, 20_123_456_789.0, 1_234_567_890.0),
        MarketAsset::new("xrp", "XRP", "XRP", 0.58, 3.42, 30_876_543_210.0, 2_345_678_901.0),
        MarketAsset::new("doge", "Dogecoin", "DOGE", 0.15, -1.24, 19_876_543_210.0, 1_987_654_321.0),
        MarketAsset::new("forza", "Forza", "FORZA", 0.042, 12.74, 4_200_000_000.0, 1_234_567_890.0)
            .highlighted(),
    ]
}

/// Rows whose name or symbol contains `query`, ignoring case
pub fn filter_assets(query: &str) -> Vec<MarketAsset> {
    let needle = query.trim().to_lowercase();
    sample_assets()
        .into_iter()
        .filter(|asset| {
            needle.is_empty()
                || asset.name.to_lowercase().contains(&needle)
                || asset.symbol.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Look up a row by symbol or id
pub fn find_asset(key: &str) -> Option<MarketAsset> {
    let key = key.trim().to_lowercase();
    sample_assets()
        .into_iter()
        .find(|asset| asset.symbol.to_lowercase() == key || asset.id == key)
}

fn recorded_series(name: &str) -> Option<[f64; 8]> {
    let values = match name {
        "bitcoin" => [42000.0, 39000.0, 45000.0, 52000.0, 49000.0, 55000.0, 58000.0, 61000.0],
        "ethereum" => [3200.0, 2800.0, 3100.0, 3500.0, 3300.0, 3600.0, 3400.0, 3324.0],
        "solana" => [100.0, 90.0, 110.0, 120.0, 105.0, 115.0, 125.0, 129.0],
        "binance coin" => [500.0, 480.0, 520.0, 540.0, 530.0, 550.0, 570.0, 584.0],
        "cardano" => [0.55, 0.52, 0.57, 0.60, 0.56, 0.59, 0.61, 0.58],
        "xrp" => [0.50, 0.48, 0.52, 0.54, 0.51, 0.55, 0.56, 0.58],
        "dogecoin" => [0.14, 0.13, 0.15, 0.16, 0.14, 0.15, 0.16, 0.15],
        "forza" => [0.020, 0.022, 0.025, 0.030, 0.033, 0.036, 0.038, 0.042],
        _ => return None,
    };
    Some(values)
}

/// Monthly series for the detail chart.
///
/// Falls back to a curve ending at the current price when no series is
/// recorded for the asset's name.
pub fn series_for(asset: &MarketAsset) -> Vec<SeriesPoint> {
    let values = recorded_series(&asset.name.to_lowercase())
        .unwrap_or_else(|| FALLBACK_SHAPE.map(|factor| asset.price * factor));

    MONTHS
        .iter()
        .zip(values)
        .map(|(label, value)| SeriesPoint {
            label: label.to_string(),
            value,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_rows() {
        let assets = sample_assets();
        assert_eq!(assets.len(), 8);
        assert_eq!(assets[0].symbol, "BTC");

        let highlighted: Vec<_> = assets.iter().filter(|a| a.highlight).collect();
        assert_eq!(highlighted.len(), 1);
        assert_eq!(highlighted[0].symbol, "FORZA");
    }

    #[test]
    fn test_filter_matches_name_or_symbol() {
        let names: Vec<_> = filter_assets("coin").into_iter().map(|a| a.symbol).collect();
        assert_eq!(names, vec!["BTC", "BNB", "DOGE"]);

        assert_eq!(filter_assets("SOL")[0].name, "Solana");
        assert_eq!(filter_assets("xr").len(), 1);
        assert!(filter_assets("nothing").is_empty());
    }

    #[test]
    fn test_empty_filter_keeps_order() {
        assert_eq!(filter_assets(""), sample_assets());
        assert_eq!(filter_assets("   ").len(), 8);
    }

    #[test]
    fn test_find_asset() {
        assert_eq!(find_asset("eth").unwrap().name, "Ethereum");
        assert_eq!(find_asset("DOGE").unwrap().id, "doge");
        assert!(find_asset("ltc").is_none());
    }

    #[test]
    fn test_recorded_series() {
        let btc = find_asset("btc").unwrap();
        let series = series_for(&btc);
        assert_eq!(series.len(), 8);
        assert_eq!(series[0], SeriesPoint { label: "Jan".into(), value: 42000.0 });
        assert_eq!(series[7].value, 61000.0);
    }

    #[test]
    fn test_fallback_series_ends_at_price() {
        let mut asset = find_asset("sol").unwrap();
        asset.name = "Unlisted".to_string();
        asset.price = 200.0;

        let values: Vec<f64> = series_for(&asset).into_iter().map(|p| p.value).collect();
        assert!((values[0] - 140.0).abs() < 1e-9);
        assert_eq!(values[7], 200.0);
    }
}
