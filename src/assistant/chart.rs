//! Mock Chart Synthesis
//!
//! Builds the coin card shown in reply to chart and analysis requests.
//! Every number here is a random placeholder; nothing is fetched or computed
//! from market history.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of bars in a price chart
pub const BAR_COUNT: usize = 20;

/// Which card to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    Price,
    Analysis,
}

impl ChartKind {
    /// Caption for the AI message carrying the card
    pub fn caption(&self, symbol: &str) -> String {
        match self {
            ChartKind::Price => format!("Here's the price chart for ${}:", symbol),
            ChartKind::Analysis => format!("Here's the technical analysis for ${}:", symbol),
        }
    }

    /// Small print under the card
    pub fn footnote(&self) -> &'static str {
        match self {
            ChartKind::Price => "Data shown is from the last 24 hours. Chart updates every 15 minutes.",
            ChartKind::Analysis => {
                "Technical indicators suggest monitoring for potential entry points. Volatility remains high."
            }
        }
    }
}

/// One bar of the price chart, height in percent of the chart area
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartBar {
    pub height: f64,
    pub positive: bool,
}

/// Trading signal shown in the analysis panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Hold,
}

impl std::fmt::Display for Signal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Signal::Buy => write!(f, "BUY"),
            Signal::Hold => write!(f, "HOLD"),
        }
    }
}

/// Placeholder technical indicators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalIndicators {
    pub rsi: u32,
    pub rsi_positive: bool,
    pub macd: f64,
    pub macd_positive: bool,
    pub volume: f64,
    pub ma50: f64,
    pub ma200: f64,
    pub signal: Signal,
    pub signal_positive: bool,
}

/// Coin card payload attached to an AI chat message
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinSnapshot {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change_24h: f64,
    pub kind: ChartKind,
    pub bars: Vec<ChartBar>,
    pub indicators: TechnicalIndicators,
}

impl CoinSnapshot {
    pub fn is_up(&self) -> bool {
        self.change_24h >= 0.0
    }

    /// Signed change text, e.g. `+3.20%` or `-1.05%`
    pub fn change_label(&self) -> String {
        let sign = if self.is_up() { "+" } else { "" };
        format!("{}{:.2}%", sign, self.change_24h)
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Generate a chart card for `symbol`.
///
/// `symbol` is expected upper-case already. Bars and indicators are produced
/// for both kinds so the card can be flipped without regenerating.
pub fn generate_snapshot<R: Rng + ?Sized>(symbol: &str, kind: ChartKind, rng: &mut R) -> CoinSnapshot {
    let price = round2(rng.random_range(0.0..1000.0));
    let change_24h = round2(rng.random_range(-10.0..10.0));

    let bars = (0..BAR_COUNT)
        .map(|_| ChartBar {
            height: 30.0 + rng.random_range(0.0..60.0),
            positive: rng.random_bool(0.6),
        })
        .collect();

    let indicators = generate_indicators(price, rng);

    CoinSnapshot {
        symbol: symbol.to_string(),
        name: format!("{} Coin", symbol),
        price,
        change_24h,
        kind,
        bars,
        indicators,
    }
}

fn generate_indicators<R: Rng + ?Sized>(price: f64, rng: &mut R) -> TechnicalIndicators {
    TechnicalIndicators {
        rsi: rng.random_range(0..100),
        rsi_positive: rng.random_bool(0.5),
        macd: round2(rng.random_range(-1.0..1.0)),
        macd_positive: rng.random_bool(0.5),
        volume: rng.random_range(0.0..10_000_000.0),
        ma50: price * (1.0 + rng.random_range(-0.05..0.05)),
        ma200: price * (1.0 + rng.random_range(-0.1..0.1)),
        signal: if rng.random_bool(0.5) { Signal::Buy } else { Signal::Hold },
        signal_positive: rng.random_bool(0.5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_snapshot_ranges() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..50 {
            let snap = generate_snapshot("BTC", ChartKind::Price, &mut rng);

            assert_eq!(snap.name, "BTC Coin");
            assert!((0.0..=1000.0).contains(&snap.price));
            assert!((-10.0..=10.0).contains(&snap.change_24h));
            assert_eq!(snap.bars.len(), BAR_COUNT);
            assert!(snap.bars.iter().all(|b| (30.0..90.0).contains(&b.height)));

            let ind = &snap.indicators;
            assert!(ind.rsi < 100);
            assert!((-1.0..=1.0).contains(&ind.macd));
            assert!(ind.volume < 10_000_000.0);
            assert!(ind.ma50 >= snap.price * 0.95 - 1e-9 && ind.ma50 <= snap.price * 1.05 + 1e-9);
            assert!(ind.ma200 >= snap.price * 0.9 - 1e-9 && ind.ma200 <= snap.price * 1.1 + 1e-9);
        }
    }

    #[test]
    fn test_prices_rounded_to_cents() {
        let mut rng = StdRng::seed_from_u64(42);
        let snap = generate_snapshot("SOL", ChartKind::Analysis, &mut rng);

        assert_eq!(round2(snap.price), snap.price);
        assert_eq!(round2(snap.change_24h), snap.change_24h);
        assert_eq!(round2(snap.indicators.macd), snap.indicators.macd);
    }

    #[test]
    fn test_seeded_generation_is_repeatable() {
        let a = generate_snapshot("ETH", ChartKind::Price, &mut StdRng::seed_from_u64(1));
        let b = generate_snapshot("ETH", ChartKind::Price, &mut StdRng::seed_from_u64(1));
        assert_eq!(a, b);
    }

    #[test]
    fn test_captions() {
        assert_eq!(ChartKind::Price.caption("BTC"), "Here's the price chart for $BTC:");
        assert_eq!(
            ChartKind::Analysis.caption("ETH"),
            "Here's the technical analysis for $ETH:"
        );
    }

    #[test]
    fn test_change_label() {
        let mut snap = generate_snapshot("X", ChartKind::Price, &mut StdRng::seed_from_u64(3));
        snap.change_24h = 3.2;
        assert_eq!(snap.change_label(), "+3.20%");
        snap.change_24h = -1.05;
        assert_eq!(snap.change_label(), "-1.05%");
    }

    #[test]
    fn test_signal_serializes_uppercase() {
        assert_eq!(serde_json::to_string(&Signal::Buy).unwrap(), "\"BUY\"");
        assert_eq!(Signal::Hold.to_string(), "HOLD");
    }
}
