//! Intent Detection
//!
//! Decides whether a chat message asks for a coin chart, a technical
//! analysis, or should go to the completion API as a normal conversation.
//!
//! Recognized forms (case-insensitive):
//!
//! - `show me $BTC`, `show me $BTC chart`, `get $sol price`
//! - `display $ETH technical analysis`, `show me $ETH analysis`

use regex::Regex;
use std::sync::OnceLock;

/// What the user is asking for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Price chart for a symbol
    Chart { symbol: String },
    /// Technical indicator panel for a symbol
    Analysis { symbol: String },
    /// Anything else, answered by the completion API
    Conversation,
}

impl Intent {
    /// Symbol the intent refers to, if any
    pub fn symbol(&self) -> Option<&str> {
        match self {
            Intent::Chart { symbol } | Intent::Analysis { symbol } => Some(symbol),
            Intent::Conversation => None,
        }
    }

    pub fn is_chart_request(&self) -> bool {
        !matches!(self, Intent::Conversation)
    }
}

// Both patterns are literals; test_patterns_compile forces them.
fn chart_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"(?i)(?:show|display|get)\s+(?:me\s+)?\$([A-Za-z0-9]+)(?:\s+chart|\s+price)?")
            .expect("chart pattern is valid")
    })
}

fn analysis_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"(?i)(?:show|display|get)\s+(?:me\s+)?\$([A-Za-z0-9]+)(?:\s+technical\s+analysis|\s+analysis)",
        )
        .expect("analysis pattern is valid")
    })
}

fn capture_symbol<'t>(pattern: &Regex, text: &'t str) -> Option<&'t str> {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Classify a chat message.
///
/// The chart pattern's suffix is optional, so any `show $X` request matches
/// it; the analysis pattern only decides the kind of reply.
pub fn detect_intent(text: &str) -> Intent {
    let chart_symbol = capture_symbol(chart_pattern(), text);
    let analysis_symbol = capture_symbol(analysis_pattern(), text);
    let is_analysis = analysis_symbol.is_some();

    let symbol = match chart_symbol.or(analysis_symbol) {
        Some(symbol) => symbol.to_uppercase(),
        None => return Intent::Conversation,
    };

    if is_analysis {
        Intent::Analysis { symbol }
    } else {
        Intent::Chart { symbol }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_patterns_compile() {
        assert!(chart_pattern().is_match("get $x"));
        assert!(analysis_pattern().is_match("get $x analysis"));
        assert!(!analysis_pattern().is_match("get $x chart"));
    }

    #[test]
    fn test_chart_request() {
        assert_eq!(
            detect_intent("show me $btc chart"),
            Intent::Chart { symbol: "BTC".to_string() }
        );
        assert_eq!(
            detect_intent("Get $sol price"),
            Intent::Chart { symbol: "SOL".to_string() }
        );
    }

    #[test]
    fn test_bare_symbol_is_chart() {
        assert_eq!(
            detect_intent("display $DOGE"),
            Intent::Chart { symbol: "DOGE".to_string() }
        );
    }

    #[test]
    fn test_analysis_request() {
        assert_eq!(
            detect_intent("show me $eth technical analysis"),
            Intent::Analysis { symbol: "ETH".to_string() }
        );
        assert_eq!(
            detect_intent("SHOW $Forza analysis please"),
            Intent::Analysis { symbol: "FORZA".to_string() }
        );
    }

    #[test]
    fn test_embedded_in_sentence() {
        let intent = detect_intent("hey, could you show me $ada chart?");
        assert_eq!(intent.symbol(), Some("ADA"));
        assert!(intent.is_chart_request());
    }

    #[test]
    fn test_conversation() {
        assert_eq!(detect_intent("How to buy Bitcoin?"), Intent::Conversation);
        assert_eq!(detect_intent("show me BTC chart"), Intent::Conversation);
        assert_eq!(detect_intent("what is $BTC"), Intent::Conversation);
        assert_eq!(detect_intent(""), Intent::Conversation);
    }
}
