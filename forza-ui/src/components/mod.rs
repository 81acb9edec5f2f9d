//! UI Components
//!
//! Reusable Leptos components shared by the pages.

pub mod area_chart;
pub mod coin_card;
pub mod footer;
pub mod header;
pub mod loading;
pub mod market;
pub mod sections;
pub mod toast;

pub use coin_card::CoinCard;
pub use footer::Footer;
pub use header::Header;
pub use loading::{InlineLoading, Loading, TypingIndicator};
pub use market::MarketSection;
pub use sections::{AssistantSection, FeaturesSection, Hero, UtilitiesSection};
pub use toast::Toast;
