//! Pages
//!
//! Top-level page components for each route.

pub mod chat;
pub mod code_explainer;
pub mod home;
pub mod login;
pub mod sections;

pub use chat::ChatPage;
pub use code_explainer::CodeExplainerPage;
pub use home::HomePage;
pub use login::LoginPage;
pub use sections::{FeaturesPage, MarketDataPage, NotFound, UtilitiesPage};
