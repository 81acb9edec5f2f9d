//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.

use serde::{Deserialize, Serialize};

use crate::assistant::{ChatMessage, Language};
use crate::market::{MarketAsset, SeriesPoint};

// ============================================
// CHAT DTOs
// ============================================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    /// Text the user just sent
    pub message: String,
    /// Messages shown before it, greeting included
    #[serde(default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub message: ChatMessage,
}

#[derive(Debug, Serialize)]
pub struct SuggestionsResponse {
    pub suggestions: Vec<String>,
}

// ============================================
// EXPLAINER DTOs
// ============================================

#[derive(Debug, Deserialize)]
pub struct ExplainRequest {
    pub code: String,
    /// Language value or label; JavaScript when omitted
    #[serde(default)]
    pub language: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ExplainResponse {
    pub explanation: String,
    pub language: Language,
}

#[derive(Debug, Serialize)]
pub struct LanguageInfo {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Serialize)]
pub struct LanguagesResponse {
    pub languages: Vec<LanguageInfo>,
    pub default: Language,
}

// ============================================
// MARKET DTOs
// ============================================

#[derive(Debug, Default, Deserialize)]
pub struct MarketQuery {
    #[serde(default)]
    pub q: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MarketListResponse {
    pub assets: Vec<MarketAsset>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct AssetDetailResponse {
    pub asset: MarketAsset,
    pub series: Vec<SeriesPoint>,
}

// ============================================
// HEALTH DTOs
// ============================================

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub uptime_seconds: u64,
    pub version: String,
    /// Completion API base URL in use
    pub nexra: String,
}
