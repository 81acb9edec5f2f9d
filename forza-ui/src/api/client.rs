//! HTTP API Client
//!
//! Functions for communicating with the Forza server.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

use crate::state::chat::ChatMessage;

/// Default API base URL (same origin as the UI)
pub const DEFAULT_API_BASE: &str = "/api/v1";

const API_URL_KEY: &str = "forza_api_url";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Response Types ============

#[derive(Debug, serde::Deserialize)]
struct ChatResponse {
    message: ChatMessage,
}

#[derive(Debug, serde::Deserialize)]
struct ExplainResponse {
    explanation: String,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct LanguageOption {
    pub value: String,
    pub label: String,
}

#[derive(Debug, serde::Deserialize)]
struct LanguagesResponse {
    languages: Vec<LanguageOption>,
}

#[derive(Debug, serde::Deserialize)]
struct SuggestionsResponse {
    suggestions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct MarketAsset {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: f64,
    pub change: f64,
    pub market_cap: f64,
    pub volume: f64,
    #[serde(default)]
    pub highlight: bool,
}

impl MarketAsset {
    pub fn is_up(&self) -> bool {
        self.change > 0.0
    }
}

#[derive(Debug, serde::Deserialize)]
struct MarketListResponse {
    assets: Vec<MarketAsset>,
}

#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
pub struct SeriesPoint {
    pub label: String,
    pub value: f64,
}

#[derive(Debug, Clone, serde::Deserialize)]
pub struct AssetDetail {
    pub asset: MarketAsset,
    pub series: Vec<SeriesPoint>,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorDetail {
    message: String,
}

// ============ API Functions ============

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    if !response.ok() {
        let status = response.status();
        let error = response
            .json::<ApiErrorBody>()
            .await
            .map(|body| body.error.message)
            .unwrap_or_else(|_| format!("Request failed with status {}", status));
        return Err(error);
    }

    response.json().await.map_err(|e| format!("Parse error: {}", e))
}

async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let response = Request::get(&format!("{}{}", get_api_base(), path))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

async fn post_json<B: serde::Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let response = Request::post(&format!("{}{}", get_api_base(), path))
        .json(body)
        .map_err(|e| format!("Serialize error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    read_json(response).await
}

/// Send a chat message with the conversation so far
pub async fn send_chat(message: &str, history: &[ChatMessage]) -> Result<ChatMessage, String> {
    #[derive(serde::Serialize)]
    struct ChatRequest<'a> {
        message: &'a str,
        history: &'a [ChatMessage],
    }

    let result: ChatResponse = post_json("/chat", &ChatRequest { message, history }).await?;
    Ok(result.message)
}

/// Topic prompts for the chat sidebar
pub async fn fetch_suggestions() -> Result<Vec<String>, String> {
    let result: SuggestionsResponse = get_json("/suggestions").await?;
    Ok(result.suggestions)
}

/// Explain a code snippet
pub async fn explain_code(code: &str, language: &str) -> Result<String, String> {
    #[derive(serde::Serialize)]
    struct ExplainRequest<'a> {
        code: &'a str,
        language: &'a str,
    }

    let result: ExplainResponse = post_json("/explain", &ExplainRequest { code, language }).await?;
    Ok(result.explanation)
}

/// Languages offered in the explainer picker
pub async fn fetch_languages() -> Result<Vec<LanguageOption>, String> {
    let result: LanguagesResponse = get_json("/languages").await?;
    Ok(result.languages)
}

/// Market rows matching `query`
pub async fn fetch_market(query: &str) -> Result<Vec<MarketAsset>, String> {
    let path = if query.trim().is_empty() {
        "/market".to_string()
    } else {
        format!("/market?q={}", urlencoding::encode(query.trim()))
    };

    let result: MarketListResponse = get_json(&path).await?;
    Ok(result.assets)
}

/// One asset with its monthly series
pub async fn fetch_asset(symbol: &str) -> Result<AssetDetail, String> {
    get_json(&format!("/market/{}", urlencoding::encode(symbol))).await
}
