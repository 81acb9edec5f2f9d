//! Code Explainer Routes
//!
//! - POST /api/v1/explain - Explain a code snippet
//! - GET /api/v1/languages - Languages the explainer accepts

use axum::{extract::State, Json};
use std::sync::Arc;

use crate::api::dto::{ExplainRequest, ExplainResponse, LanguageInfo, LanguagesResponse};
use crate::api::error::ApiResult;
use crate::api::extract::ApiJson;
use crate::api::state::AppState;
use crate::assistant::Language;

/// POST /api/v1/explain
pub async fn explain_code(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ExplainRequest>,
) -> ApiResult<Json<ExplainResponse>> {
    let language = match req.language.as_deref() {
        Some(name) => name.parse::<Language>()?,
        None => Language::default(),
    };

    let explanation = state.explainer.explain(&req.code, language).await?;

    Ok(Json(ExplainResponse {
        explanation,
        language,
    }))
}

/// GET /api/v1/languages
pub async fn list_languages() -> Json<LanguagesResponse> {
    let languages = Language::ALL
        .iter()
        .map(|lang| LanguageInfo {
            value: lang.value().to_string(),
            label: lang.label().to_string(),
        })
        .collect();

    Json(LanguagesResponse {
        languages,
        default: Language::default(),
    })
}
