//! Market Routes
//!
//! - GET /api/v1/market?q= - Sample rows, optionally filtered
//! - GET /api/v1/market/:symbol - One row with its monthly series

use axum::{
    extract::{Path, Query},
    Json,
};

use crate::api::dto::{AssetDetailResponse, MarketListResponse, MarketQuery};
use crate::api::error::{ApiError, ApiResult};
use crate::market::{filter_assets, find_asset, series_for};

/// GET /api/v1/market
pub async fn list_assets(Query(query): Query<MarketQuery>) -> Json<MarketListResponse> {
    let assets = filter_assets(query.q.as_deref().unwrap_or_default());

    Json(MarketListResponse {
        total: assets.len(),
        assets,
    })
}

/// GET /api/v1/market/:symbol
pub async fn get_asset(Path(symbol): Path<String>) -> ApiResult<Json<AssetDetailResponse>> {
    let asset = find_asset(&symbol)
        .ok_or_else(|| ApiError::NotFound(format!("Asset '{}' not found", symbol)))?;

    Ok(Json(AssetDetailResponse {
        series: series_for(&asset),
        asset,
    }))
}
