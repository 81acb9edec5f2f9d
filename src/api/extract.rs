//! Request Extractors

use axum::extract::FromRequest;

use crate::api::error::ApiError;

/// `Json` body whose rejections use the API error envelope
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);
