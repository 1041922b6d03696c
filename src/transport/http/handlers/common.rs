use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;

use crate::transport::http::types::ApiResponse;

/// 200 envelope around any serializable payload.
pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: Some(serde_json::to_value(data).unwrap_or_default()),
            error: None,
        }),
    )
}

pub fn error(status: StatusCode, message: impl Into<String>) -> (StatusCode, Json<ApiResponse>) {
    (
        status,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(message.into()),
        }),
    )
}

/// Lookup miss: a not-found page state for the caller, never a 500.
pub fn not_found(what: &str, key: &str) -> (StatusCode, Json<ApiResponse>) {
    error(StatusCode::NOT_FOUND, format!("{} '{}' not found", what, key))
}
