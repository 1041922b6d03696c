use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use crate::transport::http::types::{ApiResponse, AppState};

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (content store loaded)", body = ApiResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    // The store is immutable and loaded before the server binds, so a
    // reachable process is a healthy one; the counts double as a sanity
    // readout of what was loaded.
    let stats = state.content.statistics().await;
    (
        StatusCode::OK,
        Json(ApiResponse {
            success: true,
            data: Some(serde_json::json!({
                "status": "ok",
                "case_studies": stats.case_studies_count,
                "testimonials": stats.testimonials_count,
            })),
            error: None,
        }),
    )
}
