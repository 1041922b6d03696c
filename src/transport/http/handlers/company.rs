//! Company projections and the merged site statistics.

use axum::extract::{Query, State};
use axum::response::IntoResponse;

use crate::transport::http::handlers::common::ok;
use crate::transport::http::types::{ApiResponse, AppState, SearchParams};

#[utoipa::path(
    get,
    path = "/api/company",
    responses((status = 200, description = "Company identity and contact info", body = ApiResponse))
)]
pub async fn company_info_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.content.company_info().await)
}

#[utoipa::path(
    get,
    path = "/api/company/mission",
    responses((status = 200, description = "Mission copy", body = ApiResponse))
)]
pub async fn mission_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.content.mission().await)
}

#[utoipa::path(
    get,
    path = "/api/company/vision",
    responses((status = 200, description = "Vision copy", body = ApiResponse))
)]
pub async fn vision_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.content.vision().await)
}

#[utoipa::path(
    get,
    path = "/api/company/values",
    responses((status = 200, description = "Core values", body = ApiResponse))
)]
pub async fn values_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.content.core_values().await)
}

#[utoipa::path(
    get,
    path = "/api/company/process",
    responses((status = 200, description = "Delivery process steps", body = ApiResponse))
)]
pub async fn process_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.content.process_steps().await)
}

#[utoipa::path(
    get,
    path = "/api/company/features",
    responses((status = 200, description = "Feature highlights", body = ApiResponse))
)]
pub async fn features_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.content.company_features().await)
}

#[utoipa::path(
    get,
    path = "/api/statistics",
    responses((status = 200, description = "Display metrics plus live collection counts", body = ApiResponse))
)]
pub async fn statistics_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.content.statistics().await)
}

#[utoipa::path(
    get,
    path = "/api/search",
    params(("q" = String, Query, description = "Free-text query; empty matches everything")),
    responses((status = 200, description = "Per-collection match arrays", body = ApiResponse))
)]
pub async fn search_handler(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> impl IntoResponse {
    ok(state.content.search(&params.q).await)
}
