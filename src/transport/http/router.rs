use crate::transport::http::handlers::{catalog, company, contact, health};
use crate::transport::http::types::{
    ApiResponse, CaseStudyListParams, PostListParams, SearchParams, SendEmailRequest,
    SendProjectDetailsRequest, TestimonialListParams,
};
use axum::routing::{get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        catalog::list_services_handler,
        catalog::get_service_handler,
        catalog::list_case_studies_handler,
        catalog::get_case_study_handler,
        catalog::list_posts_handler,
        catalog::get_post_handler,
        catalog::list_testimonials_handler,
        catalog::list_team_handler,
        company::company_info_handler,
        company::mission_handler,
        company::vision_handler,
        company::values_handler,
        company::process_handler,
        company::features_handler,
        company::statistics_handler,
        company::search_handler,
        contact::send_email_handler,
        contact::send_project_details_handler
    ),
    components(schemas(
        ApiResponse,
        SendEmailRequest,
        SendProjectDetailsRequest,
        SearchParams,
        CaseStudyListParams,
        PostListParams,
        TestimonialListParams
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: crate::transport::http::types::AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route("/api/services", get(catalog::list_services_handler))
        .route("/api/services/:slug", get(catalog::get_service_handler))
        .route("/api/case-studies", get(catalog::list_case_studies_handler))
        .route("/api/case-studies/:slug", get(catalog::get_case_study_handler))
        .route("/api/posts", get(catalog::list_posts_handler))
        .route("/api/posts/:slug", get(catalog::get_post_handler))
        .route("/api/testimonials", get(catalog::list_testimonials_handler))
        .route("/api/team", get(catalog::list_team_handler))
        .route("/api/company", get(company::company_info_handler))
        .route("/api/company/mission", get(company::mission_handler))
        .route("/api/company/vision", get(company::vision_handler))
        .route("/api/company/values", get(company::values_handler))
        .route("/api/company/process", get(company::process_handler))
        .route("/api/company/features", get(company::features_handler))
        .route("/api/statistics", get(company::statistics_handler))
        .route("/api/search", get(company::search_handler))
        .route("/api/send-email", post(contact::send_email_handler))
        .route(
            "/api/send-project-details",
            post(contact::send_project_details_handler),
        )
        .with_state(app_state)
}
