//! Read-only content endpoints: services, case studies, posts,
//! testimonials, team.

use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;

use crate::transport::http::handlers::common::{not_found, ok};
use crate::transport::http::types::{
    ApiResponse, AppState, CaseStudyListParams, PostListParams, TestimonialListParams,
};

#[utoipa::path(
    get,
    path = "/api/services",
    responses((status = 200, description = "All service offerings", body = ApiResponse))
)]
pub async fn list_services_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.content.services().await)
}

#[utoipa::path(
    get,
    path = "/api/services/{slug}",
    params(("slug" = String, Path, description = "Service slug")),
    responses(
        (status = 200, description = "Service detail", body = ApiResponse),
        (status = 404, description = "Unknown slug", body = ApiResponse)
    )
)]
pub async fn get_service_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    match state.content.service_by_slug(&slug).await {
        Some(service) => ok(service).into_response(),
        None => not_found("service", &slug).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/case-studies",
    params(
        ("service" = Option<String>, Query, description = "Filter by associated service tag"),
        ("industry" = Option<String>, Query, description = "Filter by industry")
    ),
    responses((status = 200, description = "Case studies, optionally filtered", body = ApiResponse))
)]
pub async fn list_case_studies_handler(
    State(state): State<AppState>,
    Query(params): Query<CaseStudyListParams>,
) -> impl IntoResponse {
    let case_studies = match (&params.service, &params.industry) {
        (Some(service), _) => state.content.case_studies_by_service(service).await,
        (None, Some(industry)) => state.content.case_studies_by_industry(industry).await,
        (None, None) => state.content.case_studies().await,
    };
    ok(case_studies)
}

#[utoipa::path(
    get,
    path = "/api/case-studies/{slug}",
    params(("slug" = String, Path, description = "Case study slug")),
    responses(
        (status = 200, description = "Case study detail", body = ApiResponse),
        (status = 404, description = "Unknown slug", body = ApiResponse)
    )
)]
pub async fn get_case_study_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    match state.content.case_study_by_slug(&slug).await {
        Some(case_study) => ok(case_study).into_response(),
        None => not_found("case study", &slug).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/posts",
    params(
        ("category" = Option<String>, Query, description = "Filter by category"),
        ("tag" = Option<String>, Query, description = "Filter by tag"),
        ("featured" = Option<bool>, Query, description = "Only the featured posts")
    ),
    responses((status = 200, description = "Posts, newest first", body = ApiResponse))
)]
pub async fn list_posts_handler(
    State(state): State<AppState>,
    Query(params): Query<PostListParams>,
) -> impl IntoResponse {
    let posts = if params.featured {
        state.content.featured_blog_posts().await
    } else if let Some(category) = &params.category {
        state.content.blog_posts_by_category(category).await
    } else if let Some(tag) = &params.tag {
        state.content.blog_posts_by_tag(tag).await
    } else {
        state.content.blog_posts().await
    };
    ok(posts)
}

#[utoipa::path(
    get,
    path = "/api/posts/{slug}",
    params(("slug" = String, Path, description = "Post slug")),
    responses(
        (status = 200, description = "Post detail", body = ApiResponse),
        (status = 404, description = "Unknown slug", body = ApiResponse)
    )
)]
pub async fn get_post_handler(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> impl IntoResponse {
    match state.content.blog_post_by_slug(&slug).await {
        Some(post) => ok(post).into_response(),
        None => not_found("post", &slug).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/api/testimonials",
    params(
        ("service" = Option<String>, Query, description = "Filter by associated service tag"),
        ("featured" = Option<bool>, Query, description = "Only five-star testimonials"),
        ("limit" = Option<usize>, Query, description = "Cap for the featured subset (default 3)")
    ),
    responses((status = 200, description = "Testimonials, newest first", body = ApiResponse))
)]
pub async fn list_testimonials_handler(
    State(state): State<AppState>,
    Query(params): Query<TestimonialListParams>,
) -> impl IntoResponse {
    let testimonials = if params.featured {
        state.content.featured_testimonials(params.limit).await
    } else if let Some(service) = &params.service {
        state.content.testimonials_by_service(service).await
    } else {
        state.content.testimonials().await
    };
    ok(testimonials)
}

#[utoipa::path(
    get,
    path = "/api/team",
    responses((status = 200, description = "Team members", body = ApiResponse))
)]
pub async fn list_team_handler(State(state): State<AppState>) -> impl IntoResponse {
    ok(state.content.team_members().await)
}
