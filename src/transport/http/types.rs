use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use utoipa::ToSchema;

use crate::app::ContentService;
use crate::infra::captcha::CaptchaVerifier;
use crate::infra::mail::Mailer;

#[derive(Clone)]
pub struct AppState {
    pub content: ContentService,
    pub captcha: Arc<dyn CaptchaVerifier>,
    pub mailer: Arc<dyn Mailer>,
}

#[derive(Serialize, Debug, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Object)]
    pub data: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Contact form submission (camelCase on the wire, matching the site's
/// form payload). Every field deserializes as optional so that presence
/// validation can answer 400 with the missing requirement named, instead
/// of a generic deserialization rejection.
#[derive(Deserialize, Debug, ToSchema)]
pub struct SendEmailRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default)]
    pub service: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "captchaToken")]
    pub captcha_token: Option<String>,
}

/// Project inquiry submission from the "start a project" form.
#[derive(Deserialize, Debug, ToSchema)]
pub struct SendProjectDetailsRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(rename = "projectType")]
    pub project_type: Option<String>,
    pub budget: Option<String>,
    pub timeline: Option<String>,
    pub description: Option<String>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct CaseStudyListParams {
    pub service: Option<String>,
    pub industry: Option<String>,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct PostListParams {
    pub category: Option<String>,
    pub tag: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct TestimonialListParams {
    pub service: Option<String>,
    #[serde(default)]
    pub featured: bool,
    pub limit: Option<usize>,
}

pub fn json_400(err: JsonRejection) -> (StatusCode, Json<ApiResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse {
            success: false,
            data: None,
            error: Some(format!("Invalid JSON body: {}", err)),
        }),
    )
}
