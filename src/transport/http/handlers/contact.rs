//! Contact-form endpoints.
//!
//! Both are thin forwarding flows: sequential validation, then the
//! external collaborators. Upstream failures are logged with the raw
//! provider error and answered with a generic message; nothing is retried
//! or queued, so a dropped email on provider failure is accepted.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use tracing::{error, warn};

use crate::infra::mail::OutgoingEmail;
use crate::transport::http::handlers::common::{error as err_resp, ok};
use crate::transport::http::types::{
    json_400, ApiResponse, AppState, SendEmailRequest, SendProjectDetailsRequest,
};

const GENERIC_SEND_FAILURE: &str =
    "Failed to send your message. Please try again or email us directly.";

#[utoipa::path(
    post,
    path = "/api/send-email",
    request_body = SendEmailRequest,
    responses(
        (status = 200, description = "Message forwarded", body = ApiResponse),
        (status = 400, description = "Missing field or failed CAPTCHA", body = ApiResponse),
        (status = 500, description = "CAPTCHA service or email dispatch failure", body = ApiResponse)
    )
)]
pub async fn send_email_handler(
    State(state): State<AppState>,
    request: Result<Json<SendEmailRequest>, JsonRejection>,
) -> impl IntoResponse {
    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_400(e).into_response(),
    };

    let missing = missing_fields(&[
        ("name", &request.name),
        ("email", &request.email),
        ("message", &request.message),
    ]);
    if !missing.is_empty() {
        return err_resp(
            StatusCode::BAD_REQUEST,
            format!("Missing required field(s): {}", missing.join(", ")),
        )
        .into_response();
    }

    let token = match present(&request.captcha_token) {
        Some(t) => t,
        None => {
            return err_resp(StatusCode::BAD_REQUEST, "CAPTCHA token is required")
                .into_response()
        }
    };

    match state.captcha.verify(token).await {
        Ok(true) => {}
        Ok(false) => {
            warn!("contact form rejected: CAPTCHA verification returned non-success");
            return err_resp(StatusCode::BAD_REQUEST, "CAPTCHA verification failed")
                .into_response();
        }
        Err(e) => {
            error!(error = %e, "CAPTCHA verification unavailable");
            return err_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                "Unable to verify CAPTCHA. Please try again later.",
            )
            .into_response();
        }
    }

    // Presence was validated above.
    let name = request.name.as_deref().unwrap_or_default();
    let email = request.email.as_deref().unwrap_or_default();
    let message = request.message.as_deref().unwrap_or_default();

    let outgoing = match build_contact_email(
        name,
        email,
        request.subject.as_deref(),
        request.company.as_deref(),
        request.service.as_deref(),
        message,
    ) {
        Ok(m) => m,
        Err(resp) => return resp.into_response(),
    };

    match state.mailer.send(&outgoing).await {
        Ok(()) => ok(serde_json::json!({
            "message": "Your message has been sent. We'll get back to you soon."
        }))
        .into_response(),
        Err(e) => {
            error!(error = %e, "contact email dispatch failed");
            err_resp(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_SEND_FAILURE).into_response()
        }
    }
}

#[utoipa::path(
    post,
    path = "/api/send-project-details",
    request_body = SendProjectDetailsRequest,
    responses(
        (status = 200, description = "Inquiry forwarded", body = ApiResponse),
        (status = 400, description = "Missing field", body = ApiResponse),
        (status = 500, description = "Missing credentials or dispatch failure", body = ApiResponse)
    )
)]
pub async fn send_project_details_handler(
    State(state): State<AppState>,
    request: Result<Json<SendProjectDetailsRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Credentials are checked before anything else: without them this
    // endpoint cannot do its job, and no external call must be attempted.
    if let Err(e) = state.mailer.credentials_present() {
        error!(error = %e, "project inquiry endpoint misconfigured");
        return err_resp(
            StatusCode::INTERNAL_SERVER_ERROR,
            "The inquiry service is not available right now. Please email us directly.",
        )
        .into_response();
    }

    let Json(request) = match request {
        Ok(v) => v,
        Err(e) => return json_400(e).into_response(),
    };

    let missing = missing_fields(&[
        ("name", &request.name),
        ("email", &request.email),
        ("projectType", &request.project_type),
        ("budget", &request.budget),
        ("timeline", &request.timeline),
        ("description", &request.description),
    ]);
    if !missing.is_empty() {
        return err_resp(
            StatusCode::BAD_REQUEST,
            format!("Missing required field(s): {}", missing.join(", ")),
        )
        .into_response();
    }

    let outgoing = match build_project_email(&request) {
        Ok(m) => m,
        Err(resp) => return resp.into_response(),
    };

    match state.mailer.send(&outgoing).await {
        Ok(()) => ok(serde_json::json!({
            "message": "Thanks! Your project details were sent. We'll be in touch shortly."
        }))
        .into_response(),
        Err(e) => {
            error!(error = %e, "project inquiry dispatch failed");
            err_resp(StatusCode::INTERNAL_SERVER_ERROR, GENERIC_SEND_FAILURE).into_response()
        }
    }
}

/// Returns the names of fields that are absent or blank.
fn missing_fields(fields: &[(&'static str, &Option<String>)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| present(value).is_none())
        .map(|(name, _)| *name)
        .collect()
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn build_contact_email(
    name: &str,
    email: &str,
    subject: Option<&str>,
    company: Option<&str>,
    service: Option<&str>,
    message: &str,
) -> Result<OutgoingEmail, (StatusCode, Json<ApiResponse>)> {
    let (from, to) = sender_and_recipient()?;

    let mail_subject = match subject {
        Some(s) if !s.trim().is_empty() => format!("Contact form: {}", s.trim()),
        _ => format!("Contact form submission from {}", name),
    };

    let mut html = String::new();
    html.push_str("<h2>New contact form submission</h2>");
    push_row(&mut html, "Name", name);
    push_row(&mut html, "Email", email);
    if let Some(company) = company.map(str::trim).filter(|c| !c.is_empty()) {
        push_row(&mut html, "Company", company);
    }
    if let Some(service) = service.map(str::trim).filter(|s| !s.is_empty()) {
        push_row(&mut html, "Service of interest", service);
    }
    html.push_str(&format!(
        "<h3>Message</h3><p>{}</p>",
        escape_html(message).replace('\n', "<br>")
    ));

    Ok(OutgoingEmail {
        from,
        to,
        subject: mail_subject,
        html,
        reply_to: Some(email.to_string()),
    })
}

fn build_project_email(
    request: &SendProjectDetailsRequest,
) -> Result<OutgoingEmail, (StatusCode, Json<ApiResponse>)> {
    let (from, to) = sender_and_recipient()?;

    let name = request.name.as_deref().unwrap_or_default();
    let email = request.email.as_deref().unwrap_or_default();

    let mut html = String::new();
    html.push_str("<h2>New project inquiry</h2>");
    push_row(&mut html, "Name", name);
    push_row(&mut html, "Email", email);
    if let Some(phone) = present(&request.phone) {
        push_row(&mut html, "Phone", phone);
    }
    push_row(&mut html, "Project type", request.project_type.as_deref().unwrap_or_default());
    push_row(&mut html, "Budget", request.budget.as_deref().unwrap_or_default());
    push_row(&mut html, "Timeline", request.timeline.as_deref().unwrap_or_default());
    html.push_str(&format!(
        "<h3>Description</h3><p>{}</p>",
        escape_html(request.description.as_deref().unwrap_or_default()).replace('\n', "<br>")
    ));

    Ok(OutgoingEmail {
        from,
        to,
        subject: format!("Project inquiry from {}", name),
        html,
        reply_to: Some(email.to_string()),
    })
}

fn sender_and_recipient() -> Result<(String, String), (StatusCode, Json<ApiResponse>)> {
    let from = crate::infra::config::contact_from_address();
    let to = crate::infra::config::contact_recipient();
    match (from, to) {
        (Some(from), Some(to)) => Ok((from, to)),
        _ => {
            error!("contact sender/recipient addresses are not configured");
            Err(err_resp(
                StatusCode::INTERNAL_SERVER_ERROR,
                "The contact service is not available right now. Please email us directly.",
            ))
        }
    }
}

fn push_row(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!("<p><strong>{}:</strong> {}</p>", label, escape_html(value)));
}

fn escape_html(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
