//! Centralized configuration (environment variables + defaults).

use std::time::Duration;

/// Address the API server binds to.
pub fn bind_addr() -> String {
    std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string())
}

/// Artificial delay applied by every content accessor, to emulate a remote
/// content source. Defaults to zero; affects latency only, never results.
pub fn content_fetch_delay() -> Duration {
    let ms = std::env::var("CONTENT_FETCH_DELAY_MS")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(0);
    Duration::from_millis(ms)
}

/// CAPTCHA verification endpoint. Defaults to the Google reCAPTCHA one.
pub fn recaptcha_verify_url() -> String {
    std::env::var("RECAPTCHA_VERIFY_URL")
        .unwrap_or_else(|_| "https://www.google.com/recaptcha/api/siteverify".to_string())
}

/// Server-side CAPTCHA secret. Absent means verification cannot run; the
/// contact endpoint answers 500 before any external call is attempted.
pub fn recaptcha_secret_key() -> Option<String> {
    non_empty(std::env::var("RECAPTCHA_SECRET_KEY").ok())
}

/// Base URL of the email provider's HTTP API.
pub fn email_api_url() -> String {
    std::env::var("EMAIL_API_URL").unwrap_or_else(|_| "https://api.resend.com".to_string())
}

/// Email provider API key. Absent means dispatch cannot run (500, no
/// external call).
pub fn email_api_key() -> Option<String> {
    non_empty(std::env::var("EMAIL_API_KEY").ok())
}

/// Sender address for contact-form notifications.
pub fn contact_from_address() -> Option<String> {
    non_empty(std::env::var("CONTACT_FROM_ADDRESS").ok())
}

/// Inbox that receives contact-form notifications.
pub fn contact_recipient() -> Option<String> {
    non_empty(std::env::var("CONTACT_RECIPIENT").ok())
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.filter(|s| !s.trim().is_empty())
}
