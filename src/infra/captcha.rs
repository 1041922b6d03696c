// Responsible for all communication with the CAPTCHA verification service.

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::infra::config;

#[derive(Error, Debug)]
pub enum CaptchaError {
    #[error("CAPTCHA secret key is not configured")]
    MissingSecret,

    #[error("CAPTCHA verification request failed: {0}")]
    Network(#[from] reqwest::Error),
}

/// Outcome of verifying one client-supplied token. Any non-success is a
/// hard rejection of the submission; there is no retry.
#[async_trait]
pub trait CaptchaVerifier: Send + Sync {
    async fn verify(&self, token: &str) -> Result<bool, CaptchaError>;
}

/// reCAPTCHA-style verifier: form-encoded POST of `secret` + `response`,
/// answer carries a boolean `success` flag.
pub struct RecaptchaClient {
    http: reqwest::Client,
    verify_url: String,
}

#[derive(Deserialize)]
struct VerifyResponse {
    success: bool,
}

impl RecaptchaClient {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            verify_url: config::recaptcha_verify_url(),
        }
    }
}

impl Default for RecaptchaClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CaptchaVerifier for RecaptchaClient {
    async fn verify(&self, token: &str) -> Result<bool, CaptchaError> {
        let secret = config::recaptcha_secret_key().ok_or(CaptchaError::MissingSecret)?;

        let response: VerifyResponse = self
            .http
            .post(&self.verify_url)
            .form(&[("secret", secret.as_str()), ("response", token)])
            .send()
            .await?
            .json()
            .await?;

        Ok(response.success)
    }
}
