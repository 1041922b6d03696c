// Responsible for all communication with the email delivery provider.
//
// One message per submission, dispatched with a single HTTP call. No retry
// and no outbox: a provider failure surfaces to the caller and the message
// is dropped.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::infra::config;

#[derive(Error, Debug)]
pub enum MailError {
    #[error("email credentials are not configured: {0}")]
    MissingCredentials(&'static str),

    #[error("email dispatch request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("email provider rejected the message: status {status}")]
    Rejected { status: u16 },
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OutgoingEmail {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub html: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply_to: Option<String>,
}

#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError>;

    /// Checks request-time credentials without touching the provider.
    /// Implementations that need no credentials report Ok.
    fn credentials_present(&self) -> Result<(), MailError> {
        Ok(())
    }
}

/// HTTP-API mailer (Resend-style): Bearer-authenticated JSON POST to
/// `{api_url}/emails`.
pub struct HttpMailer {
    http: reqwest::Client,
    api_url: String,
}

impl HttpMailer {
    pub fn new() -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config::email_api_url(),
        }
    }

}

impl Default for HttpMailer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Mailer for HttpMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        let api_key = config::email_api_key()
            .ok_or(MailError::MissingCredentials("EMAIL_API_KEY"))?;

        let response = self
            .http
            .post(format!("{}/emails", self.api_url))
            .bearer_auth(api_key)
            .json(email)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(MailError::Rejected {
                status: response.status().as_u16(),
            });
        }
        Ok(())
    }

    fn credentials_present(&self) -> Result<(), MailError> {
        if config::email_api_key().is_none() {
            return Err(MailError::MissingCredentials("EMAIL_API_KEY"));
        }
        if config::contact_from_address().is_none() {
            return Err(MailError::MissingCredentials("CONTACT_FROM_ADDRESS"));
        }
        if config::contact_recipient().is_none() {
            return Err(MailError::MissingCredentials("CONTACT_RECIPIENT"));
        }
        Ok(())
    }
}
