//! Shared scaffolding for the HTTP integration tests: an in-process server
//! on an ephemeral port plus recording fakes for the two external
//! collaborators.

// Each test binary compiles this module separately and uses a different
// subset of the fakes.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use vertex_site_api::transport;
use vertex_site_api::{
    CaptchaError, CaptchaVerifier, ContentService, ContentStore, MailError, Mailer, OutgoingEmail,
};

/// Scripted CAPTCHA verifier that counts how often it was consulted.
pub struct FakeCaptcha {
    outcome: Result<bool, ()>,
    pub calls: AtomicUsize,
}

impl FakeCaptcha {
    pub fn succeeding() -> Self {
        Self {
            outcome: Ok(true),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn rejecting() -> Self {
        Self {
            outcome: Ok(false),
            calls: AtomicUsize::new(0),
        }
    }

    /// Verifier whose upstream service is unavailable.
    pub fn erroring() -> Self {
        Self {
            outcome: Err(()),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl CaptchaVerifier for FakeCaptcha {
    async fn verify(&self, _token: &str) -> Result<bool, CaptchaError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.outcome {
            Ok(v) => Ok(v),
            Err(()) => Err(CaptchaError::MissingSecret),
        }
    }
}

/// Recording mailer: keeps every message it was asked to send, optionally
/// failing dispatch or reporting missing credentials.
pub struct FakeMailer {
    pub sent: Mutex<Vec<OutgoingEmail>>,
    fail_dispatch: bool,
    missing_credentials: bool,
}

impl FakeMailer {
    pub fn delivering() -> Self {
        Self {
            sent: Mutex::new(Vec::new()),
            fail_dispatch: false,
            missing_credentials: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            fail_dispatch: true,
            ..Self::delivering()
        }
    }

    pub fn unconfigured() -> Self {
        Self {
            missing_credentials: true,
            ..Self::delivering()
        }
    }

    pub fn sent_count(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl Mailer for FakeMailer {
    async fn send(&self, email: &OutgoingEmail) -> Result<(), MailError> {
        if self.fail_dispatch {
            return Err(MailError::Rejected { status: 502 });
        }
        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }

    fn credentials_present(&self) -> Result<(), MailError> {
        if self.missing_credentials {
            return Err(MailError::MissingCredentials("EMAIL_API_KEY"));
        }
        Ok(())
    }
}

/// Serves the real router over the bundled content on an ephemeral port
/// and returns the base URL.
pub async fn spawn_app(
    captcha: Arc<dyn CaptchaVerifier>,
    mailer: Arc<dyn Mailer>,
) -> anyhow::Result<String> {
    // The handlers resolve sender/recipient from the environment; pin them
    // to stable values for every test in this process.
    std::env::set_var("CONTACT_FROM_ADDRESS", "site@vertexdigital.io");
    std::env::set_var("CONTACT_RECIPIENT", "hello@vertexdigital.io");

    let store = Arc::new(ContentStore::load()?);
    let app_state = transport::http::AppState {
        content: ContentService::new(store),
        captcha,
        mailer,
    };
    let router = transport::http::create_router(app_state);

    // Ephemeral port to avoid conflicts if an API server is already running.
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok(format!("http://127.0.0.1:{}", port))
}
