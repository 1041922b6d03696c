pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::{ContentService, Statistics};
pub use domain::content::{
    BlogPost, CaseStudy, CompanyConfig, SearchResults, Service, TeamMember, Testimonial,
};
pub use infra::captcha::{CaptchaError, CaptchaVerifier, RecaptchaClient};
pub use infra::mail::{HttpMailer, MailError, Mailer, OutgoingEmail};
pub use storage::{ContentStore, StoreError};
