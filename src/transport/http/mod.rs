pub mod router;
pub mod types;
pub mod handlers {
    pub mod catalog;
    pub mod common;
    pub mod company;
    pub mod contact;
    pub mod health;
}

pub use router::{create_router, ApiDoc};
pub use types::AppState;
