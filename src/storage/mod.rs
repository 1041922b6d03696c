pub mod store;

pub use store::{ContentStore, StoreError};
