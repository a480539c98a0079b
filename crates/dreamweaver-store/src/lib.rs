//! Durable storage for dream records.

pub mod error;
pub mod model;
pub mod store;

/// Store error type.
pub use error::StoreError;
/// Dream record models.
pub use model::{DreamRecord, NewDream};
/// Store interface and default SQLite implementation.
pub use store::{DreamStore, SqliteDreamStore};
