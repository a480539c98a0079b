//! Test helpers shared across Dreamweaver crates.

pub mod store;

pub use store::{FailingStore, MemoryStore, temp_store};
