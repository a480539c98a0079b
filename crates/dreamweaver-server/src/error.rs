//! Error types for dream service operations.

use dreamweaver_store::StoreError;
use dreamweaver_synth::SynthError;
use thiserror::Error;

/// Errors returned by [`crate::DreamService`] operations.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Request body could not be parsed as JSON.
    #[error("invalid request body: {0}")]
    InvalidBody(String),
    /// Image synthesis failed.
    #[error("synthesis error: {0}")]
    Synth(#[from] SynthError),
    /// Store operation failed.
    #[error("store error: {0}")]
    Store(#[from] StoreError),
    /// Blocking task panicked or was cancelled.
    #[error("task error: {0}")]
    Task(String),
}
