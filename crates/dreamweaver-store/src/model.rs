//! Dream record model used by stores.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Persisted dream record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DreamRecord {
    /// Store-assigned identifier.
    pub id: i64,
    /// Dream description as submitted.
    pub text: String,
    /// Optional latitude of the dreamer.
    pub latitude: Option<f64>,
    /// Optional longitude of the dreamer.
    pub longitude: Option<f64>,
    /// Encoded image data URL.
    pub image: String,
    /// Insertion timestamp.
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when inserting a dream; the store assigns the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDream {
    pub text: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image: String,
}
