//! Dream generation and listing, independent of HTTP.
//!
//! Both operations return `Result` values; status codes and error envelopes
//! are decided by the route handlers.

use crate::error::ServiceError;
use dreamweaver_store::{DreamRecord, DreamStore, NewDream};
use dreamweaver_synth::{SynthError, synthesize};
use log::{debug, info};
use parking_lot::Mutex;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;

/// Confirmation returned with every generated dream.
pub const GENERATE_MESSAGE: &str = "Dream generated successfully";

/// Coordinates supplied with a dream, each independently optional.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Location {
    pub lat: Option<f64>,
    pub lng: Option<f64>,
}

impl Location {
    /// Read numeric `lat`/`lng` members from a JSON object, ignoring others.
    pub fn from_value(value: &Value) -> Option<Self> {
        let map = value.as_object()?;
        Some(Self {
            lat: map.get("lat").and_then(Value::as_f64),
            lng: map.get("lng").and_then(Value::as_f64),
        })
    }
}

/// Input of a generation request after type coercion.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GenerateRequest {
    /// Dream text; empty when absent or not a string.
    pub dream: String,
    pub location: Option<Location>,
}

impl GenerateRequest {
    /// Request for `dream` without coordinates.
    pub fn new(dream: impl Into<String>) -> Self {
        Self {
            dream: dream.into(),
            location: None,
        }
    }

    /// Attach coordinates.
    pub fn with_location(mut self, lat: f64, lng: f64) -> Self {
        self.location = Some(Location {
            lat: Some(lat),
            lng: Some(lng),
        });
        self
    }

    /// Coerce an arbitrary JSON body; never fails.
    pub fn from_json(body: &Value) -> Self {
        let dream = body
            .get("dream")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();
        let location = body.get("location").and_then(Location::from_value);
        Self { dream, location }
    }

    /// Parse raw request bytes as JSON, then coerce.
    pub fn from_slice(body: &[u8]) -> Result<Self, ServiceError> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|err| ServiceError::InvalidBody(err.to_string()))?;
        Ok(Self::from_json(&value))
    }
}

/// Successful generation payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub dream_id: i64,
    pub image: String,
    pub message: String,
}

/// Listing entry exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DreamSummary {
    pub id: i64,
    pub text: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub image: String,
}

impl From<DreamRecord> for DreamSummary {
    fn from(record: DreamRecord) -> Self {
        Self {
            id: record.id,
            text: record.text,
            latitude: record.latitude,
            longitude: record.longitude,
            image: record.image,
        }
    }
}

/// Where synthesis draws its randomness from.
pub enum RngSource {
    /// Fresh thread-local generator per call.
    Thread,
    /// One seeded generator shared by every request.
    Seeded(Mutex<StdRng>),
}

impl RngSource {
    /// Seeded source when a seed is given, thread-local otherwise.
    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => RngSource::Seeded(Mutex::new(StdRng::seed_from_u64(seed))),
            None => RngSource::Thread,
        }
    }

    fn synthesize(&self, text: &str) -> Result<String, SynthError> {
        match self {
            RngSource::Thread => synthesize(text, &mut rand::rng()),
            RngSource::Seeded(rng) => synthesize(text, &mut *rng.lock()),
        }
    }
}

/// Generation and listing on top of a dream store.
#[derive(Clone)]
pub struct DreamService {
    store: Arc<dyn DreamStore>,
    rng: Arc<RngSource>,
}

impl DreamService {
    /// Service using thread-local randomness.
    pub fn new(store: Arc<dyn DreamStore>) -> Self {
        Self::with_rng(store, RngSource::Thread)
    }

    /// Service using the given randomness source.
    pub fn with_rng(store: Arc<dyn DreamStore>, rng: RngSource) -> Self {
        Self {
            store,
            rng: Arc::new(rng),
        }
    }

    /// Synthesize an image for the dream, then persist it.
    pub async fn generate(
        &self,
        request: GenerateRequest,
    ) -> Result<GenerateResponse, ServiceError> {
        let service = self.clone();
        tokio::task::spawn_blocking(move || service.generate_blocking(request))
            .await
            .map_err(|err| ServiceError::Task(err.to_string()))?
    }

    /// All dreams, newest first.
    pub async fn list(&self) -> Result<Vec<DreamSummary>, ServiceError> {
        let store = self.store.clone();
        let records = tokio::task::spawn_blocking(move || store.list_all())
            .await
            .map_err(|err| ServiceError::Task(err.to_string()))??;
        debug!("listing dreams (count={})", records.len());
        Ok(records.into_iter().map(DreamSummary::from).collect())
    }

    fn generate_blocking(&self, request: GenerateRequest) -> Result<GenerateResponse, ServiceError> {
        let image = self.rng.synthesize(&request.dream)?;
        let location = request.location.unwrap_or_default();
        let dream_id = self.store.insert(NewDream {
            text: request.dream,
            latitude: location.lat,
            longitude: location.lng,
            image: image.clone(),
        })?;
        info!(
            "dream generated (id={}, located={})",
            dream_id,
            location.lat.is_some() && location.lng.is_some()
        );
        Ok(GenerateResponse {
            success: true,
            dream_id,
            image,
            message: GENERATE_MESSAGE.to_string(),
        })
    }
}
