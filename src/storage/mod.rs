//! Persistence for the practice collection.
//!
//! The whole collection is stored as one value under a single fixed key,
//! wrapped in a versioned JSON envelope so future field additions cannot
//! silently corrupt older data. [`PracticeArchive`] is the only component
//! that touches a [`KeyValueStore`]; everything else reads the in-memory
//! snapshot owned by [`crate::store::PracticeStore`].

mod memory;
mod schema;
mod sqlite;

pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use thiserror::Error;

use crate::models::Practice;

/// Fixed key the whole collection is stored under.
pub const COLLECTION_KEY: &str = "mishmar-practices";

/// Version tag written into every persisted envelope. Bump when the
/// record shape changes; readers reject versions they do not know.
const SCHEMA_VERSION: u32 = 1;

/// Storage backend errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Durable key/value storage the archive writes through to.
///
/// Implementations serialize concurrent access internally; the archive
/// itself holds no locks.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Persisted shape of the collection.
#[derive(Deserialize)]
struct Envelope {
    version: u32,
    practices: Vec<Practice>,
}

/// Read-through/write-through adapter between the practice store and a
/// [`KeyValueStore`]. Carries no business logic: it serializes, stores,
/// and absorbs backend failures into logs.
#[derive(Clone)]
pub struct PracticeArchive {
    store: Arc<dyn KeyValueStore>,
}

impl PracticeArchive {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Fetch the persisted collection.
    ///
    /// A missing key, a failed read, malformed JSON, and an unknown
    /// schema version all come back as an empty collection; callers
    /// cannot distinguish them. Failures are logged here.
    pub async fn read(&self) -> Vec<Practice> {
        let raw = match self.store.get(COLLECTION_KEY).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!("Failed to read practice collection, starting empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str::<Envelope>(&raw) {
            Ok(envelope) if envelope.version == SCHEMA_VERSION => envelope.practices,
            Ok(envelope) => {
                tracing::warn!(
                    "Stored practices use unknown schema version {}, starting empty",
                    envelope.version
                );
                Vec::new()
            }
            Err(e) => {
                tracing::warn!("Malformed practice collection, starting empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Persist the full collection.
    ///
    /// A failed write is logged and dropped: no retry, nothing propagated.
    /// In-memory state stays ahead of durable state until the next
    /// successful write.
    pub async fn write(&self, practices: &[Practice]) {
        let envelope = serde_json::json!({
            "version": SCHEMA_VERSION,
            "practices": practices,
        });

        let raw = match serde_json::to_string(&envelope) {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!("Failed to serialize practice collection: {}", e);
                return;
            }
        };

        if let Err(e) = self.store.set(COLLECTION_KEY, &raw).await {
            tracing::error!("Failed to save practice collection: {}", e);
        }
    }
}
