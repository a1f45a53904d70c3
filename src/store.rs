use chrono::Utc;
use uuid::Uuid;

use crate::models::{Practice, PracticeInput};
use crate::storage::PracticeArchive;

/// Single source of truth for the practice collection.
///
/// Owns the insertion-ordered collection and mediates every mutation
/// through the [`PracticeArchive`]: the write path is store-then-persist,
/// and each mutation rewrites the whole persisted collection. A failed
/// write does not roll back the in-memory state; durable storage catches
/// up on the next successful write.
///
/// Mutations take `&mut self`, so a multi-threaded host is already forced
/// to serialize them; no extra locking happens here.
pub struct PracticeStore {
    practices: Vec<Practice>,
    archive: PracticeArchive,
}

impl PracticeStore {
    /// Read the persisted collection at startup.
    ///
    /// Starts empty when nothing is stored or the read fails; the archive
    /// logs the cause and no error reaches the caller.
    pub async fn load(archive: PracticeArchive) -> Self {
        let practices = archive.read().await;
        Self {
            practices,
            archive,
        }
    }

    /// Commit a new practice: assigns a fresh id and creation timestamp,
    /// appends to the end of the collection, persists.
    pub async fn add(&mut self, input: PracticeInput) -> Practice {
        let practice = Practice {
            id: Uuid::new_v4(),
            name: input.name,
            category: input.category,
            frequency: input.frequency,
            time: input.time,
            duration: input.duration,
            notes: input.notes,
            created_at: Utc::now(),
        };

        self.practices.push(practice.clone());
        self.archive.write(&self.practices).await;
        practice
    }

    /// Replace the record with matching `id` wholesale.
    ///
    /// The stored `id` and `created_at` survive regardless of the input.
    /// Returns `None` without touching storage when the id is unknown.
    pub async fn update(&mut self, id: Uuid, input: PracticeInput) -> Option<Practice> {
        let slot = self.practices.iter_mut().find(|p| p.id == id)?;

        let replacement = Practice {
            id,
            name: input.name,
            category: input.category,
            frequency: input.frequency,
            time: input.time,
            duration: input.duration,
            notes: input.notes,
            created_at: slot.created_at,
        };
        *slot = replacement.clone();

        self.archive.write(&self.practices).await;
        Some(replacement)
    }

    /// Delete the record with matching `id`. No-op returning `false` when
    /// it is absent.
    pub async fn remove(&mut self, id: Uuid) -> bool {
        let before = self.practices.len();
        self.practices.retain(|p| p.id != id);
        if self.practices.len() == before {
            return false;
        }

        self.archive.write(&self.practices).await;
        true
    }

    /// Current collection snapshot, in insertion order.
    pub fn list(&self) -> &[Practice] {
        &self.practices
    }
}
