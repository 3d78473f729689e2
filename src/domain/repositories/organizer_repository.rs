use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use crate::domain::organizer::Organizer;

/// Errors reported by repository implementations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Organizer already exists: {0}")]
    Duplicate(Uuid),

    #[error("Organizer not found: {0}")]
    NotFound(Uuid),

    /// Failure of the backing store itself (connection, I/O, serialization)
    ///
    /// Storage adapters map their driver errors here; the in-memory adapter
    /// cannot fail this way.
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Repository trait for the Organizer aggregate
///
/// Stores the aggregate state only. Pending domain events are the unit of
/// work's business and are never persisted or restored through this port.
#[async_trait]
pub trait OrganizerRepository: Send + Sync {
    /// Insert a new organizer
    async fn create(&self, organizer: &Organizer) -> Result<(), RepositoryError>;

    /// Find an organizer by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Organizer>, RepositoryError>;

    /// Update an existing organizer
    async fn save(&self, organizer: &Organizer) -> Result<(), RepositoryError>;
}
