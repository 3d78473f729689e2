use thiserror::Error;
use uuid::Uuid;

use crate::domain::organizer::OrganizerError;
use crate::domain::repositories::RepositoryError;

/// Errors returned by application handlers
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Organizer not found: {0}")]
    OrganizerNotFound(Uuid),

    #[error(transparent)]
    Domain(#[from] OrganizerError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
