// Repository ports
// Implemented by adapters in the infrastructure layer

pub mod organizer_repository;

pub use organizer_repository::{OrganizerRepository, RepositoryError};
