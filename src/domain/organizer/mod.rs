// Organizer domain module
// Contains the organizer aggregate root, its tournament, domain events and errors

#![allow(clippy::module_inception)]

pub mod errors;
pub mod events;
pub mod organizer;
pub mod tournament;

// Re-export main types for convenience
pub use errors::OrganizerError;
pub use events::{EventEnvelope, OrganizerEvent};
pub use organizer::{FinishedTournament, Organizer};
pub use tournament::Tournament;
