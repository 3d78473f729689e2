// Team domain module
// Contains the team entity and its manager

#![allow(clippy::module_inception)]

pub mod manager;
pub mod team;

// Re-export main types for convenience
pub use manager::Manager;
pub use team::{Team, TeamError};
