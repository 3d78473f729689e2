// Domain layer module exports
// Following Hexagonal Architecture and DDD principles
// Domain is independent of infrastructure concerns

pub mod common;
pub mod matchmaking;
pub mod organizer;
pub mod repositories;
pub mod team;
