// Infrastructure layer module
// Contains adapters for the domain ports
// Follows Hexagonal Architecture

pub mod repositories;
