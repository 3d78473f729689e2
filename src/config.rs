//! Application configuration.
//!
//! Reads environment variables (after `.env` has been loaded by the binary)
//! and turns them into validated settings.

use thiserror::Error;

use crate::domain::matchmaking::PairingStrategy;

/// Variable selecting the pairing strategy: `random`, `seeded` or `round_robin`
pub const PAIRING_VAR: &str = "TOURNAMENT_PAIRING";
/// Seed used by the `seeded` strategy
pub const PAIRING_SEED_VAR: &str = "TOURNAMENT_PAIRING_SEED";

/// Errors raised while loading configuration
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Unknown pairing strategy: {0}")]
    UnknownPairingStrategy(String),

    #[error("TOURNAMENT_PAIRING_SEED is required for the seeded strategy")]
    MissingSeed,

    #[error("Invalid TOURNAMENT_PAIRING_SEED: {0}")]
    InvalidSeed(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    /// Strategy used when generating tournament matches
    pub pairing: PairingStrategy,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns error if the strategy is unknown, or the seeded strategy lacks a valid seed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let pairing = match lookup(PAIRING_VAR) {
            None => PairingStrategy::default(),
            Some(raw) => match raw.trim().to_ascii_lowercase().as_str() {
                "random" => PairingStrategy::Random,
                "round_robin" | "round-robin" => PairingStrategy::RoundRobin,
                "seeded" => PairingStrategy::Seeded(Self::seed(&lookup)?),
                _ => return Err(ConfigError::UnknownPairingStrategy(raw)),
            },
        };

        Ok(Self { pairing })
    }

    /// Seed for the seeded strategy; only read when that strategy is selected
    fn seed<F>(lookup: &F) -> Result<u64, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = lookup(PAIRING_SEED_VAR).ok_or(ConfigError::MissingSeed)?;
        raw.trim()
            .parse::<u64>()
            .map_err(|_| ConfigError::InvalidSeed(raw))
    }
}
