use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::organizer::Organizer;
use crate::domain::repositories::{OrganizerRepository, RepositoryError};

/// In-process implementation of OrganizerRepository
///
/// Keeps a snapshot of each organizer keyed by id. Snapshots are stored
/// without pending domain events, matching what a database round trip
/// would give back.
#[derive(Debug, Default)]
pub struct InMemoryOrganizerRepository {
    organizers: RwLock<HashMap<Uuid, Organizer>>,
}

impl InMemoryOrganizerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored organizers
    pub async fn len(&self) -> usize {
        self.organizers.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.organizers.read().await.is_empty()
    }

    fn snapshot(organizer: &Organizer) -> Organizer {
        let mut snapshot = organizer.clone();
        snapshot.clear_domain_events();
        snapshot
    }
}

#[async_trait]
impl OrganizerRepository for InMemoryOrganizerRepository {
    async fn create(&self, organizer: &Organizer) -> Result<(), RepositoryError> {
        let mut organizers = self.organizers.write().await;
        if organizers.contains_key(&organizer.id()) {
            return Err(RepositoryError::Duplicate(organizer.id()));
        }

        organizers.insert(organizer.id(), Self::snapshot(organizer));
        tracing::debug!(organizer_id = %organizer.id(), "Organizer stored");
        Ok(())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Organizer>, RepositoryError> {
        Ok(self.organizers.read().await.get(&id).cloned())
    }

    async fn save(&self, organizer: &Organizer) -> Result<(), RepositoryError> {
        let mut organizers = self.organizers.write().await;
        let slot = organizers
            .get_mut(&organizer.id())
            .ok_or(RepositoryError::NotFound(organizer.id()))?;

        *slot = Self::snapshot(organizer);
        tracing::debug!(organizer_id = %organizer.id(), "Organizer updated");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::common::{Address, PersonalInfo};
    use chrono::NaiveDate;

    fn organizer() -> Organizer {
        Organizer::create(
            PersonalInfo::new(
                "test",
                "test",
                "test@gamil.com",
                NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
                Address::default(),
            )
            .unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_and_find_by_id() {
        let repo = InMemoryOrganizerRepository::new();
        let organizer = organizer();

        repo.create(&organizer).await.unwrap();
        let found = repo.find_by_id(organizer.id()).await.unwrap().unwrap();

        assert_eq!(found.id(), organizer.id());
        assert_eq!(found.personal_info(), organizer.personal_info());
        assert!(found.domain_events().is_empty(), "events are not persisted");
    }

    #[tokio::test]
    async fn create_duplicate_fails() {
        let repo = InMemoryOrganizerRepository::new();
        let organizer = organizer();

        repo.create(&organizer).await.unwrap();
        let result = repo.create(&organizer).await;

        assert_eq!(result.unwrap_err(), RepositoryError::Duplicate(organizer.id()));
        assert_eq!(repo.len().await, 1);
    }

    #[tokio::test]
    async fn find_unknown_returns_none() {
        let repo = InMemoryOrganizerRepository::new();

        assert!(repo.find_by_id(Uuid::new_v4()).await.unwrap().is_none());
        assert!(repo.is_empty().await);
    }

    #[tokio::test]
    async fn save_replaces_stored_state() {
        let repo = InMemoryOrganizerRepository::new();
        let mut organizer = organizer();
        repo.create(&organizer).await.unwrap();

        organizer.create_tournament("cup").unwrap();
        repo.save(&organizer).await.unwrap();

        let found = repo.find_by_id(organizer.id()).await.unwrap().unwrap();
        assert_eq!(found.tournament().unwrap().name(), "cup");
    }

    #[tokio::test]
    async fn save_unknown_fails() {
        let repo = InMemoryOrganizerRepository::new();
        let organizer = organizer();

        let result = repo.save(&organizer).await;

        assert_eq!(result.unwrap_err(), RepositoryError::NotFound(organizer.id()));
    }
}
