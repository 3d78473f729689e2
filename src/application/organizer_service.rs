use tracing::instrument;
use uuid::Uuid;

use super::errors::{ServiceError, ServiceResult};
use super::events::EventPublisher;
use crate::domain::common::PersonalInfo;
use crate::domain::matchmaking::{Match, MatchMaker};
use crate::domain::organizer::Organizer;
use crate::domain::repositories::OrganizerRepository;
use crate::domain::team::Team;

/// Command handlers for the Organizer aggregate
///
/// Each mutating handler is one unit of work: load the organizer, call
/// exactly one aggregate method, persist it, then drain and publish its
/// domain events. Events are only published once the save succeeded.
pub struct OrganizerService<R, P> {
    repository: R,
    publisher: P,
}

impl<R, P> OrganizerService<R, P>
where
    R: OrganizerRepository,
    P: EventPublisher,
{
    pub fn new(repository: R, publisher: P) -> Self {
        Self {
            repository,
            publisher,
        }
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Creates and stores a new organizer
    ///
    /// # Returns
    /// The new organizer's id
    #[instrument(skip_all)]
    pub async fn create_organizer(
        &self,
        personal_info: Option<PersonalInfo>,
    ) -> ServiceResult<Uuid> {
        let mut organizer = Organizer::create(personal_info)?;
        self.repository.create(&organizer).await?;
        self.publish(&mut organizer).await;

        tracing::info!(organizer_id = %organizer.id(), "Organizer created");
        Ok(organizer.id())
    }

    /// Starts a tournament for the organizer
    ///
    /// A missing name is treated like an empty one.
    #[instrument(skip(self))]
    pub async fn create_tournament(
        &self,
        organizer_id: Uuid,
        name: Option<String>,
    ) -> ServiceResult<Uuid> {
        let mut organizer = self.load(organizer_id).await?;
        let tournament_id = organizer.create_tournament(name.unwrap_or_default())?;
        self.commit(&mut organizer).await?;

        tracing::info!(%tournament_id, "Tournament created");
        Ok(tournament_id)
    }

    #[instrument(skip(self, team), fields(team_id = %team.id()))]
    pub async fn register_team(&self, organizer_id: Uuid, team: Team) -> ServiceResult<()> {
        let mut organizer = self.load(organizer_id).await?;
        organizer.register_team(team)?;
        self.commit(&mut organizer).await?;

        tracing::info!("Team registered");
        Ok(())
    }

    /// Removes a team from the organizer's tournament
    ///
    /// # Returns
    /// The detached team, or `None` if it was not registered
    #[instrument(skip(self))]
    pub async fn discard_team(
        &self,
        organizer_id: Uuid,
        team_id: Uuid,
    ) -> ServiceResult<Option<Team>> {
        let mut organizer = self.load(organizer_id).await?;
        let discarded = organizer.discard_team(team_id)?;
        self.commit(&mut organizer).await?;

        if discarded.is_none() {
            tracing::debug!("Team was not registered, nothing discarded");
        }
        Ok(discarded)
    }

    /// Pairs the registered teams with the given strategy
    ///
    /// Read-only: nothing is saved and no events are published.
    #[instrument(skip(self, match_maker), fields(strategy = match_maker.name()))]
    pub async fn get_tournament_matches(
        &self,
        organizer_id: Uuid,
        match_maker: &dyn MatchMaker,
    ) -> ServiceResult<Vec<Match>> {
        let organizer = self.load(organizer_id).await?;
        let matches = organizer.get_tournament_matches(match_maker)?;

        tracing::debug!(count = matches.len(), "Tournament matches generated");
        Ok(matches)
    }

    /// Finishes the organizer's tournament
    ///
    /// # Returns
    /// The teams released from the finished tournament
    #[instrument(skip(self))]
    pub async fn finish_tournament(&self, organizer_id: Uuid) -> ServiceResult<Vec<Team>> {
        let mut organizer = self.load(organizer_id).await?;
        let finished = organizer.finish_tournament()?;
        self.commit(&mut organizer).await?;

        tracing::info!(
            tournament_id = %finished.tournament.id(),
            released = finished.released_teams.len(),
            "Tournament finished"
        );
        Ok(finished.released_teams)
    }

    async fn load(&self, organizer_id: Uuid) -> ServiceResult<Organizer> {
        self.repository
            .find_by_id(organizer_id)
            .await?
            .ok_or(ServiceError::OrganizerNotFound(organizer_id))
    }

    async fn commit(&self, organizer: &mut Organizer) -> ServiceResult<()> {
        self.repository.save(organizer).await?;
        self.publish(organizer).await;
        Ok(())
    }

    async fn publish(&self, organizer: &mut Organizer) {
        let events = organizer.take_domain_events();
        if !events.is_empty() {
            self.publisher.publish(&events).await;
        }
    }
}
