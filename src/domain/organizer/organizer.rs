use uuid::Uuid;

use super::errors::{OrganizerError, OrganizerResult};
use super::events::{EventEnvelope, OrganizerEvent};
use super::tournament::Tournament;
use crate::domain::common::PersonalInfo;
use crate::domain::matchmaking::{Match, MatchMaker};
use crate::domain::team::Team;

/// Organizer aggregate root
///
/// Owns at most one tournament, which in turn owns its registered teams.
/// Every change to the tournament or its teams goes through this type, and
/// successful lifecycle transitions are recorded as domain events that the
/// unit of work drains after persisting.
///
/// # Invariants
/// - `is_organizing_a_tournament()` is true iff a tournament is attached
/// - Only one tournament is active at a time
/// - Events are appended in the order the transitions happened
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use tournament_organizer::domain::common::{Address, PersonalInfo};
/// use tournament_organizer::domain::organizer::Organizer;
///
/// let info = PersonalInfo::new(
///     "Ada",
///     "Lovelace",
///     "ada@example.com",
///     NaiveDate::from_ymd_opt(1815, 12, 10).expect("valid date"),
///     Address::default(),
/// )
/// .expect("valid personal info");
///
/// let mut organizer = Organizer::create(info).expect("valid organizer");
/// organizer.create_tournament("Spring Cup").expect("valid name");
///
/// assert!(organizer.is_organizing_a_tournament());
/// assert_eq!(organizer.domain_events().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Organizer {
    id: Uuid,
    personal_info: PersonalInfo,
    tournament: Option<Tournament>,
    domain_events: Vec<EventEnvelope>,
    events_raised: u64,
}

/// Outcome of finishing a tournament
///
/// The tournament comes back emptied, and the teams it held come back
/// detached so the caller can keep or re-register them.
#[derive(Debug, Clone)]
pub struct FinishedTournament {
    pub tournament: Tournament,
    pub released_teams: Vec<Team>,
}

impl Organizer {
    /// Creates a new Organizer aggregate
    ///
    /// Accepts either `PersonalInfo` or `Option<PersonalInfo>` so callers
    /// holding unvalidated input can pass it straight through.
    ///
    /// # Returns
    /// * `Ok(Organizer)` - With a fresh identity and an `OrganizerCreated` event
    /// * `Err(OrganizerError::MissingPersonalInfo)` - If no personal info was given
    pub fn create(personal_info: impl Into<Option<PersonalInfo>>) -> OrganizerResult<Self> {
        let personal_info = personal_info
            .into()
            .ok_or(OrganizerError::MissingPersonalInfo)?;

        let mut organizer = Self {
            id: Uuid::new_v4(),
            personal_info,
            tournament: None,
            domain_events: Vec::new(),
            events_raised: 0,
        };

        organizer.raise(OrganizerEvent::OrganizerCreated {
            organizer_id: organizer.id,
            full_name: organizer.personal_info.full_name(),
            email: organizer.personal_info.email().to_string(),
        });

        Ok(organizer)
    }

    /// Starts a new tournament with the given name
    ///
    /// # Business Rules
    /// - Name must not be empty or whitespace
    /// - Rejected while another tournament is active
    ///
    /// # Returns
    /// The id of the new tournament
    pub fn create_tournament(&mut self, name: impl Into<String>) -> OrganizerResult<Uuid> {
        let tournament = Tournament::new(name.into())?;

        if let Some(active) = &self.tournament {
            return Err(OrganizerError::TournamentAlreadyActive {
                tournament_id: active.id(),
            });
        }

        let tournament_id = tournament.id();
        self.tournament = Some(tournament);
        Ok(tournament_id)
    }

    /// Registers a team in the active tournament
    ///
    /// # Business Rules
    /// - Requires an active tournament (checked first)
    /// - A team registered elsewhere cannot join
    /// - Registering a team that is already in the set changes nothing
    pub fn register_team(&mut self, team: Team) -> OrganizerResult<()> {
        let tournament = self.active_tournament_mut()?;

        if let Some(other) = team.tournament_id() {
            if other != tournament.id() {
                return Err(OrganizerError::TeamAlreadyInTournament {
                    team_id: team.id(),
                    tournament_id: other,
                });
            }
        }

        tournament.add_team(team);
        Ok(())
    }

    /// Removes a team from the active tournament
    ///
    /// # Returns
    /// * `Ok(Some(team))` - The removed team, detached from the tournament
    /// * `Ok(None)` - No team with that id was registered
    /// * `Err(OrganizerError::NoTournament)` - No active tournament
    pub fn discard_team(&mut self, team_id: Uuid) -> OrganizerResult<Option<Team>> {
        let tournament = self.active_tournament_mut()?;
        Ok(tournament.remove_team(team_id))
    }

    /// Pairs the registered teams using the given strategy
    ///
    /// Order and count of the matches are entirely up to the strategy.
    pub fn get_tournament_matches(
        &self,
        match_maker: &dyn MatchMaker,
    ) -> OrganizerResult<Vec<Match>> {
        let tournament = self
            .tournament
            .as_ref()
            .ok_or(OrganizerError::NoTournament)?;
        Ok(match_maker.make_matches(tournament.teams()))
    }

    /// Finishes the active tournament
    ///
    /// Detaches every team, drops the tournament from this organizer and
    /// raises a `TournamentFinished` event. Nothing changes on error.
    pub fn finish_tournament(&mut self) -> OrganizerResult<FinishedTournament> {
        let mut tournament = self.tournament.take().ok_or(OrganizerError::NoTournament)?;
        let released_teams = tournament.release_teams();

        self.raise(OrganizerEvent::TournamentFinished {
            organizer_id: self.id,
            tournament_id: tournament.id(),
            tournament_name: tournament.name().to_string(),
            released_team_ids: released_teams.iter().map(Team::id).collect(),
        });

        Ok(FinishedTournament {
            tournament,
            released_teams,
        })
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn personal_info(&self) -> &PersonalInfo {
        &self.personal_info
    }

    pub fn tournament(&self) -> Option<&Tournament> {
        self.tournament.as_ref()
    }

    pub fn is_organizing_a_tournament(&self) -> bool {
        self.tournament.is_some()
    }

    // ===== Domain events =====

    /// Events raised since the last drain, oldest first
    pub fn domain_events(&self) -> &[EventEnvelope] {
        &self.domain_events
    }

    /// Drains pending events, leaving the log empty
    pub fn take_domain_events(&mut self) -> Vec<EventEnvelope> {
        std::mem::take(&mut self.domain_events)
    }

    pub fn clear_domain_events(&mut self) {
        self.domain_events.clear();
    }

    fn raise(&mut self, event: OrganizerEvent) {
        self.events_raised += 1;
        self.domain_events
            .push(EventEnvelope::new(self.events_raised, event));
    }

    fn active_tournament_mut(&mut self) -> OrganizerResult<&mut Tournament> {
        self.tournament.as_mut().ok_or(OrganizerError::NoTournament)
    }

    /// Reconstructs an Organizer from persistence layer data
    ///
    /// No events are raised; the loaded aggregate starts with an empty log.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: Uuid,
        personal_info: PersonalInfo,
        tournament: Option<Tournament>,
    ) -> Self {
        Self {
            id,
            personal_info,
            tournament,
            domain_events: Vec::new(),
            events_raised: 0,
        }
    }
}
