use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::errors::{OrganizerError, OrganizerResult};
use crate::domain::team::Team;

/// Tournament entity, owned by exactly one organizer
///
/// Holds the registered teams with set semantics by team id. Mutators are
/// crate-private; all changes go through the owning organizer.
///
/// # Invariants
/// - Name is not blank
/// - No two teams share an id
/// - Every team's `tournament_id` points at this tournament
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tournament {
    id: Uuid,
    name: String,
    created_at: DateTime<Utc>,
    teams: Vec<Team>,
}

impl Tournament {
    /// Creates an empty tournament
    ///
    /// # Returns
    /// * `Err(OrganizerError::InvalidTournamentName)` - If the name is empty or whitespace
    pub(crate) fn new(name: String) -> OrganizerResult<Self> {
        if name.trim().is_empty() {
            return Err(OrganizerError::InvalidTournamentName(name));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            created_at: Utc::now(),
            teams: Vec::new(),
        })
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, team_id: Uuid) -> Option<&Team> {
        self.teams.iter().find(|t| t.id() == team_id)
    }

    pub fn contains_team(&self, team_id: Uuid) -> bool {
        self.team(team_id).is_some()
    }

    // ===== Organizer-only mutators =====

    /// Adds the team and points it at this tournament
    ///
    /// Returns false, leaving the set untouched, when a team with the same id
    /// is already registered.
    pub(crate) fn add_team(&mut self, mut team: Team) -> bool {
        if self.contains_team(team.id()) {
            return false;
        }

        team.attach_to(self.id);
        self.teams.push(team);
        true
    }

    /// Removes the team with the given id and clears its back-reference
    pub(crate) fn remove_team(&mut self, team_id: Uuid) -> Option<Team> {
        let index = self.teams.iter().position(|t| t.id() == team_id)?;
        let mut team = self.teams.remove(index);
        team.detach();
        Some(team)
    }

    /// Detaches every team and empties the set
    pub(crate) fn release_teams(&mut self) -> Vec<Team> {
        let mut released = std::mem::take(&mut self.teams);
        for team in &mut released {
            team.detach();
        }
        released
    }

    /// Reconstructs a Tournament from persistence layer data
    ///
    /// Back-references of the given teams are re-pointed at this tournament
    /// and duplicate team ids are dropped.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        created_at: DateTime<Utc>,
        teams: Vec<Team>,
    ) -> Self {
        let mut tournament = Self {
            id,
            name,
            created_at,
            teams: Vec::with_capacity(teams.len()),
        };
        for team in teams {
            tournament.add_team(team);
        }
        tournament
    }
}
