use thiserror::Error;
use uuid::Uuid;

use super::manager::Manager;

/// Errors raised by the Team entity
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TeamError {
    #[error("Team name cannot be blank")]
    InvalidName,
}

/// Team entity
///
/// A team is owned by the tournament it is registered in. The
/// `tournament_id` back-reference is only changed by the organizer
/// aggregate, together with the tournament's team collection.
///
/// # Invariants
/// - Name is not blank
/// - A team belongs to at most one tournament at a time
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use tournament_organizer::domain::common::{Address, PersonalInfo};
/// use tournament_organizer::domain::team::{Manager, Team};
///
/// let manager = Manager::create(
///     PersonalInfo::new(
///         "Jo",
///         "Doe",
///         "jo@example.com",
///         NaiveDate::from_ymd_opt(1985, 3, 1).expect("valid date"),
///         Address::default(),
///     )
///     .expect("valid personal info"),
/// );
///
/// let team = Team::create("Red Foxes", manager).expect("valid team");
/// assert_eq!(team.name(), "Red Foxes");
/// assert!(!team.is_registered());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Team {
    id: Uuid,
    name: String,
    manager: Manager,
    tournament_id: Option<Uuid>,
}

impl Team {
    /// Creates a new, unregistered team
    ///
    /// # Returns
    /// * `Ok(Team)` - New team with a fresh identity
    /// * `Err(TeamError::InvalidName)` - If the name is blank
    pub fn create(name: impl Into<String>, manager: Manager) -> Result<Self, TeamError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(TeamError::InvalidName);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            name,
            manager,
            tournament_id: None,
        })
    }

    // ===== Getters =====

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn manager(&self) -> &Manager {
        &self.manager
    }

    /// Returns the tournament this team is registered in, if any
    pub fn tournament_id(&self) -> Option<Uuid> {
        self.tournament_id
    }

    pub fn is_registered(&self) -> bool {
        self.tournament_id.is_some()
    }

    // ===== Aggregate-internal mutators =====

    pub(crate) fn attach_to(&mut self, tournament_id: Uuid) {
        self.tournament_id = Some(tournament_id);
    }

    pub(crate) fn detach(&mut self) {
        self.tournament_id = None;
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        manager: Manager,
        tournament_id: Option<Uuid>,
    ) -> Self {
        Self {
            id,
            name,
            manager,
            tournament_id,
        }
    }
}
