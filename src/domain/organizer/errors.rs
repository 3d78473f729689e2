use thiserror::Error;
use uuid::Uuid;

/// Business rule violations raised by the Organizer aggregate
///
/// All of these are synchronous caller mistakes; none are worth retrying.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrganizerError {
    #[error("Organizer personal info is required")]
    MissingPersonalInfo,

    #[error("Invalid tournament name: {0:?}")]
    InvalidTournamentName(String),

    #[error("Organizer does not have a tournament")]
    NoTournament,

    #[error("Organizer is already running tournament {tournament_id}")]
    TournamentAlreadyActive { tournament_id: Uuid },

    #[error("Team {team_id} is already registered in tournament {tournament_id}")]
    TeamAlreadyInTournament { team_id: Uuid, tournament_id: Uuid },
}

pub type OrganizerResult<T> = Result<T, OrganizerError>;
