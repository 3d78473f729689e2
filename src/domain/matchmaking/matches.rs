use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A pairing of exactly two teams
///
/// Matches are derived on demand from the current team set and are never
/// persisted on their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Match {
    round: u32,
    home_team_id: Uuid,
    away_team_id: Uuid,
}

impl Match {
    pub fn new(round: u32, home_team_id: Uuid, away_team_id: Uuid) -> Self {
        Self {
            round,
            home_team_id,
            away_team_id,
        }
    }

    /// One-based round number
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn home_team_id(&self) -> Uuid {
        self.home_team_id
    }

    pub fn away_team_id(&self) -> Uuid {
        self.away_team_id
    }

    /// Returns true if the given team plays in this match
    pub fn involves(&self, team_id: Uuid) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn involves_both_sides() {
        let home = Uuid::new_v4();
        let away = Uuid::new_v4();
        let m = Match::new(1, home, away);

        assert!(m.involves(home));
        assert!(m.involves(away));
        assert!(!m.involves(Uuid::new_v4()));
    }

    #[test]
    fn serializes_to_json() {
        let m = Match::new(2, Uuid::nil(), Uuid::nil());
        let json = serde_json::to_value(m).unwrap();

        assert_eq!(json["round"], 2);
        assert_eq!(json["home_team_id"], Uuid::nil().to_string());
    }
}
