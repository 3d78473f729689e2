use uuid::Uuid;

use super::{Match, MatchMaker};
use crate::domain::team::Team;

/// Full round robin using the circle method
///
/// Every pair of teams meets exactly once. N teams play N-1 rounds; with an
/// odd count a bye is added, giving N rounds where one team rests each time.
/// Deterministic for a given team order.
#[derive(Debug, Clone, Copy, Default)]
pub struct RoundRobinMatchMaker;

impl MatchMaker for RoundRobinMatchMaker {
    fn make_matches(&self, teams: &[Team]) -> Vec<Match> {
        if teams.len() < 2 {
            return Vec::new();
        }

        let mut slots: Vec<Option<Uuid>> = teams.iter().map(|t| Some(t.id())).collect();
        if slots.len() % 2 == 1 {
            slots.push(None);
        }

        let n = slots.len();
        let mut matches = Vec::with_capacity(n * (n - 1) / 2);

        for round in 1..n as u32 {
            for i in 0..n / 2 {
                if let (Some(home), Some(away)) = (slots[i], slots[n - 1 - i]) {
                    matches.push(Match::new(round, home, away));
                }
            }
            // first slot stays fixed, the rest rotate one step
            slots[1..].rotate_right(1);
        }

        matches
    }

    fn name(&self) -> &'static str {
        "round_robin"
    }
}
