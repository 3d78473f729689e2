use rand::rngs::StdRng;
use rand::SeedableRng;

use super::{pair_shuffled, Match, MatchMaker};
use crate::domain::team::Team;

/// Random pairing with a fixed seed
///
/// The same seed and the same team order always give the same matches.
/// A fresh RNG is seeded on every call, so no state leaks between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeededTeamMatchMaker {
    seed: u64,
}

impl SeededTeamMatchMaker {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl MatchMaker for SeededTeamMatchMaker {
    fn make_matches(&self, teams: &[Team]) -> Vec<Match> {
        let mut rng = StdRng::seed_from_u64(self.seed);
        pair_shuffled(teams, &mut rng)
    }

    fn name(&self) -> &'static str {
        "seeded"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::matchmaking::test_support::{assert_single_appearance_per_round, teams};

    #[test]
    fn same_seed_gives_same_pairing() {
        let teams = teams(10);
        let maker = SeededTeamMatchMaker::new(42);

        assert_eq!(maker.make_matches(&teams), maker.make_matches(&teams));
    }

    #[test]
    fn pairs_each_team_at_most_once() {
        let teams = teams(9);
        let matches = SeededTeamMatchMaker::new(7).make_matches(&teams);

        assert_eq!(matches.len(), 4);
        assert_single_appearance_per_round(&matches);
    }

    #[test]
    fn single_team_gives_no_matches() {
        assert!(SeededTeamMatchMaker::new(1).make_matches(&teams(1)).is_empty());
    }
}
