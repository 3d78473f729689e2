use super::{pair_shuffled, Match, MatchMaker};
use crate::domain::team::Team;

/// Pairs teams in a random order, one round per call
///
/// Stateless: every call draws from the thread-local RNG, so two calls over
/// the same teams usually give different pairings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomTeamMatchMaker;

impl MatchMaker for RandomTeamMatchMaker {
    fn make_matches(&self, teams: &[Team]) -> Vec<Match> {
        let mut rng = rand::rng();
        pair_shuffled(teams, &mut rng)
    }

    fn name(&self) -> &'static str {
        "random"
    }
}
