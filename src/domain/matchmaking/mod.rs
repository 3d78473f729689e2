// Match pairing strategies
//
// The organizer aggregate never picks a strategy itself; callers hand one
// in when asking for the tournament matches.

pub mod matches;
pub mod random;
pub mod round_robin;
pub mod seeded;

use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;

use crate::domain::team::Team;

pub use matches::Match;
pub use random::RandomTeamMatchMaker;
pub use round_robin::RoundRobinMatchMaker;
pub use seeded::SeededTeamMatchMaker;

/// Capability that turns a set of teams into matches
///
/// Implementations must not panic on fewer than two teams; they return
/// no matches instead.
pub trait MatchMaker: Send + Sync {
    /// Produces matches for the given teams
    fn make_matches(&self, teams: &[Team]) -> Vec<Match>;

    /// Short strategy name used in logs
    fn name(&self) -> &'static str;
}

/// Selectable pairing strategy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PairingStrategy {
    #[default]
    Random,
    Seeded(u64),
    RoundRobin,
}

impl PairingStrategy {
    /// Builds the match maker for this strategy
    pub fn build(&self) -> Box<dyn MatchMaker> {
        match self {
            PairingStrategy::Random => Box::new(RandomTeamMatchMaker),
            PairingStrategy::Seeded(seed) => Box::new(SeededTeamMatchMaker::new(*seed)),
            PairingStrategy::RoundRobin => Box::new(RoundRobinMatchMaker),
        }
    }
}

impl fmt::Display for PairingStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairingStrategy::Random => write!(f, "random"),
            PairingStrategy::Seeded(seed) => write!(f, "seeded({})", seed),
            PairingStrategy::RoundRobin => write!(f, "round_robin"),
        }
    }
}

/// Shuffles the teams and pairs them off two by two in a single round
///
/// With an odd count the team shuffled last sits out.
pub(crate) fn pair_shuffled<R: Rng + ?Sized>(teams: &[Team], rng: &mut R) -> Vec<Match> {
    if teams.len() < 2 {
        return Vec::new();
    }

    let mut order: Vec<&Team> = teams.iter().collect();
    order.shuffle(rng);

    order
        .chunks_exact(2)
        .map(|pair| Match::new(1, pair[0].id(), pair[1].id()))
        .collect()
}

#[cfg(test)]
pub(crate) mod test_support {
    use crate::domain::common::{Address, PersonalInfo};
    use crate::domain::team::{Manager, Team};
    use chrono::NaiveDate;
    use std::collections::HashSet;
    use uuid::Uuid;

    use super::Match;

    pub fn teams(count: usize) -> Vec<Team> {
        (0..count)
            .map(|i| {
                let manager = Manager::create(
                    PersonalInfo::new(
                        format!("manager{}", i),
                        "test",
                        "test",
                        NaiveDate::from_ymd_opt(1980, 1, 1).unwrap(),
                        Address::default(),
                    )
                    .unwrap(),
                );
                Team::create(format!("team{}", i), manager).unwrap()
            })
            .collect()
    }

    /// Asserts no team shows up twice within the same round
    pub fn assert_single_appearance_per_round(matches: &[Match]) {
        let mut seen: HashSet<(u32, Uuid)> = HashSet::new();
        for m in matches {
            assert!(seen.insert((m.round(), m.home_team_id())), "team paired twice in a round");
            assert!(seen.insert((m.round(), m.away_team_id())), "team paired twice in a round");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_builds_matching_match_maker() {
        assert_eq!(PairingStrategy::Random.build().name(), "random");
        assert_eq!(PairingStrategy::Seeded(7).build().name(), "seeded");
        assert_eq!(PairingStrategy::RoundRobin.build().name(), "round_robin");
    }

    #[test]
    fn default_strategy_is_random() {
        assert_eq!(PairingStrategy::default(), PairingStrategy::Random);
    }

    #[test]
    fn strategy_display() {
        assert_eq!(PairingStrategy::Random.to_string(), "random");
        assert_eq!(PairingStrategy::Seeded(42).to_string(), "seeded(42)");
        assert_eq!(PairingStrategy::RoundRobin.to_string(), "round_robin");
    }
}
