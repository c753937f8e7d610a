//! Survivor life-cycle, daily decision resolution, and the score leaderboard.

pub mod decision;
pub mod dice;
mod error;
pub mod leaderboard;
pub mod registry;

use contracts::{
    DecisionOutcome, LeaderboardEntry, LeaderboardPage, NewLeaderboardEntry, Survivor,
};

pub use decision::Resolution;
pub use dice::{Dice, RngDice, ScriptedDice};
pub use error::GameError;
pub use leaderboard::Leaderboard;
pub use registry::SurvivorRegistry;

/// All in-memory game state for one process.
pub struct GameWorld {
    survivors: SurvivorRegistry,
    leaderboard: Leaderboard,
    dice: Box<dyn Dice>,
}

impl std::fmt::Debug for GameWorld {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GameWorld")
            .field("survivors", &self.survivors.len())
            .field("leaderboard", &self.leaderboard.len())
            .finish_non_exhaustive()
    }
}

impl GameWorld {
    pub fn new(dice: Box<dyn Dice>) -> Self {
        Self {
            survivors: SurvivorRegistry::new(),
            leaderboard: Leaderboard::new(),
            dice,
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self::new(Box::new(RngDice::seeded(seed)))
    }

    pub fn create_survivor(&mut self, name: Option<&str>) -> &Survivor {
        let survivor = self.survivors.create(name);
        log::debug!("created {survivor}");
        survivor
    }

    pub fn survivor(&self, id: u64) -> Result<&Survivor, GameError> {
        self.survivors.get(id)
    }

    /// Resolve one day for survivor `id`. Every rejection leaves the record unchanged.
    pub fn decide(&mut self, id: u64, raw_decision: &str) -> Result<DecisionOutcome, GameError> {
        let survivor = self.survivors.get_mut(id)?;
        let resolution = decision::resolve(survivor, raw_decision, self.dice.as_mut())?;
        log::debug!(
            "day {} {} -> {} ({:+})",
            survivor.day - 1,
            resolution.decision,
            resolution.message,
            resolution.score_gain
        );

        Ok(DecisionOutcome {
            message: resolution.message.to_string(),
            score_gain: resolution.score_gain,
            survivor: survivor.clone(),
        })
    }

    pub fn submit_score(&mut self, entry: NewLeaderboardEntry) -> &LeaderboardEntry {
        self.leaderboard.submit(entry)
    }

    pub fn leaderboard(&self, n: usize) -> LeaderboardPage {
        self.leaderboard.top(n)
    }

    pub fn survivors(&self) -> &SurvivorRegistry {
        &self.survivors
    }

    pub fn scores(&self) -> &Leaderboard {
        &self.leaderboard
    }
}
