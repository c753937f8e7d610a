//! In-process API facade over the survival world, plus the HTTP server that exposes it.

mod server;

use contracts::{
    DecisionOutcome, EntryAdded, LeaderboardPage, NewLeaderboardEntry, Survivor, SurvivorCreated,
    DEFAULT_LEADERBOARD_SIZE,
};
use survival_core::{GameWorld, RngDice};
pub use server::{router, serve, ServerError};
pub use survival_core::{Dice, GameError, ScriptedDice};

pub const DEFAULT_PORT: u16 = 3001;
pub const SEED_ENV: &str = "SURVIVAL_SEED";
pub const PORT_ENV: &str = "PORT";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameConfig {
    /// Fixed dice seed; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl GameConfig {
    pub fn from_env() -> Self {
        let seed = std::env::var(SEED_ENV)
            .ok()
            .and_then(|raw| raw.trim().parse::<u64>().ok());
        Self { seed }
    }
}

#[derive(Debug)]
pub struct GameApi {
    world: GameWorld,
}

impl GameApi {
    pub fn from_config(config: GameConfig) -> Self {
        let dice: Box<dyn Dice> = match config.seed {
            Some(seed) => Box::new(RngDice::seeded(seed)),
            None => Box::new(RngDice::from_entropy()),
        };
        Self::with_dice(dice)
    }

    pub fn with_dice(dice: Box<dyn Dice>) -> Self {
        Self {
            world: GameWorld::new(dice),
        }
    }

    pub fn create_survivor(&mut self, name: Option<&str>) -> SurvivorCreated {
        let survivor = self.world.create_survivor(name).clone();
        log::info!("Survivor created successfully id={} name={}", survivor.id, survivor.name);
        SurvivorCreated {
            message: "Survivor created successfully".to_string(),
            survivor,
        }
    }

    pub fn survivor(&self, id: u64) -> Result<&Survivor, GameError> {
        self.world.survivor(id)
    }

    pub fn decide(&mut self, id: u64, decision: &str) -> Result<DecisionOutcome, GameError> {
        let outcome = self.world.decide(id, decision);
        match &outcome {
            Ok(outcome) => log::info!(
                "survivor={} decision={} result={} day={} status={}",
                id,
                decision,
                outcome.message,
                outcome.survivor.day,
                outcome.survivor.status
            ),
            Err(err) => log::warn!("survivor={id} decision={decision:?} rejected: {err}"),
        }
        outcome
    }

    pub fn submit_score(&mut self, entry: NewLeaderboardEntry) -> EntryAdded {
        let entry = self.world.submit_score(entry).clone();
        log::info!("leaderboard entry id={} score={}", entry.id, entry.score);
        EntryAdded {
            message: "Added entry".to_string(),
            entry,
        }
    }

    pub fn leaderboard(&self) -> LeaderboardPage {
        self.world.leaderboard(DEFAULT_LEADERBOARD_SIZE)
    }
}
