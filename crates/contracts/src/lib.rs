//! Wire contracts for the survival service: survivor records, decision outcomes, and leaderboard rows.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const STAT_MAX: i32 = 100;
pub const STAT_MIN: i32 = 0;
pub const FIRST_DAY: u32 = 1;
pub const UNKNOWN_SURVIVOR_NAME: &str = "Unknown";
pub const DEFAULT_LEADERBOARD_SIZE: usize = 10;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum SurvivorStatus {
    Alive,
    Dead,
    Escaped,
}

impl SurvivorStatus {
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Alive => "alive",
            Self::Dead => "dead",
            Self::Escaped => "escaped",
        }
    }
}

impl fmt::Display for SurvivorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The four daily actions a survivor can take.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Food,
    Shelter,
    Allies,
    Rest,
}

impl Decision {
    pub const ALL: [Decision; 4] = [Self::Food, Self::Shelter, Self::Allies, Self::Rest];

    /// Exact, case-sensitive match against the wire names.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "food" => Some(Self::Food),
            "shelter" => Some(Self::Shelter),
            "allies" => Some(Self::Allies),
            "rest" => Some(Self::Rest),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Food => "food",
            Self::Shelter => "shelter",
            Self::Allies => "allies",
            Self::Rest => "rest",
        }
    }
}

impl fmt::Display for Decision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DecisionLogEntry {
    pub day: u32,
    pub decision: Decision,
    pub result: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Survivor {
    pub id: u64,
    pub name: String,
    pub hunger: i32,
    pub health: i32,
    pub morale: i32,
    pub shelter: i32,
    pub allies: u32,
    pub day: u32,
    pub score: i64,
    pub status: SurvivorStatus,
    pub created_at: DateTime<Utc>,
    pub decisions: Vec<DecisionLogEntry>,
}

impl Survivor {
    pub fn new(id: u64, name: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            hunger: STAT_MAX,
            health: STAT_MAX,
            morale: STAT_MAX,
            shelter: STAT_MIN,
            allies: 0,
            day: FIRST_DAY,
            score: 0,
            status: SurvivorStatus::Alive,
            created_at,
            decisions: Vec::new(),
        }
    }
}

impl fmt::Display for Survivor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "survivor={} name={} day={} status={} hunger={} health={} morale={} shelter={} allies={} score={}",
            self.id,
            self.name,
            self.day,
            self.status,
            self.hunger,
            self.health,
            self.morale,
            self.shelter,
            self.allies,
            self.score
        )
    }
}

/// Caller-supplied leaderboard fields. Only `score` is required; the rest pass through untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewLeaderboardEntry {
    pub name: Option<Value>,
    pub score: i64,
    pub days: Option<Value>,
    pub survived: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardEntry {
    pub id: u64,
    pub name: Option<Value>,
    pub score: i64,
    pub days: Option<Value>,
    pub survived: Option<Value>,
    #[serde(rename = "timeStamp")]
    pub time_stamp: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LeaderboardPage {
    pub leaderboard: Vec<LeaderboardEntry>,
    /// Count of every stored entry, not just this page.
    pub length: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DecisionOutcome {
    pub message: String,
    pub score_gain: i64,
    pub survivor: Survivor,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurvivorCreated {
    pub message: String,
    pub survivor: Survivor,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SurvivorView {
    pub survivor: Survivor,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EntryAdded {
    pub message: String,
    pub entry: LeaderboardEntry,
}

/// Error body returned for every rejected request.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
    pub error: bool,
}

impl ErrorBody {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            error: true,
        }
    }
}
