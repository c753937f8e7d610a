use std::collections::BTreeMap;

use chrono::Utc;
use contracts::{Survivor, UNKNOWN_SURVIVOR_NAME};

use crate::GameError;

/// Process-wide survivor table. Ids start at 1 and are never reused.
#[derive(Debug)]
pub struct SurvivorRegistry {
    survivors: BTreeMap<u64, Survivor>,
    next_id: u64,
}

impl Default for SurvivorRegistry {
    fn default() -> Self {
        Self {
            survivors: BTreeMap::new(),
            next_id: 1,
        }
    }
}

impl SurvivorRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create(&mut self, name: Option<&str>) -> &Survivor {
        let id = self.next_id;
        self.next_id += 1;

        // Blank names get the placeholder; anything else is stored as given.
        let name = name
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNKNOWN_SURVIVOR_NAME);

        self.survivors
            .entry(id)
            .or_insert_with(|| Survivor::new(id, name, Utc::now()))
    }

    pub fn get(&self, id: u64) -> Result<&Survivor, GameError> {
        self.survivors.get(&id).ok_or(GameError::NotFound { id })
    }

    pub fn get_mut(&mut self, id: u64) -> Result<&mut Survivor, GameError> {
        self.survivors
            .get_mut(&id)
            .ok_or(GameError::NotFound { id })
    }

    pub fn len(&self) -> usize {
        self.survivors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.survivors.is_empty()
    }
}
