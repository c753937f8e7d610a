//! Daily decision resolution: one recognised action, then the global daily drain, then status.

use contracts::{Decision, DecisionLogEntry, Survivor, SurvivorStatus, STAT_MAX, STAT_MIN};

use crate::dice::Dice;
use crate::GameError;

pub const FOOD_SUCCESS_THRESHOLD: f64 = 0.6;
pub const ALLIES_SUCCESS_THRESHOLD: f64 = 0.5;
pub const SHELTER_MIN_HUNGER: i32 = 30;
pub const SHELTER_BUILD_AMOUNT: i32 = 30;
pub const REST_HEAL_AMOUNT: i32 = 25;
pub const DAILY_DRAIN: i32 = 10;
pub const ESCAPE_DAY: u32 = 14;
pub const ESCAPE_MIN_HEALTH: i32 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub decision: Decision,
    pub message: &'static str,
    pub score_gain: i64,
}

/// Resolve `raw_decision` against `survivor`, mutating it in place.
///
/// A non-alive survivor is rejected before the decision string is looked at.
/// Rejections leave the survivor untouched.
pub fn resolve(
    survivor: &mut Survivor,
    raw_decision: &str,
    dice: &mut dyn Dice,
) -> Result<Resolution, GameError> {
    if !survivor.status.is_alive() {
        return Err(GameError::InvalidState { id: survivor.id });
    }

    let Some(decision) = Decision::parse(raw_decision) else {
        return Err(GameError::InvalidChoice {
            decision: raw_decision.to_string(),
        });
    };

    Ok(apply(survivor, decision, dice))
}

fn apply(survivor: &mut Survivor, decision: Decision, dice: &mut dyn Dice) -> Resolution {
    debug_assert!(survivor.status.is_alive());

    let (message, score_gain) = match decision {
        Decision::Food => forage(survivor, dice),
        Decision::Shelter => build_shelter(survivor),
        Decision::Allies => seek_allies(survivor, dice),
        Decision::Rest => rest(survivor),
    };

    survivor.hunger = drain(survivor.hunger);
    survivor.health = drain(survivor.health);
    survivor.morale = drain(survivor.morale);

    let resolved_day = survivor.day;
    survivor.day += 1;
    survivor.score += score_gain;
    survivor.status = next_status(survivor);
    survivor.decisions.push(DecisionLogEntry {
        day: resolved_day,
        decision,
        result: message.to_string(),
    });

    Resolution {
        decision,
        message,
        score_gain,
    }
}

fn forage(survivor: &mut Survivor, dice: &mut dyn Dice) -> (&'static str, i64) {
    if dice.roll() > FOOD_SUCCESS_THRESHOLD {
        survivor.hunger = STAT_MAX;
        ("Food found", 20)
    } else {
        survivor.health -= 25;
        survivor.hunger -= 10;
        ("Food not found", -10)
    }
}

fn build_shelter(survivor: &mut Survivor) -> (&'static str, i64) {
    if survivor.hunger < SHELTER_MIN_HUNGER {
        survivor.health -= 20;
        ("Too hungry to build shelter", -10)
    } else {
        survivor.shelter = (survivor.shelter + SHELTER_BUILD_AMOUNT).min(STAT_MAX);
        survivor.hunger -= 10;
        ("Built shelter", 20)
    }
}

fn seek_allies(survivor: &mut Survivor, dice: &mut dyn Dice) -> (&'static str, i64) {
    if dice.roll() > ALLIES_SUCCESS_THRESHOLD {
        survivor.allies += 1;
        survivor.morale = STAT_MAX;
        ("Found allies", 25)
    } else {
        survivor.health -= 10;
        survivor.morale -= 10;
        ("No allies found", -25)
    }
}

fn rest(survivor: &mut Survivor) -> (&'static str, i64) {
    survivor.health = (survivor.health + REST_HEAL_AMOUNT).min(STAT_MAX);
    ("Rested peacefully", 20)
}

fn drain(value: i32) -> i32 {
    (value - DAILY_DRAIN).clamp(STAT_MIN, STAT_MAX)
}

// Death wins over escape.
fn next_status(survivor: &Survivor) -> SurvivorStatus {
    if survivor.health <= STAT_MIN {
        SurvivorStatus::Dead
    } else if survivor.day >= ESCAPE_DAY && survivor.health > ESCAPE_MIN_HEALTH {
        SurvivorStatus::Escaped
    } else {
        SurvivorStatus::Alive
    }
}
