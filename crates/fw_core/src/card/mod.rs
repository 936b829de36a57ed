//! Weekly card simulation
//!
//! The promotion picks up to five signed fighters; each is matched against an
//! opponent and simulated in slot order (main event, co-main, undercard...).
//! Every bout is seeded from the week and both names, so re-simulating a
//! stored card reproduces it exactly.

pub mod opponents;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::config::EngineConfig;
use crate::error::{CoreError, Result};
use crate::fight::{resolve_fight_with_mode, FightOptions};
use crate::models::{CardResult, ContractOffer, Fighter, Role};
use crate::roster::find_fighter;

pub use opponents::{assign_opponents, filler_opponent};

pub const MAX_CARD_SIZE: usize = 5;

/// The promotion's picks for one week, in slot order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FightCard {
    pub week: u32,
    pub fighters: Vec<String>,
}

impl FightCard {
    pub fn new(week: u32, fighters: Vec<String>) -> Self {
        Self { week, fighters }
    }
}

/// Seed for one bout: `w{week}-{fighter}-{opponent}`.
pub fn bout_seed(week: u32, fighter: &str, opponent: &str) -> String {
    format!("w{week}-{fighter}-{opponent}")
}

/// Simulate every bout on the card against the week's roster.
pub fn simulate_card(card: &FightCard, roster: &[Fighter], config: &EngineConfig) -> Result<CardResult> {
    if card.week == 0 {
        return Err(CoreError::InvalidWeek { week: card.week });
    }
    if card.fighters.is_empty() {
        return Err(CoreError::NoFightersSelected);
    }

    let limit = config.max_card_size.min(MAX_CARD_SIZE);
    if card.fighters.len() > limit {
        warn!(
            week = card.week,
            picked = card.fighters.len(),
            limit,
            "too many picks, extra fighters dropped"
        );
    }

    let mut picks: Vec<&Fighter> = Vec::with_capacity(limit);
    for name in card.fighters.iter().take(limit) {
        let fighter = find_fighter(roster, name)
            .ok_or_else(|| CoreError::FighterNotFound { name: name.clone() })?;
        if picks.iter().any(|p| p.name == fighter.name) {
            return Err(CoreError::InvalidFighter(format!("{name} picked more than once")));
        }
        picks.push(fighter);
    }

    let opponents = assign_opponents(roster, &picks, card.week);
    let mode = config.synthesis_mode();

    let fights = picks
        .iter()
        .zip(opponents.iter())
        .enumerate()
        .map(|(slot, (fighter, opponent))| {
            let options = FightOptions::seeded(
                bout_seed(card.week, &fighter.name, &opponent.name),
                Role::for_slot(slot),
            );
            resolve_fight_with_mode(fighter, opponent, &options, mode)
        })
        .collect();

    let result = CardResult::new(card.week, fights);
    info!(
        week = result.week,
        fights = result.fights.len(),
        finishes = result.fights.iter().filter(|f| f.is_finish()).count(),
        card_rating = result.card_rating,
        "card simulated"
    );
    Ok(result)
}

/// Like [`simulate_card`], but every pick must hold one of the week's
/// signed contracts.
pub fn simulate_signed_card(
    card: &FightCard,
    roster: &[Fighter],
    signed: &[ContractOffer],
    config: &EngineConfig,
) -> Result<CardResult> {
    if let Some(name) = card
        .fighters
        .iter()
        .find(|name| !signed.iter().any(|offer| &offer.fighter_name == *name))
    {
        return Err(CoreError::UnsignedFighter { name: name.clone(), week: card.week });
    }
    simulate_card(card, roster, config)
}
