//! Attribute synthesis for fighters without explicit combat stats.
//!
//! Higher hype skews the stats upward; the random spread keeps upsets possible.

use serde::{Deserialize, Serialize};

use crate::models::{CombatAttributes, Fighter};
use crate::rng::RandomSource;

/// Where missing attributes draw their randomness from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SynthesisMode {
    /// Draw from the fight's own seeded sequence (reproducible).
    #[default]
    Seeded,
    /// Draw from unseeded thread entropy, as older stored cards did.
    LegacyAmbient,
}

impl SynthesisMode {
    pub fn from_legacy_flag(legacy: bool) -> Self {
        if legacy {
            SynthesisMode::LegacyAmbient
        } else {
            SynthesisMode::Seeded
        }
    }
}

/// (hype scale, random spread) per attribute.
const POWER_CURVE: (f64, f64) = (0.8, 40.0);
const GRAPPLING_CURVE: (f64, f64) = (0.7, 50.0);
const CARDIO_CURVE: (f64, f64) = (0.9, 20.0);
const CHIN_CURVE: (f64, f64) = (0.85, 30.0);

/// Resolve all four attributes, drawing only for the missing ones.
///
/// Draw order is fixed: power, grappling, cardio, chin.
pub fn synthesize(fighter: &Fighter, rng: &mut dyn RandomSource) -> CombatAttributes {
    let hype = fighter.hype;
    CombatAttributes {
        power: fighter.power.unwrap_or_else(|| derive(hype, POWER_CURVE, rng)),
        grappling: fighter.grappling.unwrap_or_else(|| derive(hype, GRAPPLING_CURVE, rng)),
        cardio: fighter.cardio.unwrap_or_else(|| derive(hype, CARDIO_CURVE, rng)),
        chin: fighter.chin.unwrap_or_else(|| derive(hype, CHIN_CURVE, rng)),
    }
}

fn derive(hype: f64, (scale, spread): (f64, f64), rng: &mut dyn RandomSource) -> f64 {
    (hype * scale + rng.next_f64() * spread).floor()
}
