//! Fight outcome resolution
//!
//! One Bernoulli trial decides the winner, one roll plus the attribute gaps
//! picks the method, then damage and viewer impact are drawn.
//!
//! ## Draw order (consumed from one sequence per fight)
//!
//! ```text
//! synthesis(A) -> synthesis(B) -> outcome -> method roll
//!   -> [round, KO/Sub only] -> winner damage -> loser damage -> impact jitter
//! ```
//!
//! The role bonus applies to fighter A only. A is the promotion's own
//! fighter; B never receives it.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::attributes::{synthesize, SynthesisMode};
use crate::models::{CombatAttributes, FightMethod, FightResult, Fighter, Role};
use crate::rng::{AmbientSource, RandomSource, SeededSequence};

const KO_ROLL_GATE: f64 = 0.30;
const KO_POWER_GAP: f64 = 15.0;
const KO_BRUTAL_GAP: f64 = 30.0;
const KO_MAX_ROUND: u32 = 3;

const SUB_ROLL_GATE: f64 = 0.50;
const SUB_GRAPPLING_GAP: f64 = 20.0;
const SUB_DOMINANT_GAP: f64 = 35.0;
const SUB_MAX_ROUND: u32 = 5;

const DECISION_ROUND: u32 = 3;
const UNANIMOUS_MARGIN: f64 = 2.0;

const MAX_VIEWER_IMPACT: f64 = 100.0;

/// Per-call options. Both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FightOptions {
    /// Without a seed the fight is keyed on names plus the current time and
    /// will not replay.
    pub seed: Option<String>,
    /// Defaults to undercard.
    pub role: Option<Role>,
}

impl FightOptions {
    pub fn seeded(seed: impl Into<String>, role: Role) -> Self {
        Self { seed: Some(seed.into()), role: Some(role) }
    }
}

/// Simulate a bout with seeded attribute synthesis.
pub fn resolve_fight(a: &Fighter, b: &Fighter, options: &FightOptions) -> FightResult {
    resolve_fight_with_mode(a, b, options, SynthesisMode::Seeded)
}

pub fn resolve_fight_with_mode(
    a: &Fighter,
    b: &Fighter,
    options: &FightOptions,
    mode: SynthesisMode,
) -> FightResult {
    let role = options.role.unwrap_or_default();
    let seed = match &options.seed {
        Some(seed) => seed.clone(),
        None => {
            let seed = default_seed(a, b);
            debug!(seed = %seed, "no seed supplied, fight will not be reproducible");
            seed
        }
    };

    let mut sequence = SeededSequence::new(&seed);
    resolve_with_source(a, b, role, &mut sequence, mode)
}

/// Core resolution against an injected random source.
pub fn resolve_with_source(
    a: &Fighter,
    b: &Fighter,
    role: Role,
    rng: &mut dyn RandomSource,
    mode: SynthesisMode,
) -> FightResult {
    let (stats_a, stats_b) = match mode {
        SynthesisMode::Seeded => {
            let stats_a = synthesize(a, rng);
            let stats_b = synthesize(b, rng);
            (stats_a, stats_b)
        }
        SynthesisMode::LegacyAmbient => {
            if !a.has_full_attributes() || !b.has_full_attributes() {
                debug!(a = %a.name, b = %b.name, "synthesizing missing attributes from ambient entropy");
            }
            let mut ambient = AmbientSource::new();
            (synthesize(a, &mut ambient), synthesize(b, &mut ambient))
        }
    };

    let effectiveness_a = stats_a.effectiveness() * role.advantage_multiplier();
    let effectiveness_b = stats_b.effectiveness();

    let advantage_a = effectiveness_a / (effectiveness_a + effectiveness_b);
    let a_wins = rng.next_f64() < advantage_a;

    let (winner, loser, winner_stats, loser_stats) = if a_wins {
        (a, b, &stats_a, &stats_b)
    } else {
        (b, a, &stats_b, &stats_a)
    };

    let finish = decide_method(
        winner_stats,
        loser_stats,
        effectiveness_a - effectiveness_b,
        rng,
    );

    let base_damage = finish.method.base_damage();
    let winner_damage = (base_damage * 0.3 + rng.next_f64() * 20.0).floor() as u32;
    let loser_damage = (base_damage * 0.8 + rng.next_f64() * 20.0).floor() as u32;

    let avg_hype = (a.hype + b.hype) / 2.0;
    let raw_impact = (avg_hype
        * finish.method.viewer_multiplier()
        * role.viewer_multiplier()
        * (0.8 + rng.next_f64() * 0.4))
        .floor();
    let viewers_impact = raw_impact.clamp(0.0, MAX_VIEWER_IMPACT) as u32;

    trace!(
        winner = %winner.name,
        loser = %loser.name,
        advantage_a,
        method = %finish.method,
        round = finish.round,
        raw_impact,
        "fight resolved"
    );

    let mut damage = BTreeMap::new();
    damage.insert(winner.name.clone(), winner_damage);
    damage.insert(loser.name.clone(), loser_damage);

    FightResult {
        winner: winner.name.clone(),
        loser: loser.name.clone(),
        method: finish.method,
        round: finish.round,
        notes: finish.notes.to_string(),
        damage,
        viewers_impact,
    }
}

struct Finish {
    method: FightMethod,
    round: u32,
    notes: &'static str,
}

/// KO is checked before Sub before Dec. The gaps gate the finish regardless
/// of which side won.
fn decide_method(
    winner: &CombatAttributes,
    loser: &CombatAttributes,
    effectiveness_diff: f64,
    rng: &mut dyn RandomSource,
) -> Finish {
    let power_gap = (winner.power - loser.power).abs();
    let grappling_gap = (winner.grappling - loser.grappling).abs();
    let method_roll = rng.next_f64();

    if method_roll < KO_ROLL_GATE && power_gap > KO_POWER_GAP {
        Finish {
            method: FightMethod::Ko,
            round: draw_round(rng, 3.0, KO_MAX_ROUND),
            notes: if power_gap > KO_BRUTAL_GAP { "Brutal knockout!" } else { "Clean finish" },
        }
    } else if method_roll < SUB_ROLL_GATE && grappling_gap > SUB_GRAPPLING_GAP {
        Finish {
            method: FightMethod::Sub,
            round: draw_round(rng, 4.0, SUB_MAX_ROUND),
            notes: if grappling_gap > SUB_DOMINANT_GAP {
                "Dominant submission"
            } else {
                "Technical submission"
            },
        }
    } else {
        let score_diff = (effectiveness_diff / 10.0).floor();
        Finish {
            method: FightMethod::Dec,
            round: DECISION_ROUND,
            notes: if score_diff.abs() > UNANIMOUS_MARGIN {
                "Unanimous decision"
            } else {
                "Close split decision"
            },
        }
    }
}

fn draw_round(rng: &mut dyn RandomSource, span: f64, max_round: u32) -> u32 {
    ((rng.next_f64() * span).floor() as u32 + 1).min(max_round)
}

fn default_seed(a: &Fighter, b: &Fighter) -> String {
    format!("{}-{}-{}", a.name, b.name, chrono::Utc::now().timestamp_millis())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ScriptedSource;

    fn fighter(name: &str, hype: f64, attrs: (f64, f64, f64, f64)) -> Fighter {
        Fighter::new(name, 185, hype, "10-2", "Available").with_attributes(attrs.0, attrs.1, attrs.2, attrs.3)
    }

    fn golden_pair() -> (Fighter, Fighter) {
        (
            fighter("A", 90.0, (90.0, 50.0, 80.0, 70.0)),
            fighter("B", 60.0, (40.0, 30.0, 60.0, 50.0)),
        )
    }

    #[test]
    fn test_golden_main_event() {
        let (a, b) = golden_pair();
        let result = resolve_fight(&a, &b, &FightOptions::seeded("test-1", Role::MainEvent));

        assert_eq!(result.winner, "A");
        assert_eq!(result.loser, "B");
        assert_eq!(result.method, FightMethod::Ko);
        assert_eq!(result.round, 1);
        assert_eq!(result.notes, "Brutal knockout!");
        assert_eq!(result.damage_taken("A"), Some(27));
        assert_eq!(result.damage_taken("B"), Some(64));
        // raw impact is 105 before the clamp
        assert_eq!(result.viewers_impact, 100);
    }

    #[test]
    fn test_golden_undercard_and_co_main_impact() {
        let (a, b) = golden_pair();
        let undercard = resolve_fight(&a, &b, &FightOptions::seeded("test-1", Role::Undercard));
        let co_main = resolve_fight(&a, &b, &FightOptions::seeded("test-1", Role::CoMain));

        assert_eq!(undercard.method, FightMethod::Ko);
        assert_eq!(undercard.viewers_impact, 70);
        assert_eq!(co_main.viewers_impact, 87);
    }

    #[test]
    fn test_missing_role_defaults_to_undercard() {
        let (a, b) = golden_pair();
        let options = FightOptions { seed: Some("test-1".into()), role: None };
        assert_eq!(
            resolve_fight(&a, &b, &options),
            resolve_fight(&a, &b, &FightOptions::seeded("test-1", Role::Undercard))
        );
    }

    #[test]
    fn test_ko_gate() {
        let a = fighter("A", 70.0, (90.0, 50.0, 60.0, 60.0));
        let b = fighter("B", 70.0, (60.0, 50.0, 60.0, 60.0));
        // outcome, method roll, round, winner dmg, loser dmg, impact
        let mut source = ScriptedSource::new(vec![0.0, 0.1, 0.5, 0.0, 0.0, 0.0]);

        let result = resolve_with_source(&a, &b, Role::Undercard, &mut source, SynthesisMode::Seeded);

        assert_eq!(result.winner, "A");
        assert_eq!(result.method, FightMethod::Ko);
        assert_eq!(result.round, 2);
        assert_eq!(result.notes, "Clean finish");
        assert_eq!(result.damage_taken("A"), Some(24));
        assert_eq!(result.damage_taken("B"), Some(64));
        assert_eq!(source.consumed(), 6);
    }

    #[test]
    fn test_sub_gate_when_power_gap_too_small() {
        let a = fighter("A", 70.0, (60.0, 90.0, 60.0, 60.0));
        let b = fighter("B", 70.0, (50.0, 50.0, 60.0, 60.0));
        let mut source = ScriptedSource::new(vec![0.0, 0.1, 0.9, 0.0, 0.0, 0.0]);

        let result = resolve_with_source(&a, &b, Role::Undercard, &mut source, SynthesisMode::Seeded);

        assert_eq!(result.method, FightMethod::Sub);
        assert_eq!(result.round, 4);
        assert_eq!(result.notes, "Dominant submission");
    }

    #[test]
    fn test_sub_gate_between_ko_and_sub_rolls() {
        let a = fighter("A", 70.0, (95.0, 80.0, 60.0, 60.0));
        let b = fighter("B", 70.0, (40.0, 55.0, 60.0, 60.0));
        let mut source = ScriptedSource::new(vec![0.0, 0.4, 0.0, 0.0, 0.0, 0.0]);

        let result = resolve_with_source(&a, &b, Role::Undercard, &mut source, SynthesisMode::Seeded);

        assert_eq!(result.method, FightMethod::Sub);
        assert_eq!(result.round, 1);
        assert_eq!(result.notes, "Technical submission");
    }

    #[test]
    fn test_decision_when_gates_closed() {
        let a = fighter("A", 70.0, (95.0, 95.0, 60.0, 60.0));
        let b = fighter("B", 70.0, (40.0, 40.0, 60.0, 60.0));
        // roll above both gates: no round draw is consumed
        let mut source = ScriptedSource::new(vec![0.0, 0.6, 0.0, 0.0, 0.0]);

        let result = resolve_with_source(&a, &b, Role::Undercard, &mut source, SynthesisMode::Seeded);

        assert_eq!(result.method, FightMethod::Dec);
        assert_eq!(result.round, 3);
        // (77.5 - 50) / 10 floors to 2, not above the margin
        assert_eq!(result.notes, "Close split decision");
        assert_eq!(source.consumed(), 5);
    }

    #[test]
    fn test_decision_when_no_gap_even_with_low_roll() {
        let a = fighter("A", 70.0, (70.0, 70.0, 90.0, 90.0));
        let b = fighter("B", 70.0, (60.0, 60.0, 30.0, 30.0));
        let mut source = ScriptedSource::new(vec![0.0, 0.05, 0.0, 0.0, 0.0]);

        let result = resolve_with_source(&a, &b, Role::Undercard, &mut source, SynthesisMode::Seeded);

        assert_eq!(result.method, FightMethod::Dec);
        // (80 - 45) / 10 floors to 3
        assert_eq!(result.notes, "Unanimous decision");
    }

    #[test]
    fn test_b_can_win_and_gaps_use_winner_minus_loser() {
        let a = fighter("A", 50.0, (40.0, 40.0, 40.0, 40.0));
        let b = fighter("B", 50.0, (80.0, 40.0, 40.0, 40.0));
        let mut source = ScriptedSource::new(vec![0.49, 0.2, 0.99, 0.0, 0.0, 0.0]);

        let result = resolve_with_source(&a, &b, Role::Undercard, &mut source, SynthesisMode::Seeded);

        assert_eq!(result.winner, "B");
        assert_eq!(result.loser, "A");
        assert_eq!(result.method, FightMethod::Ko);
        assert_eq!(result.round, 3);
        assert_eq!(result.notes, "Brutal knockout!");
    }

    #[test]
    fn test_role_bonus_only_favours_first_fighter() {
        let a = fighter("A", 50.0, (50.0, 50.0, 50.0, 50.0));
        let b = fighter("B", 50.0, (50.0, 50.0, 50.0, 50.0));
        // advantage is 0.5 undercard, ~0.524 main event
        let draws = vec![0.51, 0.9, 0.0, 0.0, 0.0];

        let undercard = resolve_with_source(
            &a, &b, Role::Undercard, &mut ScriptedSource::new(draws.clone()), SynthesisMode::Seeded,
        );
        let main_event = resolve_with_source(
            &a, &b, Role::MainEvent, &mut ScriptedSource::new(draws), SynthesisMode::Seeded,
        );

        assert_eq!(undercard.winner, "B");
        assert_eq!(main_event.winner, "A");
    }

    #[test]
    fn test_unseeded_fight_still_produces_valid_result() {
        let (a, b) = golden_pair();
        let result = resolve_fight(&a, &b, &FightOptions::default());
        assert!(result.viewers_impact <= 100);
        assert!(result.round >= 1);
        assert_eq!(result.damage.len(), 2);
    }

    #[test]
    fn test_seeded_synthesis_draws_before_the_outcome_roll() {
        let a = Fighter::new("A", 185, 50.0, "3-3", "Prospect");
        let b = fighter("B", 50.0, (50.0, 50.0, 50.0, 50.0));
        // power, grappling, cardio, chin for A, then outcome, method, damage x2, impact
        let mut source = ScriptedSource::new(vec![0.0, 0.0, 0.0, 0.0, 0.0, 0.9, 0.0, 0.0, 0.0]);

        let result = resolve_with_source(&a, &b, Role::Undercard, &mut source, SynthesisMode::Seeded);

        // A synthesizes to (40, 35, 45, 42): effectiveness 40.5 against 50
        assert_eq!(result.winner, "A");
        assert_eq!(result.method, FightMethod::Dec);
        assert_eq!(result.notes, "Close split decision");
        assert_eq!(source.consumed(), 9);
    }

    #[test]
    fn test_legacy_synthesis_leaves_the_sequence_to_the_bout() {
        let a = Fighter::new("A", 185, 50.0, "3-3", "Prospect");
        let b = fighter("B", 50.0, (50.0, 50.0, 50.0, 50.0));
        // outcome, method roll above both gates, damage x2, impact
        let mut source = ScriptedSource::new(vec![0.0, 0.9, 0.0, 0.0, 0.0]);

        let result = resolve_with_source(&a, &b, Role::Undercard, &mut source, SynthesisMode::LegacyAmbient);

        assert_eq!(result.method, FightMethod::Dec);
        assert_eq!(result.round, 3);
        assert_eq!(source.consumed(), 5);
    }

    #[test]
    fn test_legacy_mode_leaves_explicit_stats_reproducible() {
        let (a, b) = golden_pair();
        let options = FightOptions::seeded("test-1", Role::MainEvent);
        assert_eq!(
            resolve_fight_with_mode(&a, &b, &options, SynthesisMode::LegacyAmbient),
            resolve_fight(&a, &b, &options)
        );
    }
}
