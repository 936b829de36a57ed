//! Random sources for the fight engine
//!
//! Every fight owns exactly one [`SeededSequence`] built from a string seed.
//! Two sequences built from the same seed yield the same infinite stream, which
//! is the only thing standing between a stored card and a reproducible replay.
//!
//! ## Sequence definition
//!
//! ```text
//! fold:  hash = hash * 31 + code_unit      (i32, wrapping, UTF-16 units)
//! step:  state = state * 1664525 + 1013904223   (i32, wrapping)
//! draw:  |state| / 2^32
//! ```
//!
//! The state is a *signed* 32-bit value, so draws land in `[0, 0.5]`. Stored
//! results depend on this exact stream; do not "fix" it to unsigned.

use rand::Rng;

const LCG_MULTIPLIER: i32 = 1_664_525;
const LCG_INCREMENT: i32 = 1_013_904_223;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// A stream of floating-point draws.
pub trait RandomSource {
    /// Next draw in `[0, 1)`.
    fn next_f64(&mut self) -> f64;
}

/// String-seeded linear congruential sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededSequence {
    state: i32,
}

impl SeededSequence {
    pub fn new(seed: &str) -> Self {
        Self { state: fold_seed(seed) }
    }
}

impl RandomSource for SeededSequence {
    fn next_f64(&mut self) -> f64 {
        self.state = self
            .state
            .wrapping_mul(LCG_MULTIPLIER)
            .wrapping_add(LCG_INCREMENT);
        (self.state as i64).abs() as f64 / TWO_POW_32
    }
}

/// Folds a seed string into the initial 32-bit state.
///
/// Works on UTF-16 code units so non-ASCII seeds fold the same way the
/// stored seeds were produced.
pub fn fold_seed(seed: &str) -> i32 {
    seed.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(unit as i32))
}

/// Unseeded thread-local entropy. Only used by legacy attribute synthesis.
pub struct AmbientSource {
    rng: rand::rngs::ThreadRng,
}

impl AmbientSource {
    pub fn new() -> Self {
        Self { rng: rand::thread_rng() }
    }
}

impl Default for AmbientSource {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for AmbientSource {
    fn next_f64(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed list of draws, then yields 0.0 once exhausted.
///
/// Lets callers force specific branches of the resolver.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    draws: Vec<f64>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(draws: Vec<f64>) -> Self {
        Self { draws, cursor: 0 }
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

impl RandomSource for ScriptedSource {
    fn next_f64(&mut self) -> f64 {
        let value = self.draws.get(self.cursor).copied().unwrap_or(0.0);
        self.cursor += 1;
        value
    }
}
