//! Roll sources and the 2d6 draw primitive
//!
//! Every random number the engine consumes goes through [`roll_2d6`].
//! A [`RollSource`] only supplies uniform draws in [0, 1); callers pick
//! a seeded generator for live play or a scripted one for tests and replays.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Faces on one die
const DIE_FACES: f64 = 6.0;

/// Provider of independent uniform draws in [0, 1)
pub trait RollSource {
    /// Next uniform draw in [0, 1)
    fn next_unit(&mut self) -> f64;
}

impl<S: RollSource + ?Sized> RollSource for &mut S {
    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

/// One die face (1-6) from a single uniform draw
fn roll_die(source: &mut impl RollSource) -> u8 {
    let unit = source.next_unit();
    let face = (unit * DIE_FACES).floor() as i64 + 1;
    face.clamp(1, 6) as u8
}

/// Sum of two dice, always in 2..=12
///
/// Consumes exactly two uniform draws from `source`.
pub fn roll_2d6(source: &mut impl RollSource) -> u8 {
    let first = roll_die(source);
    let second = roll_die(source);
    first + second
}

/// Seeded ChaCha8 roll source
///
/// Two sources built from the same seed produce the same rolls in the same order.
#[derive(Debug, Clone)]
pub struct SeededRollSource {
    rng: ChaCha8Rng,
}

impl SeededRollSource {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Seed from OS entropy. Only meant for the outermost call boundary.
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_entropy(),
        }
    }
}

impl RollSource for SeededRollSource {
    fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }
}

/// Replays a fixed sequence of uniform draws
///
/// Once the script runs out every further draw yields 0.0 (a die face of 1)
/// and is counted in [`ScriptedRolls::overruns`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedRolls {
    units: Vec<f64>,
    cursor: usize,
    overruns: usize,
}

impl ScriptedRolls {
    pub fn from_units(units: Vec<f64>) -> Self {
        Self {
            units,
            cursor: 0,
            overruns: 0,
        }
    }

    /// Script that makes successive [`roll_2d6`] calls return `totals`
    ///
    /// Totals outside 2..=12 are clamped into that range.
    pub fn from_totals(totals: &[u8]) -> Self {
        let units = totals
            .iter()
            .flat_map(|&total| {
                let total = total.clamp(2, 12);
                let first = (total - 1).min(6);
                let second = total - first;
                [face_to_unit(first), face_to_unit(second)]
            })
            .collect();
        Self::from_units(units)
    }

    /// Number of complete 2d6 rolls drawn so far
    pub fn rolls_drawn(&self) -> usize {
        (self.cursor + self.overruns) / 2
    }

    /// Uniform draws requested after the script was exhausted
    pub fn overruns(&self) -> usize {
        self.overruns
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.units.len()
    }
}

impl RollSource for ScriptedRolls {
    fn next_unit(&mut self) -> f64 {
        match self.units.get(self.cursor) {
            Some(&unit) => {
                self.cursor += 1;
                unit
            }
            None => {
                self.overruns += 1;
                tracing::warn!("Scripted roll source exhausted after {} draws", self.cursor);
                0.0
            }
        }
    }
}

/// Centre of the uniform bucket that maps to `face`
fn face_to_unit(face: u8) -> f64 {
    (f64::from(face) - 0.5) / DIE_FACES
}

/// Wraps another source and records every draw it hands out
///
/// The recording can be turned back into a [`ScriptedRolls`] to replay a match.
#[derive(Debug, Clone)]
pub struct RecordingRollSource<S> {
    inner: S,
    recorded: Vec<f64>,
}

impl<S: RollSource> RecordingRollSource<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            recorded: Vec::new(),
        }
    }

    pub fn recorded(&self) -> &[f64] {
        &self.recorded
    }

    pub fn replay(&self) -> ScriptedRolls {
        ScriptedRolls::from_units(self.recorded.clone())
    }
}

impl<S: RollSource> RollSource for RecordingRollSource<S> {
    fn next_unit(&mut self) -> f64 {
        let unit = self.inner.next_unit();
        self.recorded.push(unit);
        unit
    }
}
