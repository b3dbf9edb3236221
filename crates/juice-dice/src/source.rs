//! The randomness seam.
//!
//! Everything that draws dice takes a [`DiceSource`]. Any `rand::Rng` is a
//! source, so production code passes a seeded `StdRng`; tests pass a
//! [`ScriptedDice`] queue to pin exact faces.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::fate::FateDie;
use crate::pool::{PoolComparison, RollMode};
use crate::skew::{self, SkewedRoll};

/// A source of die draws.
pub trait DiceSource {
    /// Roll one die with `sides` faces, returning a value in `1..=sides`.
    /// A zero-sided die is treated as one-sided.
    fn roll_die(&mut self, sides: u32) -> u32;

    /// Roll `count` dice with `sides` faces each.
    fn roll_dice(&mut self, count: u32, sides: u32) -> Vec<u32> {
        (0..count).map(|_| self.roll_die(sides)).collect()
    }

    /// Roll one Fate die.
    fn roll_fate_die(&mut self) -> FateDie {
        FateDie::from_d3(self.roll_die(3))
    }

    /// Roll `count` Fate dice.
    fn roll_fate_dice(&mut self, count: u32) -> Vec<FateDie> {
        (0..count).map(|_| self.roll_fate_die()).collect()
    }

    /// Draw two pools of `count` dice and keep the higher sum.
    fn roll_with_advantage(&mut self, count: u32, sides: u32) -> PoolComparison {
        self.roll_pool(RollMode::Advantage, count, sides)
    }

    /// Draw two pools of `count` dice and keep the lower sum.
    fn roll_with_disadvantage(&mut self, count: u32, sides: u32) -> PoolComparison {
        self.roll_pool(RollMode::Disadvantage, count, sides)
    }

    /// Roll `count` dice under the given mode. Straight rolls draw one pool,
    /// the other modes draw two.
    fn roll_pool(&mut self, mode: RollMode, count: u32, sides: u32) -> PoolComparison {
        let first = self.roll_dice(count, sides);
        let second = match mode {
            RollMode::Straight => Vec::new(),
            RollMode::Advantage | RollMode::Disadvantage => self.roll_dice(count, sides),
        };
        PoolComparison::compare(mode, first, second)
    }

    /// Roll a d6 biased toward 6 (positive skew) or 1 (negative skew).
    /// Skew is clamped to `-3..=3`.
    fn roll_skewed_d6(&mut self, skew: i32) -> SkewedRoll {
        let clamped = skew.clamp(-skew::MAX_SKEW, skew::MAX_SKEW);
        if clamped != skew {
            tracing::debug!(skew, clamped, "skew out of range, clamping");
        }
        let raw = self.roll_die(skew::total_weight(clamped));
        SkewedRoll {
            value: skew::face_for_draw(clamped, raw),
            skew: clamped,
            raw,
        }
    }

    /// Flip a coin; true on heads.
    fn coin_flip(&mut self) -> bool {
        self.roll_die(2) == 1
    }
}

impl<R: Rng> DiceSource for R {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.random_range(1..=sides.max(1))
    }
}

/// A dice source that replays a fixed queue of values.
///
/// Each queued value is clamped into the requested die's range. Once the
/// queue runs dry, draws come from a `StdRng` seeded with zero so scripted
/// sessions stay deterministic.
#[derive(Debug, Clone)]
pub struct ScriptedDice {
    queue: VecDeque<u32>,
    fallback: StdRng,
}

impl ScriptedDice {
    /// Script the given values in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            queue: values.into_iter().collect(),
            fallback: StdRng::seed_from_u64(0),
        }
    }

    /// Queue another raw value.
    pub fn push(&mut self, value: u32) -> &mut Self {
        self.queue.push_back(value);
        self
    }

    /// Queue a Fate face.
    pub fn push_fate(&mut self, face: FateDie) -> &mut Self {
        self.push(face.to_d3())
    }

    /// Number of values still queued.
    pub fn remaining(&self) -> usize {
        self.queue.len()
    }
}

impl DiceSource for ScriptedDice {
    fn roll_die(&mut self, sides: u32) -> u32 {
        let sides = sides.max(1);
        match self.queue.pop_front() {
            Some(value) => value.clamp(1, sides),
            None => self.fallback.random_range(1..=sides),
        }
    }
}
