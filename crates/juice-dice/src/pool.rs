//! Advantage and disadvantage pools.
//!
//! An advantage roll draws two independent pools of the same dice and keeps
//! the pool with the higher sum; disadvantage keeps the lower. Both pools are
//! reported so callers can detect ties ("doubles" when each pool is a single
//! die), which several generators use as a state trigger.

use serde::{Deserialize, Serialize};

/// Which pool a roll keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum RollMode {
    /// A single pool, nothing discarded.
    #[default]
    Straight,
    /// Two pools, keep the higher sum.
    Advantage,
    /// Two pools, keep the lower sum.
    Disadvantage,
}

impl RollMode {
    /// Pick a mode from a net skew: positive favors advantage, negative
    /// disadvantage, zero rolls straight.
    pub fn from_net_skew(net: i32) -> Self {
        match net.signum() {
            1 => Self::Advantage,
            -1 => Self::Disadvantage,
            _ => Self::Straight,
        }
    }

    /// Parse a mode from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "straight" | "none" | "normal" => Some(Self::Straight),
            "advantage" | "adv" | "high" | "+" => Some(Self::Advantage),
            "disadvantage" | "dis" | "low" | "-" => Some(Self::Disadvantage),
            _ => None,
        }
    }
}

impl std::fmt::Display for RollMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Straight => write!(f, "straight"),
            Self::Advantage => write!(f, "advantage"),
            Self::Disadvantage => write!(f, "disadvantage"),
        }
    }
}

/// The outcome of drawing one or two pools and keeping one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolComparison {
    /// How the kept pool was chosen.
    pub mode: RollMode,
    /// The kept pool.
    pub chosen: Vec<u32>,
    /// The other pool; empty for straight rolls.
    pub discarded: Vec<u32>,
}

/// Sum of a pool, saturating at `u32::MAX`.
fn pool_sum(pool: &[u32]) -> u32 {
    pool.iter().fold(0, |acc, d| acc.saturating_add(*d))
}

impl PoolComparison {
    /// Compare two drawn pools and keep one according to `mode`.
    ///
    /// On equal sums the first pool is kept. `Straight` keeps `first` and
    /// drops `second` entirely.
    pub fn compare(mode: RollMode, first: Vec<u32>, second: Vec<u32>) -> Self {
        let first_sum = pool_sum(&first);
        let second_sum = pool_sum(&second);
        let keep_first = match mode {
            RollMode::Straight => {
                return Self {
                    mode,
                    chosen: first,
                    discarded: Vec::new(),
                };
            }
            RollMode::Advantage => first_sum >= second_sum,
            RollMode::Disadvantage => first_sum <= second_sum,
        };
        let (chosen, discarded) = if keep_first {
            (first, second)
        } else {
            (second, first)
        };
        Self {
            mode,
            chosen,
            discarded,
        }
    }

    /// Sum of the kept pool.
    pub fn chosen_sum(&self) -> u32 {
        pool_sum(&self.chosen)
    }

    /// Sum of the discarded pool, or `None` for a straight roll.
    pub fn discarded_sum(&self) -> Option<u32> {
        if self.mode == RollMode::Straight {
            None
        } else {
            Some(pool_sum(&self.discarded))
        }
    }

    /// True when two pools were drawn and their sums are equal.
    pub fn is_tie(&self) -> bool {
        self.discarded_sum() == Some(self.chosen_sum())
    }

    /// Every die drawn, kept pool first.
    pub fn all_dice(&self) -> Vec<u32> {
        self.chosen
            .iter()
            .chain(self.discarded.iter())
            .copied()
            .collect()
    }
}

impl std::fmt::Display for PoolComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let join = |dice: &[u32]| {
            dice.iter()
                .map(|d| d.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        };
        match self.discarded_sum() {
            None => write!(f, "[{}] = {}", join(&self.chosen), self.chosen_sum()),
            Some(dropped) => write!(
                f,
                "[{}] = {} ({}, dropped [{}] = {dropped})",
                join(&self.chosen),
                self.chosen_sum(),
                self.mode,
                join(&self.discarded),
            ),
        }
    }
}
