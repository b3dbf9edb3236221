//! Engine configuration.

use serde::{Deserialize, Serialize};

use crate::oracle::Likelihood;

/// Largest dialog exchange cap.
pub const MAX_EXCHANGE_CAP: u32 = 100;

/// Configuration for an oracle session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// RNG seed for reproducible rolls.
    pub seed: u64,
    /// Likelihood used when a Fate Check doesn't name one.
    pub default_likelihood: Likelihood,
    /// Most exchanges a bulk dialog run rolls (1-100).
    pub dialog_exchange_cap: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            default_likelihood: Likelihood::EvenOdds,
            dialog_exchange_cap: 10,
        }
    }
}

impl EngineConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the default Fate Check likelihood.
    pub fn with_likelihood(mut self, likelihood: Likelihood) -> Self {
        self.default_likelihood = likelihood;
        self
    }

    /// Set the dialog exchange cap (clamped to 1-100).
    pub fn with_exchange_cap(mut self, cap: u32) -> Self {
        self.dialog_exchange_cap = cap.clamp(1, MAX_EXCHANGE_CAP);
        self
    }
}
