//! Stateless oracle resolvers.
//!
//! Each resolver draws from a [`DiceSource`](juice_dice::DiceSource), reads
//! its tables, and returns an [`Outcome`]. When an interpretation calls for
//! another resolver (a double blank on a Fate Check, a History detail) the
//! outcome carries a [`FollowUp`] signal instead of calling the other resolver
//! itself; [`OracleSession`](crate::session::OracleSession) consumes the
//! signal and embeds the follow-up result.

pub mod challenge;
pub mod details;
pub mod dice;
pub mod event;
pub mod fate_check;
pub mod next_scene;
pub mod price;
pub mod tables;

use serde::{Deserialize, Serialize};

use crate::result::RollResult;

pub use challenge::{ChallengeOptions, DcSkew};
pub use fate_check::{FateAnswer, FateCheckOptions, Likelihood};

/// Another resolver an interpretation asks to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FollowUp {
    /// Roll a random event.
    RandomEvent,
    /// Roll on the History table.
    History,
    /// Roll a property with intensity.
    Property,
}

impl std::fmt::Display for FollowUp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::RandomEvent => write!(f, "Random Event"),
            Self::History => write!(f, "History"),
            Self::Property => write!(f, "Property"),
        }
    }
}

/// A resolver's result plus any follow-up it asks for.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// The roll itself.
    pub result: RollResult,
    /// A resolver to run next, if the interpretation calls for one.
    pub follow_up: Option<FollowUp>,
}

impl Outcome {
    /// An outcome with no follow-up.
    pub fn done(result: RollResult) -> Self {
        Self {
            result,
            follow_up: None,
        }
    }

    /// An outcome asking for a follow-up.
    pub fn then(result: RollResult, follow_up: FollowUp) -> Self {
        Self {
            result,
            follow_up: Some(follow_up),
        }
    }
}
