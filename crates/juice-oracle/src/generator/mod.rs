//! Stateful generators.
//!
//! Generators are pure functions over explicit state: the caller passes the
//! previous state (or `None` to start fresh) and gets the next state back
//! alongside the roll. Nothing is stored between calls. Supplied state is
//! clamped into range on read.

pub mod dialog;
pub mod dungeon;
pub mod monster;
pub mod trap;
pub mod wilderness;

use serde::{Deserialize, Serialize};

use crate::result::RollResult;

pub use dialog::{Conversation, DialogState};
pub use dungeon::{DungeonOptions, DungeonPhase, DungeonState};
pub use trap::{TrapOptions, TrapOutcome};
pub use wilderness::{EncounterOptions, Environment, WildernessModifier, WildernessState};

/// A generator's roll and the state to pass to its next call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Generated<S> {
    /// The roll.
    pub result: RollResult,
    /// The updated state.
    pub state: S,
}
