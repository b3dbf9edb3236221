//! Dice primitives for the Juice solo oracle.
//!
//! Provides standard polyhedral dice, Fate dice (-1/0/+1), advantage and
//! disadvantage pools, a skewed d6, and dice expression parsing. Every draw
//! goes through [`DiceSource`], so callers can swap a seeded RNG or a
//! [`ScriptedDice`] queue in for tests and replays.

pub mod die;
pub mod error;
pub mod expr;
pub mod fate;
pub mod pool;
pub mod skew;
pub mod source;

pub use die::Die;
pub use error::{DiceError, DiceResult};
pub use expr::{DiceExpr, ExprDie};
pub use fate::FateDie;
pub use pool::{PoolComparison, RollMode};
pub use skew::SkewedRoll;
pub use source::{DiceSource, ScriptedDice};
