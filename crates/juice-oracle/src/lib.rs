//! Table-driven solo RPG oracle.
//!
//! Resolves narrative questions into explainable dice results: Fate Checks,
//! next scenes, random events, details, challenges, and consequences, plus
//! stateful generators for dialog, dungeons, traps, and wilderness travel.
//! Every roll comes back as a [`RollResult`] carrying its dice, total,
//! interpretation, kind-specific detail, and any embedded follow-up rolls.

pub mod config;
pub mod error;
pub mod generator;
pub mod oracle;
pub mod result;
pub mod session;
pub mod table;

pub use config::EngineConfig;
pub use error::{OracleError, OracleResult};
pub use generator::Generated;
pub use oracle::{FollowUp, Outcome};
pub use result::{ResultDetail, ResultKind, RollRecord, RollResult};
pub use session::OracleSession;
pub use table::{LookupTable, TableEntry, WordList};
