//! Trap procedure.
//!
//! Roll a DC the same way challenges do. Searching characters who beat it
//! avoid the trap and those who fail at least locate it; characters who
//! aren't searching locate it on a pass and trigger it on a fail.

use juice_dice::DiceSource;
use serde::{Deserialize, Serialize};

use crate::oracle::Outcome;
use crate::oracle::challenge::{DcRoll, DcSkew, roll_dc};
use crate::result::{ResultDetail, RollResult};

/// What happens with the trap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrapOutcome {
    /// Found and bypassed.
    Avoid,
    /// Found but not yet dealt with.
    Locate,
    /// Sprung.
    Trigger,
}

impl TrapOutcome {
    /// Read the searching/pass table.
    pub fn resolve(searching: bool, passed: bool) -> Self {
        match (searching, passed) {
            (true, true) => Self::Avoid,
            (true, false) | (false, true) => Self::Locate,
            (false, false) => Self::Trigger,
        }
    }
}

impl std::fmt::Display for TrapOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Avoid => write!(f, "Avoid"),
            Self::Locate => write!(f, "Locate"),
            Self::Trigger => write!(f, "Trigger"),
        }
    }
}

/// Options for the trap procedure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrapOptions {
    /// The character is actively searching.
    pub searching: bool,
    /// Skew applied to the DC roll.
    pub skew: DcSkew,
    /// The character's check total, if already rolled.
    pub check: Option<i32>,
}

/// Kind-specific fields of the trap procedure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrapDetail {
    /// The character was searching.
    pub searching: bool,
    /// Skew applied to the DC.
    pub skew: DcSkew,
    /// The DC roll.
    pub dc: DcRoll,
    /// The check total, if supplied.
    pub check: Option<i32>,
    /// Whether the check met the DC.
    pub passed: Option<bool>,
    /// The outcome, once a check is known.
    pub outcome: Option<TrapOutcome>,
}

/// Run the trap procedure. Without a check total only the DC is reported.
pub fn resolve<R: DiceSource>(rng: &mut R, options: TrapOptions) -> Outcome {
    let dc = roll_dc(rng, options.skew);
    let passed = options.check.map(|check| check >= dc.dc);
    let outcome = passed.map(|passed| TrapOutcome::resolve(options.searching, passed));

    let text = match (options.check, outcome) {
        (Some(check), Some(outcome)) => format!("DC {}: check {check}, {outcome}", dc.dc),
        _ if options.searching => format!("DC {}: pass to avoid, fail to locate", dc.dc),
        _ => format!("DC {}: pass to locate, fail to trigger", dc.dc),
    };

    let result = RollResult::new(
        "Trap",
        dc.dice.iter().map(|d| *d as i32).collect(),
        dc.dc,
        ResultDetail::Trap(TrapDetail {
            searching: options.searching,
            skew: options.skew,
            dc,
            check: options.check,
            passed,
            outcome,
        }),
    )
    .with_interpretation(text);
    Outcome::done(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use juice_dice::ScriptedDice;

    fn detail(outcome: &Outcome) -> &TrapDetail {
        match &outcome.result.detail {
            ResultDetail::Trap(d) => d,
            other => panic!("expected trap, got {:?}", other.kind()),
        }
    }

    #[test]
    fn outcome_table() {
        assert_eq!(TrapOutcome::resolve(true, true), TrapOutcome::Avoid);
        assert_eq!(TrapOutcome::resolve(true, false), TrapOutcome::Locate);
        assert_eq!(TrapOutcome::resolve(false, true), TrapOutcome::Locate);
        assert_eq!(TrapOutcome::resolve(false, false), TrapOutcome::Trigger);
    }

    #[test]
    fn check_meeting_dc_passes() {
        let options = TrapOptions {
            searching: true,
            check: Some(14),
            ..TrapOptions::default()
        };
        let outcome = resolve(&mut ScriptedDice::new([4]), options);
        assert_eq!(detail(&outcome).dc.dc, 14);
        assert_eq!(detail(&outcome).passed, Some(true));
        assert_eq!(detail(&outcome).outcome, Some(TrapOutcome::Avoid));
        assert_eq!(outcome.result.total, 14);
    }

    #[test]
    fn failed_check_without_search_triggers() {
        let options = TrapOptions {
            check: Some(10),
            ..TrapOptions::default()
        };
        let outcome = resolve(&mut ScriptedDice::new([1]), options);
        assert_eq!(detail(&outcome).dc.dc, 18);
        assert_eq!(detail(&outcome).outcome, Some(TrapOutcome::Trigger));
    }

    #[test]
    fn hard_skew_keeps_lower_d10() {
        let options = TrapOptions {
            skew: DcSkew::Hard,
            ..TrapOptions::default()
        };
        let outcome = resolve(&mut ScriptedDice::new([10, 3]), options);
        assert_eq!(detail(&outcome).dc.dc, 15);
        assert_eq!(outcome.result.dice, vec![3, 10]);
        assert_eq!(detail(&outcome).outcome, None);
    }
}
