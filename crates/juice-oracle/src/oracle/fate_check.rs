//! Fate Check: yes/no questions answered by two ordered Fate dice.
//!
//! The primary die sets the direction, the secondary die refines it. How
//! the nine face combinations read depends on the likelihood the player
//! picked. A double blank ignores the likelihood entirely: read with the
//! primary die on the left it is "Yes, but…" and triggers a random event;
//! on the right it means the question rests on an invalid assumption.
//! An intensity d6 rides along for flavor and never changes the answer.

use juice_dice::{DiceSource, FateDie};
use serde::{Deserialize, Serialize};

use super::{FollowUp, Outcome};
use crate::result::{ResultDetail, RollResult};
use crate::table::{LookupTable, TableEntry};

/// How likely the player thinks the answer is "Yes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Likelihood {
    /// Any minus pushes toward No.
    Unlikely,
    /// Primary die decides, secondary refines.
    #[default]
    EvenOdds,
    /// Any plus pushes toward Yes.
    Likely,
}

impl Likelihood {
    /// Parse a likelihood from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().replace(['-', '_'], " ").trim() {
            "unlikely" | "u" => Some(Self::Unlikely),
            "even" | "even odds" | "evenodds" | "50/50" | "5050" | "e" => Some(Self::EvenOdds),
            "likely" | "l" => Some(Self::Likely),
            _ => None,
        }
    }

    /// Parse a likelihood setting, falling back to even odds for anything
    /// unrecognised.
    pub fn from_setting(s: &str) -> Self {
        Self::parse(s).unwrap_or_else(|| {
            tracing::debug!(setting = s, "unknown likelihood, using even odds");
            Self::EvenOdds
        })
    }

    /// All likelihood values from least to most likely.
    pub fn all() -> &'static [Self] {
        &[Self::Unlikely, Self::EvenOdds, Self::Likely]
    }
}

impl std::fmt::Display for Likelihood {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unlikely => write!(f, "Unlikely"),
            Self::EvenOdds => write!(f, "Even Odds"),
            Self::Likely => write!(f, "Likely"),
        }
    }
}

/// The answer to a Fate Check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FateAnswer {
    /// Yes, with something extra in your favor.
    YesAnd,
    /// Plain yes.
    Yes,
    /// Yes, for an unexpected reason.
    YesBecause,
    /// Yes, with a complication.
    YesBut,
    /// No, with a silver lining.
    NoBut,
    /// No, for an unexpected reason.
    NoBecause,
    /// Plain no.
    No,
    /// No, and things get worse.
    NoAnd,
    /// The question assumes something that isn't true.
    InvalidAssumption,
}

impl FateAnswer {
    /// True for every Yes-family answer.
    pub fn is_yes(self) -> bool {
        matches!(
            self,
            Self::YesAnd | Self::Yes | Self::YesBecause | Self::YesBut
        )
    }

    /// True for every No-family answer.
    pub fn is_no(self) -> bool {
        matches!(self, Self::NoBut | Self::NoBecause | Self::No | Self::NoAnd)
    }
}

impl std::fmt::Display for FateAnswer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YesAnd => write!(f, "Yes, and…"),
            Self::Yes => write!(f, "Yes"),
            Self::YesBecause => write!(f, "Yes, because…"),
            Self::YesBut => write!(f, "Yes, but…"),
            Self::NoBut => write!(f, "No, but…"),
            Self::NoBecause => write!(f, "No, because…"),
            Self::No => write!(f, "No"),
            Self::NoAnd => write!(f, "No, and…"),
            Self::InvalidAssumption => write!(f, "Invalid Assumption"),
        }
    }
}

/// Which rule produced the answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FateBranch {
    /// Read from the likelihood matrix.
    Matrix,
    /// Double blank, primary die on the left.
    DoubleBlankLeft,
    /// Double blank, primary die on the right.
    DoubleBlankRight,
}

/// Options for a Fate Check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FateCheckOptions {
    /// How likely the player thinks "Yes" is.
    pub likelihood: Likelihood,
    /// Force which side the primary die sits on; a coin flip when unset.
    pub primary_left: Option<bool>,
}

impl FateCheckOptions {
    /// Options with the given likelihood.
    pub fn new(likelihood: Likelihood) -> Self {
        Self {
            likelihood,
            primary_left: None,
        }
    }

    /// Force the primary die to the left (`true`) or right (`false`).
    pub fn with_primary_left(mut self, left: bool) -> Self {
        self.primary_left = Some(left);
        self
    }
}

/// Kind-specific fields of a Fate Check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FateCheckDetail {
    /// Likelihood the question was asked with.
    pub likelihood: Likelihood,
    /// The primary Fate die.
    pub primary: FateDie,
    /// The secondary Fate die.
    pub secondary: FateDie,
    /// The intensity d6.
    pub intensity: u32,
    /// Intensity read from its table.
    pub intensity_label: String,
    /// The answer.
    pub answer: FateAnswer,
    /// Which rule produced the answer.
    pub branch: FateBranch,
    /// Whether the primary die's side was forced by the caller.
    pub side_forced: bool,
}

/// Intensity d6.
pub const INTENSITY: LookupTable<&str> = LookupTable::new(
    "Intensity",
    &[
        TableEntry::single(1, "Minimal"),
        TableEntry::single(2, "Minor"),
        TableEntry::single(3, "Mundane"),
        TableEntry::single(4, "Moderate"),
        TableEntry::single(5, "Major"),
        TableEntry::single(6, "Extreme"),
    ],
);

/// Read the likelihood matrix. Returns `None` for a double blank, which the
/// matrix does not decide.
pub fn interpret(likelihood: Likelihood, primary: FateDie, secondary: FateDie) -> Option<FateAnswer> {
    use FateAnswer::*;
    use FateDie::{Blank, Minus, Plus};

    let answer = match (primary, secondary) {
        (Blank, Blank) => return None,
        (Plus, Plus) => YesAnd,
        (Minus, Minus) => NoAnd,
        (Plus, Blank) => Yes,
        (Minus, Blank) => No,
        (Plus, Minus) => match likelihood {
            Likelihood::Unlikely => NoBut,
            Likelihood::EvenOdds | Likelihood::Likely => YesBut,
        },
        (Minus, Plus) => match likelihood {
            Likelihood::Likely => YesBut,
            Likelihood::EvenOdds | Likelihood::Unlikely => NoBut,
        },
        (Blank, Plus) => match likelihood {
            Likelihood::EvenOdds => YesBecause,
            Likelihood::Likely => Yes,
            Likelihood::Unlikely => YesBut,
        },
        (Blank, Minus) => match likelihood {
            Likelihood::EvenOdds => NoBecause,
            Likelihood::Likely => NoBut,
            Likelihood::Unlikely => No,
        },
    };
    Some(answer)
}

/// Ask the oracle a yes/no question.
pub fn resolve<R: DiceSource>(rng: &mut R, options: FateCheckOptions) -> Outcome {
    let primary = rng.roll_fate_die();
    let secondary = rng.roll_fate_die();
    let intensity = rng.roll_die(6);
    let intensity_label = *INTENSITY.lookup_or(intensity as i32, &"Mundane");

    let (answer, branch, follow_up) = match interpret(options.likelihood, primary, secondary) {
        Some(answer) => (answer, FateBranch::Matrix, None),
        None => {
            let left = options.primary_left.unwrap_or_else(|| rng.coin_flip());
            tracing::debug!(left, "double blank on fate check");
            if left {
                (
                    FateAnswer::YesBut,
                    FateBranch::DoubleBlankLeft,
                    Some(FollowUp::RandomEvent),
                )
            } else {
                (FateAnswer::InvalidAssumption, FateBranch::DoubleBlankRight, None)
            }
        }
    };

    let mut interpretation = format!("{answer} ({intensity_label} intensity)");
    if follow_up.is_some() {
        interpretation.push_str(", random event");
    }

    let result = RollResult::new(
        "Fate Check",
        vec![primary.value(), secondary.value(), intensity as i32],
        primary.value() + secondary.value(),
        ResultDetail::FateCheck(FateCheckDetail {
            likelihood: options.likelihood,
            primary,
            secondary,
            intensity,
            intensity_label: intensity_label.to_string(),
            answer,
            branch,
            side_forced: options.primary_left.is_some(),
        }),
    )
    .with_interpretation(interpretation);

    Outcome { result, follow_up }
}
