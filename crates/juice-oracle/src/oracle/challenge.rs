//! Challenges: a physical and a mental skill, each with a difficulty class.
//!
//! DCs come from a d10 read through [`DC_TABLE`]; low rolls are hard. An
//! easy skew keeps the better of two d10, a hard skew the worse. The trap
//! procedure rolls its DC the same way.

use juice_dice::{DiceSource, RollMode};
use serde::{Deserialize, Serialize};

use super::Outcome;
use super::details::read_list;
use super::tables::{MENTAL_CHALLENGE, PHYSICAL_CHALLENGE};
use crate::result::{ResultDetail, RollResult, WordDetail};
use crate::table::{LookupTable, TableEntry};

/// Bias applied to a DC roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DcSkew {
    /// A single d10.
    #[default]
    None,
    /// Best of two d10 (lower DC).
    Easy,
    /// Worst of two d10 (higher DC).
    Hard,
}

impl DcSkew {
    /// The pool mode used for the DC d10.
    pub fn roll_mode(self) -> RollMode {
        match self {
            Self::None => RollMode::Straight,
            Self::Easy => RollMode::Advantage,
            Self::Hard => RollMode::Disadvantage,
        }
    }

    /// Pick a skew from the CLI-style easy and hard flags.
    pub fn from_flags(easy: bool, hard: bool) -> Self {
        match (easy, hard) {
            (true, false) => Self::Easy,
            (false, true) => Self::Hard,
            _ => Self::None,
        }
    }
}

impl std::fmt::Display for DcSkew {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => write!(f, "normal"),
            Self::Easy => write!(f, "easy"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

/// d10 to difficulty class.
pub const DC_TABLE: LookupTable<i32> = LookupTable::new(
    "Difficulty Class",
    &[
        TableEntry::single(1, 18),
        TableEntry::single(2, 16),
        TableEntry::single(3, 15),
        TableEntry::single(4, 14),
        TableEntry::single(5, 13),
        TableEntry::single(6, 12),
        TableEntry::single(7, 11),
        TableEntry::single(8, 10),
        TableEntry::single(9, 9),
        TableEntry::single(10, 8),
    ],
);

/// A rolled difficulty class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DcRoll {
    /// Every d10 drawn, kept die first.
    pub dice: Vec<u32>,
    /// The kept d10.
    pub roll: u32,
    /// The difficulty class.
    pub dc: i32,
}

/// Roll a difficulty class with the given skew.
pub fn roll_dc<R: DiceSource>(rng: &mut R, skew: DcSkew) -> DcRoll {
    let pool = rng.roll_pool(skew.roll_mode(), 1, 10);
    let roll = pool.chosen_sum();
    DcRoll {
        dice: pool.all_dice(),
        roll,
        dc: *DC_TABLE.lookup_or(roll as i32, &12),
    }
}

/// Options for a challenge roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChallengeOptions {
    /// Skew applied to both DC rolls.
    pub skew: DcSkew,
}

/// One skill and its DC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeSide {
    /// The skill rolled.
    pub skill: WordDetail,
    /// Its difficulty class.
    pub dc: DcRoll,
}

/// Kind-specific fields of a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChallengeDetail {
    /// Skew applied to the DCs.
    pub skew: DcSkew,
    /// The physical option.
    pub physical: ChallengeSide,
    /// The mental option.
    pub mental: ChallengeSide,
}

/// Roll a physical and a mental challenge. The total is the lower of the
/// two DCs, the easier way through.
pub fn resolve<R: DiceSource>(rng: &mut R, options: ChallengeOptions) -> Outcome {
    let physical = ChallengeSide {
        skill: read_list(rng, &PHYSICAL_CHALLENGE),
        dc: roll_dc(rng, options.skew),
    };
    let mental = ChallengeSide {
        skill: read_list(rng, &MENTAL_CHALLENGE),
        dc: roll_dc(rng, options.skew),
    };

    let mut dice = Vec::new();
    for side in [&physical, &mental] {
        dice.push(side.skill.roll as i32);
        dice.extend(side.dc.dice.iter().map(|d| *d as i32));
    }
    let total = physical.dc.dc.min(mental.dc.dc);
    let text = format!(
        "{} DC {} or {} DC {}",
        physical.skill.word, physical.dc.dc, mental.skill.word, mental.dc.dc
    );
    let result = RollResult::new(
        "Challenge",
        dice,
        total,
        ResultDetail::Challenge(ChallengeDetail {
            skew: options.skew,
            physical,
            mental,
        }),
    )
    .with_interpretation(text);
    Outcome::done(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use juice_dice::ScriptedDice;

    #[test]
    fn dc_table_is_descending_and_contiguous() {
        assert!(DC_TABLE.is_contiguous());
        assert_eq!(DC_TABLE.covered_range(), Some((1, 10)));
        let dcs: Vec<i32> = (1..=10).map(|k| *DC_TABLE.lookup(k).unwrap()).collect();
        assert!(dcs.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(dcs[0], 18);
        assert_eq!(dcs[9], 8);
    }

    #[test]
    fn easy_keeps_higher_d10() {
        let dc = roll_dc(&mut ScriptedDice::new([2, 9]), DcSkew::Easy);
        assert_eq!(dc.roll, 9);
        assert_eq!(dc.dc, 9);
        assert_eq!(dc.dice, vec![9, 2]);
    }

    #[test]
    fn hard_keeps_lower_d10() {
        let dc = roll_dc(&mut ScriptedDice::new([2, 9]), DcSkew::Hard);
        assert_eq!(dc.roll, 2);
        assert_eq!(dc.dc, 16);
    }

    #[test]
    fn straight_rolls_one_d10() {
        let mut dice = ScriptedDice::new([5, 1]);
        let dc = roll_dc(&mut dice, DcSkew::None);
        assert_eq!(dc.dc, 13);
        assert_eq!(dice.remaining(), 1);
    }

    #[test]
    fn challenge_pairs_skills_with_dcs() {
        // physical skill, physical dc, mental skill, mental dc
        let outcome = resolve(&mut ScriptedDice::new([2, 10, 9, 1]), ChallengeOptions::default());
        match &outcome.result.detail {
            ResultDetail::Challenge(d) => {
                assert_eq!(d.physical.skill.word, "Acrobatics");
                assert_eq!(d.physical.dc.dc, 8);
                assert_eq!(d.mental.skill.word, "Persuasion");
                assert_eq!(d.mental.dc.dc, 18);
            }
            other => panic!("expected challenge, got {:?}", other.kind()),
        }
        assert_eq!(outcome.result.total, 8);
        assert_eq!(outcome.result.dice, vec![2, 10, 9, 1]);
    }

    #[test]
    fn skew_from_flags() {
        assert_eq!(DcSkew::from_flags(true, false), DcSkew::Easy);
        assert_eq!(DcSkew::from_flags(false, true), DcSkew::Hard);
        assert_eq!(DcSkew::from_flags(true, true), DcSkew::None);
    }
}
