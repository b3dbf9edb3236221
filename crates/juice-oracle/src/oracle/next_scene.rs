//! Next Scene: how the scene the player expects actually opens.

use juice_dice::DiceSource;
use serde::{Deserialize, Serialize};

use super::{FollowUp, Outcome};
use crate::result::{ResultDetail, RollResult};
use crate::table::{LookupTable, TableEntry};

/// How the expected scene is changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SceneShift {
    /// Something else happens first; roll a random event.
    Interrupt,
    /// The scene happens, but one element is different.
    Altered,
    /// The scene plays out as expected.
    AsExpected,
}

impl std::fmt::Display for SceneShift {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Interrupt => write!(f, "Interrupt"),
            Self::Altered => write!(f, "Altered"),
            Self::AsExpected => write!(f, "As Expected"),
        }
    }
}

/// Kind-specific fields of a Next Scene roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NextSceneDetail {
    /// The 2d6 total.
    pub roll: i32,
    /// The shift read from the table.
    pub shift: SceneShift,
}

/// Next Scene 2d6.
pub const NEXT_SCENE: LookupTable<SceneShift> = LookupTable::new(
    "Next Scene",
    &[
        TableEntry::new(2, 3, SceneShift::Interrupt),
        TableEntry::new(4, 5, SceneShift::Altered),
        TableEntry::new(6, 8, SceneShift::AsExpected),
        TableEntry::new(9, 10, SceneShift::Altered),
        TableEntry::new(11, 12, SceneShift::Interrupt),
    ],
);

/// Roll for the next scene. An interrupt asks for a random event.
pub fn resolve<R: DiceSource>(rng: &mut R) -> Outcome {
    let dice: Vec<i32> = rng.roll_dice(2, 6).into_iter().map(|d| d as i32).collect();
    let roll: i32 = dice.iter().sum();
    let shift = *NEXT_SCENE.lookup_or(roll, &SceneShift::AsExpected);
    let result = RollResult::summed(
        "Next Scene",
        dice,
        ResultDetail::NextScene(NextSceneDetail { roll, shift }),
    )
    .with_interpretation(shift.to_string());
    match shift {
        SceneShift::Interrupt => Outcome::then(result, FollowUp::RandomEvent),
        SceneShift::Altered | SceneShift::AsExpected => Outcome::done(result),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use juice_dice::ScriptedDice;

    #[test]
    fn table_covers_2d6() {
        assert!(NEXT_SCENE.is_contiguous());
        assert_eq!(NEXT_SCENE.covered_range(), Some((2, 12)));
    }

    #[test]
    fn interrupts_at_both_extremes() {
        for (a, b) in [(1, 1), (1, 2), (6, 5), (6, 6)] {
            let outcome = resolve(&mut ScriptedDice::new([a, b]));
            assert_eq!(outcome.follow_up, Some(FollowUp::RandomEvent), "{a}+{b}");
        }
    }

    #[test]
    fn middle_is_as_expected() {
        let outcome = resolve(&mut ScriptedDice::new([3, 4]));
        assert_eq!(outcome.result.total, 7);
        assert_eq!(outcome.result.interpretation.as_deref(), Some("As Expected"));
        assert!(outcome.follow_up.is_none());
    }

    #[test]
    fn altered_bands() {
        for (a, b) in [(2, 2), (4, 1), (5, 4), (5, 5)] {
            let outcome = resolve(&mut ScriptedDice::new([a, b]));
            match outcome.result.detail {
                ResultDetail::NextScene(d) => assert_eq!(d.shift, SceneShift::Altered),
                other => panic!("expected next scene, got {:?}", other.kind()),
            }
        }
    }
}
