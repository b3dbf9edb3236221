//! Plain dice expressions and the skewed d6 as oracle results.

use juice_dice::{DiceExpr, DiceSource, ExprDie, FateDie, RollMode, SkewedRoll};
use serde::{Deserialize, Serialize};

use super::Outcome;
use crate::result::{ResultDetail, RollResult};

/// Kind-specific fields of a dice expression roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceDetail {
    /// The expression rolled.
    pub expression: DiceExpr,
    /// Which pool was kept.
    pub mode: RollMode,
    /// The kept pool (Fate dice as -1/0/+1).
    pub chosen: Vec<i32>,
    /// The discarded pool; empty for straight rolls.
    pub discarded: Vec<i32>,
}

/// Kind-specific fields of a skewed d6.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkewDetail {
    /// The skew the caller asked for.
    pub requested: i32,
    /// The skew applied after clamping.
    pub skew: i32,
    /// The uniform draw that selected the face.
    pub raw: u32,
}

fn saturating_total(dice: &[i32], modifier: i32) -> i32 {
    dice.iter().fold(modifier, |acc, d| acc.saturating_add(*d))
}

/// Roll a dice expression. Advantage and disadvantage apply to the whole
/// pool; the modifier is added to the kept sum.
pub fn roll_expression<R: DiceSource>(rng: &mut R, expr: DiceExpr, mode: RollMode) -> Outcome {
    let sides = match expr.die {
        ExprDie::Standard(die) => die.sides(),
        ExprDie::Fate => 3,
    };
    let to_value = |raw: &u32| match expr.die {
        ExprDie::Standard(_) => i32::try_from(*raw).unwrap_or(i32::MAX),
        ExprDie::Fate => FateDie::from_d3(*raw).value(),
    };
    let pool = rng.roll_pool(mode, expr.count, sides);
    let chosen: Vec<i32> = pool.chosen.iter().map(to_value).collect();
    let discarded: Vec<i32> = pool.discarded.iter().map(to_value).collect();
    let total = saturating_total(&chosen, expr.modifier);

    let mut interpretation = expr.to_string();
    if mode != RollMode::Straight {
        let other = saturating_total(&discarded, expr.modifier);
        interpretation.push_str(&format!(" with {mode}, dropped {other}"));
    }

    let dice = chosen.iter().chain(discarded.iter()).copied().collect();
    let result = RollResult::new(
        "Dice",
        dice,
        total,
        ResultDetail::Dice(DiceDetail {
            expression: expr,
            mode,
            chosen,
            discarded,
        }),
    )
    .with_interpretation(interpretation);
    Outcome::done(result)
}

/// Roll a d6 biased by `skew` (clamped to -3..=3).
pub fn roll_skewed<R: DiceSource>(rng: &mut R, skew: i32) -> Outcome {
    let SkewedRoll {
        value,
        skew: applied,
        raw,
    } = rng.roll_skewed_d6(skew);
    let direction = match applied.signum() {
        1 => "toward 6",
        -1 => "toward 1",
        _ => "unskewed",
    };
    let result = RollResult::summed(
        "Skewed d6",
        vec![value as i32],
        ResultDetail::SkewedDie(SkewDetail {
            requested: skew,
            skew: applied,
            raw,
        }),
    )
    .with_interpretation(format!("{value} (skew {applied:+}, {direction})"));
    Outcome::done(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use juice_dice::{Die, ScriptedDice};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn detail(outcome: &Outcome) -> &DiceDetail {
        match &outcome.result.detail {
            ResultDetail::Dice(d) => d,
            other => panic!("expected dice, got {:?}", other.kind()),
        }
    }

    #[test]
    fn straight_roll_adds_modifier() {
        let mut dice = ScriptedDice::new([3, 5]);
        let expr = DiceExpr::new(2, Die::D6).with_modifier(2);
        let outcome = roll_expression(&mut dice, expr, RollMode::Straight);
        assert_eq!(outcome.result.total, 10);
        assert_eq!(outcome.result.dice, vec![3, 5]);
        assert!(detail(&outcome).discarded.is_empty());
        assert_eq!(outcome.result.interpretation.as_deref(), Some("2d6+2"));
    }

    #[test]
    fn advantage_keeps_higher_pool() {
        let mut dice = ScriptedDice::new([1, 2, 6, 6]);
        let expr = DiceExpr::new(2, Die::D6);
        let outcome = roll_expression(&mut dice, expr, RollMode::Advantage);
        assert_eq!(outcome.result.total, 12);
        assert_eq!(detail(&outcome).chosen, vec![6, 6]);
        assert_eq!(detail(&outcome).discarded, vec![1, 2]);
        assert_eq!(outcome.result.dice, vec![6, 6, 1, 2]);
    }

    #[test]
    fn disadvantage_keeps_lower_pool() {
        let mut dice = ScriptedDice::new([9, 2]);
        let expr = DiceExpr::new(1, Die::D10).with_modifier(-1);
        let outcome = roll_expression(&mut dice, expr, RollMode::Disadvantage);
        assert_eq!(outcome.result.total, 1);
        assert_eq!(detail(&outcome).chosen, vec![2]);
    }

    #[test]
    fn oversized_hand_built_expression_saturates() {
        let mut dice = ScriptedDice::new([u32::MAX, u32::MAX]);
        let expr = DiceExpr::new(2, Die::Custom(u32::MAX)).with_modifier(i32::MAX);
        let outcome = roll_expression(&mut dice, expr, RollMode::Straight);
        assert_eq!(outcome.result.total, i32::MAX);
        assert!(outcome.result.dice.iter().all(|d| *d == i32::MAX));
    }

    #[test]
    fn fate_expression_uses_fate_values() {
        let mut dice = ScriptedDice::new(Vec::new());
        dice.push_fate(FateDie::Plus)
            .push_fate(FateDie::Plus)
            .push_fate(FateDie::Blank)
            .push_fate(FateDie::Minus);
        let expr = DiceExpr::parse("4dF").unwrap();
        let outcome = roll_expression(&mut dice, expr, RollMode::Straight);
        assert_eq!(outcome.result.dice, vec![1, 1, 0, -1]);
        assert_eq!(outcome.result.total, 1);
    }

    #[test]
    fn skewed_reports_clamped_skew() {
        let mut rng = StdRng::seed_from_u64(9);
        let outcome = roll_skewed(&mut rng, 7);
        match &outcome.result.detail {
            ResultDetail::SkewedDie(d) => {
                assert_eq!(d.requested, 7);
                assert_eq!(d.skew, 3);
            }
            other => panic!("expected skewed die, got {:?}", other.kind()),
        }
        assert!((1..=6).contains(&outcome.result.total));
    }

    #[test]
    fn skewed_draw_maps_onto_face() {
        // Skew +1 weights are 1..6; a draw of 21 is the last unit of face 6.
        let mut dice = ScriptedDice::new([21]);
        let outcome = roll_skewed(&mut dice, 1);
        assert_eq!(outcome.result.total, 6);
        let mut dice = ScriptedDice::new([1]);
        let outcome = roll_skewed(&mut dice, 1);
        assert_eq!(outcome.result.total, 1);
    }
}
