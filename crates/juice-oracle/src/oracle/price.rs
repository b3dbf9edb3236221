//! Pay the Price: what a failure costs.

use juice_dice::DiceSource;

use super::Outcome;
use super::details::read_list;
use super::tables::PAY_THE_PRICE;
use crate::result::{ResultDetail, RollResult};

/// Roll a consequence.
pub fn resolve<R: DiceSource>(rng: &mut R) -> Outcome {
    let word = read_list(rng, &PAY_THE_PRICE);
    let text = word.word.clone();
    let result = RollResult::summed(
        "Pay the Price",
        vec![word.roll as i32],
        ResultDetail::PayThePrice(word),
    )
    .with_interpretation(text);
    Outcome::done(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use juice_dice::ScriptedDice;

    #[test]
    fn ten_reads_major_twist() {
        let outcome = resolve(&mut ScriptedDice::new([10]));
        assert_eq!(
            outcome.result.interpretation.as_deref(),
            Some("Major plot twist")
        );
    }
}
