//! Random events: a focus, then a modifier and idea to color it.

use juice_dice::DiceSource;
use serde::{Deserialize, Serialize};

use super::Outcome;
use super::details::read_list;
use super::tables::{EVENT_FOCUS, EVENT_IDEA, EVENT_MODIFIER};
use crate::result::{ResultDetail, RollResult, WordDetail};

/// Kind-specific fields of a random event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RandomEventDetail {
    /// What the event is about.
    pub focus: WordDetail,
    /// Verb-like modifier.
    pub modifier: WordDetail,
    /// Noun-like idea.
    pub idea: WordDetail,
}

/// Roll a random event.
pub fn resolve<R: DiceSource>(rng: &mut R) -> Outcome {
    let focus = read_list(rng, &EVENT_FOCUS);
    let modifier = read_list(rng, &EVENT_MODIFIER);
    let idea = read_list(rng, &EVENT_IDEA);
    let text = format!("{}: {} {}", focus.word, modifier.word, idea.word);
    let result = RollResult::summed(
        "Random Event",
        vec![focus.roll as i32, modifier.roll as i32, idea.roll as i32],
        ResultDetail::RandomEvent(RandomEventDetail {
            focus,
            modifier,
            idea,
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
    fn reads_three_lists_in_order() {
        let outcome = resolve(&mut ScriptedDice::new([1, 2, 10]));
        assert_eq!(outcome.result.dice, vec![1, 2, 10]);
        assert_eq!(
            outcome.result.interpretation.as_deref(),
            Some("Advance Time: Reveal Wealth")
        );
        assert!(outcome.follow_up.is_none());
    }
}
