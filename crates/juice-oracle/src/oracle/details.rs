//! Detail resolvers: color, property, detail modifiers, and history hooks.

use juice_dice::DiceSource;
use serde::{Deserialize, Serialize};

use super::fate_check::INTENSITY;
use super::tables::{COLOR, DETAIL, DETAIL_HISTORY, DETAIL_PROPERTY, HISTORY, PROPERTY};
use super::{FollowUp, Outcome};
use crate::result::{ResultDetail, RollResult, WordDetail};
use crate::table::WordList;

/// Kind-specific fields of a property roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertyDetail {
    /// The property rolled.
    pub property: WordDetail,
    /// The intensity d6.
    pub intensity: u32,
    /// Intensity read from its table.
    pub intensity_label: String,
}

/// Kind-specific fields of a detail roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailCheck {
    /// The entry rolled.
    pub entry: WordDetail,
    /// The follow-up the entry asks for, if any.
    pub follow_up: Option<FollowUp>,
}

/// Roll once on a word list with a die matching its length.
pub(crate) fn read_list<R: DiceSource>(rng: &mut R, list: &WordList) -> WordDetail {
    let roll = rng.roll_die(list.sides());
    WordDetail {
        table: list.name().to_string(),
        roll,
        word: list.pick(roll).to_string(),
    }
}

fn word_result(label: &str, word: WordDetail, wrap: fn(WordDetail) -> ResultDetail) -> RollResult {
    let text = word.word.clone();
    RollResult::summed(label, vec![word.roll as i32], wrap(word)).with_interpretation(text)
}

/// Roll a color.
pub fn color<R: DiceSource>(rng: &mut R) -> Outcome {
    let word = read_list(rng, &COLOR);
    Outcome::done(word_result("Color", word, ResultDetail::Color))
}

/// Roll a property and how strongly it shows.
pub fn property<R: DiceSource>(rng: &mut R) -> Outcome {
    let word = read_list(rng, &PROPERTY);
    let intensity = rng.roll_die(6);
    let intensity_label = INTENSITY.lookup_or(intensity as i32, &"Mundane").to_string();
    let text = format!("{intensity_label} {}", word.word);
    let result = RollResult::summed(
        "Property",
        vec![word.roll as i32, intensity as i32],
        ResultDetail::Property(PropertyDetail {
            property: word,
            intensity,
            intensity_label,
        }),
    )
    .with_interpretation(text);
    Outcome::done(result)
}

/// Roll a detail modifier. History and Property entries ask for a
/// follow-up roll on their own tables.
pub fn detail<R: DiceSource>(rng: &mut R) -> Outcome {
    let entry = read_list(rng, &DETAIL);
    let follow_up = match entry.word.as_str() {
        DETAIL_HISTORY => Some(FollowUp::History),
        DETAIL_PROPERTY => Some(FollowUp::Property),
        _ => None,
    };
    let text = entry.word.clone();
    let result = RollResult::summed(
        "Detail",
        vec![entry.roll as i32],
        ResultDetail::Detail(DetailCheck { entry, follow_up }),
    )
    .with_interpretation(text);
    Outcome { result, follow_up }
}

/// Roll a history hook.
pub fn history<R: DiceSource>(rng: &mut R) -> Outcome {
    let word = read_list(rng, &HISTORY);
    Outcome::done(word_result("History", word, ResultDetail::History))
}
