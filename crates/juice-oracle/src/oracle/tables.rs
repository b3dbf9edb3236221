//! Word lists for the stateless oracle resolvers.
//!
//! Every list is read by a d10 with the printed-table convention: index 0
//! holds the entry for a roll of 10.

use crate::table::WordList;

/// What a random event is about.
pub const EVENT_FOCUS: WordList = WordList::new(
    "Event Focus",
    &[
        "Remote Event",
        "Advance Time",
        "Close Thread",
        "Converge Thread",
        "Diverge Thread",
        "Immersion",
        "Keyed Event",
        "New Character",
        "NPC Action",
        "Plot Armor",
    ],
);

/// Verb-like modifier paired with an idea to describe a random event.
pub const EVENT_MODIFIER: WordList = WordList::new(
    "Event Modifier",
    &[
        "Change", "Betray", "Reveal", "Oppose", "Protect", "Seek", "Break", "Hide", "Lead",
        "Abandon",
    ],
);

/// Noun-like idea paired with a modifier to describe a random event.
pub const EVENT_IDEA: WordList = WordList::new(
    "Event Idea",
    &[
        "Wealth", "Secret", "Ally", "Rival", "Home", "Oath", "Power", "Stranger", "Past",
        "Danger",
    ],
);

/// Colors.
pub const COLOR: WordList = WordList::new(
    "Color",
    &[
        "White", "Black", "Crimson", "Amber", "Gold", "Emerald", "Azure", "Violet", "Grey",
        "Brown",
    ],
);

/// Physical properties, read alongside an intensity d6.
pub const PROPERTY: WordList = WordList::new(
    "Property",
    &[
        "Weight", "Age", "Durability", "Quality", "Size", "Shape", "Smell", "Sound", "Texture",
        "Value",
    ],
);

/// Detail modifiers. `History` and `Property` ask for a follow-up roll.
pub const DETAIL: WordList = WordList::new(
    "Detail",
    &[
        "Property",
        "Emotion: Negative",
        "Emotion: Positive",
        "Favors PC",
        "Disfavors PC",
        "Favors Thread",
        "Disfavors Thread",
        "Favors NPC",
        "Disfavors NPC",
        "History",
    ],
);

/// Entry in [`DETAIL`] that asks for a History follow-up.
pub const DETAIL_HISTORY: &str = "History";

/// Entry in [`DETAIL`] that asks for a Property follow-up.
pub const DETAIL_PROPERTY: &str = "Property";

/// What part of the story a detail ties back to.
pub const HISTORY: WordList = WordList::new(
    "History",
    &[
        "Current Scene",
        "Backstory",
        "Past Thread",
        "Previous Scene",
        "Current Thread",
        "Past Character",
        "Current Character",
        "Past Location",
        "Current Location",
        "Recent Event",
    ],
);

/// Physical challenge skills.
pub const PHYSICAL_CHALLENGE: WordList = WordList::new(
    "Physical Challenge",
    &[
        "Survival",
        "Athletics",
        "Acrobatics",
        "Stealth",
        "Sleight of Hand",
        "Endurance",
        "Strength",
        "Climbing",
        "Swimming",
        "Riding",
    ],
);

/// Mental challenge skills.
pub const MENTAL_CHALLENGE: WordList = WordList::new(
    "Mental Challenge",
    &[
        "Willpower",
        "Arcana",
        "History",
        "Investigation",
        "Nature",
        "Religion",
        "Insight",
        "Medicine",
        "Perception",
        "Persuasion",
    ],
);

/// Consequences when a roll fails.
pub const PAY_THE_PRICE: WordList = WordList::new(
    "Pay the Price",
    &[
        "Major plot twist",
        "Action has an unintended effect",
        "You are separated from something or someone",
        "Your action causes harm",
        "Something of value is lost or destroyed",
        "The current situation worsens",
        "A new danger or foe is revealed",
        "It causes a delay or puts you at a disadvantage",
        "It is harmful to an ally",
        "You are drained of resources or stamina",
    ],
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_list_reads_a_d10() {
        for list in [
            EVENT_FOCUS,
            EVENT_MODIFIER,
            EVENT_IDEA,
            COLOR,
            PROPERTY,
            DETAIL,
            HISTORY,
            PHYSICAL_CHALLENGE,
            MENTAL_CHALLENGE,
            PAY_THE_PRICE,
        ] {
            assert_eq!(list.len(), 10, "{}", list.name());
            for roll in 1..=10 {
                assert!(!list.pick(roll).is_empty(), "{} roll {roll}", list.name());
            }
        }
    }

    #[test]
    fn detail_follow_up_entries_are_listed() {
        let words: Vec<&str> = (1..=10).map(|r| DETAIL.pick(r)).collect();
        assert!(words.contains(&DETAIL_HISTORY));
        assert!(words.contains(&DETAIL_PROPERTY));
    }
}
