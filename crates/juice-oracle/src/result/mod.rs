//! The universal roll result.
//!
//! Every resolver and generator returns a [`RollResult`]: the raw dice, a
//! total, an optional interpretation, and a [`ResultDetail`] carrying the
//! fields specific to that kind of roll. Follow-up rolls and cascading table
//! entries are embedded as children by value.

pub mod record;

pub use record::RollRecord;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::generator::dialog::DialogDetail;
use crate::generator::dungeon::{DungeonDetail, PassageDetail, RoomConditionDetail};
use crate::generator::monster::MonsterDetail;
use crate::generator::trap::TrapDetail;
use crate::generator::wilderness::{EncounterDetail, WildernessDetail};
use crate::oracle::challenge::ChallengeDetail;
use crate::oracle::details::{DetailCheck, PropertyDetail};
use crate::oracle::dice::{DiceDetail, SkewDetail};
use crate::oracle::event::RandomEventDetail;
use crate::oracle::fate_check::FateCheckDetail;
use crate::oracle::next_scene::NextSceneDetail;

/// Discriminant of a [`RollResult`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResultKind {
    /// A plain dice expression.
    Dice,
    /// A skewed d6.
    SkewedDie,
    /// A Fate Check yes/no question.
    FateCheck,
    /// What the next scene looks like.
    NextScene,
    /// A random event.
    RandomEvent,
    /// A color.
    Color,
    /// A property with intensity.
    Property,
    /// A detail modifier.
    Detail,
    /// A history hook.
    History,
    /// Physical and mental challenges with DCs.
    Challenge,
    /// A consequence for failure.
    PayThePrice,
    /// One exchange on the dialog grid.
    DialogGrid,
    /// A dungeon area.
    DungeonArea,
    /// A passage shape, cascaded from a dungeon area.
    Passage,
    /// A room condition, cascaded from a dungeon area.
    RoomCondition,
    /// The trap procedure.
    Trap,
    /// A wilderness hex transition.
    WildernessTransition,
    /// A wilderness encounter.
    WildernessEncounter,
    /// A monster encounter.
    Monster,
}

impl ResultKind {
    /// Every kind, in declaration order.
    pub fn all() -> &'static [Self] {
        &[
            Self::Dice,
            Self::SkewedDie,
            Self::FateCheck,
            Self::NextScene,
            Self::RandomEvent,
            Self::Color,
            Self::Property,
            Self::Detail,
            Self::History,
            Self::Challenge,
            Self::PayThePrice,
            Self::DialogGrid,
            Self::DungeonArea,
            Self::Passage,
            Self::RoomCondition,
            Self::Trap,
            Self::WildernessTransition,
            Self::WildernessEncounter,
            Self::Monster,
        ]
    }

    /// The stable snake_case tag used in serialized records.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dice => "dice",
            Self::SkewedDie => "skewed_die",
            Self::FateCheck => "fate_check",
            Self::NextScene => "next_scene",
            Self::RandomEvent => "random_event",
            Self::Color => "color",
            Self::Property => "property",
            Self::Detail => "detail",
            Self::History => "history",
            Self::Challenge => "challenge",
            Self::PayThePrice => "pay_the_price",
            Self::DialogGrid => "dialog_grid",
            Self::DungeonArea => "dungeon_area",
            Self::Passage => "passage",
            Self::RoomCondition => "room_condition",
            Self::Trap => "trap",
            Self::WildernessTransition => "wilderness_transition",
            Self::WildernessEncounter => "wilderness_encounter",
            Self::Monster => "monster",
        }
    }

    /// Parse a serialized tag.
    pub fn parse(s: &str) -> Option<Self> {
        Self::all().iter().copied().find(|k| k.as_str() == s)
    }
}

impl std::fmt::Display for ResultKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single table read: which list, what was rolled, what it said.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordDetail {
    /// The list that was read.
    pub table: String,
    /// The die roll.
    pub roll: u32,
    /// The entry read.
    pub word: String,
}

/// Kind-specific fields of a [`RollResult`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultDetail {
    /// A plain dice expression.
    Dice(DiceDetail),
    /// A skewed d6.
    SkewedDie(SkewDetail),
    /// A Fate Check.
    FateCheck(FateCheckDetail),
    /// Next scene.
    NextScene(NextSceneDetail),
    /// Random event.
    RandomEvent(RandomEventDetail),
    /// Color.
    Color(WordDetail),
    /// Property with intensity.
    Property(PropertyDetail),
    /// Detail modifier.
    Detail(DetailCheck),
    /// History hook.
    History(WordDetail),
    /// Challenge pair.
    Challenge(ChallengeDetail),
    /// Pay the price.
    PayThePrice(WordDetail),
    /// Dialog grid exchange.
    DialogGrid(DialogDetail),
    /// Dungeon area.
    DungeonArea(DungeonDetail),
    /// Passage shape.
    Passage(PassageDetail),
    /// Room condition.
    RoomCondition(RoomConditionDetail),
    /// Trap procedure.
    Trap(TrapDetail),
    /// Wilderness transition.
    WildernessTransition(WildernessDetail),
    /// Wilderness encounter.
    WildernessEncounter(EncounterDetail),
    /// Monster encounter.
    Monster(MonsterDetail),
}

impl ResultDetail {
    /// The discriminant for this detail.
    pub fn kind(&self) -> ResultKind {
        match self {
            Self::Dice(_) => ResultKind::Dice,
            Self::SkewedDie(_) => ResultKind::SkewedDie,
            Self::FateCheck(_) => ResultKind::FateCheck,
            Self::NextScene(_) => ResultKind::NextScene,
            Self::RandomEvent(_) => ResultKind::RandomEvent,
            Self::Color(_) => ResultKind::Color,
            Self::Property(_) => ResultKind::Property,
            Self::Detail(_) => ResultKind::Detail,
            Self::History(_) => ResultKind::History,
            Self::Challenge(_) => ResultKind::Challenge,
            Self::PayThePrice(_) => ResultKind::PayThePrice,
            Self::DialogGrid(_) => ResultKind::DialogGrid,
            Self::DungeonArea(_) => ResultKind::DungeonArea,
            Self::Passage(_) => ResultKind::Passage,
            Self::RoomCondition(_) => ResultKind::RoomCondition,
            Self::Trap(_) => ResultKind::Trap,
            Self::WildernessTransition(_) => ResultKind::WildernessTransition,
            Self::WildernessEncounter(_) => ResultKind::WildernessEncounter,
            Self::Monster(_) => ResultKind::Monster,
        }
    }
}

/// The outcome of one oracle roll.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RollResult {
    /// Human-readable name of the roll.
    pub label: String,
    /// Raw die values in the order they were drawn (Fate dice as -1/0/+1).
    pub dice: Vec<i32>,
    /// Numeric total.
    pub total: i32,
    /// Text interpretation, if the roll has one.
    pub interpretation: Option<String>,
    /// Kind-specific fields.
    pub detail: ResultDetail,
    /// Follow-up and cascaded rolls, embedded by value.
    pub children: Vec<RollResult>,
    /// When the roll was made.
    pub timestamp: DateTime<Utc>,
}

impl RollResult {
    /// Create a result with no interpretation or children.
    pub fn new(label: impl Into<String>, dice: Vec<i32>, total: i32, detail: ResultDetail) -> Self {
        Self {
            label: label.into(),
            dice,
            total,
            interpretation: None,
            detail,
            children: Vec::new(),
            timestamp: Utc::now(),
        }
    }

    /// Create a result whose total is the sum of its dice.
    pub fn summed(label: impl Into<String>, dice: Vec<i32>, detail: ResultDetail) -> Self {
        let total = dice.iter().sum();
        Self::new(label, dice, total, detail)
    }

    /// Attach an interpretation.
    pub fn with_interpretation(mut self, text: impl Into<String>) -> Self {
        self.interpretation = Some(text.into());
        self
    }

    /// Embed a child result.
    pub fn with_child(mut self, child: RollResult) -> Self {
        self.children.push(child);
        self
    }

    /// The discriminant of this result.
    pub fn kind(&self) -> ResultKind {
        self.detail.kind()
    }

    /// The first embedded child of the given kind.
    pub fn child(&self, kind: ResultKind) -> Option<&RollResult> {
        self.children.iter().find(|c| c.kind() == kind)
    }

    /// True for purely derived results that drew no dice.
    pub fn is_derived(&self) -> bool {
        self.dice.is_empty()
    }

    fn fmt_indented(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        let indent = "  ".repeat(depth);
        write!(f, "{indent}{}", self.label)?;
        if let Some(text) = &self.interpretation {
            write!(f, ": {text}")?;
        }
        if !self.dice.is_empty() {
            let dice: Vec<String> = self.dice.iter().map(|d| d.to_string()).collect();
            write!(f, " [{}] = {}", dice.join(", "), self.total)?;
        }
        for child in &self.children {
            writeln!(f)?;
            child.fmt_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl std::fmt::Display for RollResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_indented(f, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn color(roll: u32, word: &str) -> RollResult {
        RollResult::summed(
            "Color",
            vec![roll as i32],
            ResultDetail::Color(WordDetail {
                table: "Color".to_string(),
                roll,
                word: word.to_string(),
            }),
        )
        .with_interpretation(word)
    }

    #[test]
    fn kind_tags_round_trip() {
        for kind in ResultKind::all() {
            assert_eq!(ResultKind::parse(kind.as_str()), Some(*kind));
            let json = serde_json::to_string(kind).unwrap();
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
        assert_eq!(ResultKind::parse("horoscope"), None);
    }

    #[test]
    fn summed_total() {
        let r = color(7, "Violet");
        assert_eq!(r.total, 7);
        assert_eq!(r.kind(), ResultKind::Color);
        assert!(!r.is_derived());
    }

    #[test]
    fn children_are_found_by_kind() {
        let parent = color(3, "Crimson").with_child(color(5, "Gold"));
        assert_eq!(parent.child(ResultKind::Color).map(|c| c.total), Some(5));
        assert!(parent.child(ResultKind::History).is_none());
    }

    #[test]
    fn display_nests_children() {
        let parent = color(3, "Crimson").with_child(color(5, "Gold"));
        assert_eq!(
            parent.to_string(),
            "Color: Crimson [3] = 3\n  Color: Gold [5] = 5"
        );
    }
}
