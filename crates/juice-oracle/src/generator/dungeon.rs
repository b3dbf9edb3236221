//! Dungeon crawling: areas, passages, and room conditions.
//!
//! Each call rolls one area on a d10 pool. While *entering* the dungeon the
//! pool is rolled with disadvantage, while *exploring* with advantage. A tie
//! between the two d10 is a double and drives the phase machine:
//!
//! - standard mode starts entering and flips to exploring on the first
//!   double, for good;
//! - two-pass mode starts exploring, flips to entering on the first double,
//!   and stops generating the map on the second.
//!
//! Once the map is stopped every call returns the terminal dead end without
//! rolling. Passage and room areas can cascade into the passage and room
//! condition tables in the same call.

use juice_dice::{DiceSource, PoolComparison, RollMode};
use serde::{Deserialize, Serialize};

use super::Generated;
use crate::result::{ResultDetail, RollResult};
use crate::table::{LookupTable, TableEntry};

/// Where the party is in the dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DungeonPhase {
    /// Working in from the entrance; areas are rolled with disadvantage.
    Entering,
    /// Deep inside; areas are rolled with advantage.
    Exploring,
}

impl DungeonPhase {
    /// The pool mode for area rolls in this phase.
    pub fn roll_mode(self) -> RollMode {
        match self {
            Self::Entering => RollMode::Disadvantage,
            Self::Exploring => RollMode::Advantage,
        }
    }
}

impl std::fmt::Display for DungeonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Entering => write!(f, "Entering"),
            Self::Exploring => write!(f, "Exploring"),
        }
    }
}

/// An area of the dungeon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DungeonArea {
    /// Nowhere further to go.
    DeadEnd,
    /// A connecting passage.
    Passage,
    /// A small room.
    SmallRoom,
    /// A mid-sized chamber.
    Chamber,
    /// A large hall.
    LargeHall,
    /// Stairs up or down.
    Stairs,
    /// The biggest room on the level.
    GrandChamber,
}

impl DungeonArea {
    /// Passages cascade into the passage table.
    pub fn is_passage(self) -> bool {
        self == Self::Passage
    }

    /// Rooms cascade into the room condition table.
    pub fn is_room(self) -> bool {
        matches!(
            self,
            Self::SmallRoom | Self::Chamber | Self::LargeHall | Self::GrandChamber
        )
    }
}

impl std::fmt::Display for DungeonArea {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DeadEnd => write!(f, "Dead End"),
            Self::Passage => write!(f, "Passage"),
            Self::SmallRoom => write!(f, "Small Room"),
            Self::Chamber => write!(f, "Chamber"),
            Self::LargeHall => write!(f, "Large Hall"),
            Self::Stairs => write!(f, "Stairs"),
            Self::GrandChamber => write!(f, "Grand Chamber"),
        }
    }
}

/// Area d10.
pub const AREA: LookupTable<DungeonArea> = LookupTable::new(
    "Dungeon Area",
    &[
        TableEntry::single(1, DungeonArea::DeadEnd),
        TableEntry::new(2, 3, DungeonArea::Passage),
        TableEntry::new(4, 5, DungeonArea::SmallRoom),
        TableEntry::new(6, 7, DungeonArea::Chamber),
        TableEntry::single(8, DungeonArea::LargeHall),
        TableEntry::single(9, DungeonArea::Stairs),
        TableEntry::single(10, DungeonArea::GrandChamber),
    ],
);

/// Passage d10.
pub const PASSAGE: LookupTable<&str> = LookupTable::new(
    "Passage",
    &[
        TableEntry::single(1, "Collapsed Tunnel"),
        TableEntry::single(2, "Narrow Crawlway"),
        TableEntry::single(3, "Bending Corridor"),
        TableEntry::single(4, "Straight Corridor"),
        TableEntry::single(5, "Sloping Passage"),
        TableEntry::single(6, "T-Junction"),
        TableEntry::single(7, "Crossroads"),
        TableEntry::single(8, "Spiral Stair"),
        TableEntry::single(9, "Bridge"),
        TableEntry::single(10, "Secret Passage"),
    ],
);

/// Room condition, d6 when occupied and d10 when not.
pub const ROOM_CONDITION: LookupTable<&str> = LookupTable::new(
    "Room Condition",
    &[
        TableEntry::single(1, "Well-kept"),
        TableEntry::single(2, "Lived-in"),
        TableEntry::single(3, "Cluttered"),
        TableEntry::single(4, "Guarded"),
        TableEntry::single(5, "Fortified"),
        TableEntry::single(6, "Filthy"),
        TableEntry::single(7, "Dusty and Abandoned"),
        TableEntry::single(8, "Partially Collapsed"),
        TableEntry::single(9, "Flooded"),
        TableEntry::single(10, "Ruined"),
    ],
);

/// Options for an area roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DungeonOptions {
    /// Start a new map in two-pass mode. Ignored when a state is supplied.
    pub two_pass: bool,
    /// Cascade passages into the passage table.
    pub include_passage: bool,
    /// Pool mode for the passage d10.
    pub passage_mode: RollMode,
    /// Cascade rooms into the room condition table.
    pub include_condition: bool,
    /// Rooms are occupied; condition is read on a d6.
    pub occupied: bool,
}

/// Map state between area rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonState {
    /// Current phase.
    pub phase: DungeonPhase,
    /// Whether the map uses the two-pass rules.
    pub two_pass: bool,
    /// Doubles rolled so far.
    pub doubles: u32,
    /// No more areas will be generated.
    pub stop_map_generation: bool,
}

impl DungeonState {
    /// A fresh map in the given mode.
    pub fn new(two_pass: bool) -> Self {
        Self {
            phase: if two_pass {
                DungeonPhase::Exploring
            } else {
                DungeonPhase::Entering
            },
            two_pass,
            doubles: 0,
            stop_map_generation: false,
        }
    }

    /// Apply a double to the phase machine. Returns true if the phase
    /// changed.
    fn record_double(&mut self) -> bool {
        self.doubles = self.doubles.saturating_add(1);
        match (self.two_pass, self.phase) {
            (false, DungeonPhase::Entering) => {
                self.phase = DungeonPhase::Exploring;
                true
            }
            (false, DungeonPhase::Exploring) => false,
            (true, _) if self.doubles == 1 => {
                self.phase = DungeonPhase::Entering;
                true
            }
            (true, _) => {
                self.stop_map_generation = true;
                false
            }
        }
    }
}

impl Default for DungeonState {
    fn default() -> Self {
        Self::new(false)
    }
}

/// Kind-specific fields of an area roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DungeonDetail {
    /// The area.
    pub area: DungeonArea,
    /// The kept d10; zero for the terminal dead end.
    pub roll: u32,
    /// Phase the area was rolled in.
    pub phase: DungeonPhase,
    /// The roll was a double.
    pub doubles: bool,
    /// The double changed the phase.
    pub phase_change: bool,
    /// The map is finished; no dice were rolled.
    pub terminal: bool,
    /// State after the roll.
    pub state: DungeonState,
}

/// Kind-specific fields of a passage cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PassageDetail {
    /// The kept d10.
    pub roll: u32,
    /// Pool mode the passage was rolled with.
    pub mode: RollMode,
    /// The passage shape.
    pub passage: String,
}

/// Kind-specific fields of a room condition cascade.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomConditionDetail {
    /// The die roll.
    pub roll: u32,
    /// Rolled on the occupied d6.
    pub occupied: bool,
    /// The condition.
    pub condition: String,
}

fn pool_dice(pool: &PoolComparison) -> Vec<i32> {
    pool.all_dice().into_iter().map(|d| d as i32).collect()
}

fn roll_passage<R: DiceSource>(rng: &mut R, mode: RollMode) -> RollResult {
    let pool = rng.roll_pool(mode, 1, 10);
    let roll = pool.chosen_sum();
    let passage = *PASSAGE.lookup_or(roll as i32, &"Straight Corridor");
    RollResult::new(
        "Passage",
        pool_dice(&pool),
        roll as i32,
        ResultDetail::Passage(PassageDetail {
            roll,
            mode,
            passage: passage.to_string(),
        }),
    )
    .with_interpretation(passage)
}

fn roll_condition<R: DiceSource>(rng: &mut R, occupied: bool) -> RollResult {
    let roll = rng.roll_die(if occupied { 6 } else { 10 });
    let condition = *ROOM_CONDITION.lookup_or(roll as i32, &"Dusty and Abandoned");
    RollResult::summed(
        "Room Condition",
        vec![roll as i32],
        ResultDetail::RoomCondition(RoomConditionDetail {
            roll,
            occupied,
            condition: condition.to_string(),
        }),
    )
    .with_interpretation(condition)
}

fn terminal(state: DungeonState) -> RollResult {
    RollResult::new(
        "Dungeon Area",
        Vec::new(),
        0,
        ResultDetail::DungeonArea(DungeonDetail {
            area: DungeonArea::DeadEnd,
            roll: 0,
            phase: state.phase,
            doubles: false,
            phase_change: false,
            terminal: true,
            state,
        }),
    )
    .with_interpretation("Dead End (map complete)")
}

/// Roll the next dungeon area.
pub fn generate<R: DiceSource>(
    rng: &mut R,
    state: Option<&DungeonState>,
    options: DungeonOptions,
) -> Generated<DungeonState> {
    let mut next = state.copied().unwrap_or_else(|| DungeonState::new(options.two_pass));
    if next.stop_map_generation {
        return Generated {
            result: terminal(next),
            state: next,
        };
    }

    let phase = next.phase;
    let pool = rng.roll_pool(phase.roll_mode(), 1, 10);
    let roll = pool.chosen_sum();
    let doubles = pool.is_tie();
    let phase_change = doubles && next.record_double();
    if doubles {
        tracing::debug!(
            doubles = next.doubles,
            phase = %next.phase,
            phase_change,
            stop = next.stop_map_generation,
            "dungeon doubles"
        );
    }

    let area = *AREA.lookup_or(roll as i32, &DungeonArea::DeadEnd);
    let mut text = format!("{area} ({phase})");
    if phase_change {
        text.push_str(&format!(", now {}", next.phase));
    }
    if next.stop_map_generation {
        text.push_str(", map complete");
    }

    let mut result = RollResult::new(
        "Dungeon Area",
        pool_dice(&pool),
        roll as i32,
        ResultDetail::DungeonArea(DungeonDetail {
            area,
            roll,
            phase,
            doubles,
            phase_change,
            terminal: false,
            state: next,
        }),
    )
    .with_interpretation(text);

    if area.is_passage() && options.include_passage {
        result = result.with_child(roll_passage(rng, options.passage_mode));
    }
    if area.is_room() && options.include_condition {
        result = result.with_child(roll_condition(rng, options.occupied));
    }

    Generated {
        result,
        state: next,
    }
}
