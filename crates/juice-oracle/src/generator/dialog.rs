//! Dialog grid: a conversation as a walk over a 5×5 grid of talking points.
//!
//! Each exchange rolls a direction d10 and a subject d10. Equal dice end the
//! conversation where it stands. Otherwise the position steps one cell in
//! the rolled direction, wrapping at the edges.

use juice_dice::DiceSource;
use serde::{Deserialize, Deserializer, Serialize};

use super::Generated;
use crate::result::{ResultDetail, RollResult, WordDetail};
use crate::table::{LookupTable, TableEntry, WordList};

/// Grid side length.
pub const GRID_SIZE: u8 = 5;

/// Where a new conversation starts.
pub const START: GridPos = GridPos { row: 2, col: 2 };

/// Talking points, indexed `[row][col]`.
pub const GRID: [[&str; GRID_SIZE as usize]; GRID_SIZE as usize] = [
    ["Greeting", "Small Talk", "Rumor", "Question", "Warning"],
    ["Fact", "Opinion", "Secret", "Request", "Refusal"],
    ["Past", "Personal", "Topic", "Plan", "Demand"],
    ["Memory", "Feeling", "Lie", "Offer", "Threat"],
    ["Story", "Confession", "Truth", "Promise", "Farewell"],
];

/// Who or what the exchange is about.
pub const SUBJECT: WordList = WordList::new(
    "Dialog Subject",
    &[
        "Someone Absent",
        "The Speaker",
        "The Listener",
        "An Ally",
        "A Rival",
        "The Current Thread",
        "This Place",
        "A Rumor",
        "The Past",
        "The Future",
    ],
);

/// Which way the conversation moves on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Up => write!(f, "Up"),
            Self::Down => write!(f, "Down"),
            Self::Left => write!(f, "Left"),
            Self::Right => write!(f, "Right"),
        }
    }
}

/// Direction d10.
pub const DIRECTION: LookupTable<Direction> = LookupTable::new(
    "Dialog Direction",
    &[
        TableEntry::new(1, 2, Direction::Up),
        TableEntry::new(3, 5, Direction::Down),
        TableEntry::new(6, 8, Direction::Left),
        TableEntry::new(9, 10, Direction::Right),
    ],
);

/// Read a stored grid coordinate, clamping anything off the grid (negative
/// values included) onto the nearest edge.
fn grid_coord<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    let raw = i64::deserialize(deserializer)?;
    let max = GRID_SIZE - 1;
    let clamped = u8::try_from(raw.clamp(0, i64::from(max))).unwrap_or(max);
    if i64::from(clamped) != raw {
        tracing::warn!(raw, clamped, "stored dialog coordinate off the grid, clamping");
    }
    Ok(clamped)
}

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    /// Row, 0 at the top.
    #[serde(deserialize_with = "grid_coord")]
    pub row: u8,
    /// Column, 0 at the left.
    #[serde(deserialize_with = "grid_coord")]
    pub col: u8,
}

impl GridPos {
    /// Create a position.
    pub fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// The talking point at this cell.
    pub fn label(self) -> &'static str {
        GRID[self.row.min(GRID_SIZE - 1) as usize][self.col.min(GRID_SIZE - 1) as usize]
    }

    /// Step one cell, wrapping around the edges. An off-grid position is
    /// first pulled onto the nearest edge.
    pub fn step(self, direction: Direction) -> Self {
        let max = GRID_SIZE - 1;
        let (row, col) = (self.row.min(max), self.col.min(max));
        let back = |v: u8| (v + max) % GRID_SIZE;
        let forward = |v: u8| (v + 1) % GRID_SIZE;
        match direction {
            Direction::Up => Self::new(back(row), col),
            Direction::Down => Self::new(forward(row), col),
            Direction::Left => Self::new(row, back(col)),
            Direction::Right => Self::new(row, forward(col)),
        }
    }
}

impl std::fmt::Display for GridPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}, {})", self.label(), self.row, self.col)
    }
}

/// Conversation state between exchanges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogState {
    /// Current row.
    #[serde(deserialize_with = "grid_coord")]
    pub row: u8,
    /// Current column.
    #[serde(deserialize_with = "grid_coord")]
    pub col: u8,
    /// Whether a conversation is under way.
    pub active: bool,
}

impl Default for DialogState {
    fn default() -> Self {
        Self {
            row: START.row,
            col: START.col,
            active: false,
        }
    }
}

impl DialogState {
    /// The current position.
    pub fn pos(self) -> GridPos {
        GridPos::new(self.row, self.col)
    }

    /// Pull an out-of-grid position back onto the grid.
    pub fn clamped(self) -> Self {
        let max = GRID_SIZE - 1;
        if self.row > max || self.col > max {
            tracing::warn!(row = self.row, col = self.col, "dialog state off the grid, clamping");
        }
        Self {
            row: self.row.min(max),
            col: self.col.min(max),
            active: self.active,
        }
    }
}

/// Kind-specific fields of a dialog exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DialogDetail {
    /// Position before the exchange.
    pub from: GridPos,
    /// Talking point before the exchange.
    pub from_label: String,
    /// Position after the exchange.
    pub to: GridPos,
    /// Talking point after the exchange.
    pub label: String,
    /// The direction moved; `None` when the conversation ended.
    pub direction: Option<Direction>,
    /// What the exchange is about.
    pub subject: WordDetail,
    /// Doubles ended the conversation.
    pub ended: bool,
    /// This exchange started a new conversation.
    pub started: bool,
    /// State after the exchange.
    pub state: DialogState,
}

/// A run of exchanges and the state it left behind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Conversation {
    /// Every exchange in order.
    pub exchanges: Vec<RollResult>,
    /// State after the last exchange.
    pub state: DialogState,
}

/// Roll one exchange.
pub fn generate<R: DiceSource>(rng: &mut R, state: Option<&DialogState>) -> Generated<DialogState> {
    let current = state.map(|s| s.clamped()).filter(|s| s.active);
    let started = current.is_none();
    let from = current.map_or(START, DialogState::pos);

    let direction_roll = rng.roll_die(10);
    let subject_roll = rng.roll_die(SUBJECT.sides());
    let subject = WordDetail {
        table: SUBJECT.name().to_string(),
        roll: subject_roll,
        word: SUBJECT.pick(subject_roll).to_string(),
    };

    let ended = direction_roll == subject_roll;
    let (to, direction) = if ended {
        tracing::debug!(roll = direction_roll, "doubles end the conversation");
        (from, None)
    } else {
        let direction = *DIRECTION.lookup_or(direction_roll as i32, &Direction::Down);
        (from.step(direction), Some(direction))
    };

    let next = DialogState {
        row: to.row,
        col: to.col,
        active: !ended,
    };
    let text = match direction {
        Some(direction) => format!("{direction} to {}, about {}", to.label(), subject.word),
        None => format!("Conversation ends on {}, about {}", to.label(), subject.word),
    };
    let result = RollResult::summed(
        "Dialog",
        vec![direction_roll as i32, subject_roll as i32],
        ResultDetail::DialogGrid(DialogDetail {
            from,
            to,
            from_label: from.label().to_string(),
            label: to.label().to_string(),
            direction,
            subject,
            ended,
            started,
            state: next,
        }),
    )
    .with_interpretation(text);

    Generated {
        result,
        state: next,
    }
}

/// Roll exchanges until doubles end the conversation or `cap` exchanges
/// have been rolled. A cap of zero still rolls one exchange.
pub fn generate_conversation<R: DiceSource>(
    rng: &mut R,
    state: Option<&DialogState>,
    cap: u32,
) -> Conversation {
    let mut exchanges = Vec::new();
    let mut current = state.copied();
    for _ in 0..cap.max(1) {
        let Generated { result, state } = generate(rng, current.as_ref());
        exchanges.push(result);
        current = Some(state);
        if !state.active {
            break;
        }
    }
    Conversation {
        exchanges,
        state: current.unwrap_or_default(),
    }
}
