//! Fate dice: six-sided dice marked `-`, blank, and `+`.

use serde::{Deserialize, Serialize};

/// The face of a single Fate die.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FateDie {
    /// A minus face (-1).
    Minus,
    /// A blank face (0).
    Blank,
    /// A plus face (+1).
    Plus,
}

impl FateDie {
    /// Map a d3 draw onto a Fate face: 1 → `-`, 2 → blank, 3 → `+`.
    pub fn from_d3(roll: u32) -> Self {
        match roll {
            0 | 1 => Self::Minus,
            2 => Self::Blank,
            _ => Self::Plus,
        }
    }

    /// The d3 draw that produces this face. Inverse of [`FateDie::from_d3`].
    pub fn to_d3(self) -> u32 {
        match self {
            Self::Minus => 1,
            Self::Blank => 2,
            Self::Plus => 3,
        }
    }

    /// Numeric value of the face.
    pub fn value(self) -> i32 {
        match self {
            Self::Minus => -1,
            Self::Blank => 0,
            Self::Plus => 1,
        }
    }

    /// Sum the numeric values of several faces.
    pub fn sum(dice: &[Self]) -> i32 {
        dice.iter().map(|d| d.value()).sum()
    }
}

impl std::fmt::Display for FateDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Minus => write!(f, "-"),
            Self::Blank => write!(f, "0"),
            Self::Plus => write!(f, "+"),
        }
    }
}
