//! Dice expressions such as `2d6+1`, `d10`, or `4dF`.

use serde::{Deserialize, Serialize};

use crate::die::Die;
use crate::error::{DiceError, DiceResult};

/// Largest number of dice a single expression may roll.
pub const MAX_DICE: u32 = 100;

/// Largest die an expression may name.
pub const MAX_SIDES: u32 = 1000;

/// Largest flat modifier, in either direction.
pub const MAX_MODIFIER: i32 = 1000;

/// The kind of die an expression rolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExprDie {
    /// A polyhedral die.
    Standard(Die),
    /// A Fate die (-1/0/+1).
    Fate,
}

impl std::fmt::Display for ExprDie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standard(die) => write!(f, "{die}"),
            Self::Fate => write!(f, "dF"),
        }
    }
}

/// A parsed dice expression: `count` dice of one kind plus a flat modifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceExpr {
    /// How many dice to roll.
    pub count: u32,
    /// Which die to roll.
    pub die: ExprDie,
    /// Flat modifier added to the total.
    pub modifier: i32,
}

impl DiceExpr {
    /// An expression of `count` standard dice and no modifier.
    pub fn new(count: u32, die: Die) -> Self {
        Self {
            count,
            die: ExprDie::Standard(die),
            modifier: 0,
        }
    }

    /// Add a flat modifier.
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Parse an expression like `2d6`, `d20`, `3d10-2`, or `4dF`.
    pub fn parse(input: &str) -> DiceResult<Self> {
        let s: String = input
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_lowercase();
        if s.is_empty() {
            return Err(DiceError::Empty);
        }

        let (count_part, rest) = s
            .split_once('d')
            .ok_or_else(|| DiceError::InvalidDie(input.trim().to_string()))?;

        let count = if count_part.is_empty() {
            1
        } else {
            count_part
                .parse::<u32>()
                .map_err(|_| DiceError::InvalidCount(count_part.to_string()))?
        };
        if count == 0 {
            return Err(DiceError::InvalidCount(count_part.to_string()));
        }
        if count > MAX_DICE {
            return Err(DiceError::TooManyDice(count));
        }

        let (die_part, modifier) = match rest.find(['+', '-']) {
            Some(idx) => {
                let (die_part, modifier_part) = rest.split_at(idx);
                let modifier = modifier_part
                    .parse::<i32>()
                    .map_err(|_| DiceError::InvalidModifier(modifier_part.to_string()))?;
                (die_part, modifier)
            }
            None => (rest, 0),
        };
        if !(-MAX_MODIFIER..=MAX_MODIFIER).contains(&modifier) {
            return Err(DiceError::ModifierOutOfRange(modifier));
        }

        let die = if die_part == "f" {
            ExprDie::Fate
        } else {
            let tag = format!("d{die_part}");
            let die = Die::from_str_tag(&tag).ok_or_else(|| DiceError::InvalidDie(tag.clone()))?;
            if die.sides() > MAX_SIDES {
                return Err(DiceError::TooManySides(die.sides()));
            }
            ExprDie::Standard(die)
        };

        Ok(Self {
            count,
            die,
            modifier,
        })
    }
}

impl std::str::FromStr for DiceExpr {
    type Err = DiceError;

    fn from_str(s: &str) -> DiceResult<Self> {
        Self::parse(s)
    }
}

impl std::fmt::Display for DiceExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.count, self.die)?;
        match self.modifier {
            0 => Ok(()),
            m if m > 0 => write!(f, "+{m}"),
            m => write!(f, "{m}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_basic() {
        assert_eq!(DiceExpr::parse("2d6").unwrap(), DiceExpr::new(2, Die::D6));
        assert_eq!(DiceExpr::parse("d10").unwrap(), DiceExpr::new(1, Die::D10));
        assert_eq!(DiceExpr::parse(" 3 D 8 ").unwrap(), DiceExpr::new(3, Die::D8));
    }

    #[test]
    fn parse_modifiers() {
        let expr = DiceExpr::parse("2d6+3").unwrap();
        assert_eq!(expr.modifier, 3);
        let expr = DiceExpr::parse("1d20-2").unwrap();
        assert_eq!(expr.modifier, -2);
    }

    #[test]
    fn parse_fate() {
        let expr = DiceExpr::parse("4dF").unwrap();
        assert_eq!(expr.count, 4);
        assert_eq!(expr.die, ExprDie::Fate);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(DiceExpr::parse(""), Err(DiceError::Empty));
        assert!(matches!(DiceExpr::parse("xd6"), Err(DiceError::InvalidCount(_))));
        assert!(matches!(DiceExpr::parse("0d6"), Err(DiceError::InvalidCount(_))));
        assert!(matches!(DiceExpr::parse("2d1"), Err(DiceError::InvalidDie(_))));
        assert!(matches!(DiceExpr::parse("26"), Err(DiceError::InvalidDie(_))));
        assert!(matches!(DiceExpr::parse("2d6+x"), Err(DiceError::InvalidModifier(_))));
        assert_eq!(DiceExpr::parse("500d6"), Err(DiceError::TooManyDice(500)));
    }

    #[test]
    fn parse_bounds_sides_and_modifier() {
        assert_eq!(DiceExpr::parse("1d1000").unwrap().die, ExprDie::Standard(Die::Custom(1000)));
        assert_eq!(
            DiceExpr::parse("100d4294967295"),
            Err(DiceError::TooManySides(u32::MAX))
        );
        assert_eq!(DiceExpr::parse("1d6+1000").unwrap().modifier, 1000);
        assert_eq!(DiceExpr::parse("1d6-1000").unwrap().modifier, -1000);
        assert_eq!(
            DiceExpr::parse("1d6+2147483647"),
            Err(DiceError::ModifierOutOfRange(i32::MAX))
        );
        assert_eq!(
            DiceExpr::parse("1d6-1001"),
            Err(DiceError::ModifierOutOfRange(-1001))
        );
    }

    #[test]
    fn display_round_trips() {
        for text in ["2d6", "1d20-2", "3d10+4", "4dF"] {
            let expr: DiceExpr = text.parse().unwrap();
            assert_eq!(expr.to_string(), text);
        }
    }
}
