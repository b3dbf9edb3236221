//! Error types for dice parsing.

/// Errors that can occur while parsing dice expressions.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DiceError {
    /// The expression was empty.
    #[error("empty dice expression")]
    Empty,

    /// The dice count could not be parsed.
    #[error("invalid dice count: {0}")]
    InvalidCount(String),

    /// The die type could not be parsed.
    #[error("invalid die: {0}")]
    InvalidDie(String),

    /// The trailing modifier could not be parsed.
    #[error("invalid modifier: {0}")]
    InvalidModifier(String),

    /// More dice were requested than a single expression may roll.
    #[error("too many dice: {0} (max {max})", max = crate::expr::MAX_DICE)]
    TooManyDice(u32),

    /// The die has more sides than an expression may name.
    #[error("die too large: d{0} (max d{max})", max = crate::expr::MAX_SIDES)]
    TooManySides(u32),

    /// The modifier is outside the allowed range.
    #[error("modifier out of range: {0} (max ±{max})", max = crate::expr::MAX_MODIFIER)]
    ModifierOutOfRange(i32),
}

/// Convenience result type for dice operations.
pub type DiceResult<T> = Result<T, DiceError>;
