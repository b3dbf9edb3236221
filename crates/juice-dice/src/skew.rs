//! Skewed d6.
//!
//! A skewed die is not a flat modifier: one uniform draw over the total face
//! weight is remapped onto the faces, where each face weighs
//! `1 + |skew| * rank`. Rank counts up from the unfavored end, so positive
//! skew piles weight on 6 and negative skew on 1.

use serde::{Deserialize, Serialize};

/// Strongest skew in either direction.
pub const MAX_SKEW: i32 = 3;

/// The result of a skewed d6 roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkewedRoll {
    /// The face rolled (1-6).
    pub value: u32,
    /// The skew actually applied, after clamping.
    pub skew: i32,
    /// The uniform draw over the total weight that selected the face.
    pub raw: u32,
}

/// Face weights for a skew, index 0 being face 1.
pub fn face_weights(skew: i32) -> [u32; 6] {
    let skew = skew.clamp(-MAX_SKEW, MAX_SKEW);
    let step = skew.unsigned_abs();
    let mut weights = [1; 6];
    for (idx, weight) in weights.iter_mut().enumerate() {
        let rank = if skew >= 0 { idx as u32 } else { 5 - idx as u32 };
        *weight = 1 + step * rank;
    }
    weights
}

/// Total weight across all faces for a skew; the side count of the
/// underlying uniform draw.
pub fn total_weight(skew: i32) -> u32 {
    face_weights(skew).iter().sum()
}

/// Map a uniform draw in `1..=total_weight(skew)` onto a face.
///
/// Draws past the total land on the last face.
pub fn face_for_draw(skew: i32, raw: u32) -> u32 {
    let mut remaining = raw.max(1);
    for (idx, weight) in face_weights(skew).iter().enumerate() {
        if remaining <= *weight {
            return idx as u32 + 1;
        }
        remaining -= weight;
    }
    6
}
