//! Emotion vector - the three mood coordinates shared by cocktails and diary entries

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three integer emotion coordinates
///
/// Distance between two vectors is the sum of absolute per-coordinate
/// differences (Manhattan distance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EmotionVector {
    pub emotion1: i32,
    pub emotion2: i32,
    pub emotion3: i32,
}

impl EmotionVector {
    /// Create a new EmotionVector
    #[inline]
    pub const fn new(emotion1: i32, emotion2: i32, emotion3: i32) -> Self {
        Self {
            emotion1,
            emotion2,
            emotion3,
        }
    }

    /// Manhattan distance to another vector
    ///
    /// Computed in i64 so that extreme i32 coordinates cannot overflow.
    #[inline]
    pub fn distance(&self, other: &Self) -> i64 {
        (i64::from(self.emotion1) - i64::from(other.emotion1)).abs()
            + (i64::from(self.emotion2) - i64::from(other.emotion2)).abs()
            + (i64::from(self.emotion3) - i64::from(other.emotion3)).abs()
    }

    /// Coordinates as a tuple
    #[inline]
    pub const fn as_tuple(&self) -> (i32, i32, i32) {
        (self.emotion1, self.emotion2, self.emotion3)
    }
}

impl From<(i32, i32, i32)> for EmotionVector {
    fn from((emotion1, emotion2, emotion3): (i32, i32, i32)) -> Self {
        Self::new(emotion1, emotion2, emotion3)
    }
}

impl fmt::Display for EmotionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.emotion1, self.emotion2, self.emotion3)
    }
}
