//! Signs: positive or negative.

use serde::{Deserialize, Serialize};

/// Enumeration over possible signs.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Hash, PartialEq, Eq)]
pub enum Sign {
    /// Positive.
    Pos,
    /// Negative.
    Neg,
}

impl Sign {
    /// Classifies a nonzero coordinate delta.
    ///
    /// Returns [`None`] for exact zero (and for NaN), since zero has no sign.
    ///
    /// # Example
    ///
    /// ```
    /// # use piclayout::prelude::*;
    /// assert_eq!(Sign::of(2.5), Some(Sign::Pos));
    /// assert_eq!(Sign::of(-0.1), Some(Sign::Neg));
    /// assert_eq!(Sign::of(0.0), None);
    /// ```
    pub fn of(value: f64) -> Option<Self> {
        if value > 0.0 {
            Some(Self::Pos)
        } else if value < 0.0 {
            Some(Self::Neg)
        } else {
            None
        }
    }

    /// Converts this sign to +1.0 (if positive) or -1.0 (if negative).
    #[inline]
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::Pos => 1.0,
            Self::Neg => -1.0,
        }
    }

    /// Returns true if the sign is positive.
    #[inline]
    pub const fn is_pos(&self) -> bool {
        matches!(self, Sign::Pos)
    }

    /// Returns true if the sign is negative.
    #[inline]
    pub const fn is_neg(&self) -> bool {
        matches!(self, Sign::Neg)
    }
}

impl std::ops::Not for Sign {
    type Output = Self;
    /// Flips the [`Sign`].
    fn not(self) -> Self::Output {
        match self {
            Self::Pos => Self::Neg,
            Self::Neg => Self::Pos,
        }
    }
}
