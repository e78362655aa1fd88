//! Simulation turn counter.
//!
//! A turn is one discrete step in which every in-flight agent advances at
//! most one room.  Turns are 0-based: on `Turn(0)` the first agent of each
//! lane steps out of the start room.

use std::fmt;

/// An absolute, 0-based turn counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Turn(pub u32);

impl Turn {
    pub const ZERO: Turn = Turn(0);

    /// The turn immediately after `self`.
    #[inline]
    pub fn next(self) -> Turn {
        Turn(self.0 + 1)
    }

    /// How many rooms past the start an agent released `rank` turns after
    /// its lane opened has travelled, as a 0-based span index.
    ///
    /// Returns `None` while the agent is still waiting in the start room.
    #[inline]
    pub fn offset_from(self, rank: u32) -> Option<usize> {
        self.0.checked_sub(rank).map(|d| d as usize)
    }
}

impl std::ops::Add<u32> for Turn {
    type Output = Turn;
    #[inline]
    fn add(self, rhs: u32) -> Turn {
        Turn(self.0 + rhs)
    }
}

impl fmt::Display for Turn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}
