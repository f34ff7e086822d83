//! Strongly typed step identifier.
//!
//! `StepIndex` is `Copy + Ord + Hash` so it can key maps and be compared
//! against the tracker's current position without ceremony.  The inner
//! integer is `pub`; prefer `.index()` when indexing a step slice.

use std::fmt;

/// Position of a step within its route, counted from 0 in traversal order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StepIndex(pub u32);

impl StepIndex {
    pub const FIRST: StepIndex = StepIndex(0);

    /// Cast to `usize` for direct use as a `Vec` index.
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// The step immediately after `self`.
    #[inline]
    pub fn next(self) -> StepIndex {
        StepIndex(self.0 + 1)
    }
}

impl fmt::Display for StepIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StepIndex({})", self.0)
    }
}

impl From<StepIndex> for usize {
    #[inline(always)]
    fn from(id: StepIndex) -> usize {
        id.0 as usize
    }
}

impl TryFrom<usize> for StepIndex {
    type Error = std::num::TryFromIntError;
    fn try_from(n: usize) -> Result<StepIndex, Self::Error> {
        u32::try_from(n).map(StepIndex)
    }
}
