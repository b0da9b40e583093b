use crate::error::{Result, StylusError};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Inclusive, 1-based span of bases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    first: usize,
    last: usize,
}

impl Range {
    pub fn new(first: usize, last: usize) -> Result<Self> {
        if first == 0 || first > last {
            return Err(StylusError::InvalidRange { first, last });
        }
        Ok(Self { first, last })
    }

    pub fn first(&self) -> usize {
        self.first
    }

    pub fn last(&self) -> usize {
        self.last
    }

    /// Positional comparison: overlapping ranges compare `Equal`.
    ///
    /// Overlap is not transitive, so this is deliberately not an `Ord` impl.
    pub fn compare(&self, other: &Range) -> Ordering {
        if self.last < other.first {
            Ordering::Less
        } else if self.first > other.last {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    pub fn overlaps(&self, other: &Range) -> bool {
        self.compare(other) == Ordering::Equal
    }

    pub fn contains_range(&self, other: &Range) -> bool {
        self.first <= other.first && self.last >= other.last
    }

    pub fn contains_index(&self, base: usize) -> bool {
        self.first <= base && base <= self.last
    }

    /// Number of bases covered
    pub fn len(&self) -> usize {
        self.last - self.first + 1
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl std::fmt::Display for Range {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Range({},{})", self.first, self.last)
    }
}
