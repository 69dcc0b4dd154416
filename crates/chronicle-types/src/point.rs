//! [`TimePoint`], the ordered instant used to stamp and compare events.
//!
//! A `TimePoint` is an opaque, totally-ordered value with no wall-clock
//! semantics: the timeline core only ever asks "is this point strictly
//! after that one?". The only arithmetic exposed is a checked successor,
//! which the virtual clock uses to advance between turns.

use serde::{Deserialize, Serialize};

/// An ordered instant on a timeline.
///
/// Wraps a `u64` tick number. Ordering is total; equality means "the same
/// instant". Points are stamped onto actions from the virtual clock at
/// log-append time, which keeps every timeline's log sorted.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct TimePoint(u64);

impl TimePoint {
    /// The zero instant, where fresh clocks start.
    pub const ORIGIN: Self = Self(0);

    /// Create a point from a raw tick number.
    pub const fn new(tick: u64) -> Self {
        Self(tick)
    }

    /// Return the raw tick number.
    pub const fn tick(self) -> u64 {
        self.0
    }

    /// Strict "happened after" comparison.
    ///
    /// Equivalent to `self > other`; kept as a named method because it is
    /// the one comparison the rollback contract is written in terms of.
    pub const fn is_after(self, other: Self) -> bool {
        self.0 > other.0
    }

    /// The immediately following instant, or `None` at the end of
    /// representable time.
    pub const fn succeeding(self) -> Option<Self> {
        match self.0.checked_add(1) {
            Some(tick) => Some(Self(tick)),
            None => None,
        }
    }
}

impl core::fmt::Display for TimePoint {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "t{}", self.0)
    }
}

impl From<u64> for TimePoint {
    fn from(tick: u64) -> Self {
        Self(tick)
    }
}

impl From<TimePoint> for u64 {
    fn from(point: TimePoint) -> Self {
        point.0
    }
}
