//! [`VirtualClock`], the mutable holder of "now" for one timeline.
//!
//! The clock is deliberately dumb: it holds the current [`TimePoint`] and
//! can be reset to an arbitrary instant. It never validates a reset against
//! log contents -- rollback is the caller that knows which instants are
//! still meaningful.

use serde::{Deserialize, Serialize};

use chronicle_types::TimePoint;

use crate::error::TimeError;

/// The current instant of one timeline.
///
/// Each timeline owns its own clock; forking a timeline copies the clock
/// along with everything else, after which the two advance independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VirtualClock {
    current: TimePoint,
}

impl VirtualClock {
    /// Create a clock holding the given instant.
    pub const fn starting_at(point: TimePoint) -> Self {
        Self { current: point }
    }

    /// The current instant.
    pub const fn now(&self) -> TimePoint {
        self.current
    }

    /// Unconditionally replace the current instant.
    ///
    /// No validation is performed against any log; callers are responsible
    /// for picking a meaningful point.
    pub const fn start_at(&mut self, point: TimePoint) {
        self.current = point;
    }

    /// Move to the next instant. Returns the new current point.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::ClockOverflow`] at the end of representable
    /// time.
    pub fn advance(&mut self) -> Result<TimePoint, TimeError> {
        self.current = self.current.succeeding().ok_or(TimeError::ClockOverflow)?;
        Ok(self.current)
    }
}

impl Default for VirtualClock {
    fn default() -> Self {
        Self::starting_at(TimePoint::ORIGIN)
    }
}
