//! Error types for the `chronicle-time` crate.
//!
//! Only structural failures surface as [`TimeError`]. Effect-application
//! failures are not errors at this level: they are value-returned as
//! error-kind [`Description`]s so a bad action never aborts the simulation
//! loop.
//!
//! [`Description`]: chronicle_types::Description

use chronicle_types::{CreatureId, TimelineId};
use chronicle_world::WorldError;

/// Errors that can occur during timeline operations.
#[derive(Debug, thiserror::Error)]
pub enum TimeError {
    /// The virtual clock cannot advance past the end of representable time.
    #[error("clock overflow: cannot advance beyond the last representable point")]
    ClockOverflow,

    /// A branch was requested for a creature that is not on the canonical
    /// roster.
    #[error("creature {creature} is not on the canonical timeline's roster")]
    CreatureNotOnMain {
        /// The creature that requested the branch.
        creature: CreatureId,
    },

    /// A timeline id did not resolve to a registered timeline.
    #[error("unknown timeline: {timeline}")]
    UnknownTimeline {
        /// The unresolved timeline id.
        timeline: TimelineId,
    },

    /// A world operation failed.
    #[error("world error: {source}")]
    World {
        /// The underlying world error.
        #[from]
        source: WorldError,
    },
}
