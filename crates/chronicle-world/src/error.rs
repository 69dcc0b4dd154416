//! Error types for the `chronicle-world` crate.
//!
//! Every fallible roster or stat operation reports a [`WorldError`].

use chronicle_types::{CreatureId, Stat};

/// Errors that can occur during world-state operations.
#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    /// A creature was not found in the roster.
    #[error("creature not found: {0}")]
    CreatureNotFound(CreatureId),

    /// A creature with the same identity is already in the roster.
    #[error("duplicate creature id: {0}")]
    DuplicateCreature(CreatureId),

    /// A stat delta would overflow the stat's integer range.
    #[error("stat {stat} overflow for creature {creature}")]
    StatOverflow {
        /// The creature whose stat was being changed.
        creature: CreatureId,
        /// The stat that would have overflowed.
        stat: Stat,
    },
}
