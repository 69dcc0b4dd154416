//! Type-safe identifier wrappers around [`Uuid`].
//!
//! Creatures and timelines carry strongly-typed IDs to prevent accidental
//! mixing of identifiers at compile time. All IDs use UUID v7
//! (time-ordered), so comparing two IDs of the same kind also orders them
//! by creation time -- the branch registry relies on this to find the most
//! recently created fork.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Generates a newtype wrapper around [`Uuid`] with standard derives.
macro_rules! define_id {
    (
        $(#[$meta:meta])*
        $name:ident
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub Uuid);

        impl $name {
            /// Create a new identifier using UUID v7 (time-ordered).
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            /// Return the inner [`Uuid`] value.
            pub const fn into_inner(self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl From<$name> for Uuid {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

define_id! {
    /// Unique identifier for a creature in the simulation.
    ///
    /// A creature's ID is its stable identity key: it survives deep cloning
    /// of game state, so the "same" creature can be looked up in every
    /// timeline that holds a copy of it.
    CreatureId
}

define_id! {
    /// Unique identifier for a timeline (history) in the branch registry.
    TimelineId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_distinct_types() {
        let creature = CreatureId::new();
        let timeline = TimelineId::new();
        // These are different types -- the compiler enforces no mixing.
        assert_ne!(creature.into_inner(), Uuid::nil());
        assert_ne!(timeline.into_inner(), Uuid::nil());
    }

    #[test]
    fn id_roundtrip_serde() {
        let original = CreatureId::new();
        let json = serde_json::to_string(&original).ok();
        assert!(json.is_some());
        let restored: Result<CreatureId, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert!(restored.is_ok());
    }

    #[test]
    fn id_display_matches_uuid() {
        let id = TimelineId::new();
        assert_eq!(id.to_string(), id.into_inner().to_string());
    }

    #[test]
    fn v7_ids_order_by_creation() {
        let earlier = TimelineId::new();
        let later = TimelineId::new();
        // UUID v7 embeds a millisecond timestamp with extra monotonic bits,
        // so IDs created in sequence compare in creation order.
        assert!(earlier < later);
    }
}
