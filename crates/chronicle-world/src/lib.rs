//! Game state, creatures, and the map reference for the Chronicle timeline
//! core.
//!
//! This crate models the world a timeline snapshots and forks: a roster of
//! active creatures keyed by identity, plus an opaque reference to the
//! spatial map. Spatial logic itself (geometry, field of view, pathing)
//! lives with the host; the timeline core only needs the world to be fully
//! and independently duplicable.
//!
//! # Modules
//!
//! - [`creature`] -- [`Creature`]: identity, named numeric stats, and the
//!   current-timeline reference.
//! - [`error`] -- Error types for world operations.
//! - [`map`] -- [`MapHandle`], the immutable spatial map descriptor.
//! - [`state`] -- [`GameState`]: the roster plus map reference, with deep
//!   cloning.
//!
//! [`Creature`]: creature::Creature
//! [`MapHandle`]: map::MapHandle
//! [`GameState`]: state::GameState

pub mod creature;
pub mod error;
pub mod map;
pub mod state;

// Re-export primary types at crate root.
pub use creature::Creature;
pub use error::WorldError;
pub use map::MapHandle;
pub use state::GameState;
