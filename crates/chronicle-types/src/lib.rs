//! Shared type definitions for the Chronicle timeline core.
//!
//! This crate is the single source of truth for the small vocabulary shared
//! by the world and time crates: entity identifiers, the ordered instant
//! type, the named-stat enumeration, and the renderable action result.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for all entity identifiers
//! - [`point`] -- [`TimePoint`], the ordered instant used to stamp events
//! - [`stat`] -- [`Stat`], the named numeric creature statistics
//! - [`description`] -- [`Description`], the renderable action result
//!
//! [`TimePoint`]: point::TimePoint
//! [`Stat`]: stat::Stat
//! [`Description`]: description::Description

pub mod description;
pub mod ids;
pub mod point;
pub mod stat;

// Re-export all public types at crate root for convenience.
pub use description::Description;
pub use ids::{CreatureId, TimelineId};
pub use point::TimePoint;
pub use stat::Stat;
