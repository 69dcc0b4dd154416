//! Branching, rollback-capable timeline core for the Chronicle simulation.
//!
//! The heart of the time travel mechanic: an append-only, chronologically
//! ordered log of reversible actions bound to a virtual clock and a world
//! snapshot. Actors can rewind their own history to an earlier point,
//! forking the simulation into an independent alternate history, and later
//! commit one history back onto the canonical one.
//!
//! Execution is single-threaded and turn-based: the host calls
//! [`Timeline::perform`], [`BranchRegistry::begin_changes`], and
//! [`BranchRegistry::commit_changes`] synchronously between ticks. Forking
//! deep-copies the world and must happen at a quiescent point, never
//! mid-mutation.
//!
//! # Modules
//!
//! - [`action`] -- [`Action`] and [`Effect`]: reversible, loggable units of
//!   simulation effect.
//! - [`branch`] -- [`BranchRegistry`]: the canonical timeline pointer plus
//!   registered forks, with branch and commit operations.
//! - [`clock`] -- [`VirtualClock`], the mutable holder of "now".
//! - [`config`] -- YAML-loadable configuration ([`TravelConfig`]).
//! - [`error`] -- Error types for timeline operations ([`TimeError`]).
//! - [`timeline`] -- [`Timeline`]: the ordered action log bound to one
//!   clock and one game state.
//!
//! [`Action`]: action::Action
//! [`Effect`]: action::Effect
//! [`BranchRegistry`]: branch::BranchRegistry
//! [`VirtualClock`]: clock::VirtualClock
//! [`TravelConfig`]: config::TravelConfig
//! [`TimeError`]: error::TimeError
//! [`Timeline`]: timeline::Timeline
//! [`Timeline::perform`]: timeline::Timeline::perform
//! [`BranchRegistry::begin_changes`]: branch::BranchRegistry::begin_changes
//! [`BranchRegistry::commit_changes`]: branch::BranchRegistry::commit_changes

pub mod action;
pub mod branch;
pub mod clock;
pub mod config;
pub mod error;
pub mod timeline;

// Re-export primary types at crate root for convenience.
pub use action::{Action, Effect};
pub use branch::{BranchPolicy, BranchRegistry, CommitOutcome, TimelineStatus};
pub use clock::VirtualClock;
pub use config::{ConfigError, TravelConfig};
pub use error::TimeError;
pub use timeline::Timeline;
