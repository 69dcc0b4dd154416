//! [`Creature`]: identity, named numeric stats, and the current-timeline
//! reference.
//!
//! A creature is a value: deep-cloning a game state clones every creature
//! in its roster, and the copies diverge independently afterwards. What
//! survives cloning is the [`CreatureId`], so "the same creature" can be
//! looked up in every timeline that holds a copy of it.
//!
//! All stat arithmetic is checked. A delta that would overflow leaves the
//! stat untouched and reports [`WorldError::StatOverflow`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use chronicle_types::{CreatureId, Stat, TimelineId};

use crate::error::WorldError;

/// An actor in the simulation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creature {
    id: CreatureId,
    name: String,
    stats: BTreeMap<Stat, i64>,
    /// The timeline this creature currently lives on. Set by timeline
    /// operations (admission, forking); `None` until first admitted.
    timeline: Option<TimelineId>,
}

impl Creature {
    /// Create a creature with a fresh identity and no stats set.
    ///
    /// Unset stats read as 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: CreatureId::new(),
            name: name.into(),
            stats: BTreeMap::new(),
            timeline: None,
        }
    }

    /// The creature's stable identity key.
    pub const fn id(&self) -> CreatureId {
        self.id
    }

    /// The creature's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current value of a stat. Unset stats read as 0.
    pub fn stat(&self, stat: Stat) -> i64 {
        self.stats.get(&stat).copied().unwrap_or(0)
    }

    /// Set a stat to an absolute value (initial setup; actions go through
    /// [`Self::apply_stat_delta`]).
    pub fn set_stat(&mut self, stat: Stat, value: i64) {
        self.stats.insert(stat, value);
    }

    /// Apply a signed delta to a named stat. Returns the new value.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::StatOverflow`] if the addition would leave the
    /// `i64` range; the stat is left unchanged in that case.
    pub fn apply_stat_delta(&mut self, stat: Stat, delta: i64) -> Result<i64, WorldError> {
        let updated = self
            .stat(stat)
            .checked_add(delta)
            .ok_or(WorldError::StatOverflow {
                creature: self.id,
                stat,
            })?;
        self.stats.insert(stat, updated);
        Ok(updated)
    }

    /// The timeline this creature currently lives on, if admitted to one.
    pub const fn timeline(&self) -> Option<TimelineId> {
        self.timeline
    }

    /// Bind this creature to a timeline. Called by timeline operations
    /// when the creature is admitted or its world is forked.
    pub const fn set_timeline(&mut self, timeline: Option<TimelineId>) {
        self.timeline = timeline;
    }
}
