//! [`BranchRegistry`]: the canonical timeline plus registered forks.
//!
//! The registry is an owned object the simulation context constructs and
//! passes to the operations that need it; there is no process-wide "main
//! timeline" static. It holds exactly one canonical ("main") timeline, the
//! forks awaiting possible promotion, and -- depending on policy -- the
//! histories a commit has superseded.
//!
//! Per-timeline states and transitions:
//!
//! - `ActiveMain`: the canonical world. The genesis timeline starts here;
//!   a fork arrives here via [`BranchRegistry::commit_changes`].
//! - `ActiveFork`: created by [`BranchRegistry::begin_changes`].
//! - `Superseded`: a former main displaced by a commit. No further
//!   transitions; under [`BranchPolicy::RetainAllHistories`] it stays
//!   addressable, under [`BranchPolicy::PruneOnCommit`] it is dropped.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::info;

use chronicle_types::{CreatureId, TimelineId, TimePoint};
use chronicle_world::Creature;

use crate::error::TimeError;
use crate::timeline::Timeline;

/// What happens to a superseded former-main timeline on commit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BranchPolicy {
    /// Keep every superseded history registered and addressable. Abandoned
    /// histories persist and could be revisited.
    #[default]
    RetainAllHistories,
    /// Drop a superseded history from the registry when a commit displaces
    /// it.
    PruneOnCommit,
}

/// The lifecycle state of a registered timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimelineStatus {
    /// The canonical world.
    ActiveMain,
    /// A fork awaiting possible promotion.
    ActiveFork,
    /// A former main displaced by a commit; retained but inert.
    Superseded,
}

/// The result of a commit request. No variant is an error: committing
/// while already canonical, or without a timeline, is a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// The creature's fork became the canonical timeline.
    Promoted {
        /// The newly canonical timeline.
        timeline: TimelineId,
        /// The displaced former main.
        superseded: TimelineId,
    },
    /// The creature's current timeline already was the canonical one.
    AlreadyMain,
    /// The creature has no resolvable current timeline.
    NoTimeline,
}

/// Owner of the canonical timeline and every registered fork.
#[derive(Debug)]
pub struct BranchRegistry {
    main: Timeline,
    forks: BTreeMap<TimelineId, Timeline>,
    superseded: BTreeMap<TimelineId, Timeline>,
    policy: BranchPolicy,
}

impl BranchRegistry {
    /// Create a registry whose canonical world is `genesis`.
    pub const fn new(genesis: Timeline, policy: BranchPolicy) -> Self {
        Self {
            main: genesis,
            forks: BTreeMap::new(),
            superseded: BTreeMap::new(),
            policy,
        }
    }

    /// The configured superseded-history policy.
    pub const fn policy(&self) -> BranchPolicy {
        self.policy
    }

    /// The canonical timeline.
    pub const fn main(&self) -> &Timeline {
        &self.main
    }

    /// Mutable access to the canonical timeline, for the host loop that
    /// performs actions and advances the clock.
    pub const fn main_mut(&mut self) -> &mut Timeline {
        &mut self.main
    }

    /// Identity of the canonical timeline.
    pub const fn main_id(&self) -> TimelineId {
        self.main.id()
    }

    /// Identities of the registered forks, oldest first.
    pub fn fork_ids(&self) -> impl Iterator<Item = TimelineId> + '_ {
        self.forks.keys().copied()
    }

    /// Identities of the retained superseded histories, oldest first.
    pub fn superseded_ids(&self) -> impl Iterator<Item = TimelineId> + '_ {
        self.superseded.keys().copied()
    }

    /// Look up any registered timeline -- main, fork, or retained
    /// superseded history.
    pub fn timeline(&self, id: TimelineId) -> Option<&Timeline> {
        if id == self.main.id() {
            return Some(&self.main);
        }
        self.forks.get(&id).or_else(|| self.superseded.get(&id))
    }

    /// Mutable lookup of a registered fork.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::UnknownTimeline`] if `id` is not a registered
    /// fork.
    pub fn fork_mut(&mut self, id: TimelineId) -> Result<&mut Timeline, TimeError> {
        self.forks
            .get_mut(&id)
            .ok_or(TimeError::UnknownTimeline { timeline: id })
    }

    /// The lifecycle state of a registered timeline, or `None` if the id
    /// is unknown (including histories dropped by
    /// [`BranchPolicy::PruneOnCommit`]).
    pub fn status(&self, id: TimelineId) -> Option<TimelineStatus> {
        if id == self.main.id() {
            Some(TimelineStatus::ActiveMain)
        } else if self.forks.contains_key(&id) {
            Some(TimelineStatus::ActiveFork)
        } else if self.superseded.contains_key(&id) {
            Some(TimelineStatus::Superseded)
        } else {
            None
        }
    }

    /// Resolve the timeline a creature currently lives on.
    ///
    /// Creatures are value copies per timeline, so the same identity can
    /// appear in several histories (captured inside other actors' forks).
    /// The creature's *current* line is the newest fork whose roster copy
    /// is bound to that fork -- fork ids are time-ordered, so the newest
    /// fork is the one the creature most recently departed into -- falling
    /// back to main if the creature is on the canonical roster.
    pub fn current_line_of(&self, creature: CreatureId) -> Option<TimelineId> {
        for (id, line) in self.forks.iter().rev() {
            if line.state().creature(creature).and_then(Creature::timeline) == Some(*id) {
                return Some(*id);
            }
        }
        if self.main.state().contains(creature) {
            return Some(self.main.id());
        }
        None
    }

    /// Move `creature` back in time to `point` on a new alternate line.
    ///
    /// Deep-clones the canonical timeline, rewinds the clone to `point`
    /// while preserving the traveler's own recorded effects, registers the
    /// clone as a fork, and removes the traveler from the canonical roster
    /// (it is no longer simulated in the timeline it departed). Returns
    /// the fork's identity.
    ///
    /// # Errors
    ///
    /// Returns [`TimeError::CreatureNotOnMain`] if the creature is not on
    /// the canonical roster.
    pub fn begin_changes(
        &mut self,
        creature: CreatureId,
        point: TimePoint,
    ) -> Result<TimelineId, TimeError> {
        if !self.main.state().contains(creature) {
            return Err(TimeError::CreatureNotOnMain { creature });
        }

        let mut fork = self.main.fork();
        let id = fork.id();
        let undone = fork.rollback_to(point, creature);
        let _ = self.main.state_mut().remove_from_roster(creature);

        info!(
            traveler = %creature,
            fork = %id,
            %point,
            undone = undone.len(),
            "history branched"
        );
        self.forks.insert(id, fork);
        Ok(id)
    }

    /// Promote the creature's current timeline to canonical.
    ///
    /// A silent no-op when the creature has no resolvable timeline or is
    /// already on the canonical one. On promotion the displaced former
    /// main is retained or dropped per [`BranchPolicy`]; other forks are
    /// never touched, and creatures still referencing the displaced
    /// history are not reconciled.
    pub fn commit_changes(&mut self, creature: CreatureId) -> CommitOutcome {
        let Some(current) = self.current_line_of(creature) else {
            return CommitOutcome::NoTimeline;
        };
        if current == self.main.id() {
            return CommitOutcome::AlreadyMain;
        }
        let Some(fork) = self.forks.remove(&current) else {
            // current_line_of only names main or a registered fork.
            return CommitOutcome::NoTimeline;
        };

        let superseded = std::mem::replace(&mut self.main, fork);
        let superseded_id = superseded.id();
        match self.policy {
            BranchPolicy::RetainAllHistories => {
                self.superseded.insert(superseded_id, superseded);
            }
            BranchPolicy::PruneOnCommit => {
                info!(timeline = %superseded_id, "superseded history pruned");
            }
        }
        info!(
            traveler = %creature,
            promoted = %current,
            superseded = %superseded_id,
            "history committed"
        );
        CommitOutcome::Promoted {
            timeline: current,
            superseded: superseded_id,
        }
    }
}
