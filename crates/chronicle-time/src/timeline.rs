//! [`Timeline`]: an append-only, chronologically ordered log of executed
//! actions bound to one clock and one game state.
//!
//! The log invariant: entries are sorted by point in non-decreasing append
//! order, because every entry's point is stamped from the clock at append
//! time. Rollback exploits this -- everything after a cutoff is a suffix.

use tracing::{debug, info};

use chronicle_types::{CreatureId, Description, TimelineId, TimePoint};
use chronicle_world::{Creature, GameState};

use crate::action::{Action, Effect};
use crate::clock::VirtualClock;
use crate::error::TimeError;

/// One history: an ordered action log plus its bound clock and world.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    id: TimelineId,
    clock: VirtualClock,
    state: GameState,
    log: Vec<Action>,
}

impl Timeline {
    /// Create a fresh timeline bound to the given clock and world.
    pub fn new(clock: VirtualClock, state: GameState) -> Self {
        Self {
            id: TimelineId::new(),
            clock,
            state,
            log: Vec::new(),
        }
    }

    /// This timeline's identity.
    pub const fn id(&self) -> TimelineId {
        self.id
    }

    /// The timeline's clock.
    pub const fn clock(&self) -> &VirtualClock {
        &self.clock
    }

    /// Mutable access to the clock, for the host loop that advances time
    /// between turns.
    pub const fn clock_mut(&mut self) -> &mut VirtualClock {
        &mut self.clock
    }

    /// The world snapshot this timeline owns.
    pub const fn state(&self) -> &GameState {
        &self.state
    }

    /// Mutable access to the world, for host-side changes that are not
    /// recorded as reversible actions.
    pub const fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    /// The executed actions, oldest first.
    pub fn log(&self) -> &[Action] {
        &self.log
    }

    /// Add a creature to this timeline's roster and bind its
    /// current-timeline reference here.
    ///
    /// # Errors
    ///
    /// Returns a wrapped [`WorldError`] if the roster rejects the creature.
    ///
    /// [`WorldError`]: chronicle_world::WorldError
    pub fn admit(&mut self, mut creature: Creature) -> Result<(), TimeError> {
        creature.set_timeline(Some(self.id));
        self.state.add_to_roster(creature)?;
        Ok(())
    }

    /// Execute an effect for a performer: stamp the current instant, log
    /// the entry, and apply the forward effect.
    ///
    /// The entry is logged whether or not the application succeeded; a
    /// failed application is reported through the returned error-kind
    /// [`Description`] and the host decides what to do with it.
    pub fn perform(&mut self, performer: CreatureId, effect: Effect) -> Description {
        let point = self.clock.now();
        let action = Action::new(performer, point, effect);
        debug!(timeline = %self.id, %performer, %point, "logging action");
        let description = action.perform(&mut self.state);
        self.log.push(action);
        description
    }

    /// Remove every entry after `cutoff`, undoing the effects of all
    /// performers except `excluded`.
    ///
    /// Entries whose performer is `excluded` are removed without invoking
    /// their inverse: the traveler keeps its own recent experience, but the
    /// entries describe events that lead into a future this branch is
    /// abandoning. All other removed entries have their inverse applied,
    /// newest first. Returns the descriptions of the undone effects.
    ///
    /// Afterwards the clock is reset to the point of the new last entry.
    /// If the log is left empty there is no entry to read a point from and
    /// the clock holds its current value.
    pub fn rollback_to(&mut self, cutoff: TimePoint, excluded: CreatureId) -> Vec<Description> {
        // The log is sorted by point, so the doomed entries are a suffix.
        let first_after = self.log.partition_point(|a| !a.point().is_after(cutoff));
        let removed = self.log.split_off(first_after);

        let mut undone = Vec::new();
        for action in removed.iter().rev() {
            if action.performer() == excluded {
                debug!(
                    timeline = %self.id,
                    performer = %excluded,
                    point = %action.point(),
                    "entry discarded without undo (traveler's own effect)"
                );
                continue;
            }
            undone.push(action.rollback(&mut self.state));
        }

        if let Some(last) = self.log.last() {
            self.clock.start_at(last.point());
        }
        // Empty log: the clock holds its current value.

        info!(
            timeline = %self.id,
            %cutoff,
            removed = removed.len(),
            undone = undone.len(),
            now = %self.clock.now(),
            "rolled back"
        );
        undone
    }

    /// Produce a complete, independent structural duplicate of this
    /// timeline under a fresh identity.
    ///
    /// The log and world are deep-cloned; no mutable substructure is
    /// shared. Every roster copy's current-timeline reference is rebound to
    /// the new timeline.
    #[must_use]
    pub fn fork(&self) -> Self {
        let id = TimelineId::new();
        let mut state = self.state.deep_clone();
        for creature in state.creatures_mut() {
            creature.set_timeline(Some(id));
        }
        info!(source = %self.id, fork = %id, "timeline forked");
        Self {
            id,
            clock: self.clock,
            state,
            log: self.log.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use chronicle_types::Stat;
    use chronicle_world::MapHandle;

    use super::*;

    fn empty_timeline() -> Timeline {
        Timeline::new(
            VirtualClock::default(),
            GameState::new(MapHandle::new("testmap", 10, 10, 1)),
        )
    }

    /// Timeline with two admitted creatures, clock at t0.
    fn two_creature_timeline() -> (Timeline, CreatureId, CreatureId) {
        let mut timeline = empty_timeline();
        let mut a = Creature::new("alpha");
        a.set_stat(Stat::Health, 100);
        let mut b = Creature::new("beta");
        b.set_stat(Stat::Health, 100);
        let (a_id, b_id) = (a.id(), b.id());
        let _ = timeline.admit(a);
        let _ = timeline.admit(b);
        (timeline, a_id, b_id)
    }

    fn advance(timeline: &mut Timeline) -> TimePoint {
        timeline.clock_mut().advance().unwrap_or(TimePoint::ORIGIN)
    }

    fn health_of(timeline: &Timeline, id: CreatureId) -> Option<i64> {
        timeline.state().creature(id).map(|c| c.stat(Stat::Health))
    }

    #[test]
    fn admit_binds_creature_to_this_timeline() {
        let mut timeline = empty_timeline();
        let creature = Creature::new("alpha");
        let id = creature.id();
        assert!(timeline.admit(creature).is_ok());
        assert_eq!(
            timeline.state().creature(id).and_then(Creature::timeline),
            Some(timeline.id())
        );
    }

    #[test]
    fn perform_stamps_the_clock_point_and_appends_one_entry() {
        let (mut timeline, a, _) = two_creature_timeline();
        let _ = advance(&mut timeline);
        let before = timeline.clock().now();
        let _ = timeline.perform(a, Effect::stat_change(Stat::Health, 10));
        assert_eq!(timeline.log().len(), 1);
        assert_eq!(timeline.log().last().map(Action::point), Some(before));
    }

    #[test]
    fn log_stays_sorted_as_the_clock_advances() {
        let (mut timeline, a, b) = two_creature_timeline();
        let _ = advance(&mut timeline);
        let _ = timeline.perform(a, Effect::stat_change(Stat::Health, 1));
        let _ = advance(&mut timeline);
        let _ = timeline.perform(b, Effect::stat_change(Stat::Health, 2));
        let _ = timeline.perform(a, Effect::stat_change(Stat::Health, 3));
        let points: Vec<TimePoint> = timeline.log().iter().map(Action::point).collect();
        let mut sorted = points.clone();
        sorted.sort_unstable();
        assert_eq!(points, sorted);
    }

    #[test]
    fn failed_application_is_still_logged() {
        let mut timeline = empty_timeline();
        let ghost = CreatureId::new();
        let description = timeline.perform(ghost, Effect::stat_change(Stat::Health, 5));
        assert!(description.is_error());
        assert_eq!(timeline.log().len(), 1);
    }

    #[test]
    fn rollback_removes_every_entry_after_the_cutoff() {
        let (mut timeline, a, b) = two_creature_timeline();
        let cutoff = advance(&mut timeline);
        let _ = timeline.perform(a, Effect::stat_change(Stat::Health, 1));
        let _ = advance(&mut timeline);
        let _ = timeline.perform(b, Effect::stat_change(Stat::Health, 2));
        let _ = advance(&mut timeline);
        let _ = timeline.perform(b, Effect::stat_change(Stat::Health, 3));

        let _ = timeline.rollback_to(cutoff, a);

        // Only the entry stamped at the cutoff itself survives.
        assert_eq!(timeline.log().len(), 1);
        assert_eq!(timeline.log().first().map(Action::point), Some(cutoff));
    }

    #[test]
    fn rollback_undoes_non_excluded_performers() {
        let (mut timeline, a, b) = two_creature_timeline();
        let cutoff = advance(&mut timeline);
        let _ = advance(&mut timeline);
        let _ = timeline.perform(b, Effect::stat_change(Stat::Health, -25));
        assert_eq!(health_of(&timeline, b), Some(75));

        let undone = timeline.rollback_to(cutoff, a);

        assert_eq!(undone.len(), 1);
        assert_eq!(health_of(&timeline, b), Some(100));
        assert!(timeline.log().is_empty());
    }

    #[test]
    fn rollback_keeps_the_excluded_travelers_forward_effects() {
        // Actor heals +10, then takes -5: net +5. Rewinding past both
        // entries removes them from the log, but the traveler's lived
        // experience stands.
        let (mut timeline, a, _) = two_creature_timeline();
        let cutoff = advance(&mut timeline);
        let _ = advance(&mut timeline);
        let _ = timeline.perform(a, Effect::stat_change(Stat::Health, 10));
        let _ = advance(&mut timeline);
        let _ = timeline.perform(a, Effect::stat_change(Stat::Health, -5));
        assert_eq!(health_of(&timeline, a), Some(105));

        let undone = timeline.rollback_to(cutoff, a);

        assert!(undone.is_empty());
        assert!(timeline.log().is_empty());
        assert_eq!(health_of(&timeline, a), Some(105));
    }

    #[test]
    fn rollback_mixes_exclusion_and_undo_correctly() {
        let (mut timeline, a, b) = two_creature_timeline();
        let cutoff = advance(&mut timeline);
        let _ = advance(&mut timeline);
        let _ = timeline.perform(a, Effect::stat_change(Stat::Health, 10));
        let _ = advance(&mut timeline);
        let _ = timeline.perform(b, Effect::stat_change(Stat::Health, -40));

        let undone = timeline.rollback_to(cutoff, a);

        // B's entry was undone, A's was discarded without undo.
        assert_eq!(undone.len(), 1);
        assert_eq!(health_of(&timeline, a), Some(110));
        assert_eq!(health_of(&timeline, b), Some(100));
    }

    #[test]
    fn rollback_resets_the_clock_to_the_last_surviving_entry() {
        let (mut timeline, a, b) = two_creature_timeline();
        let _ = advance(&mut timeline);
        let _ = timeline.perform(b, Effect::stat_change(Stat::Health, 1));
        let kept = timeline.clock().now();
        let _ = advance(&mut timeline);
        let _ = advance(&mut timeline);
        let _ = timeline.perform(b, Effect::stat_change(Stat::Health, 2));

        let _ = timeline.rollback_to(kept, a);

        assert_eq!(timeline.clock().now(), kept);
    }

    #[test]
    fn rollback_to_an_empty_log_holds_the_clock() {
        let (mut timeline, a, b) = two_creature_timeline();
        let _ = advance(&mut timeline);
        let _ = timeline.perform(b, Effect::stat_change(Stat::Health, 1));
        let _ = advance(&mut timeline);
        let now = timeline.clock().now();

        let _ = timeline.rollback_to(TimePoint::ORIGIN, a);

        assert!(timeline.log().is_empty());
        assert_eq!(timeline.clock().now(), now);
    }

    #[test]
    fn rollback_with_nothing_after_cutoff_is_a_no_op() {
        let (mut timeline, a, b) = two_creature_timeline();
        let _ = advance(&mut timeline);
        let _ = timeline.perform(b, Effect::stat_change(Stat::Health, 1));
        let cutoff = advance(&mut timeline);

        let undone = timeline.rollback_to(cutoff, a);

        assert!(undone.is_empty());
        assert_eq!(timeline.log().len(), 1);
        assert_eq!(health_of(&timeline, b), Some(101));
    }

    #[test]
    fn fork_is_mutation_independent_of_the_source() {
        let (mut timeline, a, _) = two_creature_timeline();
        let _ = advance(&mut timeline);
        let _ = timeline.perform(a, Effect::stat_change(Stat::Health, 10));

        let mut fork = timeline.fork();
        assert_ne!(fork.id(), timeline.id());
        assert_eq!(fork.log().len(), timeline.log().len());

        let _ = fork.perform(a, Effect::stat_change(Stat::Health, -50));
        assert_eq!(health_of(&fork, a), Some(60));
        assert_eq!(health_of(&timeline, a), Some(110));
    }

    #[test]
    fn fork_rebinds_every_roster_copy() {
        let (timeline, ..) = two_creature_timeline();
        let fork = timeline.fork();
        for creature in fork.state().creatures() {
            assert_eq!(creature.timeline(), Some(fork.id()));
        }
        // The source's bindings are untouched.
        for creature in timeline.state().creatures() {
            assert_eq!(creature.timeline(), Some(timeline.id()));
        }
    }
}
