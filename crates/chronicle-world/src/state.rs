//! [`GameState`]: the roster of active creatures plus the map reference.
//!
//! A game state is the world snapshot a timeline owns. It must support
//! full independent duplication: forking a timeline deep-clones its game
//! state, and no mutation of either copy may be visible through the other.
//! The one structurally shared piece is the [`MapHandle`], which is
//! immutable after construction.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use chronicle_types::CreatureId;

use crate::creature::Creature;
use crate::error::WorldError;
use crate::map::MapHandle;

/// The world snapshot owned by one timeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    /// Active creatures, keyed by identity.
    roster: BTreeMap<CreatureId, Creature>,
    /// The spatial map this world is bound to. Immutable, so clones share
    /// the allocation.
    map: Arc<MapHandle>,
}

impl GameState {
    /// Create an empty world bound to the given map.
    pub fn new(map: MapHandle) -> Self {
        Self {
            roster: BTreeMap::new(),
            map: Arc::new(map),
        }
    }

    /// The map this world is bound to.
    pub fn map(&self) -> &MapHandle {
        &self.map
    }

    /// Add a creature to the active roster.
    ///
    /// # Errors
    ///
    /// Returns [`WorldError::DuplicateCreature`] if a creature with the
    /// same identity is already on the roster.
    pub fn add_to_roster(&mut self, creature: Creature) -> Result<(), WorldError> {
        let id = creature.id();
        if self.roster.contains_key(&id) {
            return Err(WorldError::DuplicateCreature(id));
        }
        debug!(creature = %id, name = creature.name(), "creature joins roster");
        self.roster.insert(id, creature);
        Ok(())
    }

    /// Remove a creature from the active roster, returning it if present.
    pub fn remove_from_roster(&mut self, id: CreatureId) -> Option<Creature> {
        let removed = self.roster.remove(&id);
        if removed.is_some() {
            debug!(creature = %id, "creature leaves roster");
        }
        removed
    }

    /// Look up a creature by identity.
    pub fn creature(&self, id: CreatureId) -> Option<&Creature> {
        self.roster.get(&id)
    }

    /// Look up a creature by identity, mutably.
    pub fn creature_mut(&mut self, id: CreatureId) -> Option<&mut Creature> {
        self.roster.get_mut(&id)
    }

    /// Whether a creature with this identity is on the roster.
    pub fn contains(&self, id: CreatureId) -> bool {
        self.roster.contains_key(&id)
    }

    /// Iterate the roster in identity order.
    pub fn creatures(&self) -> impl Iterator<Item = &Creature> {
        self.roster.values()
    }

    /// Iterate the roster mutably in identity order.
    pub fn creatures_mut(&mut self) -> impl Iterator<Item = &mut Creature> {
        self.roster.values_mut()
    }

    /// Number of creatures on the roster.
    pub fn roster_len(&self) -> usize {
        self.roster.len()
    }

    /// Whether the roster is empty.
    pub fn is_empty(&self) -> bool {
        self.roster.is_empty()
    }

    /// Produce a fully independent duplicate of this world.
    ///
    /// Every creature is cloned by value; mutating either copy's roster or
    /// stats is invisible to the other. Only the immutable [`MapHandle`]
    /// allocation is shared.
    #[must_use]
    pub fn deep_clone(&self) -> Self {
        self.clone()
    }
}

#[cfg(test)]
mod tests {
    use chronicle_types::Stat;

    use super::*;

    fn test_map() -> MapHandle {
        MapHandle::new("testmap", 10, 10, 1)
    }

    #[test]
    fn add_and_lookup() {
        let mut state = GameState::new(test_map());
        let creature = Creature::new("alpha");
        let id = creature.id();
        assert!(state.add_to_roster(creature).is_ok());
        assert!(state.contains(id));
        assert_eq!(state.creature(id).map(Creature::name), Some("alpha"));
    }

    #[test]
    fn duplicate_identity_is_rejected() {
        let mut state = GameState::new(test_map());
        let creature = Creature::new("alpha");
        let copy = creature.clone();
        assert!(state.add_to_roster(creature).is_ok());
        assert!(matches!(
            state.add_to_roster(copy),
            Err(WorldError::DuplicateCreature(_))
        ));
        assert_eq!(state.roster_len(), 1);
    }

    #[test]
    fn remove_returns_the_creature() {
        let mut state = GameState::new(test_map());
        let creature = Creature::new("alpha");
        let id = creature.id();
        let _ = state.add_to_roster(creature);
        let removed = state.remove_from_roster(id);
        assert_eq!(removed.map(|c| c.id()), Some(id));
        assert!(!state.contains(id));
        assert!(state.remove_from_roster(id).is_none());
    }

    #[test]
    fn deep_clone_is_mutation_independent() {
        let mut state = GameState::new(test_map());
        let mut creature = Creature::new("alpha");
        creature.set_stat(Stat::Health, 100);
        let id = creature.id();
        let _ = state.add_to_roster(creature);

        let mut fork = state.deep_clone();

        // Mutate the fork's copy: stat change plus a roster addition.
        if let Some(c) = fork.creature_mut(id) {
            let _ = c.apply_stat_delta(Stat::Health, -30);
        }
        let _ = fork.add_to_roster(Creature::new("beta"));

        // The source is untouched.
        assert_eq!(state.creature(id).map(|c| c.stat(Stat::Health)), Some(100));
        assert_eq!(state.roster_len(), 1);
        assert_eq!(fork.creature(id).map(|c| c.stat(Stat::Health)), Some(70));
        assert_eq!(fork.roster_len(), 2);

        // And the other direction: mutating the source leaves the fork alone.
        if let Some(c) = state.creature_mut(id) {
            let _ = c.apply_stat_delta(Stat::Health, -100);
        }
        assert_eq!(fork.creature(id).map(|c| c.stat(Stat::Health)), Some(70));
    }

    #[test]
    fn clones_share_the_map_descriptor() {
        let state = GameState::new(test_map());
        let fork = state.deep_clone();
        assert_eq!(state.map(), fork.map());
    }
}
