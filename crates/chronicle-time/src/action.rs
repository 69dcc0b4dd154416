//! [`Action`] and [`Effect`]: reversible, loggable units of simulation
//! effect.
//!
//! An effect is an explicit command value chosen at construction time: it
//! names the stat it changes and the signed delta to apply. The forward
//! application adds the delta; the inverse adds its negation. Holding both
//! directions in one typed value keeps every logged action undoable
//! without any runtime name lookup.
//!
//! Both application directions fail safely: a mutation that cannot be
//! applied (performer missing from the roster, arithmetic overflow, an
//! unnegatable delta) produces an error-kind [`Description`] instead of a
//! fault, so a bad action never aborts the simulation loop.

use serde::{Deserialize, Serialize};
use tracing::warn;

use chronicle_types::{CreatureId, Description, Stat, TimePoint};
use chronicle_world::GameState;

/// Which direction an effect is being applied in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ApplyDirection {
    Forward,
    Inverse,
}

/// A reversible mutation of the performer, chosen at action construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Effect {
    /// Apply a signed delta to a named stat of the performer. The inverse
    /// applies the negated delta.
    StatChange {
        /// The stat to change.
        stat: Stat,
        /// The signed amount to add on forward application.
        delta: i64,
    },
}

impl Effect {
    /// Convenience constructor for a stat-delta effect.
    pub const fn stat_change(stat: Stat, delta: i64) -> Self {
        Self::StatChange { stat, delta }
    }

    /// Apply this effect to the performer inside the given world.
    fn apply(
        &self,
        performer: CreatureId,
        state: &mut GameState,
        direction: ApplyDirection,
    ) -> Description {
        match self {
            Self::StatChange { stat, delta } => {
                let signed = match direction {
                    ApplyDirection::Forward => Some(*delta),
                    ApplyDirection::Inverse => delta.checked_neg(),
                };
                let Some(signed) = signed else {
                    warn!(%performer, %stat, delta, "stat delta has no inverse");
                    return Description::error(format!(
                        "stat delta {delta} cannot be inverted"
                    ));
                };
                let Some(creature) = state.creature_mut(performer) else {
                    warn!(%performer, "effect performer is not on the roster");
                    return Description::error(format!(
                        "creature {performer} is not on the roster"
                    ));
                };
                let name = creature.name().to_owned();
                match creature.apply_stat_delta(*stat, signed) {
                    Ok(value) => Description::plain(format!(
                        "{name}'s {stat} changed by {signed} to {value}"
                    )),
                    Err(err) => {
                        warn!(%performer, %stat, signed, "stat change failed");
                        Description::error(err.to_string())
                    }
                }
            }
        }
    }
}

/// One executed (or executable) entry in a timeline's log.
///
/// Binds a performer, the instant the entry was logged at, and a
/// reversible effect. The point is stamped by the timeline at append time,
/// which is what keeps the log sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Action {
    performer: CreatureId,
    point: TimePoint,
    effect: Effect,
}

impl Action {
    /// Bind a performer and effect to a stamped instant. Timelines stamp
    /// the point from their clock when appending.
    pub(crate) const fn new(performer: CreatureId, point: TimePoint, effect: Effect) -> Self {
        Self {
            performer,
            point,
            effect,
        }
    }

    /// The creature this action belongs to. Inside a forked timeline the
    /// id resolves against the fork's own roster copy.
    pub const fn performer(&self) -> CreatureId {
        self.performer
    }

    /// The instant this action was logged at.
    pub const fn point(&self) -> TimePoint {
        self.point
    }

    /// The reversible effect this action carries.
    pub const fn effect(&self) -> &Effect {
        &self.effect
    }

    /// Apply the forward effect against the performer.
    ///
    /// Always returns a [`Description`]; failures come back as the error
    /// kind rather than propagating.
    pub fn perform(&self, state: &mut GameState) -> Description {
        self.effect.apply(self.performer, state, ApplyDirection::Forward)
    }

    /// Apply the inverse effect against the performer, undoing a prior
    /// [`Self::perform`].
    pub fn rollback(&self, state: &mut GameState) -> Description {
        self.effect.apply(self.performer, state, ApplyDirection::Inverse)
    }
}
