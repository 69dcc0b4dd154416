//! [`Stat`], the named numeric statistics a creature carries.
//!
//! Reversible actions mutate stats by signed deltas, so the set of mutable
//! quantities is a closed enum rather than a string-keyed lookup: an action
//! names the stat it changes at construction time and the compiler rules
//! out targeting a mutator that does not exist.

use serde::{Deserialize, Serialize};

/// A named numeric creature statistic.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Stat {
    /// Hit points.
    Health,
    /// Action energy spent by performing and regained by resting.
    Energy,
    /// Movement speed in map cells per turn.
    Speed,
    /// Field-of-view radius in map cells.
    Sight,
}

impl Stat {
    /// All stats, in declaration order.
    pub const ALL: [Self; 4] = [Self::Health, Self::Energy, Self::Speed, Self::Sight];

    /// The lowercase display name of the stat.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Health => "health",
            Self::Energy => "energy",
            Self::Speed => "speed",
            Self::Sight => "sight",
        }
    }
}

impl core::fmt::Display for Stat {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_name() {
        for stat in Stat::ALL {
            assert_eq!(stat.to_string(), stat.name());
        }
    }

    #[test]
    fn serde_uses_snake_case() {
        let json = serde_json::to_string(&Stat::Health).ok();
        assert_eq!(json.as_deref(), Some("\"health\""));
    }
}
