//! [`MapHandle`], the immutable spatial map descriptor.
//!
//! The timeline core never performs spatial reasoning; it only needs every
//! game state to reference *some* map. `MapHandle` captures the identifying
//! facts (name and dimensions) and nothing else. Because a handle is never
//! mutated after construction, forked game states may structurally share
//! one allocation instead of deep-copying map contents on every fork.

use serde::{Deserialize, Serialize};

/// An immutable descriptor of the spatial map a game state is bound to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapHandle {
    name: String,
    width: u32,
    height: u32,
    depth: u32,
}

impl MapHandle {
    /// Create a descriptor for a map with the given name and dimensions.
    pub fn new(name: impl Into<String>, width: u32, height: u32, depth: u32) -> Self {
        Self {
            name: name.into(),
            width,
            height,
            depth,
        }
    }

    /// The map's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Horizontal extent in cells.
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Vertical extent in cells.
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// Number of map layers.
    pub const fn depth(&self) -> u32 {
        self.depth
    }
}

impl core::fmt::Display for MapHandle {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} ({}x{}x{})",
            self.name, self.width, self.height, self.depth
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_dimensions() {
        let map = MapHandle::new("overworld", 80, 25, 3);
        assert_eq!(map.to_string(), "overworld (80x25x3)");
    }
}
