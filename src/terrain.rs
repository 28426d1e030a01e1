//! Terrain descriptors
//!
//! A terrain is an immutable catalog entry describing one ground type.
//! Entries are created when the terrain catalog loads and shared by id
//! among every tile that uses them.

use serde::{Deserialize, Serialize};

/// Index into the terrain catalog. There is no "empty" terrain: every tile
/// carries exactly one valid terrain id.
pub type TerrainId = u32;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Terrain {
    name: String,
    glyph: String,
    transparent: bool,
    blocked: bool,
}

impl Terrain {
    pub fn new(
        name: impl Into<String>,
        glyph: impl Into<String>,
        transparent: bool,
        blocked: bool,
    ) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
            transparent,
            blocked,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Display glyph used when the tile resolves to its terrain layer.
    pub fn glyph(&self) -> &str {
        &self.glyph
    }

    /// Whether line of sight passes through this terrain.
    pub fn is_transparent(&self) -> bool {
        self.transparent
    }

    /// Whether entities are prevented from entering. Fixed at construction.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Transparency is the one field external effects may toggle after
    /// construction (a door opening, a plant withering).
    pub fn set_transparent(&mut self, transparent: bool) {
        self.transparent = transparent;
    }
}
