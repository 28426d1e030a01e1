//! Per-cell state
//!
//! A tile is the mutable state of one grid cell: a set of four layer
//! references plus a visibility flag. Occupancy layers use 0 as "absent";
//! the terrain layer always holds a valid catalog id.

use serde::{Deserialize, Serialize};

use crate::terrain::TerrainId;

/// Unit layer id. 0 means no unit; nonzero ids are 1-based against the
/// 0-indexed unit catalog (lookups subtract 1).
pub type UnitId = u32;
/// Container layer id, 0 when absent.
pub type ContainerId = u32;
/// Generic object layer id, 0 when absent.
pub type ObjectId = u32;

const EMPTY: u32 = 0;

/// The four layer references within a tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layers {
    pub terrain: TerrainId,
    pub unit: UnitId,
    pub container: ContainerId,
    pub game_obj: ObjectId,
}

impl Layers {
    /// Terrain only, every occupancy layer empty.
    pub fn terrain_only(terrain: TerrainId) -> Self {
        Self {
            terrain,
            unit: EMPTY,
            container: EMPTY,
            game_obj: EMPTY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tile {
    pub layers: Layers,
    /// Fog-of-war state: explored and currently in sight. Freshly created
    /// tiles start unexplored.
    pub visible: bool,
}

impl Tile {
    pub fn new(terrain: TerrainId) -> Self {
        Self {
            layers: Layers::terrain_only(terrain),
            visible: false,
        }
    }

    pub fn with_layers(layers: Layers, visible: bool) -> Self {
        Self { layers, visible }
    }

    pub fn has_unit(&self) -> bool {
        self.layers.unit != EMPTY
    }

    pub fn has_container(&self) -> bool {
        self.layers.container != EMPTY
    }

    pub fn has_object(&self) -> bool {
        self.layers.game_obj != EMPTY
    }
}
