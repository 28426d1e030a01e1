//! External game-data catalogs
//!
//! The map never owns terrain or unit definitions; it reads them through
//! the lookup capabilities below. The surrounding game populates a registry
//! once and hands the map a shared reference at construction.

use serde::{Deserialize, Serialize};

use crate::terrain::{Terrain, TerrainId};
use crate::tile::UnitId;

/// Read-only access to the terrain catalog. Ids index the catalog directly
/// (0-based).
pub trait TerrainLookup {
    fn terrain(&self, id: TerrainId) -> Option<&Terrain>;
}

/// Read-only access to the unit catalog. `index` is the 0-based storage
/// index; unit layer ids are 1-based, so callers pass `unit_id - 1`.
pub trait UnitLookup {
    fn unit(&self, index: u32) -> Option<&UnitProfile>;
}

/// Everything the map needs from the game-data registry.
pub trait GameData: TerrainLookup + UnitLookup {}

impl<T: TerrainLookup + UnitLookup> GameData for T {}

/// The slice of a unit definition the map layer cares about: enough to
/// render it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnitProfile {
    pub name: String,
    pub glyph: String,
}

impl UnitProfile {
    pub fn new(name: impl Into<String>, glyph: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            glyph: glyph.into(),
        }
    }
}

/// In-memory registry backing both catalogs. Stands in for the externally
/// populated game-data store in scenarios, the demo binary, and tests.
#[derive(Debug, Default)]
pub struct Registry {
    terrains: Vec<Terrain>,
    units: Vec<UnitProfile>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id assigned to the new terrain.
    pub fn add_terrain(&mut self, terrain: Terrain) -> TerrainId {
        self.terrains.push(terrain);
        (self.terrains.len() - 1) as TerrainId
    }

    /// Returns the 1-based id to store in a tile's unit layer.
    pub fn add_unit(&mut self, unit: UnitProfile) -> UnitId {
        self.units.push(unit);
        self.units.len() as UnitId
    }

    /// Mutable descriptor access, for transparency toggles by lighting or
    /// effect logic.
    pub fn terrain_mut(&mut self, id: TerrainId) -> Option<&mut Terrain> {
        self.terrains.get_mut(id as usize)
    }

    pub fn terrain_count(&self) -> usize {
        self.terrains.len()
    }
}

impl TerrainLookup for Registry {
    fn terrain(&self, id: TerrainId) -> Option<&Terrain> {
        self.terrains.get(id as usize)
    }
}

impl UnitLookup for Registry {
    fn unit(&self, index: u32) -> Option<&UnitProfile> {
        self.units.get(index as usize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terrain_ids_are_zero_based() {
        let mut registry = Registry::new();
        let floor = registry.add_terrain(Terrain::new("floor", ".", true, false));
        let wall = registry.add_terrain(Terrain::new("wall", "#", false, true));

        assert_eq!(floor, 0);
        assert_eq!(wall, 1);
        assert_eq!(registry.terrain(wall).unwrap().name(), "wall");
        assert!(registry.terrain(2).is_none());
    }

    #[test]
    fn test_unit_ids_are_one_based() {
        let mut registry = Registry::new();
        let rat = registry.add_unit(UnitProfile::new("rat", "r"));

        assert_eq!(rat, 1);
        // layer id 1 lives at storage index 0
        assert_eq!(registry.unit(rat - 1).unwrap().glyph, "r");
        assert!(registry.unit(rat).is_none());
    }

    #[test]
    fn test_terrain_mut_toggles_transparency() {
        let mut registry = Registry::new();
        let door = registry.add_terrain(Terrain::new("door", "+", false, false));

        registry.terrain_mut(door).unwrap().set_transparent(true);
        assert!(registry.terrain(door).unwrap().is_transparent());
    }
}
