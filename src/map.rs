//! Map core
//!
//! The map owns a flattened grid of tiles plus identity metadata, and
//! borrows the external game-data registry for id resolution. Queries
//! resolve what a cell looks like and whether it can be entered; mutation
//! is limited to the unit layer and the visibility flag. A one-shot
//! weighted fill assigns terrain at generation time.

use rand::Rng;
use tracing::debug;

use crate::catalog::GameData;
use crate::error::{CatalogKind, MapError};
use crate::grid::Grid;
use crate::terrain::{Terrain, TerrainId};
use crate::tile::{Tile, UnitId};

/// Glyph for an occupied container layer. Container rendering has no real
/// implementation yet; replace this constant when it lands.
pub const CONTAINER_GLYPH: &str = "o";
/// Glyph for an occupied object layer, pending real object rendering.
pub const OBJECT_GLYPH: &str = "*";
/// What a tile outside the explored area looks like.
pub const HIDDEN_GLYPH: &str = " ";

pub struct Map<'r> {
    id: u32,
    name: String,
    tiles: Grid<Tile>,
    registry: &'r dyn GameData,
}

impl<'r> Map<'r> {
    /// Supplied-tiles mode: wrap a pre-built tile grid. No generation runs.
    pub fn from_tiles(
        id: u32,
        name: impl Into<String>,
        tiles: Grid<Tile>,
        registry: &'r dyn GameData,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            tiles,
            registry,
        }
    }

    /// Generated mode: assign every cell a terrain drawn from `candidates`
    /// before the map becomes usable. All occupancy layers start empty and
    /// every tile starts unexplored.
    ///
    /// Fails with `InvalidConstruction` when a dimension is zero or the
    /// candidate list is empty, and with `BadCatalogRef` when a candidate
    /// id has no catalog entry.
    pub fn generate(
        id: u32,
        name: impl Into<String>,
        height: u32,
        width: u32,
        candidates: &[TerrainId],
        registry: &'r dyn GameData,
        rng: &mut impl Rng,
    ) -> Result<Self, MapError> {
        if height == 0 || width == 0 {
            return Err(MapError::InvalidConstruction(format!(
                "grid dimensions must be positive, got {height}x{width}"
            )));
        }
        if candidates.is_empty() {
            return Err(MapError::InvalidConstruction(
                "candidate terrain list is empty".to_string(),
            ));
        }
        let blocked = candidates
            .iter()
            .map(|&terrain_id| {
                registry
                    .terrain(terrain_id)
                    .map(Terrain::is_blocked)
                    .ok_or(MapError::BadCatalogRef {
                        catalog: CatalogKind::Terrain,
                        id: terrain_id,
                    })
            })
            .collect::<Result<Vec<bool>, MapError>>()?;

        debug!(height, width, candidates = candidates.len(), "filling map terrain");
        let tiles = Grid::from_fn(height, width, |_, _| {
            Tile::new(roll_terrain(candidates, &blocked, rng))
        });

        Ok(Self::from_tiles(id, name, tiles, registry))
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn height(&self) -> u32 {
        self.tiles.height()
    }

    pub fn width(&self) -> u32 {
        self.tiles.width()
    }

    /// The backing tile grid, for collaborators that scan cells directly
    /// (field-of-view passes, future pathfinding).
    pub fn tiles(&self) -> &Grid<Tile> {
        &self.tiles
    }

    fn bounds(&self, x: u32, y: u32) -> Result<(), MapError> {
        let (height, width) = self.tiles.dimensions();
        if x >= height || y >= width {
            return Err(MapError::OutOfRange {
                x,
                y,
                height,
                width,
            });
        }
        Ok(())
    }

    pub fn tile(&self, x: u32, y: u32) -> Result<&Tile, MapError> {
        self.bounds(x, y)?;
        Ok(self.tiles.get(x, y))
    }

    pub fn tile_mut(&mut self, x: u32, y: u32) -> Result<&mut Tile, MapError> {
        self.bounds(x, y)?;
        Ok(self.tiles.get_mut(x, y))
    }

    /// Resolve the terrain descriptor for the tile at (x, y).
    pub fn terrain_at(&self, x: u32, y: u32) -> Result<&Terrain, MapError> {
        let tile = self.tile(x, y)?;
        self.resolve_terrain(tile.layers.terrain)
    }

    fn resolve_terrain(&self, id: TerrainId) -> Result<&Terrain, MapError> {
        self.registry.terrain(id).ok_or(MapError::BadCatalogRef {
            catalog: CatalogKind::Terrain,
            id,
        })
    }

    /// Display string for the highest-priority occupant of the cell.
    ///
    /// Hidden tiles render as a blank regardless of contents; otherwise
    /// unit beats container beats object beats terrain.
    pub fn tile_visual(&self, x: u32, y: u32) -> Result<String, MapError> {
        let tile = self.tile(x, y)?;
        if !tile.visible {
            return Ok(HIDDEN_GLYPH.to_string());
        }
        let layers = &tile.layers;
        if tile.has_unit() {
            // Unit layer ids are 1-based against a 0-indexed catalog, while
            // terrain ids index their catalog directly. Inherited from the
            // original data model; likely an upstream inconsistency, kept
            // rather than silently unified.
            let unit =
                self.registry
                    .unit(layers.unit - 1)
                    .ok_or(MapError::BadCatalogRef {
                        catalog: CatalogKind::Unit,
                        id: layers.unit,
                    })?;
            return Ok(unit.glyph.clone());
        }
        if tile.has_container() {
            return Ok(CONTAINER_GLYPH.to_string());
        }
        if tile.has_object() {
            return Ok(OBJECT_GLYPH.to_string());
        }
        Ok(self.resolve_terrain(layers.terrain)?.glyph().to_string())
    }

    /// Whether an entity can move onto (x, y). The single chokepoint for
    /// movement checks: false outside the grid, false when a unit already
    /// occupies the tile, false on blocking terrain. A terrain id that no
    /// longer resolves is treated as never walkable.
    pub fn is_open(&self, x: u32, y: u32) -> bool {
        let Ok(tile) = self.tile(x, y) else {
            return false;
        };
        if tile.has_unit() {
            return false;
        }
        match self.registry.terrain(tile.layers.terrain) {
            Some(terrain) => !terrain.is_blocked(),
            None => false,
        }
    }

    /// Overwrite the unit layer at (x, y). 0 clears it. The id is not
    /// validated against the unit catalog; callers pass valid ids or 0.
    pub fn set_unit(&mut self, x: u32, y: u32, unit: UnitId) -> Result<(), MapError> {
        self.tile_mut(x, y)?.layers.unit = unit;
        Ok(())
    }

    pub fn remove_unit(&mut self, x: u32, y: u32) -> Result<(), MapError> {
        self.set_unit(x, y, 0)
    }

    /// Visibility hook for an external field-of-view pass.
    pub fn set_visible(&mut self, x: u32, y: u32, visible: bool) -> Result<(), MapError> {
        self.tile_mut(x, y)?.visible = visible;
        Ok(())
    }

    /// Every row of `tile_visual` output, newline-terminated.
    pub fn render(&self) -> Result<String, MapError> {
        let (height, width) = self.tiles.dimensions();
        let mut out = String::with_capacity((height * (width + 1)) as usize);
        for x in 0..height {
            for y in 0..width {
                out.push_str(&self.tile_visual(x, y)?);
            }
            out.push('\n');
        }
        Ok(out)
    }
}

/// One weighted draw of the fill heuristic.
///
/// With a single candidate there is no randomness. Otherwise pick uniformly;
/// if the pick is blocking terrain, a second uniform draw in [0, 10) gives a
/// 4-in-10 chance (values 6..=9) to re-draw the index once. The re-drawn
/// candidate is accepted unconditionally, blocking or not — the heuristic
/// biases toward open terrain without forbidding walls.
fn roll_terrain(candidates: &[TerrainId], blocked: &[bool], rng: &mut impl Rng) -> TerrainId {
    if candidates.len() == 1 {
        return candidates[0];
    }
    let mut pick = rng.gen_range(0..candidates.len());
    if blocked[pick] && rng.gen_range(0..10u32) > 5 {
        pick = rng.gen_range(0..candidates.len());
    }
    candidates[pick]
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn test_roll_single_candidate_skips_rng() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let before = rng.clone();

        assert_eq!(roll_terrain(&[3], &[true], &mut rng), 3);
        // no draw happened
        assert_eq!(rng, before);
    }

    #[test]
    fn test_roll_non_blocking_uses_one_draw() {
        let candidates = [0, 1, 2];
        let blocked = [false, false, false];

        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let mut shadow = ChaCha8Rng::seed_from_u64(9);

        for _ in 0..100 {
            let picked = roll_terrain(&candidates, &blocked, &mut rng);
            let expected = candidates[shadow.gen_range(0..candidates.len())];
            assert_eq!(picked, expected);
        }
    }
}
