pub mod catalog;
pub mod error;
pub mod grid;
pub mod map;
pub mod scenario;
pub mod terrain;
pub mod tile;

pub use catalog::{GameData, Registry, TerrainLookup, UnitLookup, UnitProfile};
pub use error::{CatalogKind, MapError};
pub use grid::Grid;
pub use map::Map;
pub use terrain::{Terrain, TerrainId};
pub use tile::{Layers, Tile, UnitId};
