//! Scenario loading
//!
//! A scenario YAML file describes everything needed to stand up one map:
//! catalog contents (terrain and unit tables), grid dimensions, the fill
//! candidate list, and a seed. The loader builds the registry and generates
//! the map; it is the glue the demo binary and tests use, while an engine
//! embedding this crate would populate its own registry instead.

use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Deserialize;
use tracing::debug;

use crate::catalog::{Registry, UnitProfile};
use crate::map::Map;
use crate::terrain::{Terrain, TerrainId};

fn default_transparent() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize)]
pub struct MapScenario {
    pub name: String,
    pub description: Option<String>,
    pub seed: u64,
    pub height: u32,
    pub width: u32,
    pub terrains: Vec<TerrainDef>,
    #[serde(default)]
    pub units: Vec<UnitDef>,
    /// Candidate terrain ids for the fill. Empty means "every terrain in
    /// the table".
    #[serde(default)]
    pub fill: Vec<TerrainId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TerrainDef {
    pub name: String,
    pub glyph: String,
    #[serde(default = "default_transparent")]
    pub transparent: bool,
    #[serde(default)]
    pub blocked: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UnitDef {
    pub name: String,
    pub glyph: String,
}

pub struct ScenarioLoader {
    base_dir: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self, file: impl AsRef<Path>) -> Result<MapScenario> {
        let path = self.base_dir.join(file);
        let data = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read scenario file {}", path.display()))?;
        let scenario: MapScenario = serde_yaml::from_str(&data)
            .with_context(|| format!("Failed to parse {}", path.display()))?;
        debug!(name = %scenario.name, terrains = scenario.terrains.len(), "loaded scenario");
        Ok(scenario)
    }
}

impl MapScenario {
    /// Populate a registry from the scenario's terrain and unit tables.
    /// Table order determines catalog ids.
    pub fn build_registry(&self) -> Registry {
        let mut registry = Registry::new();
        for def in &self.terrains {
            registry.add_terrain(Terrain::new(
                def.name.clone(),
                def.glyph.clone(),
                def.transparent,
                def.blocked,
            ));
        }
        for def in &self.units {
            registry.add_unit(UnitProfile::new(def.name.clone(), def.glyph.clone()));
        }
        registry
    }

    pub fn fill_candidates(&self) -> Vec<TerrainId> {
        if self.fill.is_empty() {
            (0..self.terrains.len() as TerrainId).collect()
        } else {
            self.fill.clone()
        }
    }

    /// Generate the scenario's map against an already-built registry,
    /// seeding the fill from `seed`.
    pub fn generate_map<'r>(&self, registry: &'r Registry, seed: u64) -> Result<Map<'r>> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let map = Map::generate(
            0,
            self.name.clone(),
            self.height,
            self.width,
            &self.fill_candidates(),
            registry,
            &mut rng,
        )
        .with_context(|| format!("Failed to generate map for scenario '{}'", self.name))?;
        Ok(map)
    }
}
