use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use warren::{scenario::ScenarioLoader, TerrainLookup};

#[derive(Debug, Parser)]
#[command(author, version, about = "Generate and render a map scenario")]
struct Cli {
    /// Path to the scenario YAML file
    #[arg(long, default_value = "scenarios/cavern.yaml")]
    scenario: PathBuf,

    /// Override the scenario's random seed
    #[arg(long)]
    seed: Option<u64>,

    /// Mark every tile visible before rendering (generated tiles start
    /// unexplored and would otherwise print blank)
    #[arg(long)]
    reveal: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let loader = ScenarioLoader::new(".");
    let scenario = loader.load(&cli.scenario)?;
    let registry = scenario.build_registry();
    let seed = cli.seed.unwrap_or(scenario.seed);
    let mut map = scenario.generate_map(&registry, seed)?;

    if cli.reveal {
        for x in 0..map.height() {
            for y in 0..map.width() {
                map.set_visible(x, y, true)?;
            }
        }
    }
    print!("{}", map.render()?);

    let mut histogram: BTreeMap<u32, usize> = BTreeMap::new();
    for tile in map.tiles().iter() {
        *histogram.entry(tile.layers.terrain).or_default() += 1;
    }
    println!(
        "Scenario '{}': {}x{} map, seed {}",
        scenario.name,
        map.height(),
        map.width(),
        seed
    );
    for (terrain_id, count) in histogram {
        let name = registry
            .terrain(terrain_id)
            .map(|t| t.name().to_string())
            .unwrap_or_else(|| format!("terrain {terrain_id}"));
        println!("  {name}: {count}");
    }
    Ok(())
}
