use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use warren::{CatalogKind, Map, MapError, Registry, Terrain};

const FLOOR: u32 = 0;
const WALL: u32 = 1;
const WATER: u32 = 2;
const MOSS: u32 = 3;

fn registry() -> Registry {
    let mut registry = Registry::new();
    registry.add_terrain(Terrain::new("floor", ".", true, false));
    registry.add_terrain(Terrain::new("wall", "#", false, true));
    registry.add_terrain(Terrain::new("water", "~", true, false));
    registry.add_terrain(Terrain::new("moss", "\"", true, false));
    registry
}

fn generate<'a>(
    registry: &'a Registry,
    height: u32,
    width: u32,
    candidates: &[u32],
    seed: u64,
) -> Result<Map<'a>, MapError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Map::generate(0, "generated", height, width, candidates, registry, &mut rng)
}

#[test]
fn zero_dimensions_are_rejected() {
    let registry = registry();

    assert!(matches!(
        generate(&registry, 0, 10, &[FLOOR], 1),
        Err(MapError::InvalidConstruction(_))
    ));
    assert!(matches!(
        generate(&registry, 10, 0, &[FLOOR], 1),
        Err(MapError::InvalidConstruction(_))
    ));
}

#[test]
fn empty_candidate_list_is_rejected() {
    let registry = registry();

    assert!(matches!(
        generate(&registry, 4, 4, &[], 1),
        Err(MapError::InvalidConstruction(_))
    ));
}

#[test]
fn unknown_candidate_id_is_rejected() {
    let registry = registry();

    assert!(matches!(
        generate(&registry, 4, 4, &[99], 1),
        Err(MapError::BadCatalogRef {
            catalog: CatalogKind::Terrain,
            id: 99
        })
    ));
}

#[test]
fn single_candidate_fills_every_cell() {
    let registry = registry();
    let map = generate(&registry, 6, 7, &[MOSS], 1).unwrap();

    assert_eq!(map.tiles().cell_count(), 42);
    for tile in map.tiles().iter() {
        assert_eq!(tile.layers.terrain, MOSS);
        assert_eq!(tile.layers.unit, 0);
        assert_eq!(tile.layers.container, 0);
        assert_eq!(tile.layers.game_obj, 0);
        assert!(!tile.visible);
    }
}

#[test]
fn same_seed_reproduces_the_same_map() {
    let registry = registry();
    let a = generate(&registry, 12, 9, &[FLOOR, WALL, WATER], 42).unwrap();
    let b = generate(&registry, 12, 9, &[FLOOR, WALL, WATER], 42).unwrap();

    assert_eq!(a.tiles(), b.tiles());
}

#[test]
fn different_seeds_diverge() {
    let registry = registry();
    let a = generate(&registry, 20, 20, &[FLOOR, WALL], 1).unwrap();
    let b = generate(&registry, 20, 20, &[FLOOR, WALL], 2).unwrap();

    assert_ne!(a.tiles(), b.tiles());
}

#[test]
fn non_blocking_candidates_never_reroll() {
    // With no blocking candidate the fill reduces to one uniform draw per
    // cell; replaying the same seed against a plain single-draw loop must
    // reproduce the map exactly.
    let registry = registry();
    let candidates = [FLOOR, WATER, MOSS];
    let map = generate(&registry, 10, 10, &candidates, 5).unwrap();

    let mut shadow = ChaCha8Rng::seed_from_u64(5);
    for tile in map.tiles().iter() {
        let expected = candidates[shadow.gen_range(0..candidates.len())];
        assert_eq!(tile.layers.terrain, expected);
    }
}

#[test]
fn blocking_bias_matches_the_two_stage_draw() {
    // One blocking and one non-blocking candidate: the initial pick is
    // 50/50, but a blocking pick gets a 4-in-10 chance to re-draw, so the
    // expected blocking share is 0.5 * (0.6 + 0.4 * 0.5) = 0.4 - clearly
    // distinguishable from a naive single draw at 0.5 over 10,000 cells.
    let registry = registry();
    let map = generate(&registry, 100, 100, &[FLOOR, WALL], 123).unwrap();

    let walls = map
        .tiles()
        .iter()
        .filter(|tile| tile.layers.terrain == WALL)
        .count();
    let fraction = walls as f64 / 10_000.0;

    assert!(
        (0.36..=0.44).contains(&fraction),
        "wall fraction {fraction} outside the two-stage expectation of ~0.4"
    );
}
