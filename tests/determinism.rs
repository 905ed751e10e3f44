mod common;

use common::WorldBuilder;
use ecosim_core::world::World;

fn seeded(seed: u64) -> World {
    WorldBuilder::new()
        .with_seed(seed)
        .with_config(|c| {
            c.world.initial_population = 50;
            c.world.initial_food = 20;
        })
        .build()
}

#[test]
fn test_determinism_consistency() {
    let mut world1 = seeded(12345);
    let mut world2 = seeded(12345);

    for _ in 0..50 {
        let r1 = world1.advance_day().unwrap();
        let r2 = world2.advance_day().unwrap();
        assert_eq!(r1, r2, "Day reports should match");
    }

    assert_eq!(world1.population(), world2.population());
    for (a, b) in world1.agents().iter().zip(world2.agents()) {
        assert_eq!(a.identity, b.identity);
        assert_eq!(a.position, b.position);
        assert_eq!(a.energy, b.energy);
        assert_eq!(a.network, b.network);
    }
    assert_eq!(world1.food().len(), world2.food().len());
    for (f1, f2) in world1.food().iter().zip(world2.food().iter()) {
        assert_eq!(f1, f2);
    }
}

#[test]
fn test_different_seeds_diverge() {
    let w1 = seeded(1);
    let w2 = seeded(2);
    let same_positions = w1
        .agents()
        .iter()
        .zip(w2.agents())
        .all(|(a, b)| a.position == b.position);
    assert!(!same_positions);
}
