/// Asserts that the world holds exactly the given number of agents.
#[macro_export]
macro_rules! assert_population {
    ($world:expr, $count:expr) => {
        assert_eq!($world.population(), $count, "Population count mismatch");
    };
}

/// Asserts that every agent in the world has positive energy.
#[macro_export]
macro_rules! assert_all_alive {
    ($world:expr) => {
        for agent in $world.agents() {
            assert!(
                agent.energy > 0.0,
                "Agent {} survived culling with energy {}",
                agent.identity.id,
                agent.energy
            );
        }
    };
}

/// Asserts that every agent lies inside the arena.
#[macro_export]
macro_rules! assert_in_arena {
    ($world:expr) => {
        let (w, h) = ($world.config().world.width, $world.config().world.height);
        for agent in $world.agents() {
            assert!(
                (0.0..=w).contains(&agent.position.x) && (0.0..=h).contains(&agent.position.y),
                "Agent {} escaped the arena at ({}, {})",
                agent.identity.id,
                agent.position.x,
                agent.position.y
            );
        }
    };
}
