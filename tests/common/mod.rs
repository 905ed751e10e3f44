pub mod macros;

use ecosim_core::brain::NetworkLogic;
use ecosim_core::config::AppConfig;
use ecosim_core::world::World;
use ecosim_data::{Agent, FoodSource, Identity, Network, Position};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

#[allow(dead_code)]
pub struct WorldBuilder {
    config: AppConfig,
    agents: Vec<Agent>,
    food: Vec<FoodSource>,
}

#[allow(dead_code)]
impl WorldBuilder {
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.world.initial_population = 0;
        config.world.initial_food = 0;
        config.world.seed = Some(0);
        Self {
            config,
            agents: Vec::new(),
            food: Vec::new(),
        }
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.world.seed = Some(seed);
        self
    }

    pub fn with_config<F>(mut self, modifier: F) -> Self
    where
        F: FnOnce(&mut AppConfig),
    {
        modifier(&mut self.config);
        self
    }

    pub fn with_agent(mut self, agent: Agent) -> Self {
        self.agents.push(agent);
        self
    }

    pub fn with_food(mut self, x: f64, y: f64) -> Self {
        self.food.push(FoodSource::new(x, y));
        self
    }

    pub fn build(self) -> World {
        let mut world = World::new(self.config).expect("Failed to create world in test builder");
        for source in self.food {
            world.add_food(source);
        }
        for agent in self.agents {
            world.insert_agent(agent);
        }
        world
    }
}

#[allow(dead_code)]
pub struct AgentBuilder {
    id: u128,
    x: f64,
    y: f64,
    energy: f64,
    network: Option<Network>,
    outputs: (f64, f64),
}

#[allow(dead_code)]
impl AgentBuilder {
    pub fn new() -> Self {
        Self {
            id: 1,
            x: 50.0,
            y: 50.0,
            energy: 100.0,
            network: None,
            outputs: (0.0, 0.0),
        }
    }

    pub fn id(mut self, id: u128) -> Self {
        self.id = id;
        self
    }

    pub fn at(mut self, x: f64, y: f64) -> Self {
        self.x = x;
        self.y = y;
        self
    }

    pub fn energy(mut self, amount: f64) -> Self {
        self.energy = amount;
        self
    }

    /// Network that ignores its inputs and always emits `(x, y)`.
    pub fn constant_outputs(mut self, x: f64, y: f64) -> Self {
        self.outputs = (x, y);
        self.network = None;
        self
    }

    /// Random default-topology network drawn from `seed`.
    pub fn random_network(mut self, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.network = Some(
            Network::new_random_with_rng(&[3, 5, 2], &mut rng).expect("valid topology"),
        );
        self
    }

    pub fn build(self) -> Agent {
        let network = self.network.unwrap_or_else(|| Network {
            layer_sizes: vec![3, 2],
            weights: vec![vec![vec![0.0; 3], vec![0.0; 3]]],
            biases: vec![vec![self.outputs.0.atanh(), self.outputs.1.atanh()]],
        });
        Agent {
            identity: Identity {
                id: Uuid::from_u128(self.id),
                parent_id: None,
            },
            position: Position::new(self.x, self.y),
            energy: self.energy,
            generation: 0,
            network,
        }
    }
}
