//! Agent life cycle: spawning, the daily decision cycle, and reproduction.

use crate::brain::{create_network_with_rng, NetworkLogic};
use crate::config::{AppConfig, MetabolismConfig, NETWORK_OUTPUTS};
use crate::error::{Result, SimError};
use crate::food::FoodField;
use crate::rng::RandomSource;
pub use ecosim_data::{Agent, Identity, Position};
use rand::Rng;
use uuid::Uuid;

pub trait AgentLogic: Sized {
    /// Fresh founder at a random arena position.
    fn spawn_with_rng<R: Rng>(config: &AppConfig, rng: &mut R) -> Result<Self>;

    /// Senses the nearest food, moves by the network's output, and pays for it.
    fn decide(&mut self, food: &FoodField, config: &AppConfig) -> Result<()>;

    /// Feeds if a food source lies inside the detection zone. Returns whether it fed.
    fn settle(&mut self, food: &FoodField, metabolism: &MetabolismConfig) -> Result<bool>;

    /// Splits off a mutated offspring at the same position.
    ///
    /// Performs no threshold check; callers gate on `can_reproduce`.
    fn reproduce_with_rng<R: Rng>(&mut self, config: &AppConfig, rng: &mut R) -> Self;

    fn can_reproduce(&self, threshold: f64) -> bool;
    fn is_depleted(&self) -> bool;
}

fn new_identity<R: Rng>(parent_id: Option<Uuid>, rng: &mut R) -> Identity {
    Identity {
        id: Uuid::from_u128(rng.gen::<u128>()),
        parent_id,
    }
}

/// Network inputs: normalized energy and normalized offset to the nearest food.
#[must_use]
pub fn sense(energy: f64, offset: (f64, f64), metabolism: &MetabolismConfig) -> [f64; 3] {
    [
        energy / metabolism.energy_normalization,
        offset.0 / metabolism.offset_normalization,
        offset.1 / metabolism.offset_normalization,
    ]
}

/// Energy charged for an intended displacement, regardless of clamping.
#[must_use]
pub fn movement_cost(move_x: f64, move_y: f64, metabolism: &MetabolismConfig) -> f64 {
    metabolism.upkeep_cost + (move_x.abs() + move_y.abs()) / metabolism.move_cost_divisor
}

impl AgentLogic for Agent {
    fn spawn_with_rng<R: Rng>(config: &AppConfig, rng: &mut R) -> Result<Self> {
        let network = create_network_with_rng(
            &config.brain.topology(),
            config.evolution.weight_range,
            rng,
        )?;
        let identity = new_identity(None, rng);
        let position = Position::new(
            rng.uniform(0.0, config.world.width),
            rng.uniform(0.0, config.world.height),
        );
        Ok(Self {
            identity,
            position,
            energy: config.metabolism.initial_energy,
            generation: 0,
            network,
        })
    }

    fn decide(&mut self, food: &FoodField, config: &AppConfig) -> Result<()> {
        let metabolism = &config.metabolism;
        let offset = food.closest_offset(self.position)?;
        let output = self
            .network
            .forward(&sense(self.energy, offset, metabolism))?;

        let [out_x, out_y] = output[..] else {
            return Err(SimError::OutputLength {
                expected: NETWORK_OUTPUTS,
                actual: output.len(),
            });
        };
        let move_x = out_x * metabolism.move_scale;
        let move_y = out_y * metabolism.move_scale;

        self.position.x = (self.position.x + move_x).clamp(0.0, config.world.width);
        self.position.y = (self.position.y + move_y).clamp(0.0, config.world.height);

        self.energy -= movement_cost(move_x, move_y, metabolism);
        Ok(())
    }

    fn settle(&mut self, food: &FoodField, metabolism: &MetabolismConfig) -> Result<bool> {
        let (dx, dy) = food.closest_offset(self.position)?;
        let fed = metabolism
            .detection_zone
            .contains(dx, dy, metabolism.food_radius);
        if fed {
            self.energy += metabolism.food_energy;
        }
        Ok(fed)
    }

    fn reproduce_with_rng<R: Rng>(&mut self, config: &AppConfig, rng: &mut R) -> Self {
        let mut network = self.network.clone();
        network.mutate_with_rng(
            config.evolution.mutation_rate,
            config.evolution.mutation_amount,
            rng,
        );
        self.energy -= config.metabolism.reproduction_cost;

        Self {
            identity: new_identity(Some(self.identity.id), rng),
            position: self.position,
            energy: config.metabolism.offspring_energy,
            generation: self.generation + 1,
            network,
        }
    }

    fn can_reproduce(&self, threshold: f64) -> bool {
        self.energy >= threshold
    }

    fn is_depleted(&self) -> bool {
        self.energy <= 0.0
    }
}
