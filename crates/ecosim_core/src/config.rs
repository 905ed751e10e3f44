//! Configuration management for simulation parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! the `config.toml` file. Every section falls back to its `Default` impl, so a
//! partial file only overrides what it names.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `config.toml` file (overrides defaults)
//! 3. Command-line flags of the `ecosim` binary (override both)
//!
//! ## Example `config.toml`
//!
//! ```toml
//! [world]
//! initial_population = 50
//! initial_food = 20
//! seed = 42
//!
//! [metabolism]
//! reproduction_threshold = 150.0
//!
//! [evolution]
//! mutation_rate = 0.1
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of sensory inputs: energy, food dx, food dy.
pub const NETWORK_INPUTS: usize = 3;
/// Number of motor outputs: move x, move y.
pub const NETWORK_OUTPUTS: usize = 2;

/// Arena and population parameters.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct WorldConfig {
    pub width: f64,
    pub height: f64,
    pub initial_population: usize,
    pub initial_food: usize,
    /// Probability that one new food source appears at the end of a day.
    pub food_spawn_chance: f64,
    pub seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 100.0,
            height: 100.0,
            initial_population: 50,
            initial_food: 20,
            food_spawn_chance: 0.1,
            seed: None,
        }
    }
}

/// Shape of the region around a food source in which an agent feeds.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DetectionZone {
    /// Each offset component independently within the radius.
    #[default]
    Square,
    /// Euclidean distance within the radius.
    Euclidean,
}

impl DetectionZone {
    #[must_use]
    pub fn contains(self, dx: f64, dy: f64, radius: f64) -> bool {
        match self {
            Self::Square => dx.abs() < radius && dy.abs() < radius,
            Self::Euclidean => dx.hypot(dy) < radius,
        }
    }
}

/// Energy costs, rewards and life-cycle thresholds.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct MetabolismConfig {
    pub initial_energy: f64,
    /// Flat cost paid every decision.
    pub upkeep_cost: f64,
    /// Network outputs are multiplied by this to get a displacement.
    pub move_scale: f64,
    /// Intended displacement `|dx| + |dy|` is divided by this to get its cost.
    pub move_cost_divisor: f64,
    pub energy_normalization: f64,
    pub offset_normalization: f64,
    pub food_energy: f64,
    pub food_radius: f64,
    pub detection_zone: DetectionZone,
    pub reproduction_threshold: f64,
    pub reproduction_cost: f64,
    pub offspring_energy: f64,
}

impl Default for MetabolismConfig {
    fn default() -> Self {
        Self {
            initial_energy: 100.0,
            upkeep_cost: 1.0,
            move_scale: 5.0,
            move_cost_divisor: 10.0,
            energy_normalization: 100.0,
            offset_normalization: 100.0,
            food_energy: 50.0,
            food_radius: 1.0,
            detection_zone: DetectionZone::Square,
            reproduction_threshold: 150.0,
            reproduction_cost: 50.0,
            offspring_energy: 50.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Per-parameter probability of a perturbation when an offspring is born.
    pub mutation_rate: f64,
    /// Perturbations are drawn from `[-mutation_amount, mutation_amount)`.
    pub mutation_amount: f64,
    /// Fresh parameters are drawn from `[-weight_range, weight_range)`.
    pub weight_range: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.1,
            mutation_amount: 0.1,
            weight_range: 1.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BrainConfig {
    pub hidden_layers: Vec<usize>,
}

impl Default for BrainConfig {
    fn default() -> Self {
        Self {
            hidden_layers: vec![5],
        }
    }
}

impl BrainConfig {
    /// Full layer sizes, sensory inputs first and motor outputs last.
    #[must_use]
    pub fn topology(&self) -> Vec<usize> {
        let mut sizes = Vec::with_capacity(self.hidden_layers.len() + 2);
        sizes.push(NETWORK_INPUTS);
        sizes.extend_from_slice(&self.hidden_layers);
        sizes.push(NETWORK_OUTPUTS);
        sizes
    }
}

/// Whether `[-half_width, half_width)` has a representable width.
fn finite_span(half_width: f64) -> bool {
    (2.0 * half_width).is_finite()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub world: WorldConfig,
    pub metabolism: MetabolismConfig,
    pub evolution: EvolutionConfig,
    pub brain: BrainConfig,
}

impl AppConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        // World validation
        anyhow::ensure!(
            self.world.width > 0.0 && self.world.width.is_finite(),
            "World width must be positive"
        );
        anyhow::ensure!(
            self.world.height > 0.0 && self.world.height.is_finite(),
            "World height must be positive"
        );
        anyhow::ensure!(
            self.world.initial_population <= 100_000,
            "Initial population too large (max 100000)"
        );
        anyhow::ensure!(
            self.world.initial_food <= 100_000,
            "Initial food too large (max 100000)"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.world.food_spawn_chance),
            "Food spawn chance must be in [0.0, 1.0]"
        );

        // Metabolism validation
        anyhow::ensure!(
            self.metabolism.initial_energy > 0.0,
            "Initial energy must be positive"
        );
        anyhow::ensure!(
            self.metabolism.upkeep_cost >= 0.0,
            "Upkeep cost must be non-negative"
        );
        anyhow::ensure!(
            self.metabolism.move_scale >= 0.0,
            "Move scale must be non-negative"
        );
        anyhow::ensure!(
            self.metabolism.move_cost_divisor > 0.0,
            "Move cost divisor must be positive"
        );
        anyhow::ensure!(
            self.metabolism.energy_normalization > 0.0,
            "Energy normalization must be positive"
        );
        anyhow::ensure!(
            self.metabolism.offset_normalization > 0.0,
            "Offset normalization must be positive"
        );
        anyhow::ensure!(
            self.metabolism.food_energy >= 0.0,
            "Food energy must be non-negative"
        );
        anyhow::ensure!(
            self.metabolism.food_radius >= 0.0,
            "Food radius must be non-negative"
        );
        anyhow::ensure!(
            self.metabolism.reproduction_cost >= 0.0,
            "Reproduction cost must be non-negative"
        );
        anyhow::ensure!(
            self.metabolism.offspring_energy > 0.0,
            "Offspring energy must be positive"
        );

        // Evolution validation
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.evolution.mutation_rate),
            "Mutation rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            self.evolution.mutation_amount >= 0.0 && finite_span(self.evolution.mutation_amount),
            "Mutation amount must be finite and non-negative"
        );
        anyhow::ensure!(
            self.evolution.weight_range > 0.0 && finite_span(self.evolution.weight_range),
            "Weight range must be finite and positive"
        );

        // Brain validation
        anyhow::ensure!(
            self.brain.hidden_layers.iter().all(|&n| n > 0),
            "Hidden layers must not be empty"
        );

        Ok(())
    }

    /// Parses and validates a TOML document.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path`, falling back to defaults when the file does not exist.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
            .map_err(|e| e.context(format!("invalid config {}", path.display())))
    }

    /// Hash of everything that shapes population dynamics.
    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.metabolism).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hasher.update(format!("{:?}", self.brain).as_bytes());
        hex::encode(hasher.finalize())
    }
}
