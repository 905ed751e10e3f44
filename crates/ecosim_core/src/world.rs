//! The arena: population, food, and the daily state transition.

use crate::agent::AgentLogic;
use crate::brain::NetworkLogic;
use crate::config::{AppConfig, NETWORK_INPUTS, NETWORK_OUTPUTS};
use crate::error::{Result, SimError};
use crate::food::FoodField;
use crate::metrics::{Metrics, FOOD_SPAWNS};
use crate::rng::{seeded_rng, RandomSource, SimRng};
use ecosim_data::{Agent, DayReport, FoodSource};
use std::time::Instant;

pub struct World {
    agents: Vec<Agent>,
    food: FoodField,
    day: u64,
    config: AppConfig,
    rng: SimRng,
    metrics: Metrics,
}

impl World {
    /// Builds a world populated according to `config.world`.
    pub fn new(config: AppConfig) -> anyhow::Result<Self> {
        let rng = seeded_rng(config.world.seed);
        Self::with_rng(config, rng)
    }

    /// Default configuration with the given starting counts.
    pub fn with_counts(initial_population: usize, initial_food: usize) -> anyhow::Result<Self> {
        let mut config = AppConfig::default();
        config.world.initial_population = initial_population;
        config.world.initial_food = initial_food;
        Self::new(config)
    }

    /// Builds a world drawing all randomness from `rng`.
    pub fn with_rng(config: AppConfig, mut rng: SimRng) -> anyhow::Result<Self> {
        config.validate()?;

        let mut agents = Vec::with_capacity(config.world.initial_population);
        for _ in 0..config.world.initial_population {
            agents.push(Agent::spawn_with_rng(&config, &mut rng)?);
        }
        let food = FoodField::scatter_with_rng(
            config.world.initial_food,
            config.world.width,
            config.world.height,
            &mut rng,
        );

        tracing::info!(
            population = agents.len(),
            food = food.len(),
            seed = ?config.world.seed,
            fingerprint = %config.fingerprint(),
            "World created"
        );

        Ok(Self {
            agents,
            food,
            day: 0,
            config,
            rng,
            metrics: Metrics::new(),
        })
    }

    /// Advances the simulation by one day.
    ///
    /// Phases run in order: every agent decides and settles, depleted agents
    /// are culled, agents at or above the reproduction threshold split once,
    /// and a food source may spawn. Fails without changing anything if living
    /// agents have no food to sense or any agent's network is not a
    /// well-formed 3-input, 2-output network.
    pub fn advance_day(&mut self) -> Result<DayReport> {
        if !self.agents.is_empty() && self.food.is_empty() {
            tracing::warn!(
                day = self.day,
                population = self.agents.len(),
                "Cannot advance: no food sources"
            );
            return Err(SimError::NoFoodSources);
        }
        for agent in &self.agents {
            if let Err(e) = agent.network.check_io(NETWORK_INPUTS, NETWORK_OUTPUTS) {
                tracing::warn!(agent = %agent.identity.id, error = %e, "Cannot advance: malformed network");
                return Err(e);
            }
        }

        let start = Instant::now();

        let feedings = self.decision_phase()?;
        let deaths = self.culling_phase();
        let (births, mean_drift) = self.reproduction_phase();
        self.food_spawn_phase();
        self.day += 1;

        let report = DayReport {
            day: self.day,
            population: self.agents.len(),
            food_sources: self.food.len(),
            births,
            deaths,
            feedings,
            mean_energy: self.mean_energy(),
            max_generation: self.max_generation(),
            mean_drift,
        };
        self.metrics.record_day(start.elapsed(), &report);

        if self.agents.is_empty() && deaths > 0 {
            tracing::warn!(day = self.day, "Population extinct");
        }

        Ok(report)
    }

    /// Runs `decide` then `settle` for every agent alive at the start of the day.
    /// Returns how many agents fed.
    fn decision_phase(&mut self) -> Result<usize> {
        let food = &self.food;
        let config = &self.config;
        let cycle = |agent: &mut Agent| -> Result<bool> {
            agent.decide(food, config)?;
            agent.settle(food, &config.metabolism)
        };

        #[cfg(feature = "parallel")]
        let fed: Vec<bool> = {
            use rayon::prelude::*;
            self.agents.par_iter_mut().map(cycle).collect::<Result<_>>()?
        };
        #[cfg(not(feature = "parallel"))]
        let fed: Vec<bool> = self.agents.iter_mut().map(cycle).collect::<Result<_>>()?;

        Ok(fed.into_iter().filter(|&f| f).count())
    }

    /// Removes depleted agents, keeping survivor order. Returns the death count.
    fn culling_phase(&mut self) -> usize {
        let before = self.agents.len();
        self.agents.retain(|agent| !agent.is_depleted());
        let deaths = before - self.agents.len();
        if deaths > 0 {
            tracing::debug!(day = self.day, deaths, "Culled depleted agents");
        }
        deaths
    }

    /// Single left-to-right pass; each offspring lands directly before its
    /// parent and is not itself examined. Returns the birth count and the mean
    /// parent-child network distance.
    fn reproduction_phase(&mut self) -> (usize, f64) {
        let threshold = self.config.metabolism.reproduction_threshold;
        let survivors = std::mem::take(&mut self.agents);
        let mut next = Vec::with_capacity(survivors.len() * 2);
        let mut births = 0;
        let mut drift = 0.0;

        for mut agent in survivors {
            if agent.can_reproduce(threshold) {
                let child = agent.reproduce_with_rng(&self.config, &mut self.rng);
                tracing::trace!(
                    parent = %agent.identity.id,
                    child = %child.identity.id,
                    generation = child.generation,
                    "Birth"
                );
                drift += child.network.distance(&agent.network);
                next.push(child);
                births += 1;
            }
            next.push(agent);
        }

        self.agents = next;
        if births == 0 {
            return (0, 0.0);
        }
        let mean_drift = drift / births as f64;
        tracing::debug!(day = self.day, births, mean_drift, "Agents reproduced");
        (births, mean_drift)
    }

    /// One draw decides whether a single new food source appears.
    fn food_spawn_phase(&mut self) {
        if self.rng.chance(self.config.world.food_spawn_chance) {
            let (width, height) = (self.config.world.width, self.config.world.height);
            let source = self.food.spawn_with_rng(width, height, &mut self.rng);
            self.metrics.increment_counter(FOOD_SPAWNS);
            tracing::debug!(
                x = source.position.x,
                y = source.position.y,
                "Food source spawned"
            );
        }
    }

    /// Live agent count.
    #[must_use]
    pub fn population(&self) -> usize {
        self.agents.len()
    }

    /// Number of completed days.
    #[must_use]
    pub fn current_day(&self) -> u64 {
        self.day
    }

    #[must_use]
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agents_mut(&mut self) -> &mut [Agent] {
        &mut self.agents
    }

    #[must_use]
    pub fn food(&self) -> &FoodField {
        &self.food
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn metrics(&self) -> &Metrics {
        &self.metrics
    }

    /// Appends an agent to the end of the population.
    pub fn insert_agent(&mut self, agent: Agent) {
        self.agents.push(agent);
    }

    pub fn add_food(&mut self, source: FoodSource) {
        self.food.push(source);
    }

    /// Zero for an empty population.
    #[must_use]
    pub fn mean_energy(&self) -> f64 {
        if self.agents.is_empty() {
            return 0.0;
        }
        self.agents.iter().map(|a| a.energy).sum::<f64>() / self.agents.len() as f64
    }

    #[must_use]
    pub fn max_generation(&self) -> u32 {
        self.agents.iter().map(|a| a.generation).max().unwrap_or(0)
    }
}
