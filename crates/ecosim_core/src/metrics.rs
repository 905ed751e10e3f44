//! Run metrics for the simulation.
//!
//! Provides structured logging and counters for monitoring population
//! dynamics across days.

use ecosim_data::DayReport;
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Counter names used by the engine.
pub const BIRTHS: &str = "births";
pub const DEATHS: &str = "deaths";
pub const FEEDINGS: &str = "feedings";
pub const FOOD_SPAWNS: &str = "food_spawns";

/// Metrics collector for one simulation run.
#[derive(Debug)]
pub struct Metrics {
    day_count: AtomicU64,
    population: AtomicU64,
    food_count: AtomicU64,
    counters: Mutex<HashMap<String, u64>>,
    start_time: Instant,
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

impl Metrics {
    /// Creates a new metrics collector.
    #[must_use]
    pub fn new() -> Self {
        Self {
            day_count: AtomicU64::new(0),
            population: AtomicU64::new(0),
            food_count: AtomicU64::new(0),
            counters: Mutex::new(HashMap::new()),
            start_time: Instant::now(),
        }
    }

    /// Records a completed day with its duration.
    pub fn record_day(&self, duration: Duration, report: &DayReport) {
        self.day_count.store(report.day, Ordering::Relaxed);
        self.population
            .store(report.population as u64, Ordering::Relaxed);
        self.food_count
            .store(report.food_sources as u64, Ordering::Relaxed);
        self.add(BIRTHS, report.births as u64);
        self.add(DEATHS, report.deaths as u64);
        self.add(FEEDINGS, report.feedings as u64);

        tracing::info!(
            day = report.day,
            population = report.population,
            food = report.food_sources,
            births = report.births,
            deaths = report.deaths,
            mean_energy = report.mean_energy,
            mean_drift = report.mean_drift,
            duration_us = duration.as_micros() as u64,
            "Simulation day"
        );
    }

    /// Adds `amount` to a named counter.
    pub fn add(&self, name: &str, amount: u64) {
        let mut counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        *counters.entry(name.to_string()).or_insert(0) += amount;
    }

    /// Increments a named counter.
    pub fn increment_counter(&self, name: &str) {
        self.add(name, 1);
    }

    /// Current value of a named counter; zero if never touched.
    #[must_use]
    pub fn counter(&self, name: &str) -> u64 {
        let counters = self.counters.lock().unwrap_or_else(|e| e.into_inner());
        counters.get(name).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn day_count(&self) -> u64 {
        self.day_count.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn population(&self) -> u64 {
        self.population.load(Ordering::Relaxed)
    }

    #[must_use]
    pub fn food_count(&self) -> u64 {
        self.food_count.load(Ordering::Relaxed)
    }

    /// Gets elapsed time since metrics creation.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }
}

/// Installs a fmt subscriber. `RUST_LOG` takes precedence over `default_level`.
///
/// Calling this more than once is harmless; later calls are ignored.
pub fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing::subscriber::set_global_default(
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .finish(),
    )
    .ok();
}
