use super::agent::Position;
use serde::{Deserialize, Serialize};

/// A reusable food location. Consumption never removes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FoodSource {
    pub position: Position,
}

impl FoodSource {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            position: Position { x, y },
        }
    }
}

/// Summary of one completed day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct DayReport {
    pub day: u64,
    pub population: usize,
    pub food_sources: usize,
    pub births: usize,
    pub deaths: usize,
    /// Agents that ended their decision cycle next to food.
    pub feedings: usize,
    pub mean_energy: f64,
    pub max_generation: u32,
    /// Mean network distance between each newborn and its parent; zero without births.
    #[serde(default)]
    pub mean_drift: f64,
}

impl DayReport {
    #[must_use]
    pub fn record(&self) -> PopulationRecord {
        PopulationRecord {
            day: self.day,
            population: self.population,
        }
    }
}

/// One row of the `Day,Population` series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRecord {
    #[serde(rename = "Day")]
    pub day: u64,
    #[serde(rename = "Population")]
    pub population: usize,
}
