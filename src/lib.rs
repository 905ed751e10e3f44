//! # Ecosim
//!
//! Driver for the ecosim engine: loads configuration, advances the world one
//! day at a time, and hands each day's report to the configured sinks.

pub mod app;

pub use ecosim_core::{AppConfig, SimError, World};
pub use ecosim_data::{DayReport, PopulationRecord};
