//! # Ecosim Core
//!
//! The simulation engine for ecosim - a population of network-driven agents
//! foraging in a bounded arena.
//!
//! This crate contains the simulation logic, including:
//! - Fixed-topology feed-forward networks with mutation
//! - The agent decision cycle (sense, move, pay, feed, reproduce)
//! - Daily population and food bookkeeping
//! - Configuration, errors and run metrics
//!
//! ## Example
//!
//! ```
//! use ecosim_core::brain::NetworkLogic;
//! use ecosim_data::Network;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let network = Network::new_random_with_rng(&[3, 5, 2], &mut rng).unwrap();
//! let outputs = network.forward(&[1.0, 0.2, -0.4]).unwrap();
//! assert_eq!(outputs.len(), 2);
//! ```

/// Agent life cycle: spawning, decisions, feeding and reproduction
pub mod agent;
/// Feed-forward network construction, inference and mutation
pub mod brain;
/// Configuration management for simulation parameters
pub mod config;
/// Engine error types
pub mod error;
/// Food source placement and nearest-food queries
pub mod food;
/// Run metrics and structured logging setup
pub mod metrics;
/// Random number sources
pub mod rng;
/// The world and its daily state transition
pub mod world;

pub use agent::AgentLogic;
pub use brain::NetworkLogic;
pub use config::AppConfig;
pub use error::SimError;
pub use food::FoodField;
pub use metrics::{init_logging, Metrics};
pub use rng::{RandomSource, SimRng};
pub use world::World;
