//! Plain data types shared by the ecosim engine and its reporting layer.

pub mod data;

pub use data::agent::{Agent, Identity, Position};
pub use data::environment::{DayReport, FoodSource, PopulationRecord};
pub use data::network::Network;
