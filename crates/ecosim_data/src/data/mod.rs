//! Core data structures for the ecosim simulation.

pub mod agent;
pub mod environment;
pub mod network;
