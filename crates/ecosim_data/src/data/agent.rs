use super::network::Network;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Arena position of an agent or food source.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

impl Position {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Lineage identity of an agent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: Uuid,
    pub parent_id: Option<Uuid>,
}

/// A foraging agent driven by its own network.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Agent {
    pub identity: Identity,
    pub position: Position,
    /// Unbounded above; the agent is culled once this reaches zero or below.
    pub energy: f64,
    /// Founders are generation 0.
    pub generation: u32,
    pub network: Network,
}
