//! Error types for the simulation engine.
//!
//! Every variant is a violated precondition. Normal simulation steps never
//! produce one.

use thiserror::Error;

/// Main error type for ecosim_core operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// A network needs at least an input and an output layer.
    #[error("Invalid topology: expected at least 2 layers, got {layers}")]
    InvalidTopology { layers: usize },

    /// Every layer must hold at least one neuron.
    #[error("Invalid topology: layer {index} has no neurons")]
    EmptyLayer { index: usize },

    /// `forward` called with the wrong number of inputs.
    #[error("Input length mismatch: expected {expected}, got {actual}")]
    InputLength { expected: usize, actual: usize },

    /// A network produced a different number of outputs than the caller reads.
    #[error("Output length mismatch: expected {expected}, got {actual}")]
    OutputLength { expected: usize, actual: usize },

    /// Stored weights or biases disagree with the declared layer sizes.
    #[error("Malformed network: parameters of layer {index} do not match its size")]
    MalformedLayer { index: usize },

    /// Closest-food query against an empty food field.
    #[error("No food sources in the world")]
    NoFoodSources,
}

/// Result type alias for ecosim_core operations.
pub type Result<T> = std::result::Result<T, SimError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SimError::InputLength {
            expected: 3,
            actual: 2,
        };
        assert_eq!(err.to_string(), "Input length mismatch: expected 3, got 2");
    }

    #[test]
    fn test_into_anyhow() {
        let err: anyhow::Error = SimError::NoFoodSources.into();
        assert!(err.to_string().contains("No food sources"));
        assert_eq!(
            err.downcast_ref::<SimError>(),
            Some(&SimError::NoFoodSources)
        );
    }
}
