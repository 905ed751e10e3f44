use serde::{Deserialize, Serialize};

/// Parameters of a fixed-topology feed-forward network.
///
/// `weights[l][n][k]` is the weight from activation `k` of the previous layer
/// (or input `k` when `l == 0`) into neuron `n` of layer `l + 1`.
/// `biases[l][n]` is the bias of that same neuron.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Network {
    /// Layer sizes, input layer first.
    pub layer_sizes: Vec<usize>,
    /// One matrix per non-input layer.
    pub weights: Vec<Vec<Vec<f64>>>,
    /// One vector per non-input layer.
    pub biases: Vec<Vec<f64>>,
}

impl Network {
    /// Number of values `forward` expects.
    #[must_use]
    pub fn input_size(&self) -> usize {
        self.layer_sizes.first().copied().unwrap_or(0)
    }

    /// Number of values `forward` produces.
    #[must_use]
    pub fn output_size(&self) -> usize {
        self.layer_sizes.last().copied().unwrap_or(0)
    }

    /// Total number of weights and biases.
    #[must_use]
    pub fn parameter_count(&self) -> usize {
        let weights: usize = self
            .weights
            .iter()
            .flat_map(|layer| layer.iter().map(Vec::len))
            .sum();
        let biases: usize = self.biases.iter().map(Vec::len).sum();
        weights + biases
    }

    /// Iterates every weight followed by every bias.
    pub fn parameters(&self) -> impl Iterator<Item = f64> + '_ {
        self.weights
            .iter()
            .flat_map(|layer| layer.iter().flat_map(|neuron| neuron.iter().copied()))
            .chain(self.biases.iter().flat_map(|layer| layer.iter().copied()))
    }
}
