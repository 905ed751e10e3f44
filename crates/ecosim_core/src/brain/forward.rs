use crate::error::{Result, SimError};
use ecosim_data::Network;

pub fn forward(network: &Network, input: &[f64]) -> Result<Vec<f64>> {
    let expected = network.input_size();
    if input.len() != expected {
        return Err(SimError::InputLength {
            expected,
            actual: input.len(),
        });
    }

    let mut activations = input.to_vec();
    for (layer, biases) in network.weights.iter().zip(&network.biases) {
        activations = layer
            .iter()
            .zip(biases)
            .map(|(neuron, bias)| {
                let sum: f64 = neuron
                    .iter()
                    .zip(&activations)
                    .map(|(w, a)| w * a)
                    .sum();
                (bias + sum).tanh()
            })
            .collect();
    }

    Ok(activations)
}
