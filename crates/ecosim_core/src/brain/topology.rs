use crate::error::{Result, SimError};
use crate::rng::RandomSource;
use ecosim_data::Network;
use rand::Rng;

/// Checks that `layer_sizes` describes a usable feed-forward network.
pub fn validate_topology(layer_sizes: &[usize]) -> Result<()> {
    if layer_sizes.len() < 2 {
        return Err(SimError::InvalidTopology {
            layers: layer_sizes.len(),
        });
    }
    if let Some(index) = layer_sizes.iter().position(|&n| n == 0) {
        return Err(SimError::EmptyLayer { index });
    }
    Ok(())
}

/// Checks that the stored parameters agree with `layer_sizes`.
///
/// `index` in the error is the receiving layer, counting the input layer as 0.
pub fn validate_shape(network: &Network) -> Result<()> {
    let sizes = &network.layer_sizes;
    validate_topology(sizes)?;
    let layers = sizes.len() - 1;
    if network.weights.len() != layers || network.biases.len() != layers {
        return Err(SimError::MalformedLayer {
            index: layers.min(network.weights.len().min(network.biases.len())) + 1,
        });
    }
    for (l, pair) in sizes.windows(2).enumerate() {
        let (fan_in, neurons) = (pair[0], pair[1]);
        let weights = &network.weights[l];
        if weights.len() != neurons
            || network.biases[l].len() != neurons
            || weights.iter().any(|w| w.len() != fan_in)
        {
            return Err(SimError::MalformedLayer { index: l + 1 });
        }
    }
    Ok(())
}

/// Allocates a network for `layer_sizes` and draws every parameter from
/// `[-weight_range, weight_range)`.
pub fn create_network_with_rng<R: Rng>(
    layer_sizes: &[usize],
    weight_range: f64,
    rng: &mut R,
) -> Result<Network> {
    validate_topology(layer_sizes)?;

    let mut weights = Vec::with_capacity(layer_sizes.len() - 1);
    let mut biases = Vec::with_capacity(layer_sizes.len() - 1);

    for pair in layer_sizes.windows(2) {
        let (fan_in, neurons) = (pair[0], pair[1]);
        let layer: Vec<Vec<f64>> = (0..neurons)
            .map(|_| {
                (0..fan_in)
                    .map(|_| rng.uniform(-weight_range, weight_range))
                    .collect()
            })
            .collect();
        weights.push(layer);
        biases.push(
            (0..neurons)
                .map(|_| rng.uniform(-weight_range, weight_range))
                .collect(),
        );
    }

    Ok(Network {
        layer_sizes: layer_sizes.to_vec(),
        weights,
        biases,
    })
}
