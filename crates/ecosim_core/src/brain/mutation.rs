use crate::rng::RandomSource;
use ecosim_data::Network;
use rand::Rng;

/// Each weight and bias independently receives, with probability `rate`, a
/// perturbation drawn from `[-amount, amount)`.
pub fn mutate_with_rng<R: Rng>(network: &mut Network, rate: f64, amount: f64, rng: &mut R) {
    for layer in &mut network.weights {
        for neuron in layer {
            for w in neuron {
                if rng.chance(rate) {
                    *w += rng.uniform(-amount, amount);
                }
            }
        }
    }

    for layer in &mut network.biases {
        for b in layer {
            if rng.chance(rate) {
                *b += rng.uniform(-amount, amount);
            }
        }
    }
}
