pub mod forward;
pub mod mutation;
pub mod topology;

use crate::error::{Result, SimError};
pub use ecosim_data::Network;
use rand::Rng;

pub use topology::create_network_with_rng;

/// Magnitude bound of the perturbation applied by `mutate`.
pub const DEFAULT_MUTATION_AMOUNT: f64 = 0.1;
/// Fresh weights and biases are drawn from `[-DEFAULT_WEIGHT_RANGE, DEFAULT_WEIGHT_RANGE)`.
pub const DEFAULT_WEIGHT_RANGE: f64 = 1.0;

/// Trait defining inference and variation for agent networks.
pub trait NetworkLogic: Sized {
    fn new_random(layer_sizes: &[usize]) -> Result<Self>;
    fn new_random_with_rng<R: Rng>(layer_sizes: &[usize], rng: &mut R) -> Result<Self>;

    /// Feeds `input` through every layer with `tanh` activations.
    fn forward(&self, input: &[f64]) -> Result<Vec<f64>>;

    /// Perturbs each parameter with probability `rate` by up to `amount`.
    fn mutate_with_rng<R: Rng>(&mut self, rate: f64, amount: f64, rng: &mut R);
    fn mutate(&mut self, rate: f64);

    /// Mean absolute parameter difference; infinite across topologies.
    fn distance(&self, other: &Self) -> f64;

    /// Fails unless the network is well formed and maps `inputs` values to `outputs` values.
    fn check_io(&self, inputs: usize, outputs: usize) -> Result<()>;
}

impl NetworkLogic for Network {
    fn new_random(layer_sizes: &[usize]) -> Result<Self> {
        let mut rng = rand::thread_rng();
        Self::new_random_with_rng(layer_sizes, &mut rng)
    }

    fn new_random_with_rng<R: Rng>(layer_sizes: &[usize], rng: &mut R) -> Result<Self> {
        topology::create_network_with_rng(layer_sizes, DEFAULT_WEIGHT_RANGE, rng)
    }

    fn forward(&self, input: &[f64]) -> Result<Vec<f64>> {
        forward::forward(self, input)
    }

    fn mutate_with_rng<R: Rng>(&mut self, rate: f64, amount: f64, rng: &mut R) {
        mutation::mutate_with_rng(self, rate, amount, rng);
    }

    fn mutate(&mut self, rate: f64) {
        let mut rng = rand::thread_rng();
        self.mutate_with_rng(rate, DEFAULT_MUTATION_AMOUNT, &mut rng);
    }

    fn distance(&self, other: &Self) -> f64 {
        if self.layer_sizes != other.layer_sizes {
            return f64::INFINITY;
        }
        let count = self.parameter_count();
        if count == 0 {
            return 0.0;
        }
        let total: f64 = self
            .parameters()
            .zip(other.parameters())
            .map(|(a, b)| (a - b).abs())
            .sum();
        total / count as f64
    }

    fn check_io(&self, inputs: usize, outputs: usize) -> Result<()> {
        topology::validate_shape(self)?;
        if self.input_size() != inputs {
            return Err(SimError::InputLength {
                expected: self.input_size(),
                actual: inputs,
            });
        }
        if self.output_size() != outputs {
            return Err(SimError::OutputLength {
                expected: outputs,
                actual: self.output_size(),
            });
        }
        Ok(())
    }
}
