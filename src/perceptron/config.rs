//! Training hyperparameters of a neuron.

use num::Float;

/// Settings applied by a [`Neuron`](crate::perceptron::Neuron) when no explicit values are given.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Config<F> {
    /// The learning rate.
    pub alpha: F,
    /// Update budget when retraining a single point until it is classified correctly.
    pub max_iterations: usize,
    /// Require the first coordinate of every point to be 1, encoding the bias term.
    pub require_bias: bool,
}

impl<F: Float> Default for Config<F> {
    fn default() -> Self {
        Self {
            alpha: F::one(),
            max_iterations: 100,
            require_bias: true,
        }
    }
}
