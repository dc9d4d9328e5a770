//! A single perceptron owning its weights.

use num::Float;

use crate::perceptron::{self, Config, Encoding, Label, PerceptronError};

/// A perceptron holding a weight vector of fixed dimension.
///
/// Points are borrowed for the duration of a call and never retained. Every operation validates
/// its arguments before the weights are modified, so a failed call leaves the neuron as it was.
///
/// When [`Config::require_bias`] is set (the default), the first coordinate of every point must
/// be 1 so that the first weight acts as the bias of the hyperplane.
#[derive(Clone, Debug, PartialEq)]
pub struct Neuron<F = f64> {
    weights: Vec<F>,
    config: Config<F>,
}

impl<F: Float> Default for Neuron<F> {
    fn default() -> Self {
        Self::from_weights(Vec::new())
    }
}

impl<F: Float> From<Vec<F>> for Neuron<F> {
    fn from(weights: Vec<F>) -> Self {
        Self::from_weights(weights)
    }
}

impl<F: Float> Neuron<F> {
    /// Create a neuron of dimension `n` with all weights set to zero.
    pub fn new(n: usize) -> Self {
        Self::from_weights(vec![F::zero(); n])
    }

    /// Create a neuron starting from the given weights. Its dimension is the length of `weights`.
    pub fn from_weights(weights: Vec<F>) -> Self {
        Self {
            weights,
            config: Config::default(),
        }
    }

    /// Replace the training settings.
    #[must_use]
    pub fn with_config(mut self, config: Config<F>) -> Self {
        self.config = config;
        self
    }

    /// Turn the bias policy on or off.
    #[must_use]
    pub fn with_bias(mut self, require_bias: bool) -> Self {
        self.config.require_bias = require_bias;
        self
    }

    /// Return the training settings.
    pub fn config(&self) -> &Config<F> {
        &self.config
    }

    /// Return the current weights.
    pub fn weights(&self) -> &[F] {
        &self.weights
    }

    /// Return the number of weights.
    pub fn dimension(&self) -> usize {
        self.weights.len()
    }

    /// Consume the neuron and return its weights.
    pub fn into_weights(self) -> Vec<F> {
        self.weights
    }

    /// Compute the dot product of the weights and `x`.
    pub fn score(&self, x: &[F]) -> Result<F, PerceptronError> {
        perceptron::dot(&self.weights, x)
    }

    /// Return the side of the hyperplane that `x` falls on, `None` if it lies on it.
    pub fn predict(&self, x: &[F]) -> Result<Option<Label>, PerceptronError> {
        perceptron::classify(&self.weights, x)
    }

    fn check_bias(&self, x: &[F]) -> Result<(), PerceptronError> {
        if !self.config.require_bias {
            return Ok(());
        }
        match x.first() {
            Some(x0) if *x0 == F::one() => Ok(()),
            Some(x0) => Err(PerceptronError::MissingBias(x0.to_f64().or(Some(f64::NAN)))),
            None => Err(PerceptronError::MissingBias(None)),
        }
    }

    /// Update the weights with a single labeled point using the configured learning rate.
    ///
    /// See [`perceptron::update`] for the rule and the returned value.
    pub fn update<L>(&mut self, x: &[F], y: L) -> Result<L::Output<F>, PerceptronError>
    where
        L: Encoding,
    {
        self.update_with(x, y, self.config.alpha)
    }

    /// Update the weights with a single labeled point using learning rate `alpha`.
    pub fn update_with<L: Encoding>(
        &mut self,
        x: &[F],
        y: L,
        alpha: F,
    ) -> Result<L::Output<F>, PerceptronError> {
        self.check_bias(x)?;
        perceptron::update(&mut self.weights, x, y, alpha)
    }

    /// Retrain on a single point until it is classified correctly, using the configured learning
    /// rate and iteration budget.
    ///
    /// Returns `false` if the budget runs out first.
    pub fn train<L: Encoding>(&mut self, x: &[F], y: L) -> Result<bool, PerceptronError> {
        self.train_with(x, y, self.config.alpha, self.config.max_iterations)
    }

    /// Retrain on a single point until it is classified correctly, making at most
    /// `max_iterations` corrections.
    ///
    /// Returns whether the point is classified correctly once training stops. A budget of 0 only
    /// reports the current state.
    pub fn train_with<L: Encoding>(
        &mut self,
        x: &[F],
        y: L,
        alpha: F,
        max_iterations: usize,
    ) -> Result<bool, PerceptronError> {
        self.check_bias(x)?;
        let label = y.label()?;
        let mut score = self.score(x)?;
        for iteration in 0..max_iterations {
            if label.agrees(score) {
                tracing::debug!(iteration, "point classified correctly");
                return Ok(true);
            }
            perceptron::update(&mut self.weights, x, label, alpha)?;
            score = perceptron::dot_unchecked(&self.weights, x);
        }
        let converged = label.agrees(score);
        tracing::debug!(max_iterations, converged, "iteration budget spent");
        Ok(converged)
    }

    /// Make one pass over a sequence of labeled points, updating once per point in order, using
    /// the configured learning rate.
    ///
    /// Returns the number of misclassified points, which is the number of updates applied.
    pub fn train_batch<'x, I, L>(&mut self, pairs: I) -> Result<usize, PerceptronError>
    where
        I: IntoIterator<Item = (&'x [F], L)>,
        L: Encoding,
        F: 'x,
    {
        self.train_batch_with(pairs, self.config.alpha)
    }

    /// Same as [`Neuron::train_batch`] using learning rate `alpha`.
    ///
    /// A failing point stops the pass. Points before it stay learned.
    pub fn train_batch_with<'x, I, L>(
        &mut self,
        pairs: I,
        alpha: F,
    ) -> Result<usize, PerceptronError>
    where
        I: IntoIterator<Item = (&'x [F], L)>,
        L: Encoding,
        F: 'x,
    {
        let mut updates = 0;
        for (x, y) in pairs {
            let label = y.label()?;
            let score = self.update_with(x, label, alpha)?;
            if !label.agrees(score) {
                updates += 1;
            }
        }
        Ok(updates)
    }

    /// Make one pass over a sequence of labeled points, retraining on each point in order until it
    /// is classified correctly or `max_iterations` updates were made.
    ///
    /// Returns the number of points that ended up classified correctly within the budget.
    pub fn train_batch_until_correct<'x, I, L>(
        &mut self,
        pairs: I,
        alpha: F,
        max_iterations: usize,
    ) -> Result<usize, PerceptronError>
    where
        I: IntoIterator<Item = (&'x [F], L)>,
        L: Encoding,
        F: 'x,
    {
        let mut converged = 0;
        for (x, y) in pairs {
            if self.train_with(x, y, alpha, max_iterations)? {
                converged += 1;
            }
        }
        Ok(converged)
    }
}

#[cfg(test)]
mod tests {
    use super::Neuron;
    use crate::perceptron::{Config, Label, PerceptronError};

    #[test]
    fn zero_initialized() {
        let neuron = Neuron::<f64>::new(3);
        assert_eq!(neuron.weights(), &[0.0, 0.0, 0.0]);
        assert_eq!(neuron.dimension(), 3);
        assert_eq!(neuron.config(), &Config::default());
    }

    #[test]
    fn bias_coordinate_is_required() {
        let mut neuron = Neuron::<f64>::from(vec![0.5, 0.5]);
        let err = neuron.update(&[2.0, 1.0], 1i32).unwrap_err();
        assert_eq!(err, PerceptronError::MissingBias(Some(2.0)));
        assert_eq!(
            neuron.update(&[], 1i32).unwrap_err(),
            PerceptronError::MissingBias(None)
        );
        assert_eq!(neuron.weights(), &[0.5, 0.5]);
    }

    #[test]
    fn bias_policy_can_be_disabled() {
        let mut neuron = Neuron::<f64>::new(2).with_bias(false);
        let score = neuron.update(&[2.0, 1.0], -1i32).unwrap();
        assert_eq!(score, 0.0);
        assert_eq!(neuron.weights(), &[-2.0, -1.0]);
    }

    #[test]
    fn configured_learning_rate() {
        let config = Config {
            alpha: 0.5,
            ..Config::default()
        };
        let mut neuron = Neuron::<f64>::new(2).with_config(config);
        assert!(!neuron.update(&[1.0, 4.0], true).unwrap());
        assert_eq!(neuron.weights(), &[0.5, 2.0]);
        assert_eq!(neuron.predict(&[1.0, 4.0]), Ok(Some(Label::Positive)));
    }

    #[test]
    fn zero_budget_does_not_update() {
        let mut neuron = Neuron::<f64>::new(2);
        assert_eq!(neuron.train_with(&[1.0, 1.0], 1i32, 1.0, 0), Ok(false));
        assert_eq!(neuron.weights(), &[0.0, 0.0]);
    }

    #[test]
    fn zero_budget_reports_current_state() {
        let mut neuron = Neuron::<f64>::from(vec![0.0, 1.0]);
        assert_eq!(neuron.train_with(&[1.0, 1.0], true, 1.0, 0), Ok(true));
        assert_eq!(neuron.train_with(&[1.0, 1.0], false, 1.0, 0), Ok(false));
        assert_eq!(neuron.weights(), &[0.0, 1.0]);
    }

    #[test]
    fn budget_checks_the_bias_coordinate() {
        let mut neuron = Neuron::<f64>::new(2);
        assert_eq!(
            neuron.train_with(&[3.0, 1.0], 1i32, 1.0, 0),
            Err(PerceptronError::MissingBias(Some(3.0)))
        );
    }

    #[test]
    fn take_leaves_empty_neuron() {
        let mut neuron = Neuron::<f64>::from(vec![1.0, 2.0]);
        let copy = neuron.clone();
        let moved = std::mem::take(&mut neuron);
        assert_eq!(moved, copy);
        assert_eq!(neuron.dimension(), 0);
        assert_eq!(moved.into_weights(), vec![1.0, 2.0]);
    }
}
