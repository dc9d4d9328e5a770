//! The perceptron learning rule.
//!
//! A perceptron is a hyperplane separating two sets of points in R^n. Given points labeled
//! [`Label::Negative`] and [`Label::Positive`], it looks for a weight vector `w` such that
//! `w.x < 0` for the former and `w.x > 0` for the latter. A bias is expressed by fixing the first
//! coordinate of every point to 1, so that `w[0]` plays the role of the offset.

use num::Float;

pub mod config;
pub mod error;
pub mod label;
pub mod neuron;

pub use config::Config;
pub use error::{ErrorKind, PerceptronError};
pub use label::{Encoding, Label};
pub use neuron::Neuron;

/// Fail unless the weights and the point have the same length.
fn check_size<F>(w: &[F], x: &[F]) -> Result<(), PerceptronError> {
    if w.len() != x.len() {
        return Err(PerceptronError::SizeMismatch {
            weights: w.len(),
            point: x.len(),
        });
    }
    Ok(())
}

/// Sum of products of the weights and the point, in index order.
fn dot_unchecked<F: Float>(w: &[F], x: &[F]) -> F {
    w.iter()
        .zip(x)
        .fold(F::zero(), |acc, (wi, xi)| acc + *wi * *xi)
}

/// Compute the dot product of the weights and a point.
pub fn dot<F: Float>(w: &[F], x: &[F]) -> Result<F, PerceptronError> {
    check_size(w, x)?;
    Ok(dot_unchecked(w, x))
}

/// Return the side of the hyperplane `w` that `x` falls on, or `None` if it lies on it.
pub fn classify<F: Float>(w: &[F], x: &[F]) -> Result<Option<Label>, PerceptronError> {
    dot(w, x).map(Label::from_score)
}

/// Update weights `w` given point `x` and label `y`.
///
/// When `x` is misclassified by `w`, the weights move toward the correct side with
/// `w = w + alpha * y * x` where `y` is `-1` or `+1`. A point lying on the hyperplane counts as
/// misclassified. Correctly classified points leave `w` untouched.
///
/// The result is computed from the weights before the update: the dot product for signed labels,
/// whether the point was already classified correctly for boolean labels.
///
/// # Errors
///
/// Returns an error, without modifying `w`, if the lengths differ or the label is not valid for
/// its encoding.
pub fn update<F, L>(
    w: &mut [F],
    x: &[F],
    y: L,
    alpha: F,
) -> Result<L::Output<F>, PerceptronError>
where
    F: Float,
    L: Encoding,
{
    check_size(w, x)?;
    let label = y.label()?;

    let score = dot_unchecked(w, x);
    if !label.agrees(score) {
        let step = alpha * label.polarity::<F>();
        for (wi, xi) in w.iter_mut().zip(x) {
            *wi = *wi + step * *xi;
        }
    }
    Ok(L::output(score, label))
}

/// Resolve a learning rate handed over by a host application, where exactly 0 stands for the
/// default rate of 1.
pub fn learning_rate<F: Float>(alpha: F) -> F {
    if alpha == F::zero() {
        F::one()
    } else {
        alpha
    }
}
