//! Data structures and methods for dealing with datasets.

use rand::Rng;
use rand_distr::Distribution;

use crate::perceptron::Label;

/// A single labeled point within a dataset. The first coordinate of `input` is the bias
/// coordinate and is always 1.
#[derive(Debug, Clone, PartialEq)]
pub struct Sample<const N: usize> {
    /// The input data.
    pub input: [f64; N],
    /// The side of the hyperplane the input belongs to.
    pub label: Label,
}

impl<const N: usize> Sample<N> {
    /// Borrow the sample as a (point, label) pair.
    pub fn pair(&self) -> (&[f64], Label) {
        (&self.input, self.label)
    }
}

/// Iterate over the samples as (point, label) pairs, in order.
pub fn pairs<'a, const N: usize>(
    samples: &'a [Sample<N>],
) -> impl Iterator<Item = (&'a [f64], Label)> + 'a {
    samples.iter().map(Sample::pair)
}

/// Build the truth table of a 2-input boolean gate, inputs encoded as 0 and 1.
pub fn logic_gate(gate: fn(bool, bool) -> bool) -> Vec<Sample<3>> {
    let convert = |x| if x { 1.0 } else { 0.0 };
    let mut samples = Vec::with_capacity(4);
    for a in [false, true] {
        for b in [false, true] {
            samples.push(Sample {
                input: [1.0, convert(a), convert(b)],
                label: Label::from(gate(a, b)),
            });
        }
    }
    samples
}

/// Upper bound on the draws spent on a single sample before giving up.
const MAX_DRAWS: usize = 10_000;

/// Draw `count` samples that are linearly separated by the hyperplane with coefficients `normal`.
///
/// All but the first coordinate are drawn from `distribution`, and each sample is labeled by the
/// sign of its dot product with `normal`. Points closer than `margin` to the hyperplane are
/// redrawn.
///
/// Returns `None` when no point can clear the margin: the coefficients past the bias are all zero
/// and the bias alone is within `margin` of the hyperplane, or a single sample still fails after
/// many draws.
pub fn separable<R, D, const N: usize>(
    rng: &mut R,
    normal: &[f64; N],
    margin: f64,
    count: usize,
    distribution: D,
) -> Option<Vec<Sample<N>>>
where
    R: Rng,
    D: Distribution<f64>,
{
    let bias = normal.first().copied().unwrap_or(0.0);
    let bias_only = normal.iter().skip(1).all(|w| *w == 0.0);
    if bias_only && (bias == 0.0 || bias.abs() < margin) {
        return None;
    }
    let mut samples = Vec::with_capacity(count);
    while samples.len() < count {
        let mut sample = None;
        for _ in 0..MAX_DRAWS {
            let mut input = [1.0; N];
            for x in input.iter_mut().skip(1) {
                *x = distribution.sample(rng);
            }
            let score: f64 = normal.iter().zip(&input).map(|(w, x)| w * x).sum();
            if score.abs() < margin {
                continue;
            }
            if let Some(label) = Label::from_score(score) {
                sample = Some(Sample { input, label });
                break;
            }
        }
        samples.push(sample?);
    }
    Some(samples)
}
