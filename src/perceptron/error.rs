//! Defines perceptron errors.

use std::{error, fmt};

/// The broad category of a [`PerceptronError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// The caller passed an argument that violates a precondition.
    InvalidArgument,
}

/// An error type for all operations on weights and points.
///
/// Every error is raised before the weights are touched.
#[derive(Clone, Debug, PartialEq)]
pub enum PerceptronError {
    /// The weights and the point have different lengths.
    SizeMismatch {
        /// Length of the weight vector.
        weights: usize,
        /// Length of the feature point.
        point: usize,
    },
    /// A label is not one of the two values allowed by its encoding.
    InvalidLabel(f64),
    /// The first coordinate of a point is not 1 while the bias policy is on. Holds the offending
    /// coordinate, or `None` for an empty point.
    MissingBias(Option<f64>),
}

impl PerceptronError {
    /// Return the category of the error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::SizeMismatch { .. } | Self::InvalidLabel(_) | Self::MissingBias(_) => {
                ErrorKind::InvalidArgument
            }
        }
    }
}

impl error::Error for PerceptronError {}

impl fmt::Display for PerceptronError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { weights, point } => write!(
                f,
                "weight and point must have the same size (weights: {}, point: {})",
                weights, point
            ),
            Self::InvalidLabel(l) => write!(f, "label must be valid, got {}", l),
            Self::MissingBias(Some(x)) => write!(f, "first element of data must be 1, got {}", x),
            Self::MissingBias(None) => write!(f, "first element of data must be 1, got nothing"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{ErrorKind, PerceptronError};

    #[test]
    fn every_error_is_invalid_argument() {
        let errors = [
            PerceptronError::SizeMismatch {
                weights: 2,
                point: 3,
            },
            PerceptronError::InvalidLabel(0.0),
            PerceptronError::MissingBias(None),
        ];
        for err in errors {
            assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        }
    }

    #[test]
    fn messages() {
        let err = PerceptronError::SizeMismatch {
            weights: 2,
            point: 3,
        };
        assert!(err
            .to_string()
            .starts_with("weight and point must have the same size"));
        assert!(PerceptronError::InvalidLabel(2.0)
            .to_string()
            .starts_with("label must be valid"));
        assert_eq!(
            PerceptronError::MissingBias(Some(0.5)).to_string(),
            "first element of data must be 1, got 0.5"
        );
    }
}
