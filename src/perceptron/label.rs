//! Binary labels and the encodings callers may use for them.

use std::{fmt, ops};

use num::Float;

use crate::perceptron::error::PerceptronError;

/// The signed polarity of a point with respect to a hyperplane.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Label {
    /// The side where the dot product is negative, encoded as `-1` or `false`.
    Negative,
    /// The side where the dot product is positive, encoded as `+1` or `true`.
    Positive,
}

impl Label {
    /// Return the label as `-1` or `+1`.
    pub fn polarity<F: Float>(self) -> F {
        match self {
            Self::Negative => -F::one(),
            Self::Positive => F::one(),
        }
    }

    /// Return the label predicted by a dot product.
    ///
    /// A score of zero lies on the hyperplane and predicts neither side, same for NaN.
    pub fn from_score<F: Float>(score: F) -> Option<Self> {
        if score > F::zero() {
            Some(Self::Positive)
        } else if score < F::zero() {
            Some(Self::Negative)
        } else {
            None
        }
    }

    /// Check if a dot product puts a point on this label's side of the hyperplane.
    pub fn agrees<F: Float>(self, score: F) -> bool {
        Self::from_score(score) == Some(self)
    }
}

impl ops::Not for Label {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Self::Negative => Self::Positive,
            Self::Positive => Self::Negative,
        }
    }
}

impl From<bool> for Label {
    fn from(value: bool) -> Self {
        if value {
            Self::Positive
        } else {
            Self::Negative
        }
    }
}

impl From<Label> for bool {
    fn from(label: Label) -> Self {
        label == Label::Positive
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Negative => write!(f, "-1"),
            Self::Positive => write!(f, "+1"),
        }
    }
}

/// A caller-facing label encoding.
///
/// Labels are converted to a [`Label`] at the boundary so that the learning rule is written once.
/// The encoding also picks what an update reports back: the raw score for signed encodings, the
/// agreement with the label for booleans.
pub trait Encoding: Copy + fmt::Debug {
    /// The value returned by an update.
    type Output<F: Float>;

    /// Convert into the internal polarity, failing on values outside of the encoding.
    fn label(self) -> Result<Label, PerceptronError>;

    /// Build the update result from the pre-update score.
    fn output<F: Float>(score: F, label: Label) -> Self::Output<F>;
}

impl Encoding for Label {
    type Output<F: Float> = F;

    fn label(self) -> Result<Label, PerceptronError> {
        Ok(self)
    }

    fn output<F: Float>(score: F, _label: Label) -> F {
        score
    }
}

impl Encoding for bool {
    type Output<F: Float> = bool;

    fn label(self) -> Result<Label, PerceptronError> {
        Ok(Label::from(self))
    }

    fn output<F: Float>(score: F, label: Label) -> bool {
        label.agrees(score)
    }
}

impl Encoding for i32 {
    type Output<F: Float> = F;

    fn label(self) -> Result<Label, PerceptronError> {
        match self {
            1 => Ok(Label::Positive),
            -1 => Ok(Label::Negative),
            _ => Err(PerceptronError::InvalidLabel(f64::from(self))),
        }
    }

    fn output<F: Float>(score: F, _label: Label) -> F {
        score
    }
}

macro_rules! float_encoding {
    ($($t:ty),*) => {$(
        impl Encoding for $t {
            type Output<F: Float> = F;

            fn label(self) -> Result<Label, PerceptronError> {
                if self == 1.0 {
                    Ok(Label::Positive)
                } else if self == -1.0 {
                    Ok(Label::Negative)
                } else {
                    Err(PerceptronError::InvalidLabel(f64::from(self)))
                }
            }

            fn output<F: Float>(score: F, _label: Label) -> F {
                score
            }
        }
    )*};
}

float_encoding!(f32, f64);

#[cfg(test)]
mod tests {
    use super::{Encoding, Label};
    use crate::perceptron::error::PerceptronError;

    #[test]
    fn signed_encodings() {
        assert_eq!(1i32.label(), Ok(Label::Positive));
        assert_eq!((-1i32).label(), Ok(Label::Negative));
        assert_eq!(1.0f64.label(), Ok(Label::Positive));
        assert_eq!((-1.0f32).label(), Ok(Label::Negative));
        assert_eq!(
            0i32.label(),
            Err(PerceptronError::InvalidLabel(0.0))
        );
        assert!(0.5f64.label().is_err());
        assert!(f64::NAN.label().is_err());
    }

    #[test]
    fn bool_encoding() {
        assert_eq!(true.label(), Ok(Label::Positive));
        assert_eq!(false.label(), Ok(Label::Negative));
        assert!(bool::from(Label::Positive));
        assert!(!bool::from(!Label::Positive));
    }

    #[test]
    fn score_signs() {
        assert_eq!(Label::from_score(2.0), Some(Label::Positive));
        assert_eq!(Label::from_score(-0.1), Some(Label::Negative));
        assert_eq!(Label::from_score(0.0), None);
        assert_eq!(Label::from_score(-0.0), None);
        assert_eq!(Label::from_score(f64::NAN), None);
        assert!(!Label::Negative.agrees(0.0));
        assert_eq!(Label::Negative.polarity::<f32>(), -1.0);
    }

    #[test]
    fn outputs() {
        assert_eq!(<i32 as Encoding>::output(-3.5f64, Label::Positive), -3.5);
        assert!(!<bool as Encoding>::output(-3.5f64, Label::Positive));
        assert!(<bool as Encoding>::output(-3.5f64, Label::Negative));
    }
}
