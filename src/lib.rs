//! The online perceptron learning rule over borrowed feature vectors.

#![deny(unsafe_code, rust_2018_idioms, rust_2021_compatibility)]
#![warn(missing_docs)]

pub mod dataset;
pub mod perceptron;
