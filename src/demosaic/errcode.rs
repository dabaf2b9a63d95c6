//! Bayer error codes.

use thiserror::Error;

/// Result type of every fallible operation in this crate.
pub type BayerResult<T> = Result<T, BayerError>;

/// Error codes for the Bayer demosaicing.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BayerError {
    /// The filter layout index is not one of the four recognised row orders.
    #[error("Invalid Bayer filter layout {0}, expected 0..=3")]
    InvalidLayout(usize),
    /// The algorithm index is not one of the four recognised algorithms.
    #[error("Invalid demosaic algorithm {0}, expected 0..=3")]
    InvalidAlgorithm(usize),
    /// The output arrangement index is not recognised.
    #[error("Invalid output arrangement {0}, expected 0..=2")]
    InvalidOutput(usize),
    /// The image is not the right size.
    #[error("Wrong resolution {width}x{height}, at least 2x2 is required")]
    WrongResolution {
        /// Width of the offending grid.
        width: usize,
        /// Height of the offending grid.
        height: usize,
    },
    /// The sample buffer does not match the declared dimensions.
    #[error("Data length {got} does not match image size {expected}")]
    SizeMismatch {
        /// `width * height`.
        expected: usize,
        /// Length of the buffer supplied.
        got: usize,
    },
    /// The sample buffer is empty.
    #[error("Data is empty")]
    EmptyData,
}
