use std::{
    error::Error,
    fmt::{self, Display},
};

/// The result type used in the entire crate.
pub type Result<T> = std::result::Result<T, RegressionError>;

/// All errors that can occur while building, training or querying a model.
#[derive(Debug, Clone, PartialEq)]
pub enum RegressionError {
    /// Invalid hyperparameter configuration — caught before training starts.
    InvalidConfig(String),

    /// A shape invariant was violated (e.g. ragged rows, mismatched lengths).
    ShapeMismatch {
        /// Human-readable context for the mismatch (e.g. "labels", "columns").
        what: &'static str,
        /// Observed value.
        got: usize,
        /// Expected value.
        expected: usize,
    },

    /// The dataset has no samples or no features.
    EmptyDataset,

    /// A feature column is constant; standardizing it would divide by zero.
    ZeroVariance { column: usize },

    /// The batch size exceeds the sample count, so no batch could ever run.
    BatchTooLarge { batch_size: usize, samples: usize },

    /// The standardizer was applied before being fitted.
    NotFitted,

    /// `predict` or `test` was called before `train`.
    NotTrained,
}

impl Display for RegressionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::ShapeMismatch {
                what,
                got,
                expected,
            } => {
                write!(f, "shape mismatch for {what}: got {got}, expected {expected}")
            }
            Self::EmptyDataset => write!(f, "dataset has no samples"),
            Self::ZeroVariance { column } => {
                write!(f, "feature column {column} has zero variance")
            }
            Self::BatchTooLarge {
                batch_size,
                samples,
            } => {
                write!(
                    f,
                    "batch size {batch_size} exceeds the {samples} available sample(s)"
                )
            }
            Self::NotFitted => write!(f, "standardizer has not been fitted"),
            Self::NotTrained => write!(f, "model has not been trained"),
        }
    }
}

impl Error for RegressionError {}
