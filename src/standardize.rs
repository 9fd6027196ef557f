use ndarray::{concatenate, Array1, Array2, ArrayView2, Axis};

use crate::error::{RegressionError, Result};

/// Per-column standardization parameters, fixed once fitted.
#[derive(Debug, Clone)]
struct Params {
    mean: Array1<f32>,
    std_dev: Array1<f32>,
}

/// Standardizes feature matrices to zero mean and unit variance, and builds
/// design matrices by prepending a bias column of ones.
///
/// The parameters are computed once, from the training features, and reused
/// verbatim for every later transform. Fitting twice is not possible through
/// the public API: `design_matrix` fits lazily on the first call only.
#[derive(Debug, Clone, Default)]
pub struct Standardizer {
    params: Option<Params>,
}

impl Standardizer {
    /// Returns a new, unfitted `Standardizer`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the standardization parameters have been computed.
    pub fn is_fitted(&self) -> bool {
        self.params.is_some()
    }

    /// Computes and stores column-wise mean and population variance (ddof 0).
    ///
    /// # Errors
    /// `EmptyDataset` if `features` has no rows or no columns, and
    /// `ZeroVariance` for the first constant column found, since dividing by
    /// its standard deviation would poison every later transform.
    pub fn fit(&mut self, features: ArrayView2<f32>) -> Result<()> {
        if features.ncols() == 0 {
            return Err(RegressionError::EmptyDataset);
        }

        let mean = features
            .mean_axis(Axis(0))
            .ok_or(RegressionError::EmptyDataset)?;
        let variance = features.var_axis(Axis(0), 0.0);

        if let Some(column) = variance.iter().position(|&v| v <= 0.0) {
            return Err(RegressionError::ZeroVariance { column });
        }

        self.params = Some(Params {
            mean,
            std_dev: variance.mapv(f32::sqrt),
        });

        Ok(())
    }

    /// Transforms `features` to `(x - mean) / sqrt(variance)` using the
    /// stored parameters. Never recomputes them.
    ///
    /// # Errors
    /// `NotFitted` if `fit` has not run, `ShapeMismatch` if the column count
    /// differs from the fitted width.
    pub fn transform(&self, features: ArrayView2<f32>) -> Result<Array2<f32>> {
        let params = self.params.as_ref().ok_or(RegressionError::NotFitted)?;

        if features.ncols() != params.mean.len() {
            return Err(RegressionError::ShapeMismatch {
                what: "feature columns",
                got: features.ncols(),
                expected: params.mean.len(),
            });
        }

        Ok((&features - &params.mean) / &params.std_dev)
    }

    /// Builds the design matrix for training: fits on first use, standardizes,
    /// then prepends the bias column of ones as column 0.
    ///
    /// The first call permanently fixes the normalization used by every later
    /// `project` on this instance.
    pub fn design_matrix(&mut self, features: ArrayView2<f32>) -> Result<Array2<f32>> {
        if !self.is_fitted() {
            self.fit(features)?;
        }
        self.project(features)
    }

    /// Builds a design matrix with the already-fitted parameters. This is the
    /// prediction-time path and never mutates the standardizer.
    ///
    /// # Errors
    /// `NotFitted` if `fit` has not run.
    pub fn project(&self, features: ArrayView2<f32>) -> Result<Array2<f32>> {
        let standardized = self.transform(features)?;
        let ones = Array2::ones((standardized.nrows(), 1));

        // Row counts match by construction.
        Ok(concatenate(Axis(1), &[ones.view(), standardized.view()]).unwrap())
    }
}
