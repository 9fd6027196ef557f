use std::num::NonZeroUsize;

use log::debug;
use ndarray::{s, Array2, ArrayView2};

use crate::{
    error::{RegressionError, Result},
    metrics,
    optimization::{GradientDescent, Optimizer},
    standardize::Standardizer,
};

const DEFAULT_LEARNING_RATE: f32 = 0.1;
const DEFAULT_ITERATIONS: NonZeroUsize = NonZeroUsize::new(1000).unwrap();
const DEFAULT_BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

/// Hyperparameters for a training run.
///
/// All fields are fixed for the lifetime of the model except the learning
/// rate, which the training loop rescales after each epoch based on the MSE
/// trend.
#[derive(Debug, Clone, Copy)]
pub struct TrainOptions {
    pub learning_rate: f32,
    pub iterations: NonZeroUsize,
    pub batch_size: NonZeroUsize,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            learning_rate: DEFAULT_LEARNING_RATE,
            iterations: DEFAULT_ITERATIONS,
            batch_size: DEFAULT_BATCH_SIZE,
        }
    }
}

/// A multivariate linear model trained with mini-batch gradient descent.
///
/// Construction standardizes the training features and fixes the
/// normalization parameters for the lifetime of the instance. `train` runs
/// the configured number of epochs; `predict` and `test` are only valid
/// afterwards and report `NotTrained` otherwise.
pub struct LinearRegression {
    features: Array2<f32>,
    labels: Array2<f32>,
    standardizer: Standardizer,
    weights: Array2<f32>,
    optimizer: GradientDescent,
    iterations: NonZeroUsize,
    batch_size: NonZeroUsize,
    mse_history: Vec<f32>,
    trained: bool,
}

impl LinearRegression {
    /// Builds a model from raw features and labels.
    ///
    /// The features are standardized column-wise and augmented with a bias
    /// column; the weights start at zero.
    ///
    /// # Errors
    /// * `EmptyDataset` - `features` has no rows or no columns.
    /// * `ShapeMismatch` - `labels` disagrees with `features` on row count,
    ///   or has more than one column.
    /// * `InvalidConfig` - the learning rate is not positive and finite.
    /// * `BatchTooLarge` - the batch size exceeds the sample count; training
    ///   would silently never update the weights.
    /// * `ZeroVariance` - a feature column is constant.
    pub fn new(
        features: Array2<f32>,
        labels: Array2<f32>,
        options: TrainOptions,
    ) -> Result<Self> {
        let samples = features.nrows();

        if samples == 0 || features.ncols() == 0 {
            return Err(RegressionError::EmptyDataset);
        }

        if labels.nrows() != samples {
            return Err(RegressionError::ShapeMismatch {
                what: "label rows",
                got: labels.nrows(),
                expected: samples,
            });
        }

        if labels.ncols() != 1 {
            return Err(RegressionError::ShapeMismatch {
                what: "label columns",
                got: labels.ncols(),
                expected: 1,
            });
        }

        if !options.learning_rate.is_finite() || options.learning_rate <= 0.0 {
            return Err(RegressionError::InvalidConfig(format!(
                "learning rate must be positive and finite, got {}",
                options.learning_rate
            )));
        }

        if options.batch_size.get() > samples {
            return Err(RegressionError::BatchTooLarge {
                batch_size: options.batch_size.get(),
                samples,
            });
        }

        let mut standardizer = Standardizer::new();
        let design = standardizer.design_matrix(features.view())?;
        let weights = Array2::zeros((design.ncols(), 1));

        Ok(Self {
            features: design,
            labels,
            standardizer,
            weights,
            optimizer: GradientDescent::new(options.learning_rate),
            iterations: options.iterations,
            batch_size: options.batch_size,
            mse_history: Vec::with_capacity(options.iterations.get()),
            trained: false,
        })
    }

    /// Runs the configured number of epochs of mini-batch gradient descent.
    ///
    /// Each epoch walks the training set in contiguous batches of
    /// `batch_size` rows; rows past the last full batch are skipped. After
    /// every epoch the MSE over the whole training set is recorded and the
    /// learning rate rescaled from the trend of the last two entries.
    pub fn train(&mut self) {
        let batch_size = self.batch_size.get();
        let batch_count = self.features.nrows() / batch_size;

        for epoch in 0..self.iterations.get() {
            for j in 0..batch_count {
                let start = j * batch_size;
                let features = self.features.slice(s![start..start + batch_size, ..]);
                let labels = self.labels.slice(s![start..start + batch_size, ..]);

                self.optimizer.step(features, labels, &mut self.weights);
            }

            let mse = self.record_mse();
            self.update_learning_rate();

            debug!(
                "epoch {epoch}: mse={mse} lr={}",
                self.optimizer.learning_rate()
            );
        }

        self.trained = true;
    }

    /// Predicts labels for raw (unstandardized) observations.
    ///
    /// # Errors
    /// `NotTrained` before `train` has completed; `ShapeMismatch` if the
    /// observation width differs from the training features.
    pub fn predict(&self, observations: ArrayView2<f32>) -> Result<Array2<f32>> {
        if !self.trained {
            return Err(RegressionError::NotTrained);
        }

        let design = self.standardizer.project(observations)?;
        Ok(design.dot(&self.weights))
    }

    /// Scores the model on held-out data, returning the coefficient of
    /// determination.
    ///
    /// # Errors
    /// Same preconditions as `predict`, plus `ShapeMismatch` if the label
    /// row count disagrees with the feature row count.
    pub fn test(
        &self,
        test_features: ArrayView2<f32>,
        test_labels: ArrayView2<f32>,
    ) -> Result<f32> {
        if test_labels.nrows() != test_features.nrows() {
            return Err(RegressionError::ShapeMismatch {
                what: "test label rows",
                got: test_labels.nrows(),
                expected: test_features.nrows(),
            });
        }

        let predictions = self.predict(test_features)?;
        Ok(metrics::r_squared(test_labels, predictions.view()))
    }

    /// MSE per completed epoch, most recent first.
    pub fn mse_history(&self) -> &[f32] {
        &self.mse_history
    }

    /// The current (possibly rescaled) learning rate.
    pub fn learning_rate(&self) -> f32 {
        self.optimizer.learning_rate()
    }

    /// The current weights, bias first, shape `(n_features + 1, 1)`.
    pub fn weights(&self) -> ArrayView2<f32> {
        self.weights.view()
    }

    pub fn is_trained(&self) -> bool {
        self.trained
    }

    /// Records the MSE of the entire training set under the current weights.
    fn record_mse(&mut self) -> f32 {
        let guesses = self.features.dot(&self.weights);
        let mse = metrics::mse(guesses.view(), self.labels.view());

        self.mse_history.insert(0, mse);
        mse
    }

    fn update_learning_rate(&mut self) {
        let rate = rescaled(self.optimizer.learning_rate(), &self.mse_history);
        self.optimizer.set_learning_rate(rate);
    }
}

/// Adapts the learning rate from the MSE trend: halve it when the latest
/// epoch got worse, grow it by 5% when it improved or held. Fewer than two
/// entries leave the rate untouched.
fn rescaled(rate: f32, mse_history: &[f32]) -> f32 {
    match mse_history {
        [latest, previous, ..] if latest > previous => rate / 2.0,
        [_, _, ..] => rate * 1.05,
        _ => rate,
    }
}
