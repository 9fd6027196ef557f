use ndarray::{Array2, ArrayView2};

use super::Optimizer;

/// Gradient descent optimization algorithm.
pub struct GradientDescent {
    learning_rate: f32,
}

impl GradientDescent {
    /// Returns a new `GradientDescent`.
    ///
    /// # Arguments
    /// * `learning_rate` - The *length* of the steps taken on `update`.
    pub fn new(learning_rate: f32) -> Self {
        Self { learning_rate }
    }

    /// Computes the mean gradient of the squared-error loss over one batch.
    ///
    /// # Arguments
    /// * `features` - The batch rows of the design matrix, shape `(b, k)`.
    /// * `labels` - The matching labels, shape `(b, 1)`.
    /// * `weights` - The current weights, shape `(k, 1)`.
    ///
    /// # Returns
    /// `(featuresᵗ · (features · weights - labels)) / b`, shape `(k, 1)`.
    pub fn gradient(
        features: ArrayView2<f32>,
        labels: ArrayView2<f32>,
        weights: &Array2<f32>,
    ) -> Array2<f32> {
        let guesses = features.dot(weights);
        let differences = &guesses - &labels;

        features.t().dot(&differences) / features.nrows() as f32
    }

    /// Computes the batch gradient and applies it to `weights` in place.
    pub fn step(
        &mut self,
        features: ArrayView2<f32>,
        labels: ArrayView2<f32>,
        weights: &mut Array2<f32>,
    ) {
        let gradient = Self::gradient(features, labels, weights);
        self.update(weights, gradient.view());
    }
}

impl Optimizer for GradientDescent {
    /// Makes a step in the opposite direction of the gradient, with a length
    /// of `learning_rate`.
    fn update(&mut self, weights: &mut Array2<f32>, gradient: ArrayView2<f32>) {
        weights.scaled_add(-self.learning_rate, &gradient);
    }

    fn learning_rate(&self) -> f32 {
        self.learning_rate
    }

    fn set_learning_rate(&mut self, learning_rate: f32) {
        self.learning_rate = learning_rate;
    }
}
