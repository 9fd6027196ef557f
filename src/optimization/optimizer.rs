use ndarray::{Array2, ArrayView2};

pub trait Optimizer {
    /// Updates the weights according to the algorithm's learning rule.
    fn update(&mut self, weights: &mut Array2<f32>, gradient: ArrayView2<f32>);

    /// The current step length.
    fn learning_rate(&self) -> f32;

    /// Replaces the current step length.
    fn set_learning_rate(&mut self, learning_rate: f32);
}
