use ndarray::ArrayView2;

/// Mean squared error: the average of squared residuals.
pub fn mse(predictions: ArrayView2<f32>, labels: ArrayView2<f32>) -> f32 {
    (&predictions - &labels)
        .mapv(|x| x.powi(2))
        .mean()
        .unwrap_or_default()
}

/// Coefficient of determination: `1 - SS_res / SS_tot`.
///
/// The total sum of squares is taken around the mean of `labels` itself, so
/// predicting that mean for every row scores exactly 0 and a perfect fit
/// scores exactly 1.
pub fn r_squared(labels: ArrayView2<f32>, predictions: ArrayView2<f32>) -> f32 {
    let residual = (&labels - &predictions).mapv(|x| x.powi(2)).sum();

    let mean = labels.mean().unwrap_or_default();
    let total = labels.mapv(|y| (y - mean).powi(2)).sum();

    1.0 - residual / total
}

#[cfg(test)]
mod test {
    use super::*;
    use ndarray::array;

    #[test]
    fn mse_of_exact_predictions_is_zero() {
        let labels = array![[1.0], [2.0], [3.0]];
        assert_eq!(mse(labels.view(), labels.view()), 0.0);
    }

    #[test]
    fn mse_averages_squared_residuals() {
        let predictions = array![[0.0], [0.0]];
        let labels = array![[1.0], [3.0]];
        // (1 + 9) / 2
        assert_eq!(mse(predictions.view(), labels.view()), 5.0);
    }

    #[test]
    fn r_squared_is_one_for_exact_predictions() {
        let labels = array![[1.0], [2.0], [3.0]];
        assert_eq!(r_squared(labels.view(), labels.view()), 1.0);
    }

    #[test]
    fn r_squared_is_zero_for_mean_predictions() {
        let labels = array![[1.0], [2.0], [3.0]];
        let predictions = array![[2.0], [2.0], [2.0]];
        assert_eq!(r_squared(labels.view(), predictions.view()), 0.0);
    }

    #[test]
    fn r_squared_is_negative_for_worse_than_mean() {
        let labels = array![[1.0], [2.0], [3.0]];
        let predictions = array![[3.0], [2.0], [1.0]];
        assert!(r_squared(labels.view(), predictions.view()) < 0.0);
    }
}
