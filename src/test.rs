#![cfg(test)]

use std::num::NonZeroUsize;

use ndarray::array;

use crate::{dataset, LinearRegression, RegressionData, TrainOptions};

fn options(learning_rate: f32, iterations: usize, batch_size: usize) -> TrainOptions {
    TrainOptions {
        learning_rate,
        iterations: NonZeroUsize::new(iterations).unwrap(),
        batch_size: NonZeroUsize::new(batch_size).unwrap(),
    }
}

#[test]
fn converges_on_y_equals_2x() {
    let features = array![[1.0], [2.0], [3.0], [4.0]];
    let labels = array![[2.0], [4.0], [6.0], [8.0]];

    let mut model = LinearRegression::new(features, labels, options(0.1, 100, 4)).unwrap();
    model.train();

    let prediction = model.predict(array![[5.0]].view()).unwrap();
    assert!(
        (prediction[[0, 0]] - 10.0).abs() < 0.5,
        "predicted {} for x = 5",
        prediction[[0, 0]]
    );

    let r2 = model
        .test(
            array![[1.5], [2.5], [3.5]].view(),
            array![[3.0], [5.0], [7.0]].view(),
        )
        .unwrap();
    assert!(r2 > 0.99, "got r2 = {r2}");
}

#[test]
fn converges_on_a_multivariate_plane() {
    // y = 3a - 2b + 1
    let features = array![
        [1.0, 1.0],
        [2.0, 1.0],
        [3.0, 2.0],
        [4.0, 3.0],
        [5.0, 2.0],
        [6.0, 4.0],
        [7.0, 5.0],
        [8.0, 3.0],
    ];
    let labels = features.map_axis(ndarray::Axis(1), |row| 3.0 * row[0] - 2.0 * row[1] + 1.0);
    let labels = labels.insert_axis(ndarray::Axis(1));

    let mut model =
        LinearRegression::new(features.clone(), labels.clone(), options(0.1, 500, 4)).unwrap();
    model.train();

    let r2 = model.test(features.view(), labels.view()).unwrap();
    assert!(r2 > 0.999, "got r2 = {r2}");
}

#[test]
fn full_run_from_json_payload() {
    let json = r#"{
        "features": [[1.0], [2.0], [3.0], [4.0], [5.0], [6.0]],
        "labels": [[3.0], [5.0], [7.0], [9.0], [11.0], [13.0]],
        "testFeatures": [[7.0], [8.0]],
        "testLabels": [[15.0], [17.0]]
    }"#;

    let data: RegressionData = serde_json::from_str(json).unwrap();
    let features = dataset::to_matrix(&data.features).unwrap();
    let labels = dataset::to_matrix(&data.labels).unwrap();

    let mut model = LinearRegression::new(features, labels, options(0.1, 200, 3)).unwrap();
    model.train();

    let test_features = dataset::to_matrix(&data.test_features).unwrap();
    let test_labels = dataset::to_matrix(&data.test_labels).unwrap();
    let r2 = model.test(test_features.view(), test_labels.view()).unwrap();

    assert!(r2 > 0.99, "got r2 = {r2}");
}

#[test]
fn adaptive_rate_recovers_from_an_oversized_step() {
    let features = array![[1.0], [2.0], [3.0], [4.0]];
    let labels = array![[2.0], [4.0], [6.0], [8.0]];

    // a rate this large overshoots at first; halving must rein it in
    let mut model = LinearRegression::new(features, labels, options(1.9, 200, 4)).unwrap();
    model.train();

    let history = model.mse_history();
    assert!(
        history[0] < history[history.len() - 1],
        "mse went from {} to {}",
        history[history.len() - 1],
        history[0]
    );

    let prediction = model.predict(array![[5.0]].view()).unwrap();
    assert!((prediction[[0, 0]] - 10.0).abs() < 0.5);
}
