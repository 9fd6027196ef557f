use ndarray::Array2;
use serde::Deserialize;

use crate::error::{RegressionError, Result};

/// The JSON payload a training run is built from.
///
/// Field names follow the camelCase wire format
/// (`{features, labels, testFeatures, testLabels}`); the test split is
/// optional.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionData {
    pub features: Vec<Vec<f32>>,
    pub labels: Vec<Vec<f32>>,
    #[serde(default)]
    pub test_features: Vec<Vec<f32>>,
    #[serde(default)]
    pub test_labels: Vec<Vec<f32>>,
}

/// Converts row-major nested vectors into a dense matrix.
///
/// # Errors
/// `EmptyDataset` if there are no rows or the first row is empty,
/// `ShapeMismatch` if any row's length differs from the first row's.
pub fn to_matrix(rows: &[Vec<f32>]) -> Result<Array2<f32>> {
    let width = rows.first().map(Vec::len).unwrap_or(0);
    if width == 0 {
        return Err(RegressionError::EmptyDataset);
    }

    let mut data = Vec::with_capacity(rows.len() * width);
    for row in rows {
        if row.len() != width {
            return Err(RegressionError::ShapeMismatch {
                what: "row length",
                got: row.len(),
                expected: width,
            });
        }
        data.extend_from_slice(row);
    }

    // The length is rows.len() * width by construction.
    Ok(Array2::from_shape_vec((rows.len(), width), data).unwrap())
}
