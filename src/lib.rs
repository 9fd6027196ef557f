pub mod dataset;
pub mod error;
pub mod metrics;
pub mod optimization;
pub mod regression;
pub mod standardize;
mod test;

pub use dataset::RegressionData;
pub use error::{RegressionError, Result};
pub use regression::{LinearRegression, TrainOptions};
pub use standardize::Standardizer;
