use std::{env, fs, num::NonZeroUsize};

use anyhow::{bail, Context};
use log::info;

use linreg::{dataset, LinearRegression, RegressionData, TrainOptions};

const LEARNING_RATE: f32 = 0.1;
const ITERATIONS: NonZeroUsize = NonZeroUsize::new(3).unwrap();
const BATCH_SIZE: NonZeroUsize = NonZeroUsize::new(10).unwrap();

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut args = env::args().skip(1);
    let Some(path) = args.next() else {
        bail!("usage: linreg <data.json> [iterations]");
    };

    let iterations = match args.next() {
        Some(raw) => raw
            .parse::<NonZeroUsize>()
            .context("iterations must be a positive integer")?,
        None => ITERATIONS,
    };

    let raw = fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
    let data: RegressionData =
        serde_json::from_str(&raw).with_context(|| format!("parsing {path}"))?;

    let features = dataset::to_matrix(&data.features)?;
    let labels = dataset::to_matrix(&data.labels)?;
    info!(
        "loaded {} sample(s) with {} feature(s)",
        features.nrows(),
        features.ncols()
    );

    let options = TrainOptions {
        learning_rate: LEARNING_RATE,
        iterations,
        batch_size: BATCH_SIZE,
    };
    let mut model = LinearRegression::new(features, labels, options)?;

    model.train();
    info!(
        "model trained: final mse={:?} lr={}",
        model.mse_history().first(),
        model.learning_rate()
    );
    println!("Model trained");

    if !data.test_features.is_empty() {
        let test_features = dataset::to_matrix(&data.test_features)?;
        let test_labels = dataset::to_matrix(&data.test_labels)?;
        let r2 = model.test(test_features.view(), test_labels.view())?;

        println!("The Coefficient of Determination is {r2}");
    }

    Ok(())
}
