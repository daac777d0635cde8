use crate::dataset::Dataset;
use crate::error::{ModelError, ModelResult};
use crate::model::solver::Coefficients;
use crate::stats::{r2_from_predictions, rmse};

use serde::Serialize;

/// Error summary of a coefficient set on a held-out dataset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Evaluation {
    pub samples: usize,
    pub mse: f64,
    pub rmse: f64,
    pub r2: Option<f64>,
}

pub fn mean_squared_error(test: &Dataset, coefficients: &Coefficients) -> ModelResult<f64> {
    if test.is_empty() {
        return Err(ModelError::EmptyDataset);
    }
    let total: f64 = test.iter().map(|r| (coefficients.predict(r) - r.price).powi(2)).sum();
    Ok(total / test.len() as f64)
}

pub fn evaluate(test: &Dataset, coefficients: &Coefficients) -> ModelResult<Evaluation> {
    let mse = mean_squared_error(test, coefficients)?;

    let y: Vec<f64> = test.iter().map(|r| r.price).collect();
    let y_hat: Vec<f64> = test.iter().map(|r| coefficients.predict(r)).collect();

    Ok(Evaluation {
        samples: test.len(),
        mse,
        rmse: rmse(&y, &y_hat).unwrap_or_else(|| mse.sqrt()),
        r2: r2_from_predictions(&y, &y_hat),
    })
}
