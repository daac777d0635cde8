use crate::error::{ModelError, ModelResult};

pub fn mean(values: &[f64]) -> ModelResult<f64> {
    if values.is_empty() {
        return Err(ModelError::EmptyDataset);
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population variance (divisor n) around a precomputed mean.
///
/// A column whose values are all equal yields exactly `0.0`, even when the
/// mean picked up rounding error on the way.
pub fn population_variance(values: &[f64], mean: f64) -> f64 {
    let Some(&first) = values.first() else {
        return f64::NAN;
    };
    if values.iter().all(|&v| v == first) {
        return 0.0;
    }
    let ss: f64 = values.iter().map(|&v| (v - mean).powi(2)).sum();
    ss / values.len() as f64
}

/// Population covariance (divisor n) of two equally long columns.
pub fn population_covariance(x: &[f64], mean_x: f64, y: &[f64], mean_y: f64) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    if x.is_empty() {
        return f64::NAN;
    }
    let sxy: f64 = x.iter().zip(y).map(|(&xi, &yi)| (xi - mean_x) * (yi - mean_y)).sum();
    sxy / x.len() as f64
}

/// Sum of squared residuals, or `None` when the columns differ in length.
fn residual_sum_of_squares(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    (y.len() == y_hat.len()).then(|| y.iter().zip(y_hat).map(|(&a, &b)| (a - b).powi(2)).sum())
}

/// Root of the mean squared residual. Empty input has no rmse.
pub fn rmse(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.is_empty() {
        return None;
    }
    residual_sum_of_squares(y, y_hat).map(|ss| (ss / y.len() as f64).sqrt())
}

/// `1 - ss_res / ss_tot`. Undefined below two points or when `y` is flat.
pub fn r2_from_predictions(y: &[f64], y_hat: &[f64]) -> Option<f64> {
    if y.len() < 2 {
        return None;
    }
    let ss_res = residual_sum_of_squares(y, y_hat)?;
    let y_mean = y.iter().sum::<f64>() / y.len() as f64;
    let ss_tot: f64 = y.iter().map(|&v| (v - y_mean).powi(2)).sum();
    (ss_tot != 0.0).then(|| 1.0 - ss_res / ss_tot)
}
