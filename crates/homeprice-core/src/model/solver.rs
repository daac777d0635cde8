use crate::dataset::Record;
use crate::error::{Feature, ModelError, ModelResult};
use crate::model::predict::predict;
use crate::stats::Statistics;

use serde::Serialize;
use std::fmt;

/// Intercept and per-feature slopes of the price model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coefficients {
    pub beta0: f64,
    pub beta1: f64,
    pub beta2: f64,
}

impl fmt::Display for Coefficients {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "beta0: {}, beta1: {}, beta2: {}", self.beta0, self.beta1, self.beta2)
    }
}

impl Coefficients {
    pub fn from_val(beta0: f64, beta1: f64, beta2: f64) -> Self {
        Self { beta0, beta1, beta2 }
    }

    pub fn calculate(&self, size: f64, rooms: f64) -> f64 {
        predict(size, rooms, self.beta0, self.beta1, self.beta2)
    }

    pub fn predict(&self, record: &Record) -> f64 {
        self.calculate(record.size, record.rooms)
    }
}

/// Closed-form coefficients from the moment bundle.
///
/// Each slope is the simple-regression slope of price on that feature alone;
/// the size/rooms covariance is never consulted, so this is not the joint
/// least-squares fit when the two features are correlated.
pub fn solve(stats: &Statistics) -> ModelResult<Coefficients> {
    if stats.var_size == 0.0 {
        return Err(ModelError::DegenerateFeature { feature: Feature::Size });
    }
    if stats.var_rooms == 0.0 {
        return Err(ModelError::DegenerateFeature { feature: Feature::Rooms });
    }

    let beta1 = stats.cov_size_price / stats.var_size;
    let beta2 = stats.cov_rooms_price / stats.var_rooms;
    let beta0 = stats.mean_price - beta1 * stats.mean_size - beta2 * stats.mean_rooms;

    Ok(Coefficients { beta0, beta1, beta2 })
}
