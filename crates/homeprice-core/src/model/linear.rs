use crate::dataset::{Dataset, Record};
use crate::error::ModelResult;
use crate::model::evaluate::{evaluate, mean_squared_error, Evaluation};
use crate::model::solver::{solve, Coefficients};
use crate::stats::{Statistics, StatisticsEngine};

use std::fmt;

/// Coefficients together with the statistics they were solved from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearPriceModel {
    pub stats: Statistics,
    pub coefficients: Coefficients,
}

impl fmt::Display for LinearPriceModel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LinearPriceModel, n: {}, {}", self.stats.n, self.coefficients)
    }
}

impl LinearPriceModel {
    pub fn fit(train: &Dataset) -> ModelResult<Self> {
        Self::warn_if_tiny(train);
        let stats = StatisticsEngine::compute(train)?;
        Self::from_stats(stats)
    }

    pub async fn fit_async(train: &Dataset) -> ModelResult<Self> {
        Self::warn_if_tiny(train);
        let stats = StatisticsEngine::compute_async(train).await?;
        Self::from_stats(stats)
    }

    pub fn from_stats(stats: Statistics) -> ModelResult<Self> {
        let coefficients = solve(&stats)?;
        log::info!("fitted on {} records: {}", stats.n, coefficients);
        Ok(Self { stats, coefficients })
    }

    pub fn predict(&self, record: &Record) -> f64 {
        self.coefficients.predict(record)
    }

    pub fn mse(&self, test: &Dataset) -> ModelResult<f64> {
        mean_squared_error(test, &self.coefficients)
    }

    pub fn evaluate(&self, test: &Dataset) -> ModelResult<Evaluation> {
        evaluate(test, &self.coefficients)
    }

    fn warn_if_tiny(train: &Dataset) {
        if train.len() == 1 {
            log::warn!("training on a single record, every feature is constant");
        }
    }
}
