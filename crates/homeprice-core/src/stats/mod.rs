pub mod engine;
pub mod moments;

pub use engine::{Statistics, StatisticsEngine};
pub use moments::{mean, population_covariance, population_variance, r2_from_predictions, rmse};
