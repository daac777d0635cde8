pub mod dataset;
pub mod error;
pub mod generate;
pub mod model;
pub mod source;
pub mod stats;

pub use dataset::{Columns, Dataset, Record};
pub use error::{Feature, ModelError, ModelResult};
pub use generate::{generate, write_records, GeneratorConfig, GeneratorError};
pub use model::{
    evaluate, mean_squared_error, predict, solve, Coefficients, Evaluation, LinearPriceModel,
};
pub use source::{DatasetSource, SourceError};
pub use stats::{Statistics, StatisticsEngine};
