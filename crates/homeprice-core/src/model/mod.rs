pub mod evaluate;
pub mod linear;
pub mod predict;
pub mod solver;

pub use evaluate::{evaluate, mean_squared_error, Evaluation};
pub use linear::LinearPriceModel;
pub use predict::predict;
pub use solver::{solve, Coefficients};
