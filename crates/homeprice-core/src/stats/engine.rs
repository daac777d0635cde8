use crate::dataset::{Columns, Dataset};
use crate::error::{ModelError, ModelResult};
use crate::stats::moments::{mean, population_covariance, population_variance};

use futures::future::try_join_all;
use serde::Serialize;
use std::sync::Arc;

/// First and second population moments of a training set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Statistics {
    pub n: usize,
    pub mean_size: f64,
    pub mean_rooms: f64,
    pub mean_price: f64,
    pub cov_size_price: f64,
    pub cov_rooms_price: f64,
    pub var_size: f64,
    pub var_rooms: f64,
}

#[derive(Debug, Clone, Copy)]
struct Means {
    size: f64,
    rooms: f64,
    price: f64,
}

impl Means {
    fn of(cols: &Columns) -> ModelResult<Self> {
        Ok(Self { size: mean(&cols.size)?, rooms: mean(&cols.rooms)?, price: mean(&cols.price)? })
    }
}

/// The four second-moment sums. Each one reads the shared columns and
/// returns its own scalar, so they can run in any order or all at once.
#[derive(Debug, Clone, Copy)]
enum Reduction {
    CovSizePrice,
    CovRoomsPrice,
    VarSize,
    VarRooms,
}

impl Reduction {
    const ALL: [Reduction; 4] = [
        Reduction::CovSizePrice,
        Reduction::CovRoomsPrice,
        Reduction::VarSize,
        Reduction::VarRooms,
    ];

    fn run(self, cols: &Columns, m: Means) -> f64 {
        match self {
            Reduction::CovSizePrice => {
                population_covariance(&cols.size, m.size, &cols.price, m.price)
            },
            Reduction::CovRoomsPrice => {
                population_covariance(&cols.rooms, m.rooms, &cols.price, m.price)
            },
            Reduction::VarSize => population_variance(&cols.size, m.size),
            Reduction::VarRooms => population_variance(&cols.rooms, m.rooms),
        }
    }
}

pub struct StatisticsEngine;

impl StatisticsEngine {
    /// Means first, then the four reductions forked on the rayon pool and
    /// joined before returning.
    pub fn compute(dataset: &Dataset) -> ModelResult<Statistics> {
        if dataset.is_empty() {
            return Err(ModelError::EmptyDataset);
        }
        let cols = dataset.columns();
        let means = Means::of(&cols)?;

        let ((cov_size_price, cov_rooms_price), (var_size, var_rooms)) = rayon::join(
            || {
                rayon::join(
                    || Reduction::CovSizePrice.run(&cols, means),
                    || Reduction::CovRoomsPrice.run(&cols, means),
                )
            },
            || {
                rayon::join(
                    || Reduction::VarSize.run(&cols, means),
                    || Reduction::VarRooms.run(&cols, means),
                )
            },
        );

        Ok(Self::bundle(
            cols.len(),
            means,
            [cov_size_price, cov_rooms_price, var_size, var_rooms],
        ))
    }

    /// Same contract as [`StatisticsEngine::compute`], with the reductions
    /// running as blocking tasks on the current tokio runtime.
    pub async fn compute_async(dataset: &Dataset) -> ModelResult<Statistics> {
        if dataset.is_empty() {
            return Err(ModelError::EmptyDataset);
        }
        let cols = Arc::new(dataset.columns());
        let means = Means::of(&cols)?;

        let tasks = Reduction::ALL.into_iter().map(|reduction| {
            let cols = Arc::clone(&cols);
            tokio::task::spawn_blocking(move || reduction.run(&cols, means))
        });

        // results come back in the order of Reduction::ALL
        let sums = try_join_all(tasks).await.map_err(|e| ModelError::Reduction(e.to_string()))?;
        let [cov_size_price, cov_rooms_price, var_size, var_rooms] = sums[..] else {
            return Err(ModelError::Reduction(format!("expected 4 results, got {}", sums.len())));
        };

        Ok(Self::bundle(
            cols.len(),
            means,
            [cov_size_price, cov_rooms_price, var_size, var_rooms],
        ))
    }

    fn bundle(n: usize, means: Means, sums: [f64; 4]) -> Statistics {
        let [cov_size_price, cov_rooms_price, var_size, var_rooms] = sums;
        let stats = Statistics {
            n,
            mean_size: means.size,
            mean_rooms: means.rooms,
            mean_price: means.price,
            cov_size_price,
            cov_rooms_price,
            var_size,
            var_rooms,
        };
        log::debug!("statistics over {n} records: {stats:?}");
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Record;
    use approx::assert_relative_eq;

    fn three_houses() -> Dataset {
        vec![(100., 2., 1000.), (200., 3., 2000.), (300., 4., 3000.)]
            .into_iter()
            .map(Record::from)
            .collect()
    }

    fn scattered(n: usize) -> Dataset {
        (0..n)
            .map(|i| {
                let x = i as f64;
                Record::new(120.0 + (x * 37.3) % 380.0, 4.0 + (x * 1.7) % 9.0, 1000.0 + x * 0.1)
            })
            .collect()
    }

    #[test]
    fn test_three_houses() {
        let s = StatisticsEngine::compute(&three_houses()).unwrap();

        assert_eq!(s.n, 3);
        assert_relative_eq!(s.mean_size, 200.0);
        assert_relative_eq!(s.mean_rooms, 3.0);
        assert_relative_eq!(s.mean_price, 2000.0);
        assert_relative_eq!(s.var_size, 6666.666666666667, max_relative = 1e-12);
        assert_relative_eq!(s.var_rooms, 0.6666666666666666, max_relative = 1e-12);
        assert_relative_eq!(s.cov_size_price, 66666.66666666667, max_relative = 1e-12);
        assert_relative_eq!(s.cov_rooms_price, 666.6666666666666, max_relative = 1e-12);
    }

    #[test]
    fn test_empty() {
        assert_eq!(StatisticsEngine::compute(&Dataset::default()), Err(ModelError::EmptyDataset));
    }

    #[test]
    fn test_single_record() {
        let data: Dataset = vec![Record::new(150., 3., 999.)].into();
        let s = StatisticsEngine::compute(&data).unwrap();
        assert_eq!(s.mean_size, 150.);
        assert_eq!(s.mean_rooms, 3.);
        assert_eq!(s.mean_price, 999.);
        assert_eq!(s.var_size, 0.);
        assert_eq!(s.var_rooms, 0.);
    }

    #[test]
    fn test_repeatable_bits() {
        let data = scattered(10_000);
        let a = StatisticsEngine::compute(&data).unwrap();
        let b = StatisticsEngine::compute(&data).unwrap();
        assert_eq!(a.cov_size_price.to_bits(), b.cov_size_price.to_bits());
        assert_eq!(a.cov_rooms_price.to_bits(), b.cov_rooms_price.to_bits());
        assert_eq!(a.var_size.to_bits(), b.var_size.to_bits());
        assert_eq!(a.var_rooms.to_bits(), b.var_rooms.to_bits());
    }

    #[test]
    fn test_variances_non_negative() {
        let s = StatisticsEngine::compute(&scattered(257)).unwrap();
        assert!(s.var_size >= 0.0);
        assert!(s.var_rooms >= 0.0);
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_async_matches_rayon() {
        let data = scattered(5_000);
        let sync = StatisticsEngine::compute(&data).unwrap();
        let task = StatisticsEngine::compute_async(&data).await.unwrap();
        assert_eq!(sync, task);
    }

    #[tokio::test]
    async fn test_async_empty() {
        let res = StatisticsEngine::compute_async(&Dataset::default()).await;
        assert_eq!(res, Err(ModelError::EmptyDataset));
    }
}
