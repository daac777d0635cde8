use crate::dataset::{Dataset, Record};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::io::Write;
use std::ops::Range;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeneratorError {
    #[error("record count must be positive")]
    ZeroCount,
    #[error("invalid {name} range: {start}..{end}")]
    InvalidRange { name: &'static str, start: f64, end: f64 },
}

/// Noise-free synthetic housing data: `price = size * size_weight + rooms * rooms_weight`.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    pub count: usize,
    pub size_range: Range<f64>,
    pub rooms_range: Range<f64>,
    pub size_weight: f64,
    pub rooms_weight: f64,
    /// Fixed seed for reproducible sets; `None` draws from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            count: 1000,
            size_range: 120.0..500.0,
            rooms_range: 4.0..13.0,
            size_weight: 1200.0,
            rooms_weight: 500.0,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    pub fn validate(&self) -> Result<(), GeneratorError> {
        if self.count == 0 {
            return Err(GeneratorError::ZeroCount);
        }
        check_range("size", &self.size_range)?;
        check_range("rooms", &self.rooms_range)
    }

    pub fn price(&self, size: f64, rooms: f64) -> f64 {
        size * self.size_weight + rooms * self.rooms_weight
    }
}

fn check_range(name: &'static str, r: &Range<f64>) -> Result<(), GeneratorError> {
    if !(r.start.is_finite() && r.end.is_finite()) || r.start >= r.end {
        return Err(GeneratorError::InvalidRange { name, start: r.start, end: r.end });
    }
    Ok(())
}

/// Draw `cfg.count` records from `rng`.
pub fn generate<R: Rng>(cfg: &GeneratorConfig, rng: &mut R) -> Result<Dataset, GeneratorError> {
    cfg.validate()?;
    let data: Dataset = (0..cfg.count)
        .map(|_| {
            let size = rng.random_range(cfg.size_range.clone());
            let rooms = rng.random_range(cfg.rooms_range.clone());
            Record::new(size, rooms, cfg.price(size, rooms))
        })
        .collect();
    log::debug!("generated {} synthetic records", data.len());
    Ok(data)
}

/// Write `size,rooms,price` rows with a header line.
pub fn write_records<W: Write>(writer: W, data: &Dataset) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for record in data {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}
