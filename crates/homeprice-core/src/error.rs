use std::fmt;

/// Predictor column of a housing record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feature {
    Size,
    Rooms,
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feature::Size => write!(f, "size"),
            Feature::Rooms => write!(f, "rooms"),
        }
    }
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    #[error("dataset is empty")]
    EmptyDataset,
    #[error("degenerate feature: no variance in {feature}")]
    DegenerateFeature { feature: Feature },
    #[error("reduction task failed: {0}")]
    Reduction(String),
}

pub type ModelResult<T> = Result<T, ModelError>;
