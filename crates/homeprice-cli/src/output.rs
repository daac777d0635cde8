use homeprice_core::{Coefficients, Evaluation, LinearPriceModel, Statistics};

use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug)]
pub struct ParseFormatError(String);

impl fmt::Display for ParseFormatError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
impl std::error::Error for ParseFormatError {}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = ParseFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(ParseFormatError(format!("invalid format: {other}"))),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub coefficients: Coefficients,
    pub statistics: Statistics,
    pub evaluation: Evaluation,
}

impl Report {
    pub fn new(model: &LinearPriceModel, evaluation: Evaluation) -> Self {
        Self { coefficients: model.coefficients, statistics: model.stats, evaluation }
    }
}

pub fn render(report: &Report, format: OutputFormat) -> Result<String, serde_json::Error> {
    match format {
        OutputFormat::Text => {
            let c = &report.coefficients;
            Ok(format!(
                "Beta0: {:.2}, Beta1: {:.2}, Beta2: {:.2}\nMSE: {:.2}",
                c.beta0, c.beta1, c.beta2, report.evaluation.mse
            ))
        },
        OutputFormat::Json => serde_json::to_string_pretty(report),
    }
}
