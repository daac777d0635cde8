use clap::{ArgAction, Args, Parser, Subcommand, ValueHint};
use std::path::PathBuf;

use homeprice_core::GeneratorConfig;

use crate::cmd::config::{Action, Config, Fit, Generate, TestSource, TrainSource};
use crate::output::OutputFormat;

use homeprice_core::source::DEFAULT_DATA_URL;

#[derive(Debug, Parser)]
#[command(
    name = "homeprice",
    about = "Fit a linear house price model and report its test error",
    version,
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short = 'v', long = "verbose", action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Train on a dataset and score the model on held-out data
    Fit(FitArgs),

    /// Write a synthetic dataset as CSV
    Generate(GenerateArgs),
}

/* ------------------------- fit ------------------------- */

#[derive(Debug, Args)]
pub struct FitArgs {
    /// Training CSV files or glob patterns (quote the pattern)
    #[arg(num_args = 1..,
        value_hint = ValueHint::AnyPath,
        short = 'i', long = "input",
        value_name = "PATH",
        conflicts_with = "url")]
    pub inputs: Vec<String>,

    /// Fetch the training CSV over HTTP (default when no --input is given)
    #[arg(short = 'u', long = "url", value_hint = ValueHint::Url)]
    pub url: Option<String>,

    /// Input files have no header row
    #[arg(long = "no-header")]
    pub no_header: bool,

    /// Held-out CSV files; synthetic records are generated when omitted
    #[arg(num_args = 1..,
        value_hint = ValueHint::AnyPath,
        short = 't', long = "test-input",
        value_name = "PATH")]
    pub test_inputs: Vec<String>,

    /// Number of synthetic test records
    #[arg(short = 'n', long = "test-count", default_value_t = 1000)]
    pub test_count: usize,

    /// Seed for synthetic test records (random when omitted)
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Output format: text or json
    #[arg(short = 'f', long = "format", default_value = "text")]
    pub format: OutputFormat,
}

/* ----------------------- generate ----------------------- */

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Number of records
    #[arg(short = 'n', long = "count", default_value_t = 1000)]
    pub count: usize,

    /// Seed (random when omitted)
    #[arg(short = 's', long = "seed")]
    pub seed: Option<u64>,

    /// Output file, stdout when omitted
    #[arg(short = 'o', long = "output", value_hint = ValueHint::FilePath)]
    pub output: Option<PathBuf>,
}

// -------- Map CLI -> Config/Action types --------

impl Cli {
    pub fn into_config(self) -> Config {
        match self.command {
            Commands::Fit(args) => {
                let train = if !args.inputs.is_empty() {
                    TrainSource::Files(args.inputs)
                } else {
                    TrainSource::Url(args.url.unwrap_or_else(|| DEFAULT_DATA_URL.to_owned()))
                };
                let test = if !args.test_inputs.is_empty() {
                    TestSource::Files(args.test_inputs)
                } else {
                    TestSource::Synthetic(
                        GeneratorConfig::default().with_count(args.test_count).with_seed(args.seed),
                    )
                };
                Config {
                    action: Action::Fit(Fit {
                        train,
                        test,
                        has_header: !args.no_header,
                        format: args.format,
                    }),
                }
            },

            Commands::Generate(args) => Config {
                action: Action::Generate(Generate {
                    generator: GeneratorConfig::default()
                        .with_count(args.count)
                        .with_seed(args.seed),
                    output: args.output,
                }),
            },
        }
    }
}
