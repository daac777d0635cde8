use homeprice_core::source::{CsvFileSource, HttpCsvSource};
use homeprice_core::{
    generate, write_records, Dataset, DatasetSource, GeneratorConfig, GeneratorError,
    LinearPriceModel, ModelError, SourceError,
};

use crate::output::{render, OutputFormat, Report};

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

/* =================== Public configuration types =================== */

#[derive(Debug)]
pub struct Config {
    pub action: Action,
}

#[derive(Debug, Clone)]
pub enum Action {
    Fit(Fit),
    Generate(Generate),
}

#[derive(Debug, Clone)]
pub enum TrainSource {
    Files(Vec<String>),
    Url(String),
}

#[derive(Debug, Clone)]
pub enum TestSource {
    Files(Vec<String>),
    Synthetic(GeneratorConfig),
}

#[derive(Debug, Clone)]
pub struct Fit {
    pub train: TrainSource,
    pub test: TestSource,
    pub has_header: bool,
    pub format: OutputFormat,
}

#[derive(Debug, Clone)]
pub struct Generate {
    pub generator: GeneratorConfig,
    pub output: Option<PathBuf>,
}

/* =================== Error type (no process::exit) =================== */

#[derive(thiserror::Error, Debug)]
pub enum CmdError {
    #[error("failed to load data: {0}")]
    Source(#[from] SourceError),
    #[error("{0}")]
    Model(#[from] ModelError),
    #[error("bad generator settings: {0}")]
    Generator(#[from] GeneratorError),
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/* =================== Entry point =================== */

impl Config {
    pub fn run(&self) -> Result<(), CmdError> {
        match &self.action {
            Action::Fit(f) => self.run_fit(f),
            Action::Generate(g) => self.run_generate(g),
        }
    }
}

/* =================== Actions =================== */

impl Config {
    fn run_fit(&self, f: &Fit) -> Result<(), CmdError> {
        // sources block on file or network reads, so both sets are loaded
        // before the runtime exists
        let train_source: Box<dyn DatasetSource> = match &f.train {
            TrainSource::Files(inputs) => {
                Box::new(CsvFileSource::new(inputs.clone(), f.has_header))
            },
            TrainSource::Url(url) => Box::new(HttpCsvSource::new(url.clone(), f.has_header)),
        };
        let train = train_source.fetch()?;
        let test = load_test_set(&f.test, f.has_header)?;
        log::info!("training on {} records, testing on {}", train.len(), test.len());

        let runtime = tokio::runtime::Builder::new_multi_thread().enable_all().build()?;
        let model = runtime.block_on(LinearPriceModel::fit_async(&train))?;
        let evaluation = model.evaluate(&test)?;

        let report = Report::new(&model, evaluation);
        let stdout = io::stdout();
        let mut out = stdout.lock();
        writeln!(out, "{}", render(&report, f.format)?)?;
        Ok(())
    }

    fn run_generate(&self, g: &Generate) -> Result<(), CmdError> {
        let data = generate(&g.generator, &mut g.generator.rng())?;
        match &g.output {
            Some(path) => {
                write_records(File::create(path)?, &data)?;
                log::info!("wrote {} records to {}", data.len(), path.display());
            },
            None => write_records(io::stdout().lock(), &data)?,
        }
        Ok(())
    }
}

fn load_test_set(test: &TestSource, has_header: bool) -> Result<Dataset, CmdError> {
    match test {
        TestSource::Files(inputs) => Ok(CsvFileSource::new(inputs.clone(), has_header).fetch()?),
        TestSource::Synthetic(cfg) => Ok(generate(cfg, &mut cfg.rng())?),
    }
}
