use homeprice_core::source::{CsvFileSource, InMemorySource};
use homeprice_core::{
    generate, write_records, Dataset, DatasetSource, Feature, GeneratorConfig, LinearPriceModel,
    ModelError, Record,
};

use approx::assert_relative_eq;
use std::fs::File;

#[test]
fn generated_file_trains_and_scores() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("train.csv");

    let cfg = GeneratorConfig::default().with_count(400).with_seed(Some(2024));
    let train = generate(&cfg, &mut cfg.rng()).unwrap();
    write_records(File::create(&path).unwrap(), &train).unwrap();

    let loaded = CsvFileSource::new(vec![path.display().to_string()], true).fetch().unwrap();
    assert_eq!(loaded, train);

    let model = LinearPriceModel::fit(&loaded).unwrap();
    let test_cfg = cfg.clone().with_seed(Some(99)).with_count(1000);
    let test = generate(&test_cfg, &mut test_cfg.rng()).unwrap();

    let mse = model.mse(&test).unwrap();
    assert!(mse.is_finite());
    assert!(mse >= 0.0);

    let report = model.evaluate(&test).unwrap();
    assert_eq!(report.samples, 1000);
    assert_eq!(report.mse, mse);
}

#[test]
fn three_house_scenario() {
    let source = InMemorySource::new(vec![
        Record::new(100., 2., 1000.),
        Record::new(200., 3., 2000.),
        Record::new(300., 4., 3000.),
    ]);
    let data = source.fetch().unwrap();
    let model = LinearPriceModel::fit(&data).unwrap();

    assert_relative_eq!(model.stats.mean_size, 200.0);
    assert_relative_eq!(model.stats.var_size, 20000.0 / 3.0, max_relative = 1e-12);
    assert_relative_eq!(model.coefficients.beta0, -3000.0, max_relative = 1e-9);
    assert_relative_eq!(model.coefficients.beta1, 10.0, max_relative = 1e-9);
    assert_relative_eq!(model.coefficients.beta2, 1000.0, max_relative = 1e-9);
    // per-feature slopes overshoot on the outer rows: predictions 0, 2000, 4000
    assert_relative_eq!(model.mse(&data).unwrap(), 2_000_000.0 / 3.0, max_relative = 1e-9);
}

#[test]
fn constant_size_is_degenerate() {
    let data: Dataset = [(150., 2., 900.), (150., 3., 1000.), (150., 5., 1300.)]
        .into_iter()
        .map(Record::from)
        .collect();
    assert_eq!(
        LinearPriceModel::fit(&data),
        Err(ModelError::DegenerateFeature { feature: Feature::Size })
    );
}

#[test]
fn empty_sets_are_rejected() {
    let empty = Dataset::default();
    assert_eq!(LinearPriceModel::fit(&empty), Err(ModelError::EmptyDataset));

    let data: Dataset =
        [(100., 2., 1000.), (200., 4., 2000.)].into_iter().map(Record::from).collect();
    let model = LinearPriceModel::fit(&data).unwrap();
    assert_eq!(model.mse(&empty), Err(ModelError::EmptyDataset));
}
