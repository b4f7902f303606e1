// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-step launcher parameters

use crate::scratch::{write_rf_config, RF_CONFIG_KEY};
use crate::DriverError;
use mlp_config::Config;
use mlp_core::{LaunchRequest, Parameters, Step};
use std::path::Path;

/// Parameters copied from config leaves: (parameter name, config path)
fn config_sources(step: Step) -> &'static [(&'static str, &'static str)] {
    match step {
        Step::Download => &[("sample", "etl.sample")],
        Step::BasicCleaning => &[
            ("input_artifact", "etl.sample_dataset"),
            ("output_artifact", "etl.cleaning_output_dataset"),
            ("output_type", "etl.cleaning_output_type"),
            ("output_description", "etl.cleaning_output_description"),
            ("min_price", "etl.min_price"),
            ("max_price", "etl.max_price"),
        ],
        Step::DataCheck => &[
            ("csv", "data_check.csv"),
            ("ref", "data_check.ref"),
            ("kl_threshold", "data_check.kl_threshold"),
            ("min_price", "data_check.min_price"),
            ("max_price", "data_check.max_price"),
            ("min_size", "data_check.min_size"),
            ("max_size", "data_check.max_size"),
        ],
        Step::DataSplit => &[
            ("input", "modeling.input"),
            ("test_size", "modeling.test_size"),
            ("random_seed", "modeling.random_seed"),
            ("stratify_by", "modeling.stratify_by"),
        ],
        Step::TrainRandomForest => &[
            ("trainval_artifact", "modeling.trainval_artifact"),
            ("val_size", "modeling.val_size"),
            ("random_seed", "modeling.random_seed"),
            ("stratify_by", "modeling.stratify_by"),
            ("max_tfidf_features", "modeling.max_tfidf_features"),
            ("output_artifact", "modeling.training_output_artifact"),
        ],
        Step::TestRegressionModel => &[
            ("mlflow_model", "modeling.prod_model_artifact"),
            ("test_dataset", "modeling.test_artifact"),
        ],
    }
}

/// Parameters with constant values
fn fixed_values(step: Step) -> &'static [(&'static str, &'static str)] {
    match step {
        Step::Download => &[
            ("artifact_name", "sample.csv"),
            ("artifact_type", "raw_data"),
            ("artifact_description", "Raw file as downloaded"),
        ],
        Step::BasicCleaning
        | Step::DataCheck
        | Step::DataSplit
        | Step::TrainRandomForest
        | Step::TestRegressionModel => &[],
    }
}

/// Config paths a step reads when it runs
pub fn required_keys(step: Step) -> Vec<&'static str> {
    let mut keys = vec![step.repository().config_key()];
    keys.extend(config_sources(step).iter().map(|(_, path)| *path));
    if step == Step::TrainRandomForest {
        keys.push(RF_CONFIG_KEY);
    }
    keys
}

/// Build a step's parameter map
///
/// The training step first writes its `rf_config` file into `scratch`;
/// the file's absolute path becomes the `rf_config` parameter.
pub fn build_parameters(
    step: Step,
    config: &Config,
    scratch: &Path,
) -> Result<Parameters, DriverError> {
    let mut params = Parameters::new();

    if step == Step::TrainRandomForest {
        let rf_config = write_rf_config(config, scratch)?;
        params.insert("rf_config", rf_config.display().to_string());
    }

    for (name, path) in config_sources(step) {
        params.insert(*name, config.scalar(path)?);
    }
    for (name, value) in fixed_values(step) {
        params.insert(*name, *value);
    }

    Ok(params)
}

/// Build the full launch request for a step
///
/// The repository base is read before any parameter, so a missing
/// repository fails without writing `rf_config`.
pub fn build_request(
    step: Step,
    config: &Config,
    scratch: &Path,
) -> Result<LaunchRequest, DriverError> {
    let repository = config.str(step.repository().config_key())?;
    let parameters = build_parameters(step, config, scratch)?;
    Ok(LaunchRequest::new(step, repository, parameters))
}

#[cfg(test)]
#[path = "params_tests.rs"]
mod tests;
