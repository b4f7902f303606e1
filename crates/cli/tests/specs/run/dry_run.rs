//! `mlp run --dry-run` specs

use crate::prelude::*;

#[test]
fn prints_mlflow_command() {
    Project::with_config()
        .mlp()
        .args(&["run", "--dry-run", "--steps", "download"])
        .passes()
        .stdout_eq(
            "mlflow run https://github.com/acme/ml-components#components/get_data \
             -e main -v main --env-manager conda \
             -P 'artifact_description=Raw file as downloaded' \
             -P artifact_name=sample.csv -P artifact_type=raw_data \
             -P sample=sample1.csv\n",
        );
}

#[test]
fn all_runs_default_steps_in_registry_order() {
    let out = Project::with_config()
        .mlp()
        .args(&["run", "--dry-run"])
        .passes()
        .stdout_lacks("test_regression_model");
    let stdout = out.stdout();
    let uris: Vec<&str> = stdout
        .lines()
        .filter_map(|l| l.split_whitespace().nth(2))
        .collect();
    assert_eq!(
        uris,
        vec![
            "https://github.com/acme/ml-components#components/get_data",
            "https://github.com/acme/rental-prices#src/basic_cleaning",
            "https://github.com/acme/rental-prices#src/data_check",
            "https://github.com/acme/ml-components#components/train_val_test_split",
            "https://github.com/acme/rental-prices#src/train_random_forest",
        ]
    );
}

#[test]
fn custom_launcher_command_is_shown() {
    Project::with_config()
        .mlp()
        .args(&["run", "--dry-run", "--steps", "data_split", "--mlflow-bin", "python -m mlflow"])
        .passes()
        .stdout_has("python -m mlflow run https://github.com/acme/ml-components#components/train_val_test_split");
}

#[test]
fn opt_in_step_runs_when_named() {
    Project::with_config()
        .mlp()
        .args(&["run", "--dry-run", "--steps", "test_regression_model"])
        .passes()
        .stdout_has("#components/test_regression_model")
        .stdout_has("-P mlflow_model=random_forest_export:prod")
        .stdout_has("-P test_dataset=test_data.csv:latest");
}

#[test]
fn overrides_reach_step_parameters() {
    Project::with_config()
        .mlp()
        .args(&["run", "--dry-run", "--steps", "basic_cleaning", "etl.min_price=20"])
        .passes()
        .stdout_has("-P min_price=20")
        .stdout_has("-P max_price=350");
}

#[test]
fn json_plan_lists_parameters() {
    let out = Project::with_config()
        .mlp()
        .args(&["run", "--dry-run", "--steps", "train_random_forest", "--format", "json"])
        .passes();
    let json = out.json();
    let plan = json.as_array().unwrap();
    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0]["step"], "train_random_forest");
    let params = &plan[0]["request"]["parameters"];
    assert_eq!(params["val_size"], 0.2);
    assert_eq!(params["output_artifact"], "random_forest_export");
    assert!(params["rf_config"].as_str().unwrap().ends_with("rf_config.json"));
}

#[test]
fn nothing_selected() {
    Project::with_config()
        .mlp()
        .args(&["run", "--dry-run", "--steps", "bogus"])
        .passes()
        .stdout_eq("No steps selected\n")
        .stderr_has("Ignored unknown steps: bogus");
}
