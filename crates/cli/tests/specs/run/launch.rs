//! `mlp run` specs against a stub mlflow

use crate::prelude::*;
use std::path::Path;

#[test]
fn launches_selected_steps_once_each() {
    let project = Project::with_config();
    let mlflow = project.stub_mlflow();
    project
        .mlp()
        .args(&["run", "--mlflow-bin", &mlflow, "--steps", "download,data_split"])
        .passes()
        .stdout_has("download")
        .stdout_has("data_split")
        .stdout_has("run-");

    let launches = project.launches();
    assert_eq!(launches.len(), 2);
    assert!(launches[0].contains("#components/get_data "));
    assert!(launches[1].contains("#components/train_val_test_split "));
}

#[test]
fn caller_order_does_not_change_launch_order() {
    let project = Project::with_config();
    let mlflow = project.stub_mlflow();
    project
        .mlp()
        .args(&["run", "--mlflow-bin", &mlflow, "--steps", "data_split,download"])
        .passes();

    let launches = project.launches();
    assert_eq!(launches.len(), 2);
    assert!(launches[0].contains("get_data"));
    assert!(launches[1].contains("train_val_test_split"));
}

#[test]
fn child_sees_tracking_context() {
    let project = Project::with_config();
    let mlflow = project.stub_mlflow();
    project
        .mlp()
        .args(&["run", "--mlflow-bin", &mlflow, "--steps", "download", "main.experiment_name=prod"])
        .passes();

    let launches = project.launches();
    assert!(
        launches[0].contains(" nyc_airbnb prod "),
        "unexpected launch line: {}",
        launches[0]
    );
}

#[test]
fn unknown_steps_are_ignored() {
    let project = Project::with_config();
    let mlflow = project.stub_mlflow();
    project
        .mlp()
        .args(&["run", "--mlflow-bin", &mlflow, "--steps", "download,bogus"])
        .passes()
        .stderr_has("Ignored unknown steps: bogus");
    assert_eq!(project.launches().len(), 1);
}

#[test]
fn rf_config_file_is_removed_after_run() {
    let project = Project::with_config();
    let mlflow = project.stub_mlflow();
    project
        .mlp()
        .args(&["run", "--mlflow-bin", &mlflow, "--steps", "train_random_forest"])
        .passes();

    let launches = project.launches();
    assert_eq!(launches.len(), 1);
    let rf_config = launches[0]
        .split_whitespace()
        .find_map(|w| w.strip_prefix("rf_config="))
        .unwrap();
    assert!(rf_config.ends_with("rf_config.json"));
    assert!(Path::new(rf_config).is_absolute());
    assert!(!Path::new(rf_config).exists());
}

#[test]
fn failing_step_stops_the_run() {
    let project = Project::with_config();
    let mlflow = project.stub_mlflow();
    project
        .mlp()
        .env("FAIL_DATA_CHECK", "1")
        .args(&["run", "--mlflow-bin", &mlflow])
        .fails()
        .stderr_has("Step 'data_check' failed")
        .stderr_has("-> FAILED test_row_count")
        .stderr_has("mlp run --steps data_check");

    let launches = project.launches();
    assert_eq!(launches.len(), 3);
    assert!(launches.iter().all(|l| !l.contains("train_random_forest")));
}

#[test]
fn missing_launcher_fails() {
    Project::with_config()
        .mlp()
        .args(&["run", "--mlflow-bin", "/nonexistent/mlflow", "--steps", "download"])
        .fails()
        .stderr_has("'/nonexistent/mlflow' not found")
        .stderr_has("--dry-run");
}

#[test]
fn json_summary() {
    let project = Project::with_config();
    let mlflow = project.stub_mlflow();
    let out = project
        .mlp()
        .args(&["run", "--mlflow-bin", &mlflow, "--steps", "download", "--format", "json"])
        .passes();
    let json = out.json();
    assert_eq!(json["tracking"]["project"], "nyc_airbnb");
    assert_eq!(json["tracking"]["run_group"], "development");
    assert_eq!(json["completed"][0]["step"], "download");
    assert!(json["completed"][0]["result"]["run_id"]
        .as_str()
        .unwrap()
        .starts_with("run-"));
}
