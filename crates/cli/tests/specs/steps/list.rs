//! `mlp steps` specs

use crate::prelude::*;

#[test]
fn lists_registry_without_config() {
    let out = Project::empty().mlp().args(&["steps"]).passes();
    let stdout = out.stdout();
    let lines: Vec<&str> = stdout.lines().collect();

    assert_eq!(lines.len(), 7);
    assert!(lines[0].starts_with("STEP"));
    assert!(!lines[0].contains("ACTIVE"));
    assert!(lines[1].starts_with("download"));
    assert!(lines[6].starts_with("test_regression_model"));
    assert!(lines[6].ends_with("no"));
}

#[test]
fn marks_active_steps_from_config() {
    let out = Project::with_config()
        .mlp()
        .args(&["steps", "--steps", "data_split,bogus,download"])
        .passes()
        .stdout_has("ACTIVE")
        .stdout_has("Ignored unknown steps: bogus");
    let stdout = out.stdout();

    let active: Vec<&str> = stdout
        .lines()
        .skip(1)
        .filter(|l| l.ends_with(" yes") && !l.is_empty())
        .filter_map(|l| l.split_whitespace().next())
        .collect();
    assert_eq!(active, vec!["download", "data_split"]);
}

#[test]
fn json_format() {
    let out = Project::with_config()
        .mlp()
        .args(&["steps", "--format", "json"])
        .passes();
    let json = out.json();
    let steps = json["steps"].as_array().unwrap();
    assert_eq!(steps.len(), 6);
    assert_eq!(steps[3]["step"], "data_split");
    assert_eq!(steps[3]["package"], "train_val_test_split");
    assert_eq!(steps[5]["default"], false);
    assert_eq!(steps[5]["active"], false);
}

#[test]
fn check_passes_for_complete_config() {
    Project::with_config()
        .mlp()
        .args(&[
            "steps",
            "--check",
            "--steps",
            "download,basic_cleaning,data_check,data_split,train_random_forest,test_regression_model",
        ])
        .passes();
}

#[test]
fn check_reports_missing_keys() {
    let project = Project::empty();
    project.file(
        "config.toml",
        r#"
[main]
model_repository = "https://github.com/acme/rental-prices#src"
steps = "data_check"
"#,
    );
    project
        .mlp()
        .args(&["steps", "--check"])
        .fails()
        .stderr_has("missing keys for active steps")
        .stderr_has("data_check: data_check.csv, data_check.ref");
}
