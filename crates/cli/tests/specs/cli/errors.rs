//! Error reporting specs

use crate::prelude::*;

#[test]
fn run_without_config_file_fails() {
    Project::empty()
        .mlp()
        .args(&["run"])
        .fails()
        .stderr_has("Config file 'config.toml' not found")
        .stderr_has("--config");
}

#[test]
fn explicit_config_path_must_exist() {
    Project::with_config()
        .mlp()
        .args(&["run", "--config", "missing.toml"])
        .fails()
        .stderr_has("Config file 'missing.toml' not found");
}

#[test]
fn config_env_var_is_honored() {
    let project = Project::empty();
    project.file("conf/pipeline.toml", PIPELINE_CONFIG);
    project
        .mlp()
        .env("MLP_CONFIG", "conf/pipeline.toml")
        .args(&["run", "--dry-run", "--steps", "download"])
        .passes()
        .stdout_has("get_data");
}

#[test]
fn malformed_override_fails() {
    Project::with_config()
        .mlp()
        .args(&["run", "--dry-run", "min_price"])
        .fails()
        .stderr_has("Invalid override 'min_price'");
}

#[test]
fn missing_key_for_active_step_fails() {
    let project = Project::empty();
    project.file(
        "config.toml",
        r#"
[main]
components_repository = "https://github.com/acme/ml-components#components"
project_name = "nyc_airbnb"
experiment_name = "development"
steps = "download"
"#,
    );
    project
        .mlp()
        .args(&["run", "--dry-run"])
        .fails()
        .stderr_has("missing required config key: etl.sample")
        .stderr_has("etl.sample=<value>");
}

#[test]
fn malformed_toml_fails() {
    let project = Project::empty();
    project.file("config.toml", "[main\nsteps = \"all\"\n");
    project
        .mlp()
        .args(&["config"])
        .fails()
        .stderr_has("TOML parse error");
}

#[test]
fn dangling_reference_fails() {
    Project::with_config()
        .mlp()
        .args(&["config", "etl.sample=${etl.nope}"])
        .fails()
        .stderr_has("unresolved reference ${etl.nope}");
}
