//! Shared helpers for CLI specs

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// A complete pipeline config
pub const PIPELINE_CONFIG: &str = r#"
[main]
components_repository = "https://github.com/acme/ml-components#components"
model_repository = "https://github.com/acme/rental-prices#src"
project_name = "nyc_airbnb"
experiment_name = "development"
steps = "all"

[etl]
sample = "sample1.csv"
sample_dataset = "sample.csv:latest"
cleaning_output_dataset = "clean_sample.csv"
cleaning_output_type = "clean_sample"
cleaning_output_description = "Data with outliers and null values removed"
min_price = 10
max_price = 350

[data_check]
csv = "clean_sample.csv:latest"
ref = "clean_sample.csv:reference"
kl_threshold = 0.2
min_price = "${etl.min_price}"
max_price = "${etl.max_price}"
min_size = 15000
max_size = 1000000

[modeling]
input = "clean_sample.csv:latest"
test_size = 0.2
val_size = 0.2
random_seed = 42
stratify_by = "neighbourhood_group"
trainval_artifact = "trainval_data.csv:latest"
max_tfidf_features = 5
training_output_artifact = "random_forest_export"
prod_model_artifact = "random_forest_export:prod"
test_artifact = "test_data.csv:latest"

[modeling.random_forest]
n_estimators = 100
max_depth = 15
max_features = 0.5
"#;

/// Stub `mlflow` that appends one line per launch to `launches.log`
/// (`<uri> <WANDB_PROJECT> <WANDB_RUN_GROUP> <params...>`).
/// A uri containing `data_check` fails when `FAIL_DATA_CHECK` is set.
const STUB_MLFLOW: &str = r#"uri="$2"
shift 8
echo "$uri $WANDB_PROJECT $WANDB_RUN_GROUP $*" >> "$(dirname "$0")/launches.log"
case "$uri" in
  *data_check*)
    if [ -n "$FAIL_DATA_CHECK" ]; then
      echo "FAILED test_row_count: assert 10 > 15000" >&2
      exit 1
    fi
    ;;
esac
echo "=== Run (ID 'run-$$') succeeded ===" >&2
"#;

/// A scratch working directory for one spec
pub struct Project {
    dir: TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    /// A project with `config.toml` holding [`PIPELINE_CONFIG`]
    pub fn with_config() -> Self {
        let project = Self::empty();
        project.file("config.toml", PIPELINE_CONFIG);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Install the stub launcher; returns the `--mlflow-bin` value
    pub fn stub_mlflow(&self) -> String {
        let script = self.file("stub/mlflow.sh", STUB_MLFLOW);
        format!("sh {}", script.display())
    }

    /// Lines the stub launcher recorded, one per launch
    pub fn launches(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("stub/launches.log"))
            .map(|s| s.lines().map(String::from).collect())
            .unwrap_or_default()
    }

    pub fn mlp(&self) -> CliBuilder {
        let mut cmd = Command::cargo_bin("mlp").unwrap();
        cmd.current_dir(self.dir.path())
            .env_remove("MLP_CONFIG")
            .env_remove("MLP_MLFLOW_BIN")
            .env_remove("MLP_LOG")
            .env_remove("WANDB_PROJECT")
            .env_remove("WANDB_RUN_GROUP");
        CliBuilder { cmd }
    }
}

pub struct CliBuilder {
    cmd: Command,
}

impl CliBuilder {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.cmd.args(args);
        self
    }

    pub fn env(mut self, key: &str, value: &str) -> Self {
        self.cmd.env(key, value);
        self
    }

    /// Run and require exit code 0
    pub fn passes(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(
            run.output.status.success(),
            "expected success, got {:?}\nstdout:\n{}\nstderr:\n{}",
            run.output.status.code(),
            run.stdout(),
            run.stderr()
        );
        run
    }

    /// Run and require a non-zero exit code
    pub fn fails(mut self) -> RunAssert {
        let output = self.cmd.output().unwrap();
        let run = RunAssert { output };
        assert!(
            !run.output.status.success(),
            "expected failure\nstdout:\n{}\nstderr:\n{}",
            run.stdout(),
            run.stderr()
        );
        run
    }
}

pub struct RunAssert {
    output: Output,
}

impl RunAssert {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(stdout.contains(needle), "stdout missing {needle:?}:\n{stdout}");
        self
    }

    pub fn stdout_lacks(self, needle: &str) -> Self {
        let stdout = self.stdout();
        assert!(!stdout.contains(needle), "stdout has {needle:?}:\n{stdout}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let stderr = self.stderr();
        assert!(stderr.contains(needle), "stderr missing {needle:?}:\n{stderr}");
        self
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.output.stdout).unwrap()
    }
}
