// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Errors as the user sees them, with pipeline-specific hints

use mlp_adapters::LaunchError;
use mlp_config::ConfigError;
use mlp_core::Step;
use mlp_engine::DriverError;
use std::fmt;
use std::path::Path;

/// A failure rendered for the terminal, with hints on how to recover
#[derive(Debug)]
pub struct MlpError {
    pub message: String,
    pub context: Vec<String>,
    pub suggestions: Vec<String>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl MlpError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Vec::new(),
            suggestions: Vec::new(),
            source: None,
        }
    }

    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        self.context.push(ctx.into());
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestions.push(suggestion.into());
        self
    }

    pub fn with_source<E: std::error::Error + Send + Sync + 'static>(mut self, source: E) -> Self {
        self.source = Some(Box::new(source));
        self
    }
}

impl fmt::Display for MlpError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "error: {}", self.message)?;

        if !self.context.is_empty() {
            writeln!(f)?;
            for line in &self.context {
                writeln!(f, "  -> {}", line)?;
            }
        }

        if !self.suggestions.is_empty() {
            writeln!(f)?;
            writeln!(f, "suggestions:")?;
            for (n, suggestion) in self.suggestions.iter().enumerate() {
                writeln!(f, "  {}. {}", n + 1, suggestion)?;
            }
        }

        Ok(())
    }
}

impl std::error::Error for MlpError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl MlpError {
    /// Error for when no configuration file can be found.
    pub fn config_not_found(path: &Path) -> Self {
        MlpError::new(format!("Config file '{}' not found", path.display()))
            .with_suggestion("Pass a config file: mlp run --config path/to/config.toml")
            .with_suggestion("Or set MLP_CONFIG to the config file path")
    }

    /// Error for a malformed `key=value` override.
    pub fn invalid_override(raw: &str) -> Self {
        MlpError::new(format!("Invalid override '{}'", raw))
            .with_context("Overrides take the form dotted.key=value")
            .with_suggestion("Example: mlp run etl.min_price=20 main.steps=download")
    }

    /// Error for a configuration problem.
    pub fn config(err: ConfigError) -> Self {
        let base = MlpError::new(err.to_string());
        let base = match &err {
            ConfigError::MissingKey(key) => base
                .with_context("An active step reads this key when it runs")
                .with_suggestion(format!("Add '{}' to the config file", key))
                .with_suggestion(format!("Or pass it on the command line: {}=<value>", key)),
            ConfigError::Toml(_) => {
                base.with_suggestion("Check the config file for TOML syntax errors")
            }
            ConfigError::UnresolvedReference { reference, .. } => base
                .with_suggestion(format!("Define '{}' or fix the ${{...}} reference", reference)),
            _ => base,
        };
        base.with_source(err)
    }

    /// Error for when the launcher executable cannot be started.
    pub fn launcher_not_found(step: Step, program: &str) -> Self {
        MlpError::new(format!("Cannot launch step '{}': '{}' not found", step, program))
            .with_context("Steps are run with `mlflow run`")
            .with_suggestion("Install mlflow: pip install mlflow")
            .with_suggestion("Point at another launcher: mlp run --mlflow-bin 'python -m mlflow'")
            .with_suggestion("Preview the launches without mlflow: mlp run --dry-run")
    }

    /// Error for a step that ran and failed.
    pub fn step_failed(step: Step, err: LaunchError) -> Self {
        let mut e = MlpError::new(format!("Step '{}' failed: {}", step, err));
        if let LaunchError::Failed { stderr, .. } = &err {
            for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
                e = e.with_context(line.to_string());
            }
        }
        e.with_suggestion("Remaining steps were not run")
            .with_suggestion(format!("Re-run from this step: mlp run --steps {}", step))
            .with_source(err)
    }

    /// Error for active steps whose config keys are missing.
    pub fn missing_keys(missing: &[(Step, Vec<&str>)]) -> Self {
        let mut e = MlpError::new("Configuration is missing keys for active steps");
        for (step, keys) in missing {
            e = e.with_context(format!("{}: {}", step, keys.join(", ")));
        }
        e.with_suggestion("Add the keys to the config file or pass them as key=value")
    }

    /// Error for a run cancelled from the terminal.
    pub fn interrupted() -> Self {
        MlpError::new("Interrupted").with_context("The running step was stopped and scratch files removed")
    }
}

impl From<DriverError> for MlpError {
    fn from(err: DriverError) -> Self {
        match err {
            DriverError::Config(e) => MlpError::config(e),
            DriverError::Launch {
                step,
                source: LaunchError::NotFound(program),
            } => MlpError::launcher_not_found(step, &program),
            DriverError::Launch { step, source } => MlpError::step_failed(step, source),
            other => MlpError::new(other.to_string()).with_source(other),
        }
    }
}
