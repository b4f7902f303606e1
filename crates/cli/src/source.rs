// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Where configuration comes from: file discovery and command-line overrides

use crate::error::MlpError;
use anyhow::Result;
use clap::Args;
use mlp_config::{Config, ConfigLoader, Override, DEFAULT_CONFIG_FILE};
use mlp_engine::STEPS_KEY;
use std::path::PathBuf;

/// Configuration arguments shared by every command
#[derive(Args, Debug, Clone)]
pub struct ConfigSource {
    /// Configuration file (defaults to ./config.toml)
    #[arg(short, long, env = "MLP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Config overrides, e.g. etl.min_price=20 main.steps=download
    #[arg(value_name = "KEY=VALUE")]
    pub overrides: Vec<String>,
}

impl ConfigSource {
    /// Load the configuration, failing if no file can be found
    ///
    /// `steps` is shorthand for a `main.steps` override applied last.
    pub fn load(&self, steps: Option<&str>) -> Result<Config> {
        let loader = self.loader(steps, true)?;
        Ok(loader.load().map_err(MlpError::config)?)
    }

    /// Load the configuration if one is available
    ///
    /// Returns `None` when no file exists at the default location and
    /// nothing was given on the command line.
    pub fn try_load(&self, steps: Option<&str>) -> Result<Option<Config>> {
        let loader = self.loader(steps, false)?;
        if loader.path().is_none() && self.overrides.is_empty() && steps.is_none() {
            return Ok(None);
        }
        Ok(Some(loader.load().map_err(MlpError::config)?))
    }

    fn loader(&self, steps: Option<&str>, require_file: bool) -> Result<ConfigLoader> {
        let mut loader = ConfigLoader::new();

        match &self.config {
            Some(path) if path.is_file() => loader = loader.file(path),
            Some(path) => return Err(MlpError::config_not_found(path).into()),
            None => {
                let default = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    tracing::debug!(path = %default.display(), "using config file from working directory");
                    loader = loader.file(default);
                } else if require_file && self.overrides.is_empty() {
                    return Err(MlpError::config_not_found(&default).into());
                }
            }
        }

        for raw in &self.overrides {
            let o: Override = raw.parse().map_err(|_| MlpError::invalid_override(raw))?;
            loader = loader.with_override(o);
        }
        if let Some(steps) = steps {
            loader = loader.with_override(Override::new(STEPS_KEY, steps));
        }

        Ok(loader)
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
