// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Scratch directory and generated step inputs

use crate::DriverError;
use mlp_config::Config;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Config sub-tree handed to the training step as a JSON file
pub const RF_CONFIG_KEY: &str = "modeling.random_forest";
/// File name of the serialized sub-tree inside the scratch directory
pub const RF_CONFIG_FILE: &str = "rf_config.json";

/// Create the scratch directory for one run
///
/// The directory is removed when the returned handle is dropped.
pub fn create_scratch(parent: Option<&Path>) -> Result<TempDir, DriverError> {
    let mut builder = tempfile::Builder::new();
    builder.prefix("mlp-");
    match parent {
        Some(parent) => builder.tempdir_in(parent),
        None => builder.tempdir(),
    }
    .map_err(DriverError::Scratch)
}

/// Serialize `modeling.random_forest` into `dir` and return its absolute path
pub fn write_rf_config(config: &Config, dir: &Path) -> Result<PathBuf, DriverError> {
    let json = config.to_json(RF_CONFIG_KEY)?;
    let path = std::path::absolute(dir.join(RF_CONFIG_FILE)).map_err(DriverError::Scratch)?;
    fs::write(&path, serde_json::to_vec_pretty(&json)?).map_err(DriverError::Scratch)?;

    tracing::debug!(path = %path.display(), "wrote rf_config");
    Ok(path)
}

#[cfg(test)]
#[path = "scratch_tests.rs"]
mod tests;
