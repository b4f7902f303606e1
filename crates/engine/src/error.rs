// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for the pipeline driver

use mlp_adapters::LaunchError;
use mlp_config::ConfigError;
use mlp_core::Step;
use thiserror::Error;

/// Errors that abort a pipeline run
#[derive(Debug, Error)]
pub enum DriverError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("scratch directory error: {0}")]
    Scratch(#[source] std::io::Error),
    #[error("failed to serialize rf_config: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("step {step} failed: {source}")]
    Launch {
        step: Step,
        #[source]
        source: LaunchError,
    },
}
