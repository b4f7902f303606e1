// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Run-launcher adapters

mod dry_run;
mod mlflow;

pub use dry_run::DryRunLauncher;
pub use mlflow::MlflowLauncher;

// Test support - only compiled for tests or when explicitly requested
#[cfg(any(test, feature = "test-support"))]
mod fake;
#[cfg(any(test, feature = "test-support"))]
pub use fake::{FakeLauncher, LaunchCall};

use async_trait::async_trait;
use mlp_core::{LaunchRequest, RunResult, TrackingContext};
use thiserror::Error;

/// Errors from launching a step
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("launcher executable not found: {0}")]
    NotFound(String),
    #[error("failed to start launcher: {0}")]
    Spawn(String),
    #[error("run {uri} exited with code {code}")]
    Failed {
        uri: String,
        code: i32,
        /// Last lines the run wrote to stderr
        stderr: String,
    },
    #[error("run {uri} was terminated by a signal")]
    Signalled { uri: String },
    /// Failure injected by a test double
    #[error("injected failure: {0}")]
    Injected(String),
}

/// Executes a named, versioned step package with parameters
///
/// Calls are synchronous from the driver's point of view: a launch returns
/// once the run has finished.
#[async_trait]
pub trait LaunchAdapter: Clone + Send + Sync + 'static {
    /// Run one step; `tracking` groups the run's telemetry
    async fn launch(
        &self,
        request: &LaunchRequest,
        tracking: &TrackingContext,
    ) -> Result<RunResult, LaunchError>;
}
