// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launcher that runs nothing.

use super::{LaunchAdapter, LaunchError};
use async_trait::async_trait;
use mlp_core::{LaunchRequest, RunResult, TrackingContext};
use std::time::Duration;

/// Launcher that accepts every request without running it.
///
/// Used by `mlp run --dry-run` to exercise selection, config lookup and
/// rf_config materialization without an mlflow installation.
#[derive(Clone, Copy, Debug, Default)]
pub struct DryRunLauncher;

impl DryRunLauncher {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LaunchAdapter for DryRunLauncher {
    async fn launch(
        &self,
        request: &LaunchRequest,
        _tracking: &TrackingContext,
    ) -> Result<RunResult, LaunchError> {
        tracing::debug!(step = %request.step, uri = %request.uri, "dry run, not launching");
        Ok(RunResult {
            uri: request.uri.clone(),
            run_id: None,
            elapsed: Duration::ZERO,
        })
    }
}
