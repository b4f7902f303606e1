// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Traced adapter wrapper for consistent observability

use crate::launcher::{LaunchAdapter, LaunchError};
use async_trait::async_trait;
use mlp_core::{LaunchRequest, RunResult, TrackingContext};
use tracing::Instrument;

/// Wrapper that adds tracing to any LaunchAdapter
#[derive(Clone)]
pub struct TracedLauncher<L> {
    inner: L,
}

impl<L> TracedLauncher<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

#[async_trait]
impl<L: LaunchAdapter> LaunchAdapter for TracedLauncher<L> {
    async fn launch(
        &self,
        request: &LaunchRequest,
        tracking: &TrackingContext,
    ) -> Result<RunResult, LaunchError> {
        let span = tracing::info_span!(
            "launch",
            step = %request.step,
            uri = %request.uri,
            version = %request.version,
        );

        async {
            tracing::info!(
                entry_point = %request.entry_point,
                env_manager = %request.env_manager,
                params = request.parameters.len(),
                project = %tracking.project,
                run_group = %tracking.run_group,
                "starting"
            );
            tracing::debug!(params = ?request.parameters.to_pairs(), "parameters");

            let start = std::time::Instant::now();
            let result = self.inner.launch(request, tracking).await;
            let elapsed = start.elapsed();

            match &result {
                Ok(run) => tracing::info!(
                    run_id = run.run_id.as_deref().unwrap_or("-"),
                    elapsed_ms = elapsed.as_millis() as u64,
                    "run finished"
                ),
                Err(e) => tracing::error!(
                    elapsed_ms = elapsed.as_millis() as u64,
                    error = %e,
                    "run failed"
                ),
            }

            result
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
#[path = "traced_tests.rs"]
mod tests;
