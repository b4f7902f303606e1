// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Pipeline driver
//!
//! Resolves the active steps from `main.steps`, then launches each one in
//! registry order, waiting for every launch before starting the next. The
//! first failure aborts the run. The scratch directory lives exactly as
//! long as [`Driver::run`].

use crate::params::build_request;
use crate::scratch::create_scratch;
use crate::DriverError;
use mlp_adapters::LaunchAdapter;
use mlp_config::Config;
use mlp_core::{LaunchRequest, RunResult, Step, StepSelection, TrackingContext};
use serde::Serialize;
use std::path::PathBuf;
use tracing::Instrument;

/// Config path of the step selector
pub const STEPS_KEY: &str = "main.steps";

/// A step that ran to completion
#[derive(Debug, Clone, Serialize)]
pub struct StepOutcome {
    pub step: Step,
    pub request: LaunchRequest,
    pub result: RunResult,
}

/// What a successful run did
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub tracking: TrackingContext,
    pub selection: StepSelection,
    /// Selector tokens that matched no step
    pub ignored: Vec<String>,
    pub completed: Vec<StepOutcome>,
}

impl RunSummary {
    /// Steps that completed, in launch order
    pub fn steps(&self) -> Vec<Step> {
        self.completed.iter().map(|o| o.step).collect()
    }
}

/// Build the tracking context from `main.project_name` and
/// `main.experiment_name`
pub fn tracking_context(config: &Config) -> Result<TrackingContext, DriverError> {
    Ok(TrackingContext::new(
        config.str("main.project_name")?,
        config.str("main.experiment_name")?,
    ))
}

/// Runs the active steps of a pipeline through a launcher
pub struct Driver<L> {
    launcher: L,
    scratch_parent: Option<PathBuf>,
}

impl<L: LaunchAdapter> Driver<L> {
    pub fn new(launcher: L) -> Self {
        Self {
            launcher,
            scratch_parent: None,
        }
    }

    /// Create scratch directories under `parent` instead of the system
    /// temp directory
    pub fn scratch_in(mut self, parent: impl Into<PathBuf>) -> Self {
        self.scratch_parent = Some(parent.into());
        self
    }

    /// Run every active step once, in registry order
    pub async fn run(&self, config: &Config) -> Result<RunSummary, DriverError> {
        // Tracking is fixed before anything launches and shared by every run
        let tracking = tracking_context(config)?;

        let selection = StepSelection::parse(config.str(STEPS_KEY)?);
        let ignored: Vec<String> = selection.unknown().into_iter().map(String::from).collect();
        for token in &ignored {
            tracing::warn!(token = %token, "ignoring unknown step in {}", STEPS_KEY);
        }

        let active = selection.active_steps();
        tracing::info!(
            steps = ?active.iter().map(|s| s.name()).collect::<Vec<_>>(),
            project = %tracking.project,
            run_group = %tracking.run_group,
            "starting pipeline"
        );

        let scratch = create_scratch(self.scratch_parent.as_deref())?;
        tracing::debug!(scratch = %scratch.path().display(), "created scratch directory");

        let mut completed = Vec::with_capacity(active.len());
        for step in active {
            let span = tracing::info_span!("step", step = %step);
            let request = span.in_scope(|| build_request(step, config, scratch.path()))?;

            let result = self
                .launcher
                .launch(&request, &tracking)
                .instrument(span)
                .await
                .map_err(|source| DriverError::Launch { step, source })?;

            completed.push(StepOutcome {
                step,
                request,
                result,
            });
        }

        let scratch_path = scratch.path().to_path_buf();
        if let Err(e) = scratch.close() {
            tracing::warn!(
                scratch = %scratch_path.display(),
                error = %e,
                "failed to remove scratch directory"
            );
        }

        tracing::info!(completed = completed.len(), "pipeline finished");
        Ok(RunSummary {
            tracking,
            selection,
            ignored,
            completed,
        })
    }
}

#[cfg(test)]
#[path = "driver_tests.rs"]
mod tests;
