// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Fake launcher for testing
#![cfg_attr(coverage_nightly, coverage(off))]

use super::{LaunchAdapter, LaunchError};
use async_trait::async_trait;
use mlp_core::{LaunchRequest, ParamValue, RunResult, Step, TrackingContext};
use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Recorded launch call
#[derive(Debug, Clone)]
pub struct LaunchCall {
    pub request: LaunchRequest,
    pub tracking: TrackingContext,
    /// Contents of every parameter naming an existing file, read at launch
    /// time (keyed by parameter name)
    pub files: HashMap<String, String>,
}

#[derive(Debug, Clone)]
enum Fault {
    Step(Step),
    Call(usize),
}

/// Fake launcher that records calls and can inject failures
#[derive(Clone, Default)]
pub struct FakeLauncher {
    calls: Arc<Mutex<Vec<LaunchCall>>>,
    faults: Arc<Mutex<Vec<Fault>>>,
}

impl FakeLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every launch of `step`
    pub fn fail_step(self, step: Step) -> Self {
        self.faults
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Fault::Step(step));
        self
    }

    /// Fail the launch with this zero-based call index
    pub fn fail_call(self, index: usize) -> Self {
        self.faults
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(Fault::Call(index));
        self
    }

    /// Get all recorded calls
    pub fn calls(&self) -> Vec<LaunchCall> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Steps launched so far, in call order
    pub fn launched_steps(&self) -> Vec<Step> {
        self.calls().iter().map(|c| c.request.step).collect()
    }
}

#[async_trait]
impl LaunchAdapter for FakeLauncher {
    async fn launch(
        &self,
        request: &LaunchRequest,
        tracking: &TrackingContext,
    ) -> Result<RunResult, LaunchError> {
        let files = request
            .parameters
            .iter()
            .filter_map(|(name, value)| match value {
                ParamValue::String(s) if Path::new(s).is_file() => std::fs::read_to_string(s)
                    .ok()
                    .map(|content| (name.to_string(), content)),
                _ => None,
            })
            .collect();

        let index = {
            let mut calls = self.calls.lock().unwrap_or_else(|e| e.into_inner());
            calls.push(LaunchCall {
                request: request.clone(),
                tracking: tracking.clone(),
                files,
            });
            calls.len() - 1
        };

        let faults = self.faults.lock().unwrap_or_else(|e| e.into_inner());
        let injected = faults.iter().any(|f| match f {
            Fault::Step(step) => *step == request.step,
            Fault::Call(i) => *i == index,
        });
        if injected {
            return Err(LaunchError::Injected(format!(
                "{} (call {})",
                request.step, index
            )));
        }

        Ok(RunResult {
            uri: request.uri.clone(),
            run_id: Some(format!("fake-run-{}", index)),
            elapsed: Duration::ZERO,
        })
    }
}

#[cfg(test)]
#[path = "fake_tests.rs"]
mod tests;
