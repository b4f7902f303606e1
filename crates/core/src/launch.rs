// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Launch requests and results

use crate::{Parameters, Step};
use serde::Serialize;
use std::time::Duration;

/// Entry point invoked in every step package
pub const ENTRY_POINT: &str = "main";
/// Version (git ref) every step package is fetched at
pub const STEP_VERSION: &str = "main";
/// Environment manager used to provision step environments
pub const ENV_MANAGER: &str = "conda";

/// Everything the launcher needs to run one step
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LaunchRequest {
    pub step: Step,
    /// `{repository}/{package}`
    pub uri: String,
    pub entry_point: String,
    pub version: String,
    pub env_manager: String,
    pub parameters: Parameters,
}

impl LaunchRequest {
    /// Build a request for `step` using the fixed entry point, version and
    /// environment manager
    pub fn new(step: Step, repository_base: &str, parameters: Parameters) -> Self {
        Self {
            step,
            uri: format!("{}/{}", repository_base, step.package()),
            entry_point: ENTRY_POINT.to_string(),
            version: STEP_VERSION.to_string(),
            env_manager: ENV_MANAGER.to_string(),
            parameters,
        }
    }
}

/// Telemetry grouping shared by every run launched in one driver invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackingContext {
    pub project: String,
    pub run_group: String,
}

impl TrackingContext {
    pub const PROJECT_VAR: &'static str = "WANDB_PROJECT";
    pub const RUN_GROUP_VAR: &'static str = "WANDB_RUN_GROUP";

    pub fn new(project: impl Into<String>, run_group: impl Into<String>) -> Self {
        Self {
            project: project.into(),
            run_group: run_group.into(),
        }
    }

    /// Environment variables exported to launched runs
    pub fn env(&self) -> Vec<(String, String)> {
        vec![
            (Self::PROJECT_VAR.to_string(), self.project.clone()),
            (Self::RUN_GROUP_VAR.to_string(), self.run_group.clone()),
        ]
    }
}

/// Outcome of a successful launch
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunResult {
    pub uri: String,
    /// Run identifier reported by the launcher, if any
    pub run_id: Option<String>,
    #[serde(with = "duration_ms")]
    pub elapsed: Duration,
}

mod duration_ms {
    use serde::Serializer;
    use std::time::Duration;

    pub fn serialize<S: Serializer>(d: &Duration, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_u64(d.as_millis() as u64)
    }
}

#[cfg(test)]
#[path = "launch_tests.rs"]
mod tests;
