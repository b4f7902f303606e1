// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mlp-core: Core types for the mlp pipeline driver
//!
//! This crate provides:
//! - The step registry and per-step metadata
//! - Step selection parsing (`"all"` or a comma list)
//! - Launcher parameter values and launch requests
//! - The tracking context shared by every launched run

pub mod launch;
pub mod params;
pub mod selection;
pub mod step;

pub use launch::{LaunchRequest, RunResult, TrackingContext, ENTRY_POINT, ENV_MANAGER, STEP_VERSION};
pub use params::{ParamValue, Parameters};
pub use selection::{StepSelection, ALL_SENTINEL};
pub use step::{Repository, Step, UnknownStep};
