// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mlp pipeline driver

mod driver;
mod error;
mod params;
mod scratch;

pub use driver::{tracking_context, Driver, RunSummary, StepOutcome, STEPS_KEY};
pub use error::DriverError;
pub use params::{build_parameters, build_request, required_keys};
pub use scratch::{create_scratch, write_rf_config, RF_CONFIG_FILE, RF_CONFIG_KEY};
