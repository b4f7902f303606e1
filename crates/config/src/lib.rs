// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! Hierarchical pipeline configuration

mod config;
mod error;
mod interpolate;
mod loader;
mod overrides;

pub use config::Config;
pub use error::ConfigError;
pub use interpolate::resolve_references;
pub use loader::{ConfigLoader, DEFAULT_CONFIG_FILE};
pub use overrides::Override;
