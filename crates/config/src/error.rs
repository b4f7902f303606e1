// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or reading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("failed to render config: {0}")]
    Render(#[from] toml::ser::Error),
    #[error("missing required config key: {0}")]
    MissingKey(String),
    #[error("config key {path} must be {expected}")]
    InvalidType {
        path: String,
        expected: &'static str,
    },
    #[error("invalid override `{0}`: expected dotted.key=value")]
    InvalidOverride(String),
    #[error("{path}: unresolved reference ${{{reference}}}")]
    UnresolvedReference { path: String, reference: String },
    #[error("{0}: interpolation cycle")]
    InterpolationCycle(String),
}
