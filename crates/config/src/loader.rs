// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration loading: file, then overrides, then interpolation

use crate::{resolve_references, Config, ConfigError, Override};
use std::path::{Path, PathBuf};
use toml::Table;

/// File name looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "config.toml";

/// Builds a [`Config`] from an optional file plus overrides
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    path: Option<PathBuf>,
    overrides: Vec<Override>,
}

impl ConfigLoader {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read the base tree from a TOML file
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Apply an override after the file is read, in the order given
    pub fn with_override(mut self, o: Override) -> Self {
        self.overrides.push(o);
        self
    }

    pub fn with_overrides(mut self, overrides: impl IntoIterator<Item = Override>) -> Self {
        self.overrides.extend(overrides);
        self
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Load the file, apply overrides, then resolve `${...}` references
    pub fn load(&self) -> Result<Config, ConfigError> {
        let mut root = match &self.path {
            Some(path) => read_table(path)?,
            None => Table::new(),
        };

        for o in &self.overrides {
            o.apply(&mut root)?;
        }

        let resolved = resolve_references(&root)?;
        tracing::debug!(
            path = ?self.path,
            overrides = self.overrides.len(),
            sections = resolved.len(),
            "configuration loaded"
        );
        Ok(Config::from_table(resolved))
    }
}

fn read_table(path: &Path) -> Result<Table, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(toml::from_str(&content)?)
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;
