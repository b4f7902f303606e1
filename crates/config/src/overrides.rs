// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Command-line `dotted.key=value` overrides

use crate::ConfigError;
use std::str::FromStr;
use toml::{Table, Value};

/// A single override such as `etl.min_price=20` or `main.steps=download`
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    pub path: String,
    pub value: Value,
}

impl Override {
    pub fn new(path: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            path: path.into(),
            value: value.into(),
        }
    }

    /// Set this override's value in `root`, creating intermediate tables
    pub fn apply(&self, root: &mut Table) -> Result<(), ConfigError> {
        let segments: Vec<&str> = self.path.split('.').collect();
        let Some((leaf, parents)) = segments.split_last() else {
            return Err(ConfigError::InvalidOverride(self.path.clone()));
        };

        let mut current = root;
        for (depth, segment) in parents.iter().enumerate() {
            let entry = current
                .entry(segment.to_string())
                .or_insert(Value::Table(Table::new()));
            current = entry
                .as_table_mut()
                .ok_or_else(|| ConfigError::InvalidType {
                    path: segments[..=depth].join("."),
                    expected: "a table",
                })?;
        }

        tracing::debug!(path = %self.path, value = %self.value, "applying override");
        current.insert(leaf.to_string(), self.value.clone());
        Ok(())
    }
}

impl FromStr for Override {
    type Err = ConfigError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let (path, value) = raw
            .split_once('=')
            .ok_or_else(|| ConfigError::InvalidOverride(raw.to_string()))?;
        let path = path.trim();
        if path.is_empty() || path.split('.').any(str::is_empty) {
            return Err(ConfigError::InvalidOverride(raw.to_string()));
        }
        Ok(Self {
            path: path.to_string(),
            value: parse_value(value),
        })
    }
}

/// Parse an override value as a TOML literal, falling back to a bare string
///
/// `20` is an integer, `0.3` a float, `"x"` a quoted string; anything that is
/// not a valid TOML value (`download,data_split`) stays a string verbatim.
fn parse_value(raw: &str) -> Value {
    let doc = format!("v = {}", raw);
    toml::from_str::<Table>(&doc)
        .ok()
        .and_then(|mut t| t.remove("v"))
        .unwrap_or_else(|| Value::String(raw.to_string()))
}

#[cfg(test)]
#[path = "overrides_tests.rs"]
mod tests;
