// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Read-only access to a loaded configuration tree

use crate::ConfigError;
use mlp_core::ParamValue;
use toml::{Table, Value};

/// An immutable configuration tree addressed by dotted paths
/// (`modeling.random_forest.n_estimators`)
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Config {
    root: Table,
}

impl Config {
    pub fn from_table(root: Table) -> Self {
        Self { root }
    }

    /// Parse TOML content as-is (no overrides, no interpolation)
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let root: Table = toml::from_str(content)?;
        Ok(Self { root })
    }

    pub fn as_table(&self) -> &Table {
        &self.root
    }

    /// Look up a value; `None` if any segment is missing or not a table
    pub fn get(&self, path: &str) -> Option<&Value> {
        lookup(&self.root, path)
    }

    /// Look up a value that must be present
    pub fn require(&self, path: &str) -> Result<&Value, ConfigError> {
        self.get(path)
            .ok_or_else(|| ConfigError::MissingKey(path.to_string()))
    }

    /// A required string value
    pub fn str(&self, path: &str) -> Result<&str, ConfigError> {
        self.require(path)?
            .as_str()
            .ok_or_else(|| ConfigError::InvalidType {
                path: path.to_string(),
                expected: "a string",
            })
    }

    /// A required table value
    pub fn table(&self, path: &str) -> Result<&Table, ConfigError> {
        self.require(path)?
            .as_table()
            .ok_or_else(|| ConfigError::InvalidType {
                path: path.to_string(),
                expected: "a table",
            })
    }

    /// A required scalar, converted to a launcher parameter
    pub fn scalar(&self, path: &str) -> Result<ParamValue, ConfigError> {
        match self.require(path)? {
            Value::String(s) => Ok(ParamValue::String(s.clone())),
            Value::Integer(i) => Ok(ParamValue::Integer(*i)),
            Value::Float(x) => Ok(ParamValue::Float(*x)),
            Value::Boolean(b) => Ok(ParamValue::Bool(*b)),
            Value::Datetime(d) => Ok(ParamValue::String(d.to_string())),
            Value::Array(_) | Value::Table(_) => Err(ConfigError::InvalidType {
                path: path.to_string(),
                expected: "a scalar",
            }),
        }
    }

    /// The sub-tree at `path` as JSON
    pub fn to_json(&self, path: &str) -> Result<serde_json::Value, ConfigError> {
        let table = self.table(path)?;
        Ok(table_to_json(table))
    }

    /// The whole tree as pretty TOML
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&self.root)?)
    }

    /// The whole tree as JSON
    pub fn to_json_value(&self) -> serde_json::Value {
        table_to_json(&self.root)
    }
}

pub(crate) fn lookup<'a>(root: &'a Table, path: &str) -> Option<&'a Value> {
    let mut segments = path.split('.');
    let first = segments.next()?;
    let mut current = root.get(first)?;
    for segment in segments {
        current = current.as_table()?.get(segment)?;
    }
    Some(current)
}

fn table_to_json(table: &Table) -> serde_json::Value {
    serde_json::Value::Object(
        table
            .iter()
            .map(|(k, v)| (k.clone(), value_to_json(v)))
            .collect(),
    )
}

fn value_to_json(value: &Value) -> serde_json::Value {
    match value {
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Integer(i) => serde_json::Value::from(*i),
        // Non-finite floats have no JSON form
        Value::Float(x) => serde_json::Number::from_f64(*x)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Boolean(b) => serde_json::Value::Bool(*b),
        Value::Datetime(d) => serde_json::Value::String(d.to_string()),
        Value::Array(items) => serde_json::Value::Array(items.iter().map(value_to_json).collect()),
        Value::Table(t) => table_to_json(t),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
