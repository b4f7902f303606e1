// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `${dotted.path}` references between configuration values

use crate::config::lookup;
use crate::ConfigError;
use regex::Regex;
use std::sync::LazyLock;
use toml::{Table, Value};

// Regex pattern for ${dotted.path} - this is a constant valid pattern
#[allow(clippy::expect_used)]
static REF_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_\-]*(?:\.[A-Za-z_][A-Za-z0-9_\-]*)*)\}")
        .expect("constant regex pattern is valid")
});

/// Resolve every `${path}` reference in string values against `root`
///
/// A string that is exactly one reference takes the referenced value as-is,
/// type included (`val_size = "${modeling.test_size}"` stays a float).
/// References embedded in longer strings are spliced in as text and must
/// point at scalars.
pub fn resolve_references(root: &Table) -> Result<Table, ConfigError> {
    let mut resolved = Table::new();
    for (key, value) in root {
        let mut stack = vec![key.clone()];
        resolved.insert(key.clone(), resolve_value(root, value, &mut stack)?);
    }
    Ok(resolved)
}

fn resolve_value(root: &Table, value: &Value, stack: &mut Vec<String>) -> Result<Value, ConfigError> {
    match value {
        Value::String(s) => resolve_string(root, s, stack),
        Value::Array(items) => items
            .iter()
            .map(|item| resolve_value(root, item, stack))
            .collect::<Result<Vec<_>, _>>()
            .map(Value::Array),
        Value::Table(table) => {
            let mut out = Table::new();
            for (key, item) in table {
                stack.push(format!("{}.{}", current_path(stack), key));
                let resolved = resolve_value(root, item, stack);
                stack.pop();
                out.insert(key.clone(), resolved?);
            }
            Ok(Value::Table(out))
        }
        other => Ok(other.clone()),
    }
}

fn resolve_string(root: &Table, s: &str, stack: &mut Vec<String>) -> Result<Value, ConfigError> {
    if !s.contains("${") {
        return Ok(Value::String(s.to_string()));
    }

    // Whole-value reference keeps the target's type
    if let Some(caps) = REF_PATTERN.captures(s) {
        if caps.get(0).is_some_and(|m| m.as_str() == s) {
            return follow(root, &caps[1], stack);
        }
    }

    let mut out = String::with_capacity(s.len());
    let mut last = 0;
    for caps in REF_PATTERN.captures_iter(s) {
        let Some(m) = caps.get(0) else { continue };
        out.push_str(&s[last..m.start()]);
        let target = follow(root, &caps[1], stack)?;
        out.push_str(&scalar_text(&target).ok_or_else(|| ConfigError::InvalidType {
            path: caps[1].to_string(),
            expected: "a scalar to splice into a string",
        })?);
        last = m.end();
    }
    out.push_str(&s[last..]);
    Ok(Value::String(out))
}

fn follow(root: &Table, reference: &str, stack: &mut Vec<String>) -> Result<Value, ConfigError> {
    if stack
        .iter()
        .any(|p| p == reference || p.starts_with(&format!("{}.", reference)))
    {
        return Err(ConfigError::InterpolationCycle(current_path(stack).to_string()));
    }
    let target = lookup(root, reference).ok_or_else(|| ConfigError::UnresolvedReference {
        path: current_path(stack).to_string(),
        reference: reference.to_string(),
    })?;

    stack.push(reference.to_string());
    let resolved = resolve_value(root, target, stack);
    stack.pop();
    resolved
}

fn current_path(stack: &[String]) -> &str {
    stack.last().map(String::as_str).unwrap_or_default()
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Integer(i) => Some(i.to_string()),
        Value::Float(x) => Some(x.to_string()),
        Value::Boolean(b) => Some(b.to_string()),
        Value::Datetime(d) => Some(d.to_string()),
        Value::Array(_) | Value::Table(_) => None,
    }
}

#[cfg(test)]
#[path = "interpolate_tests.rs"]
mod tests;
