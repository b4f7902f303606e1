// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step selection from the `main.steps` field

use crate::Step;
use serde::Serialize;

/// Selector value meaning "every default step"
pub const ALL_SENTINEL: &str = "all";

/// Which steps a run asked for
///
/// A listed selection keeps the tokens exactly as the caller gave them,
/// unknown names included, so they can be reported. Execution order is
/// never taken from here: [`StepSelection::active_steps`] is always in
/// registry order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepSelection {
    All,
    Listed(Vec<String>),
}

impl StepSelection {
    /// Parse a selector: `"all"` or a comma-separated list of step names
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw == ALL_SENTINEL {
            return StepSelection::All;
        }
        let tokens = raw
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(String::from)
            .collect();
        StepSelection::Listed(tokens)
    }

    /// Whether a step is selected
    pub fn contains(&self, step: Step) -> bool {
        match self {
            StepSelection::All => !step.is_opt_in(),
            StepSelection::Listed(tokens) => tokens.iter().any(|t| t == step.name()),
        }
    }

    /// Selected steps in registry order, each at most once
    pub fn active_steps(&self) -> Vec<Step> {
        Step::ALL
            .into_iter()
            .filter(|step| self.contains(*step))
            .collect()
    }

    /// Listed tokens that name no known step, in caller order
    pub fn unknown(&self) -> Vec<&str> {
        match self {
            StepSelection::All => Vec::new(),
            StepSelection::Listed(tokens) => tokens
                .iter()
                .filter(|t| Step::from_name(t).is_none())
                .map(String::as_str)
                .collect(),
        }
    }
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
