// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Step registry
//!
//! Every pipeline step is an external, separately versioned package. The
//! declaration order of [`Step`] is the registry order: steps always run in
//! this order, whatever order the caller listed them in.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A step name that is not in the registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown step: {0}")]
pub struct UnknownStep(pub String);

/// Which configured repository base a step's package lives under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Repository {
    /// Shared, reusable components (`main.components_repository`)
    Components,
    /// Project-specific steps (`main.model_repository`)
    Model,
}

impl Repository {
    /// Config path holding the repository base location
    pub fn config_key(self) -> &'static str {
        match self {
            Repository::Components => "main.components_repository",
            Repository::Model => "main.model_repository",
        }
    }
}

/// A pipeline step, in registry order
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    Download,
    BasicCleaning,
    DataCheck,
    DataSplit,
    TrainRandomForest,
    /// Needs a model promoted to "prod" first, so it is never part of "all"
    TestRegressionModel,
}

impl Step {
    /// Every known step in registry order
    pub const ALL: [Step; 6] = [
        Step::Download,
        Step::BasicCleaning,
        Step::DataCheck,
        Step::DataSplit,
        Step::TrainRandomForest,
        Step::TestRegressionModel,
    ];

    /// Steps selected by the `"all"` sentinel
    pub const DEFAULT: [Step; 5] = [
        Step::Download,
        Step::BasicCleaning,
        Step::DataCheck,
        Step::DataSplit,
        Step::TrainRandomForest,
    ];

    /// Canonical step name as used in `main.steps`
    pub fn name(self) -> &'static str {
        match self {
            Step::Download => "download",
            Step::BasicCleaning => "basic_cleaning",
            Step::DataCheck => "data_check",
            Step::DataSplit => "data_split",
            Step::TrainRandomForest => "train_random_forest",
            Step::TestRegressionModel => "test_regression_model",
        }
    }

    /// Package directory appended to the repository base
    pub fn package(self) -> &'static str {
        match self {
            Step::Download => "get_data",
            Step::BasicCleaning => "basic_cleaning",
            Step::DataCheck => "data_check",
            Step::DataSplit => "train_val_test_split",
            Step::TrainRandomForest => "train_random_forest",
            Step::TestRegressionModel => "test_regression_model",
        }
    }

    /// Repository the package is fetched from
    pub fn repository(self) -> Repository {
        match self {
            Step::Download | Step::DataSplit | Step::TestRegressionModel => Repository::Components,
            Step::BasicCleaning | Step::DataCheck | Step::TrainRandomForest => Repository::Model,
        }
    }

    /// True if the step only runs when named explicitly
    pub fn is_opt_in(self) -> bool {
        !Self::DEFAULT.contains(&self)
    }

    /// Look up a step by its canonical name
    pub fn from_name(name: &str) -> Option<Step> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Step {
    type Err = UnknownStep;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Step::from_name(s).ok_or_else(|| UnknownStep(s.to_string()))
    }
}

#[cfg(test)]
#[path = "step_tests.rs"]
mod tests;
