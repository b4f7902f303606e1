// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mlp steps` - List pipeline steps and the active selection

use crate::error::MlpError;
use crate::output::{print_json, OutputFormat};
use crate::source::ConfigSource;
use anyhow::Result;
use clap::Args;
use mlp_config::{Config, ConfigError, DEFAULT_CONFIG_FILE};
use mlp_core::{Step, StepSelection};
use mlp_engine::{required_keys, STEPS_KEY};
use serde::Serialize;
use std::path::Path;

#[derive(Args)]
pub struct StepsArgs {
    #[command(flatten)]
    pub source: ConfigSource,

    /// Selector to resolve instead of main.steps
    #[arg(short, long)]
    pub steps: Option<String>,

    /// Fail if an active step is missing config keys
    #[arg(long)]
    pub check: bool,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct StepRow {
    step: Step,
    package: &'static str,
    repository: &'static str,
    default: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    active: Option<bool>,
}

#[derive(Debug, Serialize)]
struct StepsReport {
    steps: Vec<StepRow>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    ignored: Vec<String>,
}

pub fn steps(args: StepsArgs) -> Result<()> {
    let config = args.source.try_load(args.steps.as_deref())?;
    let selection = config.as_ref().and_then(selector).map(StepSelection::parse);

    let report = build_report(selection.as_ref());
    match args.format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Text => print_table(&report),
    }

    if args.check {
        let config = config
            .ok_or_else(|| MlpError::config_not_found(Path::new(DEFAULT_CONFIG_FILE)))?;
        let selection = selection
            .ok_or_else(|| MlpError::config(ConfigError::MissingKey(STEPS_KEY.to_string())))?;
        check_keys(&config, &selection.active_steps())?;
    }
    Ok(())
}

fn selector(config: &Config) -> Option<&str> {
    config.get(STEPS_KEY).and_then(|v| v.as_str())
}

fn build_report(selection: Option<&StepSelection>) -> StepsReport {
    let steps = Step::ALL
        .iter()
        .map(|&step| StepRow {
            step,
            package: step.package(),
            repository: step.repository().config_key(),
            default: !step.is_opt_in(),
            active: selection.map(|s| s.contains(step)),
        })
        .collect();
    let ignored = selection
        .map(|s| s.unknown().into_iter().map(String::from).collect())
        .unwrap_or_default();
    StepsReport { steps, ignored }
}

fn print_table(report: &StepsReport) {
    let with_active = report.steps.iter().any(|r| r.active.is_some());
    let mut header = format!(
        "{:<22} {:<22} {:<28} {:<8}",
        "STEP", "PACKAGE", "REPOSITORY", "DEFAULT"
    );
    if with_active {
        header.push_str(" ACTIVE");
    }
    println!("{}", header.trim_end());

    for row in &report.steps {
        let mut line = format!(
            "{:<22} {:<22} {:<28} {:<8}",
            row.step.name(),
            row.package,
            row.repository,
            yes_no(row.default)
        );
        if let Some(active) = row.active {
            line.push(' ');
            line.push_str(yes_no(active));
        }
        println!("{}", line.trim_end());
    }

    if !report.ignored.is_empty() {
        println!();
        println!("Ignored unknown steps: {}", report.ignored.join(", "));
    }
}

fn yes_no(b: bool) -> &'static str {
    if b {
        "yes"
    } else {
        "no"
    }
}

/// Verify every key the active steps read is present
fn check_keys(config: &Config, active: &[Step]) -> Result<(), MlpError> {
    let missing: Vec<(Step, Vec<&str>)> = active
        .iter()
        .map(|&step| {
            let keys = required_keys(step)
                .into_iter()
                .filter(|key| config.get(key).is_none())
                .collect::<Vec<_>>();
            (step, keys)
        })
        .filter(|(_, keys)| !keys.is_empty())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(MlpError::missing_keys(&missing))
    }
}

#[cfg(test)]
#[path = "steps_tests.rs"]
mod tests;
