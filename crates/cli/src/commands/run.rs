// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mlp run [KEY=VALUE...]` - Run the selected pipeline steps

use crate::error::MlpError;
use crate::output::{print_json, OutputFormat};
use crate::source::ConfigSource;
use anyhow::Result;
use clap::Args;
use mlp_adapters::{DryRunLauncher, LaunchAdapter, MlflowLauncher, TracedLauncher};
use mlp_config::Config;
use mlp_core::{LaunchRequest, Step};
use mlp_engine::{Driver, RunSummary};
use serde::Serialize;

#[derive(Args)]
pub struct RunArgs {
    #[command(flatten)]
    pub source: ConfigSource,

    /// Steps to run: "all" or a comma list (replaces main.steps)
    #[arg(short, long)]
    pub steps: Option<String>,

    /// Print the mlflow commands instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Launcher command, e.g. "python -m mlflow"
    #[arg(long, env = "MLP_MLFLOW_BIN", default_value = MlflowLauncher::DEFAULT_PROGRAM)]
    pub mlflow_bin: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

pub async fn run(args: RunArgs) -> Result<()> {
    let config = args.source.load(args.steps.as_deref())?;
    let mlflow = MlflowLauncher::from_command_line(&args.mlflow_bin);

    if args.dry_run {
        let driver = Driver::new(TracedLauncher::new(DryRunLauncher::new()));
        let summary = execute(driver, &config).await?;
        print_plan(&summary, &mlflow, args.format)
    } else {
        let driver = Driver::new(TracedLauncher::new(mlflow));
        let summary = execute(driver, &config).await?;
        print_summary(&summary, args.format)
    }
}

/// Run the driver until it finishes or the user hits Ctrl-C
///
/// Dropping the run future kills the running step and removes the
/// scratch directory.
async fn execute<L: LaunchAdapter>(driver: Driver<L>, config: &Config) -> Result<RunSummary> {
    tokio::select! {
        result = driver.run(config) => Ok(result.map_err(MlpError::from)?),
        Ok(()) = tokio::signal::ctrl_c() => Err(MlpError::interrupted().into()),
    }
}

fn print_summary(summary: &RunSummary, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => print_json(summary),
        OutputFormat::Text => {
            if summary.completed.is_empty() {
                println!("No steps selected");
            }
            for outcome in &summary.completed {
                println!(
                    "{:<22} {:>8.1}s  {}",
                    outcome.step.name(),
                    outcome.result.elapsed.as_secs_f64(),
                    outcome.result.run_id.as_deref().unwrap_or("-"),
                );
            }
            print_ignored(&summary.ignored);
            Ok(())
        }
    }
}

#[derive(Serialize)]
struct PlannedLaunch<'a> {
    step: Step,
    command: String,
    request: &'a LaunchRequest,
}

/// Print what a real run would launch
///
/// The `rf_config` path in the plan names a scratch file that has already
/// been removed.
fn print_plan(summary: &RunSummary, mlflow: &MlflowLauncher, format: OutputFormat) -> Result<()> {
    let plan: Vec<PlannedLaunch<'_>> = summary
        .completed
        .iter()
        .map(|o| PlannedLaunch {
            step: o.step,
            command: mlflow.command_line(&o.request),
            request: &o.request,
        })
        .collect();

    match format {
        OutputFormat::Json => print_json(&plan),
        OutputFormat::Text => {
            if plan.is_empty() {
                println!("No steps selected");
            }
            for launch in &plan {
                println!("{}", launch.command);
            }
            print_ignored(&summary.ignored);
            Ok(())
        }
    }
}

fn print_ignored(ignored: &[String]) {
    if !ignored.is_empty() {
        eprintln!("Ignored unknown steps: {}", ignored.join(", "));
    }
}
