// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mlflow run` subprocess launcher

use super::{LaunchAdapter, LaunchError};
use async_trait::async_trait;
use mlp_core::{LaunchRequest, RunResult, TrackingContext};
use std::collections::VecDeque;
use std::path::PathBuf;
use std::process::Stdio;
use std::time::Instant;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;

/// Lines of stderr kept for the error report of a failed run
const STDERR_TAIL_LINES: usize = 20;

/// Launches steps with the `mlflow run` CLI
///
/// Stdout is inherited. Stderr is forwarded line by line and its tail is
/// kept so a failed run can be reported. Tracking variables are set on the
/// child only; the driver's own environment is never modified.
#[derive(Clone, Debug)]
pub struct MlflowLauncher {
    program: String,
    program_args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl Default for MlflowLauncher {
    fn default() -> Self {
        Self::new()
    }
}

impl MlflowLauncher {
    pub const DEFAULT_PROGRAM: &'static str = "mlflow";

    pub fn new() -> Self {
        Self {
            program: Self::DEFAULT_PROGRAM.to_string(),
            program_args: Vec::new(),
            cwd: None,
        }
    }

    /// Use a custom launcher command such as `python -m mlflow`
    ///
    /// The command is split on whitespace: the first word is the program,
    /// the rest are passed before `run`.
    pub fn from_command_line(command: &str) -> Self {
        let mut words = command.split_whitespace().map(String::from);
        let program = words
            .next()
            .unwrap_or_else(|| Self::DEFAULT_PROGRAM.to_string());
        Self {
            program,
            program_args: words.collect(),
            cwd: None,
        }
    }

    /// Run the launcher from this directory instead of the current one
    pub fn current_dir(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    /// Arguments for one request, starting at `run`
    pub fn args(request: &LaunchRequest) -> Vec<String> {
        let mut args = vec![
            "run".to_string(),
            request.uri.clone(),
            "-e".to_string(),
            request.entry_point.clone(),
            "-v".to_string(),
            request.version.clone(),
            "--env-manager".to_string(),
            request.env_manager.clone(),
        ];
        for pair in request.parameters.to_pairs() {
            args.push("-P".to_string());
            args.push(pair);
        }
        args
    }

    /// Shell-style rendering of the full command, for display
    pub fn command_line(&self, request: &LaunchRequest) -> String {
        std::iter::once(self.program.clone())
            .chain(self.program_args.iter().cloned())
            .chain(Self::args(request))
            .map(|word| shell_quote(&word))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[async_trait]
impl LaunchAdapter for MlflowLauncher {
    async fn launch(
        &self,
        request: &LaunchRequest,
        tracking: &TrackingContext,
    ) -> Result<RunResult, LaunchError> {
        let start = Instant::now();

        let mut cmd = Command::new(&self.program);
        cmd.args(&self.program_args)
            .args(Self::args(request))
            .envs(tracking.env())
            .stdin(Stdio::null())
            .stderr(Stdio::piped())
            .kill_on_drop(true);
        if let Some(cwd) = &self.cwd {
            cmd.current_dir(cwd);
        }

        let mut child = cmd.spawn().map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => LaunchError::NotFound(self.program.clone()),
            _ => LaunchError::Spawn(e.to_string()),
        })?;

        let mut tail: VecDeque<String> = VecDeque::with_capacity(STDERR_TAIL_LINES);
        let mut run_id = None;
        if let Some(stderr) = child.stderr.take() {
            let mut segments = BufReader::new(stderr).split(b'\n');
            while let Some(segment) = segments
                .next_segment()
                .await
                .map_err(|e| LaunchError::Spawn(e.to_string()))?
            {
                let line = String::from_utf8_lossy(&segment).into_owned();
                eprintln!("{}", line);
                if run_id.is_none() {
                    run_id = parse_run_id(&line);
                }
                if tail.len() == STDERR_TAIL_LINES {
                    tail.pop_front();
                }
                tail.push_back(line);
            }
        }

        let status = child
            .wait()
            .await
            .map_err(|e| LaunchError::Spawn(e.to_string()))?;

        if !status.success() {
            return Err(match status.code() {
                Some(code) => LaunchError::Failed {
                    uri: request.uri.clone(),
                    code,
                    stderr: Vec::from(tail).join("\n"),
                },
                None => LaunchError::Signalled {
                    uri: request.uri.clone(),
                },
            });
        }

        Ok(RunResult {
            uri: request.uri.clone(),
            run_id,
            elapsed: start.elapsed(),
        })
    }
}

/// Extract the run ID from mlflow's `=== Run (ID '<id>') succeeded ===` line
fn parse_run_id(line: &str) -> Option<String> {
    let (_, rest) = line.split_once("Run (ID '")?;
    let (id, _) = rest.split_once('\'')?;
    (!id.is_empty()).then(|| id.to_string())
}

fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=,@%+#".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
#[path = "mlflow_tests.rs"]
mod tests;
