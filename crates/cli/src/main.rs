// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

//! mlp - configuration-driven ML pipeline driver

mod commands;
mod error;
mod logging;
mod output;
mod source;

use clap::{Parser, Subcommand};
use commands::{config, run, steps};
use std::process::ExitCode;

use crate::error::MlpError;

#[derive(Parser)]
#[command(
    name = "mlp",
    version,
    about = "Run ML pipeline steps with mlflow, driven by a TOML config"
)]
struct Cli {
    /// Log debug output (MLP_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the selected pipeline steps
    Run(run::RunArgs),
    /// List pipeline steps and which ones a config selects
    Steps(steps::StepsArgs),
    /// Print the resolved configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = match (&cli.command, cli.verbose) {
        (_, true) => "debug",
        (Commands::Run(_), false) => "info",
        (_, false) => "warn",
    };
    logging::init(default_level);

    let result = match cli.command {
        Commands::Run(args) => run::run(args).await,
        Commands::Steps(args) => steps::steps(args),
        Commands::Config(args) => config::config(args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<MlpError>() {
                Some(mlp) => eprint!("{}", mlp),
                None => eprintln!("error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
