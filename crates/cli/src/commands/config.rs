// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! `mlp config [KEY=VALUE...]` - Print the resolved configuration

use crate::output::print_json;
use crate::source::ConfigSource;
use anyhow::Result;
use clap::{Args, ValueEnum};

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
}

#[derive(Args)]
pub struct ConfigArgs {
    #[command(flatten)]
    pub source: ConfigSource,

    #[arg(long, value_enum, default_value_t = ConfigFormat::Toml)]
    pub format: ConfigFormat,
}

/// Print the configuration after overrides and `${...}` references
pub fn config(args: ConfigArgs) -> Result<()> {
    let config = args.source.load(None)?;
    match args.format {
        ConfigFormat::Toml => print!("{}", config.to_toml_string()?),
        ConfigFormat::Json => print_json(&config.to_json_value())?,
    }
    Ok(())
}
