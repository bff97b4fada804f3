// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::ffi::OsString;

use anyhow::Context as _;
use clap::Parser;
use tracing::info;

use super::subcommands::Cli;
use crate::cli_shared::{cli::ConfigPath, logger, read_config};

pub fn main<ArgT>(args: impl IntoIterator<Item = ArgT>) -> anyhow::Result<()>
where
    ArgT: Into<OsString> + Clone,
{
    // Capture Cli inputs
    let Cli { config, cmd } = Cli::parse_from(args);

    let (path, config) = read_config(config.as_deref()).context("Error parsing config")?;
    logger::setup_logger(&config.log)?;
    match &path {
        Some(ConfigPath::Cli(path)) => info!("config loaded: {}", path.display()),
        Some(ConfigPath::Env(path)) => info!("FOREST_WINCOUNT_CONFIG loaded: {}", path.display()),
        None => (),
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(cmd.run(config))
}
