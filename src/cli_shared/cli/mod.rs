// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod client;
mod config;

pub use self::{client::*, config::*};

use std::path::{Path, PathBuf};

pub const CONFIG_PATH_KEY: &str = "FOREST_WINCOUNT_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigPath {
    Cli(PathBuf),
    Env(PathBuf),
}

impl ConfigPath {
    pub fn to_path_buf(&self) -> &PathBuf {
        match self {
            ConfigPath::Cli(path) | ConfigPath::Env(path) => path,
        }
    }
}

/// `--config` wins over `FOREST_WINCOUNT_CONFIG`.
pub fn find_config_path(config: Option<&Path>) -> Option<ConfigPath> {
    if let Some(path) = config {
        return Some(ConfigPath::Cli(path.to_path_buf()));
    }
    std::env::var_os(CONFIG_PATH_KEY)
        .filter(|it| !it.is_empty())
        .map(|it| ConfigPath::Env(PathBuf::from(it)))
}
