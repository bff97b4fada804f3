// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod cli;
pub mod logger;

use std::path::Path;

use anyhow::Context as _;

use crate::cli_shared::cli::{Config, ConfigPath, find_config_path};
use crate::utils::io::read_toml;

pub fn read_config(config_path_opt: Option<&Path>) -> anyhow::Result<(Option<ConfigPath>, Config)> {
    let (path, config) = match find_config_path(config_path_opt) {
        Some(path) => {
            // Read from config file
            let toml = std::fs::read_to_string(path.to_path_buf())
                .with_context(|| format!("failed to read {}", path.to_path_buf().display()))?;
            // Parse and return the configuration file
            let config = read_toml(&toml)
                .with_context(|| format!("failed to parse {}", path.to_path_buf().display()))?;
            (Some(path), config)
        }
        None => (None, Config::default()),
    };
    Ok((path, config))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn read_config_with_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let mut expected = Config::default();
        expected.proving.mock_proofs = true;
        expected.proving.out_dir = Some(PathBuf::from("posts"));
        std::fs::write(&path, toml::to_string(&expected).unwrap()).unwrap();

        let (config_path, config) = read_config(Some(&path)).unwrap();

        assert_eq!(config_path, Some(ConfigPath::Cli(path)));
        assert_eq!(config, expected);
    }

    #[test]
    fn read_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(read_config(Some(&path)).is_err());
    }

    #[test]
    fn read_config_malformed_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[proving]\nparallelism = 0\n").unwrap();
        assert!(read_config(Some(&path)).is_err());
    }
}
