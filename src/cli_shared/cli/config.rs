// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::num::NonZeroUsize;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::client::Client;
use crate::utils::misc::LoggingColor;

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(default)]
pub struct LogConfig {
    /// Also write hourly rotated logs into this directory.
    pub dir: Option<PathBuf>,
    pub color: LoggingColor,
    /// Used when `RUST_LOG` is unset.
    pub filters: Vec<LogValue>,
}

impl LogConfig {
    pub(in crate::cli_shared) fn to_filter_string(&self) -> String {
        std::iter::once("info".to_owned())
            .chain(self.filters.iter().map(|f| format!("{}={}", f.module, f.level)))
            .collect::<Vec<_>>()
            .join(",")
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: None,
            color: LoggingColor::default(),
            filters: vec![
                LogValue::new("bellperson", "warn"),
                LogValue::new("filecoin_proofs", "warn"),
                LogValue::new("jsonrpsee", "warn"),
                LogValue::new("storage_proofs_core", "warn"),
            ],
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Hash, Debug, Clone)]
pub struct LogValue {
    pub module: String,
    pub level: String,
}

impl LogValue {
    pub fn new(module: &str, level: &str) -> Self {
        Self {
            module: module.to_string(),
            level: level.to_string(),
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone)]
#[serde(default)]
pub struct ProvingConfig {
    /// Root of the local sector store. Winning PoSts are only generated when set.
    pub sector_path: Option<PathBuf>,
    /// Where generated Winning PoSts are saved.
    pub out_dir: Option<PathBuf>,
    /// Rounds evaluated concurrently.
    pub parallelism: NonZeroUsize,
    /// Use the deterministic mock prover instead of `filecoin-proofs`.
    pub mock_proofs: bool,
}

impl Default for ProvingConfig {
    fn default() -> Self {
        Self {
            sector_path: None,
            out_dir: None,
            parallelism: NonZeroUsize::new(num_cpus::get()).unwrap_or(NonZeroUsize::MIN),
            mock_proofs: false,
        }
    }
}

#[derive(Serialize, Deserialize, PartialEq, Eq, Default, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub client: Client,
    pub proving: ProvingConfig,
    pub log: LogConfig,
}

#[cfg(test)]
mod test {
    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use quickcheck::Arbitrary;
    use quickcheck_macros::quickcheck;
    use tracing_subscriber::EnvFilter;

    use super::*;
    use crate::utils::io::read_toml;

    #[derive(Clone, Debug)]
    struct ArbitraryConfig(Config);

    impl Arbitrary for ArbitraryConfig {
        fn arbitrary(g: &mut quickcheck::Gen) -> Self {
            ArbitraryConfig(Config {
                client: Client {
                    api_info: Option::arbitrary(g),
                },
                proving: ProvingConfig {
                    sector_path: Option::<String>::arbitrary(g).map(PathBuf::from),
                    out_dir: Option::<String>::arbitrary(g).map(PathBuf::from),
                    parallelism: NonZeroUsize::MIN.saturating_add(u16::arbitrary(g).into()),
                    mock_proofs: bool::arbitrary(g),
                },
                log: LogConfig {
                    dir: Option::<String>::arbitrary(g).map(PathBuf::from),
                    color: g
                        .choose(&[LoggingColor::Always, LoggingColor::Auto, LoggingColor::Never])
                        .cloned()
                        .unwrap_or_default(),
                    filters: vec![LogValue::new(&String::arbitrary(g), "warn")],
                },
            })
        }
    }

    #[quickcheck]
    fn test_config_all_params_under_section(ArbitraryConfig(config): ArbitraryConfig) {
        let serialized_config =
            toml::to_string(&config).expect("could not serialize the configuration");
        assert_eq!(
            serialized_config
                .trim_start()
                .chars()
                .next()
                .expect("configuration empty"),
            '['
        );
        assert_eq!(read_toml::<Config>(&serialized_config).unwrap(), config);
    }

    #[test]
    fn test_default_log_filters() {
        let config = LogConfig::default();
        EnvFilter::builder()
            .parse(config.to_filter_string())
            .unwrap();
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: Config = read_toml(
            r#"
            [client]
            api_info = "/ip4/127.0.0.1/tcp/1234/http"

            [proving]
            sector_path = "/srv/sectors"
            mock_proofs = true

            [log]
            color = "never"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.client.api_info.as_deref(),
            Some("/ip4/127.0.0.1/tcp/1234/http")
        );
        assert_eq!(config.proving.sector_path, Some(PathBuf::from("/srv/sectors")));
        assert!(config.proving.mock_proofs);
        assert_eq!(config.proving.out_dir, None);
        assert_eq!(
            config.proving.parallelism,
            ProvingConfig::default().parallelism
        );
        assert_eq!(config.log.color, LoggingColor::Never);
        assert_eq!(config.log.filters, LogConfig::default().filters);
    }

    #[test]
    fn empty_config_is_default() {
        assert_eq!(read_toml::<Config>("").unwrap(), Config::default());
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!(read_toml::<Config>("[log]\ncolor = \"sometimes\"\n").is_err());
    }
}
