// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use tracing_subscriber::{EnvFilter, Registry, prelude::*};

use crate::cli_shared::cli::LogConfig;

/// Installs the global subscriber. Logs go to stderr, leaving stdout to the
/// round reports.
pub fn setup_logger(log: &LogConfig) -> anyhow::Result<()> {
    let default_filter = log.to_filter_string();
    let mut layers: Vec<Box<dyn tracing_subscriber::layer::Layer<Registry> + Send + Sync>> =
        // console logger
        vec![Box::new(
            tracing_subscriber::fmt::Layer::new()
                .with_ansi(log.color.coloring_enabled())
                .with_writer(std::io::stderr)
                .with_filter(get_env_filter(&default_filter)?),
        )];

    // file logger
    if let Some(log_dir) = &log.dir {
        let file_appender = tracing_appender::rolling::hourly(log_dir, "forest-wincount.log");
        layers.push(Box::new(
            tracing_subscriber::fmt::Layer::new()
                .with_ansi(false)
                .with_writer(file_appender)
                .with_filter(get_env_filter(&default_filter)?),
        ));
    }

    tracing_subscriber::registry().with(layers).try_init()?;
    Ok(())
}

/// Returns an [`EnvFilter`] according to the `RUST_LOG` environment variable, or
/// the given default directives.
///
/// Note that [`tracing_subscriber::filter::Builder`] only allows a single default directive,
/// whereas we want to provide multiple.
fn get_env_filter(default_directives: &str) -> anyhow::Result<EnvFilter> {
    use std::env::{
        self,
        VarError::{NotPresent, NotUnicode},
    };
    Ok(match env::var(EnvFilter::DEFAULT_ENV) {
        Ok(s) => EnvFilter::new(s),
        Err(NotPresent) => EnvFilter::try_new(default_directives)?,
        Err(NotUnicode(_)) => EnvFilter::default(),
    })
}

#[test]
fn test_default_env_filter() {
    EnvFilter::try_new(LogConfig::default().to_filter_string()).unwrap();
}
