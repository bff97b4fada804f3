// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod run_cmd;
mod verify_cmd;

pub(super) use self::{run_cmd::RunCommand, verify_cmd::VerifyCommand};

use std::path::PathBuf;

use clap::Parser;

use crate::cli_shared::cli::Config;

/// CLI structure generated when interacting with the forest-wincount binary
#[derive(Parser)]
#[command(name = env!("CARGO_PKG_NAME"), bin_name = "forest-wincount", author = env!("CARGO_PKG_AUTHORS"), version = env!("CARGO_PKG_VERSION"), about = env!("CARGO_PKG_DESCRIPTION"))]
pub struct Cli {
    /// TOML configuration file. Defaults to `FOREST_WINCOUNT_CONFIG` if set.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,
    #[command(subcommand)]
    pub cmd: Subcommand,
}

#[derive(clap::Subcommand, Debug)]
pub enum Subcommand {
    /// Run the election for a miner over a range of rounds, proving won rounds
    Run(RunCommand),
    /// Verify a saved Winning PoSt
    Verify(VerifyCommand),
}

impl Subcommand {
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        match self {
            Self::Run(cmd) => cmd.run(config).await,
            Self::Verify(cmd) => cmd.run(config).await,
        }
    }
}

/// Which [`crate::proofs::WinningPoStProver`] backs proof generation and verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum ProverBackend {
    Mock,
    #[cfg(feature = "native-proofs")]
    Native,
}

impl ProverBackend {
    pub fn select(mock_proofs: bool) -> anyhow::Result<Self> {
        if mock_proofs {
            return Ok(Self::Mock);
        }
        #[cfg(feature = "native-proofs")]
        {
            Ok(Self::Native)
        }
        #[cfg(not(feature = "native-proofs"))]
        {
            anyhow::bail!(
                "native proofs are unavailable, forest-wincount needs to be recompiled with `native-proofs` feature (or pass `--mock-proofs`)"
            )
        }
    }
}

/// Expands to `$body` with `$p` bound to the prover type of `$backend`.
macro_rules! with_prover {
    ($backend:expr, $p:ident => $body:expr) => {
        match $backend {
            $crate::cli::subcommands::ProverBackend::Mock => {
                type $p = $crate::proofs::MockProver;
                $body
            }
            #[cfg(feature = "native-proofs")]
            $crate::cli::subcommands::ProverBackend::Native => {
                type $p = $crate::proofs::NativeProver;
                $body
            }
        }
    };
}
pub(super) use with_prover;
