// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::pin::pin;

use futures::StreamExt as _;
use tracing::info;

use super::{ProverBackend, with_prover};
use crate::cli_shared::cli::Config;
use crate::mining::{RoundOutcome, RunParams, run_rounds};
use crate::proofs::{LocalSectorStore, WinningPoStProver};
use crate::rpc_client::ApiInfo;
use crate::shim::address::{Address, parse_address};
use crate::shim::clock::ChainEpoch;

#[derive(Debug, clap::Args)]
pub struct RunCommand {
    /// First round to evaluate
    #[arg(long)]
    pub(super) begin: ChainEpoch,
    /// Last round to evaluate, inclusive
    #[arg(long)]
    pub(super) end: ChainEpoch,
    /// Miner actor, e.g. `f01000`
    #[arg(long, value_parser = parse_address)]
    pub(super) actor: Address,
    /// Sector store root. When set, a Winning PoSt is generated and verified
    /// for every won round
    #[arg(long)]
    pub(super) path: Option<PathBuf>,
    /// Directory to save generated Winning PoSts into
    #[arg(long)]
    pub(super) out: Option<PathBuf>,
    /// Use the deterministic mock prover
    #[arg(long)]
    pub(super) mock_proofs: bool,
    /// Rounds evaluated concurrently. Defaults to the number of CPUs
    #[arg(long)]
    pub(super) parallelism: Option<NonZeroUsize>,
}

impl RunCommand {
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        anyhow::ensure!(self.begin >= 0, "--begin must not be negative");
        anyhow::ensure!(
            self.begin <= self.end,
            "empty range: --begin {} is after --end {}",
            self.begin,
            self.end
        );
        let api = config.client.api_info()?;
        info!("using node at {}", api.url());

        let params = RunParams {
            miner: self.actor,
            begin: self.begin,
            end: self.end,
            sector_store: self
                .path
                .or(config.proving.sector_path)
                .map(LocalSectorStore::new),
            out_dir: self.out.or(config.proving.out_dir),
            parallelism: self.parallelism.unwrap_or(config.proving.parallelism),
        };
        // Without a sector store no proof is ever generated, so any prover will do.
        let backend = match params.sector_store {
            Some(_) => ProverBackend::select(self.mock_proofs || config.proving.mock_proofs)?,
            None => ProverBackend::Mock,
        };
        with_prover!(backend, P => print_reports::<P>(&api, &params).await);
        Ok(())
    }
}

async fn print_reports<P: WinningPoStProver>(api: &ApiInfo, params: &RunParams) {
    let mut reports = pin!(run_rounds::<_, P>(api, params));
    let (mut won, mut total) = (0, 0);
    while let Some(report) = reports.next().await {
        total += 1;
        if matches!(
            report.outcome,
            RoundOutcome::Won { .. } | RoundOutcome::Failed { .. }
        ) {
            won += 1;
        }
        println!("{report}");
    }
    info!("{} won {won} of {total} rounds", params.miner);
}
