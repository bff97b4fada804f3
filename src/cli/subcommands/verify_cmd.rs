// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::path::PathBuf;

use anyhow::Context as _;

use super::{ProverBackend, with_prover};
use crate::cli_shared::cli::Config;
use crate::mining::{VerifyReport, WinningPoStArtifact};
use crate::proofs::WinningPoStProver;

#[derive(Debug, clap::Args)]
pub struct VerifyCommand {
    /// Winning PoSt saved by `forest-wincount run`
    #[arg(long = "in")]
    pub(super) input: PathBuf,
    /// Use the deterministic mock prover
    #[arg(long)]
    pub(super) mock_proofs: bool,
}

impl VerifyCommand {
    pub async fn run(self, config: Config) -> anyhow::Result<()> {
        let artifact = WinningPoStArtifact::load(&self.input)?;
        let backend = ProverBackend::select(self.mock_proofs || config.proving.mock_proofs)?;
        let report = with_prover!(backend, P => verify::<P>(artifact).await?);
        println!("{report}");
        Ok(())
    }
}

async fn verify<P: WinningPoStProver>(
    artifact: WinningPoStArtifact,
) -> anyhow::Result<VerifyReport> {
    let result = tokio::task::spawn_blocking(move || artifact.verify::<P>())
        .await
        .context("verification task panicked")?;
    Ok(VerifyReport(result))
}
