// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Walks a range of rounds, running the election for one miner in each and
//! producing a Winning PoSt for the rounds it wins.

mod artifact;

pub use artifact::{WinningPoStArtifact, WinningPoStArtifactLotusJson};

use std::fmt;
use std::num::NonZeroUsize;
use std::path::PathBuf;

use anyhow::Context as _;
use futures::{Stream, StreamExt as _};
use itertools::Itertools as _;
use tracing::{error, info, warn};

use crate::blocks::ElectionProof;
use crate::proofs::{LocalSectorStore, WinningPoStProver, generate_winning_post};
use crate::shim::address::{Address, actor_id};
use crate::shim::clock::ChainEpoch;
use crate::shim::sector::SectorNumber;
use crate::state_manager::{ChainApi, MiningBaseInfo, draw_post_randomness, is_round_winner};

/// What to evaluate and where to put the results.
#[derive(Clone, Debug)]
pub struct RunParams {
    pub miner: Address,
    pub begin: ChainEpoch,
    pub end: ChainEpoch,
    /// Generate a Winning PoSt for won rounds from the sectors stored here.
    pub sector_store: Option<LocalSectorStore>,
    /// Save generated Winning PoSts into this directory.
    pub out_dir: Option<PathBuf>,
    pub parallelism: NonZeroUsize,
}

/// The outcome of verifying a Winning PoSt, printed the way operators expect
/// to grep for it.
#[derive(Debug)]
pub struct VerifyReport(pub anyhow::Result<bool>);

impl VerifyReport {
    pub fn is_ok(&self) -> bool {
        matches!(self.0, Ok(true))
    }
}

impl fmt::Display for VerifyReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Ok(ok) => write!(f, "verify winningPoSt ok {ok} error none"),
            Err(e) => write!(f, "verify winningPoSt ok false error {e:#}"),
        }
    }
}

/// Winning PoSt produced for a won round.
#[derive(Debug)]
pub struct PoStReport {
    pub artifact: WinningPoStArtifact,
    pub saved_to: Option<PathBuf>,
    pub verified: VerifyReport,
}

#[derive(Debug)]
pub enum RoundOutcome {
    /// The chain could not provide what the round needs.
    Skipped(anyhow::Error),
    /// The miner has no mining base.
    NotEligible,
    Lost,
    Won {
        win_count: i64,
        sectors: Vec<SectorNumber>,
        post: Option<PoStReport>,
    },
    /// The round was won but its Winning PoSt could not be produced.
    Failed { win_count: i64, error: anyhow::Error },
}

#[derive(Debug)]
pub struct RoundReport {
    pub miner: Address,
    pub round: ChainEpoch,
    pub outcome: RoundOutcome,
}

impl fmt::Display for RoundReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            miner,
            round,
            outcome,
        } = self;
        match outcome {
            RoundOutcome::Skipped(e) => write!(f, "actor {miner} height {round} skipped: {e:#}"),
            RoundOutcome::NotEligible => write!(f, "actor {miner} height {round} not eligible"),
            RoundOutcome::Lost => write!(f, "actor {miner} height {round} wincount 0"),
            RoundOutcome::Won {
                win_count,
                sectors,
                post,
            } => {
                write!(
                    f,
                    "actor {miner} height {round} wincount {win_count} sectors [{}]",
                    sectors.iter().join(" ")
                )?;
                if let Some(post) = post {
                    write!(f, "\n{}", post.verified)?;
                }
                Ok(())
            }
            RoundOutcome::Failed { win_count, error } => write!(
                f,
                "actor {miner} height {round} wincount {win_count} winning PoSt failed: {error:#}"
            ),
        }
    }
}

/// Evaluates every round of `[params.begin, params.end]`, at most
/// `params.parallelism` at a time. Reports come out in round order.
pub fn run_rounds<'a, C, P>(
    api: &'a C,
    params: &'a RunParams,
) -> impl Stream<Item = RoundReport> + 'a
where
    C: ChainApi + ?Sized,
    P: WinningPoStProver,
{
    futures::stream::iter(params.begin..=params.end)
        .map(move |round| async move {
            RoundReport {
                miner: params.miner,
                round,
                outcome: run_round::<C, P>(api, params, round).await,
            }
        })
        .buffered(params.parallelism.get())
}

async fn run_round<C, P>(api: &C, params: &RunParams, round: ChainEpoch) -> RoundOutcome
where
    C: ChainApi + ?Sized,
    P: WinningPoStProver,
{
    let (base, election) = match elect(api, &params.miner, round).await {
        Ok(Some(it)) => it,
        Ok(None) => return RoundOutcome::NotEligible,
        Err(e) => {
            warn!("skipping round {round}: {e:#}");
            return RoundOutcome::Skipped(e);
        }
    };
    let Some(ElectionProof { win_count, .. }) = election else {
        return RoundOutcome::Lost;
    };
    info!(
        "actor {} won round {round} with win count {win_count}",
        params.miner
    );

    let post = match &params.sector_store {
        Some(store) => match prove::<P>(params, store, round, &base).await {
            Ok(post) => Some(post),
            Err(error) => {
                error!("winning PoSt for round {round} failed: {error:#}");
                return RoundOutcome::Failed { win_count, error };
            }
        },
        None => None,
    };
    RoundOutcome::Won {
        win_count,
        sectors: base.sectors.iter().map(|s| s.sector_number).collect(),
        post,
    }
}

/// `None` if the miner cannot take part in the election at `round`.
async fn elect<C>(
    api: &C,
    miner: &Address,
    round: ChainEpoch,
) -> anyhow::Result<Option<(MiningBaseInfo, Option<ElectionProof>)>>
where
    C: ChainApi + ?Sized,
{
    let parent = api
        .chain_get_tipset_by_height(round - 1)
        .await
        .with_context(|| format!("failed to load tipset at height {}", round - 1))?;
    let Some(base) = api
        .miner_get_base_info(miner, round, parent.key())
        .await
        .with_context(|| format!("failed to load mining base of {miner} on {}", parent.key()))?
    else {
        return Ok(None);
    };
    let election = is_round_winner(api, miner, round, &base).await?;
    Ok(Some((base, election)))
}

async fn prove<P: WinningPoStProver>(
    params: &RunParams,
    store: &LocalSectorStore,
    round: ChainEpoch,
    base: &MiningBaseInfo,
) -> anyhow::Result<PoStReport> {
    let miner_id = actor_id(&params.miner)?;
    let randomness = draw_post_randomness(base.beacon(), round, &params.miner)?;

    let proofs = {
        let sectors = base.sectors.clone();
        let store = store.clone();
        tokio::task::spawn_blocking(move || {
            generate_winning_post::<P>(miner_id, &sectors, &store, &randomness)
        })
        .await??
    };
    let artifact = WinningPoStArtifact {
        miner_id,
        sectors: base.sectors.clone(),
        proofs,
        randomness,
    };

    let saved_to = match &params.out_dir {
        Some(dir) => {
            let path = dir.join(WinningPoStArtifact::file_name(miner_id, round));
            artifact.save(&path)?;
            info!("saved winning PoSt of round {round} to {}", path.display());
            Some(path)
        }
        None => None,
    };

    let verified = {
        let artifact = artifact.clone();
        VerifyReport(tokio::task::spawn_blocking(move || artifact.verify::<P>()).await?)
    };
    Ok(PoStReport {
        artifact,
        saved_to,
        verified,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::proofs::MockProver;
    use crate::state_manager::test_utils::{FakeChain, base_info};
    use crate::shim::sector::StoragePower;

    fn params(begin: ChainEpoch, end: ChainEpoch) -> RunParams {
        RunParams {
            miner: Address::new_id(1000),
            begin,
            end,
            sector_store: None,
            out_dir: None,
            parallelism: NonZeroUsize::new(4).unwrap(),
        }
    }

    async fn run(chain: &FakeChain, params: &RunParams) -> Vec<RoundReport> {
        run_rounds::<_, MockProver>(chain, params).collect().await
    }

    #[tokio::test]
    async fn failing_round_is_skipped() {
        let chain = FakeChain::new(base_info(5), vec![2; 96]).with_failing_round(15);
        let reports = run(&chain, &params(10, 20)).await;

        assert_eq!(
            reports.iter().map(|r| r.round).collect::<Vec<_>>(),
            (10..=20).collect::<Vec<_>>()
        );
        for report in &reports {
            match report.round {
                15 => assert!(matches!(report.outcome, RoundOutcome::Skipped(_))),
                _ => assert!(matches!(
                    report.outcome,
                    RoundOutcome::Won { win_count: 2, .. }
                )),
            }
        }
        let mut calls = chain.base_info_calls();
        calls.sort();
        assert_eq!(calls, (10..=20).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn missing_parent_tipset_is_skipped() {
        let chain = FakeChain::new(base_info(5), vec![2; 96]).with_missing_height(11);
        let reports = run(&chain, &params(10, 13)).await;
        assert!(matches!(reports[2].outcome, RoundOutcome::Skipped(_)));
        assert_eq!(reports[2].round, 12);
        assert!(!chain.base_info_calls().contains(&12));
        assert!(
            reports
                .iter()
                .filter(|r| r.round != 12)
                .all(|r| matches!(r.outcome, RoundOutcome::Won { .. }))
        );
    }

    #[tokio::test]
    async fn losing_and_ineligible_rounds_win_nothing() {
        let mut base = base_info(5);
        base.miner_power = StoragePower::from(1);
        let chain = FakeChain::new(base.clone(), vec![2; 96]);
        let reports = run(&chain, &params(1, 1)).await;
        assert!(matches!(reports[0].outcome, RoundOutcome::Lost));
        assert_eq!(reports[0].to_string(), "actor f01000 height 1 wincount 0");

        base.miner_power = StoragePower::from(100);
        base.eligible_for_mining = false;
        let chain = FakeChain::new(base, vec![2; 96]);
        let reports = run(&chain, &params(1, 1)).await;
        assert!(matches!(reports[0].outcome, RoundOutcome::Lost));
        assert!(chain.signed().is_empty());
    }

    #[tokio::test]
    async fn round_without_mining_base_is_not_eligible() {
        let chain = FakeChain::new(base_info(5), vec![2; 96]).with_no_base_at(2);
        let reports = run(&chain, &params(1, 3)).await;
        assert!(matches!(reports[1].outcome, RoundOutcome::NotEligible));
        assert_eq!(reports[1].to_string(), "actor f01000 height 2 not eligible");
        assert!(matches!(reports[0].outcome, RoundOutcome::Won { .. }));
        assert!(matches!(reports[2].outcome, RoundOutcome::Won { .. }));
    }

    #[tokio::test]
    async fn won_round_produces_verified_artifact() {
        let sectors = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let store = LocalSectorStore::new(sectors.path());
        for n in 0..5 {
            crate::proofs::create_sector_files(&store, 1000, n);
        }
        let params = RunParams {
            sector_store: Some(store),
            out_dir: Some(out.path().to_owned()),
            ..params(1000, 1000)
        };
        let chain = FakeChain::new(base_info(5), vec![2; 96]);
        let reports = run(&chain, &params).await;

        let RoundOutcome::Won {
            win_count,
            post: Some(post),
            ..
        } = &reports[0].outcome
        else {
            panic!("unexpected outcome {:?}", reports[0].outcome);
        };
        assert_eq!(*win_count, 2);
        assert!(post.verified.is_ok());
        let path = out.path().join("winning-post-1000-1000.json");
        assert_eq!(post.saved_to.as_deref(), Some(path.as_path()));
        assert_eq!(WinningPoStArtifact::load(&path).unwrap(), post.artifact);
        assert!(post.artifact.randomness.is_fr_safe());
        assert_eq!(
            reports[0].to_string(),
            "actor f01000 height 1000 wincount 2 sectors [0 1 2 3 4]\nverify winningPoSt ok true error none"
        );
    }

    #[tokio::test]
    async fn missing_sector_fails_only_that_round() {
        let sectors = tempfile::tempdir().unwrap();
        let params = RunParams {
            sector_store: Some(LocalSectorStore::new(sectors.path())),
            ..params(1000, 1001)
        };
        let chain = FakeChain::new(base_info(5), vec![2; 96]);
        let reports = run(&chain, &params).await;
        assert_eq!(reports.len(), 2);
        assert!(
            reports
                .iter()
                .all(|r| matches!(r.outcome, RoundOutcome::Failed { win_count: 2, .. }))
        );
    }

    #[test]
    fn verify_report_format() {
        assert_eq!(
            VerifyReport(Ok(false)).to_string(),
            "verify winningPoSt ok false error none"
        );
        assert_eq!(
            VerifyReport(Err(anyhow::anyhow!("proving set is empty"))).to_string(),
            "verify winningPoSt ok false error proving set is empty"
        );
    }
}
