// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use anyhow::Context as _;
use tracing::{debug, warn};

use super::{
    Error, LocalSectorStore, WinningPoStProver, WinningPoStVerifyInfo, challenged_sectors,
};
use crate::shim::address::ActorID;
use crate::shim::randomness::Randomness;
use crate::shim::sector::{PoStProof, SectorInfo};

/// Number of proofs making up a Winning PoSt: one partition.
const WINNING_POST_PARTITIONS: usize = 1;

/// Generates the Winning PoSt of `prover` over its `proving_set`, reading the
/// challenged replicas from `store`.
pub fn generate_winning_post<P: WinningPoStProver>(
    prover: ActorID,
    proving_set: &[SectorInfo],
    store: &LocalSectorStore,
    randomness: &Randomness,
) -> anyhow::Result<Vec<PoStProof>> {
    if !randomness.is_fr_safe() {
        return Err(Error::RandomnessOutOfField.into());
    }
    let (post_proof, challenged) = challenged_sectors(prover, proving_set, randomness)?;
    debug!(
        "challenged sectors of f0{prover}: {:?}",
        challenged.iter().map(|s| s.sector_number).collect::<Vec<_>>()
    );
    let private = challenged
        .iter()
        .map(|sector| store.resolve(prover, post_proof, sector))
        .collect::<Result<Vec<_>, _>>()?;
    P::generate_winning_post(prover, randomness, &private)
        .context("failed to generate winning PoSt")
}

/// Checks `proofs` as the Winning PoSt of `prover` over its `proving_set`.
///
/// Malformed inputs are errors. A proof that does not hold, including one
/// checked against randomness outside the field, is `Ok(false)`.
pub fn verify_winning_post<P: WinningPoStProver>(
    prover: ActorID,
    proving_set: &[SectorInfo],
    proofs: &[PoStProof],
    randomness: &Randomness,
) -> anyhow::Result<bool> {
    let (_, challenged) = challenged_sectors(prover, proving_set, randomness)?;
    if proofs.len() != WINNING_POST_PARTITIONS {
        return Err(Error::ChallengeCountMismatch {
            expected: WINNING_POST_PARTITIONS,
            actual: proofs.len(),
        }
        .into());
    }
    if !randomness.is_fr_safe() {
        warn!("randomness {randomness} for the winning PoSt of f0{prover} is outside the field");
        return Ok(false);
    }
    P::verify_winning_post(&WinningPoStVerifyInfo {
        randomness: *randomness,
        proofs: proofs.to_vec(),
        challenged_sectors: challenged,
        prover,
    })
}
