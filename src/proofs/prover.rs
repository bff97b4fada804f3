// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::PrivateSectorInfo;
use crate::shim::address::ActorID;
use crate::shim::randomness::Randomness;
use crate::shim::sector::{PoStProof, SectorInfo};

/// Everything needed to check a Winning PoSt against public chain data.
#[derive(Clone, Debug, PartialEq)]
pub struct WinningPoStVerifyInfo {
    pub randomness: Randomness,
    pub proofs: Vec<PoStProof>,
    pub challenged_sectors: Vec<SectorInfo>,
    pub prover: ActorID,
}

/// A proof system able to produce and check Winning PoSts.
///
/// Sector selection happens before a prover is invoked: implementations only
/// see the challenged sectors.
pub trait WinningPoStProver: 'static {
    fn generate_winning_post(
        prover: ActorID,
        randomness: &Randomness,
        challenged: &[PrivateSectorInfo],
    ) -> anyhow::Result<Vec<PoStProof>>;

    /// `Ok(false)` means the proof is well formed but does not hold.
    fn verify_winning_post(info: &WinningPoStVerifyInfo) -> anyhow::Result<bool>;
}
