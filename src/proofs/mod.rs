// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Winning PoSt: choosing which sectors a winning miner must prove, and the
//! round trip through a prover backend that generates and checks the proof.

pub mod challenge;
mod mock;
#[cfg(feature = "native-proofs")]
mod native;
mod private_sector;
mod prover;
mod winning_post;

use std::path::PathBuf;

use thiserror::Error;

use crate::shim::sector::{RegisteredSealProof, SectorNumber};

pub use challenge::{
    ProverId, challenged_sectors, generate_winning_post_sector_challenge, prover_id_from_u64,
    sector_challenge_indices,
};
pub use mock::MockProver;
#[cfg(feature = "native-proofs")]
pub use native::NativeProver;
#[cfg(test)]
pub(crate) use private_sector::create_sector_files;
pub use private_sector::{LocalSectorStore, PrivateSectorInfo};
pub use prover::{WinningPoStProver, WinningPoStVerifyInfo};
pub use winning_post::{generate_winning_post, verify_winning_post};

/// Validation failures at the proof boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("proving set is empty")]
    EmptyProvingSet,
    #[error("expected {expected} winning PoSt proof(s), got {actual}")]
    ChallengeCountMismatch { expected: usize, actual: usize },
    #[error("proving set mixes seal proofs {0:?} and {1:?}")]
    MixedSealProofs(RegisteredSealProof, RegisteredSealProof),
    #[error("no winning PoSt proof for seal proof {0:?}")]
    UnsupportedSealProof(RegisteredSealProof),
    #[error("randomness is not a valid field element")]
    RandomnessOutOfField,
    #[error("sector {sector} is unavailable at {}", path.display())]
    SectorUnavailable { sector: SectorNumber, path: PathBuf },
}
