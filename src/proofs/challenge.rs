// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use anyhow::Context as _;
use byteorder::{ByteOrder as _, LittleEndian};
use sha2::{Digest as _, Sha256};

use super::Error;
use crate::shim::address::{ActorID, Address};
use crate::shim::randomness::Randomness;
use crate::shim::sector::{
    RegisteredPoStProof, SectorInfo, registered_winning_post_proof, winning_post_sector_count,
};

pub type ProverId = [u8; 32];

/// Prover ID of an actor: the payload of its ID address, zero padded.
pub fn prover_id_from_u64(id: u64) -> ProverId {
    let mut prover_id = ProverId::default();
    let prover_bytes = Address::new_id(id).payload().to_raw_bytes();
    prover_id[..prover_bytes.len()].copy_from_slice(&prover_bytes);
    prover_id
}

/// Index of the `n`-th challenged sector in a set of `sector_set_len` sectors.
fn generate_sector_challenge(
    randomness: &Randomness,
    n: u64,
    sector_set_len: u64,
    prover_id: &ProverId,
) -> u64 {
    let mut hasher = Sha256::new();
    hasher.update(prover_id);
    hasher.update(randomness.as_bytes());
    hasher.update(n.to_le_bytes());
    let hash = hasher.finalize();
    LittleEndian::read_u64(&hash[..8]) % sector_set_len
}

/// Draws `challenge_count` indices into a proving set of `sector_set_len`
/// sectors. Indices may repeat and are returned in the order they are drawn.
pub fn sector_challenge_indices(
    randomness: &Randomness,
    prover: ActorID,
    sector_set_len: u64,
    challenge_count: u64,
) -> Result<Vec<u64>, Error> {
    if sector_set_len == 0 {
        return Err(Error::EmptyProvingSet);
    }
    let prover_id = prover_id_from_u64(prover);
    Ok((0..challenge_count)
        .map(|n| generate_sector_challenge(randomness, n, sector_set_len, &prover_id))
        .collect())
}

/// Challenged indices for a Winning PoSt of type `proof`.
pub fn generate_winning_post_sector_challenge(
    proof: RegisteredPoStProof,
    prover: ActorID,
    randomness: &Randomness,
    sector_set_len: u64,
) -> anyhow::Result<Vec<u64>> {
    let challenge_count = winning_post_sector_count(proof)?;
    Ok(sector_challenge_indices(
        randomness,
        prover,
        sector_set_len,
        challenge_count,
    )?)
}

/// Resolves the sectors of `proving_set` that a Winning PoSt drawn with
/// `randomness` must cover, along with the proof type covering them.
///
/// Both proof generation and verification select sectors through here, so a
/// proof is always checked against the sectors it was generated for.
pub fn challenged_sectors(
    prover: ActorID,
    proving_set: &[SectorInfo],
    randomness: &Randomness,
) -> anyhow::Result<(RegisteredPoStProof, Vec<SectorInfo>)> {
    let first = proving_set.first().ok_or(Error::EmptyProvingSet)?;
    if let Some(other) = proving_set.iter().find(|s| s.proof != first.proof) {
        return Err(Error::MixedSealProofs(first.proof, other.proof).into());
    }
    let post_proof = registered_winning_post_proof(first.proof)
        .map_err(|_| Error::UnsupportedSealProof(first.proof))?;

    let indices = generate_winning_post_sector_challenge(
        post_proof,
        prover,
        randomness,
        proving_set.len() as u64,
    )?;
    let sectors = indices
        .into_iter()
        .map(|i| {
            proving_set
                .get(i as usize)
                .cloned()
                .with_context(|| format!("challenge index {i} is outside the proving set"))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok((post_proof, sectors))
}
