// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::io::Write as _;

use anyhow::Context as _;
use blake2b_simd::Params;
use byteorder::{BigEndian, WriteBytesExt as _};

use crate::beacon::BeaconEntry;
use crate::shim::address::{Address, address_entropy};
use crate::shim::clock::ChainEpoch;
use crate::shim::crypto::DomainSeparationTag;
use crate::shim::randomness::Randomness;
use crate::utils::encoding::blake2b_256;

/// Computes a pseudo random 32 byte `Vec`.
pub fn draw_randomness(
    rbase: &[u8],
    pers: i64,
    round: ChainEpoch,
    entropy: &[u8],
) -> anyhow::Result<[u8; 32]> {
    let mut state = Params::new().hash_length(32).to_state();
    state.write_i64::<BigEndian>(pers)?;
    let vrf_digest = blake2b_256(rbase);
    state.write_all(&vrf_digest)?;
    state.write_i64::<BigEndian>(round)?;
    state.write_all(entropy)?;
    let mut ret = [0u8; 32];
    ret.clone_from_slice(state.finalize().as_bytes());
    Ok(ret)
}

fn draw_for_miner(
    beacon: &BeaconEntry,
    tag: DomainSeparationTag,
    round: ChainEpoch,
    miner: &Address,
) -> anyhow::Result<Randomness> {
    let entropy = address_entropy(miner)?;
    let rand = draw_randomness(beacon.data(), tag as i64, round, &entropy)
        .with_context(|| format!("failed to draw {tag} randomness for {miner} at {round}"))?;
    Ok(Randomness::new(rand))
}

/// Randomness a miner's Winning PoSt is challenged with, masked so that the
/// proof system can take it as a field element.
pub fn draw_post_randomness(
    beacon: &BeaconEntry,
    round: ChainEpoch,
    miner: &Address,
) -> anyhow::Result<Randomness> {
    Ok(draw_for_miner(
        beacon,
        DomainSeparationTag::WinningPoStChallengeSeed,
        round,
        miner,
    )?
    .into_post_randomness())
}

/// Randomness a miner's worker key signs to produce its election VRF output.
pub fn draw_election_randomness(
    beacon: &BeaconEntry,
    round: ChainEpoch,
    miner: &Address,
) -> anyhow::Result<Randomness> {
    draw_for_miner(
        beacon,
        DomainSeparationTag::ElectionProofProduction,
        round,
        miner,
    )
}
