// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use anyhow::{Context as _, ensure};
use blake2b_simd::Params;

use super::{PrivateSectorInfo, WinningPoStProver, WinningPoStVerifyInfo, prover_id_from_u64};
use crate::shim::address::ActorID;
use crate::shim::randomness::Randomness;
use crate::shim::sector::{
    PoStProof, RegisteredPoStProof, SectorInfo, registered_winning_post_proof,
};

const MOCK_PROOF_DOMAIN: &[u8] = b"forest-wincount/mock-winning-post";

/// Mock prover. Proofs are a digest of the prover, the randomness and the
/// challenged sectors, so they verify only against exactly those inputs. No
/// sector data is read.
pub enum MockProver {}

fn mock_proof_bytes<'a>(
    post_proof: RegisteredPoStProof,
    prover: ActorID,
    randomness: &Randomness,
    sectors: impl IntoIterator<Item = &'a SectorInfo>,
) -> Vec<u8> {
    let mut state = Params::new().hash_length(32).to_state();
    state.update(MOCK_PROOF_DOMAIN);
    state.update(&i64::from(post_proof).to_be_bytes());
    state.update(&prover_id_from_u64(prover));
    state.update(randomness.as_bytes());
    for sector in sectors {
        state.update(&sector.sector_number.to_be_bytes());
        state.update(&sector.sealed_cid.to_bytes());
    }
    state.finalize().as_bytes().to_vec()
}

impl WinningPoStProver for MockProver {
    fn generate_winning_post(
        prover: ActorID,
        randomness: &Randomness,
        challenged: &[PrivateSectorInfo],
    ) -> anyhow::Result<Vec<PoStProof>> {
        let post_proof = challenged
            .first()
            .context("no sectors to prove")?
            .post_proof;
        ensure!(
            challenged.iter().all(|s| s.post_proof == post_proof),
            "challenged sectors use different PoSt proofs"
        );
        Ok(vec![PoStProof {
            post_proof,
            proof_bytes: mock_proof_bytes(
                post_proof,
                prover,
                randomness,
                challenged.iter().map(|s| &s.info),
            ),
        }])
    }

    fn verify_winning_post(info: &WinningPoStVerifyInfo) -> anyhow::Result<bool> {
        let seal_proof = info
            .challenged_sectors
            .first()
            .context("no challenged sectors")?
            .proof;
        let post_proof = registered_winning_post_proof(seal_proof)?;
        let expected = mock_proof_bytes(
            post_proof,
            info.prover,
            &info.randomness,
            &info.challenged_sectors,
        );
        Ok(info
            .proofs
            .iter()
            .all(|p| p.post_proof == post_proof && p.proof_bytes == expected))
    }
}
