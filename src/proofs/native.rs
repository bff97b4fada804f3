// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::collections::BTreeMap;

use anyhow::{Context as _, anyhow};
use filecoin_proofs_api::{PrivateReplicaInfo, PublicReplicaInfo, SectorId, post};
use fvm_shared4::commcid::cid_to_replica_commitment_v1;

use super::{PrivateSectorInfo, WinningPoStProver, WinningPoStVerifyInfo, prover_id_from_u64};
use crate::shim::address::ActorID;
use crate::shim::randomness::Randomness;
use crate::shim::sector::{
    PoStProof, RegisteredPoStProof, SectorInfo, registered_winning_post_proof,
};

/// Prover backed by `filecoin-proofs-api`. Needs the Groth parameters for the
/// sector size in `FIL_PROOFS_PARAMETER_CACHE`.
pub enum NativeProver {}

fn proofs_api_post_proof(
    post_proof: RegisteredPoStProof,
) -> anyhow::Result<filecoin_proofs_api::RegisteredPoStProof> {
    post_proof.try_into().map_err(|e: String| anyhow!(e))
}

fn comm_r(sector: &SectorInfo) -> anyhow::Result<[u8; 32]> {
    cid_to_replica_commitment_v1(&sector.sealed_cid).map_err(|e| {
        anyhow!(
            "invalid sealed CID {} of sector {}: {e}",
            sector.sealed_cid,
            sector.sector_number
        )
    })
}

impl WinningPoStProver for NativeProver {
    fn generate_winning_post(
        prover: ActorID,
        randomness: &Randomness,
        challenged: &[PrivateSectorInfo],
    ) -> anyhow::Result<Vec<PoStProof>> {
        let post_proof = challenged
            .first()
            .context("no sectors to prove")?
            .post_proof;
        let replicas = challenged
            .iter()
            .map(|s| {
                let info = PrivateReplicaInfo::new(
                    proofs_api_post_proof(s.post_proof)?,
                    comm_r(&s.info)?,
                    s.cache_dir.clone(),
                    s.sealed_path.clone(),
                );
                Ok((SectorId::from(s.info.sector_number), info))
            })
            .collect::<anyhow::Result<BTreeMap<_, _>>>()?;

        let seed: [u8; 32] = (*randomness).into();
        let proofs = post::generate_winning_post(&seed, &replicas, prover_id_from_u64(prover))?;
        Ok(proofs
            .into_iter()
            .map(|(_, proof_bytes)| PoStProof {
                post_proof,
                proof_bytes,
            })
            .collect())
    }

    fn verify_winning_post(info: &WinningPoStVerifyInfo) -> anyhow::Result<bool> {
        let proof = match info.proofs.as_slice() {
            [proof] => proof,
            proofs => anyhow::bail!("expected 1 winning PoSt proof, got {}", proofs.len()),
        };
        let replicas = info
            .challenged_sectors
            .iter()
            .map(|s| {
                let post_proof = registered_winning_post_proof(s.proof)?;
                let info = PublicReplicaInfo::new(proofs_api_post_proof(post_proof)?, comm_r(s)?);
                Ok((SectorId::from(s.sector_number), info))
            })
            .collect::<anyhow::Result<BTreeMap<_, _>>>()?;

        let seed: [u8; 32] = info.randomness.into();
        post::verify_winning_post(
            &seed,
            &proof.proof_bytes,
            &replicas,
            prover_id_from_u64(info.prover),
        )
    }
}
