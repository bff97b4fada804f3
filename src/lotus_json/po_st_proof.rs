// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::shim::sector::{PoStProof, RegisteredPoStProof};

use super::*;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PoStProofLotusJson {
    po_st_proof: LotusJson<RegisteredPoStProof>,
    proof_bytes: LotusJson<Vec<u8>>,
}

impl HasLotusJson for PoStProof {
    type LotusJson = PoStProofLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![(
            json!({
                "PoStProof": 0,
                "ProofBytes": "aGVsbG8gd29ybGQh"
            }),
            PoStProof {
                post_proof: RegisteredPoStProof::StackedDRGWinning2KiBV1,
                proof_bytes: Vec::from_iter(*b"hello world!"),
            },
        )]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        let PoStProof {
            post_proof,
            proof_bytes,
        } = self;
        Self::LotusJson {
            po_st_proof: post_proof.into(),
            proof_bytes: proof_bytes.into(),
        }
    }

    fn from_lotus_json(lotus_json: Self::LotusJson) -> Self {
        let Self::LotusJson {
            po_st_proof,
            proof_bytes,
        } = lotus_json;
        PoStProof {
            post_proof: po_st_proof.into_inner(),
            proof_bytes: proof_bytes.into_inner(),
        }
    }
}

#[test]
fn snapshots() {
    assert_all_snapshots::<PoStProof>();
}
