// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::shim::sector::{RegisteredSealProof, SectorInfo};

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SectorInfoLotusJson {
    seal_proof: LotusJson<RegisteredSealProof>,
    sector_number: u64,
    #[serde(rename = "SealedCID")]
    sealed_cid: LotusJson<::cid::Cid>,
}

impl HasLotusJson for SectorInfo {
    type LotusJson = SectorInfoLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![(
            json!({
                "SealProof": 8,
                "SectorNumber": 3,
                "SealedCID": {
                    "/": "baeaaaaa"
                }
            }),
            SectorInfo {
                proof: RegisteredSealProof::StackedDRG32GiBV1P1,
                sector_number: 3,
                sealed_cid: ::cid::Cid::default(),
            },
        )]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        let SectorInfo {
            proof,
            sector_number,
            sealed_cid,
        } = self;
        Self::LotusJson {
            seal_proof: proof.into(),
            sector_number,
            sealed_cid: sealed_cid.into(),
        }
    }

    fn from_lotus_json(lotus_json: Self::LotusJson) -> Self {
        let Self::LotusJson {
            seal_proof,
            sector_number,
            sealed_cid,
        } = lotus_json;
        SectorInfo {
            proof: seal_proof.into_inner(),
            sector_number,
            sealed_cid: sealed_cid.into_inner(),
        }
    }
}

#[test]
fn snapshots() {
    assert_all_snapshots::<SectorInfo>();
}
