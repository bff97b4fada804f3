// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::blocks::VRFProof;

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct VRFProofLotusJson(#[serde(with = "base64_standard")] Vec<u8>);

impl HasLotusJson for VRFProof {
    type LotusJson = VRFProofLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![(
            json!("aGVsbG8gd29ybGQh"),
            VRFProof::new(Vec::from_iter(*b"hello world!")),
        )]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        VRFProofLotusJson(self.0)
    }

    fn from_lotus_json(VRFProofLotusJson(bytes): Self::LotusJson) -> Self {
        VRFProof::new(bytes)
    }
}
