// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;

use num::BigInt;

#[derive(Serialize, Deserialize, From, derive_more::Into)]
#[serde(transparent)]
pub struct BigIntLotusJson(#[serde(with = "stringify")] BigInt);

impl HasLotusJson for BigInt {
    type LotusJson = BigIntLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![
            (json!("1"), BigInt::from(1)),
            (
                json!("31128044282757120"),
                BigInt::from(31_128_044_282_757_120u64),
            ),
        ]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        self.into()
    }

    fn from_lotus_json(lotus_json: Self::LotusJson) -> Self {
        lotus_json.into()
    }
}
