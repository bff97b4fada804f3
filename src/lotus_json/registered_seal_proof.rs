// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::shim::sector::RegisteredSealProof;

impl HasLotusJson for RegisteredSealProof {
    type LotusJson = i64;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![
            (json!(0), RegisteredSealProof::StackedDRG2KiBV1),
            (json!(8), RegisteredSealProof::StackedDRG32GiBV1P1),
        ]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        i64::from(self)
    }

    fn from_lotus_json(i: Self::LotusJson) -> Self {
        Self::from(i)
    }
}

#[test]
fn snapshots() {
    assert_all_snapshots::<RegisteredSealProof>();
}
