// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::shim::sector::RegisteredPoStProof;

use super::*;

impl HasLotusJson for RegisteredPoStProof {
    type LotusJson = i64;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![
            (json!(0), RegisteredPoStProof::StackedDRGWinning2KiBV1),
            (json!(3), RegisteredPoStProof::StackedDRGWinning32GiBV1),
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
    assert_all_snapshots::<RegisteredPoStProof>();
}
