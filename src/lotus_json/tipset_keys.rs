// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::blocks::TipsetKey;
use ::cid::Cid;

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct TipsetKeyLotusJson(#[serde(with = "crate::lotus_json")] Vec<Cid>);

impl HasLotusJson for TipsetKey {
    type LotusJson = TipsetKeyLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![(
            json!([{"/": "baeaaaaa"}]),
            TipsetKey::from(vec![Cid::default()]),
        )]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        TipsetKeyLotusJson(self.into())
    }

    fn from_lotus_json(TipsetKeyLotusJson(cids): Self::LotusJson) -> Self {
        Self::from(cids)
    }
}

#[test]
fn snapshots() {
    assert_all_snapshots::<TipsetKey>();
}
