// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::blocks::{Tipset, TipsetKey};
use crate::shim::clock::ChainEpoch;
#[cfg(test)]
use pretty_assertions::assert_eq;

/// Lotus serves full block headers under `Blocks`; only the key and height are kept.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TipsetLotusJson {
    #[serde(with = "crate::lotus_json")]
    cids: TipsetKey,
    height: ChainEpoch,
}

impl HasLotusJson for Tipset {
    type LotusJson = TipsetLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![(
            json!({"Cids": [{"/": "baeaaaaa"}], "Height": 999}),
            Tipset::new(TipsetKey::from(vec![::cid::Cid::default()]), 999),
        )]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        TipsetLotusJson {
            cids: self.key().clone(),
            height: self.epoch(),
        }
    }

    fn from_lotus_json(TipsetLotusJson { cids, height }: Self::LotusJson) -> Self {
        Tipset::new(cids, height)
    }
}

#[test]
fn snapshots() {
    assert_all_snapshots::<Tipset>();
}

#[test]
fn ignores_block_headers() {
    let tipset = serde_json::from_value::<TipsetLotusJson>(json!({
        "Cids": [{"/": "baeaaaaa"}],
        "Blocks": [{"Miner": "f01000", "Height": 999}],
        "Height": 999
    }))
    .map(Tipset::from_lotus_json)
    .unwrap();
    assert_eq!(tipset.epoch(), 999);
    assert_eq!(tipset.key().cids(), &[::cid::Cid::default()]);
}
