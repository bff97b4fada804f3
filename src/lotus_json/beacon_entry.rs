// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use crate::beacon::BeaconEntry;

use super::*;

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BeaconEntryLotusJson {
    round: u64,
    #[serde(with = "base64_standard")]
    data: Vec<u8>,
}

impl HasLotusJson for BeaconEntry {
    type LotusJson = BeaconEntryLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![
            (json!({"Round": 0, "Data": ""}), BeaconEntry::default()),
            (
                json!({"Round": 4500, "Data": "aGVsbG8gd29ybGQh"}),
                BeaconEntry::new(4500, Vec::from_iter(*b"hello world!")),
            ),
        ]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        let (round, data) = self.into_parts();
        Self::LotusJson { round, data }
    }

    fn from_lotus_json(lotus_json: Self::LotusJson) -> Self {
        let Self::LotusJson { round, data } = lotus_json;
        Self::new(round, data)
    }
}
