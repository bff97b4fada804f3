// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::shim::randomness::Randomness;

/// Randomness is a base64 byte string that must decode to exactly 32 bytes.
#[derive(Serialize, Deserialize)]
#[serde(transparent)]
pub struct RandomnessLotusJson(#[serde(with = "fixed_length")] Randomness);

mod fixed_length {
    use super::*;

    pub fn serialize<S>(value: &Randomness, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        base64_standard::serialize(value.as_bytes(), serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Randomness, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = base64_standard::deserialize(deserializer)?;
        Randomness::try_from(bytes.as_slice()).map_err(serde::de::Error::custom)
    }
}

impl HasLotusJson for Randomness {
    type LotusJson = RandomnessLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![(
            json!("AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE="),
            Randomness::new([1; 32]),
        )]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        RandomnessLotusJson(self)
    }

    fn from_lotus_json(RandomnessLotusJson(randomness): Self::LotusJson) -> Self {
        randomness
    }
}

#[test]
fn rejects_wrong_length() {
    // 31 bytes
    let short = json!("AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQ==");
    assert!(serde_json::from_value::<LotusJson<Randomness>>(short).is_err());
    assert!(serde_json::from_value::<LotusJson<Randomness>>(json!("not base64!")).is_err());
}
