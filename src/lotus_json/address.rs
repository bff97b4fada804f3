// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use super::*;
use crate::shim::address::{Address, parse_address};
#[cfg(test)]
use pretty_assertions::assert_eq;

#[derive(Serialize, Deserialize, From, derive_more::Into)]
#[serde(transparent)]
pub struct AddressLotusJson(#[serde(with = "any_network")] Address);

/// Nodes render addresses with the prefix of the chain they follow, so either
/// prefix is accepted.
mod any_network {
    use super::*;

    pub fn serialize<S>(value: &Address, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Address, D::Error>
    where
        D: Deserializer<'de>,
    {
        parse_address(&String::deserialize(deserializer)?).map_err(serde::de::Error::custom)
    }
}

impl HasLotusJson for Address {
    type LotusJson = AddressLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        vec![(json!("f01000"), Address::new_id(1000))]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        self.into()
    }

    fn from_lotus_json(lotus_json: Self::LotusJson) -> Self {
        lotus_json.into()
    }
}

#[test]
fn snapshots() {
    assert_all_snapshots::<Address>();
}

#[test]
fn accepts_testnet_prefix() {
    let LotusJson(addr) = serde_json::from_value::<LotusJson<Address>>(json!("t01000")).unwrap();
    assert_eq!(addr, Address::new_id(1000));
    assert!(serde_json::from_value::<LotusJson<Address>>(json!("x01000")).is_err());
}
