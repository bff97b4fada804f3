// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::path::{Path, PathBuf};

use assert_cmd::{Command, cargo::cargo_bin_cmd};
use serde_json::json;

pub fn wincount() -> Command {
    let mut cmd = cargo_bin_cmd!("forest-wincount");
    // Keep the tests independent from the environment they run in.
    cmd.env_remove("FOREST_WINCOUNT_CONFIG")
        .env_remove("FULLNODE_API_INFO")
        .env("RUST_LOG", "warn");
    cmd
}

/// A Winning PoSt of miner `f01000` over sectors 10 to 14, as saved by
/// `forest-wincount run --mock-proofs`. The challenged sector is sector 10.
pub fn mock_artifact() -> serde_json::Value {
    let sectors = (10..15)
        .map(|number| json!({"SealProof": 8, "SectorNumber": number, "SealedCID": {"/": "baeaaaaa"}}))
        .collect::<Vec<_>>();
    json!({
        "MinerID": 1000,
        "Sectors": sectors,
        "Proofs": [{"PoStProof": 3, "ProofBytes": "Ill2P0p2k/HaCHOWydjnyaXilSi3cJ6cMQcU5nKpOeg="}],
        "Randomness": "s/P7dUJSOpB7Kn1S62ZDjNipGnxck5OvGw9bxdV0/yI="
    })
}

pub fn write_json(dir: &Path, name: &str, value: &serde_json::Value) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, value.to_string()).expect("couldn't write fixture");
    path
}
