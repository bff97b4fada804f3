// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod common;

use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

use crate::common::{mock_artifact, wincount, write_json};

#[test]
fn verifies_valid_mock_proof() {
    let dir = TempDir::new().unwrap();
    let path = write_json(dir.path(), "post.json", &mock_artifact());

    wincount()
        .arg("verify")
        .arg("--in")
        .arg(&path)
        .arg("--mock-proofs")
        .assert()
        .success()
        .stdout("verify winningPoSt ok true error none\n");
}

#[test]
fn tampered_proof_does_not_verify() {
    let dir = TempDir::new().unwrap();
    let mut artifact = mock_artifact();
    artifact["Proofs"][0]["ProofBytes"] = json!("AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA=");
    let path = write_json(dir.path(), "post.json", &artifact);

    wincount()
        .arg("verify")
        .arg("--in")
        .arg(&path)
        .arg("--mock-proofs")
        .assert()
        .success()
        .stdout("verify winningPoSt ok false error none\n");
}

#[test]
fn different_randomness_does_not_verify() {
    let dir = TempDir::new().unwrap();
    let mut artifact = mock_artifact();
    // Same bytes with the last one flipped, still in the field.
    artifact["Randomness"] = json!("s/P7dUJSOpB7Kn1S62ZDjNipGnxck5OvGw9bxdV0/yM=");
    let path = write_json(dir.path(), "post.json", &artifact);

    wincount()
        .arg("verify")
        .arg("--in")
        .arg(&path)
        .arg("--mock-proofs")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("verify winningPoSt ok false"));
}

#[test]
fn randomness_outside_field_does_not_verify() {
    let dir = TempDir::new().unwrap();
    let mut artifact = mock_artifact();
    // High bit of the last byte set.
    artifact["Randomness"] = json!("s/P7dUJSOpB7Kn1S62ZDjNipGnxck5OvGw9bxdV0/6I=");
    let path = write_json(dir.path(), "post.json", &artifact);

    wincount()
        .arg("verify")
        .arg("--in")
        .arg(&path)
        .arg("--mock-proofs")
        .assert()
        .success()
        .stdout("verify winningPoSt ok false error none
");
}

#[test]
fn empty_proving_set_is_an_error() {
    let dir = TempDir::new().unwrap();
    let mut artifact = mock_artifact();
    artifact["Sectors"] = json!(null);
    let path = write_json(dir.path(), "post.json", &artifact);

    wincount()
        .arg("verify")
        .arg("--in")
        .arg(&path)
        .arg("--mock-proofs")
        .assert()
        .success()
        .stdout("verify winningPoSt ok false error proving set is empty\n");
}

#[test]
fn missing_artifact_fails() {
    let dir = TempDir::new().unwrap();

    wincount()
        .arg("verify")
        .arg("--in")
        .arg(dir.path().join("missing.json"))
        .arg("--mock-proofs")
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing.json"));
}

#[test]
fn malformed_artifact_fails() {
    let dir = TempDir::new().unwrap();
    let mut artifact = mock_artifact();
    artifact["Randomness"] = json!("AAAA");
    let path = write_json(dir.path(), "post.json", &artifact);

    wincount()
        .arg("verify")
        .arg("--in")
        .arg(&path)
        .arg("--mock-proofs")
        .assert()
        .failure();
}

#[test]
fn mock_proofs_from_config() {
    let dir = TempDir::new().unwrap();
    let path = write_json(dir.path(), "post.json", &mock_artifact());
    let config = dir.path().join("wincount.toml");
    std::fs::write(&config, "[proving]\nmock_proofs = true\n").unwrap();

    wincount()
        .arg("--config")
        .arg(&config)
        .arg("verify")
        .arg("--in")
        .arg(&path)
        .assert()
        .success()
        .stdout("verify winningPoSt ok true error none\n");
}
