// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::lotus_json::{HasLotusJson, LotusJson};
use crate::proofs::{WinningPoStProver, verify_winning_post};
use crate::shim::address::ActorID;
use crate::shim::clock::ChainEpoch;
use crate::shim::randomness::Randomness;
use crate::shim::sector::{PoStProof, SectorInfo};
use crate::utils::io::write_file_with_parents;

/// A generated Winning PoSt with everything needed to verify it again later.
#[derive(Clone, Debug, PartialEq)]
pub struct WinningPoStArtifact {
    pub miner_id: ActorID,
    /// The proving set the challenge was drawn over, in chain order.
    pub sectors: Vec<SectorInfo>,
    pub proofs: Vec<PoStProof>,
    pub randomness: Randomness,
}

#[derive(Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct WinningPoStArtifactLotusJson {
    #[serde(rename = "MinerID")]
    miner_id: ActorID,
    sectors: LotusJson<Vec<SectorInfo>>,
    proofs: LotusJson<Vec<PoStProof>>,
    randomness: LotusJson<Randomness>,
}

impl HasLotusJson for WinningPoStArtifact {
    type LotusJson = WinningPoStArtifactLotusJson;

    #[cfg(test)]
    fn snapshots() -> Vec<(serde_json::Value, Self)> {
        use crate::shim::sector::{RegisteredPoStProof, RegisteredSealProof};
        use serde_json::json;

        vec![
            (
                json!({
                    "MinerID": 1000,
                    "Sectors": [
                        {"SealProof": 8, "SectorNumber": 10, "SealedCID": {"/": "baeaaaaa"}},
                        {"SealProof": 8, "SectorNumber": 11, "SealedCID": {"/": "baeaaaaa"}}
                    ],
                    "Proofs": [{"PoStProof": 3, "ProofBytes": "aGVsbG8gd29ybGQh"}],
                    "Randomness": "AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE="
                }),
                WinningPoStArtifact {
                    miner_id: 1000,
                    sectors: [10, 11]
                        .into_iter()
                        .map(|sector_number| SectorInfo {
                            proof: RegisteredSealProof::StackedDRG32GiBV1P1,
                            sector_number,
                            sealed_cid: cid::Cid::default(),
                        })
                        .collect(),
                    proofs: vec![PoStProof {
                        post_proof: RegisteredPoStProof::StackedDRGWinning32GiBV1,
                        proof_bytes: Vec::from_iter(*b"hello world!"),
                    }],
                    randomness: Randomness::new([1; 32]),
                },
            ),
            (
                json!({
                    "MinerID": 0,
                    "Sectors": null,
                    "Proofs": null,
                    "Randomness": "AAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAA="
                }),
                WinningPoStArtifact {
                    miner_id: 0,
                    sectors: vec![],
                    proofs: vec![],
                    randomness: Randomness::default(),
                },
            ),
        ]
    }

    fn into_lotus_json(self) -> Self::LotusJson {
        let Self {
            miner_id,
            sectors,
            proofs,
            randomness,
        } = self;
        Self::LotusJson {
            miner_id,
            sectors: sectors.into(),
            proofs: proofs.into(),
            randomness: randomness.into(),
        }
    }

    fn from_lotus_json(lotus_json: Self::LotusJson) -> Self {
        let Self::LotusJson {
            miner_id,
            sectors,
            proofs,
            randomness,
        } = lotus_json;
        Self {
            miner_id,
            sectors: sectors.into_inner(),
            proofs: proofs.into_inner(),
            randomness: randomness.into_inner(),
        }
    }
}

impl WinningPoStArtifact {
    /// Name of the file the artifact of `miner` for `round` is saved as.
    pub fn file_name(miner: ActorID, round: ChainEpoch) -> PathBuf {
        PathBuf::from(format!("winning-post-{miner}-{round}.json"))
    }

    pub fn encode(&self) -> anyhow::Result<String> {
        serde_json::to_string(&LotusJson(self.clone())).context("failed to encode artifact")
    }

    pub fn decode(s: &str) -> anyhow::Result<Self> {
        let LotusJson(artifact) = serde_json::from_str(s).context("failed to decode artifact")?;
        Ok(artifact)
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        write_file_with_parents(path, self.encode()?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::decode(&s).with_context(|| format!("invalid artifact {}", path.display()))
    }

    /// Checks the proofs against the recorded proving set and randomness.
    pub fn verify<P: WinningPoStProver>(&self) -> anyhow::Result<bool> {
        verify_winning_post::<P>(self.miner_id, &self.sectors, &self.proofs, &self.randomness)
    }
}

#[cfg(test)]
impl quickcheck::Arbitrary for WinningPoStArtifact {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use crate::shim::sector::{RegisteredPoStProof, RegisteredSealProof};
        use quickcheck::Arbitrary as _;

        // `from` canonicalizes, so unknown ids survive as `Invalid(id)`
        let sectors = Vec::<(u64, u8, cid::Cid)>::arbitrary(g)
            .into_iter()
            .map(|(sector_number, seal_proof, sealed_cid)| SectorInfo {
                proof: RegisteredSealProof::from(i64::from(seal_proof)),
                sector_number,
                sealed_cid,
            })
            .collect();
        let proofs = Vec::<(u8, Vec<u8>)>::arbitrary(g)
            .into_iter()
            .map(|(post_proof, proof_bytes)| PoStProof {
                post_proof: RegisteredPoStProof::from(i64::from(post_proof)),
                proof_bytes,
            })
            .collect();
        Self {
            miner_id: ActorID::arbitrary(g),
            sectors,
            proofs,
            randomness: Randomness::arbitrary(g),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lotus_json::{assert_all_snapshots, assert_unchanged_via_json};
    use crate::proofs::MockProver;
    use pretty_assertions::assert_eq;
    use quickcheck_macros::quickcheck;

    #[test]
    fn snapshots() {
        assert_all_snapshots::<WinningPoStArtifact>();
    }

    #[quickcheck]
    fn unchanged_via_json(artifact: WinningPoStArtifact) {
        assert_unchanged_via_json(artifact);
    }

    #[quickcheck]
    fn decode_inverts_encode(artifact: WinningPoStArtifact) -> anyhow::Result<bool> {
        Ok(WinningPoStArtifact::decode(&artifact.encode()?)? == artifact)
    }

    fn sample() -> WinningPoStArtifact {
        WinningPoStArtifact::snapshots().remove(0).1
    }

    #[test]
    fn round_trip_keeps_order_and_mask() {
        let mut artifact = sample();
        artifact.sectors.reverse();
        artifact.randomness = Randomness::new([0xff; 32]).into_post_randomness();
        let decoded = WinningPoStArtifact::decode(&artifact.encode().unwrap()).unwrap();
        assert_eq!(decoded, artifact);
        assert_eq!(decoded.sectors[0].sector_number, 11);
        assert_eq!(decoded.randomness[31], 0x3f);
    }

    #[test]
    fn empty_sector_list_decodes() {
        let s = r#"{"MinerID":1000,"Sectors":[],"Proofs":[],"Randomness":"AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQE="}"#;
        let artifact = WinningPoStArtifact::decode(s).unwrap();
        assert!(artifact.sectors.is_empty());
        // accepted by the codec, rejected by verification
        assert!(artifact.verify::<MockProver>().is_err());
    }

    #[test]
    fn rejects_short_randomness() {
        let s = r#"{"MinerID":1000,"Sectors":null,"Proofs":null,"Randomness":"AQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQEBAQ=="}"#;
        assert!(WinningPoStArtifact::decode(s).is_err());
    }

    #[test]
    fn save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir
            .path()
            .join("out")
            .join(WinningPoStArtifact::file_name(1000, 42));
        assert!(path.ends_with("winning-post-1000-42.json"));

        let artifact = sample();
        artifact.save(&path).unwrap();
        assert_eq!(WinningPoStArtifact::load(&path).unwrap(), artifact);
        assert!(WinningPoStArtifact::load(&dir.path().join("missing.json")).is_err());
    }
}
