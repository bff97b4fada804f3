// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub mod chain_rand;
#[cfg(test)]
pub(crate) mod test_utils;

pub use chain_rand::{draw_election_randomness, draw_post_randomness, draw_randomness};

use anyhow::Context as _;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::beacon::{BeaconEntry, latest_beacon_entry};
use crate::blocks::{ElectionProof, Tipset, TipsetKey, VRFProof};
use crate::shim::address::Address;
use crate::shim::clock::ChainEpoch;
use crate::shim::crypto::Signature;
use crate::shim::sector::{SectorInfo, SectorSize, StoragePower};

// Note: kept the name in line with Lotus implementation for cross-referencing simplicity.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct MiningBaseInfo {
    #[serde(with = "crate::lotus_json")]
    pub miner_power: StoragePower,
    #[serde(with = "crate::lotus_json")]
    pub network_power: StoragePower,
    #[serde(with = "crate::lotus_json")]
    pub sectors: Vec<SectorInfo>,
    #[serde(with = "crate::lotus_json")]
    pub worker_key: Address,
    pub sector_size: SectorSize,
    #[serde(with = "crate::lotus_json")]
    pub prev_beacon_entry: BeaconEntry,
    #[serde(with = "crate::lotus_json")]
    pub beacon_entries: Vec<BeaconEntry>,
    pub eligible_for_mining: bool,
}

crate::lotus_json::lotus_json_with_self!(MiningBaseInfo);

impl MiningBaseInfo {
    /// The beacon entry randomness for this round is drawn from.
    pub fn beacon(&self) -> &BeaconEntry {
        latest_beacon_entry(&self.beacon_entries, &self.prev_beacon_entry)
    }
}

/// The chain state a miner needs to take part in an election, as served by a
/// Filecoin node.
#[async_trait]
pub trait ChainApi: Send + Sync {
    /// The tipset at `epoch`, or the closest one below it when `epoch` is a null round.
    async fn chain_get_tipset_by_height(&self, epoch: ChainEpoch) -> anyhow::Result<Tipset>;

    /// Mining base for `miner` at `epoch`, built on top of the tipset `tsk`.
    /// `None` when the miner has no power in the lookback state.
    async fn miner_get_base_info(
        &self,
        miner: &Address,
        epoch: ChainEpoch,
        tsk: &TipsetKey,
    ) -> anyhow::Result<Option<MiningBaseInfo>>;

    /// Signs `data` with the key of `signer`.
    async fn wallet_sign(&self, signer: &Address, data: &[u8]) -> anyhow::Result<Signature>;
}

/// Runs the election for `miner` at `round`, returning the election proof if
/// the miner wins at least once.
pub async fn is_round_winner<C>(
    api: &C,
    miner: &Address,
    round: ChainEpoch,
    base: &MiningBaseInfo,
) -> anyhow::Result<Option<ElectionProof>>
where
    C: ChainApi + ?Sized,
{
    if !base.eligible_for_mining {
        return Ok(None);
    }

    let vrf_base = draw_election_randomness(base.beacon(), round, miner)?;
    let vrfout = api
        .wallet_sign(&base.worker_key, vrf_base.as_bytes())
        .await
        .context("failed to compute VRF")?;

    let proof = ElectionProof::new(
        VRFProof::new(vrfout.bytes),
        &base.miner_power,
        &base.network_power,
    );
    debug!(
        "miner {miner} at round {round}: win count {} (power {}/{})",
        proof.win_count, base.miner_power, base.network_power
    );
    Ok((proof.win_count >= 1).then_some(proof))
}

#[cfg(test)]
mod tests {
    use super::test_utils::{FakeChain, base_info};
    use super::*;
    use crate::lotus_json::HasLotusJson as _;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[tokio::test]
    async fn winner_with_all_power() {
        let chain = FakeChain::new(base_info(5), vec![2; 96]);
        let miner = Address::new_id(1000);
        let mut base = base_info(5);
        base.miner_power = StoragePower::from(100);
        let proof = is_round_winner(&chain, &miner, 1000, &base)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(proof.win_count, 7);
        assert_eq!(proof.vrfproof, VRFProof::new(vec![2; 96]));
    }

    #[tokio::test]
    async fn loser_gets_no_proof() {
        let chain = FakeChain::new(base_info(5), vec![2; 96]);
        let mut base = base_info(5);
        base.miner_power = StoragePower::from(1);
        let proof = is_round_winner(&chain, &Address::new_id(1000), 1000, &base)
            .await
            .unwrap();
        assert_eq!(proof, None);
    }

    #[tokio::test]
    async fn ineligible_miner_never_wins() {
        let chain = FakeChain::new(base_info(5), vec![2; 96]);
        let mut base = base_info(5);
        base.miner_power = StoragePower::from(100);
        base.eligible_for_mining = false;
        let proof = is_round_winner(&chain, &Address::new_id(1000), 1000, &base)
            .await
            .unwrap();
        assert_eq!(proof, None);
        assert!(chain.signed().is_empty());
    }

    #[tokio::test]
    async fn signs_election_randomness_with_worker_key() {
        let chain = FakeChain::new(base_info(5), vec![2; 96]);
        let base = base_info(5);
        let miner = Address::new_id(1000);
        is_round_winner(&chain, &miner, 1000, &base).await.unwrap();
        let expected = draw_election_randomness(base.beacon(), 1000, &miner).unwrap();
        assert_eq!(
            chain.signed(),
            vec![(base.worker_key, expected.as_bytes().to_vec())]
        );
    }

    #[test]
    fn mining_base_info_from_lotus() {
        let base: MiningBaseInfo = serde_json::from_value(json!({
            "MinerPower": "20",
            "NetworkPower": "100",
            "Sectors": [
                {"SealProof": 8, "SectorNumber": 7, "SealedCID": {"/": "baeaaaaa"}}
            ],
            "WorkerKey": "t01001",
            "SectorSize": 34359738368u64,
            "PrevBeaconEntry": {"Round": 9, "Data": "AQI="},
            "BeaconEntries": null,
            "EligibleForMining": true
        }))
        .unwrap();
        assert_eq!(base.miner_power, StoragePower::from(20));
        assert_eq!(base.sectors.len(), 1);
        assert_eq!(base.sectors[0].sector_number, 7);
        assert_eq!(base.worker_key, Address::new_id(1001));
        assert_eq!(base.sector_size, SectorSize::_32GiB);
        assert_eq!(base.beacon(), &BeaconEntry::new(9, vec![1, 2]));
        assert_eq!(
            base.prev_beacon_entry.clone().into_lotus_json_value().unwrap(),
            json!({"Round": 9, "Data": "AQI="})
        );
    }
}
