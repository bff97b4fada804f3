// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::collections::HashSet;
use anyhow::bail;
use async_trait::async_trait;
use cid::Cid;
use parking_lot::Mutex;

use super::{ChainApi, MiningBaseInfo};
use crate::beacon::BeaconEntry;
use crate::blocks::{Tipset, TipsetKey};
use crate::shim::address::Address;
use crate::shim::clock::ChainEpoch;
use crate::shim::crypto::Signature;
use crate::shim::sector::{RegisteredSealProof, SectorInfo, SectorSize, StoragePower};

/// A mining base for miner `f01000` with `sectors` 2KiB sectors, holding 20 of
/// the network's 100 units of power.
pub fn base_info(sectors: u64) -> MiningBaseInfo {
    MiningBaseInfo {
        miner_power: StoragePower::from(20),
        network_power: StoragePower::from(100),
        sectors: (0..sectors)
            .map(|sector_number| SectorInfo {
                proof: RegisteredSealProof::StackedDRG2KiBV1P1,
                sector_number,
                sealed_cid: Cid::default(),
            })
            .collect(),
        worker_key: Address::new_id(1001),
        sector_size: SectorSize::_2KiB,
        prev_beacon_entry: BeaconEntry::new(1, vec![6; 96]),
        beacon_entries: vec![BeaconEntry::new(2, vec![7; 96])],
        eligible_for_mining: true,
    }
}

/// An in-memory chain that serves the same mining base for every round and
/// "signs" by returning a fixed VRF output.
pub struct FakeChain {
    base: MiningBaseInfo,
    vrf_output: Vec<u8>,
    missing_heights: HashSet<ChainEpoch>,
    failing_rounds: HashSet<ChainEpoch>,
    powerless_rounds: HashSet<ChainEpoch>,
    base_info_calls: Mutex<Vec<ChainEpoch>>,
    signed: Mutex<Vec<(Address, Vec<u8>)>>,
}

impl FakeChain {
    pub fn new(base: MiningBaseInfo, vrf_output: Vec<u8>) -> Self {
        Self {
            base,
            vrf_output,
            missing_heights: HashSet::new(),
            failing_rounds: HashSet::new(),
            powerless_rounds: HashSet::new(),
            base_info_calls: Mutex::default(),
            signed: Mutex::default(),
        }
    }

    /// Makes tipset lookups at `height` fail.
    pub fn with_missing_height(mut self, height: ChainEpoch) -> Self {
        self.missing_heights.insert(height);
        self
    }

    /// Makes mining base lookups for `round` fail.
    pub fn with_failing_round(mut self, round: ChainEpoch) -> Self {
        self.failing_rounds.insert(round);
        self
    }

    /// Makes the miner have no mining base at `round`.
    pub fn with_no_base_at(mut self, round: ChainEpoch) -> Self {
        self.powerless_rounds.insert(round);
        self
    }

    pub fn base_info_calls(&self) -> Vec<ChainEpoch> {
        self.base_info_calls.lock().clone()
    }

    pub fn signed(&self) -> Vec<(Address, Vec<u8>)> {
        self.signed.lock().clone()
    }
}

#[async_trait]
impl ChainApi for FakeChain {
    async fn chain_get_tipset_by_height(&self, epoch: ChainEpoch) -> anyhow::Result<Tipset> {
        if self.missing_heights.contains(&epoch) {
            bail!("tipset at height {epoch} not found");
        }
        Ok(Tipset::new(TipsetKey::from(vec![Cid::default()]), epoch))
    }

    async fn miner_get_base_info(
        &self,
        _miner: &Address,
        epoch: ChainEpoch,
        _tsk: &TipsetKey,
    ) -> anyhow::Result<Option<MiningBaseInfo>> {
        self.base_info_calls.lock().push(epoch);
        if self.failing_rounds.contains(&epoch) {
            bail!("failed to load mining base for round {epoch}");
        }
        if self.powerless_rounds.contains(&epoch) {
            return Ok(None);
        }
        Ok(Some(self.base.clone()))
    }

    async fn wallet_sign(&self, signer: &Address, data: &[u8]) -> anyhow::Result<Signature> {
        self.signed.lock().push((*signer, data.to_vec()));
        Ok(Signature::new_bls(self.vrf_output.clone()))
    }
}
