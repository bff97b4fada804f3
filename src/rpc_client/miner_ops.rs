// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use serde_json::json;

use super::{ApiInfo, RpcRequest};
use crate::blocks::TipsetKey;
use crate::lotus_json::LotusJson;
use crate::shim::address::Address;
use crate::shim::clock::ChainEpoch;
use crate::state_manager::MiningBaseInfo;

pub const MINER_GET_BASE_INFO: &str = "Filecoin.MinerGetBaseInfo";

impl ApiInfo {
    /// `null` in the response means the miner has no power at the lookback.
    pub fn miner_get_base_info_req(
        miner: Address,
        epoch: ChainEpoch,
        tsk: TipsetKey,
    ) -> RpcRequest<Option<MiningBaseInfo>> {
        RpcRequest::new(
            MINER_GET_BASE_INFO,
            json!([LotusJson(miner), epoch, LotusJson(tsk)]),
        )
    }
}
