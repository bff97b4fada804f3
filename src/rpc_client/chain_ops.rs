// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use serde_json::json;

use super::{ApiInfo, RpcRequest};
use crate::blocks::{Tipset, TipsetKey};
use crate::lotus_json::LotusJson;
use crate::shim::clock::ChainEpoch;

pub const CHAIN_GET_TIPSET_BY_HEIGHT: &str = "Filecoin.ChainGetTipSetByHeight";

impl ApiInfo {
    // Get tipset at epoch. Pick younger tipset if epoch points to a
    // null-tipset. Only tipsets below the given `head` are searched. If `head`
    // is empty, the node will use the heaviest tipset.
    pub fn chain_get_tipset_by_height_req(
        epoch: ChainEpoch,
        head: TipsetKey,
    ) -> RpcRequest<Tipset> {
        RpcRequest::new(CHAIN_GET_TIPSET_BY_HEIGHT, json!([epoch, LotusJson(head)]))
    }
}
