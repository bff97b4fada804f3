// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use serde_json::json;

use super::{ApiInfo, RpcRequest};
use crate::lotus_json::LotusJson;
use crate::shim::{address::Address, crypto::Signature};

pub const WALLET_SIGN: &str = "Filecoin.WalletSign";

impl ApiInfo {
    pub fn wallet_sign_req(address: Address, data: Vec<u8>) -> RpcRequest<Signature> {
        RpcRequest::new(WALLET_SIGN, json!([LotusJson(address), LotusJson(data)]))
    }
}
