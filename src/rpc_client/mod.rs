// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! A minimal client for the Lotus full-node JSON-RPC API, covering the
//! methods a mining round needs.

pub mod chain_ops;
pub mod miner_ops;
pub mod wallet_ops;

use crate::blocks::{Tipset, TipsetKey};
use crate::lotus_json::HasLotusJson;
use crate::shim::address::Address;
use crate::shim::clock::ChainEpoch;
use crate::shim::crypto::Signature;
use crate::state_manager::{ChainApi, MiningBaseInfo};
use anyhow::Context as _;
use async_trait::async_trait;
use http::{HeaderMap, HeaderValue, header};
use jsonrpsee::core::client::ClientT as _;
use jsonrpsee::core::traits::ToRpcParams;
use jsonrpsee::http_client::HttpClientBuilder;
use multiaddr::{Multiaddr, Protocol};
use std::{env, fmt, marker::PhantomData, str::FromStr, time::Duration};
use tracing::trace;
use url::Url;

pub const API_INFO_KEY: &str = "FULLNODE_API_INFO";
pub const DEFAULT_PORT: u16 = 1234;
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
/// Path of the (v0) full-node API on a Lotus node.
pub const RPC_PATH: &str = "rpc/v0";

/// Token and address of a Filecoin node, in the `FULLNODE_API_INFO` format:
/// `[token:]multiaddr`.
#[derive(Clone, Debug)]
pub struct ApiInfo {
    multiaddr: Multiaddr,
    url: Url,
    pub token: Option<String>,
}

impl fmt::Display for ApiInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(token) = &self.token {
            token.fmt(f)?;
            write!(f, ":")?;
        }
        self.multiaddr.fmt(f)?;
        Ok(())
    }
}

impl FromStr for ApiInfo {
    type Err = anyhow::Error;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (token, host) = match s.split_once(':') {
            Some((token, host)) => (Some(token), host),
            None => (None, s),
        };
        let multiaddr: Multiaddr = host.parse()?;
        let url = multiaddr2url(&multiaddr).context("couldn't convert multiaddr to URL")?;
        Ok(ApiInfo {
            multiaddr,
            url,
            token: token.map(String::from),
        })
    }
}

impl Default for ApiInfo {
    fn default() -> Self {
        "/ip4/127.0.0.1/tcp/1234/http"
            .parse()
            .expect("default multiaddr is valid")
    }
}

impl ApiInfo {
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Update API handle with new (optional) token
    pub fn set_token(self, token: Option<String>) -> Self {
        ApiInfo {
            token: token.or(self.token),
            ..self
        }
    }

    /// Get `FULLNODE_API_INFO` environment variable if exists, otherwise, use
    /// default multiaddress. Fails if the environment variable is malformed.
    pub fn from_env() -> anyhow::Result<Self> {
        match env::var(API_INFO_KEY) {
            Ok(it) => it.parse(),
            Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(it @ env::VarError::NotUnicode(_)) => Err(it.into()),
        }
    }

    fn headers(&self) -> anyhow::Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            let value = HeaderValue::try_from(format!("Bearer {token}"))
                .context("API token is not a valid header value")?;
            headers.insert(header::AUTHORIZATION, value);
        }
        Ok(headers)
    }

    pub async fn call<T: HasLotusJson>(&self, req: RpcRequest<T>) -> anyhow::Result<T> {
        let endpoint = self.url.join(RPC_PATH)?;
        let client = HttpClientBuilder::new()
            .set_headers(self.headers()?)
            .request_timeout(req.timeout)
            .build(endpoint.as_str())?;
        let method_name = req.method_name;
        trace!("calling {method_name} on {endpoint}");
        let result: T::LotusJson = client
            .request(method_name, req)
            .await
            .with_context(|| format!("{method_name} failed"))?;
        Ok(T::from_lotus_json(result))
    }
}

#[async_trait]
impl ChainApi for ApiInfo {
    async fn chain_get_tipset_by_height(&self, epoch: ChainEpoch) -> anyhow::Result<Tipset> {
        self.call(Self::chain_get_tipset_by_height_req(
            epoch,
            TipsetKey::default(),
        ))
        .await
    }

    async fn miner_get_base_info(
        &self,
        miner: &Address,
        epoch: ChainEpoch,
        tsk: &TipsetKey,
    ) -> anyhow::Result<Option<MiningBaseInfo>> {
        self.call(Self::miner_get_base_info_req(*miner, epoch, tsk.clone()))
            .await
    }

    async fn wallet_sign(&self, signer: &Address, data: &[u8]) -> anyhow::Result<Signature> {
        self.call(Self::wallet_sign_req(*signer, data.to_vec()))
            .await
    }
}

/// An `RpcRequest` is an at-rest description of a remote procedure call. It can
/// be invoked using `ApiInfo::call`.
#[derive(Debug, Clone)]
pub struct RpcRequest<T = serde_json::Value> {
    pub method_name: &'static str,
    pub params: serde_json::Value,
    pub result_type: PhantomData<fn() -> T>,
    pub timeout: Duration,
}

impl<T> RpcRequest<T> {
    /// `params` must already be in their Lotus JSON form, positional.
    pub fn new(method_name: &'static str, params: serde_json::Value) -> Self {
        RpcRequest {
            method_name,
            params,
            result_type: PhantomData,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl<T> ToRpcParams for RpcRequest<T> {
    fn to_rpc_params(self) -> Result<Option<Box<serde_json::value::RawValue>>, serde_json::Error> {
        Ok(Some(serde_json::value::to_raw_value(&self.params)?))
    }
}

/// `"/dns/example.com/tcp/8080/http" -> "http://example.com:8080/"`
///
/// Returns [`None`] on unsupported formats, or if there is a URL parsing error.
///
/// Note that [`Multiaddr`]s do NOT support a (URL) `path`, so that must be handled
/// out-of-band.
fn multiaddr2url(m: &Multiaddr) -> Option<Url> {
    let mut components = m.iter().peekable();
    let host = match components.next()? {
        Protocol::Dns(it) | Protocol::Dns4(it) | Protocol::Dns6(it) | Protocol::Dnsaddr(it) => {
            it.to_string()
        }
        Protocol::Ip4(it) => it.to_string(),
        Protocol::Ip6(it) => format!("[{it}]"),
        _ => return None,
    };
    let port = match components.next_if(|it| matches!(it, Protocol::Tcp(_))) {
        Some(Protocol::Tcp(port)) => Some(port),
        _ => None,
    };
    let scheme = match components.next()? {
        Protocol::Http => "http",
        Protocol::Https => "https",
        Protocol::Ws(it) if it == "/" => "ws",
        Protocol::Wss(it) if it == "/" => "wss",
        _ => return None,
    };
    let None = components.next() else { return None };
    let parse_me = match port {
        Some(port) => format!("{scheme}://{host}:{port}"),
        None => format!("{scheme}://{host}"),
    };
    parse_me.parse().ok()
}
