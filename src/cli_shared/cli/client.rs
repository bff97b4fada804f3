// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use serde::{Deserialize, Serialize};

use crate::rpc_client::ApiInfo;

/// Connection to the Filecoin node serving chain state and signatures.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Client {
    /// `[token:]multiaddr`, in the `FULLNODE_API_INFO` format. Falls back to
    /// the environment variable when unset.
    pub api_info: Option<String>,
}

impl Client {
    pub fn api_info(&self) -> anyhow::Result<ApiInfo> {
        match &self.api_info {
            Some(it) => it.parse(),
            None => ApiInfo::from_env(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn configured_api_info() {
        let client = Client {
            api_info: Some("secret:/ip4/10.0.0.1/tcp/1234/http".into()),
        };
        let info = client.api_info().unwrap();
        assert_eq!(info.token.as_deref(), Some("secret"));
        assert_eq!(info.url().as_str(), "http://10.0.0.1:1234/");
    }

    #[test]
    fn malformed_api_info() {
        let client = Client {
            api_info: Some("secret:localhost:1234".into()),
        };
        assert!(client.api_info().is_err());
    }
}
