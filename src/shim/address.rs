// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub use super::fvm_shared_latest::ActorID;
pub use super::fvm_shared_latest::address::{Address, Network};
use anyhow::Context as _;

/// Parses an address string, accepting both the mainnet (`f`) and testnet (`t`)
/// prefixes. The chain a miner lives on is decided by the node, not by us.
pub fn parse_address(s: &str) -> anyhow::Result<Address> {
    Network::Mainnet
        .parse_address(s)
        .or_else(|_| Network::Testnet.parse_address(s))
        .with_context(|| format!("invalid address: {s}"))
}

/// Returns the actor ID of an `ID` protocol address.
///
/// Proof generation keys everything on the numeric actor ID, so any other
/// protocol is rejected here rather than resolved.
pub fn actor_id(addr: &Address) -> anyhow::Result<ActorID> {
    addr.id().with_context(|| format!("{addr} is not an ID address"))
}

/// The DAG-CBOR encoding of an address, used as entropy for randomness draws.
pub fn address_entropy(addr: &Address) -> anyhow::Result<Vec<u8>> {
    fvm_ipld_encoding::to_vec(addr).context("failed to marshal miner address")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_either_network_prefix() {
        assert_eq!(parse_address("f01000").unwrap(), Address::new_id(1000));
        assert_eq!(parse_address("t01000").unwrap(), Address::new_id(1000));
        assert!(parse_address("x01000").is_err());
        assert!(parse_address("").is_err());
    }

    #[test]
    fn actor_id_requires_id_protocol() {
        assert_eq!(actor_id(&Address::new_id(1234)).unwrap(), 1234);
        let bls = Network::Mainnet
            .parse_address("f3yaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaby2smx7a")
            .unwrap();
        assert!(actor_id(&bls).is_err());
    }

    #[test]
    fn id_address_entropy() {
        // byte string header, ID protocol, leb128(1000)
        assert_eq!(
            address_entropy(&Address::new_id(1000)).unwrap(),
            vec![0x43, 0x00, 0xe8, 0x07]
        );
    }
}
