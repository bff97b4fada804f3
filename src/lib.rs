// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

//! Filecoin block-winner election over a range of rounds: beacon-derived
//! randomness, Poisson win counts and Winning PoSt round trips for the rounds
//! a miner wins.

mod beacon;
mod blocks;
mod cli;
mod cli_shared;
mod lotus_json;
mod mining;
mod proofs;
mod rpc_client;
mod shim;
mod state_manager;
mod utils;

/// These items are semver-exempt, and exist for forest author use only
// We want to have doctests, but don't want our internals to be public because:
// - We don't want to be concerned with library compat
//   (We want our cargo semver to be _for the command line_).
// - We don't want to mistakenly export items which we never actually use.
#[doc(hidden)]
pub mod doctest_private {
    pub use crate::{
        shim::address::Address,
        utils::{encoding::blake2b_256, io::read_toml},
    };
}

pub use beacon::BeaconEntry;
pub use blocks::{ElectionProof, MAX_WIN_COUNT, compute_win_count};
pub use cli::main::main as forest_wincount_main;
pub use cli_shared::cli::{Client, Config, LogConfig, ProvingConfig};
pub use mining::{
    PoStReport, RoundOutcome, RoundReport, RunParams, VerifyReport, WinningPoStArtifact,
    run_rounds,
};
pub use proofs::{
    Error as ProofError, LocalSectorStore, MockProver, WinningPoStProver, challenged_sectors,
    generate_winning_post, sector_challenge_indices, verify_winning_post,
};
#[cfg(feature = "native-proofs")]
pub use proofs::NativeProver;
pub use rpc_client::ApiInfo;
pub use state_manager::{
    ChainApi, MiningBaseInfo, draw_election_randomness, draw_post_randomness, is_round_winner,
};
