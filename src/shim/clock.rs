// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

pub use super::fvm_shared_latest::clock::ChainEpoch;

/// Expected number of block producers per epoch.
pub const BLOCKS_PER_EPOCH: u64 = 5;
