// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod election_proof;
mod tipset;
mod vrf_proof;

pub use election_proof::{ElectionProof, MAX_WIN_COUNT, compute_win_count};
pub use tipset::{Tipset, TipsetKey};
pub use vrf_proof::VRFProof;
