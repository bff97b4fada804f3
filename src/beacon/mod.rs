// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

mod beacon_entries;

pub use beacon_entries::BeaconEntry;

/// Picks the beacon entry that seeds randomness for a round: the latest entry
/// included for the round, or, when the round carries no new entries, the final
/// entry of the previous round.
pub fn latest_beacon_entry<'a>(entries: &'a [BeaconEntry], prev: &'a BeaconEntry) -> &'a BeaconEntry {
    entries.last().unwrap_or(prev)
}
