// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::fmt;

/// Length in bytes of every randomness draw.
pub const RANDOMNESS_LENGTH: usize = 32;

/// Mask applied to the last byte of PoSt randomness. Clearing the two high bits
/// keeps the little-endian value below the BLS12-381 scalar field modulus.
pub const FR_SAFE_MASK: u8 = 0x3f;

/// Fixed-length randomness drawn from the beacon for a single epoch.
#[derive(
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    derive_more::Deref,
    derive_more::From,
    derive_more::Into,
)]
#[cfg_attr(test, derive(derive_quickcheck_arbitrary::Arbitrary))]
pub struct Randomness([u8; RANDOMNESS_LENGTH]);

impl Randomness {
    pub fn new(bytes: [u8; RANDOMNESS_LENGTH]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    /// Clears the top two bits of the final byte, yielding randomness that the
    /// proof system accepts as a field element.
    pub fn into_post_randomness(mut self) -> Self {
        self.0[RANDOMNESS_LENGTH - 1] &= FR_SAFE_MASK;
        self
    }

    /// `true` if the final byte carries no bits outside [`FR_SAFE_MASK`].
    pub fn is_fr_safe(&self) -> bool {
        self.0[RANDOMNESS_LENGTH - 1] & !FR_SAFE_MASK == 0
    }
}

impl TryFrom<&[u8]> for Randomness {
    type Error = anyhow::Error;

    fn try_from(value: &[u8]) -> Result<Self, Self::Error> {
        let bytes = <[u8; RANDOMNESS_LENGTH]>::try_from(value).map_err(|_| {
            anyhow::anyhow!(
                "randomness must be {RANDOMNESS_LENGTH} bytes, got {}",
                value.len()
            )
        })?;
        Ok(Self(bytes))
    }
}

impl fmt::Debug for Randomness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Randomness({})", hex::encode(self.0))
    }
}

impl fmt::Display for Randomness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}
