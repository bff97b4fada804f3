// Copyright 2019-2026 ChainSafe Systems
// SPDX-License-Identifier: Apache-2.0, MIT

use std::sync::LazyLock;

use num::{BigInt, Integer as _, One as _, Signed as _, bigint::Sign};

use super::VRFProof;
use crate::shim::clock::BLOCKS_PER_EPOCH;

/// Fixed-point precision of the election arithmetic: values are in `Q.256`.
const PRECISION: usize = 256;

/// Upper bound on the number of wins a single election proof can claim.
pub const MAX_WIN_COUNT: i64 = 3 * BLOCKS_PER_EPOCH as i64;

/// Parses integer coefficients and scales them from `2^-128` units to `Q.256`.
fn parse(coefs: &[&str]) -> Vec<BigInt> {
    coefs
        .iter()
        .map(|c| {
            let c: BigInt = c.parse().expect("exp coefficients are valid integers");
            c << (PRECISION - 128)
        })
        .collect()
}

static EXP_NUM_COEF: LazyLock<Vec<BigInt>> = LazyLock::new(|| {
    parse(&[
        "-648770010757830093818553637600",
        "67469480939593786226847644286976",
        "-3197587544499098424029388939001856",
        "89244641121992890118377641805348864",
        "-1579656163641440567800982336819953664",
        "17685496037279256458459817590917169152",
        "-115682590513835356866803355398940131328",
        "340282366920938463463374607431768211456",
    ])
});

static EXP_DENO_COEF: LazyLock<Vec<BigInt>> = LazyLock::new(|| {
    parse(&[
        "1225524182432722209606361",
        "114095592300906098243859450",
        "5665570424063336070530214243",
        "194450132448609991765137938448",
        "5068267641632683791026134915072",
        "104716890604972796896895427629056",
        "1748338658439454664487681550262272",
        "23704654329841312470660182937960448",
        "259380097567996910282699886670381056",
        "2250336698853390384720606936038375424",
        "14978272436876548034486263159246028800",
        "72144088983913131323343765784380833792",
        "224599776407103106596571252037123047424",
        "340282366920938463463374607431768211456",
    ])
});

/// Evaluates a polynomial with `Q.256` coefficients, highest order first, at a
/// `Q.256` point using Horner's method.
fn poly_val(poly: &[BigInt], x: &BigInt) -> BigInt {
    let mut coefs = poly.iter();
    let mut res = coefs.next().cloned().unwrap_or_default();
    for c in coefs {
        // Q.256 * Q.256 => Q.512 >> 256 => Q.256
        res = ((res * x) >> PRECISION) + c;
    }
    res
}

/// Computes `e^-x` for `x` in `Q.256` as a rational approximation.
///
/// Most precise on `[0, 1.725)` where the error is below `3.4e-30`; over
/// `[0, 5)` the error stays below `4.6e-15`.
fn expneg(x: &BigInt) -> BigInt {
    let num = poly_val(&EXP_NUM_COEF, x);
    let deno = poly_val(&EXP_DENO_COEF, x);
    // Q.512 / Q.256 => Q.256
    (num << PRECISION).div_floor(&deno)
}

/// `λ = power * E / total_power` in `Q.256`.
fn lambda(power: &BigInt, total_power: &BigInt) -> BigInt {
    ((power * BLOCKS_PER_EPOCH) << PRECISION).div_floor(total_power)
}

/// Incremental inverse CDF of a Poisson distribution: yields `1 - cdf(k)` for
/// `k = 0, 1, 2, ...`.
struct Poiss {
    lam: BigInt,
    pmf: BigInt,
    icdf: BigInt,
    k: u64,
}

impl Poiss {
    fn new(lam: BigInt) -> Self {
        // pmf(0) = e^-λ
        let pmf = expneg(&lam);
        let icdf = (BigInt::one() << PRECISION) - &pmf;
        Self {
            lam,
            pmf,
            icdf,
            k: 0,
        }
    }

    fn next(&mut self) -> &BigInt {
        // pmf(k) = pmf(k-1) * λ / k
        self.k += 1;
        self.pmf = self.pmf.div_floor(&BigInt::from(self.k));
        self.pmf = (&self.pmf * &self.lam) >> PRECISION;
        self.icdf -= &self.pmf;
        &self.icdf
    }
}

/// Number of times a miner holding `power` out of `total_power` wins an epoch,
/// given the digest of its election VRF output.
///
/// The digest is read as a uniform sample `h` in `[0, 1)` (`Q.256`). The miner
/// wins `j` times where `j` is the number of leading inverse-CDF values of
/// `Poisson(λ)` that exceed `h`, capped at [`MAX_WIN_COUNT`]. Miners without power,
/// or a network without power, never win.
pub fn compute_win_count(vrf_digest: &[u8; 32], power: &BigInt, total_power: &BigInt) -> i64 {
    if !power.is_positive() || !total_power.is_positive() {
        return 0;
    }
    let lhs = BigInt::from_bytes_be(Sign::Plus, vrf_digest);

    let mut poiss = Poiss::new(lambda(power, total_power));
    let mut rhs = poiss.icdf.clone();
    let mut j = 0;
    while lhs < rhs && j < MAX_WIN_COUNT {
        rhs = poiss.next().clone();
        j += 1;
    }
    j
}

/// Proofs generated by a miner which determines the reward they earn.
/// This is generated from hashing a partial ticket and using the hash to
/// generate a value.
#[derive(Clone, Debug, PartialEq, PartialOrd, Eq, Default, Ord, Hash)]
pub struct ElectionProof {
    pub win_count: i64,
    pub vrfproof: VRFProof,
}

impl ElectionProof {
    /// Builds an election proof from a VRF output, computing its win count
    /// against the given powers.
    pub fn new(vrfproof: VRFProof, power: &BigInt, total_power: &BigInt) -> Self {
        let mut proof = Self {
            win_count: 0,
            vrfproof,
        };
        proof.win_count = proof.compute_win_count(power, total_power);
        proof
    }

    pub fn compute_win_count(&self, power: &BigInt, total_power: &BigInt) -> i64 {
        compute_win_count(&self.vrfproof.digest(), power, total_power)
    }
}
