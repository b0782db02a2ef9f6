//! Compile-time constants of the Dilithium prime field and polynomial ring.
//!
//! Everything here is derived from the modulus `Q` by `const` evaluation: the Montgomery constants
//! are not independently substitutable, and the assertions at the bottom of this module turn any
//! inconsistency into a build failure.
//!
//! Division and remainder are used freely below, since they only ever run in the const evaluator.
#![allow(clippy::integer_division_remainder_used)]
#![allow(
    clippy::cast_lossless,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

/// The prime modulus `q = 2^23 - 2^13 + 1`.
pub const Q: i32 = 8_380_417;

/// The number of coefficients of a polynomial, i.e. the ring is `Z_q[X] / (X^N + 1)`.
pub const N: usize = 256;

/// Number of bits dropped from `t` in Dilithium key generation; `shiftl` multiplies by `2^D`.
pub const D: u32 = 13;

/// A primitive 512-th root of unity modulo `Q`.
pub const ROOT_OF_UNITY: i32 = 1753;

/// `q^{-1} mod 2^32`, interpreted as a signed 32-bit value.
pub const QINV: i32 = inverse_mod_2_32(Q as i64) as i32;

/// `2^32 mod q`, the Montgomery form of `1`, as its centered representative.
pub const MONT: i32 = centered(pow_mod(2, 32, Q as i64), Q as i64) as i32;

/// `2^64 mod q`. Multiplying by this and Montgomery-reducing moves a value into Montgomery form.
pub const MONT_SQUARED: i32 = pow_mod(2, 64, Q as i64) as i32;

/// `2^64 / N mod q`: the scaling applied at the end of the inverse NTT, which both divides by `N`
/// and leaves the result multiplied by the Montgomery factor `2^32`.
pub const INV_N_MONT2: i32 =
    ((pow_mod(2, 64, Q as i64) * pow_mod(N as i64, Q as i64 - 2, Q as i64)) % Q as i64) as i32;

/// [`montgomery_reduce`](crate::montgomery_reduce) accepts inputs in `[-BOUND, BOUND)`.
pub const MONTGOMERY_REDUCE_BOUND: i64 = (Q as i64) << 31;

/// Inclusive lower bound on the output of [`reduce32`](crate::reduce32).
pub const REDUCE32_MIN: i32 = -6_283_009;

/// Inclusive upper bound on the output of [`reduce32`](crate::reduce32).
pub const REDUCE32_MAX: i32 = 6_283_008;

/// `base^exp mod m` by square-and-multiply. `m` must be below `2^31`.
pub(crate) const fn pow_mod(base: i64, mut exp: i64, m: i64) -> i64 {
    let mut acc = 1;
    let mut base = base.rem_euclid(m);
    while exp > 0 {
        if exp & 1 == 1 {
            acc = acc * base % m;
        }
        base = base * base % m;
        exp >>= 1;
    }
    acc
}

/// Map `x` in `[0, m)` to its representative in `(-m/2, m/2]`.
pub(crate) const fn centered(x: i64, m: i64) -> i64 {
    if x > m / 2 { x - m } else { x }
}

/// Extended Euclidean algorithm over `(q, 2^32)`.
const fn inverse_mod_2_32(q: i64) -> i64 {
    let m = 1_i64 << 32;
    let (mut old_r, mut r) = (q, m);
    let (mut old_s, mut s) = (1_i64, 0_i64);
    while r != 0 {
        let quotient = old_r / r;
        (old_r, r) = (r, old_r - quotient * r);
        (old_s, s) = (s, old_s - quotient * s);
    }
    assert!(old_r == 1, "modulus must be odd");
    old_s.rem_euclid(m)
}

// `reduce32` splits on bit 23 and corrects with `2^13 - 1`; both depend on this exact shape of q.
const _: () = assert!(Q == (1 << 23) - (1 << 13) + 1);

const _: () = {
    assert!(QINV == 58_728_449);
    assert!(((Q as i64) * (QINV as i64)).rem_euclid(1 << 32) == 1);
    assert!(MONT == -4_186_625);
    assert!(MONT_SQUARED == 2_365_951);
    assert!(INV_N_MONT2 == 41_978);
    assert!(pow_mod(ROOT_OF_UNITY as i64, N as i64, Q as i64) == Q as i64 - 1);
};
