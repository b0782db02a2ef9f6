//! The reduction kernel: every coefficient that passes through this crate is kept in range by the
//! four functions here.
//!
//! None of them branch on, or index memory by, the value of their argument. Preconditions are
//! checked with `debug_assert!` only, since a runtime check on a secret coefficient would itself be
//! a timing leak.

use crate::const_time::{i32_negative_mask, select_i32};
use crate::params::{MONT_SQUARED, MONTGOMERY_REDUCE_BOUND, Q, QINV};

/// Montgomery reduction: for `-q * 2^31 <= a < q * 2^31`, compute `r ≡ a * 2^{-32} (mod q)` with
/// `-q < r < q`.
///
/// `t = a * q^{-1} mod 2^32` is computed with a wrapping 32-bit multiply, which makes `a - t * q`
/// divisible by `2^32`; the final arithmetic shift is therefore an exact division, for negative
/// values as well as positive ones.
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn montgomery_reduce(a: i64) -> i32 {
    debug_assert!(
        a >= -MONTGOMERY_REDUCE_BOUND && a < MONTGOMERY_REDUCE_BOUND,
        "montgomery_reduce: input outside [-q * 2^31, q * 2^31)"
    );
    let t = (a as i32).wrapping_mul(QINV);
    ((a - (t as i64) * (Q as i64)) >> 32) as i32
}

/// Reduce `a` to a representative `r ≡ a (mod q)` with `-6283009 <= r <= 6283008`.
///
/// Uses `q = 2^23 - 2^13 + 1`: the quotient estimate is `a / 2^23` rounded to nearest, and the
/// only multiplication is by `q` itself. The intermediate is widened so that every `i32` is a
/// valid input.
#[must_use]
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn reduce32(a: i32) -> i32 {
    let a = a as i64;
    let t = (a + (1 << 22)) >> 23;
    (a - t * (Q as i64)) as i32
}

/// Add `q` if `a` is negative. For `-q <= a < q` the result is in `[0, q)`.
#[must_use]
#[inline]
pub const fn caddq(a: i32) -> i32 {
    debug_assert!(a >= -Q && a < Q, "caddq: input outside [-q, q)");
    a + select_i32(i32_negative_mask(a), Q, 0)
}

/// The canonical representative of `a mod q`, in `[0, q)`.
#[must_use]
#[inline]
pub const fn freeze(a: i32) -> i32 {
    caddq(reduce32(a))
}

/// Convert `a` (any `i32`) to Montgomery form `a * 2^32 mod q`, as a value in `(-q, q)`.
#[must_use]
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn to_montgomery(a: i32) -> i32 {
    montgomery_reduce((a as i64) * (MONT_SQUARED as i64))
}

/// Montgomery multiplication `a * b * 2^{-32} mod q`, as a value in `(-q, q)`.
///
/// The product must satisfy the [`montgomery_reduce`] bound, e.g. `|a| < q` and `|b| <= 2^31`.
#[must_use]
#[inline]
#[allow(clippy::cast_lossless)]
pub const fn montgomery_mul(a: i32, b: i32) -> i32 {
    montgomery_reduce((a as i64) * (b as i64))
}
