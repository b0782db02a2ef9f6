//! Branch-free building blocks for the reduction kernel.
//!
//! Every function here is a straight line of shifts and bitwise operations on fixed-width integers,
//! so that the selection a branch would make is instead computed with a mask.

/// return -1 if x<0; otherwise return 0
#[must_use]
#[inline(always)]
pub const fn i32_negative_mask(x: i32) -> i32 {
    x >> 31
}

/// return `a` if `mask` is -1, `b` if `mask` is 0
///
/// `mask` must be one of those two values, e.g. the output of [`i32_negative_mask`].
#[must_use]
#[inline(always)]
pub const fn select_i32(mask: i32, a: i32, b: i32) -> i32 {
    b ^ (mask & (a ^ b))
}

/// Absolute value without a branch. `x` must not be `i64::MIN`, which any value widened from
/// `i32` satisfies.
#[must_use]
#[inline(always)]
pub const fn abs_i64(x: i64) -> i64 {
    let sign = x >> 63;
    (x ^ sign) - sign
}
