use core::ops::{Add, AddAssign, Sub, SubAssign};
use subtle::{Choice, ConstantTimeEq};

use crate::const_time::abs_i64;
use crate::ntt;
use crate::params::{D, N, Q};
use crate::reduce::{caddq, freeze, montgomery_reduce, reduce32};

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// An element of the ring `R_q = Z_q[X] / (X^256 + 1)`, or of its NTT domain `T_q`; which one is
/// implied by how the value was produced.
///
/// Coefficients are signed and only loosely reduced between operations. Each method documents the
/// input bound it expects and the output bound it guarantees; call [`Poly::freeze`] before a value
/// is serialized, hashed or compared.
#[derive(Clone, Copy, Debug)]
pub struct Poly([i32; N]);

impl Default for Poly {
    fn default() -> Self {
        Self::zero()
    }
}

impl Poly {
    /// The zero polynomial.
    #[must_use]
    pub const fn zero() -> Self {
        Self([0; N])
    }

    /// Wrap `coeffs`, lowest degree first.
    #[must_use]
    pub const fn new(coeffs: [i32; N]) -> Self {
        Self(coeffs)
    }

    /// The coefficients, lowest degree first.
    #[must_use]
    pub const fn coeffs(&self) -> &[i32; N] {
        &self.0
    }

    /// Consume the polynomial, returning its coefficients.
    #[must_use]
    pub const fn into_coeffs(self) -> [i32; N] {
        self.0
    }

    /// Reduce every coefficient to `[-6283009, 6283008]` with [`reduce32`].
    pub fn reduce(&mut self) {
        for x in &mut self.0 {
            *x = reduce32(*x);
        }
    }

    /// Add `q` to every negative coefficient. Coefficients must be in `[-q, q)`.
    pub fn caddq(&mut self) {
        for x in &mut self.0 {
            *x = caddq(*x);
        }
    }

    /// Map every coefficient to its canonical representative in `[0, q)`.
    pub fn freeze(&mut self) {
        for x in &mut self.0 {
            *x = freeze(*x);
        }
    }

    /// Multiply by `2^D`. Coefficients must be below `2^{31-D}` in absolute value.
    pub fn shiftl(&mut self) {
        for x in &mut self.0 {
            debug_assert!(x.unsigned_abs() < 1 << (31 - D), "shiftl: coefficient too large");
            *x <<= D;
        }
    }

    /// Forward NTT, in place. Coefficients bounded by `q` become bounded by `9q`.
    pub fn ntt(&mut self) {
        ntt::ntt(&mut self.0);
    }

    /// Inverse NTT and multiplication by `2^32`, in place. Coefficients must be bounded by `q` in
    /// absolute value, and remain so.
    pub fn invntt_tomont(&mut self) {
        ntt::invntt_tomont(&mut self.0);
    }

    /// Coefficient-wise product of two NTT-domain polynomials, multiplied by `2^{-32}`.
    ///
    /// Each product must be within the [`montgomery_reduce`] bound, which holds for inputs fresh
    /// out of [`Poly::ntt`]. Output coefficients are in `(-q, q)`.
    #[must_use]
    pub fn pointwise_montgomery(&self, rhs: &Self) -> Self {
        Self(core::array::from_fn(|i| {
            montgomery_reduce(i64::from(self.0[i]) * i64::from(rhs.0[i]))
        }))
    }

    /// Check the infinity norm against `bound`.
    ///
    /// Returns true if `bound > (q - 1) / 8`, `bound <= 0`, or any coefficient has absolute value
    /// `>= bound`. Coefficients are expected to come out of [`Poly::reduce`]. Only the comparisons
    /// with the public `bound` branch; the scan over the coefficients runs in constant time.
    #[must_use]
    pub fn chknorm(&self, bound: i32) -> Choice {
        // Every |x| is at least a non-positive bound.
        if bound <= 0 || bound > (Q - 1) >> 3 {
            return Choice::from(1);
        }

        let mut exceeds = Choice::from(0);
        for &x in &self.0 {
            // bound - 1 - |x| < 0  <=>  |x| >= bound. Widened so that no coefficient can overflow.
            let diff = i64::from(bound) - 1 - abs_i64(i64::from(x));
            #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
            let bit = ((diff >> 63) & 1) as u8;
            exceeds |= Choice::from(bit);
        }
        exceeds
    }
}

impl From<[i32; N]> for Poly {
    fn from(coeffs: [i32; N]) -> Self {
        Self(coeffs)
    }
}

impl ConstantTimeEq for Poly {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl PartialEq for Poly {
    fn eq(&self, other: &Self) -> bool {
        self.ct_eq(other).into()
    }
}

impl Eq for Poly {}

/// Coefficient-wise sum without reduction.
impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        Poly(core::array::from_fn(|i| self.0[i] + rhs.0[i]))
    }
}

/// Coefficient-wise difference without reduction.
impl Sub<&Poly> for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        Poly(core::array::from_fn(|i| self.0[i] - rhs.0[i]))
    }
}

impl AddAssign<&Poly> for Poly {
    fn add_assign(&mut self, rhs: &Poly) {
        for (x, y) in self.0.iter_mut().zip(rhs.0.iter()) {
            *x += y;
        }
    }
}

impl SubAssign<&Poly> for Poly {
    fn sub_assign(&mut self, rhs: &Poly) {
        for (x, y) in self.0.iter_mut().zip(rhs.0.iter()) {
            *x -= y;
        }
    }
}

#[cfg(feature = "zeroize")]
impl Zeroize for Poly {
    fn zeroize(&mut self) {
        self.0.zeroize();
    }
}
