use core::ops::{Add, Index, IndexMut, Sub};
use hybrid_array::{Array, ArraySize};
use subtle::{Choice, ConstantTimeEq};

use crate::poly::Poly;

#[cfg(feature = "zeroize")]
use zeroize::Zeroize;

/// A vector of `K` polynomials, e.g. one of the length-`L` or length-`K` vectors of a Dilithium
/// parameter set.
///
/// Every operation is applied to each polynomial independently and carries the same bounds as the
/// corresponding [`Poly`] method.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct PolyVec<K: ArraySize>(Array<Poly, K>);

impl<K: ArraySize> PolyVec<K> {
    /// Wrap an array of polynomials.
    pub fn new(polys: Array<Poly, K>) -> Self {
        Self(polys)
    }

    /// Build a vector by calling `f` with each index in turn.
    pub fn from_fn(f: impl FnMut(usize) -> Poly) -> Self {
        Self(Array::from_fn(f))
    }

    /// The number of polynomials, `K`.
    #[must_use]
    pub fn len(&self) -> usize {
        K::USIZE
    }

    /// True iff `K` is zero.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        K::USIZE == 0
    }

    /// Iterate over the polynomials.
    pub fn iter(&self) -> core::slice::Iter<'_, Poly> {
        self.0.iter()
    }

    /// Iterate mutably over the polynomials.
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, Poly> {
        self.0.iter_mut()
    }

    /// See [`Poly::reduce`].
    pub fn reduce(&mut self) {
        self.0.iter_mut().for_each(Poly::reduce);
    }

    /// See [`Poly::caddq`].
    pub fn caddq(&mut self) {
        self.0.iter_mut().for_each(Poly::caddq);
    }

    /// See [`Poly::freeze`].
    pub fn freeze(&mut self) {
        self.0.iter_mut().for_each(Poly::freeze);
    }

    /// See [`Poly::shiftl`].
    pub fn shiftl(&mut self) {
        self.0.iter_mut().for_each(Poly::shiftl);
    }

    /// See [`Poly::ntt`].
    pub fn ntt(&mut self) {
        self.0.iter_mut().for_each(Poly::ntt);
    }

    /// See [`Poly::invntt_tomont`].
    pub fn invntt_tomont(&mut self) {
        self.0.iter_mut().for_each(Poly::invntt_tomont);
    }

    /// Multiply every polynomial pointwise by `rhs` (see [`Poly::pointwise_montgomery`]).
    #[must_use]
    pub fn pointwise_poly_montgomery(&self, rhs: &Poly) -> Self {
        Self(self.0.iter().map(|p| p.pointwise_montgomery(rhs)).collect())
    }

    /// NTT-domain inner product with Montgomery reduction: `sum_i self[i] * rhs[i] * 2^{-32}`.
    ///
    /// The sum is not reduced; each term is in `(-q, q)`, so the result is bounded by `K * q`.
    #[must_use]
    pub fn pointwise_acc_montgomery(&self, rhs: &Self) -> Poly {
        let mut acc = Poly::zero();
        for (u, v) in self.0.iter().zip(rhs.0.iter()) {
            acc += &u.pointwise_montgomery(v);
        }
        acc
    }

    /// True if any polynomial fails [`Poly::chknorm`].
    #[must_use]
    pub fn chknorm(&self, bound: i32) -> Choice {
        self.0
            .iter()
            .fold(Choice::from(0), |acc, p| acc | p.chknorm(bound))
    }
}

impl<K: ArraySize> Index<usize> for PolyVec<K> {
    type Output = Poly;

    fn index(&self, i: usize) -> &Poly {
        &self.0[i]
    }
}

impl<K: ArraySize> IndexMut<usize> for PolyVec<K> {
    fn index_mut(&mut self, i: usize) -> &mut Poly {
        &mut self.0[i]
    }
}

impl<K: ArraySize> ConstantTimeEq for PolyVec<K> {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl<K: ArraySize> Add<&PolyVec<K>> for &PolyVec<K> {
    type Output = PolyVec<K>;

    fn add(self, rhs: &PolyVec<K>) -> PolyVec<K> {
        PolyVec(self.0.iter().zip(rhs.0.iter()).map(|(x, y)| x + y).collect())
    }
}

impl<K: ArraySize> Sub<&PolyVec<K>> for &PolyVec<K> {
    type Output = PolyVec<K>;

    fn sub(self, rhs: &PolyVec<K>) -> PolyVec<K> {
        PolyVec(self.0.iter().zip(rhs.0.iter()).map(|(x, y)| x - y).collect())
    }
}

#[cfg(feature = "zeroize")]
impl<K: ArraySize> Zeroize for PolyVec<K> {
    fn zeroize(&mut self) {
        self.0.iter_mut().for_each(Zeroize::zeroize);
    }
}
