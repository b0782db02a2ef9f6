#![no_std]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/meta/master/logo.svg"
)]
#![deny(missing_docs)] // Require all public interfaces to be documented
#![warn(clippy::pedantic)] // Be pedantic by default
#![warn(clippy::integer_division_remainder_used)] // Be judicious about using `/` and `%`

/// Field and ring constants, derived from the modulus at compile time
pub mod params;

/// Branch-free masks and selection
pub mod const_time;

/// Montgomery reduction, `reduce32`, `caddq` and `freeze`
mod reduce;

/// The number-theoretic transform over `Z_q[X] / (X^256 + 1)`
mod ntt;

/// Degree-256 polynomials
mod poly;

/// Vectors of polynomials
mod polyvec;

/// Interface to the random byte source
pub mod entropy;

mod error;

pub use entropy::EntropySource;
pub use error::Error;
pub use hybrid_array as array;
pub use params::{D, MONT, N, Q, QINV};
pub use poly::Poly;
pub use polyvec::PolyVec;
pub use reduce::{caddq, freeze, montgomery_mul, montgomery_reduce, reduce32, to_montgomery};
pub use subtle::{Choice, ConstantTimeEq};

use hybrid_array::{Array, typenum::U32};

/// A 32-byte array, used for seeds drawn from an [`EntropySource`].
pub type B32 = Array<u8, U32>;
