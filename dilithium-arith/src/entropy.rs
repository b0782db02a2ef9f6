//! The contract for the random bytes that key generation and signing draw on.
//!
//! The arithmetic in this crate never consumes randomness itself; callers that do (seed
//! generation, masking) go through [`EntropySource`] so that a failing generator surfaces as an
//! [`Error`] instead of silently producing weak key material.

use rand_core::TryCryptoRng;

use crate::{B32, Error};

#[cfg(feature = "os_rng")]
pub use rand_core::OsRng as OsEntropy;

/// A source of cryptographically secure random bytes.
///
/// Implemented for every [`TryCryptoRng`], which covers both infallible generators and fallible
/// ones such as the operating system RNG.
pub trait EntropySource {
    /// Fill `dest` entirely with random bytes.
    ///
    /// # Errors
    ///
    /// Returns [`Error`] if the underlying generator fails. The contents of `dest` are then
    /// unspecified and must not be used.
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), Error>;
}

impl<R: TryCryptoRng + ?Sized> EntropySource for R {
    fn fill(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.try_fill_bytes(dest).map_err(|_| Error)
    }
}

/// Draw a fresh 32-byte seed.
///
/// # Errors
///
/// Propagates the failure of `source`; no fallback generator is tried.
pub fn random_seed<E: EntropySource + ?Sized>(source: &mut E) -> Result<B32, Error> {
    let mut seed = B32::default();
    source.fill(&mut seed)?;
    Ok(seed)
}

#[cfg(test)]
mod test {
    use super::*;
    use rand_core::{RngCore, TryRngCore};

    /// A generator that has been exhausted, e.g. an OS RNG that is unavailable.
    struct BrokenRng;

    impl TryRngCore for BrokenRng {
        type Error = Error;

        fn try_next_u32(&mut self) -> Result<u32, Self::Error> {
            Err(Error)
        }

        fn try_next_u64(&mut self) -> Result<u64, Self::Error> {
            Err(Error)
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> Result<(), Self::Error> {
            Err(Error)
        }
    }

    impl TryCryptoRng for BrokenRng {}

    /// Counts upward; good enough to tell filled buffers from untouched ones.
    struct CountingRng(u8);

    impl RngCore for CountingRng {
        fn next_u32(&mut self) -> u32 {
            let mut bytes = [0u8; 4];
            self.fill_bytes(&mut bytes);
            u32::from_le_bytes(bytes)
        }

        fn next_u64(&mut self) -> u64 {
            let mut bytes = [0u8; 8];
            self.fill_bytes(&mut bytes);
            u64::from_le_bytes(bytes)
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            for b in dest {
                self.0 = self.0.wrapping_add(1);
                *b = self.0;
            }
        }
    }

    impl rand_core::CryptoRng for CountingRng {}

    #[test]
    fn failure_propagates() {
        let mut buf = [0u8; 16];
        assert_eq!(BrokenRng.fill(&mut buf), Err(Error));
        assert_eq!(random_seed(&mut BrokenRng), Err(Error));
    }

    #[test]
    fn fills_whole_buffer() {
        let mut rng = CountingRng(0);
        let seed = random_seed(&mut rng).unwrap();
        assert_eq!(seed.len(), 32);
        assert_eq!(seed[0], 1);
        assert_eq!(seed[31], 32);
    }

    #[test]
    fn dyn_source() {
        let mut rng = CountingRng(0);
        let source: &mut dyn EntropySource = &mut rng;
        let mut buf = [0u8; 3];
        source.fill(&mut buf).unwrap();
        assert_eq!(buf, [1, 2, 3]);
        assert!(random_seed(source).is_ok());
    }
}
