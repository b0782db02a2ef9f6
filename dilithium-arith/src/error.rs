use core::fmt::{self, Display};

/// Error type: deliberately opaque to reduce potential sidechannel leakage.
///
/// The arithmetic itself is infallible; this is only ever produced when the entropy source fails
/// to deliver random bytes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Error;

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Dilithium entropy source failure")
    }
}

impl core::error::Error for Error {}
