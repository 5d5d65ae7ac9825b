//! Error types.

use core::fmt;

/// Result type with this crate's [`Error`].
pub type Result<T> = core::result::Result<T, Error>;

/// Errors which can occur when decoding untrusted input.
///
/// Broken internal invariants (e.g. a division by zero the algorithm
/// guarantees cannot happen) are programming errors and panic instead.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[non_exhaustive]
pub enum Error {
    /// Byte string is not the canonical encoding of any group element.
    InvalidEncoding,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidEncoding => f.write_str("invalid point encoding"),
        }
    }
}

impl core::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        extern crate alloc;
        use alloc::string::ToString;
        assert_eq!(Error::InvalidEncoding.to_string(), "invalid point encoding");
    }
}
