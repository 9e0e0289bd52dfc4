use thiserror::Error;

/// Errors returned by the fallible parsing and generation functions.
#[derive(Error, Debug)]
pub enum Error {
    /// The input is not a 36-character canonical string or a 16-byte sequence.
    #[error("invalid uuid format")]
    InvalidFormat,

    /// Generation was requested for a version this crate does not generate.
    #[error("unsupported uuid version {0}")]
    UnsupportedVersion(u8),

    /// A version argument is not a decimal number in `0..=255`, optionally prefixed by `v`.
    #[error("invalid uuid version {0:?}")]
    InvalidVersion(String),

    /// The random number generator failed to produce bytes.
    #[error("cannot read random data: {0}")]
    RandomSource(#[from] rand::Error),
}

impl Error {
    /// Returns true if the error is [`Error::InvalidFormat`].
    pub const fn is_invalid_format(&self) -> bool {
        matches!(self, Self::InvalidFormat)
    }

    /// Returns true if the error is [`Error::UnsupportedVersion`].
    pub const fn is_unsupported_version(&self) -> bool {
        matches!(self, Self::UnsupportedVersion(_))
    }
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
