//! UUID version tags

use std::{fmt, str};

use crate::Error;

/// The version numbers defined by RFC 9562.
///
/// A `Version` labels the bits already embedded in a [`Uuid`](crate::Uuid) or names the
/// algorithm requested from a [`Generator`](crate::Generator). Only [`Version::V4`] and
/// [`Version::V7`] can be generated by this crate.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[repr(u8)]
pub enum Version {
    /// Gregorian time and node ID.
    V1 = 1,
    /// MD5 namespace hash.
    V3 = 3,
    /// Random.
    V4 = 4,
    /// SHA-1 namespace hash.
    V5 = 5,
    /// Reordered Gregorian time.
    V6 = 6,
    /// Unix Epoch time and random.
    V7 = 7,
    /// Custom.
    V8 = 8,
}

impl Version {
    /// Returns the version number.
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns true if the crate's generators can produce this version.
    pub const fn is_generatable(self) -> bool {
        matches!(self, Self::V4 | Self::V7)
    }
}

impl TryFrom<u8> for Version {
    type Error = Error;

    fn try_from(src: u8) -> Result<Self, Self::Error> {
        match src {
            1 => Ok(Self::V1),
            3 => Ok(Self::V3),
            4 => Ok(Self::V4),
            5 => Ok(Self::V5),
            6 => Ok(Self::V6),
            7 => Ok(Self::V7),
            8 => Ok(Self::V8),
            n => Err(Error::UnsupportedVersion(n)),
        }
    }
}

impl From<Version> for u8 {
    fn from(src: Version) -> Self {
        src.as_u8()
    }
}

impl str::FromStr for Version {
    type Err = Error;

    /// Parses a version number such as `"7"` or `"v7"`.
    ///
    /// Fails with [`Error::InvalidVersion`] unless the digits form a decimal `u8` without sign,
    /// and with [`Error::UnsupportedVersion`] for an undefined number.
    fn from_str(src: &str) -> Result<Self, Self::Err> {
        let digits = src
            .strip_prefix('v')
            .or_else(|| src.strip_prefix('V'))
            .unwrap_or(src);
        if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_digit()) {
            return Err(Error::InvalidVersion(src.to_owned()));
        }
        match digits.parse::<u8>() {
            Ok(n) => Self::try_from(n),
            Err(_) => Err(Error::InvalidVersion(src.to_owned())),
        }
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[cfg(test)]
mod tests {
    use super::Version;
    use crate::Error;

    /// Converts from and to version numbers
    #[test]
    fn converts_from_and_to_version_numbers() {
        for n in [1u8, 3, 4, 5, 6, 7, 8] {
            let v = Version::try_from(n).unwrap();
            assert_eq!(u8::from(v), n);
            assert_eq!(v.to_string(), n.to_string());
        }
    }

    /// Rejects undefined version numbers
    #[test]
    fn rejects_undefined_version_numbers() {
        for n in [0u8, 2, 9, 15, 255] {
            let err = Version::try_from(n).unwrap_err();
            assert!(err.is_unsupported_version());
        }
    }

    /// Parses textual version arguments
    #[test]
    fn parses_textual_version_arguments() {
        assert_eq!("4".parse::<Version>().unwrap(), Version::V4);
        assert_eq!("v7".parse::<Version>().unwrap(), Version::V7);
        assert_eq!("V1".parse::<Version>().unwrap(), Version::V1);
        assert_eq!("08".parse::<Version>().unwrap(), Version::V8);

        for src in ["", "v", "seven", "300", "v256", "+7", "-7", " 7", "7 ", "4.0"] {
            let err = src.parse::<Version>().unwrap_err();
            assert!(matches!(&err, Error::InvalidVersion(s) if s == src), "{src:?}");
            assert_eq!(err.to_string(), format!("invalid uuid version {src:?}"));
        }

        for (src, n) in [("2", 2u8), ("v9", 9), ("255", 255), ("0", 0)] {
            let err = src.parse::<Version>().unwrap_err();
            assert!(matches!(err, Error::UnsupportedVersion(m) if m == n), "{src:?}");
        }
    }

    /// Marks only v4 and v7 as generatable
    #[test]
    fn marks_only_v4_and_v7_as_generatable() {
        assert!(Version::V4.is_generatable());
        assert!(Version::V7.is_generatable());
        for v in [
            Version::V1,
            Version::V3,
            Version::V5,
            Version::V6,
            Version::V8,
        ] {
            assert!(!v.is_generatable());
        }
    }
}
