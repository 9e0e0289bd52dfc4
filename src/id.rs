use std::{fmt, str, time};

use fstr::FStr;

use crate::{Error, Result};

/// Represents a Universally Unique IDentifier.
///
/// A `Uuid` is a plain 16-byte value in the canonical RFC 9562 byte order. It compares by content
/// only; no ordering is defined on the type itself. Use [`Uuid::as_bytes()`] when a byte-wise
/// ordering is needed, e.g., to sort UUIDv7 values by creation time.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Uuid([u8; 16]);

/// Positions of the four hyphens in the 8-4-4-4-12 form.
const HYPHEN_POSITIONS: [usize; 4] = [8, 13, 18, 23];

impl Uuid {
    /// Nil UUID (00000000-0000-0000-0000-000000000000)
    pub const NIL: Self = Self([0x00; 16]);

    /// Max UUID (ffffffff-ffff-ffff-ffff-ffffffffffff)
    pub const MAX: Self = Self([0xff; 16]);

    /// Creates an object from a 16-byte big-endian array.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Returns a reference to the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Consumes the object and returns the underlying byte array.
    pub const fn into_bytes(self) -> [u8; 16] {
        self.0
    }

    /// Returns true if the object is the Nil UUID.
    pub const fn is_nil(&self) -> bool {
        u128::from_be_bytes(self.0) == 0
    }

    /// Returns true if the object is the Max UUID.
    pub const fn is_max(&self) -> bool {
        u128::from_be_bytes(self.0) == u128::MAX
    }

    /// Stamps the version 4 and variant `10` bits onto 16 random bytes.
    pub const fn from_random_bytes_v4(mut bytes: [u8; 16]) -> Self {
        bytes[6] = 0x40 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Overwrites the first 48 bits of 16 random bytes with `unix_ts_ms` (the low 48 bits of the
    /// millisecond count, big-endian) and stamps the version 7 and variant `10` bits.
    pub const fn from_random_bytes_v7(unix_ts_ms: u64, mut bytes: [u8; 16]) -> Self {
        let ts = unix_ts_ms.to_be_bytes();
        bytes[0] = ts[2];
        bytes[1] = ts[3];
        bytes[2] = ts[4];
        bytes[3] = ts[5];
        bytes[4] = ts[6];
        bytes[5] = ts[7];
        bytes[6] = 0x70 | (bytes[6] & 0x0f);
        bytes[8] = 0x80 | (bytes[8] & 0x3f);
        Self(bytes)
    }

    /// Creates a UUIDv7 with the given `unix_ts_ms` and an all-zero random tail.
    ///
    /// The result is fully determined by the argument, which makes it suitable for pinning the
    /// timestamp component in tests or as a lower bound of a time range in UUIDv7 keyed storage.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ruuid::Uuid;
    ///
    /// let x = Uuid::v7_zero(1717090333787);
    /// assert_eq!(x.to_string(), "018fca8f-345b-7000-8000-000000000000");
    /// ```
    pub const fn v7_zero(unix_ts_ms: u64) -> Self {
        Self::from_random_bytes_v7(unix_ts_ms, [0u8; 16])
    }

    /// Reads the first 48 bits as a big-endian millisecond count since the Unix epoch.
    ///
    /// This does not check that the object is a UUIDv7; the value is only meaningful when the
    /// caller knows it is.
    pub const fn unix_ts_ms(&self) -> u64 {
        let b = &self.0;
        u64::from_be_bytes([0, 0, b[0], b[1], b[2], b[3], b[4], b[5]])
    }

    /// Returns the point in time embedded in the first 48 bits, interpreting them as a UUIDv7
    /// `unix_ts_ms` field.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::time::{Duration, UNIX_EPOCH};
    /// use ruuid::Uuid;
    ///
    /// let x: Uuid = "018fca8f-345b-711a-838a-a276340388e7".parse()?;
    /// assert_eq!(x.v7_time(), UNIX_EPOCH + Duration::from_millis(1717090333787));
    /// # Ok::<(), ruuid::Error>(())
    /// ```
    pub fn v7_time(&self) -> time::SystemTime {
        time::UNIX_EPOCH + time::Duration::from_millis(self.unix_ts_ms())
    }

    /// Reports the variant field value of the UUID or, if appropriate, "NIL" or "MAX".
    ///
    /// For convenience, this method reports [`Variant::VarNil`] or [`Variant::VarMax`] if `self`
    /// represents the Nil or Max UUID, although the Nil and Max UUIDs are technically subsumed
    /// under the variants `0b0` and `0b111`, respectively.
    pub const fn variant(&self) -> Variant {
        let nibble = self.0[8] >> 4;
        if nibble < 0b1000 {
            if self.is_nil() {
                Variant::VarNil
            } else {
                Variant::Var0
            }
        } else if nibble < 0b1100 {
            Variant::Var10
        } else if nibble < 0b1110 {
            Variant::Var110
        } else if self.is_max() {
            Variant::VarMax
        } else {
            Variant::VarReserved
        }
    }

    /// Returns the version field value of the UUID or `None` if `self` does not have the
    /// variant field value of `0b10`.
    pub const fn version(&self) -> Option<u8> {
        match self.variant() {
            Variant::Var10 => Some(self.0[6] >> 4),
            _ => None,
        }
    }

    /// Returns the 8-4-4-4-12 hexadecimal string representation stored in a stack-allocated
    /// string type that can be dereferenced as `str`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ruuid::Uuid;
    ///
    /// let x = "01809424-3e59-7c05-9219-566f82fff672".parse::<Uuid>()?;
    /// let y = x.encode();
    /// assert_eq!(&*y, "01809424-3e59-7c05-9219-566f82fff672");
    /// assert_eq!(format!("{}", y), "01809424-3e59-7c05-9219-566f82fff672");
    /// # Ok::<(), ruuid::Error>(())
    /// ```
    pub fn encode(&self) -> FStr<36> {
        const DIGITS: &[u8; 16] = b"0123456789abcdef";

        let mut buffer = [b'-'; 36];
        let mut pos = 0;
        for (i, &e) in self.0.iter().enumerate() {
            buffer[pos] = DIGITS[(e >> 4) as usize];
            buffer[pos + 1] = DIGITS[(e & 15) as usize];
            pos += if matches!(i, 3 | 5 | 7 | 9) { 3 } else { 2 };
        }
        debug_assert!(buffer.is_ascii());
        // SAFETY: the buffer consists of ASCII hex digits and hyphens only
        unsafe { FStr::from_bytes_unchecked(buffer) }
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    ///
    /// Only lowercase hexadecimal digits are accepted. Any well-formed string is accepted
    /// regardless of its version and variant bits.
    pub fn parse_str(src: &str) -> Result<Self> {
        Self::parse_ascii(src.as_bytes())
    }

    /// Creates an object from the 8-4-4-4-12 hexadecimal representation given as ASCII bytes.
    pub fn parse_ascii(src: &[u8]) -> Result<Self> {
        if src.len() != 36 || HYPHEN_POSITIONS.iter().any(|&i| src[i] != b'-') {
            return Err(Error::InvalidFormat);
        }

        let mut dst = [0u8; 16];
        let mut digits = src
            .iter()
            .enumerate()
            .filter(|(i, _)| !HYPHEN_POSITIONS.contains(i))
            .map(|(_, &c)| decode_hex_digit(c));
        for e in dst.iter_mut() {
            let (Some(Some(hi)), Some(Some(lo))) = (digits.next(), digits.next()) else {
                return Err(Error::InvalidFormat);
            };
            *e = (hi << 4) | lo;
        }
        Ok(Self(dst))
    }
}

/// Decodes a lowercase hexadecimal digit.
const fn decode_hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        _ => None,
    }
}

/// The reserved UUID variants and the Nil and Max UUIDs.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Variant {
    /// The Nil UUID.
    VarNil,
    /// The variant field value of `0b0`, except for the Nil UUID.
    Var0,
    /// The variant field value of `0b10`.
    Var10,
    /// The variant field value of `0b110`.
    Var110,
    /// The reserved variant field value of `0b111`, except for the Max UUID.
    VarReserved,
    /// The Max UUID.
    VarMax,
}

impl fmt::Display for Uuid {
    /// Returns the 8-4-4-4-12 canonical hexadecimal string representation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl str::FromStr for Uuid {
    type Err = Error;

    /// Creates an object from the 8-4-4-4-12 hexadecimal string representation.
    fn from_str(src: &str) -> Result<Self> {
        Self::parse_str(src)
    }
}

impl TryFrom<&str> for Uuid {
    type Error = Error;

    fn try_from(src: &str) -> Result<Self> {
        Self::parse_str(src)
    }
}

impl TryFrom<String> for Uuid {
    type Error = Error;

    fn try_from(src: String) -> Result<Self> {
        Self::parse_str(&src)
    }
}

impl TryFrom<&[u8]> for Uuid {
    type Error = Error;

    /// Creates an object from a raw 16-byte sequence, failing if the length is not 16.
    fn try_from(src: &[u8]) -> Result<Self> {
        <[u8; 16]>::try_from(src)
            .map(Self)
            .map_err(|_| Error::InvalidFormat)
    }
}

impl From<Uuid> for String {
    fn from(src: Uuid) -> Self {
        src.to_string()
    }
}

impl From<Uuid> for [u8; 16] {
    fn from(src: Uuid) -> Self {
        src.0
    }
}

impl From<[u8; 16]> for Uuid {
    fn from(src: [u8; 16]) -> Self {
        Self(src)
    }
}

impl AsRef<[u8]> for Uuid {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl From<Uuid> for u128 {
    fn from(src: Uuid) -> Self {
        Self::from_be_bytes(src.0)
    }
}

impl From<u128> for Uuid {
    fn from(src: u128) -> Self {
        Self(src.to_be_bytes())
    }
}

#[cfg(feature = "uuid")]
#[cfg_attr(docsrs, doc(cfg(feature = "uuid")))]
mod uuid_support {
    use super::Uuid;

    impl From<Uuid> for uuid::Uuid {
        fn from(src: Uuid) -> Self {
            uuid::Uuid::from_bytes(src.0)
        }
    }

    impl From<uuid::Uuid> for Uuid {
        fn from(src: uuid::Uuid) -> Self {
            Self(src.into_bytes())
        }
    }

}

#[cfg(feature = "serde")]
#[cfg_attr(docsrs, doc(cfg(feature = "serde")))]
mod serde_support {
    use super::{fmt, Uuid};
    use serde::{de, Deserializer, Serializer};

    impl serde::Serialize for Uuid {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            if serializer.is_human_readable() {
                serializer.serialize_str(&self.encode())
            } else {
                serializer.serialize_bytes(self.as_bytes())
            }
        }
    }

    impl<'de> serde::Deserialize<'de> for Uuid {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            if deserializer.is_human_readable() {
                deserializer.deserialize_str(VisitorImpl)
            } else {
                deserializer.deserialize_bytes(VisitorImpl)
            }
        }
    }

    struct VisitorImpl;

    impl<'de> de::Visitor<'de> for VisitorImpl {
        type Value = Uuid;

        fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(formatter, "a UUID representation")
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
            Uuid::parse_str(value).map_err(de::Error::custom)
        }

        fn visit_bytes<E: de::Error>(self, value: &[u8]) -> Result<Self::Value, E> {
            Uuid::try_from(value).map_err(de::Error::custom)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::Uuid;
        use serde_test::{assert_tokens, Configure, Token};

        /// Serializes and deserializes prepared cases correctly
        #[test]
        fn serializes_and_deserializes_prepared_cases_correctly() {
            let cases = [
                ("00000000-0000-0000-0000-000000000000", &[0u8; 16]),
                (
                    "017f22e2-79b0-7cc3-98c4-dc0c0c07398f",
                    &[
                        0x01, 0x7f, 0x22, 0xe2, 0x79, 0xb0, 0x7c, 0xc3, 0x98, 0xc4, 0xdc, 0x0c,
                        0x0c, 0x07, 0x39, 0x8f,
                    ],
                ),
                (
                    "2ed6657d-e927-568b-95e1-2665a8aea6a2",
                    &[
                        0x2e, 0xd6, 0x65, 0x7d, 0xe9, 0x27, 0x56, 0x8b, 0x95, 0xe1, 0x26, 0x65,
                        0xa8, 0xae, 0xa6, 0xa2,
                    ],
                ),
            ];

            for (text, bytes) in cases {
                let e = text.parse::<Uuid>().unwrap();
                assert_tokens(&e.readable(), &[Token::String(text)]);
                assert_tokens(&e.compact(), &[Token::Bytes(bytes)]);
            }
        }

        /// Marshals to and from JSON strings
        #[test]
        fn marshals_to_and_from_json_strings() {
            let e: Uuid = "919108f7-52d1-4320-9bac-f847db4148a8".parse().unwrap();
            let json = serde_json::to_string(&e).unwrap();
            assert_eq!(json, r#""919108f7-52d1-4320-9bac-f847db4148a8""#);
            assert_eq!(serde_json::from_str::<Uuid>(&json).unwrap(), e);

            let err = serde_json::from_str::<Uuid>(r#""919108f7""#).unwrap_err();
            assert!(err.to_string().contains("invalid uuid format"));
            assert!(serde_json::from_str::<Uuid>("42").is_err());
        }
    }
}
