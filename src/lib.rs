//! A compact UUID value type with a strict text codec and UUIDv4/UUIDv7 generation
//!
//! ```rust
//! use ruuid::{Uuid, Version};
//!
//! let uuid = ruuid::generate(Version::V7)?;
//! println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
//! println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
//!
//! let parsed: Uuid = "017f22e2-79b0-7cc3-98c4-dc0c0c07398f".parse()?;
//! assert_eq!(parsed.version(), Some(7));
//! # Ok::<(), ruuid::Error>(())
//! ```
//!
//! See [RFC 9562](https://www.rfc-editor.org/rfc/rfc9562).
//!
//! # Field and bit layout
//!
//! UUIDv7 values produced by this crate have the following bit layout:
//!
//! ```text
//!  0                   1                   2                   3
//!  0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1 2 3 4 5 6 7 8 9 0 1
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                          unix_ts_ms                           |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |          unix_ts_ms           |  ver  |        rand_a         |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |var|                        rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! |                            rand_b                             |
//! +-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+-+
//! ```
//!
//! Where:
//!
//! - The 48-bit `unix_ts_ms` field holds the low 48 bits of the Unix timestamp in
//!   milliseconds.
//! - The 4-bit `ver` field is set at `0111`.
//! - The 2-bit `var` field is set at `10`.
//! - The remaining 74 `rand_a` and `rand_b` bits are filled with a cryptographically strong
//!   random number.
//!
//! UUIDv7 values sort by creation time to millisecond precision. No counter is embedded, so
//! values created within the same millisecond are in random order.
//!
//! UUIDv4 values carry 122 random bits with the `ver` field set at `0100` and the `var` field
//! set at `10`.
//!
//! # Text representation
//!
//! [`Uuid`] encodes to and decodes from the 36-character 8-4-4-4-12 lowercase hexadecimal form
//! only. Decoding accepts any version and variant bits but rejects uppercase digits, braces,
//! URNs, and the hyphenless form.
//!
//! # Crate features
//!
//! - `serde` implements `Serialize` and `Deserialize` for [`Uuid`].
//! - `uuid` enables conversion from and to `uuid::Uuid`.
//! - `cli` builds the `uuid` command that prints generated identifiers.

#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
pub use error::{Error, Result};

mod id;
pub use id::{Uuid, Variant};

mod version;
pub use version::Version;

mod generator;
pub use generator::Generator;

mod entry;
pub use entry::{generate, generate_v4, generate_v7, generate_v7_at};

pub mod must;
