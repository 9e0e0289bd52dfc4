//! Aborting wrappers around the fallible primitives
//!
//! These helpers are for callers that treat a failure as a bug, e.g., when parsing string
//! literals in tests or generating IDs at program startup. Prefer [`crate::generate`] and
//! [`Uuid::parse_str`] wherever the error can be handled.

use crate::{Uuid, Version};

/// Generates a new UUID of the requested version.
///
/// # Panics
///
/// Panics if the version cannot be generated or the random source fails.
pub fn must_generate(version: Version) -> Uuid {
    match crate::generate(version) {
        Ok(uuid) => uuid,
        Err(err) => panic!("cannot generate uuid v{version}: {err}"),
    }
}

/// Parses the 8-4-4-4-12 hexadecimal string representation.
///
/// # Panics
///
/// Panics if `src` is not a valid representation.
///
/// # Examples
///
/// ```rust
/// use ruuid::must::must_parse;
///
/// let x = must_parse("017f22e2-79b0-7cc3-98c4-dc0c0c07398f");
/// assert_eq!(x.version(), Some(7));
/// ```
pub fn must_parse(src: &str) -> Uuid {
    match Uuid::parse_str(src) {
        Ok(uuid) => uuid,
        Err(_) => panic!("invalid uuid {src:?}"),
    }
}
