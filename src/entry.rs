//! Entry point functions backed by the operating system's random source

use rand::rngs::OsRng;

use crate::{Generator, Result, Uuid, Version};

/// Generates a new UUID of the requested version.
///
/// This function is safe to call from multiple threads concurrently; it shares no state other
/// than the operating system's random source and the system clock.
///
/// # Examples
///
/// ```rust
/// use ruuid::Version;
///
/// let uuid = ruuid::generate(Version::V4)?;
/// println!("{}", uuid); // e.g., "2ca4b2ce-6c13-40d4-bccf-37d222820f6f"
///
/// let err = ruuid::generate(Version::V5).unwrap_err();
/// assert!(err.is_unsupported_version());
/// # Ok::<(), ruuid::Error>(())
/// ```
pub fn generate(version: Version) -> Result<Uuid> {
    Generator::new(OsRng).generate(version)
}

/// Generates a UUIDv4 object.
pub fn generate_v4() -> Result<Uuid> {
    Generator::new(OsRng).generate_v4()
}

/// Generates a UUIDv7 object from the current timestamp.
///
/// # Examples
///
/// ```rust
/// let uuid = ruuid::generate_v7()?;
/// println!("{}", uuid); // e.g., "01809424-3e59-7c05-9219-566f82fff672"
/// println!("{:?}", uuid.as_bytes()); // as 16-byte big-endian array
/// # Ok::<(), ruuid::Error>(())
/// ```
pub fn generate_v7() -> Result<Uuid> {
    Generator::new(OsRng).generate_v7()
}

/// Generates a UUIDv7 object from the `unix_ts_ms` passed instead of the system clock.
pub fn generate_v7_at(unix_ts_ms: u64) -> Result<Uuid> {
    Generator::new(OsRng).generate_v7_at(unix_ts_ms)
}

#[cfg(test)]
fn count_set_bits(samples: &[String]) -> [u32; 128] {
    let mut bins = [0u32; 128];
    for e in samples {
        let mut it = bins.iter_mut().rev();
        for c in e.chars().rev() {
            if let Some(mut num) = c.to_digit(16) {
                for _ in 0..4 {
                    *it.next().unwrap() += num & 1;
                    num >>= 1;
                }
            }
        }
    }
    bins
}

#[cfg(test)]
mod tests_v7 {
    use super::{count_set_bits, generate_v7, generate_v7_at};
    use crate::Variant;

    const N_SAMPLES: usize = 100_000;
    thread_local!(static SAMPLES: Vec<String> = (0..N_SAMPLES).map(|_| generate_v7().unwrap().into()).collect());

    /// Generates canonical string
    #[test]
    fn generates_canonical_string() {
        let pattern = r"^[0-9a-f]{8}-[0-9a-f]{4}-7[0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$";
        let re = regex::Regex::new(pattern).unwrap();
        SAMPLES.with(|samples| {
            for e in samples {
                assert!(re.is_match(e));
            }
        });
    }

    /// Generates 100k identifiers without collision
    #[test]
    fn generates_100k_identifiers_without_collision() {
        use std::collections::HashSet;
        SAMPLES.with(|samples| {
            let s: HashSet<&String> = samples.iter().collect();
            assert_eq!(s.len(), N_SAMPLES);
        });
    }

    /// Encodes non-decreasing timestamp in creation order
    #[test]
    fn encodes_non_decreasing_timestamp_in_creation_order() {
        SAMPLES.with(|samples| {
            for i in 1..N_SAMPLES {
                assert!(samples[i - 1][0..13] <= samples[i][0..13]);
            }
        });
    }

    /// Sorts by timestamp across distinct milliseconds
    #[test]
    fn sorts_by_timestamp_across_distinct_milliseconds() {
        let ts = 1717090333787u64;
        let mut prev = generate_v7_at(ts).unwrap();
        for i in 1..1_000u64 {
            let curr = generate_v7_at(ts + i).unwrap();
            assert!(prev.as_bytes() < curr.as_bytes());
            assert!(prev.to_string() < curr.to_string());
            prev = curr;
        }
    }

    /// Sets constant bits and random bits properly
    #[test]
    fn sets_constant_bits_and_random_bits_properly() {
        let bins = SAMPLES.with(|samples| count_set_bits(samples));

        // test if constant bits are all set to 1 or 0
        let n = N_SAMPLES as u32;
        assert_eq!(bins[48], 0, "version bit 48");
        assert_eq!(bins[49], n, "version bit 49");
        assert_eq!(bins[50], n, "version bit 50");
        assert_eq!(bins[51], n, "version bit 51");
        assert_eq!(bins[64], n, "variant bit 64");
        assert_eq!(bins[65], 0, "variant bit 65");

        // test if random bits are set to 1 at ~50% probability
        // set margin based on binom dist 99.999% confidence interval
        let margin = 4.417173 * (0.5 * 0.5 / N_SAMPLES as f64).sqrt();
        for i in (52..64).chain(66..128) {
            let p = bins[i] as f64 / N_SAMPLES as f64;
            assert!((p - 0.5).abs() < margin, "random bit {i}: {p}");
        }
    }

    /// Sets correct variant and version bits
    #[test]
    fn sets_correct_variant_and_version_bits() {
        for _ in 0..1_000 {
            let e = generate_v7().unwrap();
            assert_eq!(e.variant(), Variant::Var10);
            assert_eq!(e.version(), Some(7));
        }
    }
}
