//! UUIDv4 and UUIDv7 generator

use std::time;

use rand::{rngs::OsRng, RngCore};
use tracing::{debug, trace};

use crate::{Error, Result, Uuid, Version};

/// Represents a UUID generator that draws random bytes from a random number generator.
///
/// The generator holds no state other than the random number generator. It creates UUIDv7
/// values that sort by their creation time to millisecond precision; the order of UUIDs created
/// within the same millisecond is random because no sequence counter is embedded.
///
/// The default generator employs [`OsRng`], which reads from the operating system's
/// cryptographically secure random source and is safe to share across threads.
///
/// # Examples
///
/// ```rust
/// use ruuid::{Generator, Version};
///
/// let mut g: Generator = Generator::default();
/// let x = g.generate(Version::V7)?;
/// println!("{}", x); // e.g., "018fca8f-345b-711a-838a-a276340388e7"
/// assert_eq!(x.version(), Some(7));
///
/// assert!(g.generate(Version::V1).is_err());
/// # Ok::<(), ruuid::Error>(())
/// ```
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Generator<R = OsRng> {
    /// The random number generator used by the generator.
    rng: R,
}

impl<R: RngCore> Generator<R> {
    /// Creates a generator instance with a specified random number generator.
    pub const fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Generates a new UUID of the requested version.
    ///
    /// Fails with [`Error::UnsupportedVersion`] for anything other than [`Version::V4`] and
    /// [`Version::V7`], and with [`Error::RandomSource`] if the random number generator fails.
    pub fn generate(&mut self, version: Version) -> Result<Uuid> {
        match version {
            Version::V4 => self.generate_v4(),
            Version::V7 => self.generate_v7(),
            v => Err(Error::UnsupportedVersion(v.as_u8())),
        }
    }

    /// Generates a new UUIDv4 object.
    pub fn generate_v4(&mut self) -> Result<Uuid> {
        let uuid = Uuid::from_random_bytes_v4(self.random_bytes()?);
        trace!(%uuid, "generated v4");
        Ok(uuid)
    }

    /// Generates a new UUIDv7 object from the current timestamp.
    pub fn generate_v7(&mut self) -> Result<Uuid> {
        self.generate_v7_at(unix_ts_ms_now())
    }

    /// Generates a new UUIDv7 object from the `unix_ts_ms` passed.
    ///
    /// Only the low 48 bits of `unix_ts_ms` are embedded.
    pub fn generate_v7_at(&mut self, unix_ts_ms: u64) -> Result<Uuid> {
        let uuid = Uuid::from_random_bytes_v7(unix_ts_ms, self.random_bytes()?);
        trace!(%uuid, unix_ts_ms, "generated v7");
        Ok(uuid)
    }

    fn random_bytes(&mut self) -> Result<[u8; 16]> {
        let mut bytes = [0u8; 16];
        self.rng.try_fill_bytes(&mut bytes).map_err(|err| {
            debug!(%err, "random number generator failed");
            Error::from(err)
        })?;
        Ok(bytes)
    }
}

/// Returns the current wall-clock time as milliseconds since the Unix epoch, or zero if the
/// system clock reads earlier than the epoch.
pub(crate) fn unix_ts_ms_now() -> u64 {
    time::SystemTime::now()
        .duration_since(time::UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}
