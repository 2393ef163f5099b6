//! Discord's 64-bit unique identifier format.

use chrono::{DateTime, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Milliseconds since the Unix epoch at which Discord's epoch starts
/// (2015-01-01T00:00:00Z).
const DISCORD_EPOCH_MS: u64 = 1_420_070_400_000;

/// A Discord snowflake: a 64-bit unique identifier embedding a timestamp.
///
/// The upper 42 bits are milliseconds since the Discord epoch; the remainder
/// encodes worker, process, and sequence. Discord transmits snowflakes as
/// JSON strings to survive languages without 64-bit integers, so the serde
/// implementations here read and write strings while accepting bare numbers
/// on input.
///
/// # Examples
///
/// ```
/// use giotto_core::Snowflake;
///
/// let id = Snowflake::new(175928847299117063);
/// assert_eq!(id.to_string(), "175928847299117063");
/// assert_eq!(id.timestamp().timestamp_millis(), 1462015105796);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Snowflake(u64);

impl Snowflake {
    /// Wrap a raw 64-bit id.
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// The raw 64-bit value.
    pub const fn get(self) -> u64 {
        self.0
    }

    /// The creation time embedded in the id, as Unix milliseconds.
    pub const fn timestamp_ms(self) -> u64 {
        (self.0 >> 22) + DISCORD_EPOCH_MS
    }

    /// The creation time embedded in the id.
    pub fn timestamp(self) -> DateTime<Utc> {
        Utc.timestamp_millis_opt(self.timestamp_ms() as i64)
            .single()
            .unwrap_or(DateTime::UNIX_EPOCH)
    }

    /// The internal worker id bits.
    pub const fn worker_id(self) -> u8 {
        ((self.0 & 0x3E0000) >> 17) as u8
    }

    /// The internal process id bits.
    pub const fn process_id(self) -> u8 {
        ((self.0 & 0x1F000) >> 12) as u8
    }

    /// The per-process increment bits.
    pub const fn increment(self) -> u16 {
        (self.0 & 0xFFF) as u16
    }

    /// Build the smallest snowflake for a given time, for use as a paginated
    /// query boundary.
    pub fn from_timestamp(at: DateTime<Utc>) -> Self {
        let ms = at.timestamp_millis().max(0) as u64;
        Self(ms.saturating_sub(DISCORD_EPOCH_MS) << 22)
    }
}

impl fmt::Display for Snowflake {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for Snowflake {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl From<Snowflake> for u64 {
    fn from(value: Snowflake) -> Self {
        value.0
    }
}

impl FromStr for Snowflake {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse().map(Self)
    }
}

impl Serialize for Snowflake {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

struct SnowflakeVisitor;

impl Visitor<'_> for SnowflakeVisitor {
    type Value = Snowflake;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a snowflake string or integer")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Ok(Snowflake(value))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        value.parse().map_err(de::Error::custom)
    }
}

impl<'de> Deserialize<'de> for Snowflake {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(SnowflakeVisitor)
    }
}
