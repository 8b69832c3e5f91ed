//! The `UniqueId` value type.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of 100ns ticks in one second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;

/// Nanoseconds per tick.
pub const NANOS_PER_TICK: u32 = 100;

/// An identifier keyed on (timestamp, node address, sequence).
///
/// Ordering compares the fields in that order, so sorting a set of ids sorts
/// on time first and uses node address then sequence to break ties.
///
/// The text form joins the fields with `-`, e.g. `1-2-3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UniqueId {
    // Field order drives the derived ordering.
    timestamp: i64,
    node_address: i64,
    sequence: u32,
}

impl UniqueId {
    /// Creates an id from its three fields.
    #[must_use]
    pub const fn new(timestamp: i64, node_address: i64, sequence: u32) -> Self {
        Self {
            timestamp,
            node_address,
            sequence,
        }
    }

    /// Hundreds of nanoseconds elapsed between the Unix epoch and generation.
    #[must_use]
    pub const fn timestamp(&self) -> i64 {
        self.timestamp
    }

    /// Identifier of the generator instance that produced this id.
    #[must_use]
    pub const fn node_address(&self) -> i64 {
        self.node_address
    }

    /// Per-tick counter breaking ties between ids with the same timestamp.
    #[must_use]
    pub const fn sequence(&self) -> u32 {
        self.sequence
    }

    /// The instant this id's timestamp denotes, truncated to tick resolution.
    ///
    /// Returns `None` when the timestamp lies outside the range `chrono` can
    /// represent.
    #[must_use]
    pub fn instant(&self) -> Option<DateTime<Utc>> {
        let secs = self.timestamp.div_euclid(TICKS_PER_SECOND);
        let ticks = self.timestamp.rem_euclid(TICKS_PER_SECOND);
        let nanos = u32::try_from(ticks).ok()? * NANOS_PER_TICK;
        DateTime::from_timestamp(secs, nanos)
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (t, n, s) = (self.timestamp, self.node_address, self.sequence);
        write!(f, "{t}-{n}-{s}")
    }
}

/// Errors from parsing the text form of a [`UniqueId`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIdError {
    /// The input did not split into exactly three fields.
    #[error("expected 3 dash-separated fields, found {0}")]
    WrongFieldCount(usize),
    /// A field was not a valid integer of its type.
    #[error("invalid {field} `{value}`")]
    InvalidField {
        /// Name of the offending field.
        field: &'static str,
        /// The text that failed to parse.
        value: String,
    },
}

impl FromStr for UniqueId {
    type Err = ParseIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = split_fields(s);
        let [timestamp, node_address, sequence] = fields.as_slice() else {
            return Err(ParseIdError::WrongFieldCount(fields.len()));
        };
        Ok(Self {
            timestamp: parse_field("timestamp", timestamp)?,
            node_address: parse_field("node address", node_address)?,
            sequence: parse_field("sequence", sequence)?,
        })
    }
}

/// Splits on the dashes that follow a digit. Any other dash is a sign.
fn split_fields(s: &str) -> Vec<&str> {
    let mut fields = Vec::with_capacity(3);
    let mut start = 0;
    let mut prev_digit = false;
    for (i, c) in s.char_indices() {
        if c == '-' && prev_digit {
            fields.push(&s[start..i]);
            start = i + 1;
        }
        prev_digit = c.is_ascii_digit();
    }
    fields.push(&s[start..]);
    fields
}

fn parse_field<T: FromStr>(field: &'static str, value: &str) -> Result<T, ParseIdError> {
    let invalid = || ParseIdError::InvalidField {
        field,
        value: value.to_string(),
    };
    value.parse().map_err(|_| invalid())
}

impl Serialize for UniqueId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for UniqueId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
