//! Virtual timestamps
//!
//! This module contains the timestamp type driving the simulated timeline.
//! Timestamps use the `yyyy-MM-dd_HH:mm:ss` wire format; zero-padding is
//! optional when parsing and always applied when formatting.

use chrono::{Duration, NaiveDateTime};
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// The textual format for timestamps in command files and reports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H:%M:%S";

/// A point on the simulated timeline.
///
/// The simulation treats timestamps as an opaque totally-ordered value with
/// minute-granularity subtraction; seconds are parsed and printed but every
/// accrual computation works on whole elapsed minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Parse a timestamp from its `yyyy-MM-dd_HH:mm:ss` representation.
    pub fn parse(input: &str) -> Result<Self, chrono::ParseError> {
        NaiveDateTime::parse_from_str(input, TIMESTAMP_FORMAT).map(Timestamp)
    }

    /// The timestamp `minutes` minutes later (or earlier, for negative input).
    pub fn plus_minutes(self, minutes: i64) -> Self {
        Timestamp(self.0 + Duration::minutes(minutes))
    }

    /// Whole minutes between `self` and `other`, never negative.
    pub fn minutes_until(self, other: Timestamp) -> i64 {
        (other.0 - self.0).num_minutes().abs()
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Timestamp(value)
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Timestamp::parse(s)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
