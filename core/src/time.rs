//! time.rs
//! Absolute UTC instants in .NET binary-ticks form.
//!
//! Design notes:
//! - A `Timestamp` is a count of 100 ns ticks since 0001-01-01T00:00:00Z, range
//!   `0 ..= 3_155_378_975_999_999_999` (year 1 to year 9999).
//! - On the wire it travels as the `int64` produced by `DateTime.ToBinary()`:
//!   kind in the top two bits, ticks in the low 62. Writers always emit the UTC kind.
//! - Readers accept every kind. Local kinds already store UTC ticks, wrapped
//!   modulo 2^62 when negative; the wrap is undone and the instant kept in UTC.

use std::fmt;

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::debug;

use crate::constants::ticks;
use crate::types::{WireError, WireResult};
use crate::utils::is_between;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp {
    ticks: i64,
}

/// A `chrono` instant outside 0001-01-01 ..= 9999-12-31.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("instant is outside the representable tick range")]
pub struct TimestampRangeError;

impl Timestamp {
    pub const MIN: Self = Self { ticks: 0 };
    pub const MAX: Self = Self { ticks: ticks::MAX };
    pub const UNIX_EPOCH: Self = Self { ticks: ticks::UNIX_EPOCH };

    pub fn from_ticks(raw: i64) -> Option<Self> {
        is_between(raw, 0, ticks::MAX).then_some(Self { ticks: raw })
    }

    pub fn ticks(&self) -> i64 {
        self.ticks
    }

    pub fn now() -> Self {
        Self::from_datetime(&Utc::now()).unwrap_or(Self::MAX)
    }

    pub fn from_datetime(dt: &DateTime<Utc>) -> Option<Self> {
        let sub = i64::from(dt.timestamp_subsec_nanos()) / ticks::NANOS_PER_TICK;
        let t = dt
            .timestamp()
            .checked_mul(ticks::PER_SECOND)?
            .checked_add(ticks::UNIX_EPOCH)?
            .checked_add(sub)?;
        Self::from_ticks(t)
    }

    pub fn to_datetime(&self) -> DateTime<Utc> {
        let rel = self.ticks - ticks::UNIX_EPOCH;
        let secs = rel.div_euclid(ticks::PER_SECOND);
        let nanos = (rel.rem_euclid(ticks::PER_SECOND) * ticks::NANOS_PER_TICK) as u32;
        // Year 1 ..= 9999 lies inside chrono's range.
        DateTime::<Utc>::from_timestamp(secs, nanos).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Whole seconds since 1970-01-01T00:00:00Z (floored).
    pub fn unix_seconds(&self) -> i64 {
        (self.ticks - ticks::UNIX_EPOCH).div_euclid(ticks::PER_SECOND)
    }

    pub fn from_unix_seconds(secs: i64) -> Option<Self> {
        let t = secs.checked_mul(ticks::PER_SECOND)?.checked_add(ticks::UNIX_EPOCH)?;
        Self::from_ticks(t)
    }

    /// 32-bit Unix time read as unsigned, so it stays valid until 2106-02-07.
    pub fn from_unix32(secs: u32) -> Self {
        Self { ticks: ticks::UNIX_EPOCH + i64::from(secs) * ticks::PER_SECOND }
    }

    /// `None` before 1970 or after 2106-02-07T06:28:15Z.
    pub fn to_unix32(&self) -> Option<u32> {
        u32::try_from(self.unix_seconds()).ok()
    }

    /// `DateTime.ToBinary()` with the UTC kind.
    pub fn to_binary(&self) -> i64 {
        ((self.ticks as u64) | (ticks::KIND_UTC << ticks::KIND_SHIFT)) as i64
    }

    /// `DateTime.FromBinary()`, normalised to UTC.
    ///
    /// # Errors
    /// `InvalidTimestamp` when the tick count is outside year 1 ..= 9999.
    pub fn from_binary(raw: i64) -> WireResult<Self> {
        let bits = raw as u64;
        let mut t = (bits & ticks::MASK) as i64;

        match bits >> ticks::KIND_SHIFT {
            ticks::KIND_UNSPECIFIED | ticks::KIND_UTC => {}
            ticks::KIND_LOCAL | ticks::KIND_LOCAL_AMBIGUOUS_DST => {
                if t > ticks::CEILING - ticks::PER_DAY {
                    t -= ticks::CEILING;
                }
            }
            _ => unreachable!("two-bit kind"),
        }

        Self::from_ticks(t).ok_or_else(|| {
            debug!(raw, ticks = t, "timestamp ticks out of range");
            WireError::InvalidTimestamp(raw)
        })
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(ts: Timestamp) -> Self {
        ts.to_datetime()
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = TimestampRangeError;

    fn try_from(dt: DateTime<Utc>) -> Result<Self, Self::Error> {
        Timestamp::from_datetime(&dt).ok_or(TimestampRangeError)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // chrono has no 7-digit fraction; ticks are appended by hand.
        let frac = self.ticks.rem_euclid(ticks::PER_SECOND);
        write!(f, "{}.{:07}Z", self.to_datetime().format("%Y-%m-%dT%H:%M:%S"), frac)
    }
}
