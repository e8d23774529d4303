//! Exchange-local wall-clock time for bar timestamps.

use chrono::{DateTime, FixedOffset, NaiveDateTime, Utc};
use chrono_tz::Tz;

/// Timezone of the exchange a series was traded on.
///
/// Bars carry UTC timestamps; rows are exported in the exchange's own
/// wall-clock time so a session lands on the calendar day it was traded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExchangeTimezone {
    /// IANA zone, DST aware.
    Named(Tz),
    /// Used when the provider only reports a UTC offset.
    Fixed(FixedOffset),
}

impl Default for ExchangeTimezone {
    fn default() -> Self {
        Self::Named(Tz::UTC)
    }
}

impl ExchangeTimezone {
    /// Prefers the zone name, falls back to the offset in seconds, then UTC.
    pub fn from_provider(name: Option<&str>, gmt_offset_secs: Option<i32>) -> Self {
        if let Some(tz) = name.and_then(|name| name.parse::<Tz>().ok()) {
            return Self::Named(tz);
        }

        gmt_offset_secs
            .and_then(FixedOffset::east_opt)
            .map(Self::Fixed)
            .unwrap_or_default()
    }

    pub fn local_time(&self, timestamp: DateTime<Utc>) -> NaiveDateTime {
        match self {
            Self::Named(tz) => timestamp.with_timezone(tz).naive_local(),
            Self::Fixed(offset) => timestamp.with_timezone(offset).naive_local(),
        }
    }
}
