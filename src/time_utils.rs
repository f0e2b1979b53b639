// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Shared helpers for calendar weeks, day keys and local datetimes.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, Utc};

/// Canonical format for week and day keys.
pub const DATE_KEY_FORMAT: &str = "%Y-%m-%d";

/// Wall-clock format used when serializing local datetimes.
const LOCAL_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Monday of the week containing `date`.
///
/// Clamped to `NaiveDate::MIN` in the first, partial week of the calendar.
pub fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = Days::new(u64::from(date.weekday().num_days_from_monday()));
    date.checked_sub_days(offset).unwrap_or(NaiveDate::MIN)
}

/// Monday of the week containing the UTC calendar day of `instant`.
pub fn week_start_utc(instant: DateTime<Utc>) -> NaiveDate {
    week_start(instant.date_naive())
}

/// Format a date as `YYYY-MM-DD`.
pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_KEY_FORMAT).to_string()
}

/// Parse a provider "local" datetime.
///
/// Strava reports `start_date_local` with a `Z` suffix even though the
/// value is wall-clock time in the activity's timezone, so any offset is
/// discarded and the digits are taken as-is.
pub fn parse_local_datetime(raw: &str) -> Result<NaiveDateTime, chrono::ParseError> {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(dt) => Ok(dt.naive_local()),
        Err(_) => NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f"),
    }
}

/// Render fractional hours as `2h 30m`, `2h` or `45m`.
pub fn format_hours(hours: f64) -> String {
    let mut h = hours.floor() as i64;
    let mut m = ((hours - h as f64) * 60.0).round() as i64;
    if m == 60 {
        h += 1;
        m = 0;
    }

    if h == 0 {
        format!("{}m", m)
    } else if m == 0 {
        format!("{}h", h)
    } else {
        format!("{}h {}m", h, m)
    }
}

/// Serde adapter for local wall-clock datetimes.
pub mod local_datetime {
    use super::{parse_local_datetime, LOCAL_DATETIME_FORMAT};
    use chrono::NaiveDateTime;
    use serde::{de, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&value.format(LOCAL_DATETIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        parse_local_datetime(&raw)
            .map_err(|e| de::Error::custom(format!("invalid local datetime '{}': {}", raw, e)))
    }
}
