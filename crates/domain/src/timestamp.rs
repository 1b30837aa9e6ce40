// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Timestamp parsing for backend records.
//!
//! The backend emits offset-less local date-times (`2025-03-01T08:30`,
//! seconds and fractions optional). Those are read as UTC. RFC 3339 strings
//! with an explicit offset are accepted as-is. Output is always RFC 3339.
//!
//! Calendar dates (`2025-09-14`) go through the [`date`] adapter.

use crate::error::DomainError;
use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};
use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const LOCAL_DATE_TIME: &[BorrowedFormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute][optional [:[second][optional [.[subsecond]]]]]"
);

/// Parses a backend timestamp.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if the value matches neither
/// RFC 3339 nor the offset-less local date-time layout.
pub fn parse_timestamp(value: &str) -> Result<OffsetDateTime, DomainError> {
    if let Ok(parsed) = OffsetDateTime::parse(value, &Rfc3339) {
        return Ok(parsed);
    }

    PrimitiveDateTime::parse(value, LOCAL_DATE_TIME)
        .map(PrimitiveDateTime::assume_utc)
        .map_err(|e| DomainError::InvalidTimestamp {
            value: value.to_string(),
            error: e.to_string(),
        })
}

/// Serde adapter: `#[serde(with = "nvg_domain::timestamp")]`.
///
/// # Errors
///
/// Fails if the timestamp cannot be represented in RFC 3339.
pub fn serialize<S: Serializer>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error> {
    let formatted: String = value.format(&Rfc3339).map_err(S::Error::custom)?;
    serializer.serialize_str(&formatted)
}

/// Serde adapter counterpart of [`serialize`].
///
/// # Errors
///
/// Fails if the input is not a string or not a recognised timestamp.
pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<OffsetDateTime, D::Error> {
    let raw: String = String::deserialize(deserializer)?;
    parse_timestamp(&raw).map_err(D::Error::custom)
}

const CALENDAR_DATE: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Parses a backend calendar date, `yyyy-MM-dd`.
///
/// # Errors
///
/// Returns `DomainError::InvalidTimestamp` if the value is not a valid date.
pub fn parse_date(value: &str) -> Result<Date, DomainError> {
    Date::parse(value, CALENDAR_DATE).map_err(|e| DomainError::InvalidTimestamp {
        value: value.to_string(),
        error: e.to_string(),
    })
}

/// Serde adapter for calendar dates: `#[serde(with = "nvg_domain::timestamp::date")]`.
pub mod date {
    use super::{CALENDAR_DATE, parse_date};
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _, ser::Error as _};
    use time::Date;

    /// # Errors
    ///
    /// Fails if the date cannot be formatted.
    pub fn serialize<S: Serializer>(value: &Date, serializer: S) -> Result<S::Ok, S::Error> {
        let formatted: String = value.format(CALENDAR_DATE).map_err(S::Error::custom)?;
        serializer.serialize_str(&formatted)
    }

    /// # Errors
    ///
    /// Fails if the input is not a `yyyy-MM-dd` string.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Date, D::Error> {
        let raw: String = String::deserialize(deserializer)?;
        parse_date(&raw).map_err(D::Error::custom)
    }
}
