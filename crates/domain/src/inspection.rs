// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Regulatory inspection records, one per vessel.

use crate::types::Vessel;
use serde::{Deserialize, Serialize};
use time::{Date, Month};

/// Months after the last inspection before a vessel is due again.
pub const INSPECTION_INTERVAL_MONTHS: u8 = 6;

/// Safety and documentation state of a vessel as recorded by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRecord {
    /// Backend identifier.
    pub id: i64,
    /// The inspected vessel.
    pub vessel: Vessel,
    pub safety_check_passed: bool,
    pub regulatory_documents_complete: bool,
    /// Calendar date of the most recent inspection.
    #[serde(with = "crate::timestamp::date")]
    pub last_inspection_date: Date,
}

impl ComplianceRecord {
    /// Whether the last inspection falls strictly before
    /// [`INSPECTION_INTERVAL_MONTHS`] months ahead of `today`.
    #[must_use]
    pub fn is_due_for_inspection(&self, today: Date) -> bool {
        months_before(today, INSPECTION_INTERVAL_MONTHS)
            .is_some_and(|cutoff| self.last_inspection_date < cutoff)
    }
}

/// The same day `months` calendar months earlier, clamped to the end of a
/// shorter month (31 August minus six months is 28 or 29 February).
///
/// Returns `None` only when the result falls outside the supported range.
#[must_use]
pub fn months_before(date: Date, months: u8) -> Option<Date> {
    let index: i32 = date.year() * 12 + i32::from(u8::from(date.month())) - 1 - i32::from(months);
    let year: i32 = index.div_euclid(12);
    let month: Month = u8::try_from(index.rem_euclid(12) + 1)
        .ok()
        .and_then(|m| Month::try_from(m).ok())?;

    (1..=date.day())
        .rev()
        .find_map(|day| Date::from_calendar_date(year, month, day).ok())
}
