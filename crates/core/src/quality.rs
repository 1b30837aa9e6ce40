// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Data-quality gate applied before aggregation.
//!
//! Malformed records are dropped one at a time and reported back to the
//! caller, so a single bad row never blanks a whole report.

use nvg_domain::{DomainError, Schedule, Vessel, validate_schedule, validate_vessel};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// A record excluded from a report, and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRecord {
    /// Entity kind, e.g. `"schedule"`.
    pub entity: String,
    /// The record id, when it could be read.
    pub id: Option<i64>,
    /// Human-readable reason.
    pub reason: String,
}

impl SkippedRecord {
    /// Creates a new skipped-record entry.
    #[must_use]
    pub fn new(entity: &str, id: Option<i64>, reason: impl Into<String>) -> Self {
        Self {
            entity: entity.to_string(),
            id,
            reason: reason.into(),
        }
    }

    fn from_domain_error(entity: &str, id: i64, err: &DomainError) -> Self {
        Self::new(entity, Some(id), err.to_string())
    }
}

/// Splits schedules into valid ones and skipped-record entries.
#[must_use]
pub fn partition_schedules(schedules: &[Schedule]) -> (Vec<&Schedule>, Vec<SkippedRecord>) {
    let mut valid: Vec<&Schedule> = Vec::with_capacity(schedules.len());
    let mut skipped: Vec<SkippedRecord> = Vec::new();

    for schedule in schedules {
        match validate_schedule(schedule) {
            Ok(()) => valid.push(schedule),
            Err(err) => {
                warn!(schedule_id = schedule.id, error = %err, "Skipping malformed schedule");
                skipped.push(SkippedRecord::from_domain_error("schedule", schedule.id, &err));
            }
        }
    }

    (valid, skipped)
}

/// Splits vessels into valid ones and skipped-record entries.
#[must_use]
pub fn partition_vessels(vessels: &[Vessel]) -> (Vec<&Vessel>, Vec<SkippedRecord>) {
    let mut valid: Vec<&Vessel> = Vec::with_capacity(vessels.len());
    let mut skipped: Vec<SkippedRecord> = Vec::new();

    for vessel in vessels {
        match validate_vessel(vessel) {
            Ok(()) => valid.push(vessel),
            Err(err) => {
                warn!(vessel_id = vessel.id, error = %err, "Skipping malformed vessel");
                skipped.push(SkippedRecord::from_domain_error("vessel", vessel.id, &err));
            }
        }
    }

    (valid, skipped)
}

/// Arithmetic mean, 0 for an empty input.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count): (f64, usize) = values.fold((0.0, 0), |(s, n), v| (s + v, n + 1));
    if count == 0 { 0.0 } else { sum / count as f64 }
}

/// `part / whole * 100`, 0 when `whole` is zero.
#[allow(clippy::cast_precision_loss)]
pub(crate) fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}
