// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::quality::{SkippedRecord, mean, partition_schedules, partition_vessels};
use nvg_domain::{Complaint, ComplaintStatus, Schedule, Vessel, VesselStatus};
use serde::{Deserialize, Serialize};

/// Headline numbers for the fleet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub total_vessels: usize,
    pub active: usize,
    pub standby: usize,
    pub maintenance: usize,
    /// Mean fuel level in percent, 0 without vessels.
    pub average_fuel_level: f64,
    /// Mean seat utilization in percent over schedules offering seats.
    pub average_utilization_percent: f64,
    pub skipped_records: Vec<SkippedRecord>,
}

/// Complaint counts by handling state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplaintSummary {
    pub total: usize,
    pub pending: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub rejected: usize,
}

/// Counts vessels by status and averages fuel and seat utilization.
#[must_use]
pub fn summarize_fleet(vessels: &[Vessel], schedules: &[Schedule]) -> FleetSummary {
    let (valid_vessels, mut skipped_records) = partition_vessels(vessels);
    let (valid_schedules, skipped_schedules) = partition_schedules(schedules);
    skipped_records.extend(skipped_schedules);

    let mut summary: FleetSummary = FleetSummary {
        total_vessels: valid_vessels.len(),
        average_fuel_level: mean(valid_vessels.iter().map(|v| v.fuel_level)),
        average_utilization_percent: mean(
            valid_schedules.iter().filter_map(|s| s.seat_utilization()),
        ) * 100.0,
        skipped_records,
        ..FleetSummary::default()
    };

    for vessel in &valid_vessels {
        match vessel.status {
            VesselStatus::Active => summary.active += 1,
            VesselStatus::Standby => summary.standby += 1,
            VesselStatus::Maintenance => summary.maintenance += 1,
        }
    }

    summary
}

/// Counts complaints by status.
#[must_use]
pub fn summarize_complaints(complaints: &[Complaint]) -> ComplaintSummary {
    complaints
        .iter()
        .fold(ComplaintSummary::default(), |mut summary, complaint| {
            summary.total += 1;
            match complaint.status {
                ComplaintStatus::Pending => summary.pending += 1,
                ComplaintStatus::InProgress => summary.in_progress += 1,
                ComplaintStatus::Resolved => summary.resolved += 1,
                ComplaintStatus::Rejected => summary.rejected += 1,
            }
            summary
        })
}
