// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Operational alert generation and prioritization.
//!
//! One pass over the schedules and one over the complaints produce a flat
//! list of alerts. The list is stable-sorted by priority and cut to
//! [`DISPLAY_LIMIT`] entries; the per-priority counts always describe the
//! full scan.

use crate::compliance::{CRITICAL_FUEL_LEVEL, LOW_FUEL_LEVEL};
use crate::quality::{SkippedRecord, partition_schedules};
use nvg_domain::{Complaint, ComplaintStatus, Schedule, VesselStatus};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Number of alerts kept for display.
pub const DISPLAY_LIMIT: usize = 10;

/// Seat utilization above which a schedule is flagged as nearly full.
pub const HIGH_SEAT_UTILIZATION: f64 = 0.90;

/// Cargo utilization above which a schedule is flagged as nearly full.
pub const HIGH_CARGO_UTILIZATION: f64 = 0.85;

/// Window before departure, in hours, that raises an operations notice.
pub const DEPARTURE_WINDOW_HOURS: f64 = 24.0;

/// Pending complaints older than this many days are high priority.
pub const COMPLAINT_HIGH_AGE_DAYS: f64 = 7.0;

/// Pending complaints older than this many days are critical.
pub const COMPLAINT_CRITICAL_AGE_DAYS: f64 = 14.0;

/// Alert priority. Ordering is by urgency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AlertPriority {
    Low,
    Medium,
    High,
    Critical,
}

impl AlertPriority {
    /// Numeric rank: Critical 4, High 3, Medium 2, Low 1.
    #[must_use]
    pub const fn rank(&self) -> u8 {
        match self {
            Self::Critical => 4,
            Self::High => 3,
            Self::Medium => 2,
            Self::Low => 1,
        }
    }
}

/// What an alert is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AlertCategory {
    #[serde(rename = "Vessel Fuel")]
    VesselFuel,
    Capacity,
    Maintenance,
    Cargo,
    Operations,
    #[serde(rename = "Customer Complaint")]
    CustomerComplaint,
}

impl AlertCategory {
    /// Display label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::VesselFuel => "Vessel Fuel",
            Self::Capacity => "Capacity",
            Self::Maintenance => "Maintenance",
            Self::Cargo => "Cargo",
            Self::Operations => "Operations",
            Self::CustomerComplaint => "Customer Complaint",
        }
    }

    /// Prefix of the alert id.
    #[must_use]
    pub const fn token(&self) -> &'static str {
        match self {
            Self::VesselFuel => "FUEL",
            Self::Capacity => "CAPACITY",
            Self::Maintenance => "MAINT",
            Self::Cargo => "CARGO",
            Self::Operations => "OPS",
            Self::CustomerComplaint => "COMPLAINT",
        }
    }
}

/// A single flagged condition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Composite id; unique per category and underlying record.
    pub id: String,
    pub category: AlertCategory,
    pub priority: AlertPriority,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vessel_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complaint_id: Option<i64>,
}

impl Alert {
    fn for_schedule(
        category: AlertCategory,
        priority: AlertPriority,
        schedule: &Schedule,
        title: &str,
        description: String,
    ) -> Self {
        Self {
            id: format!(
                "{}-V{}-S{}",
                category.token(),
                schedule.vessel.id,
                schedule.id
            ),
            category,
            priority,
            title: title.to_string(),
            description,
            vessel_id: Some(schedule.vessel.id),
            schedule_id: Some(schedule.id),
            complaint_id: None,
        }
    }
}

/// Alert totals per priority over the complete scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertCounts {
    pub critical: usize,
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

impl AlertCounts {
    /// Tallies one alert.
    pub const fn record(&mut self, priority: AlertPriority) {
        match priority {
            AlertPriority::Critical => self.critical += 1,
            AlertPriority::High => self.high += 1,
            AlertPriority::Medium => self.medium += 1,
            AlertPriority::Low => self.low += 1,
        }
    }

    /// Sum over all priorities.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.critical + self.high + self.medium + self.low
    }
}

/// Prioritized alerts ready for display.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertReport {
    /// The most urgent alerts, at most [`DISPLAY_LIMIT`].
    pub alerts: Vec<Alert>,
    pub counts: AlertCounts,
    /// Number of alerts produced by the scan, before truncation.
    pub total_generated: usize,
    pub skipped_records: Vec<SkippedRecord>,
}

impl AlertReport {
    /// Counts, stable-sorts and truncates a complete alert list.
    #[must_use]
    pub fn from_alerts(mut alerts: Vec<Alert>, skipped_records: Vec<SkippedRecord>) -> Self {
        let mut counts: AlertCounts = AlertCounts::default();
        for alert in &alerts {
            counts.record(alert.priority);
        }
        let total_generated: usize = alerts.len();

        // sort_by is stable: equal priorities keep scan order.
        alerts.sort_by(|a, b| b.priority.cmp(&a.priority));
        alerts.truncate(DISPLAY_LIMIT);

        Self {
            alerts,
            counts,
            total_generated,
            skipped_records,
        }
    }

    /// True when the scan produced nothing.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.total_generated == 0
    }
}

/// Evaluates every schedule rule against one schedule.
///
/// Rules are independent; one schedule can raise several alerts. The result
/// is in rule order: fuel, capacity, maintenance, cargo, operations.
#[must_use]
pub fn schedule_alerts(schedule: &Schedule, now: OffsetDateTime) -> Vec<Alert> {
    let mut alerts: Vec<Alert> = Vec::new();
    let vessel = &schedule.vessel;
    let route: String = schedule.route.key();

    if vessel.fuel_level < CRITICAL_FUEL_LEVEL {
        alerts.push(Alert::for_schedule(
            AlertCategory::VesselFuel,
            AlertPriority::Critical,
            schedule,
            "Critical fuel level",
            format!(
                "{} is at {:.1}% fuel with schedule {} on {route}",
                vessel.name, vessel.fuel_level, schedule.id
            ),
        ));
    } else if vessel.fuel_level < LOW_FUEL_LEVEL {
        alerts.push(Alert::for_schedule(
            AlertCategory::VesselFuel,
            AlertPriority::High,
            schedule,
            "Low fuel level",
            format!(
                "{} is at {:.1}% fuel with schedule {} on {route}",
                vessel.name, vessel.fuel_level, schedule.id
            ),
        ));
    }

    if let Some(ratio) = schedule.seat_utilization()
        && ratio > HIGH_SEAT_UTILIZATION
    {
        alerts.push(Alert::for_schedule(
            AlertCategory::Capacity,
            AlertPriority::Medium,
            schedule,
            "Seats nearly sold out",
            format!(
                "Schedule {} on {route} is {:.0}% booked ({} of {} seats)",
                schedule.id,
                ratio * 100.0,
                schedule.booked_seats_count,
                schedule.total_seats
            ),
        ));
    }

    if vessel.status == VesselStatus::Standby {
        alerts.push(Alert::for_schedule(
            AlertCategory::Maintenance,
            AlertPriority::High,
            schedule,
            "Vessel on standby",
            format!(
                "{} is on standby but assigned to schedule {} on {route}",
                vessel.name, schedule.id
            ),
        ));
    }

    if let Some(ratio) = schedule.cargo_utilization()
        && ratio > HIGH_CARGO_UTILIZATION
    {
        alerts.push(Alert::for_schedule(
            AlertCategory::Cargo,
            AlertPriority::Medium,
            schedule,
            "Cargo hold nearly full",
            format!(
                "Cargo on schedule {} is at {:.0}% of {:.0} kg capacity",
                schedule.id,
                ratio * 100.0,
                schedule.total_cargo_capacity
            ),
        ));
    }

    let hours: f64 = schedule.hours_until_departure(now);
    if hours > 0.0 && hours < DEPARTURE_WINDOW_HOURS {
        alerts.push(Alert::for_schedule(
            AlertCategory::Operations,
            AlertPriority::Low,
            schedule,
            "Departure within 24 hours",
            format!("{} departs on {route} in {hours:.1} hours", vessel.name),
        ));
    }

    alerts
}

/// Raises an alert for a pending complaint, prioritized by its age.
#[must_use]
pub fn complaint_alert(complaint: &Complaint, now: OffsetDateTime) -> Option<Alert> {
    if complaint.status != ComplaintStatus::Pending {
        return None;
    }

    let age_days: f64 = complaint.age_days(now);
    let priority: AlertPriority = if age_days > COMPLAINT_CRITICAL_AGE_DAYS {
        AlertPriority::Critical
    } else if age_days > COMPLAINT_HIGH_AGE_DAYS {
        AlertPriority::High
    } else {
        AlertPriority::Medium
    };

    let category: AlertCategory = AlertCategory::CustomerComplaint;
    Some(Alert {
        id: format!("{}-C{}", category.token(), complaint.id),
        category,
        priority,
        title: String::from("Unresolved complaint"),
        description: format!(
            "\"{}\" has been pending for {:.0} days",
            complaint.subject, age_days
        ),
        vessel_id: None,
        schedule_id: None,
        complaint_id: Some(complaint.id),
    })
}

/// Runs every rule over both collections and returns the unsorted alerts.
///
/// Schedule alerts come first, in schedule order, then complaint alerts.
#[must_use]
pub fn scan_alerts(
    schedules: &[Schedule],
    complaints: &[Complaint],
    now: OffsetDateTime,
) -> (Vec<Alert>, Vec<SkippedRecord>) {
    let (valid, skipped) = partition_schedules(schedules);

    let alerts: Vec<Alert> = valid
        .into_iter()
        .flat_map(|s| schedule_alerts(s, now))
        .chain(complaints.iter().filter_map(|c| complaint_alert(c, now)))
        .collect();

    (alerts, skipped)
}

/// Scans, counts and prioritizes alerts for display.
#[must_use]
pub fn generate_alerts(
    schedules: &[Schedule],
    complaints: &[Complaint],
    now: OffsetDateTime,
) -> AlertReport {
    let (alerts, skipped) = scan_alerts(schedules, complaints, now);
    AlertReport::from_alerts(alerts, skipped)
}
