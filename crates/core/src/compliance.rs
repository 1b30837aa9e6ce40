// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Vessel compliance classification.
//!
//! A vessel's verdict is computed from its fuel level, its status and the
//! utilization of its schedules. Compliance is **computed**, never stored:
//! every call is a pure function of the input collections and `now`.

use crate::error::MetricsError;
use crate::quality::{SkippedRecord, mean, partition_schedules, partition_vessels, percentage};
use nvg_domain::{ComplianceRecord, Schedule, Vessel, VesselStatus, validate_vessel};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::{HashMap, HashSet};
use time::{Date, OffsetDateTime};
use tracing::{debug, warn};

/// Fuel level (percent) below which a vessel is non-compliant.
pub const CRITICAL_FUEL_LEVEL: f64 = 20.0;

/// Fuel level (percent) below which a warning is raised.
pub const LOW_FUEL_LEVEL: f64 = 50.0;

/// Mean seat utilization below which upcoming voyages are flagged.
pub const LOW_SEAT_UTILIZATION: f64 = 0.30;

/// Ordinal risk attached to a vessel. Ordering is by severity.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    Critical,
}

/// Binary compliance verdict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplianceStatus {
    Compliant,
    #[serde(rename = "Non-Compliant")]
    NonCompliant,
}

/// A rule that matched during classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PendingItem {
    #[serde(rename = "Critical Fuel Level")]
    CriticalFuelLevel,
    #[serde(rename = "Low Fuel Warning")]
    LowFuelWarning,
    #[serde(rename = "Status Verification Required")]
    StatusVerificationRequired,
    #[serde(rename = "Low Capacity Utilization")]
    LowCapacityUtilization,
}

impl PendingItem {
    /// Display label of the item.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CriticalFuelLevel => "Critical Fuel Level",
            Self::LowFuelWarning => "Low Fuel Warning",
            Self::StatusVerificationRequired => "Status Verification Required",
            Self::LowCapacityUtilization => "Low Capacity Utilization",
        }
    }
}

impl std::fmt::Display for PendingItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Inspection state of a vessel, taken from its backend compliance record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InspectionStatus {
    pub record_id: i64,
    pub safety_check_passed: bool,
    pub regulatory_documents_complete: bool,
    #[serde(with = "nvg_domain::timestamp::date")]
    pub last_inspection_date: Date,
    pub due_for_inspection: bool,
}

impl InspectionStatus {
    /// Reads a compliance record as of `now`.
    #[must_use]
    pub fn from_record(record: &ComplianceRecord, now: OffsetDateTime) -> Self {
        Self {
            record_id: record.id,
            safety_check_passed: record.safety_check_passed,
            regulatory_documents_complete: record.regulatory_documents_complete,
            last_inspection_date: record.last_inspection_date,
            due_for_inspection: record.is_due_for_inspection(now.date()),
        }
    }
}

/// Compliance verdict for one vessel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VesselCompliance {
    pub vessel_id: i64,
    pub vessel_name: String,
    pub vessel_status: VesselStatus,
    pub fuel_level: f64,
    pub compliance_status: ComplianceStatus,
    pub risk_level: RiskLevel,
    /// Every rule that matched, in evaluation order.
    pub pending_items: Vec<PendingItem>,
    pub total_schedules: usize,
    /// Schedules departing strictly after `now`.
    pub active_schedules: usize,
    /// Mean seat utilization as a ratio.
    pub seat_utilization: f64,
    /// Mean cargo utilization as a ratio.
    pub cargo_utilization: f64,
    pub utilization_percent: f64,
    pub cargo_utilization_percent: f64,
    /// `None` when no inspection record is known for the vessel, including
    /// when the records could not be fetched.
    pub inspection: Option<InspectionStatus>,
}

/// A vessel known to the fleet that has no schedules and was not classified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnscheduledVessel {
    pub vessel_id: i64,
    pub vessel_name: String,
    pub vessel_status: VesselStatus,
}

/// Fleet-wide compliance counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSummary {
    pub classified_vessels: usize,
    pub compliant: usize,
    pub non_compliant: usize,
    pub critical_risk: usize,
    pub medium_risk: usize,
    pub low_risk: usize,
    pub pending_items: usize,
    /// Classified vessels whose inspection record says they are due.
    pub due_for_inspection: usize,
    /// Compliant over classified, 0 when nothing was classified.
    pub compliance_percentage: f64,
}

/// Compliance verdicts for every scheduled vessel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    /// One entry per vessel, in order of first appearance in the schedules.
    pub vessels: Vec<VesselCompliance>,
    pub unscheduled_vessels: Vec<UnscheduledVessel>,
    pub summary: ComplianceSummary,
    pub skipped_records: Vec<SkippedRecord>,
}

/// Classifies a single vessel from its schedules.
///
/// The caller is expected to have screened the schedules for malformed
/// values; the vessel itself is validated here.
///
/// # Arguments
///
/// * `vessel` - The vessel record (fuel level and status are read from it)
/// * `schedules` - The vessel's schedules, at least one
/// * `now` - The evaluation instant
///
/// # Errors
///
/// Returns an error if:
/// - `schedules` is empty
/// - A schedule references a different vessel
/// - The vessel fails validation
pub fn classify_vessel<S: Borrow<Schedule>>(
    vessel: &Vessel,
    schedules: &[S],
    now: OffsetDateTime,
) -> Result<VesselCompliance, MetricsError> {
    if schedules.is_empty() {
        return Err(MetricsError::NoSchedules {
            vessel_id: vessel.id,
        });
    }

    let schedules: Vec<&Schedule> = schedules
        .iter()
        .map(<S as Borrow<Schedule>>::borrow)
        .collect();

    if let Some(other) = schedules.iter().find(|s| s.vessel.id != vessel.id) {
        return Err(MetricsError::VesselMismatch {
            expected: vessel.id,
            found: other.vessel.id,
        });
    }

    validate_vessel(vessel)?;

    let total_schedules: usize = schedules.len();
    let active_schedules: usize = schedules.iter().filter(|s| s.departs_after(now)).count();
    let seat_utilization: f64 = mean(schedules.iter().filter_map(|s| s.seat_utilization()));
    let cargo_utilization: f64 = mean(schedules.iter().filter_map(|s| s.cargo_utilization()));

    let mut pending_items: Vec<PendingItem> = Vec::new();
    let mut risk_level: RiskLevel = RiskLevel::Low;
    let mut compliance_status: ComplianceStatus = ComplianceStatus::Compliant;

    if vessel.fuel_level < CRITICAL_FUEL_LEVEL {
        compliance_status = ComplianceStatus::NonCompliant;
        pending_items.push(PendingItem::CriticalFuelLevel);
        risk_level = RiskLevel::Critical;
    } else if vessel.fuel_level < LOW_FUEL_LEVEL {
        pending_items.push(PendingItem::LowFuelWarning);
        risk_level = risk_level.max(RiskLevel::Medium);
    }

    if vessel.status == VesselStatus::Standby && active_schedules > 0 {
        pending_items.push(PendingItem::StatusVerificationRequired);
        risk_level = risk_level.max(RiskLevel::Medium);
    }

    if seat_utilization < LOW_SEAT_UTILIZATION && active_schedules > 0 {
        pending_items.push(PendingItem::LowCapacityUtilization);
        risk_level = risk_level.max(RiskLevel::Medium);
    }

    Ok(VesselCompliance {
        vessel_id: vessel.id,
        vessel_name: vessel.name.clone(),
        vessel_status: vessel.status,
        fuel_level: vessel.fuel_level,
        compliance_status,
        risk_level,
        pending_items,
        total_schedules,
        active_schedules,
        seat_utilization,
        cargo_utilization,
        utilization_percent: seat_utilization * 100.0,
        cargo_utilization_percent: cargo_utilization * 100.0,
        inspection: None,
    })
}

/// Classifies one vessel, picking its schedules out of a fleet-wide list.
///
/// Malformed schedules are skipped with a warning before classification.
/// A valid `fleet_record` with the requested id replaces the copy embedded
/// in the schedules, as in [`compliance_report`].
///
/// # Errors
///
/// Returns `MetricsError::NoValidSchedules` if the vessel has schedules but
/// every one of them was malformed, `MetricsError::NoSchedules` if no
/// schedule references the vessel at all, or any error from
/// [`classify_vessel`].
pub fn vessel_compliance(
    schedules: &[Schedule],
    vessel_id: i64,
    fleet_record: Option<&Vessel>,
    now: OffsetDateTime,
) -> Result<VesselCompliance, MetricsError> {
    let (valid, _) = partition_schedules(schedules);
    let own: Vec<&Schedule> = valid
        .into_iter()
        .filter(|s| s.vessel.id == vessel_id)
        .collect();

    let Some(first) = own.first() else {
        let skipped: usize = schedules.iter().filter(|s| s.vessel.id == vessel_id).count();
        return Err(if skipped > 0 {
            MetricsError::NoValidSchedules { vessel_id, skipped }
        } else {
            MetricsError::NoSchedules { vessel_id }
        });
    };

    let vessel: &Vessel = match fleet_record.filter(|v| v.id == vessel_id) {
        Some(record) => match validate_vessel(record) {
            Ok(()) => record,
            Err(err) => {
                warn!(vessel_id, error = %err, "Ignoring malformed fleet record");
                &first.vessel
            }
        },
        None => &first.vessel,
    };

    classify_vessel(vessel, &own, now)
}

/// Attaches inspection records to the verdicts of a report.
///
/// Records are matched on vessel id; the first record for a vessel wins.
/// Verdicts without a record keep `inspection: None`. The summary's
/// `due_for_inspection` count is recomputed.
pub fn apply_inspections(
    report: &mut ComplianceReport,
    records: &[ComplianceRecord],
    now: OffsetDateTime,
) {
    let mut by_vessel: HashMap<i64, &ComplianceRecord> = HashMap::new();
    for record in records {
        by_vessel.entry(record.vessel.id).or_insert(record);
    }

    for verdict in &mut report.vessels {
        verdict.inspection = by_vessel
            .get(&verdict.vessel_id)
            .map(|record| InspectionStatus::from_record(record, now));
        if verdict.inspection.is_none() {
            debug!(vessel_id = verdict.vessel_id, "No inspection record for vessel");
        }
    }

    report.summary.due_for_inspection = report
        .vessels
        .iter()
        .filter(|v| v.inspection.as_ref().is_some_and(|i| i.due_for_inspection))
        .count();
}

/// Builds the fleet compliance report.
///
/// Vessels are derived from the schedules: each distinct `vessel.id` forms a
/// group, in order of first appearance. When `vessels` is supplied, a record
/// with a matching id replaces the copy embedded in the schedules, and
/// vessels without any schedule are listed in `unscheduled_vessels` instead
/// of being classified.
#[must_use]
pub fn compliance_report(
    schedules: &[Schedule],
    vessels: Option<&[Vessel]>,
    now: OffsetDateTime,
) -> ComplianceReport {
    let (valid_schedules, skipped_records) = partition_schedules(schedules);
    let mut report: ComplianceReport = ComplianceReport {
        skipped_records,
        ..ComplianceReport::default()
    };

    let known_vessels: Vec<&Vessel> = match vessels {
        Some(list) => {
            let (valid, skipped) = partition_vessels(list);
            report.skipped_records.extend(skipped);
            valid
        }
        None => Vec::new(),
    };
    let vessel_lookup: HashMap<i64, &Vessel> = known_vessels.iter().map(|v| (v.id, *v)).collect();

    let mut group_index: HashMap<i64, usize> = HashMap::new();
    let mut groups: Vec<Vec<&Schedule>> = Vec::new();
    for schedule in valid_schedules {
        let idx: usize = *group_index.entry(schedule.vessel.id).or_insert_with(|| {
            groups.push(Vec::new());
            groups.len() - 1
        });
        groups[idx].push(schedule);
    }

    for group in &groups {
        let Some(first) = group.first() else {
            continue;
        };
        let vessel: &Vessel = vessel_lookup
            .get(&first.vessel.id)
            .copied()
            .unwrap_or(&first.vessel);

        match classify_vessel(vessel, group, now) {
            Ok(verdict) => report.vessels.push(verdict),
            Err(err) => {
                warn!(
                    vessel_id = vessel.id,
                    error = %err,
                    "Skipping vessel during compliance classification"
                );
                report
                    .skipped_records
                    .push(SkippedRecord::new("vessel", Some(vessel.id), err.to_string()));
            }
        }
    }

    let scheduled_ids: HashSet<i64> = group_index.keys().copied().collect();
    report.unscheduled_vessels = known_vessels
        .iter()
        .filter(|v| !scheduled_ids.contains(&v.id))
        .map(|v| UnscheduledVessel {
            vessel_id: v.id,
            vessel_name: v.name.clone(),
            vessel_status: v.status,
        })
        .collect();

    report.summary = summarize(&report.vessels);
    report
}

fn summarize(vessels: &[VesselCompliance]) -> ComplianceSummary {
    let mut summary: ComplianceSummary = ComplianceSummary {
        classified_vessels: vessels.len(),
        ..ComplianceSummary::default()
    };

    for verdict in vessels {
        match verdict.compliance_status {
            ComplianceStatus::Compliant => summary.compliant += 1,
            ComplianceStatus::NonCompliant => summary.non_compliant += 1,
        }
        match verdict.risk_level {
            RiskLevel::Critical => summary.critical_risk += 1,
            RiskLevel::Medium => summary.medium_risk += 1,
            RiskLevel::Low => summary.low_risk += 1,
        }
        summary.pending_items += verdict.pending_items.len();
    }

    summary.compliance_percentage = percentage(summary.compliant, summary.classified_vessels);
    summary
}
