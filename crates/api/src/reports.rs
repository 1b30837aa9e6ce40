// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Report composition over possibly-failed fetches.
//!
//! Each `compose_*` function takes one fetch result per source. A failed
//! source contributes an empty collection and is marked unavailable; the
//! report is still produced from whatever did arrive. Records dropped at
//! decode time are carried into the report's skipped list ahead of the
//! ones dropped by validation.

use crate::client::{ApiClient, FetchedCollection, Resource};
use crate::error::ApiError;
use nvg::{
    AlertReport, ComplaintSummary, ComplianceReport, FleetSummary, RevenueReport, SkippedRecord,
    aggregate_revenue, apply_inspections, compliance_report, generate_alerts, summarize_complaints,
    summarize_fleet,
};
use nvg_domain::{Complaint, ComplianceRecord, Schedule, Vessel};
use serde::Serialize;
use time::{OffsetDateTime, UtcOffset};
use tracing::warn;

/// Whether one upstream collection made it into a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStatus {
    pub source: String,
    pub available: bool,
    /// Decoded records handed to the aggregator.
    pub records: usize,
    /// Records dropped at decode time.
    pub skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A derived report together with the availability of its sources.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Dashboard<R> {
    pub report: R,
    pub sources: Vec<SourceStatus>,
}

impl<R> Dashboard<R> {
    /// True when every source was fetched.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.sources.iter().all(|s| s.available)
    }

    /// Names of the sources that could not be fetched.
    #[must_use]
    pub fn unavailable(&self) -> Vec<&str> {
        self.sources
            .iter()
            .filter(|s| !s.available)
            .map(|s| s.source.as_str())
            .collect()
    }
}

/// Fleet status and complaint counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetOverview {
    /// Skipped records from every source end up here.
    pub fleet: FleetSummary,
    pub complaints: ComplaintSummary,
}

/// Collects sources and decode-time skips while a report is assembled.
#[derive(Default)]
struct Intake {
    sources: Vec<SourceStatus>,
    skipped: Vec<SkippedRecord>,
}

impl Intake {
    /// Unwraps one fetch result, recording its availability.
    fn take<T>(
        &mut self,
        resource: Resource,
        result: Result<FetchedCollection<T>, ApiError>,
    ) -> Option<Vec<T>> {
        match result {
            Ok(collection) => {
                self.sources.push(SourceStatus {
                    source: resource.path().to_string(),
                    available: true,
                    records: collection.records.len(),
                    skipped: collection.skipped.len(),
                    error: None,
                });
                self.skipped.extend(collection.skipped);
                Some(collection.records)
            }
            Err(err) => {
                warn!(source = resource.path(), error = %err, "Source unavailable");
                self.sources.push(SourceStatus {
                    source: resource.path().to_string(),
                    available: false,
                    records: 0,
                    skipped: 0,
                    error: Some(err.to_string()),
                });
                None
            }
        }
    }

    /// Prepends the decode-time skips to `validation_skips`.
    fn merge_skipped(&mut self, validation_skips: &mut Vec<SkippedRecord>) {
        let mut all: Vec<SkippedRecord> = std::mem::take(&mut self.skipped);
        all.append(validation_skips);
        *validation_skips = all;
    }

    fn finish<R>(self, report: R) -> Dashboard<R> {
        Dashboard {
            report,
            sources: self.sources,
        }
    }
}

/// Fleet compliance from schedules and, when available, the vessel list
/// and inspection records.
///
/// Without schedules no vessel can be told apart as unscheduled, so the
/// vessel list is then only reported as a source.
#[must_use]
pub fn compose_compliance(
    schedules: Result<FetchedCollection<Schedule>, ApiError>,
    vessels: Result<FetchedCollection<Vessel>, ApiError>,
    inspections: Result<FetchedCollection<ComplianceRecord>, ApiError>,
    now: OffsetDateTime,
) -> Dashboard<ComplianceReport> {
    let mut intake: Intake = Intake::default();
    let schedules: Option<Vec<Schedule>> = intake.take(Resource::Schedules, schedules);
    let vessels: Option<Vec<Vessel>> = intake.take(Resource::Vessels, vessels);
    let inspections: Option<Vec<ComplianceRecord>> =
        intake.take(Resource::Compliance, inspections);

    let known_vessels: Option<&[Vessel]> = schedules.as_ref().and(vessels.as_deref());
    let schedules: Vec<Schedule> = schedules.unwrap_or_default();
    let mut report: ComplianceReport = compliance_report(&schedules, known_vessels, now);
    if let Some(records) = &inspections {
        apply_inspections(&mut report, records, now);
    }
    intake.merge_skipped(&mut report.skipped_records);
    intake.finish(report)
}

/// Alerts from schedules and complaints.
#[must_use]
pub fn compose_alerts(
    schedules: Result<FetchedCollection<Schedule>, ApiError>,
    complaints: Result<FetchedCollection<Complaint>, ApiError>,
    now: OffsetDateTime,
) -> Dashboard<AlertReport> {
    let mut intake: Intake = Intake::default();
    let schedules: Vec<Schedule> = intake.take(Resource::Schedules, schedules).unwrap_or_default();
    let complaints: Vec<Complaint> = intake
        .take(Resource::Complaints, complaints)
        .unwrap_or_default();

    let mut report: AlertReport = generate_alerts(&schedules, &complaints, now);
    intake.merge_skipped(&mut report.skipped_records);
    intake.finish(report)
}

/// Route and month revenue from schedules.
#[must_use]
pub fn compose_revenue(
    schedules: Result<FetchedCollection<Schedule>, ApiError>,
    offset: UtcOffset,
) -> Dashboard<RevenueReport> {
    let mut intake: Intake = Intake::default();
    let schedules: Vec<Schedule> = intake.take(Resource::Schedules, schedules).unwrap_or_default();

    let mut report: RevenueReport = aggregate_revenue(&schedules, offset);
    intake.merge_skipped(&mut report.skipped_records);
    intake.finish(report)
}

/// Fleet status and complaint counts.
#[must_use]
pub fn compose_fleet(
    vessels: Result<FetchedCollection<Vessel>, ApiError>,
    schedules: Result<FetchedCollection<Schedule>, ApiError>,
    complaints: Result<FetchedCollection<Complaint>, ApiError>,
) -> Dashboard<FleetOverview> {
    let mut intake: Intake = Intake::default();
    let vessels: Vec<Vessel> = intake.take(Resource::Vessels, vessels).unwrap_or_default();
    let schedules: Vec<Schedule> = intake.take(Resource::Schedules, schedules).unwrap_or_default();
    let complaints: Vec<Complaint> = intake
        .take(Resource::Complaints, complaints)
        .unwrap_or_default();

    let mut overview: FleetOverview = FleetOverview {
        fleet: summarize_fleet(&vessels, &schedules),
        complaints: summarize_complaints(&complaints),
    };
    intake.merge_skipped(&mut overview.fleet.skipped_records);
    intake.finish(overview)
}

impl ApiClient {
    /// Fetches schedules, vessels and inspection records concurrently and
    /// classifies the fleet.
    pub async fn compliance_dashboard(&self, now: OffsetDateTime) -> Dashboard<ComplianceReport> {
        let (schedules, vessels, inspections) = tokio::join!(
            self.schedules(),
            self.vessels(),
            self.compliance_records()
        );
        compose_compliance(schedules, vessels, inspections, now)
    }

    /// Fetches schedules and complaints concurrently and generates alerts.
    pub async fn alert_dashboard(&self, now: OffsetDateTime) -> Dashboard<AlertReport> {
        let (schedules, complaints) = tokio::join!(self.schedules(), self.complaints());
        compose_alerts(schedules, complaints, now)
    }

    /// Fetches schedules and folds revenue.
    pub async fn revenue_dashboard(&self, offset: UtcOffset) -> Dashboard<RevenueReport> {
        compose_revenue(self.schedules().await, offset)
    }

    /// Fetches vessels, schedules and complaints concurrently and summarizes them.
    pub async fn fleet_dashboard(&self) -> Dashboard<FleetOverview> {
        let (vessels, schedules, complaints) =
            tokio::join!(self.vessels(), self.schedules(), self.complaints());
        compose_fleet(vessels, schedules, complaints)
    }
}
