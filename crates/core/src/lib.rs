// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Derived metrics for the fleet dashboard.
//!
//! Every function here is pure and synchronous: given the raw collections and
//! an evaluation instant, the output is fully determined. Nothing is cached
//! and nothing is persisted.

mod alerts;
mod compliance;
mod error;
mod fleet;
mod quality;
mod revenue;

#[cfg(test)]
mod tests;

pub use alerts::{
    Alert, AlertCategory, AlertCounts, AlertPriority, AlertReport, DISPLAY_LIMIT,
    complaint_alert, generate_alerts, scan_alerts, schedule_alerts,
};
pub use compliance::{
    CRITICAL_FUEL_LEVEL, ComplianceReport, ComplianceStatus, ComplianceSummary, InspectionStatus,
    LOW_FUEL_LEVEL, LOW_SEAT_UTILIZATION, PendingItem, RiskLevel, UnscheduledVessel,
    VesselCompliance, apply_inspections, classify_vessel, compliance_report, vessel_compliance,
};
pub use error::MetricsError;
pub use fleet::{ComplaintSummary, FleetSummary, summarize_complaints, summarize_fleet};
pub use quality::{SkippedRecord, partition_schedules, partition_vessels};
pub use revenue::{
    MonthRevenue, RevenueReport, RevenueTally, RouteRevenue, aggregate_revenue, format_currency,
};
