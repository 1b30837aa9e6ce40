// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Tests for alert generation and prioritization.

use crate::{
    Alert, AlertCategory, AlertPriority, AlertReport, DISPLAY_LIMIT, complaint_alert,
    generate_alerts, schedule_alerts,
};
use nvg_domain::{Complaint, ComplaintStatus, Schedule, Vessel, VesselStatus};

use super::helpers::{NOW, create_test_complaint, create_test_schedule, create_test_vessel};

fn categories(alerts: &[Alert]) -> Vec<AlertCategory> {
    alerts.iter().map(|a| a.category).collect()
}

#[test]
fn test_quiet_schedule_raises_nothing() {
    let vessel: Vessel = create_test_vessel(1, 80.0, VesselStatus::Active);
    let schedule: Schedule = create_test_schedule(10, &vessel, 48);

    assert!(schedule_alerts(&schedule, NOW).is_empty());
}

#[test]
fn test_nearly_full_schedule_raises_capacity_alert() {
    let vessel: Vessel = create_test_vessel(1, 80.0, VesselStatus::Active);
    let mut schedule: Schedule = create_test_schedule(10, &vessel, 48);
    schedule.booked_seats_count = 95;

    let alerts: Vec<Alert> = schedule_alerts(&schedule, NOW);

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].category, AlertCategory::Capacity);
    assert_eq!(alerts[0].priority, AlertPriority::Medium);
    assert_eq!(alerts[0].id, "CAPACITY-V1-S10");
}

#[test]
fn test_exactly_ninety_percent_is_not_flagged() {
    let vessel: Vessel = create_test_vessel(1, 80.0, VesselStatus::Active);
    let mut schedule: Schedule = create_test_schedule(10, &vessel, 48);
    schedule.booked_seats_count = 90;

    assert!(schedule_alerts(&schedule, NOW).is_empty());
}

#[test]
fn test_critical_fuel_and_imminent_departure() {
    let vessel: Vessel = create_test_vessel(4, 15.0, VesselStatus::Active);
    let schedule: Schedule = create_test_schedule(20, &vessel, 2);

    let alerts: Vec<Alert> = schedule_alerts(&schedule, NOW);

    assert_eq!(
        categories(&alerts),
        vec![AlertCategory::VesselFuel, AlertCategory::Operations]
    );
    assert_eq!(alerts[0].priority, AlertPriority::Critical);
    assert_eq!(alerts[0].id, "FUEL-V4-S20");
    assert_eq!(alerts[1].priority, AlertPriority::Low);
    assert_eq!(alerts[1].id, "OPS-V4-S20");
    assert!(!alerts.iter().any(|a| a.category == AlertCategory::Maintenance));
}

#[test]
fn test_low_fuel_is_high_priority() {
    let vessel: Vessel = create_test_vessel(1, 20.0, VesselStatus::Active);
    let schedule: Schedule = create_test_schedule(10, &vessel, 48);

    let alerts: Vec<Alert> = schedule_alerts(&schedule, NOW);

    assert_eq!(alerts.len(), 1);
    assert_eq!(alerts[0].priority, AlertPriority::High);
}

#[test]
fn test_standby_vessel_and_full_cargo_hold() {
    let vessel: Vessel = create_test_vessel(2, 80.0, VesselStatus::Standby);
    let mut schedule: Schedule = create_test_schedule(11, &vessel, 48);
    schedule.booked_cargo_weight = 1800.0;

    let alerts: Vec<Alert> = schedule_alerts(&schedule, NOW);

    assert_eq!(
        categories(&alerts),
        vec![AlertCategory::Maintenance, AlertCategory::Cargo]
    );
    assert_eq!(alerts[0].id, "MAINT-V2-S11");
    assert_eq!(alerts[1].id, "CARGO-V2-S11");
}

#[test]
fn test_departed_schedule_raises_no_operations_alert() {
    let vessel: Vessel = create_test_vessel(1, 80.0, VesselStatus::Active);
    let schedule: Schedule = create_test_schedule(10, &vessel, -1);

    assert!(schedule_alerts(&schedule, NOW).is_empty());
}

#[test]
fn test_complaint_priority_follows_age() {
    let fresh: Complaint = create_test_complaint(1, ComplaintStatus::Pending, 2);
    let week_old: Complaint = create_test_complaint(2, ComplaintStatus::Pending, 10);
    let stale: Complaint = create_test_complaint(3, ComplaintStatus::Pending, 20);

    assert_eq!(
        complaint_alert(&fresh, NOW).unwrap().priority,
        AlertPriority::Medium
    );
    let high: Alert = complaint_alert(&week_old, NOW).unwrap();
    assert_eq!(high.priority, AlertPriority::High);
    assert_eq!(high.id, "COMPLAINT-C2");
    assert_eq!(high.complaint_id, Some(2));
    assert_eq!(
        complaint_alert(&stale, NOW).unwrap().priority,
        AlertPriority::Critical
    );
}

#[test]
fn test_only_pending_complaints_alert() {
    for status in [
        ComplaintStatus::InProgress,
        ComplaintStatus::Resolved,
        ComplaintStatus::Rejected,
    ] {
        let complaint: Complaint = create_test_complaint(1, status, 30);
        assert!(complaint_alert(&complaint, NOW).is_none());
    }
}

#[test]
fn test_empty_inputs_yield_empty_report() {
    let report: AlertReport = generate_alerts(&[], &[], NOW);

    assert!(report.alerts.is_empty());
    assert!(report.is_clear());
    assert_eq!(report.counts.total(), 0);
    assert_eq!(report.total_generated, 0);
}

#[test]
fn test_report_sorts_stably_and_truncates() {
    let low_fuel: Vessel = create_test_vessel(1, 40.0, VesselStatus::Active);
    let critical: Vessel = create_test_vessel(2, 10.0, VesselStatus::Active);
    let mut schedules: Vec<Schedule> = (0..12)
        .map(|i| create_test_schedule(100 + i, &low_fuel, 48))
        .collect();
    schedules.push(create_test_schedule(200, &critical, 48));
    let complaints: Vec<Complaint> = vec![create_test_complaint(7, ComplaintStatus::Pending, 1)];

    let report: AlertReport = generate_alerts(&schedules, &complaints, NOW);

    assert_eq!(report.total_generated, 14);
    assert_eq!(report.counts.critical, 1);
    assert_eq!(report.counts.high, 12);
    assert_eq!(report.counts.medium, 1);
    assert_eq!(report.counts.low, 0);
    assert_eq!(report.counts.total(), report.total_generated);

    assert_eq!(report.alerts.len(), DISPLAY_LIMIT);
    assert_eq!(report.alerts[0].id, "FUEL-V2-S200");
    let high_ids: Vec<&str> = report.alerts[1..].iter().map(|a| a.id.as_str()).collect();
    let expected: Vec<String> = (0..9).map(|i| format!("FUEL-V1-S{}", 100 + i)).collect();
    assert_eq!(high_ids, expected.iter().map(String::as_str).collect::<Vec<_>>());
}

#[test]
fn test_priorities_are_non_increasing() {
    let vessel: Vessel = create_test_vessel(1, 30.0, VesselStatus::Standby);
    let mut schedule: Schedule = create_test_schedule(10, &vessel, 3);
    schedule.booked_seats_count = 99;
    let complaints: Vec<Complaint> = vec![
        create_test_complaint(1, ComplaintStatus::Pending, 30),
        create_test_complaint(2, ComplaintStatus::Pending, 1),
    ];

    let report: AlertReport = generate_alerts(&[schedule], &complaints, NOW);

    assert!(
        report
            .alerts
            .windows(2)
            .all(|pair| pair[0].priority.rank() >= pair[1].priority.rank())
    );
    assert_eq!(report.alerts[0].id, "COMPLAINT-C1");
}

#[test]
fn test_malformed_schedules_are_skipped() {
    let vessel: Vessel = create_test_vessel(1, 10.0, VesselStatus::Active);
    let mut broken: Schedule = create_test_schedule(10, &vessel, 48);
    broken.total_cargo_capacity = -5.0;

    let report: AlertReport = generate_alerts(&[broken], &[], NOW);

    assert!(report.alerts.is_empty());
    assert_eq!(report.skipped_records.len(), 1);
    assert_eq!(report.skipped_records[0].entity, "schedule");
}

#[test]
fn test_alert_serializes_category_label() {
    let vessel: Vessel = create_test_vessel(1, 10.0, VesselStatus::Active);
    let alerts: Vec<Alert> = schedule_alerts(&create_test_schedule(10, &vessel, 48), NOW);

    let json: serde_json::Value = serde_json::to_value(&alerts[0]).unwrap();

    assert_eq!(json["category"], "Vessel Fuel");
    assert_eq!(json["priority"], "Critical");
    assert_eq!(json["vesselId"], 1);
    assert!(json.get("complaintId").is_none());
}

#[test]
fn test_same_schedule_id_on_two_vessels_yields_distinct_ids() {
    let one: Vessel = create_test_vessel(1, 15.0, VesselStatus::Active);
    let two: Vessel = create_test_vessel(2, 15.0, VesselStatus::Active);
    let schedules: Vec<Schedule> = vec![
        create_test_schedule(7, &one, 48),
        create_test_schedule(7, &two, 48),
    ];

    let report: AlertReport = generate_alerts(&schedules, &[], NOW);

    let ids: Vec<&str> = report.alerts.iter().map(|a| a.id.as_str()).collect();
    assert_eq!(ids, vec!["FUEL-V1-S7", "FUEL-V2-S7"]);
    assert_eq!(report.total_generated, 2);
}

#[test]
fn test_generation_is_repeatable() {
    let vessel: Vessel = create_test_vessel(3, 15.0, VesselStatus::Maintenance);
    let mut full: Schedule = create_test_schedule(30, &vessel, 3);
    full.booked_seats_count = 99;
    let schedules: Vec<Schedule> = vec![full, create_test_schedule(31, &vessel, 48)];
    let complaints: Vec<Complaint> = vec![
        create_test_complaint(1, ComplaintStatus::Pending, 2),
        create_test_complaint(2, ComplaintStatus::Pending, 9),
    ];

    let first: AlertReport = generate_alerts(&schedules, &complaints, NOW);
    let second: AlertReport = generate_alerts(&schedules, &complaints, NOW);

    assert!(first.total_generated > 0);
    assert_eq!(first, second);
}
