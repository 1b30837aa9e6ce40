// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{RevenueReport, aggregate_revenue};
use nvg_domain::{Schedule, Vessel, VesselStatus};
use time::UtcOffset;
use time::macros::{datetime, offset};

use super::helpers::{approx_eq, create_test_route, create_test_schedule, create_test_vessel};

fn vessel() -> Vessel {
    create_test_vessel(1, 80.0, VesselStatus::Active)
}

#[test]
fn test_schedule_revenue_sums_tickets_and_cargo() {
    let schedules: Vec<Schedule> = vec![create_test_schedule(10, &vessel(), 48)];

    let report: RevenueReport = aggregate_revenue(&schedules, UtcOffset::UTC);

    // 40 seats at 25 plus 500 kg at 1.5
    assert!(approx_eq(report.totals.ticket_revenue, 1000.0));
    assert!(approx_eq(report.totals.cargo_revenue, 750.0));
    assert!(approx_eq(report.totals.revenue, 1750.0));
    assert_eq!(report.totals.passengers, 40);
    assert!(approx_eq(report.totals.cargo_weight, 500.0));
    assert_eq!(report.totals.schedules, 1);
}

#[test]
fn test_route_grouping_is_direction_sensitive() {
    let mut outbound: Schedule = create_test_schedule(10, &vessel(), 48);
    outbound.route = create_test_route("A", "B");
    let mut inbound: Schedule = create_test_schedule(11, &vessel(), 72);
    inbound.route = create_test_route("B", "A");
    let mut again: Schedule = create_test_schedule(12, &vessel(), 96);
    again.route = create_test_route("A", "B");

    let report: RevenueReport = aggregate_revenue(&[outbound, inbound, again], UtcOffset::UTC);

    let keys: Vec<&str> = report.routes.iter().map(|r| r.route.as_str()).collect();
    assert_eq!(keys, vec!["A - B", "B - A"]);
    assert_eq!(report.route("A - B").unwrap().tally.schedules, 2);
    assert_eq!(report.route("B - A").unwrap().tally.schedules, 1);
    assert_eq!(report.route("A - B").unwrap().departure_port, "A");
}

#[test]
fn test_month_uses_observer_offset() {
    let mut late: Schedule = create_test_schedule(10, &vessel(), 0);
    late.departure_time = datetime!(2026-01-31 23:30 UTC);

    let utc: RevenueReport = aggregate_revenue(std::slice::from_ref(&late), UtcOffset::UTC);
    let kigali: RevenueReport = aggregate_revenue(&[late], offset!(+2));

    assert_eq!(utc.months[0].month, "January");
    assert_eq!(kigali.months[0].month, "February");
}

#[test]
fn test_same_month_in_different_years_merges() {
    let mut first: Schedule = create_test_schedule(10, &vessel(), 0);
    first.departure_time = datetime!(2025-03-10 08:00 UTC);
    let mut second: Schedule = create_test_schedule(11, &vessel(), 0);
    second.departure_time = datetime!(2026-04-02 08:00 UTC);
    let mut third: Schedule = create_test_schedule(12, &vessel(), 0);
    third.departure_time = datetime!(2026-03-10 08:00 UTC);

    let report: RevenueReport = aggregate_revenue(&[first, second, third], UtcOffset::UTC);

    let months: Vec<&str> = report.months.iter().map(|m| m.month.as_str()).collect();
    assert_eq!(months, vec!["March", "April"]);
    assert_eq!(report.month("March").unwrap().tally.schedules, 2);
}

#[test]
fn test_group_sums_match_totals() {
    let mut schedules: Vec<Schedule> = Vec::new();
    for (i, (from, to)) in [("A", "B"), ("B", "C"), ("A", "B"), ("C", "A")]
        .into_iter()
        .enumerate()
    {
        let mut schedule: Schedule = create_test_schedule(i64::try_from(i).unwrap(), &vessel(), 24);
        schedule.route = create_test_route(from, to);
        schedule.booked_seats_count = 10 * u32::try_from(i).unwrap();
        schedules.push(schedule);
    }

    let report: RevenueReport = aggregate_revenue(&schedules, UtcOffset::UTC);

    let route_sum: f64 = report.routes.iter().map(|r| r.tally.revenue).sum();
    let month_sum: f64 = report.months.iter().map(|m| m.tally.revenue).sum();
    assert!(approx_eq(route_sum, report.totals.revenue));
    assert!(approx_eq(month_sum, report.totals.revenue));
    assert_eq!(report.totals.passengers, 60);
}

#[test]
fn test_malformed_schedules_do_not_contribute() {
    let mut overbooked: Schedule = create_test_schedule(10, &vessel(), 48);
    overbooked.booked_cargo_weight = 5000.0;

    let report: RevenueReport = aggregate_revenue(
        &[overbooked, create_test_schedule(11, &vessel(), 48)],
        UtcOffset::UTC,
    );

    assert_eq!(report.totals.schedules, 1);
    assert_eq!(report.skipped_records.len(), 1);
    assert_eq!(report.skipped_records[0].id, Some(10));
}

#[test]
fn test_empty_input_yields_zero_totals() {
    let report: RevenueReport = aggregate_revenue(&[], UtcOffset::UTC);

    assert!(report.routes.is_empty());
    assert!(report.months.is_empty());
    assert_eq!(report.totals.schedules, 0);
    assert!(approx_eq(report.totals.revenue, 0.0));
}

#[test]
fn test_group_serializes_flat() {
    let report: RevenueReport =
        aggregate_revenue(&[create_test_schedule(10, &vessel(), 48)], UtcOffset::UTC);

    let json: serde_json::Value = serde_json::to_value(&report.routes[0]).unwrap();

    assert_eq!(json["route"], "Gisenyi - Kibuye");
    assert_eq!(json["departurePort"], "Gisenyi");
    assert_eq!(json["ticketRevenue"], 1000.0);
    assert_eq!(json["schedules"], 1);
}
