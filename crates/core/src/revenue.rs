// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Route and month revenue folds.

use crate::quality::{SkippedRecord, partition_schedules};
use nvg_domain::Schedule;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use time::UtcOffset;

/// Running sums for one group of schedules.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueTally {
    pub schedules: usize,
    pub passengers: u64,
    pub cargo_weight: f64,
    pub ticket_revenue: f64,
    pub cargo_revenue: f64,
    pub revenue: f64,
}

impl RevenueTally {
    /// Adds one schedule to the running sums.
    pub fn add(&mut self, schedule: &Schedule) {
        let ticket: f64 = schedule.ticket_revenue();
        let cargo: f64 = schedule.cargo_revenue();

        self.schedules += 1;
        self.passengers += u64::from(schedule.booked_seats_count);
        self.cargo_weight += schedule.booked_cargo_weight;
        self.ticket_revenue += ticket;
        self.cargo_revenue += cargo;
        self.revenue += ticket + cargo;
    }
}

/// Revenue for one directed route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteRevenue {
    /// Group key, `"{departure} - {destination}"`.
    pub route: String,
    pub departure_port: String,
    pub destination_port: String,
    #[serde(flatten)]
    pub tally: RevenueTally,
}

/// Revenue for one calendar month name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthRevenue {
    /// English month name, e.g. `"March"`.
    pub month: String,
    #[serde(flatten)]
    pub tally: RevenueTally,
}

/// Route, month and fleet-wide revenue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RevenueReport {
    /// In order of first appearance.
    pub routes: Vec<RouteRevenue>,
    /// In order of first appearance.
    pub months: Vec<MonthRevenue>,
    pub totals: RevenueTally,
    pub skipped_records: Vec<SkippedRecord>,
}

impl RevenueReport {
    /// Looks up a route group by its key.
    #[must_use]
    pub fn route(&self, key: &str) -> Option<&RouteRevenue> {
        self.routes.iter().find(|r| r.route == key)
    }

    /// Looks up a month group by its name.
    #[must_use]
    pub fn month(&self, name: &str) -> Option<&MonthRevenue> {
        self.months.iter().find(|m| m.month == name)
    }
}

/// Folds schedules into per-route, per-month and total revenue.
///
/// Sums accumulate in input order with no intermediate rounding. The month
/// of a schedule is the month of its departure seen from `offset`; the same
/// month in different years lands in the same group.
#[must_use]
pub fn aggregate_revenue(schedules: &[Schedule], offset: UtcOffset) -> RevenueReport {
    let (valid, skipped_records) = partition_schedules(schedules);
    let mut report: RevenueReport = RevenueReport {
        skipped_records,
        ..RevenueReport::default()
    };

    let mut route_index: HashMap<String, usize> = HashMap::new();
    let mut month_index: HashMap<String, usize> = HashMap::new();

    for schedule in valid {
        let key: String = schedule.route.key();
        let idx: usize = match route_index.get(&key) {
            Some(idx) => *idx,
            None => {
                report.routes.push(RouteRevenue {
                    route: key.clone(),
                    departure_port: schedule.route.departure_port.clone(),
                    destination_port: schedule.route.destination_port.clone(),
                    tally: RevenueTally::default(),
                });
                route_index.insert(key, report.routes.len() - 1);
                report.routes.len() - 1
            }
        };
        report.routes[idx].tally.add(schedule);

        let month: String = schedule.departure_time.to_offset(offset).month().to_string();
        let idx: usize = match month_index.get(&month) {
            Some(idx) => *idx,
            None => {
                report.months.push(MonthRevenue {
                    month: month.clone(),
                    tally: RevenueTally::default(),
                });
                month_index.insert(month, report.months.len() - 1);
                report.months.len() - 1
            }
        };
        report.months[idx].tally.add(schedule);

        report.totals.add(schedule);
    }

    report
}

/// Renders an amount as dollars with two decimals and thousands separators.
///
/// Non-finite amounts render as `"N/A"`.
#[must_use]
pub fn format_currency(amount: f64) -> String {
    if !amount.is_finite() {
        return String::from("N/A");
    }

    let fixed: String = format!("{:.2}", amount.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));

    let mut grouped: String = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    // Amounts that round to zero render unsigned.
    let sign: &str = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{sign}${grouped}.{cents}")
}
