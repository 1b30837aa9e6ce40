// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use nvg_domain::{Complaint, ComplaintStatus, Route, Schedule, Vessel, VesselStatus};
use time::macros::datetime;
use time::{Duration, OffsetDateTime};

/// Fixed evaluation instant used across the suite.
pub const NOW: OffsetDateTime = datetime!(2026-03-01 12:00 UTC);

pub fn create_test_vessel(id: i64, fuel_level: f64, status: VesselStatus) -> Vessel {
    Vessel {
        id,
        name: format!("MV Kivu {id}"),
        vessel_type: String::from("Ferry"),
        capacity: 120,
        fuel_level,
        status,
    }
}

pub fn create_test_route(from: &str, to: &str) -> Route {
    Route {
        id: 1,
        departure_port: from.to_string(),
        destination_port: to.to_string(),
        distance: 48.5,
    }
}

/// A schedule departing `hours` after [`NOW`] with 40/100 seats and
/// 500/2000 kg booked.
pub fn create_test_schedule(id: i64, vessel: &Vessel, hours: i64) -> Schedule {
    let departure_time: OffsetDateTime = NOW + Duration::hours(hours);
    Schedule {
        id,
        vessel: vessel.clone(),
        route: create_test_route("Gisenyi", "Kibuye"),
        departure_time,
        arrival_time: departure_time + Duration::hours(3),
        total_seats: 100,
        total_cargo_capacity: 2000.0,
        seat_price: 25.0,
        cargo_price_per_kg: 1.5,
        booked_seats_count: 40,
        booked_cargo_weight: 500.0,
    }
}

pub fn create_test_complaint(id: i64, status: ComplaintStatus, age_days: i64) -> Complaint {
    Complaint {
        id,
        user: None,
        subject: format!("Complaint {id}"),
        message: String::from("Late departure"),
        status,
        submitted_at: NOW - Duration::days(age_days),
    }
}

pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}
