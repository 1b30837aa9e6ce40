// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]

mod types;

use crate::{Route, Schedule, Vessel, VesselStatus};
use time::macros::datetime;

pub fn create_test_vessel(id: i64, fuel_level: f64) -> Vessel {
    Vessel {
        id,
        name: format!("Vessel {id}"),
        vessel_type: String::from("Ferry"),
        capacity: 120,
        fuel_level,
        status: VesselStatus::Active,
    }
}

pub fn create_test_route() -> Route {
    Route {
        id: 1,
        departure_port: String::from("Gisenyi"),
        destination_port: String::from("Kibuye"),
        distance: 48.5,
    }
}

pub fn create_test_schedule(id: i64) -> Schedule {
    Schedule {
        id,
        vessel: create_test_vessel(1, 80.0),
        route: create_test_route(),
        departure_time: datetime!(2026-03-01 08:00 UTC),
        arrival_time: datetime!(2026-03-01 11:30 UTC),
        total_seats: 100,
        total_cargo_capacity: 2000.0,
        seat_price: 25.0,
        cargo_price_per_kg: 1.5,
        booked_seats_count: 40,
        booked_cargo_weight: 500.0,
    }
}
