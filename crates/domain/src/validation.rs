// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::types::{Route, Schedule, Vessel};

/// Rejects NaN/infinite and negative values.
fn require_non_negative(
    entity: &'static str,
    id: i64,
    field: &'static str,
    value: f64,
) -> Result<(), DomainError> {
    if !value.is_finite() {
        return Err(DomainError::NonFiniteValue { entity, id, field });
    }
    if value < 0.0 {
        return Err(DomainError::NegativeValue {
            entity,
            id,
            field,
            value,
        });
    }
    Ok(())
}

/// Validates a vessel's numeric fields.
///
/// # Errors
///
/// Returns an error if the fuel level is not a finite number in `[0, 100]`.
pub fn validate_vessel(vessel: &Vessel) -> Result<(), DomainError> {
    if !vessel.fuel_level.is_finite() {
        return Err(DomainError::NonFiniteValue {
            entity: "vessel",
            id: vessel.id,
            field: "fuelLevel",
        });
    }

    if !(0.0..=100.0).contains(&vessel.fuel_level) {
        return Err(DomainError::OutOfRange {
            entity: "vessel",
            id: vessel.id,
            field: "fuelLevel",
            value: vessel.fuel_level,
            min: 0.0,
            max: 100.0,
        });
    }

    Ok(())
}

/// Validates a route's distance.
///
/// # Errors
///
/// Returns an error if the distance is negative or not finite.
pub fn validate_route(route: &Route) -> Result<(), DomainError> {
    require_non_negative("route", route.id, "distance", route.distance)
}

/// Validates a schedule, including its embedded vessel and route.
///
/// Seat counts are unsigned on the wire type, so only the floating point
/// fields and the booked-versus-capacity bounds need checking here.
///
/// # Errors
///
/// Returns an error if:
/// - The embedded vessel or route is invalid
/// - A capacity, price, or booked weight is negative or not finite
/// - More seats or cargo are booked than the schedule offers
pub fn validate_schedule(schedule: &Schedule) -> Result<(), DomainError> {
    validate_vessel(&schedule.vessel)?;
    validate_route(&schedule.route)?;

    let id: i64 = schedule.id;
    require_non_negative("schedule", id, "totalCargoCapacity", schedule.total_cargo_capacity)?;
    require_non_negative("schedule", id, "seatPrice", schedule.seat_price)?;
    require_non_negative("schedule", id, "cargoPricePerKg", schedule.cargo_price_per_kg)?;
    require_non_negative("schedule", id, "bookedCargoWeight", schedule.booked_cargo_weight)?;

    if schedule.booked_seats_count > schedule.total_seats {
        return Err(DomainError::ExceedsCapacity {
            schedule_id: id,
            field: "bookedSeatsCount",
            booked: f64::from(schedule.booked_seats_count),
            total: f64::from(schedule.total_seats),
        });
    }

    if schedule.booked_cargo_weight > schedule.total_cargo_capacity {
        return Err(DomainError::ExceedsCapacity {
            schedule_id: id,
            field: "bookedCargoWeight",
            booked: schedule.booked_cargo_weight,
            total: schedule.total_cargo_capacity,
        });
    }

    Ok(())
}
