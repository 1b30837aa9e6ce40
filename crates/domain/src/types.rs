// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Operational status of a vessel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum VesselStatus {
    /// In service.
    Active,
    /// Idle, awaiting assignment.
    Standby,
    /// Out of service for maintenance.
    Maintenance,
}

impl VesselStatus {
    /// Returns the backend spelling of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Standby => "STANDBY",
            Self::Maintenance => "MAINTENANCE",
        }
    }
}

impl FromStr for VesselStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "STANDBY" => Ok(Self::Standby),
            "MAINTENANCE" => Ok(Self::Maintenance),
            _ => Err(DomainError::InvalidVesselStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for VesselStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<VesselStatus> for String {
    fn from(status: VesselStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for VesselStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A vessel in the fleet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vessel {
    /// Backend identifier.
    pub id: i64,
    /// Unique vessel name.
    pub name: String,
    /// Free-form vessel type (ferry, cargo, ...).
    #[serde(rename = "type", default)]
    pub vessel_type: String,
    /// Passenger capacity.
    #[serde(default)]
    pub capacity: u32,
    /// Fuel level in percent, 0 to 100.
    pub fuel_level: f64,
    /// Operational status.
    pub status: VesselStatus,
}

/// A route between two ports.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Backend identifier.
    pub id: i64,
    /// Port of departure.
    pub departure_port: String,
    /// Port of arrival.
    pub destination_port: String,
    /// Distance, in the backend's unit.
    #[serde(default)]
    pub distance: f64,
}

impl Route {
    /// Grouping key for the route, `"{departure} - {destination}"`.
    ///
    /// Direction matters: `A - B` and `B - A` are different keys.
    #[must_use]
    pub fn key(&self) -> String {
        format!("{} - {}", self.departure_port, self.destination_port)
    }
}

/// One voyage of a vessel on a route.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Schedule {
    /// Backend identifier.
    pub id: i64,
    /// The vessel sailing this voyage.
    pub vessel: Vessel,
    /// The route sailed.
    pub route: Route,
    /// Departure instant.
    #[serde(with = "crate::timestamp")]
    pub departure_time: OffsetDateTime,
    /// Arrival instant. Not guaranteed to follow departure.
    #[serde(with = "crate::timestamp")]
    pub arrival_time: OffsetDateTime,
    /// Seats offered.
    pub total_seats: u32,
    /// Cargo capacity offered, in kg.
    pub total_cargo_capacity: f64,
    /// Price of one seat.
    pub seat_price: f64,
    /// Price of one kg of cargo.
    pub cargo_price_per_kg: f64,
    /// Seats booked so far.
    #[serde(default)]
    pub booked_seats_count: u32,
    /// Cargo booked so far, in kg.
    #[serde(default)]
    pub booked_cargo_weight: f64,
}

impl Schedule {
    /// Seats still available.
    #[must_use]
    pub const fn available_seats_count(&self) -> u32 {
        self.total_seats.saturating_sub(self.booked_seats_count)
    }

    /// Cargo capacity still available, in kg.
    #[must_use]
    pub fn available_cargo_capacity(&self) -> f64 {
        self.total_cargo_capacity - self.booked_cargo_weight
    }

    /// Booked seats over total seats, or `None` when the schedule offers no seats.
    #[must_use]
    pub fn seat_utilization(&self) -> Option<f64> {
        if self.total_seats == 0 {
            return None;
        }
        Some(f64::from(self.booked_seats_count) / f64::from(self.total_seats))
    }

    /// Booked cargo over cargo capacity, or `None` when there is no capacity.
    #[must_use]
    pub fn cargo_utilization(&self) -> Option<f64> {
        if self.total_cargo_capacity > 0.0 {
            Some(self.booked_cargo_weight / self.total_cargo_capacity)
        } else {
            None
        }
    }

    /// Whether the voyage departs strictly after `now`.
    #[must_use]
    pub fn departs_after(&self, now: OffsetDateTime) -> bool {
        self.departure_time > now
    }

    /// Hours from `now` until departure. Negative once departed.
    #[must_use]
    pub fn hours_until_departure(&self, now: OffsetDateTime) -> f64 {
        (self.departure_time - now).as_seconds_f64() / 3600.0
    }

    /// Revenue from booked seats.
    #[must_use]
    pub fn ticket_revenue(&self) -> f64 {
        f64::from(self.booked_seats_count) * self.seat_price
    }

    /// Revenue from booked cargo.
    #[must_use]
    pub fn cargo_revenue(&self) -> f64 {
        self.booked_cargo_weight * self.cargo_price_per_kg
    }

    /// Ticket plus cargo revenue.
    #[must_use]
    pub fn revenue(&self) -> f64 {
        self.ticket_revenue() + self.cargo_revenue()
    }
}
