// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking line-items: passenger tickets and cargo shipments.

use crate::error::DomainError;
use crate::types::Schedule;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// A passenger ticket on a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Backend identifier.
    pub id: i64,
    /// The voyage booked, when embedded.
    #[serde(default)]
    pub schedule: Option<Schedule>,
    /// Assigned seat.
    #[serde(default)]
    pub seat_number: String,
    /// Whether payment has been received.
    #[serde(default)]
    pub paid: bool,
    /// Price charged, when the backend reports it.
    #[serde(default)]
    pub price: Option<f64>,
    /// Free-form ticket status.
    #[serde(default)]
    pub status: Option<String>,
}

/// Tracking state of a cargo shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CargoStatus {
    Pending,
    Received,
    Inspected,
    ReadyForShipment,
    InTransit,
    AtPort,
    CustomsHold,
    Delayed,
    Damaged,
    Stored,
    OutForDelivery,
    Delivered,
    Returned,
    Lost,
    Cancelled,
}

impl CargoStatus {
    /// Returns the backend spelling of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Received => "RECEIVED",
            Self::Inspected => "INSPECTED",
            Self::ReadyForShipment => "READY_FOR_SHIPMENT",
            Self::InTransit => "IN_TRANSIT",
            Self::AtPort => "AT_PORT",
            Self::CustomsHold => "CUSTOMS_HOLD",
            Self::Delayed => "DELAYED",
            Self::Damaged => "DAMAGED",
            Self::Stored => "STORED",
            Self::OutForDelivery => "OUT_FOR_DELIVERY",
            Self::Delivered => "DELIVERED",
            Self::Returned => "RETURNED",
            Self::Lost => "LOST",
            Self::Cancelled => "CANCELLED",
        }
    }

    /// Whether the shipment has reached a final state.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(
            self,
            Self::Delivered | Self::Returned | Self::Lost | Self::Cancelled
        )
    }
}

impl FromStr for CargoStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().replace([' ', '-'], "_").as_str() {
            "PENDING" => Ok(Self::Pending),
            "RECEIVED" => Ok(Self::Received),
            "INSPECTED" => Ok(Self::Inspected),
            "READY_FOR_SHIPMENT" => Ok(Self::ReadyForShipment),
            "IN_TRANSIT" => Ok(Self::InTransit),
            "AT_PORT" => Ok(Self::AtPort),
            "CUSTOMS_HOLD" => Ok(Self::CustomsHold),
            "DELAYED" => Ok(Self::Delayed),
            "DAMAGED" => Ok(Self::Damaged),
            "STORED" => Ok(Self::Stored),
            "OUT_FOR_DELIVERY" => Ok(Self::OutForDelivery),
            "DELIVERED" => Ok(Self::Delivered),
            "RETURNED" => Ok(Self::Returned),
            "LOST" => Ok(Self::Lost),
            "CANCELLED" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidCargoStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for CargoStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CargoStatus> for String {
    fn from(status: CargoStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for CargoStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A cargo shipment on a schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cargo {
    /// Backend identifier.
    pub id: i64,
    /// The voyage carrying the shipment, when embedded.
    #[serde(default)]
    pub schedule: Option<Schedule>,
    /// Contents.
    #[serde(default)]
    pub description: String,
    /// Weight in kg.
    pub weight: f64,
    /// Unique tracking number.
    #[serde(default)]
    pub tracking_number: String,
    /// Tracking state.
    pub current_status: CargoStatus,
    /// Price charged.
    #[serde(default)]
    pub price: f64,
}
