// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

/// Errors raised while parsing or validating fleet records.
#[derive(Debug, Clone, PartialEq)]
pub enum DomainError {
    /// A numeric field holds NaN or an infinity.
    NonFiniteValue {
        /// The entity kind (e.g. "schedule").
        entity: &'static str,
        /// The record identifier.
        id: i64,
        /// The offending field.
        field: &'static str,
    },
    /// A numeric field that must be non-negative is negative.
    NegativeValue {
        /// The entity kind.
        entity: &'static str,
        /// The record identifier.
        id: i64,
        /// The offending field.
        field: &'static str,
        /// The value received.
        value: f64,
    },
    /// A numeric field lies outside its permitted range.
    OutOfRange {
        /// The entity kind.
        entity: &'static str,
        /// The record identifier.
        id: i64,
        /// The offending field.
        field: &'static str,
        /// The value received.
        value: f64,
        /// Inclusive lower bound.
        min: f64,
        /// Inclusive upper bound.
        max: f64,
    },
    /// A booked quantity exceeds the capacity it is booked against.
    ExceedsCapacity {
        /// The schedule identifier.
        schedule_id: i64,
        /// The booked field (seats or cargo).
        field: &'static str,
        /// The booked quantity.
        booked: f64,
        /// The capacity.
        total: f64,
    },
    /// A timestamp string could not be parsed.
    InvalidTimestamp {
        /// The raw value.
        value: String,
        /// The parser error message.
        error: String,
    },
    /// Unknown vessel status.
    InvalidVesselStatus(String),
    /// Unknown complaint status.
    InvalidComplaintStatus(String),
    /// Unknown cargo status.
    InvalidCargoStatus(String),
}

impl DomainError {
    /// Returns the record id the error refers to, when there is one.
    #[must_use]
    pub const fn record_id(&self) -> Option<i64> {
        match self {
            Self::NonFiniteValue { id, .. }
            | Self::NegativeValue { id, .. }
            | Self::OutOfRange { id, .. } => Some(*id),
            Self::ExceedsCapacity { schedule_id, .. } => Some(*schedule_id),
            Self::InvalidTimestamp { .. }
            | Self::InvalidVesselStatus(_)
            | Self::InvalidComplaintStatus(_)
            | Self::InvalidCargoStatus(_) => None,
        }
    }
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonFiniteValue { entity, id, field } => {
                write!(f, "{entity} {id}: field '{field}' is not a finite number")
            }
            Self::NegativeValue {
                entity,
                id,
                field,
                value,
            } => {
                write!(f, "{entity} {id}: field '{field}' must not be negative, got {value}")
            }
            Self::OutOfRange {
                entity,
                id,
                field,
                value,
                min,
                max,
            } => {
                write!(
                    f,
                    "{entity} {id}: field '{field}' must be between {min} and {max}, got {value}"
                )
            }
            Self::ExceedsCapacity {
                schedule_id,
                field,
                booked,
                total,
            } => {
                write!(
                    f,
                    "schedule {schedule_id}: '{field}' of {booked} exceeds capacity {total}"
                )
            }
            Self::InvalidTimestamp { value, error } => {
                write!(f, "Failed to parse timestamp '{value}': {error}")
            }
            Self::InvalidVesselStatus(s) => write!(f, "Invalid vessel status: {s}"),
            Self::InvalidComplaintStatus(s) => write!(f, "Invalid complaint status: {s}"),
            Self::InvalidCargoStatus(s) => write!(f, "Invalid cargo status: {s}"),
        }
    }
}

impl std::error::Error for DomainError {}
