// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use nvg_domain::DomainError;

/// Errors that can occur while deriving metrics.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricsError {
    /// A vessel cannot be classified without at least one schedule.
    NoSchedules {
        /// The vessel that was requested.
        vessel_id: i64,
    },
    /// Every schedule of the vessel failed validation.
    NoValidSchedules {
        /// The vessel that was requested.
        vessel_id: i64,
        /// Number of its schedules that were skipped.
        skipped: usize,
    },
    /// A schedule handed to the classifier belongs to another vessel.
    VesselMismatch {
        /// The vessel being classified.
        expected: i64,
        /// The vessel referenced by the offending schedule.
        found: i64,
    },
    /// A record failed validation.
    InvalidRecord(DomainError),
}

impl std::fmt::Display for MetricsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoSchedules { vessel_id } => {
                write!(f, "Vessel {vessel_id} has no schedules to classify")
            }
            Self::NoValidSchedules { vessel_id, skipped } => {
                write!(
                    f,
                    "Vessel {vessel_id} has {skipped} schedules, all of them malformed"
                )
            }
            Self::VesselMismatch { expected, found } => {
                write!(
                    f,
                    "Schedule for vessel {found} passed while classifying vessel {expected}"
                )
            }
            Self::InvalidRecord(err) => write!(f, "Invalid record: {err}"),
        }
    }
}

impl std::error::Error for MetricsError {}

impl From<DomainError> for MetricsError {
    fn from(err: DomainError) -> Self {
        Self::InvalidRecord(err)
    }
}
