// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking;
mod complaint;
mod error;
mod inspection;
pub mod timestamp;
mod types;
mod validation;

#[cfg(test)]
mod tests;

pub use booking::{Cargo, CargoStatus, Ticket};
pub use complaint::{Complaint, ComplaintStatus, User};
pub use error::DomainError;
pub use inspection::{ComplianceRecord, INSPECTION_INTERVAL_MONTHS, months_before};
pub use timestamp::{parse_date, parse_timestamp};
pub use types::{Route, Schedule, Vessel, VesselStatus};
pub use validation::{validate_route, validate_schedule, validate_vessel};
