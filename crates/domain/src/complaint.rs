// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use time::OffsetDateTime;

/// Handling state of a customer complaint.
///
/// The backend is inconsistent about spelling (`Pending`, `In_Progress`,
/// `Resolved`, `REJECTED`); parsing ignores case and treats `_`, `-` and
/// spaces alike.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ComplaintStatus {
    /// Submitted, not yet picked up.
    Pending,
    /// Being handled by staff.
    InProgress,
    /// Closed with a resolution.
    Resolved,
    /// Closed without action.
    Rejected,
}

impl ComplaintStatus {
    /// Returns the backend spelling of this status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::InProgress => "In_Progress",
            Self::Resolved => "Resolved",
            Self::Rejected => "REJECTED",
        }
    }
}

impl FromStr for ComplaintStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                '-' | ' ' => '_',
                other => other.to_ascii_lowercase(),
            })
            .collect();

        match normalized.as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "resolved" => Ok(Self::Resolved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(DomainError::InvalidComplaintStatus(s.to_string())),
        }
    }
}

impl TryFrom<String> for ComplaintStatus {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ComplaintStatus> for String {
    fn from(status: ComplaintStatus) -> Self {
        status.as_str().to_string()
    }
}

impl std::fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A dashboard user as returned by `/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier.
    pub id: i64,
    /// Display or login name.
    #[serde(default)]
    pub username: String,
    /// Email address.
    #[serde(default)]
    pub email: String,
    /// Role as sent by the backend (e.g. `ADMIN`, `STAFF`, `USER`).
    #[serde(default)]
    pub role: String,
}

/// A customer complaint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Complaint {
    /// Backend identifier.
    pub id: i64,
    /// The submitting user, when the backend embeds it.
    #[serde(default)]
    pub user: Option<User>,
    /// Short subject line.
    pub subject: String,
    /// Body text.
    #[serde(default)]
    pub message: String,
    /// Handling state.
    pub status: ComplaintStatus,
    /// Submission instant.
    #[serde(with = "crate::timestamp")]
    pub submitted_at: OffsetDateTime,
}

impl Complaint {
    /// Age of the complaint in fractional days at `now`.
    #[must_use]
    pub fn age_days(&self, now: OffsetDateTime) -> f64 {
        (now - self.submitted_at).as_seconds_f64() / 86_400.0
    }
}
