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
    clippy::all
)]

//! Data fetch layer for the upstream maritime REST service.
//!
//! [`ApiClient`] reads the raw collections, decoding record by record so a
//! malformed row is skipped rather than failing the whole fetch.
//! Authentication is supplied once, as a [`RequestInterceptor`]. The
//! `compose_*` functions turn fetch results into reports that stay usable
//! when a source is down.

mod client;
mod error;
mod interceptor;
mod reports;

#[cfg(test)]
mod tests;

pub use client::{
    ApiClient, ApiConfig, DEFAULT_TIMEOUT, FetchedCollection, LoginSession, Resource,
    decode_records,
};
pub use error::ApiError;
pub use interceptor::{BearerAuth, FnInterceptor, NoAuth, RequestInterceptor, from_fn};
pub use reports::{
    Dashboard, FleetOverview, SourceStatus, compose_alerts, compose_compliance, compose_fleet,
    compose_revenue,
};
