// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Caller credential forwarding.
//!
//! The server holds no sessions of its own. A caller that presents
//! `Authorization: Bearer <token>` has that token forwarded to the upstream
//! service; a caller without the header is served with the service
//! credentials configured at startup.

use std::sync::Arc;

use axum::{
    extract::FromRequestParts,
    http::{StatusCode, header::AUTHORIZATION, request::Parts},
    response::{IntoResponse, Response},
};
use nvg_api::{ApiClient, BearerAuth};
use tracing::{debug, warn};

use crate::AppState;

/// Upstream client carrying the credentials of the current request.
///
/// ```ignore
/// async fn handler(UpstreamClient(client): UpstreamClient) -> Json<...> {
///     Json(client.fleet_dashboard().await)
/// }
/// ```
///
/// # Errors
///
/// Rejects with HTTP 401 if the `Authorization` header is present but is
/// not valid UTF-8 or not a non-empty bearer token.
pub struct UpstreamClient(pub ApiClient);

impl FromRequestParts<AppState> for UpstreamClient {
    type Rejection = SessionError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(AUTHORIZATION) else {
            debug!("No Authorization header, using service credentials");
            return Ok(Self(state.client.clone()));
        };

        let header: &str = value.to_str().map_err(|_| {
            warn!("Invalid Authorization header encoding");
            SessionError::InvalidAuthorizationHeader
        })?;

        let token: &str = header
            .strip_prefix("Bearer ")
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| {
                warn!("Authorization header is not a bearer token");
                SessionError::InvalidAuthorizationHeader
            })?;

        debug!("Forwarding caller bearer token upstream");
        Ok(Self(
            state.client.reauthorized(Arc::new(BearerAuth::new(token))),
        ))
    }
}

/// Credential extraction errors.
#[derive(Debug)]
pub enum SessionError {
    /// Authorization header is present but unusable.
    InvalidAuthorizationHeader,
}

impl IntoResponse for SessionError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidAuthorizationHeader => crate::HttpError {
                status: StatusCode::UNAUTHORIZED,
                message: String::from(
                    "Invalid Authorization header format. Expected: 'Bearer <token>'",
                ),
            }
            .into_response(),
        }
    }
}
