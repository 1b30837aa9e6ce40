// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request interceptors.
//!
//! Every outgoing request passes through exactly one interceptor before it
//! is sent. Authentication lives here and nowhere else.

use reqwest::RequestBuilder;

/// Decorates an outgoing request, typically with credentials.
pub trait RequestInterceptor: Send + Sync {
    /// Returns the request with any extra headers applied.
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder;
}

/// Sends requests unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoAuth;

impl RequestInterceptor for NoAuth {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        request
    }
}

/// Adds `Authorization: Bearer <token>`.
#[derive(Clone)]
pub struct BearerAuth {
    token: String,
}

impl BearerAuth {
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for BearerAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BearerAuth")
            .field("token", &"<redacted>")
            .finish()
    }
}

impl RequestInterceptor for BearerAuth {
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        request.bearer_auth(&self.token)
    }
}

/// Adapts a closure into an interceptor.
pub struct FnInterceptor<F> {
    f: F,
}

/// Wraps `f` as a [`RequestInterceptor`].
pub const fn from_fn<F>(f: F) -> FnInterceptor<F>
where
    F: Fn(RequestBuilder) -> RequestBuilder + Send + Sync,
{
    FnInterceptor { f }
}

impl<F> RequestInterceptor for FnInterceptor<F>
where
    F: Fn(RequestBuilder) -> RequestBuilder + Send + Sync,
{
    fn intercept(&self, request: RequestBuilder) -> RequestBuilder {
        (self.f)(request)
    }
}
