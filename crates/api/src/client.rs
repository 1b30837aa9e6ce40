// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! HTTP client for the upstream REST service.

use crate::error::ApiError;
use crate::interceptor::{NoAuth, RequestInterceptor};
use nvg::SkippedRecord;
use nvg_domain::{Cargo, Complaint, ComplianceRecord, Route, Schedule, Ticket, User, Vessel};
use reqwest::{Client, RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A collection exposed by the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Vessels,
    Schedules,
    Routes,
    Tickets,
    Cargo,
    Complaints,
    Users,
    /// Per-vessel inspection records, served as `/compliance`.
    Compliance,
}

impl Resource {
    /// Path segment under the base URL.
    #[must_use]
    pub const fn path(&self) -> &'static str {
        match self {
            Self::Vessels => "vessels",
            Self::Schedules => "schedules",
            Self::Routes => "routes",
            Self::Tickets => "tickets",
            Self::Cargo => "cargo",
            Self::Complaints => "complaints",
            Self::Users => "users",
            Self::Compliance => "compliance",
        }
    }

    /// Singular entity name used in skipped-record entries.
    #[must_use]
    pub const fn entity(&self) -> &'static str {
        match self {
            Self::Vessels => "vessel",
            Self::Schedules => "schedule",
            Self::Routes => "route",
            Self::Tickets => "ticket",
            Self::Cargo => "cargo",
            Self::Complaints => "complaint",
            Self::Users => "user",
            Self::Compliance => "compliance record",
        }
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// Connection settings for [`ApiClient`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL, e.g. `https://backend.example/api`.
    pub base_url: String,
    pub timeout: Duration,
}

impl ApiConfig {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// The well-formed records of a collection plus the ones that were dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchedCollection<T> {
    pub records: Vec<T>,
    pub skipped: Vec<SkippedRecord>,
}

impl<T> FetchedCollection<T> {
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            records: Vec::new(),
            skipped: Vec::new(),
        }
    }
}

/// A bearer token obtained from `POST /users/login`.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginSession {
    pub token: String,
    pub refresh_token: Option<String>,
    /// Present when the backend embeds the user in the response.
    pub user: Option<User>,
}

impl std::fmt::Debug for LoginSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginSession")
            .field("token", &"<redacted>")
            .field("refresh_token", &self.refresh_token.as_ref().map(|_| "<redacted>"))
            .field("user", &self.user)
            .finish()
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Every login body shape the backend has been seen to return.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    access: Option<String>,
    refresh: Option<String>,
    token: Option<String>,
    refresh_token: Option<String>,
    message: Option<String>,
    user: Option<User>,
}

impl LoginResponse {
    fn into_session(self) -> Option<LoginSession> {
        match self {
            Self {
                access: Some(token),
                user: Some(user),
                refresh,
                ..
            } => Some(LoginSession {
                token,
                refresh_token: refresh,
                user: Some(user),
            }),
            Self {
                token: Some(token),
                user: Some(user),
                refresh_token,
                ..
            } => Some(LoginSession {
                token,
                refresh_token,
                user: Some(user),
            }),
            Self {
                token: Some(token),
                message: Some(_),
                ..
            } => Some(LoginSession {
                token,
                refresh_token: None,
                user: None,
            }),
            _ => None,
        }
    }
}

/// Read-only client for the upstream REST service.
///
/// Cloning is cheap; clones share the connection pool.
#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    interceptor: Arc<dyn RequestInterceptor>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

impl ApiClient {
    /// Creates a client that sends requests without credentials.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::InvalidConfiguration` if the base URL is not an
    /// absolute http(s) URL or the HTTP client cannot be built.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        Self::with_interceptor(config, Arc::new(NoAuth))
    }

    /// Creates a client whose requests all pass through `interceptor`.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::new`].
    pub fn with_interceptor(
        config: &ApiConfig,
        interceptor: Arc<dyn RequestInterceptor>,
    ) -> Result<Self, ApiError> {
        let parsed: Url = Url::parse(&config.base_url).map_err(|err| {
            ApiError::InvalidConfiguration(format!("base URL '{}': {err}", config.base_url))
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::InvalidConfiguration(format!(
                "base URL '{}' must use http or https",
                config.base_url
            )));
        }

        let http: Client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|err| ApiError::InvalidConfiguration(err.to_string()))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            interceptor,
        })
    }

    /// Returns a client sharing this one's connection pool but using a
    /// different interceptor.
    #[must_use]
    pub fn reauthorized(&self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        Self {
            http: self.http.clone(),
            base_url: self.base_url.clone(),
            interceptor,
        }
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    async fn send(&self, request: RequestBuilder, url: &str) -> Result<Response, ApiError> {
        let response: Response = self
            .interceptor
            .intercept(request)
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }
        Ok(response)
    }

    async fn get_body(&self, url: &str) -> Result<Vec<u8>, ApiError> {
        let response: Response = self.send(self.http.get(url), url).await?;
        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.to_string(),
                source,
            })?;
        Ok(body.to_vec())
    }

    /// Fetches a collection, decoding each record independently.
    ///
    /// A record that fails to decode is logged and reported in `skipped`;
    /// the rest of the collection is still returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the status is not a success,
    /// or the body is not a JSON array.
    pub async fn fetch_collection<T: DeserializeOwned>(
        &self,
        resource: Resource,
    ) -> Result<FetchedCollection<T>, ApiError> {
        let url: String = self.url(resource.path());
        debug!(url = %url, "Fetching collection");

        let body: Vec<u8> = self.get_body(&url).await?;
        let items: Vec<Value> = serde_json::from_slice(&body).map_err(|err| ApiError::Decode {
            url: url.clone(),
            message: err.to_string(),
        })?;

        Ok(decode_records(resource, items))
    }

    /// Fetches a single record by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the upstream reports a
    /// non-success status (404 for an unknown id), or the record is malformed.
    pub async fn fetch_one<T: DeserializeOwned>(
        &self,
        resource: Resource,
        id: i64,
    ) -> Result<T, ApiError> {
        let url: String = self.url(&format!("{}/{id}", resource.path()));
        debug!(url = %url, "Fetching record");

        let body: Vec<u8> = self.get_body(&url).await?;
        serde_json::from_slice(&body).map_err(|err| ApiError::Decode {
            url,
            message: err.to_string(),
        })
    }

    /// `GET /vessels`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_collection`].
    pub async fn vessels(&self) -> Result<FetchedCollection<Vessel>, ApiError> {
        self.fetch_collection(Resource::Vessels).await
    }

    /// `GET /schedules`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_collection`].
    pub async fn schedules(&self) -> Result<FetchedCollection<Schedule>, ApiError> {
        self.fetch_collection(Resource::Schedules).await
    }

    /// `GET /routes`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_collection`].
    pub async fn routes(&self) -> Result<FetchedCollection<Route>, ApiError> {
        self.fetch_collection(Resource::Routes).await
    }

    /// `GET /tickets`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_collection`].
    pub async fn tickets(&self) -> Result<FetchedCollection<Ticket>, ApiError> {
        self.fetch_collection(Resource::Tickets).await
    }

    /// `GET /cargo`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_collection`].
    pub async fn cargo(&self) -> Result<FetchedCollection<Cargo>, ApiError> {
        self.fetch_collection(Resource::Cargo).await
    }

    /// `GET /complaints`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_collection`].
    pub async fn complaints(&self) -> Result<FetchedCollection<Complaint>, ApiError> {
        self.fetch_collection(Resource::Complaints).await
    }

    /// `GET /users`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_collection`].
    pub async fn users(&self) -> Result<FetchedCollection<User>, ApiError> {
        self.fetch_collection(Resource::Users).await
    }

    /// `GET /compliance`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_collection`].
    pub async fn compliance_records(
        &self,
    ) -> Result<FetchedCollection<ComplianceRecord>, ApiError> {
        self.fetch_collection(Resource::Compliance).await
    }

    /// `GET /vessels/{id}`
    ///
    /// # Errors
    ///
    /// See [`ApiClient::fetch_one`].
    pub async fn vessel(&self, id: i64) -> Result<Vessel, ApiError> {
        self.fetch_one(Resource::Vessels, id).await
    }

    /// Exchanges credentials for a bearer token.
    ///
    /// The request is sent without going through the interceptor.
    ///
    /// # Errors
    ///
    /// Returns `ApiError::Authentication` if the credentials are rejected
    /// (401/403) or the response carries no token, and the usual transport,
    /// status and decode errors otherwise.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginSession, ApiError> {
        if email.trim().is_empty() || password.is_empty() {
            return Err(ApiError::Authentication(String::from(
                "missing email or password",
            )));
        }

        let url: String = self.url("users/login");
        let response: Response = self
            .http
            .post(&url)
            .json(&LoginRequest { email, password })
            .send()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status.as_u16() == 401 || status.as_u16() == 403 {
            return Err(ApiError::Authentication(String::from(
                "invalid email or password",
            )));
        }
        if !status.is_success() {
            return Err(ApiError::Status {
                url,
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| ApiError::Transport {
                url: url.clone(),
                source,
            })?;
        let parsed: LoginResponse =
            serde_json::from_slice(&body).map_err(|err| ApiError::Decode {
                url,
                message: err.to_string(),
            })?;

        parsed.into_session().ok_or_else(|| {
            ApiError::Authentication(String::from("login response carried no token"))
        })
    }
}

/// Decodes each array element on its own, keeping the good ones.
#[must_use]
pub fn decode_records<T: DeserializeOwned>(
    resource: Resource,
    items: Vec<Value>,
) -> FetchedCollection<T> {
    let mut collection: FetchedCollection<T> = FetchedCollection {
        records: Vec::with_capacity(items.len()),
        skipped: Vec::new(),
    };

    for item in items {
        let id: Option<i64> = item.get("id").and_then(Value::as_i64);
        match serde_json::from_value::<T>(item) {
            Ok(record) => collection.records.push(record),
            Err(err) => {
                warn!(
                    resource = resource.path(),
                    record_id = ?id,
                    error = %err,
                    "Skipping undecodable record"
                );
                collection
                    .skipped
                    .push(SkippedRecord::new(resource.entity(), id, err.to_string()));
            }
        }
    }

    collection
}
