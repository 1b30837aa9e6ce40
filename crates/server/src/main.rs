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
#![allow(clippy::multiple_crate_versions)]

mod session;

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use clap::Parser;
use nvg::{
    AlertReport, ComplianceReport, InspectionStatus, MetricsError, RevenueReport,
    VesselCompliance, vessel_compliance,
};
use nvg_api::{
    ApiClient, ApiConfig, ApiError, BearerAuth, Dashboard, FetchedCollection, FleetOverview,
};
use nvg_domain::{ComplianceRecord, Schedule, Vessel};
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;
use time::{OffsetDateTime, UtcOffset};
use tracing::{error, info, warn};

use crate::session::UpstreamClient;

/// NVG Fleet Metrics - derived fleet reports over the maritime backend
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Port to bind the server to
    #[arg(short, long, env = "NVG_PORT", default_value_t = 3000)]
    port: u16,

    /// Address to bind the server to
    #[arg(long, env = "NVG_BIND", default_value = "127.0.0.1")]
    bind: IpAddr,

    /// Base URL of the upstream REST service, e.g. `https://backend/api`
    #[arg(long, env = "NVG_API_URL")]
    api_url: String,

    /// Service bearer token used when a caller sends none
    #[arg(long, env = "NVG_API_TOKEN", conflicts_with = "login_email")]
    api_token: Option<String>,

    /// Email used to obtain a service token at startup
    #[arg(long, env = "NVG_LOGIN_EMAIL", requires = "login_password")]
    login_email: Option<String>,

    /// Password used to obtain a service token at startup
    #[arg(long, env = "NVG_LOGIN_PASSWORD", requires = "login_email")]
    login_password: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long, env = "NVG_TIMEOUT_SECS", default_value_t = 10)]
    timeout_secs: u64,

    /// Hours east of UTC used for month grouping; defaults to the host offset
    #[arg(
        long,
        env = "NVG_UTC_OFFSET_HOURS",
        allow_hyphen_values = true,
        value_parser = clap::value_parser!(i8).range(-12..=14)
    )]
    utc_offset_hours: Option<i8>,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// Upstream client carrying the service credentials.
    client: ApiClient,
    /// Observer offset for month grouping.
    offset: UtcOffset,
    /// Evaluation clock.
    now: fn() -> OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    status: String,
}

/// Error response type.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// HTTP error wrapper that implements `IntoResponse`.
struct HttpError {
    status: StatusCode,
    message: String,
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        error!(error = %err, "Upstream request failed");
        Self {
            status: StatusCode::BAD_GATEWAY,
            message: format!("Upstream request failed: {err}"),
        }
    }
}

impl From<MetricsError> for HttpError {
    fn from(err: MetricsError) -> Self {
        let status: StatusCode = match err {
            MetricsError::NoSchedules { .. } => StatusCode::NOT_FOUND,
            MetricsError::NoValidSchedules { .. } | MetricsError::InvalidRecord(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            MetricsError::VesselMismatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET /health.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Handler for GET /reports/compliance.
async fn handle_compliance(
    AxumState(app_state): AxumState<AppState>,
    UpstreamClient(client): UpstreamClient,
) -> Json<Dashboard<ComplianceReport>> {
    info!("Handling compliance report request");
    Json(client.compliance_dashboard((app_state.now)()).await)
}

/// Handler for GET /reports/compliance/{vessel_id}.
///
/// Answers 404 when no schedule references the vessel, 422 when all of its
/// schedules are malformed and 502 when the schedules cannot be fetched.
/// The vessel record and the inspection records are optional: if either
/// fetch fails the verdict is built without it.
async fn handle_vessel_compliance(
    AxumState(app_state): AxumState<AppState>,
    UpstreamClient(client): UpstreamClient,
    Path(vessel_id): Path<i64>,
) -> Result<Json<VesselCompliance>, HttpError> {
    info!(vessel_id, "Handling vessel compliance request");

    let (schedules, vessel, inspections) = tokio::join!(
        client.schedules(),
        client.vessel(vessel_id),
        client.compliance_records()
    );
    let schedules: FetchedCollection<Schedule> = schedules?;
    let vessel: Option<Vessel> = vessel
        .inspect_err(|e| warn!(vessel_id, error = %e, "Vessel record unavailable"))
        .ok();

    let now: OffsetDateTime = (app_state.now)();
    let mut verdict: VesselCompliance =
        vessel_compliance(&schedules.records, vessel_id, vessel.as_ref(), now)?;

    match inspections {
        Ok(records) => {
            verdict.inspection = records
                .records
                .iter()
                .find(|r: &&ComplianceRecord| r.vessel.id == vessel_id)
                .map(|r| InspectionStatus::from_record(r, now));
        }
        Err(e) => warn!(vessel_id, error = %e, "Inspection records unavailable"),
    }

    Ok(Json(verdict))
}

/// Handler for GET /reports/alerts.
async fn handle_alerts(
    AxumState(app_state): AxumState<AppState>,
    UpstreamClient(client): UpstreamClient,
) -> Json<Dashboard<AlertReport>> {
    info!("Handling alert report request");
    let dashboard: Dashboard<AlertReport> = client.alert_dashboard((app_state.now)()).await;
    info!(
        total = dashboard.report.total_generated,
        critical = dashboard.report.counts.critical,
        "Alerts generated"
    );
    Json(dashboard)
}

/// Handler for GET /reports/revenue.
async fn handle_revenue(
    AxumState(app_state): AxumState<AppState>,
    UpstreamClient(client): UpstreamClient,
) -> Json<Dashboard<RevenueReport>> {
    info!("Handling revenue report request");
    Json(client.revenue_dashboard(app_state.offset).await)
}

/// Handler for GET /reports/fleet.
async fn handle_fleet(UpstreamClient(client): UpstreamClient) -> Json<Dashboard<FleetOverview>> {
    info!("Handling fleet report request");
    Json(client.fleet_dashboard().await)
}

fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(handle_health))
        .route("/reports/compliance", get(handle_compliance))
        .route(
            "/reports/compliance/{vessel_id}",
            get(handle_vessel_compliance),
        )
        .route("/reports/alerts", get(handle_alerts))
        .route("/reports/revenue", get(handle_revenue))
        .route("/reports/fleet", get(handle_fleet))
        .with_state(app_state)
}

/// Resolves the observer offset, falling back to UTC when the host offset
/// cannot be read.
fn observer_offset(hours: Option<i8>) -> Result<UtcOffset, time::error::ComponentRange> {
    if let Some(hours) = hours {
        return UtcOffset::from_hms(hours, 0, 0);
    }
    Ok(UtcOffset::current_local_offset().unwrap_or_else(|err| {
        warn!(error = %err, "Could not determine local UTC offset, using UTC");
        UtcOffset::UTC
    }))
}

/// Builds the service client, logging in first if credentials were given.
async fn connect_upstream(args: &Args, config: &ApiConfig) -> Result<ApiClient, ApiError> {
    if let Some(token) = &args.api_token {
        info!("Using configured service token");
        return ApiClient::with_interceptor(config, Arc::new(BearerAuth::new(token.clone())));
    }

    if let (Some(email), Some(password)) = (&args.login_email, &args.login_password) {
        let anonymous: ApiClient = ApiClient::new(config)?;
        let session = anonymous.login(email, password).await?;
        info!(email = %email, "Obtained service token via login");
        return Ok(anonymous.reauthorized(Arc::new(BearerAuth::new(session.token))));
    }

    warn!("No service credentials configured, requests without a caller token go out anonymous");
    ApiClient::new(config)
}

async fn run(args: Args, offset: UtcOffset) -> Result<(), Box<dyn std::error::Error>> {
    info!("Initializing NVG Fleet Metrics server");

    let config: ApiConfig = ApiConfig::new(args.api_url.clone())
        .with_timeout(Duration::from_secs(args.timeout_secs));
    let client: ApiClient = connect_upstream(&args, &config).await?;
    info!(upstream = %client.base_url(), %offset, "Upstream configured");

    let app_state: AppState = AppState {
        client,
        offset,
        now: OffsetDateTime::now_utc,
    };

    let app: Router = build_router(app_state);

    let addr: SocketAddr = SocketAddr::new(args.bind, args.port);
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    // The local offset can only be read while the process is single threaded.
    let offset: UtcOffset = observer_offset(args.utc_offset_hours)?;

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(run(args, offset))
}
