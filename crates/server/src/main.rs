// Copyright (C) 2026 Shuttle Admin Contributors
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
    routing::{get, post},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use shuttle_admin_api::{
    AccountDirectory, AuthError, AuthenticationService, AuthorizeRequest, AuthorizeResponse,
    LoginRequest, LoginResponse, PermissionEvaluator, RouteRequirement, SectionCapabilities,
    WhoAmIResponse, authorize, authorize_request, compute_section_capability, login, logout,
    whoami,
};
use shuttle_admin_domain::{PermissionSlug, Section};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::session::SessionPrincipal;

/// Shuttle Admin Server - session and authorization endpoints for the admin console
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a JSON account directory. If not provided, no account can log in.
    #[arg(short, long)]
    accounts: Option<PathBuf>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,

    /// Session lifetime in days (1 to 3650)
    #[arg(long, default_value_t = 30, value_parser = clap::value_parser!(i64).range(1..=3650))]
    session_days: i64,
}

/// Application state shared across handlers.
///
/// The authentication service is wrapped in a Mutex because session
/// validation purges expired sessions.
#[derive(Clone)]
struct AppState {
    /// Accounts and live sessions.
    auth: Arc<Mutex<AuthenticationService>>,
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Always true for error responses.
    error: bool,
    /// The error message.
    message: String,
}

/// HTTP error wrapper.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
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

impl From<AuthError> for HttpError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { .. } => Self {
                status: StatusCode::UNAUTHORIZED,
                message: err.to_string(),
            },
            AuthError::Unauthorized { .. } => Self {
                status: StatusCode::FORBIDDEN,
                message: err.to_string(),
            },
        }
    }
}

/// Handler for POST /login endpoint.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(login_name = %request.login_name, "Handling login request");

    let mut auth = app_state.auth.lock().await;
    let response: LoginResponse = login(&mut auth, &request)?;
    drop(auth);

    Ok(Json(response))
}

/// Handler for POST /logout endpoint.
async fn handle_logout(
    AxumState(app_state): AxumState<AppState>,
    session: SessionPrincipal,
) -> Result<StatusCode, HttpError> {
    info!(principal = session.principal.id(), "Handling logout request");

    let mut auth = app_state.auth.lock().await;
    logout(&mut auth, &session.token)?;
    drop(auth);

    Ok(StatusCode::NO_CONTENT)
}

/// Handler for GET /whoami endpoint.
async fn handle_whoami(session: SessionPrincipal) -> Json<WhoAmIResponse> {
    Json(whoami(&session.principal))
}

/// Handler for POST /authorize endpoint.
///
/// Answers a capability query for the session's principal.
async fn handle_authorize(
    session: SessionPrincipal,
    Json(request): Json<AuthorizeRequest>,
) -> Json<AuthorizeResponse> {
    let response: AuthorizeResponse = authorize_request(Some(&session.principal), &request);
    info!(
        principal = session.principal.id(),
        mode = ?request.mode,
        granted = response.granted,
        "Handled authorize request"
    );
    Json(response)
}

/// Handler for GET `/sections/{section}` endpoint.
///
/// Guards a console section the way the client's route guard does and
/// returns the section's capabilities when it may be opened.
async fn handle_get_section(
    session: SessionPrincipal,
    Path(section_name): Path<String>,
) -> Result<Json<SectionCapabilities>, HttpError> {
    let section: Section = section_name.parse().map_err(|e| {
        warn!(section = %section_name, "Unknown section requested");
        HttpError {
            status: StatusCode::NOT_FOUND,
            message: format!("{e}"),
        }
    })?;

    let requirement: RouteRequirement = RouteRequirement::AnyOf(vec![
        PermissionSlug::from(section.view_capability()),
        PermissionSlug::from(section.edit_capability()),
    ]);
    authorize(
        Some(&session.principal),
        &requirement,
        &format!("open_{section}"),
    )?;

    let evaluator: PermissionEvaluator<'_> = PermissionEvaluator::new(Some(&session.principal));
    Ok(Json(compute_section_capability(&evaluator, section)))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/login", post(handle_login))
        .route("/logout", post(handle_logout))
        .route("/whoami", get(handle_whoami))
        .route("/authorize", post(handle_authorize))
        .route("/sections/{section}", get(handle_get_section))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Shuttle Admin Server");

    let directory: AccountDirectory = if let Some(path) = &args.accounts {
        AccountDirectory::load(path)?
    } else {
        warn!("No account directory provided; logins will fail");
        AccountDirectory::new()
    };

    let auth: AuthenticationService = AuthenticationService::new(directory)
        .with_session_lifetime(time::Duration::days(args.session_days));

    let app_state: AppState = AppState {
        auth: Arc::new(Mutex::new(auth)),
    };

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
