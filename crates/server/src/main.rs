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

use axum::{
    Json, Router,
    extract::{Path, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use clap::Parser;
use league_table_api::{
    ApiError, CreateLeagueRequest, FormatResponse, LeagueResponse, LeagueSession,
    LeagueSummaryResponse, SessionStateResponse, TableEntryResponse, UpdateMatchScoreRequest,
    UpdateMatchScoreResponse, list_formats,
};
use league_table_persistence::Persistence;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use time::OffsetDateTime;
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// League Table Server - HTTP server for the league table tracker
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long)]
    database: Option<String>,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 3000)]
    port: u16,
}

/// Application state shared across handlers.
///
/// The session is the single writer for the league, so every handler
/// takes the lock for the duration of its call.
#[derive(Clone)]
struct AppState {
    /// The league session.
    session: Arc<Mutex<LeagueSession>>,
}

/// Request body for recording or clearing a match result.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
struct MatchScoreApiRequest {
    /// Goals scored by the home team.
    #[serde(default)]
    home_score: Option<u32>,
    /// Goals scored by the away team.
    #[serde(default)]
    away_score: Option<u32>,
}

/// Response for operations that only report success.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MessageResponse {
    /// A success message.
    message: String,
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

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match &err {
            ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Conflict { .. } => StatusCode::CONFLICT,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => {
                error!(error = %err, "Internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Handler for GET `/league` endpoint.
///
/// Returns the current league (if any) and whether creation mode is active.
async fn handle_get_league(
    AxumState(app_state): AxumState<AppState>,
) -> Json<SessionStateResponse> {
    let session = app_state.session.lock().await;
    Json(session.state())
}

/// Handler for POST `/league` endpoint.
///
/// Creates a new league, replacing the current one.
async fn handle_create_league(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateLeagueRequest>,
) -> Result<(StatusCode, Json<LeagueResponse>), HttpError> {
    info!(
        format = %req.format,
        teams = req.teams.len(),
        "Handling create_league request"
    );

    let mut session = app_state.session.lock().await;
    let response: LeagueResponse = session.create_league(&req, OffsetDateTime::now_utc())?;
    drop(session);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for DELETE `/league` endpoint.
///
/// Discards the current league and clears storage.
async fn handle_reset_league(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<MessageResponse>, HttpError> {
    warn!("Handling reset_league request");

    let mut session = app_state.session.lock().await;
    session.reset_league()?;
    drop(session);

    Ok(Json(MessageResponse {
        message: String::from("All league data has been cleared."),
    }))
}

/// Handler for POST `/league/creation` endpoint.
async fn handle_start_league_creation(
    AxumState(app_state): AxumState<AppState>,
) -> Json<SessionStateResponse> {
    let mut session = app_state.session.lock().await;
    session.start_league_creation();
    Json(session.state())
}

/// Handler for DELETE `/league/creation` endpoint.
///
/// Returns to the current league. Fails when there is none.
async fn handle_cancel_league_creation(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<SessionStateResponse>, HttpError> {
    let mut session = app_state.session.lock().await;
    session.cancel_league_creation()?;
    Ok(Json(session.state()))
}

/// Handler for PUT `/league/matches/{match_id}` endpoint.
///
/// Both scores present records a result; both absent clears it.
async fn handle_update_match_score(
    AxumState(app_state): AxumState<AppState>,
    Path(match_id): Path<String>,
    Json(req): Json<MatchScoreApiRequest>,
) -> Result<Json<UpdateMatchScoreResponse>, HttpError> {
    info!(
        match_id = %match_id,
        home_score = ?req.home_score,
        away_score = ?req.away_score,
        "Handling update_match_score request"
    );

    let request: UpdateMatchScoreRequest = UpdateMatchScoreRequest {
        match_id,
        home_score: req.home_score,
        away_score: req.away_score,
    };

    let mut session = app_state.session.lock().await;
    let response: UpdateMatchScoreResponse = session.update_match_score(&request)?;
    drop(session);

    Ok(Json(response))
}

/// Handler for GET `/league/table` endpoint.
///
/// Returns an empty table when no league exists.
async fn handle_get_league_table(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Vec<TableEntryResponse>> {
    let session = app_state.session.lock().await;
    Json(session.league_table())
}

/// Handler for GET `/league/summary` endpoint.
async fn handle_get_league_summary(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<LeagueSummaryResponse>, HttpError> {
    let session = app_state.session.lock().await;
    Ok(Json(session.league_summary()?))
}

/// Handler for GET `/formats` endpoint.
async fn handle_list_formats() -> Json<Vec<FormatResponse>> {
    Json(list_formats())
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route(
            "/league",
            get(handle_get_league)
                .post(handle_create_league)
                .delete(handle_reset_league),
        )
        .route(
            "/league/creation",
            post(handle_start_league_creation).delete(handle_cancel_league_creation),
        )
        .route("/league/matches/{match_id}", put(handle_update_match_score))
        .route("/league/table", get(handle_get_league_table))
        .route("/league/summary", get(handle_get_league_summary))
        .route("/formats", get(handle_list_formats))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing League Table Server");

    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let session: LeagueSession = LeagueSession::open(persistence)?;
    let app_state: AppState = AppState {
        session: Arc::new(Mutex::new(session)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
