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
    extract::State as AxumState,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use club_roster_api::{
    ApiError, AuthenticatedActor, CreateTeamRequest, ImportMembersRequest, ImportMembersResponse,
    Role, authenticate_stub, create_team, import_members, list_import_audit, list_members,
    list_teams,
};
use club_roster_domain::ImportRow;
use club_roster_identity::{IdentityAuthority, InMemoryIdentityAuthority};
use club_roster_persistence::{
    ImportAuditData, MemberData, Persistence, PersistenceError, TeamData,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Club Roster Server - HTTP server for the Club Roster System
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
/// The persistence layer is wrapped in a Mutex to allow safe concurrent
/// access; the identity authority manages its own synchronization.
#[derive(Clone)]
struct AppState {
    /// The local member and team directory.
    persistence: Arc<Mutex<Persistence>>,
    /// The external identity authority.
    authority: Arc<dyn IdentityAuthority>,
}

/// API request for importing a batch of members.
///
/// This includes authentication information in addition to the rows.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct ImportMembersApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The caller-supplied source filename, recorded in the audit entry.
    source_file: String,
    /// The rows to import.
    rows: Vec<ImportRow>,
}

/// API request for creating a team.
#[derive(Debug, Clone, Deserialize, Serialize)]
struct CreateTeamApiRequest {
    /// The actor ID performing this action.
    actor_id: String,
    /// The role of the actor.
    actor_role: String,
    /// The team code.
    code: String,
    /// The team name.
    name: String,
}

/// One failed row in an import response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RowFailureResponse {
    /// The display name of the failed row.
    display_name: String,
    /// The error description for the failed row.
    error: String,
}

/// API response for import operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ImportMembersApiResponse {
    /// Success indicator.
    success: bool,
    /// A summary message stating counts.
    message: String,
    /// The number of rows successfully imported.
    imported_count: usize,
    /// The number of rows that failed.
    failed_count: usize,
    /// The per-row failures.
    failures: Vec<RowFailureResponse>,
}

/// API response for team creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct CreateTeamApiResponse {
    /// Success indicator.
    success: bool,
    /// The internal team ID.
    team_id: i64,
    /// The team code.
    code: String,
    /// The team name.
    name: String,
    /// A success message.
    message: String,
}

/// Team information for listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct TeamResponse {
    /// The internal team ID.
    team_id: i64,
    /// The team code.
    code: String,
    /// The team name.
    name: String,
}

/// API response for listing teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListTeamsApiResponse {
    /// The list of teams.
    teams: Vec<TeamResponse>,
}

/// Member information for listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MemberResponse {
    /// The member's external identity ID.
    member_id: String,
    /// The member's code.
    code: String,
    /// The member's display name.
    display_name: String,
    /// The member's contact email.
    email: String,
    /// The member's phone number.
    phone: Option<String>,
    /// The member's date of birth (ISO 8601).
    date_of_birth: String,
    /// The member's gender.
    gender: String,
    /// The member's jersey number.
    jersey_number: Option<i32>,
    /// The member's address.
    address: Option<String>,
    /// The internal ID of the member's team, if assigned.
    team_id: Option<i64>,
}

/// API response for listing members.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListMembersApiResponse {
    /// The list of members.
    members: Vec<MemberResponse>,
}

/// Import audit information for listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ImportAuditResponse {
    /// The entry ID.
    entry_id: i64,
    /// The recorded action name.
    action: String,
    /// The source filename the caller supplied.
    source_file: String,
    /// The batch's three-way status.
    status: String,
    /// The number of rows successfully imported.
    row_count: i32,
    /// The serialized per-row errors, if any.
    errors_json: Option<String>,
    /// The actor the batch is attributed to.
    actor_id: String,
    /// When the entry was recorded.
    created_at: String,
}

/// API response for listing import audit entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListImportAuditApiResponse {
    /// The audit entries, most recent first.
    entries: Vec<ImportAuditResponse>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct HealthResponse {
    /// Service status indicator.
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
        let status: StatusCode = match err {
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::EmptyBatch | ApiError::InvalidInput { .. } => StatusCode::BAD_REQUEST,
            ApiError::CallerUnresolvable { .. } | ApiError::StoreUnavailable { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<PersistenceError> for HttpError {
    fn from(err: PersistenceError) -> Self {
        error!(error = %err, "Persistence error");
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("Persistence error: {err}"),
        }
    }
}

/// Converts a `TeamData` to a `TeamResponse`.
fn team_to_response(team: &TeamData) -> TeamResponse {
    TeamResponse {
        team_id: team.team_id,
        code: team.code.clone(),
        name: team.name.clone(),
    }
}

/// Converts a `MemberData` to a `MemberResponse`.
fn member_to_response(member: &MemberData) -> MemberResponse {
    MemberResponse {
        member_id: member.member_id.clone(),
        code: member.code.clone(),
        display_name: member.display_name.clone(),
        email: member.email.clone(),
        phone: member.phone.clone(),
        date_of_birth: member.date_of_birth.clone(),
        gender: member.gender.clone(),
        jersey_number: member.jersey_number,
        address: member.address.clone(),
        team_id: member.team_id,
    }
}

/// Converts an `ImportAuditData` to an `ImportAuditResponse`.
fn audit_to_response(entry: &ImportAuditData) -> ImportAuditResponse {
    ImportAuditResponse {
        entry_id: entry.entry_id,
        action: entry.action.clone(),
        source_file: entry.source_file.clone(),
        status: entry.status.clone(),
        row_count: entry.row_count,
        errors_json: entry.errors_json.clone(),
        actor_id: entry.actor_id.clone(),
        created_at: entry.created_at.clone(),
    }
}

/// Parses a role string into a Role enum.
fn parse_role(role_str: &str) -> Result<Role, HttpError> {
    match role_str.to_lowercase().as_str() {
        "admin" => Ok(Role::Admin),
        "staff" => Ok(Role::Staff),
        _ => Err(HttpError {
            status: StatusCode::BAD_REQUEST,
            message: format!("Invalid role: '{role_str}'. Must be 'admin' or 'staff'"),
        }),
    }
}

/// Handler for POST `/members/import` endpoint.
///
/// Authenticates the actor and imports a batch of members.
async fn handle_import_members(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<ImportMembersApiRequest>,
) -> Result<Json<ImportMembersApiResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        rows = req.rows.len(),
        source_file = %req.source_file,
        "Handling import_members request"
    );

    let role: Role = parse_role(&req.actor_role)?;
    let actor: AuthenticatedActor =
        authenticate_stub(req.actor_id.clone(), role).map_err(|e| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: e.to_string(),
        })?;

    let import_request: ImportMembersRequest = ImportMembersRequest {
        source_file: req.source_file,
        rows: req.rows,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response: ImportMembersResponse = import_members(
        &mut persistence,
        app_state.authority.as_ref(),
        &import_request,
        &actor,
    )?;
    drop(persistence);

    info!(
        imported = response.imported_count,
        failed = response.failed_count,
        "Import batch completed"
    );

    let failures: Vec<RowFailureResponse> = response
        .failures
        .into_iter()
        .map(|f| RowFailureResponse {
            display_name: f.display_name,
            error: f.error,
        })
        .collect();

    Ok(Json(ImportMembersApiResponse {
        success: response.success,
        message: response.message,
        imported_count: response.imported_count,
        failed_count: response.failed_count,
        failures,
    }))
}

/// Handler for POST `/teams` endpoint.
///
/// Creates a new team.
async fn handle_create_team(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<CreateTeamApiRequest>,
) -> Result<Json<CreateTeamApiResponse>, HttpError> {
    info!(
        actor_id = %req.actor_id,
        role = %req.actor_role,
        code = %req.code,
        "Handling create_team request"
    );

    let role: Role = parse_role(&req.actor_role)?;
    let actor: AuthenticatedActor =
        authenticate_stub(req.actor_id.clone(), role).map_err(|e| HttpError {
            status: StatusCode::UNAUTHORIZED,
            message: e.to_string(),
        })?;

    let create_request: CreateTeamRequest = CreateTeamRequest {
        code: req.code,
        name: req.name,
    };

    let mut persistence = app_state.persistence.lock().await;
    let response = create_team(&mut persistence, &create_request, &actor)?;
    drop(persistence);

    info!(team_id = response.team_id, code = %response.code, "Successfully created team");

    Ok(Json(CreateTeamApiResponse {
        success: true,
        team_id: response.team_id,
        code: response.code,
        name: response.name,
        message: response.message,
    }))
}

/// Handler for GET `/teams` endpoint.
///
/// Lists all teams.
async fn handle_list_teams(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListTeamsApiResponse>, HttpError> {
    info!("Handling list_teams request");

    let mut persistence = app_state.persistence.lock().await;
    let response = list_teams(&mut persistence)?;
    drop(persistence);

    let teams: Vec<TeamResponse> = response.teams.iter().map(team_to_response).collect();

    Ok(Json(ListTeamsApiResponse { teams }))
}

/// Handler for GET `/members` endpoint.
///
/// Lists all members.
async fn handle_list_members(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListMembersApiResponse>, HttpError> {
    info!("Handling list_members request");

    let mut persistence = app_state.persistence.lock().await;
    let response = list_members(&mut persistence)?;
    drop(persistence);

    let members: Vec<MemberResponse> = response.members.iter().map(member_to_response).collect();

    Ok(Json(ListMembersApiResponse { members }))
}

/// Handler for GET `/audit/imports` endpoint.
///
/// Lists all import audit entries, most recent first.
async fn handle_list_import_audit(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<ListImportAuditApiResponse>, HttpError> {
    info!("Handling list_import_audit request");

    let mut persistence = app_state.persistence.lock().await;
    let response = list_import_audit(&mut persistence)?;
    drop(persistence);

    let entries: Vec<ImportAuditResponse> = response.entries.iter().map(audit_to_response).collect();

    Ok(Json(ListImportAuditApiResponse { entries }))
}

/// Handler for GET `/health` endpoint.
async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: String::from("ok"),
    })
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/members/import", post(handle_import_members))
        .route("/members", get(handle_list_members))
        .route("/teams", post(handle_create_team))
        .route("/teams", get(handle_list_teams))
        .route("/audit/imports", get(handle_list_import_audit))
        .route("/health", get(handle_health))
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

    info!("Initializing Club Roster Server");

    // Initialize persistence (in-memory or file-based based on CLI argument)
    let persistence: Persistence = if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
        authority: Arc::new(InMemoryIdentityAuthority::new()),
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
