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
    body::Bytes,
    extract::{Path, Query, State as AxumState, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post, put},
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::{Path as FsPath, PathBuf};
use std::sync::Arc;
use tenderbid_api::{
    ApiError, CreateBidRequest, CreateReviewRequest, CreateTenderRequest, EditEntityRequest,
    ReviewQueryRequest, add_review, create_bid, create_tender, edit_bid, edit_tender,
    list_bids_by_tender, list_bids_by_user, list_tenders, list_tenders_by_user, parse_edit_body,
    query_reviews, rollback_bid, rollback_tender,
};
use tenderbid_domain::{Bid, Review, Tender};
use tenderbid_persistence::{DirectorySeed, Persistence, SeededDirectory};
use tokio::sync::Mutex;
use tracing::{error, info, warn};

/// Tender/bid server - HTTP server for tenders, bids and reviews
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the `SQLite` database file. If not provided, uses in-memory database.
    #[arg(short, long, env = "DATABASE_PATH")]
    database: Option<String>,

    /// `MySQL`/`MariaDB` connection URL. Takes precedence over `--database`.
    #[arg(long, env = "DATABASE_URL")]
    mysql_url: Option<String>,

    /// Address to bind the server to
    #[arg(short, long, env = "SERVER_ADDRESS", default_value = "127.0.0.1:8080")]
    bind: String,

    /// JSON file with employees, organizations and responsibles to load at startup
    #[arg(long, env = "SEED_FILE")]
    seed: Option<PathBuf>,
}

/// Application state shared across handlers.
///
/// The persistence adapter is constructed once at startup and handed to
/// every handler through this state.
#[derive(Clone)]
struct AppState {
    persistence: Arc<Mutex<Persistence>>,
}

/// Query parameters of `GET /api/tenders`.
#[derive(Debug, Default, Deserialize)]
struct ListTendersQuery {
    service_type: Option<String>,
}

/// Query parameters of the `my` listings.
#[derive(Debug, Default, Deserialize)]
struct UsernameQuery {
    username: Option<String>,
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

impl HttpError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
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
            ApiError::InvalidInput { .. } | ApiError::VersionNotFound { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::Unauthorized { .. } => StatusCode::FORBIDDEN,
            ApiError::ResourceNotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<JsonRejection> for HttpError {
    fn from(rejection: JsonRejection) -> Self {
        warn!(error = %rejection.body_text(), "Rejected request body");
        Self::bad_request(rejection.body_text())
    }
}

/// Parses the `version` path segment of a rollback.
fn parse_version(raw: &str) -> Result<i64, HttpError> {
    raw.parse::<i64>()
        .map_err(|_| HttpError::bad_request(format!("Invalid version '{raw}'")))
}

/// Handler for GET `/api/ping`.
async fn handle_ping() -> Json<&'static str> {
    Json("ok")
}

/// Handler for GET `/api/tenders`.
///
/// Lists the latest snapshot of every tender, optionally restricted to one
/// service type.
async fn handle_list_tenders(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<ListTendersQuery>,
) -> Result<Json<Vec<Tender>>, HttpError> {
    info!(service_type = ?query.service_type, "Handling list_tenders request");

    let tenders: Vec<Tender> = list_tenders(
        &mut *app_state.persistence.lock().await,
        query.service_type.as_deref(),
    )?;
    Ok(Json(tenders))
}

/// Handler for POST `/api/tenders/new`.
async fn handle_create_tender(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateTenderRequest>, JsonRejection>,
) -> Result<Json<Tender>, HttpError> {
    let Json(request) = payload?;
    info!(
        organization_id = %request.organization_id,
        creator = %request.creator_username,
        "Handling create_tender request"
    );

    let tender: Tender = create_tender(&mut *app_state.persistence.lock().await, request)?;
    Ok(Json(tender))
}

/// Handler for GET `/api/tenders/my`.
async fn handle_list_my_tenders(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<UsernameQuery>,
) -> Result<Json<Vec<Tender>>, HttpError> {
    info!(username = ?query.username, "Handling list_my_tenders request");

    let tenders: Vec<Tender> = list_tenders_by_user(
        &mut *app_state.persistence.lock().await,
        query.username.as_deref(),
    )?;
    Ok(Json(tenders))
}

/// Handler for PATCH `/api/tenders/{id}/edit`.
///
/// The body may only carry `name` and `description`.
async fn handle_edit_tender(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<String>,
    body: Bytes,
) -> Result<Json<Tender>, HttpError> {
    info!(tender_id = %tender_id, "Handling edit_tender request");

    let request: EditEntityRequest = parse_edit_body(&body).map_err(ApiError::from)?;
    let tender: Tender = edit_tender(
        &mut *app_state.persistence.lock().await,
        &tender_id,
        &request,
    )?;
    Ok(Json(tender))
}

/// Handler for PUT `/api/tenders/{id}/rollback/{version}`.
async fn handle_rollback_tender(
    AxumState(app_state): AxumState<AppState>,
    Path((tender_id, version)): Path<(String, String)>,
) -> Result<Json<Tender>, HttpError> {
    info!(tender_id = %tender_id, version = %version, "Handling rollback_tender request");

    let version: i64 = parse_version(&version)?;
    let tender: Tender = rollback_tender(
        &mut *app_state.persistence.lock().await,
        &tender_id,
        version,
    )?;
    Ok(Json(tender))
}

/// Handler for POST `/api/bids/new`.
async fn handle_create_bid(
    AxumState(app_state): AxumState<AppState>,
    payload: Result<Json<CreateBidRequest>, JsonRejection>,
) -> Result<Json<Bid>, HttpError> {
    let Json(request) = payload?;
    info!(
        tender_id = %request.tender_id,
        organization_id = %request.organization_id,
        creator = %request.creator_username,
        "Handling create_bid request"
    );

    let bid: Bid = create_bid(&mut *app_state.persistence.lock().await, request)?;
    Ok(Json(bid))
}

/// Handler for GET `/api/bids/my`.
async fn handle_list_my_bids(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<UsernameQuery>,
) -> Result<Json<Vec<Bid>>, HttpError> {
    info!(username = ?query.username, "Handling list_my_bids request");

    let bids: Vec<Bid> = list_bids_by_user(
        &mut *app_state.persistence.lock().await,
        query.username.as_deref(),
    )?;
    Ok(Json(bids))
}

/// Handler for GET `/api/bids/{id}/list`, where `id` is a tender id.
async fn handle_list_tender_bids(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<String>,
) -> Result<Json<Vec<Bid>>, HttpError> {
    info!(tender_id = %tender_id, "Handling list_tender_bids request");

    let bids: Vec<Bid> = list_bids_by_tender(&mut *app_state.persistence.lock().await, &tender_id)?;
    Ok(Json(bids))
}

/// Handler for PATCH `/api/bids/{id}/edit`.
async fn handle_edit_bid(
    AxumState(app_state): AxumState<AppState>,
    Path(bid_id): Path<String>,
    body: Bytes,
) -> Result<Json<Bid>, HttpError> {
    info!(bid_id = %bid_id, "Handling edit_bid request");

    let request: EditEntityRequest = parse_edit_body(&body).map_err(ApiError::from)?;
    let bid: Bid = edit_bid(&mut *app_state.persistence.lock().await, &bid_id, &request)?;
    Ok(Json(bid))
}

/// Handler for PUT `/api/bids/{id}/rollback/{version}`.
async fn handle_rollback_bid(
    AxumState(app_state): AxumState<AppState>,
    Path((bid_id, version)): Path<(String, String)>,
) -> Result<Json<Bid>, HttpError> {
    info!(bid_id = %bid_id, version = %version, "Handling rollback_bid request");

    let version: i64 = parse_version(&version)?;
    let bid: Bid = rollback_bid(&mut *app_state.persistence.lock().await, &bid_id, version)?;
    Ok(Json(bid))
}

/// Handler for POST `/api/bids/{id}/newreview`.
async fn handle_add_review(
    AxumState(app_state): AxumState<AppState>,
    Path(bid_id): Path<String>,
    payload: Result<Json<CreateReviewRequest>, JsonRejection>,
) -> Result<Json<Review>, HttpError> {
    let Json(request) = payload?;
    info!(bid_id = %bid_id, author = %request.creator_username, "Handling add_review request");

    let review: Review = add_review(&mut *app_state.persistence.lock().await, &bid_id, &request)?;
    Ok(Json(review))
}

/// Handler for GET `/api/bids/{id}/reviews`, where `id` is a tender id.
///
/// `organizationId` and `authorUsername` come from the query string.
async fn handle_query_reviews(
    AxumState(app_state): AxumState<AppState>,
    Path(tender_id): Path<String>,
    Query(mut request): Query<ReviewQueryRequest>,
) -> Result<Json<Vec<Review>>, HttpError> {
    info!(
        tender_id = %tender_id,
        organization_id = ?request.organization_id,
        author = ?request.author_username,
        "Handling query_reviews request"
    );

    request.tender_id = Some(tender_id);
    let reviews: Vec<Review> = query_reviews(&mut *app_state.persistence.lock().await, &request)?;
    Ok(Json(reviews))
}

/// Builds the application router with all endpoints.
///
/// Path parameters sharing a position use one name so the routes do not
/// conflict. Under `/api/bids/{id}`, `id` is a tender id for `list` and
/// `reviews` and a bid id otherwise.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/api/ping", get(handle_ping))
        .route("/api/tenders", get(handle_list_tenders))
        .route("/api/tenders/new", post(handle_create_tender))
        .route("/api/tenders/my", get(handle_list_my_tenders))
        .route("/api/tenders/{id}/edit", patch(handle_edit_tender))
        .route(
            "/api/tenders/{id}/rollback/{version}",
            put(handle_rollback_tender),
        )
        .route("/api/bids/new", post(handle_create_bid))
        .route("/api/bids/my", get(handle_list_my_bids))
        .route("/api/bids/{id}/list", get(handle_list_tender_bids))
        .route("/api/bids/{id}/edit", patch(handle_edit_bid))
        .route("/api/bids/{id}/rollback/{version}", put(handle_rollback_bid))
        .route("/api/bids/{id}/newreview", post(handle_add_review))
        .route("/api/bids/{id}/reviews", get(handle_query_reviews))
        .with_state(app_state)
}

/// Opens the persistence backend selected on the command line.
fn open_persistence(args: &Args) -> Result<Persistence, Box<dyn std::error::Error>> {
    let persistence: Persistence = if let Some(url) = &args.mysql_url {
        info!("Using MySQL/MariaDB database");
        Persistence::new_with_mysql(url)?
    } else if let Some(db_path) = &args.database {
        info!("Using file-based database at: {}", db_path);
        Persistence::new_with_file(db_path)?
    } else {
        info!("Using in-memory database");
        Persistence::new_in_memory()?
    };
    Ok(persistence)
}

/// Loads the directory seed file, if one was given.
fn load_seed(
    persistence: &mut Persistence,
    seed_path: Option<&FsPath>,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(path) = seed_path else {
        return Ok(());
    };

    let json: String = std::fs::read_to_string(path).map_err(|e| {
        error!(path = %path.display(), error = %e, "Failed to read seed file");
        e
    })?;
    let seed: DirectorySeed = DirectorySeed::from_json(&json)?;
    let seeded: SeededDirectory = persistence.seed_directory(&seed)?;

    info!(
        employees = seeded.employees.len(),
        organizations = seeded.organizations.len(),
        responsibles = seeded.responsible_count,
        "Loaded directory seed from {}",
        path.display()
    );
    Ok(())
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

    info!("Initializing tender/bid server");

    let mut persistence: Persistence = open_persistence(&args)?;
    load_seed(&mut persistence, args.seed.as_deref())?;

    let app_state: AppState = AppState {
        persistence: Arc::new(Mutex::new(persistence)),
    };

    let app: Router = build_router(app_state);

    let addr: std::net::SocketAddr = args.bind.parse()?;
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
