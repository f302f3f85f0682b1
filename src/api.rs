// HTTP surface for the entries resource
// Each handler issues exactly one store statement and maps the result.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::get;
use axum::Router;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::db;
use crate::entry::{self, Entry, EntryPayload};
use crate::error::ApiError;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<Mutex<Connection>>,
}

impl AppState {
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GET / - All entries
async fn list_entries(State(state): State<AppState>) -> Response {
    let conn = state.db.lock().unwrap();

    match db::list_entries(&conn) {
        Ok(entries) => Json(entries).into_response(),
        // The collection routes carry no error envelope of their own; a
        // store failure falls back to the transport default.
        Err(e) => {
            tracing::error!("error listing entries: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// POST / - Create an entry after validating it
async fn create_entry(
    State(state): State<AppState>,
    Json(payload): Json<EntryPayload>,
) -> Response {
    // Validation runs before any store interaction
    let new_entry = match entry::validate(&payload) {
        Ok(new_entry) => new_entry,
        Err(errors) => return ApiError::Validation(errors).into_response(),
    };

    let conn = state.db.lock().unwrap();

    match db::insert_entry(&conn, &new_entry) {
        Ok(entry) => Json(entry).into_response(),
        Err(e) => {
            tracing::error!("error creating entry: {e:#}");
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
        }
    }
}

/// GET /:id - A single entry
async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Entry>, ApiError> {
    let conn = state.db.lock().unwrap();

    let entry = db::get_entry(&conn, id).map_err(|e| {
        tracing::error!("error fetching entry {id}: {e:#}");
        ApiError::Internal
    })?;

    entry.map(Json).ok_or(ApiError::NotFound)
}

/// PATCH /:id - Overwrite all three mutable fields
async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(payload): Json<EntryPayload>,
) -> Result<Json<Entry>, ApiError> {
    // Updates skip the creation rules; the fields only have to decode
    let new_entry = entry::decode(&payload).map_err(ApiError::Validation)?;

    let conn = state.db.lock().unwrap();

    let entry = db::update_entry(&conn, id, &new_entry).map_err(|e| {
        tracing::error!("error updating entry {id}: {e:#}");
        ApiError::Internal
    })?;

    entry.map(Json).ok_or(ApiError::NotFound)
}

/// DELETE /:id - Remove an entry, answering with its final state
async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Entry>, ApiError> {
    let conn = state.db.lock().unwrap();

    let entry = db::delete_entry(&conn, id).map_err(|e| {
        tracing::error!("error deleting entry {id}: {e:#}");
        ApiError::Internal
    })?;

    entry.map(Json).ok_or(ApiError::NotFound)
}

// ============================================================================
// Router
// ============================================================================

/// Build the entries router on top of a shared connection.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(list_entries).post(create_entry))
        .route("/:id", get(get_entry).patch(update_entry).delete(delete_entry))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
