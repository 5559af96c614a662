//! Entry CRUD handlers
//!
//! Each handler runs the field validators relevant to its verb
//! (short-circuiting on the first rejection), calls the repository, and
//! maps the outcome to a transport response. Bodies are taken as raw
//! JSON values so that a missing key, an explicit null, and a wrong type
//! each keep their distinct meaning.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use tracing::info;

use crate::db::entries as repo;
use crate::db::entries::{EntryChanges, NewEntry};
use crate::error::{Error, Result};
use crate::model::{EntryResponse, Status};
use crate::{validate, AppState};

/// GET /api/entries
///
/// All entries, newest first.
pub async fn list_entries(State(state): State<AppState>) -> Result<Json<Vec<EntryResponse>>> {
    let entries = repo::list(&state.db).await?;
    Ok(Json(entries.into_iter().map(EntryResponse::from).collect()))
}

/// GET /api/entries/:id
pub async fn get_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EntryResponse>> {
    let entry = repo::get(&state.db, &id).await?;
    Ok(Json(entry.into()))
}

/// POST /api/entries
///
/// Validates every field, then inserts with defaults applied for the
/// absent ones (status defaults to PLANNED, the rest to NULL).
pub async fn create_entry(
    State(state): State<AppState>,
    payload: Option<Json<Value>>,
) -> Result<(StatusCode, Json<EntryResponse>)> {
    let body = body_or_empty(payload);

    let title = validate::title(body.get("title")).map_err(Error::Validation)?;
    let description = validate::description(body.get("description")).map_err(Error::Validation)?;
    let status = validate::status(body.get("status")).map_err(Error::Validation)?;
    let difficulty = validate::difficulty(body.get("difficulty")).map_err(Error::Validation)?;
    let tags = validate::tags(body.get("tags")).map_err(Error::Validation)?;

    let new = NewEntry {
        title,
        description: description.unwrap_or(None),
        status: status.unwrap_or(Status::default()),
        difficulty: difficulty.unwrap_or(None),
        tags: tags.unwrap_or(None),
    };

    let entry = repo::create(&state.db, new).await?;
    info!("Created entry {}", entry.id);

    Ok((StatusCode::CREATED, Json(entry.into())))
}

/// PUT /api/entries/:id
///
/// Partial-field update: title is mandatory, every other field changes
/// only when its key is present in the request.
pub async fn update_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Option<Json<Value>>,
) -> Result<Json<EntryResponse>> {
    let body = body_or_empty(payload);

    let title = validate::title(body.get("title")).map_err(Error::Validation)?;
    let description = validate::description(body.get("description")).map_err(Error::Validation)?;
    let status = validate::status(body.get("status")).map_err(Error::Validation)?;
    let difficulty = validate::difficulty(body.get("difficulty")).map_err(Error::Validation)?;
    let tags = validate::tags(body.get("tags")).map_err(Error::Validation)?;

    let changes = EntryChanges {
        title,
        description: description.into_option(),
        status: status.into_option(),
        difficulty: difficulty.into_option(),
        tags: tags.into_option(),
    };

    let entry = repo::update(&state.db, &id, changes).await?;
    Ok(Json(entry.into()))
}

/// DELETE /api/entries/:id
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode> {
    repo::delete(&state.db, &id).await?;
    info!("Deleted entry {}", id);
    Ok(StatusCode::NO_CONTENT)
}

/// A missing or non-JSON body behaves as an empty object, so the title
/// rejection fires instead of a framework-shaped parse error.
fn body_or_empty(payload: Option<Json<Value>>) -> Value {
    payload.map(|Json(v)| v).unwrap_or(Value::Null)
}
