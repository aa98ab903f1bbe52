use axum::{
    Json,
    body::Bytes,
    extract::{
        Query, State,
        rejection::{BytesRejection, QueryRejection},
    },
};
use axum_macros::debug_handler;
use serde::de::DeserializeOwned;
use utoipa::OpenApi;

use std::sync::Arc;

use crate::{
    dto::{CreateNoteRequest, Envelope, UpdateNoteRequest},
    error::ServiceError,
    models::Note,
    service::NoteService,
};

#[derive(OpenApi)]
#[openapi(
    paths(get_all_notes, create_note, update_note, delete_note),
    components(schemas(Note, CreateNoteRequest, UpdateNoteRequest)),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

/// Bodies are read as JSON whatever the declared content type.
fn parse_body<T: DeserializeOwned>(
    payload: Result<Bytes, BytesRejection>,
) -> Result<T, ServiceError> {
    let bytes = payload.map_err(|e| ServiceError::Body(e.to_string()))?;
    serde_json::from_slice(&bytes).map_err(|e| ServiceError::Body(e.to_string()))
}

/// First `id` in the query string, as a URL's search params would report it.
fn first_id(query: Result<Query<Vec<(String, String)>>, QueryRejection>) -> Option<String> {
    let Query(pairs) = query
        .inspect_err(|e| tracing::debug!("unreadable query string: {e}"))
        .ok()?;
    pairs
        .into_iter()
        .find_map(|(key, value)| (key == "id").then_some(value))
}

#[utoipa::path(
    get,
    path = "/notes",
    responses(
        (status = 200, description = "Envelope with all notes, newest first", body = [Note]),
        (status = 500, description = "Envelope with error \"DB error\"")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(
    State(service): State<Arc<NoteService>>,
) -> Result<Json<Envelope<Vec<Note>>>, ServiceError> {
    let notes = service.get_all_notes().await?;
    Ok(Json(Envelope::ok(Some(notes))))
}

#[utoipa::path(
    post,
    path = "/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 200, description = "Envelope with the created note", body = Note),
        (status = 400, description = "Envelope with error \"Title required\""),
        (status = 500, description = "Envelope with error \"DB error\", also for unparsable bodies")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    payload: Result<Bytes, BytesRejection>,
) -> Result<Json<Envelope<Note>>, ServiceError> {
    let note = service.create_note(parse_body(payload)?).await?;
    Ok(Json(Envelope::ok(note)))
}

#[utoipa::path(
    put,
    path = "/notes",
    request_body = UpdateNoteRequest,
    responses(
        (status = 200, description = "Envelope with the updated note, without data if no note has that id", body = Note),
        (status = 400, description = "Envelope with error \"Id and title required\""),
        (status = 500, description = "Envelope with error \"DB error\", also for unparsable bodies")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn update_note(
    State(service): State<Arc<NoteService>>,
    payload: Result<Bytes, BytesRejection>,
) -> Result<Json<Envelope<Note>>, ServiceError> {
    let note = service.update_note(parse_body(payload)?).await?;
    Ok(Json(Envelope::ok(note)))
}

#[utoipa::path(
    delete,
    path = "/notes",
    params(
        ("id" = Option<String>, Query, description = "ID of the note to delete")
    ),
    responses(
        (status = 200, description = "Envelope without data; missing ids are not an error"),
        (status = 400, description = "Envelope with error \"Id required\" or \"Invalid id\""),
        (status = 500, description = "Envelope with error \"DB error\"")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Json<Envelope<()>>, ServiceError> {
    service.delete_note(first_id(query).as_deref()).await?;
    Ok(Json(Envelope::ack()))
}
