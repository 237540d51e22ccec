//! People API endpoints

use api_types::person::PersonPayload;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use engine::{Person, PersonCmd};

use crate::{Payload, ServerError, created, parse_id, server::ServerState};

const LABEL: &str = "person";

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Person>>, ServerError> {
    Ok(Json(state.engine.list_people().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(state.engine.person(id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<PersonPayload>,
) -> Result<Response, ServerError> {
    let person = state.engine.create_person(PersonCmd::new(payload.name)).await?;
    Ok(created(format!("/api/people/{}", person.id), person))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(payload): Payload<PersonPayload>,
) -> Result<Json<Person>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(
        state
            .engine
            .update_person(id, PersonCmd::new(payload.name))
            .await?,
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_id(&id, LABEL)?;
    state.engine.delete_person(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
