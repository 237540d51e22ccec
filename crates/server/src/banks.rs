//! Banks API endpoints

use api_types::bank::BankPayload;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use engine::{Bank, BankCmd};

use crate::{Payload, ServerError, created, parse_id, server::ServerState};

const LABEL: &str = "bank";

fn map_payload(payload: BankPayload) -> BankCmd {
    BankCmd::new(payload.name, payload.country)
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Bank>>, ServerError> {
    Ok(Json(state.engine.list_banks().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Bank>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(state.engine.bank(id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<BankPayload>,
) -> Result<Response, ServerError> {
    let bank = state.engine.create_bank(map_payload(payload)).await?;
    Ok(created(format!("/api/banks/{}", bank.id), bank))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(payload): Payload<BankPayload>,
) -> Result<Json<Bank>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(state.engine.update_bank(id, map_payload(payload)).await?))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_id(&id, LABEL)?;
    state.engine.delete_bank(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
