//! Currencies API endpoints

use api_types::currency::CurrencyPayload;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use engine::{Currency, CurrencyCmd};

use crate::{Payload, ServerError, created, parse_id, server::ServerState};

const LABEL: &str = "currency";

fn map_payload(payload: CurrencyPayload) -> CurrencyCmd {
    CurrencyCmd::new(payload.name, payload.code)
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Currency>>, ServerError> {
    Ok(Json(state.engine.list_currencies().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Currency>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(state.engine.currency(id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<CurrencyPayload>,
) -> Result<Response, ServerError> {
    let currency = state.engine.create_currency(map_payload(payload)).await?;
    Ok(created(format!("/api/currencies/{}", currency.id), currency))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(payload): Payload<CurrencyPayload>,
) -> Result<Json<Currency>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(state.engine.update_currency(id, map_payload(payload)).await?))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_id(&id, LABEL)?;
    state.engine.delete_currency(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
