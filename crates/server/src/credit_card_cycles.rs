//! Credit card cycles API endpoints and the balances nested under a cycle.

use api_types::credit_card::{CreditCardCyclePayload, CycleBalancePayload};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use engine::{CreditCardCycle, CreditCardCycleCmd, CycleBalance, CycleBalanceCmd};

use crate::{Payload, ServerError, created, parse_id, server::ServerState};

const LABEL: &str = "credit card cycle";
const BALANCE_LABEL: &str = "credit card cycle balance";

fn map_payload(payload: CreditCardCyclePayload) -> CreditCardCycleCmd {
    CreditCardCycleCmd::new(payload.credit_card_id, payload.closing_date, payload.due_date)
}

fn map_balance(payload: CycleBalancePayload) -> CycleBalanceCmd {
    CycleBalanceCmd::new(
        payload.credit_card_cycle_id,
        payload.currency_id,
        payload.balance,
    )
    .paid(payload.paid)
}

fn parse_balance_path(cycle_id: &str, balance_id: &str) -> Result<(i64, i64), ServerError> {
    Ok((
        parse_id(cycle_id, LABEL)?,
        parse_id(balance_id, BALANCE_LABEL)?,
    ))
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<CreditCardCycle>>, ServerError> {
    Ok(Json(state.engine.list_credit_card_cycles().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<CreditCardCycle>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(state.engine.credit_card_cycle(id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<CreditCardCyclePayload>,
) -> Result<Response, ServerError> {
    let cycle = state
        .engine
        .create_credit_card_cycle(map_payload(payload))
        .await?;
    Ok(created(format!("/api/credit-card-cycles/{}", cycle.id), cycle))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(payload): Payload<CreditCardCyclePayload>,
) -> Result<Json<CreditCardCycle>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(
        state
            .engine
            .update_credit_card_cycle(id, map_payload(payload))
            .await?,
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_id(&id, LABEL)?;
    state.engine.delete_credit_card_cycle(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn list_balances(
    State(state): State<ServerState>,
    Path(cycle_id): Path<String>,
) -> Result<Json<Vec<CycleBalance>>, ServerError> {
    let cycle_id = parse_id(&cycle_id, LABEL)?;
    Ok(Json(state.engine.list_cycle_balances(cycle_id).await?))
}

pub async fn get_balance(
    State(state): State<ServerState>,
    Path((cycle_id, balance_id)): Path<(String, String)>,
) -> Result<Json<CycleBalance>, ServerError> {
    let (cycle_id, balance_id) = parse_balance_path(&cycle_id, &balance_id)?;
    Ok(Json(state.engine.cycle_balance(cycle_id, balance_id).await?))
}

pub async fn create_balance(
    State(state): State<ServerState>,
    Path(cycle_id): Path<String>,
    Payload(payload): Payload<CycleBalancePayload>,
) -> Result<Response, ServerError> {
    let cycle_id = parse_id(&cycle_id, LABEL)?;
    let balance = state
        .engine
        .create_cycle_balance(cycle_id, map_balance(payload))
        .await?;
    Ok(created(
        format!("/api/credit-card-cycles/{cycle_id}/balances/{}", balance.id),
        balance,
    ))
}

pub async fn update_balance(
    State(state): State<ServerState>,
    Path((cycle_id, balance_id)): Path<(String, String)>,
    Payload(payload): Payload<CycleBalancePayload>,
) -> Result<Json<CycleBalance>, ServerError> {
    let (cycle_id, balance_id) = parse_balance_path(&cycle_id, &balance_id)?;
    Ok(Json(
        state
            .engine
            .update_cycle_balance(cycle_id, balance_id, map_balance(payload))
            .await?,
    ))
}

pub async fn delete_balance(
    State(state): State<ServerState>,
    Path((cycle_id, balance_id)): Path<(String, String)>,
) -> Result<StatusCode, ServerError> {
    let (cycle_id, balance_id) = parse_balance_path(&cycle_id, &balance_id)?;
    state
        .engine
        .delete_cycle_balance(cycle_id, balance_id)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
