//! Bank accounts API endpoints

use api_types::bank::BankAccountPayload;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use engine::{BankAccount, BankAccountCmd};

use crate::{Payload, ServerError, created, parse_id, server::ServerState};

const LABEL: &str = "bank account";

fn map_payload(payload: BankAccountPayload) -> BankAccountCmd {
    BankAccountCmd::new(payload.bank_id, payload.currency_id, payload.account_number)
        .balance(payload.balance)
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<BankAccount>>, ServerError> {
    Ok(Json(state.engine.list_bank_accounts().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<BankAccount>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(state.engine.bank_account(id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<BankAccountPayload>,
) -> Result<Response, ServerError> {
    let account = state.engine.create_bank_account(map_payload(payload)).await?;
    Ok(created(format!("/api/bank-accounts/{}", account.id), account))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(payload): Payload<BankAccountPayload>,
) -> Result<Json<BankAccount>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(
        state
            .engine
            .update_bank_account(id, map_payload(payload))
            .await?,
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_id(&id, LABEL)?;
    state.engine.delete_bank_account(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
