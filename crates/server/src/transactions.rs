//! Transactions API endpoints

use api_types::transaction::TransactionPayload;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use engine::{Transaction, TransactionCmd};

use crate::{Payload, ServerError, created, parse_id, server::ServerState};

const LABEL: &str = "transaction";

fn map_payload(payload: TransactionPayload) -> TransactionCmd {
    let mut cmd = TransactionCmd::new(
        payload.transaction_date,
        payload.kind,
        payload.amount,
        payload.person_id,
        payload.bank_account_id,
        payload.category_id,
    );
    cmd.notes = payload.notes;
    cmd
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Transaction>>, ServerError> {
    Ok(Json(state.engine.list_transactions().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Transaction>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(state.engine.transaction(id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<TransactionPayload>,
) -> Result<Response, ServerError> {
    let transaction = state.engine.create_transaction(map_payload(payload)).await?;
    Ok(created(
        format!("/api/transactions/{}", transaction.id),
        transaction,
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(payload): Payload<TransactionPayload>,
) -> Result<Json<Transaction>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(
        state
            .engine
            .update_transaction(id, map_payload(payload))
            .await?,
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_id(&id, LABEL)?;
    state.engine.delete_transaction(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
