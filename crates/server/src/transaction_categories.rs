//! Transaction categories API endpoints

use api_types::transaction::TransactionCategoryPayload;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use engine::{TransactionCategory, TransactionCategoryCmd};

use crate::{Payload, ServerError, created, parse_id, server::ServerState};

const LABEL: &str = "transaction category";

fn map_payload(payload: TransactionCategoryPayload) -> TransactionCategoryCmd {
    let mut cmd = TransactionCategoryCmd::new(payload.name);
    cmd.parent_id = payload.parent_id;
    cmd
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<TransactionCategory>>, ServerError> {
    Ok(Json(state.engine.list_transaction_categories().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<TransactionCategory>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(state.engine.transaction_category(id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<TransactionCategoryPayload>,
) -> Result<Response, ServerError> {
    let category = state
        .engine
        .create_transaction_category(map_payload(payload))
        .await?;
    Ok(created(
        format!("/api/transaction-categories/{}", category.id),
        category,
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(payload): Payload<TransactionCategoryPayload>,
) -> Result<Json<TransactionCategory>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(
        state
            .engine
            .update_transaction_category(id, map_payload(payload))
            .await?,
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_id(&id, LABEL)?;
    state.engine.delete_transaction_category(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
