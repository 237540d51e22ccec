//! Credit card installments API endpoints

use api_types::credit_card::InstallmentPayload;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use engine::{Installment, InstallmentCmd};

use crate::{Payload, ServerError, created, parse_id, server::ServerState};

const LABEL: &str = "credit card installment";

fn map_payload(payload: InstallmentPayload) -> InstallmentCmd {
    InstallmentCmd::new(
        payload.credit_card_id,
        payload.currency_id,
        payload.concept,
        payload.amount,
        payload.start_date,
        payload.count,
    )
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Installment>>, ServerError> {
    Ok(Json(state.engine.list_installments().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Installment>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(state.engine.installment(id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<InstallmentPayload>,
) -> Result<Response, ServerError> {
    let installment = state.engine.create_installment(map_payload(payload)).await?;
    Ok(created(
        format!("/api/credit-card-installments/{}", installment.id),
        installment,
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(payload): Payload<InstallmentPayload>,
) -> Result<Json<Installment>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(
        state
            .engine
            .update_installment(id, map_payload(payload))
            .await?,
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_id(&id, LABEL)?;
    state.engine.delete_installment(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
