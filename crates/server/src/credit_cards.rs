//! Credit cards API endpoints, including the currency set of a card.

use api_types::credit_card::{CreditCardCurrenciesPayload, CreditCardPayload};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use engine::{CreditCard, CreditCardCmd, CreditCardCurrency};

use crate::{Payload, ServerError, created, parse_id, server::ServerState};

const LABEL: &str = "credit card";

fn map_payload(payload: CreditCardPayload) -> CreditCardCmd {
    let mut cmd = CreditCardCmd::new(payload.bank_id, payload.person_id, payload.number)
        .currency_ids(payload.currency_ids);
    cmd.name = payload.name;
    cmd
}

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<CreditCard>>, ServerError> {
    Ok(Json(state.engine.list_credit_cards().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<CreditCard>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(state.engine.credit_card(id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<CreditCardPayload>,
) -> Result<Response, ServerError> {
    let card = state.engine.create_credit_card(map_payload(payload)).await?;
    Ok(created(format!("/api/credit-cards/{}", card.id), card))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(payload): Payload<CreditCardPayload>,
) -> Result<Json<CreditCard>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(
        state
            .engine
            .update_credit_card(id, map_payload(payload))
            .await?,
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_id(&id, LABEL)?;
    state.engine.delete_credit_card(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

pub async fn currencies(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<CreditCardCurrency>>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(state.engine.credit_card_currencies(id).await?))
}

/// Replace the whole currency set of a card.
pub async fn replace_currencies(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(payload): Payload<CreditCardCurrenciesPayload>,
) -> Result<Json<Vec<CreditCardCurrency>>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(
        state
            .engine
            .replace_credit_card_currencies(id, &payload.currency_ids)
            .await?,
    ))
}
