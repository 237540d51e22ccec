//! Credit card subscriptions API endpoints

use api_types::credit_card::SubscriptionPayload;
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use engine::{Subscription, SubscriptionCmd};

use crate::{Payload, ServerError, created, parse_id, server::ServerState};

const LABEL: &str = "credit card subscription";

fn map_payload(payload: SubscriptionPayload) -> SubscriptionCmd {
    SubscriptionCmd::new(
        payload.credit_card_id,
        payload.currency_id,
        payload.concept,
        payload.amount,
    )
}

pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<Subscription>>, ServerError> {
    Ok(Json(state.engine.list_subscriptions().await?))
}

pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Subscription>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(state.engine.subscription(id).await?))
}

pub async fn create(
    State(state): State<ServerState>,
    Payload(payload): Payload<SubscriptionPayload>,
) -> Result<Response, ServerError> {
    let subscription = state.engine.create_subscription(map_payload(payload)).await?;
    Ok(created(
        format!("/api/credit-card-subscriptions/{}", subscription.id),
        subscription,
    ))
}

pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Payload(payload): Payload<SubscriptionPayload>,
) -> Result<Json<Subscription>, ServerError> {
    let id = parse_id(&id, LABEL)?;
    Ok(Json(
        state
            .engine
            .update_subscription(id, map_payload(payload))
            .await?,
    ))
}

pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ServerError> {
    let id = parse_id(&id, LABEL)?;
    state.engine.delete_subscription(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
