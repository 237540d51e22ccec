use axum::{
    Json,
    body::Bytes,
    extract::{FromRequest, Request},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use engine::EngineError;
use serde::{Serialize, de::DeserializeOwned};

use api_types::ErrorEnvelope;
pub use server::{ServerState, router, run_with_listener};

mod bank_accounts;
mod banks;
mod countries;
mod credit_card_cycles;
mod credit_cards;
mod currencies;
mod installments;
mod people;
mod server;
mod subscriptions;
mod transaction_categories;
mod transactions;

#[derive(Debug)]
pub enum ServerError {
    Engine(EngineError),
    /// A path segment that is not a positive integer.
    InvalidId(String),
    /// A body that is not JSON of the expected shape.
    InvalidPayload,
    MethodNotAllowed,
    NotFound,
}

fn status_for_engine_error(err: &EngineError) -> StatusCode {
    match err {
        EngineError::InvalidPayload(_) => StatusCode::BAD_REQUEST,
        EngineError::KeyNotFound(_) => StatusCode::NOT_FOUND,
        EngineError::Conflict { .. } => StatusCode::CONFLICT,
        EngineError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn message_for_engine_error(err: &EngineError) -> String {
    match err {
        EngineError::Database(db_err) => {
            tracing::error!("database error: {db_err}");
            "internal server error".to_string()
        }
        other => other.to_string(),
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let (status, envelope) = match self {
            ServerError::Engine(err) => (
                status_for_engine_error(&err),
                ErrorEnvelope::new(err.code(), message_for_engine_error(&err)),
            ),
            ServerError::InvalidId(message) => (
                StatusCode::BAD_REQUEST,
                ErrorEnvelope::new("invalid_id", message),
            ),
            ServerError::InvalidPayload => (
                StatusCode::BAD_REQUEST,
                ErrorEnvelope::new("invalid_payload", "request body must be valid JSON"),
            ),
            ServerError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                ErrorEnvelope::new("method_not_allowed", "method not allowed"),
            ),
            ServerError::NotFound => (
                StatusCode::NOT_FOUND,
                ErrorEnvelope::new("not_found", "not found"),
            ),
        };

        (status, Json(envelope)).into_response()
    }
}

impl From<EngineError> for ServerError {
    fn from(value: EngineError) -> Self {
        Self::Engine(value)
    }
}

/// JSON body decoded from the raw bytes, whatever the content type says.
pub(crate) struct Payload<T>(pub T);

impl<S, T> FromRequest<S> for Payload<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ServerError::InvalidPayload)?;
        serde_json::from_slice(&bytes)
            .map(Payload)
            .map_err(|_| ServerError::InvalidPayload)
    }
}

/// Parse a path id; `label` names the entity in the error message.
pub(crate) fn parse_id(raw: &str, label: &str) -> Result<i64, ServerError> {
    match raw.parse::<i64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(ServerError::InvalidId(format!(
            "{label} id must be a positive integer"
        ))),
    }
}

/// `201 Created` pointing at `location`.
pub(crate) fn created<T: Serialize>(location: String, body: T) -> Response {
    (
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(body),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_invalid_payload_maps_to_400() {
        let res = ServerError::from(EngineError::InvalidPayload("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn engine_not_found_maps_to_404() {
        let res = ServerError::from(EngineError::KeyNotFound("x".to_string())).into_response();
        assert_eq!(res.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn engine_conflict_maps_to_409() {
        let res = ServerError::from(EngineError::Conflict {
            code: "duplicate_bank",
            message: "bank already exists",
        })
        .into_response();
        assert_eq!(res.status(), StatusCode::CONFLICT);
    }

    #[test]
    fn database_error_maps_to_500() {
        let err = EngineError::Database(sea_orm::DbErr::Custom("disk I/O error".to_string()));
        let res = ServerError::from(err).into_response();
        assert_eq!(res.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn method_not_allowed_maps_to_405() {
        let res = ServerError::MethodNotAllowed.into_response();
        assert_eq!(res.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[test]
    fn ids_must_be_positive_integers() {
        assert_eq!(parse_id("12", "bank").unwrap(), 12);
        for raw in ["0", "-4", "abc", "1.5", ""] {
            let Err(ServerError::InvalidId(message)) = parse_id(raw, "bank") else {
                panic!("{raw} should be rejected");
            };
            assert_eq!(message, "bank id must be a positive integer");
        }
    }
}
