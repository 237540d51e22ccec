//! Countries API endpoint (read-only).

use axum::{Json, extract::State};
use engine::Country;

use crate::{ServerError, server::ServerState};

pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<Country>>, ServerError> {
    Ok(Json(state.engine.list_countries().await?))
}
