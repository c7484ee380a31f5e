use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::AppState;
use crate::counters::{Counter, CounterError};

/// Body returned for rejected counter operations
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(rename = "Message")]
    pub message: String,
}

impl IntoResponse for CounterError {
    fn into_response(self) -> Response {
        let status = match self {
            CounterError::AlreadyExists(_) => StatusCode::CONFLICT,
            CounterError::NotFound(_) => StatusCode::NOT_FOUND,
        };
        let body = MessageResponse {
            message: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// POST /counters/{name}
pub async fn create_counter(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<Counter>), CounterError> {
    tracing::info!("Request to create counter: {}", name);
    let counter = state.counters.create(&name).await?;
    Ok((StatusCode::CREATED, Json(counter)))
}

/// PUT /counters/{name}
pub async fn update_counter(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Counter>, CounterError> {
    tracing::info!("Request to update counter: {}", name);
    let counter = state.counters.increment(&name).await?;
    Ok(Json(counter))
}

/// GET /counters/{name}
pub async fn get_counter(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Counter>, CounterError> {
    tracing::info!("Request to get counter: {}", name);
    let counter = state.counters.get(&name).await?;
    Ok(Json(counter))
}

/// DELETE /counters/{name}
///
/// Responds with 204 and no body.
pub async fn delete_counter(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<StatusCode, CounterError> {
    tracing::info!("Request to delete counter: {}", name);
    state.counters.delete(&name).await?;
    Ok(StatusCode::NO_CONTENT)
}
