//! HTTP API module for the counter service
//!
//! Maps HTTP verbs on a counter name to registry operations.
//!
//! # Endpoints
//! - `POST /counters/{name}` — create a counter (201, or 409 if it exists)
//! - `PUT /counters/{name}` — increment a counter (200, or 404)
//! - `GET /counters/{name}` — read a counter (200, or 404)
//! - `DELETE /counters/{name}` — delete a counter (204, or 404)

pub mod handlers;

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::config::Config;
use crate::counters::CounterRegistry;

/// Application state shared with endpoints
pub struct AppState {
    pub config: Config,
    pub counters: CounterRegistry,
}

/// Creates the main Axum router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route(
            "/counters/{name}",
            post(handlers::create_counter)
                .put(handlers::update_counter)
                .get(handlers::get_counter)
                .delete(handlers::delete_counter),
        )
        .with_state(state)
}
