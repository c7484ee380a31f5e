// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! # Counter Service
//!
//! RESTful service that tracks named integer counters in memory.
//!
//! Counters are created, incremented, read and deleted by name through
//! `/counters/{name}`. State lives only as long as the process.
//!
//! ## Main modules
//! - `api`: HTTP API handlers
//! - `config`: configuration management
//! - `counters`: counter registry
//! - `error`: error types
//! - `prelude`: commonly used types and traits

mod api;
mod config;
mod counters;
mod error;
pub mod prelude;

// Re-export commonly used types
/// Application configuration
pub use config::Config;

/// Application error and result type
pub use error::{AppError, Result};

/// HTTP API router and state
pub use api::{AppState, create_router};

/// Error body for rejected requests
pub use api::handlers::MessageResponse;

/// Counter registry and its value/error types
pub use counters::{Counter, CounterError, CounterRegistry};
