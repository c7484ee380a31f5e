//! Error types for the counter service

use thiserror::Error;

use crate::counters::CounterError;

/// Main application error type
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network or IO error
    #[error("IO error")]
    Io(#[from] std::io::Error),

    /// Address parsing error
    #[error("Address parse error")]
    AddrParse(#[from] std::net::AddrParseError),

    /// Rejected counter operation
    #[error(transparent)]
    Counter(#[from] CounterError),
}

/// Convenient alias for Result with application error
pub type Result<T> = std::result::Result<T, AppError>;
