// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! In-memory counter registry
//!
//! Holds named counters and enforces their existence rules:
//! a name is present only between a successful create and delete.

mod registry;

#[cfg(test)]
mod tests;

use serde::Serialize;
use thiserror::Error;

pub use registry::CounterRegistry;

/// A counter name paired with its current value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Counter {
    pub name: String,
    pub value: u64,
}

/// Serializes as a single-entry object keyed by the counter name: `{"foo": 3}`
impl Serialize for Counter {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(1))?;
        map.serialize_entry(&self.name, &self.value)?;
        map.end()
    }
}

/// Rejected counter operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CounterError {
    /// Create was called for a name that is already registered
    #[error("Counter {0} already exists")]
    AlreadyExists(String),

    /// Increment, read or delete was called for an unknown name
    #[error("Counter {0} doesn't exist")]
    NotFound(String),
}

impl CounterError {
    /// Name of the counter the error refers to
    pub fn name(&self) -> &str {
        match self {
            CounterError::AlreadyExists(name) | CounterError::NotFound(name) => name,
        }
    }
}
