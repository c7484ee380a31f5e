// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Shared counter storage

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;
use tokio::sync::RwLock;

use super::{Counter, CounterError};

/// Process-wide map of counter name to value
///
/// Clones share the same storage. Every operation runs its
/// check-then-act sequence under one lock over the whole map.
#[derive(Clone, Default)]
pub struct CounterRegistry {
    counters: Arc<RwLock<HashMap<String, u64>>>,
}

impl CounterRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` with value 0
    pub async fn create(&self, name: &str) -> Result<Counter, CounterError> {
        let mut counters = self.counters.write().await;
        match counters.entry(name.to_string()) {
            Entry::Occupied(_) => {
                tracing::debug!("Counter {} already exists, create rejected", name);
                Err(CounterError::AlreadyExists(name.to_string()))
            }
            Entry::Vacant(slot) => {
                slot.insert(0);
                tracing::debug!("Created counter {}", name);
                Ok(Counter {
                    name: name.to_string(),
                    value: 0,
                })
            }
        }
    }

    /// Adds one to an existing counter and returns the new value
    pub async fn increment(&self, name: &str) -> Result<Counter, CounterError> {
        let mut counters = self.counters.write().await;
        let Some(value) = counters.get_mut(name) else {
            tracing::debug!("Counter {} not found, increment rejected", name);
            return Err(CounterError::NotFound(name.to_string()));
        };
        *value = value.saturating_add(1);
        tracing::debug!("Incremented counter {} to {}", name, value);
        Ok(Counter {
            name: name.to_string(),
            value: *value,
        })
    }

    /// Returns the current value without changing it
    pub async fn get(&self, name: &str) -> Result<Counter, CounterError> {
        let counters = self.counters.read().await;
        counters
            .get(name)
            .map(|&value| Counter {
                name: name.to_string(),
                value,
            })
            .ok_or_else(|| CounterError::NotFound(name.to_string()))
    }

    /// Removes a counter, returning its last value
    pub async fn delete(&self, name: &str) -> Result<u64, CounterError> {
        let mut counters = self.counters.write().await;
        match counters.remove(name) {
            Some(value) => {
                tracing::debug!("Deleted counter {} (last value {})", name, value);
                Ok(value)
            }
            None => {
                tracing::debug!("Counter {} not found, delete rejected", name);
                Err(CounterError::NotFound(name.to_string()))
            }
        }
    }

    /// Number of registered counters
    pub async fn len(&self) -> usize {
        self.counters.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.counters.read().await.is_empty()
    }
}
