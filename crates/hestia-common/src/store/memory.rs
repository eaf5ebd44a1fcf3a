//! In-memory store, used for tests and ephemeral sessions.

use std::collections::HashMap;

use super::PersistenceGateway;
use crate::errors::StoreError;

/// Volatile [`PersistenceGateway`] with an optional byte quota.
///
/// The quota covers the sum of all stored payloads, mimicking a browser
/// storage limit so quota failures can be exercised.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(bytes),
        }
    }

    pub fn set_quota(&mut self, bytes: Option<usize>) {
        self.quota = bytes;
    }

    pub fn contains(&self, namespace: &str) -> bool {
        self.entries.contains_key(namespace)
    }

    fn used_excluding(&self, namespace: &str) -> usize {
        self.entries
            .iter()
            .filter(|(k, _)| k.as_str() != namespace)
            .map(|(_, v)| v.len())
            .sum()
    }
}

impl PersistenceGateway for MemoryStore {
    fn load_raw(&self, namespace: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(namespace).cloned())
    }

    fn save_raw(&mut self, namespace: &str, payload: &str) -> Result<(), StoreError> {
        if let Some(quota) = self.quota {
            let available = quota.saturating_sub(self.used_excluding(namespace));
            if payload.len() > available {
                return Err(StoreError::QuotaExceeded {
                    namespace: namespace.to_string(),
                    needed: payload.len(),
                    available,
                });
            }
        }
        self.entries
            .insert(namespace.to_string(), payload.to_string());
        Ok(())
    }
}
