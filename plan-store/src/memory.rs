//! In-memory contact store for tests and previews.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use plan_core::ContactInfo;
use serde_json::Value;
use tracing::warn;

use crate::store::{CONTACT_KEY, ContactStore, StoreError};

/// Keeps records as raw JSON values so tests can plant malformed entries
/// and verify the degraded-load behavior.
#[derive(Default)]
pub struct MemoryStore {
    records: Mutex<HashMap<String, Value>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a raw value under `key`, bypassing serialization.
    pub fn insert_raw(
        &self,
        key: &str,
        value: Value,
    ) {
        if let Ok(mut records) = self.records.lock() {
            records.insert(key.to_string(), value);
        }
    }

    pub fn contains_contact(&self) -> bool {
        self.records
            .lock()
            .map(|records| records.contains_key(CONTACT_KEY))
            .unwrap_or(false)
    }
}

#[async_trait]
impl ContactStore for MemoryStore {
    async fn load(&self) -> Result<Option<ContactInfo>, StoreError> {
        let record = match self.records.lock() {
            Ok(records) => records.get(CONTACT_KEY).cloned(),
            Err(_) => None,
        };

        let Some(record) = record else {
            return Ok(None);
        };

        match serde_json::from_value::<ContactInfo>(record) {
            Ok(contact) => Ok(Some(contact)),
            Err(e) => {
                warn!(error = %e, "stored contact record is malformed; treating as absent");
                Ok(None)
            }
        }
    }

    async fn save(
        &self,
        contact: &ContactInfo,
    ) -> Result<(), StoreError> {
        let value = serde_json::to_value(contact)?;
        if let Ok(mut records) = self.records.lock() {
            records.insert(CONTACT_KEY.to_string(), value);
        }
        Ok(())
    }
}
