//! JSON-file-backed contact store.
//!
//! The store is a single JSON object document; the contact record lives
//! under [`CONTACT_KEY`]. Unrelated keys in the document are preserved
//! across saves so other features can share the file.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use plan_core::ContactInfo;
use serde_json::Value;
use tracing::{debug, warn};

use crate::store::{CONTACT_KEY, ContactStore, StoreError};

pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the backing document, treating a missing file as empty and a
    /// corrupt file as empty (logged and discarded).
    async fn read_document(&self) -> Result<BTreeMap<String, Value>, StoreError> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(StoreError::Io(e)),
        };

        match serde_json::from_str(&raw) {
            Ok(document) => Ok(document),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "contact store is corrupt; discarding its contents"
                );
                Ok(BTreeMap::new())
            }
        }
    }
}

#[async_trait]
impl ContactStore for JsonFileStore {
    async fn load(&self) -> Result<Option<ContactInfo>, StoreError> {
        let document = self.read_document().await?;

        let Some(record) = document.get(CONTACT_KEY) else {
            return Ok(None);
        };

        match serde_json::from_value::<ContactInfo>(record.clone()) {
            Ok(contact) => Ok(Some(contact)),
            Err(e) => {
                warn!(
                    path = %self.path.display(),
                    error = %e,
                    "stored contact record is malformed; treating as absent"
                );
                Ok(None)
            }
        }
    }

    async fn save(
        &self,
        contact: &ContactInfo,
    ) -> Result<(), StoreError> {
        let mut document = self.read_document().await?;
        document.insert(CONTACT_KEY.to_string(), serde_json::to_value(contact)?);

        let raw = serde_json::to_string_pretty(&document)?;
        tokio::fs::write(&self.path, raw).await?;
        debug!(path = %self.path.display(), "contact record persisted");
        Ok(())
    }
}
