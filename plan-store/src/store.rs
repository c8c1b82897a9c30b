use async_trait::async_trait;
use plan_core::ContactInfo;
use thiserror::Error;

/// Well-known key under which the trusted-contact record is stored.
pub const CONTACT_KEY: &str = "financialContactDetails";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("storage serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Durable client-side store for the single trusted-contact record.
///
/// `load` never fails on bad data: an absent or corrupt record is reported
/// as "no contact on file" (corruption is logged and discarded), so a
/// damaged store can never block the wizard from starting. `save` is
/// write-through and is called exactly once, after a successful report
/// export.
#[async_trait]
pub trait ContactStore: Send + Sync {
    async fn load(&self) -> Result<Option<ContactInfo>, StoreError>;

    async fn save(
        &self,
        contact: &ContactInfo,
    ) -> Result<(), StoreError>;
}
