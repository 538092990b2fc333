use crate::domain::error::DomainError;
use async_trait::async_trait;

/// Shared, read-only seed document used when a device has no ledger yet.
#[async_trait]
pub trait SeedSource: Send + Sync {
    /// Where the document is read from, for logging.
    fn location(&self) -> String;

    /// Fetch the raw document body.
    async fn fetch(&self) -> Result<String, DomainError>;
}
