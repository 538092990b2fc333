use crate::domain::error::DomainError;

/// Device-local string key-value storage.
///
/// Several applications may share one store, so callers only ever touch
/// their own keys.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, DomainError>;
    fn set(&self, key: &str, value: &str) -> Result<(), DomainError>;
    fn remove(&self, key: &str) -> Result<(), DomainError>;
}
