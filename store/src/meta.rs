//! Metadata storage trait.

use crate::StoreError;

/// Trait for storing ledger metadata (total supply, policy blob, etc.).
///
/// A generic key-value store for internal bookkeeping that doesn't belong in
/// any domain-specific store. Values are opaque bytes so the store never
/// depends on the crates that own the serialized types.
pub trait MetaStore {
    /// Store a metadata value.
    fn put_meta(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Retrieve a metadata value, `None` if absent.
    fn get_meta(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Delete a metadata entry.
    fn delete_meta(&self, key: &str) -> Result<(), StoreError>;
}
