//! Report Storage Abstraction
//!
//! Durable key-value storage for evaluation reports, surviving across
//! sessions. Keys are the exact input URL strings (not normalized), values
//! are serialized report JSON.

use async_trait::async_trait;

use crate::error::Result;

/// Durable key-value store for evaluation reports
///
/// This store is the source of truth across sessions; any in-memory caches
/// layered on top of it are session-scoped optimizations. All writes are
/// whole-entry replacements; there are no partial or merge updates.
///
/// # Example
///
/// ```ignore
/// use bridge_traits::storage::ReportStore;
///
/// async fn cache_aside(store: &dyn ReportStore, url: &str, json: &str) -> Result<()> {
///     if store.get(url).await?.is_none() {
///         store.put(url, json).await?;
///     }
///     Ok(())
/// }
/// ```
#[async_trait]
pub trait ReportStore: Send + Sync {
    /// Retrieve the stored value for a key
    ///
    /// Returns `Ok(None)` if the key doesn't exist.
    async fn get(&self, key: &str) -> Result<Option<String>>;

    /// Store a value, replacing any previous entry for the key
    async fn put(&self, key: &str, value: &str) -> Result<()>;

    /// Delete an entry
    async fn delete(&self, key: &str) -> Result<()>;

    /// Check if a key exists without retrieving it
    async fn has_key(&self, key: &str) -> Result<bool> {
        Ok(self.get(key).await?.is_some())
    }

    /// List all stored keys
    async fn list_keys(&self) -> Result<Vec<String>>;

    /// Clear all entries
    async fn clear_all(&self) -> Result<()>;
}
