use async_trait::async_trait;
use game_types::StorageError;
use serde_json::Value;

/// Flat key-value storage with prefix scans, the only persistence
/// interface the game engine sees. Implementations: [`crate::SqlKvStore`]
/// for the binary, [`crate::MemoryKvStore`] for tests.
///
/// Writes are last-write-wins; there is no transaction spanning keys.
#[async_trait]
pub trait KvStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError>;

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError>;

    /// Deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StorageError>;

    /// All values whose key starts with `prefix`, in key order.
    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StorageError>;
}
