use async_trait::async_trait;
use game_types::StorageError;
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use serde_json::Value;

use crate::entities::{kv_entry, prelude::KvEntry};
use crate::kv::KvStore;

fn db_err(err: DbErr) -> StorageError {
    StorageError(err.to_string())
}

/// SQL-backed store: a single `kv_store` table with a text primary key and
/// a JSON value column.
pub struct SqlKvStore {
    db: DatabaseConnection,
}

impl SqlKvStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl KvStore for SqlKvStore {
    async fn get(&self, key: &str) -> Result<Option<Value>, StorageError> {
        let entry = KvEntry::find_by_id(key.to_owned())
            .one(&self.db)
            .await
            .map_err(db_err)?;
        Ok(entry.map(|model| model.value))
    }

    async fn set(&self, key: &str, value: Value) -> Result<(), StorageError> {
        let entry = kv_entry::ActiveModel {
            key: ActiveValue::Set(key.to_owned()),
            value: ActiveValue::Set(value),
        };

        KvEntry::insert(entry)
            .on_conflict(
                OnConflict::column(kv_entry::Column::Key)
                    .update_column(kv_entry::Column::Value)
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<(), StorageError> {
        KvEntry::delete_by_id(key.to_owned())
            .exec(&self.db)
            .await
            .map_err(db_err)?;
        Ok(())
    }

    async fn get_by_prefix(&self, prefix: &str) -> Result<Vec<Value>, StorageError> {
        let entries = KvEntry::find()
            .filter(kv_entry::Column::Key.starts_with(prefix))
            .order_by_asc(kv_entry::Column::Key)
            .all(&self.db)
            .await
            .map_err(db_err)?;

        Ok(entries.into_iter().map(|model| model.value).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::connect_to_memory_database;
    use migration::{Migrator, MigratorTrait};
    use serde_json::json;

    async fn memory_store() -> SqlKvStore {
        let db = connect_to_memory_database().await.unwrap();
        Migrator::up(&db, None).await.unwrap();
        SqlKvStore::new(db)
    }

    #[tokio::test]
    async fn test_set_get_roundtrip() {
        let store = memory_store().await;

        store.set("game:ABC234", json!({"code": "ABC234"})).await.unwrap();
        let value = store.get("game:ABC234").await.unwrap();
        assert_eq!(value, Some(json!({"code": "ABC234"})));
    }

    #[tokio::test]
    async fn test_set_overwrites() {
        let store = memory_store().await;

        store.set("k", json!(1)).await.unwrap();
        store.set("k", json!(2)).await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), Some(json!(2)));
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = memory_store().await;

        store.set("k", json!(1)).await.unwrap();
        store.delete("k").await.unwrap();
        store.delete("k").await.unwrap();
        assert_eq!(store.get("k").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_prefix_scan_is_bounded() {
        let store = memory_store().await;

        store.set("player:AAA:1", json!("a1")).await.unwrap();
        store.set("player:AAA:2", json!("a2")).await.unwrap();
        store.set("player:AAB:1", json!("b1")).await.unwrap();

        let values = store.get_by_prefix("player:AAA:").await.unwrap();
        assert_eq!(values, vec![json!("a1"), json!("a2")]);
    }
}
