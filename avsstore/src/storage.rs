//! Storage-backend trait boundary.
//!
//! Everything above this trait (the ContentDirectory action handlers, the
//! autoscan engine) is backend-agnostic; everything below it is a concrete
//! database. The trait is deliberately narrow: callers compile search/sort
//! criteria themselves via [`crate::search`] and pass the resulting SQL
//! fragments through, so the backend never has to understand the UPnP query
//! grammar.

use async_trait::async_trait;

use crate::error::StorageError;
use crate::model::CdsObject;

/// A page of `BrowseDirectChildren` / `Search` results.
#[derive(Debug, Clone, Default)]
pub struct BrowsePage {
    pub objects: Vec<CdsObject>,
    pub number_returned: u32,
    pub total_matches: u32,
    /// The containing container's `UpdateID` at the time of the browse.
    pub update_id: u64,
}

/// Thread-safe by contract: the core issues concurrent calls and does not
/// serialize access on the caller's side.
#[async_trait]
pub trait Storage: Send + Sync {
    async fn get_object(&self, id: i64) -> Result<CdsObject, StorageError>;

    async fn browse_children(
        &self,
        container_id: i64,
        starting_index: u32,
        requested_count: u32,
        sort_sql: &str,
    ) -> Result<BrowsePage, StorageError>;

    async fn search(
        &self,
        container_id: i64,
        predicate_sql: &str,
        starting_index: u32,
        requested_count: u32,
        sort_sql: &str,
    ) -> Result<BrowsePage, StorageError>;

    /// Inserts or replaces `object` under `parent_id`, bumping the parent's
    /// `UpdateID` and the global [`Storage::system_update_id`].
    async fn put_object(&self, parent_id: i64, object: CdsObject) -> Result<i64, StorageError>;

    async fn remove_object(&self, id: i64) -> Result<(), StorageError>;

    /// Monotonic counter bumped whenever any container's `UpdateID` bumps;
    /// polled by clients that did not subscribe to GENA events.
    async fn system_update_id(&self) -> Result<u64, StorageError>;

    async fn container_update_id(&self, container_id: i64) -> Result<u64, StorageError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{CdsContainer, CdsObjectBase};
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStorage {
        objects: Mutex<HashMap<i64, CdsObject>>,
        system_update_id: Mutex<u64>,
    }

    #[async_trait]
    impl Storage for MemoryStorage {
        async fn get_object(&self, id: i64) -> Result<CdsObject, StorageError> {
            self.objects.lock().unwrap().get(&id).cloned().ok_or(StorageError::ObjectNotFound(id))
        }

        async fn browse_children(
            &self,
            container_id: i64,
            _starting_index: u32,
            _requested_count: u32,
            _sort_sql: &str,
        ) -> Result<BrowsePage, StorageError> {
            let objects: Vec<_> = self
                .objects
                .lock()
                .unwrap()
                .values()
                .filter(|o| o.base().parent_id == container_id)
                .cloned()
                .collect();
            let number_returned = objects.len() as u32;
            Ok(BrowsePage { total_matches: number_returned, objects, number_returned, update_id: 0 })
        }

        async fn search(
            &self,
            container_id: i64,
            _predicate_sql: &str,
            starting_index: u32,
            requested_count: u32,
            sort_sql: &str,
        ) -> Result<BrowsePage, StorageError> {
            self.browse_children(container_id, starting_index, requested_count, sort_sql).await
        }

        async fn put_object(&self, parent_id: i64, object: CdsObject) -> Result<i64, StorageError> {
            let id = object.id();
            self.objects.lock().unwrap().insert(id, object);
            *self.system_update_id.lock().unwrap() += 1;
            let _ = parent_id;
            Ok(id)
        }

        async fn remove_object(&self, id: i64) -> Result<(), StorageError> {
            self.objects.lock().unwrap().remove(&id).ok_or(StorageError::ObjectNotFound(id))?;
            *self.system_update_id.lock().unwrap() += 1;
            Ok(())
        }

        async fn system_update_id(&self) -> Result<u64, StorageError> {
            Ok(*self.system_update_id.lock().unwrap())
        }

        async fn container_update_id(&self, _container_id: i64) -> Result<u64, StorageError> {
            Ok(*self.system_update_id.lock().unwrap())
        }
    }

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let storage = MemoryStorage::default();
        let object = CdsObject::Container(CdsContainer {
            base: CdsObjectBase { id: 1, parent_id: 0, upnp_class: "object.container".into(), ..Default::default() },
            ..Default::default()
        });
        storage.put_object(0, object.clone()).await.unwrap();
        assert_eq!(storage.get_object(1).await.unwrap(), object);
        assert_eq!(storage.system_update_id().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn missing_object_is_not_found() {
        let storage = MemoryStorage::default();
        assert!(matches!(storage.get_object(42).await, Err(StorageError::ObjectNotFound(42))));
    }
}
