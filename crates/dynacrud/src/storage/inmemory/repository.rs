//! In-memory repository implementation.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use dynacrud_core::id::generate_id;
use dynacrud_core::record::{matches, merge, record_id, with_id};
use dynacrud_core::storage::{
    validate_collection, validate_update_attributes, RecordRepository, RepositoryError, Result,
};
use dynacrud_core::Record;

type Collection = BTreeMap<String, Record>;

/// In-memory storage backend for testing.
///
/// Collections are created on first write and records are kept ordered by ID.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    collections: Arc<RwLock<HashMap<String, Collection>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            collections: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Inserts a record that already carries its `id`, refusing to overwrite.
    async fn insert_new(&self, collection: &str, record: Record) -> Result<Record> {
        let id = record_id(&record)
            .ok_or_else(|| RepositoryError::InvalidInput("record has no string `id`".to_string()))?
            .to_string();

        let mut collections = self.collections.write().await;
        let records = collections.entry(collection.to_string()).or_default();
        if records.contains_key(&id) {
            return Err(RepositoryError::AlreadyExists {
                collection: collection.to_string(),
                id,
            });
        }
        records.insert(id, record.clone());
        Ok(record)
    }
}

#[async_trait]
impl RecordRepository for InMemoryRepository {
    async fn create(&self, collection: &str, attributes: Record) -> Result<Record> {
        validate_collection(collection)?;
        let record = with_id(attributes, generate_id(collection));
        self.insert_new(collection, record).await
    }

    async fn find_all(&self, collection: &str, params: &Record) -> Result<Vec<Record>> {
        validate_collection(collection)?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .map(|records| {
                records
                    .values()
                    .filter(|record| matches(record, params))
                    .cloned()
                    .collect()
            })
            .unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Record>> {
        validate_collection(collection)?;
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|records| records.get(id))
            .cloned())
    }

    async fn update(&self, collection: &str, id: &str, attributes: Record) -> Result<Record> {
        validate_collection(collection)?;
        validate_update_attributes(&attributes)?;

        let mut collections = self.collections.write().await;
        let record = collections
            .get_mut(collection)
            .and_then(|records| records.get_mut(id))
            .ok_or_else(|| RepositoryError::NotFound {
                collection: collection.to_string(),
                id: id.to_string(),
            })?;

        merge(record, &attributes);
        Ok(record.clone())
    }

    async fn destroy(&self, collection: &str, id: &str) -> Result<bool> {
        validate_collection(collection)?;
        let mut collections = self.collections.write().await;
        Ok(collections
            .get_mut(collection)
            .and_then(|records| records.remove(id))
            .is_some())
    }
}
