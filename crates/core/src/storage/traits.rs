use async_trait::async_trait;

use crate::record::Record;

use super::Result;

/// Generic CRUD access to a collection of schemaless records.
///
/// Each call is a single round trip to the backing store. Implementations do
/// not retry, cache, or batch.
#[async_trait]
pub trait RecordRepository: Send + Sync {
    /// Persists `attributes` under a freshly generated `id` and returns the
    /// record as written.
    async fn create(&self, collection: &str, attributes: Record) -> Result<Record>;

    /// Returns the records whose fields equal every value in `params`.
    ///
    /// An empty `params` returns every record. Only the first page of results
    /// the store hands back is returned.
    async fn find_all(&self, collection: &str, params: &Record) -> Result<Vec<Record>>;

    /// Gets a record by its ID. A missing record is `Ok(None)`.
    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Record>>;

    /// Sets every field in `attributes` on an existing record and returns the
    /// record after the update.
    async fn update(&self, collection: &str, id: &str, attributes: Record) -> Result<Record>;

    /// Deletes a record by its ID. Returns whether a record was removed.
    async fn destroy(&self, collection: &str, id: &str) -> Result<bool>;
}
