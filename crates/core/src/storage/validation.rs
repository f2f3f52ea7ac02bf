//! Input checks shared by every repository backend.

use crate::record::{Record, ID_FIELD};

use super::{RepositoryError, Result};

/// Rejects empty (or whitespace-only) collection names.
pub fn validate_collection(collection: &str) -> Result<()> {
    if collection.trim().is_empty() {
        return Err(RepositoryError::InvalidInput(
            "collection name must not be empty".to_string(),
        ));
    }
    Ok(())
}

/// Rejects updates that would produce an empty `SET` or touch the key.
pub fn validate_update_attributes(attributes: &Record) -> Result<()> {
    if attributes.is_empty() {
        return Err(RepositoryError::InvalidInput(
            "update requires at least one attribute".to_string(),
        ));
    }
    if attributes.contains_key(ID_FIELD) {
        return Err(RepositoryError::InvalidInput(format!(
            "the `{ID_FIELD}` attribute cannot be updated"
        )));
    }
    Ok(())
}
