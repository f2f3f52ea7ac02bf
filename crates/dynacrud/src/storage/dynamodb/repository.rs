//! DynamoDB repository implementation.
//!
//! Implements `RecordRepository` from `dynacrud_core::storage` using DynamoDB.

use std::collections::HashMap;

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client;

use dynacrud_core::expression::{equality_condition, set_update, Expression};
use dynacrud_core::id::generate_id;
use dynacrud_core::record::with_id;
use dynacrud_core::storage::{
    validate_collection, validate_update_attributes, RecordRepository, RepositoryError, Result,
};
use dynacrud_core::{Record, ID_FIELD};

use super::conversions::{expression_values, item_to_record, record_to_item, Item};
use super::error::{
    map_delete_item_error, map_get_item_error, map_put_item_error, map_query_error,
    map_scan_error, map_update_item_error,
};

/// Name alias for the key attribute in guard conditions.
const KEY_ALIAS: &str = "#id";

/// DynamoDB-based repository implementation.
///
/// Holds a single client handle; every collection is a table keyed on `id`.
#[derive(Debug, Clone)]
pub struct DynamoDbRepository {
    client: Client,
}

impl DynamoDbRepository {
    /// Creates a new repository with the given DynamoDB client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    async fn query_by_key(&self, collection: &str, condition: Expression) -> Result<Page> {
        let output = self
            .client
            .query()
            .table_name(collection)
            .key_condition_expression(condition.expression)
            .set_expression_attribute_names(Some(condition.names.into_iter().collect()))
            .set_expression_attribute_values(Some(expression_values(&condition.values)))
            .send()
            .await
            .map_err(map_query_error)?;

        Ok(Page {
            items: output.items.unwrap_or_default(),
            truncated: output.last_evaluated_key.is_some(),
        })
    }

    async fn scan(&self, collection: &str, filter: Option<Expression>) -> Result<Page> {
        let mut request = self.client.scan().table_name(collection);

        if let Some(filter) = filter {
            request = request
                .filter_expression(filter.expression)
                .set_expression_attribute_names(Some(filter.names.into_iter().collect()))
                .set_expression_attribute_values(Some(expression_values(&filter.values)));
        }

        let output = request.send().await.map_err(map_scan_error)?;

        Ok(Page {
            items: output.items.unwrap_or_default(),
            truncated: output.last_evaluated_key.is_some(),
        })
    }
}

/// One page of items from a Query or Scan.
struct Page {
    items: Vec<Item>,
    truncated: bool,
}

/// True when `params` filters on the partition key alone, which DynamoDB can
/// serve with a Query. Any other field needs a Scan filter.
fn is_key_lookup(params: &Record) -> bool {
    params.len() == 1 && params.contains_key(ID_FIELD)
}

fn key(id: &str) -> AttributeValue {
    AttributeValue::S(id.to_string())
}

#[async_trait]
impl RecordRepository for DynamoDbRepository {
    async fn create(&self, collection: &str, attributes: Record) -> Result<Record> {
        validate_collection(collection)?;

        let id = generate_id(collection);
        let record = with_id(attributes, id.clone());

        self.client
            .put_item()
            .table_name(collection)
            .set_item(Some(record_to_item(&record)))
            .condition_expression(format!("attribute_not_exists({KEY_ALIAS})"))
            .expression_attribute_names(KEY_ALIAS, ID_FIELD)
            .send()
            .await
            .map_err(|e| map_put_item_error(e, collection, &id))?;

        tracing::debug!(collection, %id, "Record created");
        Ok(record)
    }

    async fn find_all(&self, collection: &str, params: &Record) -> Result<Vec<Record>> {
        validate_collection(collection)?;

        let page = match equality_condition(params) {
            Some(condition) if is_key_lookup(params) => {
                self.query_by_key(collection, condition).await?
            }
            filter => self.scan(collection, filter).await?,
        };

        if page.truncated {
            tracing::warn!(
                collection,
                returned = page.items.len(),
                "More results are available; only the first page is returned"
            );
        }

        tracing::debug!(collection, count = page.items.len(), "Records listed");
        page.items.iter().map(item_to_record).collect()
    }

    async fn find_by_id(&self, collection: &str, id: &str) -> Result<Option<Record>> {
        validate_collection(collection)?;

        let result = self
            .client
            .get_item()
            .table_name(collection)
            .key(ID_FIELD, key(id))
            .send()
            .await
            .map_err(map_get_item_error)?;

        match result.item {
            Some(item) => Ok(Some(item_to_record(&item)?)),
            None => Ok(None),
        }
    }

    async fn update(&self, collection: &str, id: &str, attributes: Record) -> Result<Record> {
        validate_collection(collection)?;
        validate_update_attributes(&attributes)?;

        let update = set_update(&attributes).ok_or_else(|| {
            RepositoryError::InvalidInput("update requires at least one attribute".to_string())
        })?;

        let mut names: HashMap<String, String> = update.names.into_iter().collect();
        names.insert(KEY_ALIAS.to_string(), ID_FIELD.to_string());

        let result = self
            .client
            .update_item()
            .table_name(collection)
            .key(ID_FIELD, key(id))
            .update_expression(update.expression)
            .condition_expression(format!("attribute_exists({KEY_ALIAS})"))
            .set_expression_attribute_names(Some(names))
            .set_expression_attribute_values(Some(expression_values(&update.values)))
            .return_values(ReturnValue::AllNew)
            .send()
            .await
            .map_err(|e| map_update_item_error(e, collection, id))?;

        let item = result.attributes.ok_or_else(|| {
            RepositoryError::QueryFailed("UpdateItem returned no attributes".to_string())
        })?;

        tracing::debug!(collection, id, fields = attributes.len(), "Record updated");
        item_to_record(&item)
    }

    async fn destroy(&self, collection: &str, id: &str) -> Result<bool> {
        validate_collection(collection)?;

        let result = self
            .client
            .delete_item()
            .table_name(collection)
            .key(ID_FIELD, key(id))
            .return_values(ReturnValue::AllOld)
            .send()
            .await
            .map_err(map_delete_item_error)?;

        let deleted = result.attributes.is_some();
        tracing::debug!(collection, id, deleted, "Record destroyed");
        Ok(deleted)
    }
}
