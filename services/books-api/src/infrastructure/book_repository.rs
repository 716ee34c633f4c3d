// Book store access
//
// The Books table is schemaless beyond its numeric `id` key, so reads and
// writes move raw `serde_json::Value` documents. Conversion between items
// and JSON goes through serde_dynamo.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::{AttributeValue, ReturnValue};
use aws_sdk_dynamodb::Client as DynamoDbClient;
use serde_dynamo::aws_sdk_dynamodb_1::{from_item, from_items, to_item};
use serde_json::Value;
use thiserror::Error;

use crate::domain::BookUpdate;

/// Error type for book store operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum BookRepositoryError {
    /// A DynamoDB write failed
    #[error("Write error: {0}")]
    WriteError(String),

    /// A DynamoDB read failed
    #[error("Read error: {0}")]
    ReadError(String),

    /// Item conversion to or from JSON failed
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Persistence operations for catalog books.
///
/// Abstracted as a trait so handlers can run against an in-memory mock in
/// tests.
#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Fetch one book by id.
    ///
    /// # Returns
    /// * `Ok(Some(Value))` - the stored document, verbatim
    /// * `Ok(None)` - no book under that id
    async fn get(&self, id: i64) -> Result<Option<Value>, BookRepositoryError>;

    /// Fetch every book the table returns in one Scan call.
    async fn scan_all(&self) -> Result<Vec<Value>, BookRepositoryError>;

    /// Store a document verbatim. An existing item under the same id is
    /// overwritten silently.
    async fn put(&self, item: &Value) -> Result<(), BookRepositoryError>;

    /// Write all five well-known attributes of a book.
    ///
    /// Every attribute in the update expression is always written: a `None`
    /// field becomes a stored NULL, so a partial payload clears whatever it
    /// omits. The write upserts, so an unknown id creates a sparse item.
    ///
    /// # Returns
    /// The written attribute map (UPDATED_NEW), nulls included.
    async fn update(&self, id: i64, update: &BookUpdate) -> Result<Value, BookRepositoryError>;

    /// Delete one book by id. Deleting an absent id is not an error.
    async fn delete(&self, id: i64) -> Result<(), BookRepositoryError>;

    /// Scan the table and delete every item found, concurrently.
    ///
    /// All-or-nothing from the caller's point of view: the first failed
    /// delete fails the whole call, but items already deleted by then stay
    /// deleted. There is no partial-failure reporting.
    ///
    /// # Returns
    /// The number of items the scan found (0 means the table was empty and
    /// nothing was deleted).
    async fn delete_all(&self) -> Result<usize, BookRepositoryError>;
}

/// DynamoDB implementation of BookRepository.
#[derive(Debug, Clone)]
pub struct DynamoBookRepository {
    /// DynamoDB client
    client: DynamoDbClient,
    /// Books table name
    table_name: String,
}

impl DynamoBookRepository {
    /// Create a new DynamoBookRepository.
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    /// Key attribute for a numeric book id.
    fn id_key(id: i64) -> AttributeValue {
        AttributeValue::N(id.to_string())
    }

    /// Update-expression value for an optional field: the string when
    /// present, NULL when omitted.
    fn string_or_null(field: &Option<String>) -> AttributeValue {
        match field {
            Some(value) => AttributeValue::S(value.clone()),
            None => AttributeValue::Null(true),
        }
    }
}

#[async_trait]
impl BookRepository for DynamoBookRepository {
    async fn get(&self, id: i64) -> Result<Option<Value>, BookRepositoryError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("id", Self::id_key(id))
            .send()
            .await
            .map_err(|e| BookRepositoryError::ReadError(e.into_service_error().to_string()))?;

        match result.item {
            Some(item) => {
                let value = from_item(item)
                    .map_err(|e| BookRepositoryError::SerializationError(e.to_string()))?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }

    async fn scan_all(&self) -> Result<Vec<Value>, BookRepositoryError> {
        // One Scan call. Results past DynamoDB's single-page limit are not
        // fetched; the catalog is expected to stay far below it.
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| BookRepositoryError::ReadError(e.into_service_error().to_string()))?;

        let items = result.items.unwrap_or_default();
        from_items(items).map_err(|e| BookRepositoryError::SerializationError(e.to_string()))
    }

    async fn put(&self, item: &Value) -> Result<(), BookRepositoryError> {
        let attributes = to_item(item)
            .map_err(|e| BookRepositoryError::SerializationError(e.to_string()))?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(attributes))
            .send()
            .await
            .map_err(|e| BookRepositoryError::WriteError(e.into_service_error().to_string()))?;

        Ok(())
    }

    async fn update(&self, id: i64, update: &BookUpdate) -> Result<Value, BookRepositoryError> {
        let result = self
            .client
            .update_item()
            .table_name(&self.table_name)
            .key("id", Self::id_key(id))
            .update_expression(
                "set #title = :title, #author = :author, #genre = :genre, \
                 #description = :description, #publicationDate = :publicationDate",
            )
            .expression_attribute_names("#title", "title")
            .expression_attribute_names("#author", "author")
            .expression_attribute_names("#genre", "genre")
            .expression_attribute_names("#description", "description")
            .expression_attribute_names("#publicationDate", "publicationDate")
            .expression_attribute_values(":title", Self::string_or_null(&update.title))
            .expression_attribute_values(":author", Self::string_or_null(&update.author))
            .expression_attribute_values(":genre", Self::string_or_null(&update.genre))
            .expression_attribute_values(":description", Self::string_or_null(&update.description))
            .expression_attribute_values(
                ":publicationDate",
                Self::string_or_null(&update.publication_date),
            )
            .return_values(ReturnValue::UpdatedNew)
            .send()
            .await
            .map_err(|e| BookRepositoryError::WriteError(e.into_service_error().to_string()))?;

        let attributes = result.attributes.unwrap_or_default();
        from_item(attributes).map_err(|e| BookRepositoryError::SerializationError(e.to_string()))
    }

    async fn delete(&self, id: i64) -> Result<(), BookRepositoryError> {
        self.client
            .delete_item()
            .table_name(&self.table_name)
            .key("id", Self::id_key(id))
            .send()
            .await
            .map_err(|e| BookRepositoryError::WriteError(e.into_service_error().to_string()))?;

        Ok(())
    }

    async fn delete_all(&self) -> Result<usize, BookRepositoryError> {
        let result = self
            .client
            .scan()
            .table_name(&self.table_name)
            .send()
            .await
            .map_err(|e| BookRepositoryError::ReadError(e.into_service_error().to_string()))?;

        let items = result.items.unwrap_or_default();
        if items.is_empty() {
            return Ok(0);
        }

        let total = items.len();

        // Each delete key reuses the scanned item's own id attribute, so
        // the value goes back out exactly as it was stored.
        let deletes = items
            .into_iter()
            .filter_map(|mut item| item.remove("id"))
            .map(|id| {
                self.client
                    .delete_item()
                    .table_name(&self.table_name)
                    .key("id", id)
                    .send()
            });

        for result in futures::future::join_all(deletes).await {
            result.map_err(|e| BookRepositoryError::WriteError(e.into_service_error().to_string()))?;
        }

        Ok(total)
    }
}
