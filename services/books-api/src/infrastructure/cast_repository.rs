// Cast store access
//
// Lookups against the BookCast table: partition key `bookId`, sort key
// `authorName`, and a `roleIx` local secondary index sorted by `roleName`.
// Which key condition runs is decided entirely by the CastQuery shape.

use async_trait::async_trait;
use aws_sdk_dynamodb::types::AttributeValue;
use aws_sdk_dynamodb::Client as DynamoDbClient;
use serde_dynamo::aws_sdk_dynamodb_1::from_items;
use serde_json::Value;
use thiserror::Error;

use crate::domain::CastQuery;

/// Local secondary index over `roleName`
const ROLE_INDEX_NAME: &str = "roleIx";

/// Error type for cast store operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CastRepositoryError {
    /// The DynamoDB query failed
    #[error("Query error: {0}")]
    QueryError(String),

    /// Item conversion to JSON failed
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Read operations for cast members.
#[async_trait]
pub trait CastRepository: Send + Sync {
    /// Run one of the three supported cast queries.
    ///
    /// # Returns
    /// The matching items verbatim, in the queried key's sort order. An
    /// empty result is not an error.
    async fn query(&self, query: &CastQuery) -> Result<Vec<Value>, CastRepositoryError>;
}

/// DynamoDB implementation of CastRepository.
#[derive(Debug, Clone)]
pub struct DynamoCastRepository {
    /// DynamoDB client
    client: DynamoDbClient,
    /// Cast table name
    table_name: String,
}

impl DynamoCastRepository {
    /// Create a new DynamoCastRepository.
    pub fn new(client: DynamoDbClient, table_name: String) -> Self {
        Self { client, table_name }
    }

    fn book_key(book_id: i64) -> AttributeValue {
        AttributeValue::N(book_id.to_string())
    }
}

#[async_trait]
impl CastRepository for DynamoCastRepository {
    async fn query(&self, query: &CastQuery) -> Result<Vec<Value>, CastRepositoryError> {
        let builder = self.client.query().table_name(&self.table_name);

        // Each shape binds exactly its own expression values; nothing
        // carries over from one branch to another.
        let builder = match query {
            CastQuery::ForBook { book_id } => builder
                .key_condition_expression("bookId = :bookId")
                .expression_attribute_values(":bookId", Self::book_key(*book_id)),

            CastQuery::AuthorPrefix { book_id, prefix } => builder
                .key_condition_expression("bookId = :bookId and begins_with(authorName, :author)")
                .expression_attribute_values(":bookId", Self::book_key(*book_id))
                .expression_attribute_values(":author", AttributeValue::S(prefix.clone())),

            CastQuery::RolePrefix { book_id, prefix } => builder
                .index_name(ROLE_INDEX_NAME)
                .key_condition_expression("bookId = :bookId and begins_with(roleName, :role)")
                .expression_attribute_values(":bookId", Self::book_key(*book_id))
                .expression_attribute_values(":role", AttributeValue::S(prefix.clone())),
        };

        let result = builder
            .send()
            .await
            .map_err(|e| CastRepositoryError::QueryError(e.into_service_error().to_string()))?;

        let items = result.items.unwrap_or_default();
        from_items(items).map_err(|e| CastRepositoryError::SerializationError(e.to_string()))
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::domain::CastMember;
    use std::sync::{Arc, Mutex};

    // ==================== Error type tests ====================

    #[test]
    fn test_cast_repository_error_query_error_display() {
        let error = CastRepositoryError::QueryError("index not found".to_string());
        assert_eq!(error.to_string(), "Query error: index not found");
    }

    #[test]
    fn test_cast_repository_error_serialization_error_display() {
        let error = CastRepositoryError::SerializationError("bad item".to_string());
        assert_eq!(error.to_string(), "Serialization error: bad item");
    }

    // ==================== Mock cast repository ====================

    /// In-memory CastRepository evaluating queries the way the table's
    /// keys would: per-book partition, prefix match on the branch's sort
    /// key, results in that key's order.
    #[derive(Debug, Clone)]
    pub struct MockCastRepository {
        members: Arc<Mutex<Vec<CastMember>>>,
        /// Last query received, for shape assertions
        last_query: Arc<Mutex<Option<CastQuery>>>,
        /// Error returned by the next operation (single-shot)
        next_error: Arc<Mutex<Option<CastRepositoryError>>>,
    }

    impl MockCastRepository {
        pub fn new() -> Self {
            Self {
                members: Arc::new(Mutex::new(Vec::new())),
                last_query: Arc::new(Mutex::new(None)),
                next_error: Arc::new(Mutex::new(None)),
            }
        }

        pub fn insert_member(&self, member: CastMember) {
            self.members.lock().unwrap().push(member);
        }

        pub fn set_next_error(&self, error: CastRepositoryError) {
            *self.next_error.lock().unwrap() = Some(error);
        }

        pub fn last_query(&self) -> Option<CastQuery> {
            self.last_query.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CastRepository for MockCastRepository {
        async fn query(&self, query: &CastQuery) -> Result<Vec<Value>, CastRepositoryError> {
            *self.last_query.lock().unwrap() = Some(query.clone());

            if let Some(error) = self.next_error.lock().unwrap().take() {
                return Err(error);
            }

            let members = self.members.lock().unwrap();
            let mut selected: Vec<CastMember> = members
                .iter()
                .filter(|member| member.book_id == query.book_id())
                .cloned()
                .collect();

            match query {
                CastQuery::ForBook { .. } => {
                    selected.sort_by(|a, b| a.author_name.cmp(&b.author_name));
                }
                CastQuery::AuthorPrefix { prefix, .. } => {
                    selected.retain(|member| member.author_name.starts_with(prefix));
                    selected.sort_by(|a, b| a.author_name.cmp(&b.author_name));
                }
                CastQuery::RolePrefix { prefix, .. } => {
                    selected.retain(|member| member.role_name.starts_with(prefix));
                    selected.sort_by(|a, b| a.role_name.cmp(&b.role_name));
                }
            }

            Ok(selected
                .iter()
                .map(|member| serde_json::to_value(member).unwrap())
                .collect())
        }
    }

    // ==================== Mock behavior tests ====================

    fn member(book_id: i64, author: &str, role: &str) -> CastMember {
        CastMember {
            book_id,
            author_name: author.to_string(),
            role_name: role.to_string(),
            role_description: format!("{role} of the story"),
        }
    }

    #[tokio::test]
    async fn test_mock_for_book_returns_only_that_book() {
        let repo = MockCastRepository::new();
        repo.insert_member(member(1, "Harper Lee", "Scout Finch"));
        repo.insert_member(member(2, "George Orwell", "Winston Smith"));

        let items = repo.query(&CastQuery::ForBook { book_id: 1 }).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["roleName"], "Scout Finch");
    }

    #[tokio::test]
    async fn test_mock_author_prefix_filters_on_author_name() {
        let repo = MockCastRepository::new();
        repo.insert_member(member(1, "Harper Lee", "Scout Finch"));
        repo.insert_member(member(1, "Harold Bloom", "Narrator"));

        let items = repo
            .query(&CastQuery::AuthorPrefix {
                book_id: 1,
                prefix: "Harper".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["authorName"], "Harper Lee");
    }

    #[tokio::test]
    async fn test_mock_role_prefix_filters_on_role_name() {
        let repo = MockCastRepository::new();
        repo.insert_member(member(4, "Jane Austen", "Elizabeth Bennet"));
        repo.insert_member(member(4, "Jane Austen", "Mr. Darcy"));

        let items = repo
            .query(&CastQuery::RolePrefix {
                book_id: 4,
                prefix: "Eliza".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0]["roleName"], "Elizabeth Bennet");
    }

    #[tokio::test]
    async fn test_mock_records_last_query() {
        let repo = MockCastRepository::new();
        let query = CastQuery::ForBook { book_id: 3 };

        repo.query(&query).await.unwrap();

        assert_eq!(repo.last_query(), Some(query));
    }
}
