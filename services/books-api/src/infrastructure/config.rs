// Runtime configuration for the catalog Lambdas

use aws_sdk_dynamodb::Client as DynamoDbClient;
use thiserror::Error;

/// Configuration error type.
#[derive(Debug, Error)]
pub enum CatalogConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
}

/// DynamoDB client plus the two table names the service uses.
///
/// Table names come from the environment:
/// - TABLE_NAME: the Books table
/// - CAST_TABLE_NAME: the BookCast table
///
/// Region and credentials are resolved by `aws-config` from the standard
/// environment.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Shared DynamoDB client instance
    client: DynamoDbClient,
    /// Books table name
    books_table: String,
    /// Cast table name
    cast_table: String,
}

impl CatalogConfig {
    /// Load AWS configuration from the environment and read both table
    /// names.
    pub async fn from_env() -> Result<Self, CatalogConfigError> {
        let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        let client = DynamoDbClient::new(&aws_config);

        let books_table = std::env::var("TABLE_NAME")
            .map_err(|_| CatalogConfigError::MissingEnvVar("TABLE_NAME".to_string()))?;

        let cast_table = std::env::var("CAST_TABLE_NAME")
            .map_err(|_| CatalogConfigError::MissingEnvVar("CAST_TABLE_NAME".to_string()))?;

        Ok(Self {
            client,
            books_table,
            cast_table,
        })
    }

    /// Build a CatalogConfig from explicit values (for tests).
    pub fn new(client: DynamoDbClient, books_table: String, cast_table: String) -> Self {
        Self {
            client,
            books_table,
            cast_table,
        }
    }

    /// Reference to the DynamoDB client.
    pub fn client(&self) -> &DynamoDbClient {
        &self.client
    }

    /// Books table name.
    pub fn books_table(&self) -> &str {
        &self.books_table
    }

    /// Cast table name.
    pub fn cast_table(&self) -> &str {
        &self.cast_table
    }
}
