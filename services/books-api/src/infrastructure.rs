// Infrastructure layer modules
pub mod book_repository;
pub mod cast_repository;
pub mod config;
pub mod logging;
pub mod translator;

// Re-exports
pub use book_repository::{BookRepository, BookRepositoryError, DynamoBookRepository};
pub use cast_repository::{CastRepository, CastRepositoryError, DynamoCastRepository};
pub use config::{CatalogConfig, CatalogConfigError};
pub use logging::init_logging;
pub use translator::{AwsTranslator, TranslateError, Translator};
