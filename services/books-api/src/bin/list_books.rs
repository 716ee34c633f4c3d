/// List-books HTTP Lambda entry point
///
/// Serves GET /books. Returns every book in the table, optionally
/// filtered to an exact `authorName` match.
use books_api::application::{ApiResponse, ListBooksHandler};
use books_api::infrastructure::{
    init_logging, CatalogConfig, CatalogConfigError, DynamoBookRepository,
};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use tokio::sync::OnceCell;
use tracing::{error, info};

/// Book repository instance, kept across warm invocations.
static BOOK_REPO: OnceCell<DynamoBookRepository> = OnceCell::const_new();

/// Repository accessor (initialized on the first invocation).
async fn book_repository() -> Result<&'static DynamoBookRepository, CatalogConfigError> {
    BOOK_REPO
        .get_or_try_init(|| async {
            let config = CatalogConfig::from_env().await?;
            Ok(DynamoBookRepository::new(
                config.client().clone(),
                config.books_table().to_string(),
            ))
        })
        .await
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize structured logging
    init_logging();

    run(service_fn(handler)).await
}

/// HTTP request handler
async fn handler(event: Request) -> Result<Response<Body>, Error> {
    let books = match book_repository().await {
        Ok(repo) => repo,
        Err(err) => {
            error!(error = %err, "failed to load configuration");
            return Ok(
                ApiResponse::server_error("Internal server error", err.to_string())
                    .into_response(),
            );
        }
    };

    let author_name = event
        .query_string_parameters_ref()
        .and_then(|params| params.first("authorName"));

    info!(author_name = ?author_name, "list books request received");

    let list_handler = ListBooksHandler::new(books.clone());
    Ok(list_handler.handle(author_name).await.into_response())
}
