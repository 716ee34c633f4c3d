/// Get-book HTTP Lambda entry point
///
/// Serves GET /books/{id}. Parses the path id and returns the matching
/// book under `data`.
use books_api::application::{ApiResponse, GetBookHandler};
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
                ApiResponse::server_error("Internal Server Error", err.to_string())
                    .into_response(),
            );
        }
    };

    let book_id = event
        .path_parameters_ref()
        .and_then(|params| params.first("id"));

    info!(book_id = ?book_id, "get book request received");

    let get_handler = GetBookHandler::new(books.clone());
    Ok(get_handler.handle(book_id).await.into_response())
}
