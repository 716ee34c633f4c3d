/// Add-book HTTP Lambda entry point
///
/// Serves POST /books. Stores the JSON request body as a new book,
/// overwriting any existing item with the same id.
use books_api::application::{AddBookHandler, ApiResponse};
use books_api::infrastructure::{
    init_logging, CatalogConfig, CatalogConfigError, DynamoBookRepository,
};
use lambda_http::{run, service_fn, Body, Error, Request, Response};
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

    let body = match event.body() {
        Body::Text(text) => Some(text.as_str()),
        Body::Binary(bytes) => std::str::from_utf8(bytes).ok(),
        _ => None,
    };

    info!(body_bytes = body.map_or(0, str::len), "add book request received");

    let add_handler = AddBookHandler::new(books.clone());
    Ok(add_handler.handle(body).await.into_response())
}
