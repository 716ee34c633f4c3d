/// Delete-all-books HTTP Lambda entry point
///
/// Serves DELETE /books. Scans the table and deletes every item it finds,
/// issuing the per-item deletes concurrently.
use books_api::application::{ApiResponse, DeleteAllBooksHandler};
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
async fn handler(_event: Request) -> Result<Response<Body>, Error> {
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

    info!("delete all books request received");

    let delete_handler = DeleteAllBooksHandler::new(books.clone());
    Ok(delete_handler.handle().await.into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lambda_http::http::Request as HttpRequest;
    use serial_test::serial;

    // The repository cell must stay uninitialized for this test, so it is
    // the only test in this binary that invokes the handler.
    #[tokio::test]
    #[serial(books_env)]
    async fn test_handler_without_table_config_returns_500() {
        init_logging();
        unsafe {
            std::env::remove_var("TABLE_NAME");
            std::env::remove_var("CAST_TABLE_NAME");
        }

        let request = HttpRequest::builder()
            .method("DELETE")
            .uri("/books")
            .body(Body::Empty)
            .unwrap();

        let response = handler(request).await.unwrap();

        assert_eq!(response.status(), 500);
        let parsed: serde_json::Value = match response.body() {
            Body::Text(text) => serde_json::from_str(text).unwrap(),
            _ => panic!("expected a text body"),
        };
        assert_eq!(parsed["message"], "Internal Server Error");
        assert_eq!(parsed["error"], "Missing environment variable: TABLE_NAME");
    }
}
