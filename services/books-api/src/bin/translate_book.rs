/// Translate-book HTTP Lambda entry point
///
/// Serves GET /translate?bookId=&targetLanguage=. Sends the book's
/// description through AWS Translate and returns the translated text.
use books_api::application::{ApiResponse, TranslateHandler};
use books_api::infrastructure::{
    init_logging, AwsTranslator, CatalogConfig, CatalogConfigError, DynamoBookRepository,
};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use tokio::sync::OnceCell;
use tracing::{error, info};

/// Book repository instance, kept across warm invocations.
static BOOK_REPO: OnceCell<DynamoBookRepository> = OnceCell::const_new();

/// Translate client instance, kept across warm invocations.
static TRANSLATOR: OnceCell<AwsTranslator> = OnceCell::const_new();

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

/// Translator accessor (initialized on the first invocation).
async fn translator() -> &'static AwsTranslator {
    TRANSLATOR.get_or_init(AwsTranslator::from_config).await
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

    let params = event.query_string_parameters_ref();
    let book_id = params.and_then(|p| p.first("bookId"));
    let target_language = params.and_then(|p| p.first("targetLanguage"));

    info!(
        book_id = ?book_id,
        target_language = ?target_language,
        "translate request received"
    );

    let translate_handler = TranslateHandler::new(books.clone(), translator().await.clone());
    Ok(translate_handler
        .handle(book_id, target_language)
        .await
        .into_response())
}
