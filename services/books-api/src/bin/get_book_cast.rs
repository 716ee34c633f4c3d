/// Cast-lookup HTTP Lambda entry point
///
/// Standalone function URL endpoint. Returns a book's cast members,
/// optionally narrowed by a `roleName` or `authorName` prefix.
use books_api::application::{ApiResponse, CastHandler};
use books_api::infrastructure::{
    init_logging, CatalogConfig, CatalogConfigError, DynamoCastRepository,
};
use lambda_http::{run, service_fn, Body, Error, Request, RequestExt, Response};
use tokio::sync::OnceCell;
use tracing::{error, info};

/// Cast repository instance, kept across warm invocations.
static CAST_REPO: OnceCell<DynamoCastRepository> = OnceCell::const_new();

/// Repository accessor (initialized on the first invocation).
async fn cast_repository() -> Result<&'static DynamoCastRepository, CatalogConfigError> {
    CAST_REPO
        .get_or_try_init(|| async {
            let config = CatalogConfig::from_env().await?;
            Ok(DynamoCastRepository::new(
                config.client().clone(),
                config.cast_table().to_string(),
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
    let cast = match cast_repository().await {
        Ok(repo) => repo,
        Err(err) => {
            error!(error = %err, "failed to load configuration");
            return Ok(
                ApiResponse::server_error("Internal Server Error", err.to_string())
                    .into_response(),
            );
        }
    };

    let params = event.query_string_parameters_ref();
    let book_id = params.and_then(|p| p.first("bookId"));
    let role_name = params.and_then(|p| p.first("roleName"));
    let author_name = params.and_then(|p| p.first("authorName"));

    info!(
        book_id = ?book_id,
        role_name = ?role_name,
        author_name = ?author_name,
        "cast lookup request received"
    );

    let cast_handler = CastHandler::new(cast.clone());
    Ok(cast_handler
        .handle(book_id, role_name, author_name)
        .await
        .into_response())
}
