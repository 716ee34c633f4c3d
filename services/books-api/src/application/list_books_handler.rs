// Catalog listing

use serde_json::Value;
use tracing::warn;

use crate::application::response::ApiResponse;
use crate::infrastructure::BookRepository;

/// Handles the whole-catalog read operation.
pub struct ListBooksHandler<R: BookRepository> {
    /// Book repository
    books: R,
}

impl<R: BookRepository> ListBooksHandler<R> {
    /// Create a new ListBooksHandler.
    pub fn new(books: R) -> Self {
        Self { books }
    }

    /// List the catalog, optionally narrowed to one author.
    ///
    /// The filter is applied after the scan and matches the `author`
    /// attribute exactly; an empty parameter counts as no filter. An empty
    /// result is still 200.
    pub async fn handle(&self, author_name: Option<&str>) -> ApiResponse {
        let filter = author_name.filter(|name| !name.is_empty());

        match self.books.scan_all().await {
            Ok(books) => {
                let books = match filter {
                    Some(author) => books
                        .into_iter()
                        .filter(|book| {
                            book.get("author").and_then(Value::as_str) == Some(author)
                        })
                        .collect(),
                    None => books,
                };
                ApiResponse::data(Value::Array(books))
            }
            Err(err) => {
                warn!(error = %err, "failed to scan books");
                ApiResponse::server_error("Internal server error", err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::book_repository::tests::MockBookRepository;
    use crate::infrastructure::BookRepositoryError;
    use lambda_http::http::StatusCode;
    use serde_json::json;

    fn create_test_handler() -> (ListBooksHandler<MockBookRepository>, MockBookRepository) {
        let books = MockBookRepository::new();
        let handler = ListBooksHandler::new(books.clone());
        (handler, books)
    }

    #[tokio::test]
    async fn test_handle_empty_store_returns_empty_array() {
        let (handler, _) = create_test_handler();

        let response = handler.handle(None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.body(), &json!({ "data": [] }));
    }

    #[tokio::test]
    async fn test_handle_without_filter_returns_everything() {
        let (handler, books) = create_test_handler();
        books.insert_item(json!({"id": 1, "author": "Harper Lee"}));
        books.insert_item(json!({"id": 2, "author": "George Orwell"}));

        let response = handler.handle(None).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.body(),
            &json!({ "data": [
                {"id": 1, "author": "Harper Lee"},
                {"id": 2, "author": "George Orwell"}
            ]})
        );
    }

    #[tokio::test]
    async fn test_handle_filter_matches_author_exactly() {
        let (handler, books) = create_test_handler();
        books.insert_item(json!({"id": 1, "author": "Harper Lee"}));
        books.insert_item(json!({"id": 2, "author": "Harper"}));
        books.insert_item(json!({"id": 3, "author": "George Orwell"}));

        let response = handler.handle(Some("Harper Lee")).await;

        assert_eq!(
            response.body(),
            &json!({ "data": [{"id": 1, "author": "Harper Lee"}] })
        );
    }

    #[tokio::test]
    async fn test_handle_filter_skips_items_without_string_author() {
        let (handler, books) = create_test_handler();
        books.insert_item(json!({"id": 1, "author": 7}));
        books.insert_item(json!({"id": 2}));

        let response = handler.handle(Some("7")).await;

        assert_eq!(response.body(), &json!({ "data": [] }));
    }

    #[tokio::test]
    async fn test_handle_empty_filter_counts_as_absent() {
        let (handler, books) = create_test_handler();
        books.insert_item(json!({"id": 1, "author": "Harper Lee"}));

        let response = handler.handle(Some("")).await;

        assert_eq!(
            response.body(),
            &json!({ "data": [{"id": 1, "author": "Harper Lee"}] })
        );
    }

    #[tokio::test]
    async fn test_handle_store_failure_returns_500() {
        let (handler, books) = create_test_handler();
        books.set_next_error(BookRepositoryError::ReadError("scan failed".to_string()));

        let response = handler.handle(None).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.body(),
            &json!({
                "message": "Internal server error",
                "error": "Read error: scan failed"
            })
        );
    }
}
