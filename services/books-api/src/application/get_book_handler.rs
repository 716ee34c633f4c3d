// Single book lookup

use tracing::warn;

use crate::application::request_parser::parse_book_id;
use crate::application::response::ApiResponse;
use crate::infrastructure::BookRepository;

/// Handles the single-book read operation.
pub struct GetBookHandler<R: BookRepository> {
    /// Book repository
    books: R,
}

impl<R: BookRepository> GetBookHandler<R> {
    /// Create a new GetBookHandler.
    pub fn new(books: R) -> Self {
        Self { books }
    }

    /// Fetch one book by its path-supplied id.
    ///
    /// 400 when the id is missing or not an integer, 404 when no book
    /// exists under it, 500 when the store call fails. The found document
    /// is returned verbatim under `data`.
    pub async fn handle(&self, book_id: Option<&str>) -> ApiResponse {
        let Some(id) = parse_book_id(book_id) else {
            return ApiResponse::bad_request("Book ID is required");
        };

        match self.books.get(id).await {
            Ok(Some(book)) => ApiResponse::data(book),
            Ok(None) => ApiResponse::not_found("Book not found"),
            Err(err) => {
                warn!(book_id = id, error = %err, "failed to fetch book");
                ApiResponse::server_error("Internal Server Error", err.to_string())
            }
        }
    }
}
