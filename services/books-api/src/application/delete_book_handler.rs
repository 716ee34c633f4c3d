// Single book removal

use tracing::warn;

use crate::application::request_parser::parse_book_id;
use crate::application::response::ApiResponse;
use crate::infrastructure::BookRepository;

/// Handles the single-book delete operation.
pub struct DeleteBookHandler<R: BookRepository> {
    /// Book repository
    books: R,
}

impl<R: BookRepository> DeleteBookHandler<R> {
    /// Create a new DeleteBookHandler.
    pub fn new(books: R) -> Self {
        Self { books }
    }

    /// Delete one book by id.
    ///
    /// The book is fetched first so an unknown id reports 404 without
    /// mutating anything; only a found book is deleted.
    pub async fn handle(&self, book_id: Option<&str>) -> ApiResponse {
        let Some(id) = parse_book_id(book_id) else {
            return ApiResponse::bad_request("Book ID is required");
        };

        let existing = match self.books.get(id).await {
            Ok(existing) => existing,
            Err(err) => {
                warn!(book_id = id, error = %err, "failed to check book before delete");
                return ApiResponse::server_error("Internal Server Error", err.to_string());
            }
        };

        if existing.is_none() {
            return ApiResponse::not_found("Book not found");
        }

        match self.books.delete(id).await {
            Ok(()) => ApiResponse::message("Book deleted successfully"),
            Err(err) => {
                warn!(book_id = id, error = %err, "failed to delete book");
                ApiResponse::server_error("Internal Server Error", err.to_string())
            }
        }
    }
}
