// Book update

use tracing::warn;

use crate::application::request_parser::{parse_book_id, parse_json_body, RequestBody};
use crate::application::response::ApiResponse;
use crate::domain::BookUpdate;
use crate::infrastructure::BookRepository;

/// Handles the update operation.
pub struct UpdateBookHandler<R: BookRepository> {
    /// Book repository
    books: R,
}

impl<R: BookRepository> UpdateBookHandler<R> {
    /// Create a new UpdateBookHandler.
    pub fn new(books: R) -> Self {
        Self { books }
    }

    /// Rewrite the five well-known attributes of a book.
    ///
    /// Full-replacement semantics: fields the body omits are cleared to
    /// NULL, not left alone. The id is validated before the body, and the
    /// response echoes the written attribute map under `data`.
    pub async fn handle(&self, book_id: Option<&str>, body: Option<&str>) -> ApiResponse {
        let Some(id) = parse_book_id(book_id) else {
            return ApiResponse::bad_request("Book ID is required");
        };

        let document = match parse_json_body(body) {
            RequestBody::Missing => {
                return ApiResponse::bad_request("Request body is required");
            }
            RequestBody::Malformed(message) => {
                warn!(book_id = id, error = %message, "request body is not valid JSON");
                return ApiResponse::server_error("Internal Server Error", message);
            }
            RequestBody::Json(value) => value,
        };

        let update: BookUpdate = match serde_json::from_value(document) {
            Ok(update) => update,
            Err(err) => {
                warn!(book_id = id, error = %err, "update body has an unexpected shape");
                return ApiResponse::server_error("Internal Server Error", err.to_string());
            }
        };

        match self.books.update(id, &update).await {
            Ok(attributes) => {
                ApiResponse::message_with_data("Book updated successfully", attributes)
            }
            Err(err) => {
                warn!(book_id = id, error = %err, "failed to update book");
                ApiResponse::server_error("Internal Server Error", err.to_string())
            }
        }
    }
}
