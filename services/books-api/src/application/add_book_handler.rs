// Book creation

use tracing::warn;

use crate::application::request_parser::{parse_json_body, RequestBody};
use crate::application::response::ApiResponse;
use crate::infrastructure::BookRepository;

/// Handles the create operation.
pub struct AddBookHandler<R: BookRepository> {
    /// Book repository
    books: R,
}

impl<R: BookRepository> AddBookHandler<R> {
    /// Create a new AddBookHandler.
    pub fn new(books: R) -> Self {
        Self { books }
    }

    /// Store the request body as a catalog entry, verbatim.
    ///
    /// No field validation and no uniqueness check: whatever document the
    /// body decodes to is written as-is, silently overwriting an existing
    /// item under the same id. An absent body is 400; a body that fails to
    /// decode is a failure path and reports 500.
    pub async fn handle(&self, body: Option<&str>) -> ApiResponse {
        let document = match parse_json_body(body) {
            RequestBody::Missing => {
                return ApiResponse::bad_request("Request body is required");
            }
            RequestBody::Malformed(message) => {
                warn!(error = %message, "request body is not valid JSON");
                return ApiResponse::server_error("Internal Server Error", message);
            }
            RequestBody::Json(value) => value,
        };

        match self.books.put(&document).await {
            Ok(()) => ApiResponse::created("Book added successfully"),
            Err(err) => {
                warn!(error = %err, "failed to store book");
                ApiResponse::server_error("Internal Server Error", err.to_string())
            }
        }
    }
}
