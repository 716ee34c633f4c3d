// Cast member lookup

use serde_json::Value;
use tracing::warn;

use crate::application::request_parser::parse_book_id;
use crate::application::response::ApiResponse;
use crate::domain::CastQuery;
use crate::infrastructure::CastRepository;

/// Handles the cast query operation.
pub struct CastHandler<R: CastRepository> {
    /// Cast repository
    cast: R,
}

impl<R: CastRepository> CastHandler<R> {
    /// Create a new CastHandler.
    pub fn new(cast: R) -> Self {
        Self { cast }
    }

    /// Look up a book's cast members.
    ///
    /// `bookId` is required; `roleName` and `authorName` are optional
    /// prefixes, with `roleName` taking precedence when both arrive. The
    /// matching items are returned verbatim under `data`.
    pub async fn handle(
        &self,
        book_id: Option<&str>,
        role_name: Option<&str>,
        author_name: Option<&str>,
    ) -> ApiResponse {
        let Some(book_id) = parse_book_id(book_id) else {
            return ApiResponse::bad_request("Missing bookId parameter");
        };

        let query = CastQuery::from_params(book_id, role_name, author_name);

        match self.cast.query(&query).await {
            Ok(members) => ApiResponse::data(Value::Array(members)),
            Err(err) => {
                warn!(book_id, error = %err, "cast query failed");
                ApiResponse::server_error("Internal Server Error", err.to_string())
            }
        }
    }
}
