// Whole-catalog removal

use tracing::{info, warn};

use crate::application::response::ApiResponse;
use crate::infrastructure::BookRepository;

/// Handles the delete-everything operation.
pub struct DeleteAllBooksHandler<R: BookRepository> {
    /// Book repository
    books: R,
}

impl<R: BookRepository> DeleteAllBooksHandler<R> {
    /// Create a new DeleteAllBooksHandler.
    pub fn new(books: R) -> Self {
        Self { books }
    }

    /// Delete every book in the catalog.
    ///
    /// An empty catalog is 404. Any failed delete fails the whole call
    /// with 500; items removed before the failure stay removed, and the
    /// response does not say which ones those were.
    pub async fn handle(&self) -> ApiResponse {
        match self.books.delete_all().await {
            Ok(0) => ApiResponse::not_found("No books found to delete."),
            Ok(deleted) => {
                info!(deleted, "bulk delete finished");
                ApiResponse::message("All books deleted successfully.")
            }
            Err(err) => {
                warn!(error = %err, "bulk delete failed");
                ApiResponse::server_error("Internal Server Error", err.to_string())
            }
        }
    }
}
