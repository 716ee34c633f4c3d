pub mod add_book_handler;
pub mod cast_handler;
pub mod delete_all_handler;
pub mod delete_book_handler;
pub mod get_book_handler;
pub mod list_books_handler;
pub mod request_parser;
pub mod response;
pub mod translate_handler;
pub mod update_book_handler;

// Re-exports
pub use add_book_handler::AddBookHandler;
pub use cast_handler::CastHandler;
pub use delete_all_handler::DeleteAllBooksHandler;
pub use delete_book_handler::DeleteBookHandler;
pub use get_book_handler::GetBookHandler;
pub use list_books_handler::ListBooksHandler;
pub use response::ApiResponse;
pub use translate_handler::TranslateHandler;
pub use update_book_handler::UpdateBookHandler;
