// Description translation

use serde_json::{json, Value};
use tracing::warn;

use crate::application::request_parser::parse_book_id;
use crate::application::response::ApiResponse;
use crate::domain::language::MAX_TRANSLATE_CHARS;
use crate::domain::TargetLanguage;
use crate::infrastructure::{BookRepository, Translator};

/// Handles the description translation operation.
pub struct TranslateHandler<R: BookRepository, T: Translator> {
    /// Book repository
    books: R,
    /// Translation backend
    translator: T,
}

impl<R: BookRepository, T: Translator> TranslateHandler<R, T> {
    /// Create a new TranslateHandler.
    pub fn new(books: R, translator: T) -> Self {
        Self { books, translator }
    }

    /// Translate a book's description into the requested language.
    ///
    /// Both parameters are validated before the store is consulted. The
    /// description is capped at [`MAX_TRANSLATE_CHARS`] characters before it
    /// is sent to the translation backend.
    pub async fn handle(&self, book_id: Option<&str>, language: Option<&str>) -> ApiResponse {
        let Some(book_id) = parse_book_id(book_id) else {
            return ApiResponse::not_found("Invalid book ID");
        };

        let Some(target) = language.and_then(TargetLanguage::parse) else {
            return ApiResponse::bad_request("Invalid language parameter");
        };

        let book = match self.books.get(book_id).await {
            Ok(Some(book)) => book,
            Ok(None) => return ApiResponse::not_found("Book not found"),
            Err(err) => {
                warn!(book_id, error = %err, "book lookup failed");
                return ApiResponse::server_error("Internal server error", err.to_string());
            }
        };

        let Some(description) = book
            .get("description")
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
        else {
            return ApiResponse::not_found("No content available for translation");
        };

        let text: String = description.chars().take(MAX_TRANSLATE_CHARS).collect();

        match self.translator.translate(&text, target).await {
            Ok(translated) => ApiResponse::ok(json!({ "translatedText": translated })),
            Err(err) => {
                warn!(book_id, language = target.code(), error = %err, "translation failed");
                ApiResponse::server_error("Internal server error", err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::book_repository::tests::MockBookRepository;
    use crate::infrastructure::translator::tests::MockTranslator;
    use crate::infrastructure::{BookRepositoryError, TranslateError};
    use lambda_http::http::StatusCode;
    use serde_json::json;

    fn create_test_handler() -> (
        TranslateHandler<MockBookRepository, MockTranslator>,
        MockBookRepository,
        MockTranslator,
    ) {
        let books = MockBookRepository::new();
        let translator = MockTranslator::new();
        let handler = TranslateHandler::new(books.clone(), translator.clone());
        (handler, books, translator)
    }

    fn seed_book(books: &MockBookRepository, id: i64, description: &str) {
        books.insert_item(json!({
            "id": id,
            "title": "1984",
            "author": "George Orwell",
            "description": description,
        }));
    }

    #[tokio::test]
    async fn test_handle_missing_book_id_returns_404() {
        let (handler, _, _) = create_test_handler();

        let response = handler.handle(None, Some("fr")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body(), &json!({ "message": "Invalid book ID" }));
    }

    #[tokio::test]
    async fn test_handle_non_integer_book_id_returns_404() {
        let (handler, _, _) = create_test_handler();

        let response = handler.handle(Some("nineteen-eighty-four"), Some("fr")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body(), &json!({ "message": "Invalid book ID" }));
    }

    #[tokio::test]
    async fn test_handle_invalid_language_returns_400_before_lookup() {
        let (handler, books, _) = create_test_handler();
        books.set_next_error(BookRepositoryError::ReadError("unreachable".to_string()));

        let response = handler.handle(Some("404"), Some("jp")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), &json!({ "message": "Invalid language parameter" }));
        // The queued error was never consumed, so the store was not consulted.
        assert!(books.take_error().is_some());
    }

    #[tokio::test]
    async fn test_handle_missing_language_returns_400() {
        let (handler, _, _) = create_test_handler();

        let response = handler.handle(Some("1"), None).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), &json!({ "message": "Invalid language parameter" }));
    }

    #[tokio::test]
    async fn test_handle_uppercase_language_is_rejected() {
        let (handler, _, _) = create_test_handler();

        let response = handler.handle(Some("1"), Some("FR")).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(response.body(), &json!({ "message": "Invalid language parameter" }));
    }

    #[tokio::test]
    async fn test_handle_unknown_book_returns_404() {
        let (handler, _, _) = create_test_handler();

        let response = handler.handle(Some("7"), Some("es")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(response.body(), &json!({ "message": "Book not found" }));
    }

    #[tokio::test]
    async fn test_handle_book_without_description_returns_404() {
        let (handler, books, _) = create_test_handler();
        books.insert_item(json!({ "id": 1, "title": "1984", "author": "George Orwell" }));

        let response = handler.handle(Some("1"), Some("de")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.body(),
            &json!({ "message": "No content available for translation" })
        );
    }

    #[tokio::test]
    async fn test_handle_empty_description_returns_404() {
        let (handler, books, _) = create_test_handler();
        seed_book(&books, 1, "");

        let response = handler.handle(Some("1"), Some("de")).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(
            response.body(),
            &json!({ "message": "No content available for translation" })
        );
    }

    #[tokio::test]
    async fn test_handle_translates_the_description() {
        let (handler, books, translator) = create_test_handler();
        seed_book(&books, 1, "A dystopian novel.");

        let response = handler.handle(Some("1"), Some("fr")).await;

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.body(),
            &json!({ "translatedText": "[fr] A dystopian novel." })
        );
        assert_eq!(
            translator.calls(),
            vec![("A dystopian novel.".to_string(), "fr".to_string())]
        );
    }

    #[tokio::test]
    async fn test_handle_caps_long_descriptions() {
        let (handler, books, translator) = create_test_handler();
        seed_book(&books, 1, &"x".repeat(MAX_TRANSLATE_CHARS + 250));

        let response = handler.handle(Some("1"), Some("en")).await;

        assert_eq!(response.status(), StatusCode::OK);
        let calls = translator.calls();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].0.chars().count(), MAX_TRANSLATE_CHARS);
        assert_eq!(calls[0].1, "en");
    }

    #[tokio::test]
    async fn test_handle_store_failure_returns_500() {
        let (handler, books, _) = create_test_handler();
        books.set_next_error(BookRepositoryError::ReadError("throttled".to_string()));

        let response = handler.handle(Some("1"), Some("fr")).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.body(),
            &json!({
                "message": "Internal server error",
                "error": "Read error: throttled"
            })
        );
    }

    #[tokio::test]
    async fn test_handle_translator_failure_returns_500() {
        let (handler, books, translator) = create_test_handler();
        seed_book(&books, 1, "A dystopian novel.");
        translator.set_next_error(TranslateError::AwsSdkError("quota exceeded".to_string()));

        let response = handler.handle(Some("1"), Some("fr")).await;

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(
            response.body(),
            &json!({
                "message": "Internal server error",
                "error": "AWS Translate API error: quota exceeded"
            })
        );
    }
}
