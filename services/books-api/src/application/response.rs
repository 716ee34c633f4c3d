// API response envelope
//
// Every operation answers with a JSON body and a `content-type:
// application/json` header. Handlers build an ApiResponse and the entry
// points convert it to the HTTP response, so tests can assert on status
// and body without going through HTTP plumbing.

use lambda_http::http::header::CONTENT_TYPE;
use lambda_http::http::StatusCode;
use lambda_http::{Body, Response};
use serde_json::{json, Value};

/// A status code plus the JSON body to send with it.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code
    status: StatusCode,
    /// JSON response body
    body: Value,
}

impl ApiResponse {
    fn new(status: StatusCode, body: Value) -> Self {
        Self { status, body }
    }

    /// 200 with a caller-shaped body.
    pub fn ok(body: Value) -> Self {
        Self::new(StatusCode::OK, body)
    }

    /// 200 with `{ "data": ... }`.
    pub fn data(data: Value) -> Self {
        Self::new(StatusCode::OK, json!({ "data": data }))
    }

    /// 200 with `{ "message": ... }`.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(StatusCode::OK, json!({ "message": message.into() }))
    }

    /// 200 with both `message` and `data`.
    pub fn message_with_data(message: impl Into<String>, data: Value) -> Self {
        Self::new(
            StatusCode::OK,
            json!({ "message": message.into(), "data": data }),
        )
    }

    /// 201 with `{ "message": ... }`.
    pub fn created(message: impl Into<String>) -> Self {
        Self::new(StatusCode::CREATED, json!({ "message": message.into() }))
    }

    /// 400 with `{ "message": ... }`.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, json!({ "message": message.into() }))
    }

    /// 404 with `{ "message": ... }`.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, json!({ "message": message.into() }))
    }

    /// 500 with `{ "message": ..., "error": ... }`, the error field
    /// carrying the underlying failure's display text.
    pub fn server_error(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            json!({ "message": message.into(), "error": error.into() }),
        )
    }

    /// Status code.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// JSON body.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// Convert into the HTTP response the Lambda runtime sends back.
    pub fn into_response(self) -> Response<Body> {
        Response::builder()
            .status(self.status)
            .header(CONTENT_TYPE, "application/json")
            .body(Body::Text(self.body.to_string()))
            .expect("failed to build response")
    }
}
