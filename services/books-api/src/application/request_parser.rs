// Request input parsing
//
// Shared interpretation of loosely-typed request inputs: book ids arriving
// as path or query strings, and JSON request bodies.

use serde_json::Value;

/// Outcome of reading a request body.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// No body, an empty body, or a body decoding to JSON null
    Missing,
    /// A body was present but is not valid JSON; carries the decode error
    Malformed(String),
    /// A decoded JSON document
    Json(Value),
}

/// Parse a path- or query-supplied book id.
///
/// Missing and non-integer values both come back as `None`, so a handler
/// answers them with the same validation response. Surrounding whitespace
/// is tolerated.
pub fn parse_book_id(raw: Option<&str>) -> Option<i64> {
    raw.and_then(|value| value.trim().parse::<i64>().ok())
}

/// Decode a request body into JSON.
///
/// Absence and emptiness are one case (`Missing`); a body that is present
/// but undecodable is another (`Malformed`), because the two map to
/// different responses. A body decoding to JSON null counts as missing.
pub fn parse_json_body(raw: Option<&str>) -> RequestBody {
    let Some(text) = raw else {
        return RequestBody::Missing;
    };

    if text.trim().is_empty() {
        return RequestBody::Missing;
    }

    match serde_json::from_str::<Value>(text) {
        Ok(Value::Null) => RequestBody::Missing,
        Ok(value) => RequestBody::Json(value),
        Err(err) => RequestBody::Malformed(err.to_string()),
    }
}
