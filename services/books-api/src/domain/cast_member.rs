// Cast member records
//
// One row per character in the BookCast table: partition key `bookId`,
// sort key `authorName`, with `roleName` indexed by the `roleIx` local
// secondary index.

use serde::{Deserialize, Serialize};

/// A character appearing in a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CastMember {
    /// Book the character belongs to
    pub book_id: i64,
    /// Author of the book, doubles as the table's sort key
    pub author_name: String,
    /// Character name
    pub role_name: String,
    pub role_description: String,
}
