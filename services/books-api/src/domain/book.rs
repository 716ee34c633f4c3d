// Catalog book records
//
// The Books table is schemaless beyond its numeric key, so the read and
// write paths move raw JSON documents. These types cover the places that
// need a fixed shape: the seeder, the update expression, and tests.

use serde::{Deserialize, Serialize};

/// A fully-populated catalog entry. Field names serialize in the camelCase
/// form the table stores.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// Partition key, assigned by the caller
    pub id: i64,
    pub title: String,
    pub author: String,
    pub genre: String,
    pub description: String,
    /// ISO date string, stored as-is
    pub publication_date: String,
}

/// Payload of the update operation.
///
/// Every field the table knows is written on update: a `None` here becomes
/// a stored NULL, so a partial payload clears the attributes it omits.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub genre: Option<String>,
    pub description: Option<String>,
    pub publication_date: Option<String>,
}
