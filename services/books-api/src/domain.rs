// Domain layer modules
pub mod book;
pub mod cast_member;
pub mod cast_query;
pub mod language;

// Re-exports
pub use book::{Book, BookUpdate};
pub use cast_member::CastMember;
pub use cast_query::CastQuery;
pub use language::TargetLanguage;
