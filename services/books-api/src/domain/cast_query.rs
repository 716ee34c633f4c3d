// Cast query selection
//
// The cast lookup supports three fixed query shapes. Modeling them as a
// tagged choice keeps each shape's parameters to itself: a branch can never
// pick up values that belong to another one.

/// One of the three supported cast queries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CastQuery {
    /// Every cast member of a book
    ForBook { book_id: i64 },

    /// Cast members whose author name starts with a prefix (base table,
    /// `authorName` sort key)
    AuthorPrefix { book_id: i64, prefix: String },

    /// Cast members whose character name starts with a prefix (`roleIx`
    /// index, `roleName` sort key)
    RolePrefix { book_id: i64, prefix: String },
}

impl CastQuery {
    /// Build the query for a request's parameters.
    ///
    /// When both prefixes are supplied, `role_name` wins and `author_name`
    /// is ignored. Empty strings count as absent.
    ///
    /// # Example
    /// ```
    /// use books_api::domain::CastQuery;
    ///
    /// let query = CastQuery::from_params(1, Some("Scout"), Some("Harper"));
    /// assert_eq!(
    ///     query,
    ///     CastQuery::RolePrefix { book_id: 1, prefix: "Scout".to_string() }
    /// );
    /// ```
    pub fn from_params(
        book_id: i64,
        role_name: Option<&str>,
        author_name: Option<&str>,
    ) -> Self {
        let role = role_name.filter(|prefix| !prefix.is_empty());
        let author = author_name.filter(|prefix| !prefix.is_empty());

        match (role, author) {
            (Some(prefix), _) => CastQuery::RolePrefix {
                book_id,
                prefix: prefix.to_string(),
            },
            (None, Some(prefix)) => CastQuery::AuthorPrefix {
                book_id,
                prefix: prefix.to_string(),
            },
            (None, None) => CastQuery::ForBook { book_id },
        }
    }

    /// The book the query targets, whatever its shape.
    pub fn book_id(&self) -> i64 {
        match self {
            CastQuery::ForBook { book_id }
            | CastQuery::AuthorPrefix { book_id, .. }
            | CastQuery::RolePrefix { book_id, .. } => *book_id,
        }
    }
}
