//! In-memory substring filtering over a fetched collection.
//!
//! Listing pages fetch a collection once and narrow it per keystroke without
//! another round trip. The state is exactly `{source, query}`; the filtered
//! view is derived on demand and never stored, so the two can not diverge.

/// A record type that exposes its designated searchable text fields.
pub trait Searchable {
    /// The fixed pair of text attributes eligible for substring filtering,
    /// e.g. title+description for services, title+summary for posts.
    fn searchable_fields(&self) -> [&str; 2];
}

/// Case-insensitive substring test against a record's searchable fields.
/// An empty or whitespace-only query matches everything.
pub fn matches<T: Searchable>(query: &str, record: &T) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    record
        .searchable_fields()
        .iter()
        .any(|f| f.to_lowercase().contains(&needle))
}

/// Source collection plus the current user query.
#[derive(Clone, Debug)]
pub struct FilteredList<T> {
    source: Vec<T>,
    query: String,
}

impl<T: Searchable> FilteredList<T> {
    pub fn new(source: Vec<T>) -> Self {
        Self { source, query: String::new() }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    /// Pure, synchronous recomputation of the filtered view.
    pub fn filtered(&self) -> Vec<&T> {
        self.source.iter().filter(|r| matches(&self.query, *r)).collect()
    }

    /// Consume the list, keeping only matching records.
    pub fn into_filtered(self) -> Vec<T> {
        let query = self.query;
        self.source.into_iter().filter(|r| matches(&query, r)).collect()
    }
}

impl Searchable for models::service::Model {
    fn searchable_fields(&self) -> [&str; 2] {
        [&self.title, &self.description]
    }
}

impl Searchable for models::blog_post::Model {
    fn searchable_fields(&self) -> [&str; 2] {
        [&self.title, &self.summary]
    }
}
