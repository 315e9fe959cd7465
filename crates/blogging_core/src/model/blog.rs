//! Blog record.

/// Storage-assigned blog identifier (SQLite rowid).
pub type BlogId = i64;

/// A named container that owns zero or more posts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blog {
    pub blog_id: BlogId,
    /// Stored exactly as entered, minus the line terminator.
    pub name: String,
}
