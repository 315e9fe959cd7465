//! Post record and its denormalized listing projection.

use crate::model::blog::BlogId;

/// Storage-assigned post identifier (SQLite rowid).
pub type PostId = i64;

/// Text shown in listings when a post was saved without content.
pub const NO_CONTENT_PLACEHOLDER: &str = "No content";

/// A titled entry belonging to exactly one blog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub post_id: PostId,
    pub title: String,
    /// `None` when the author left content blank.
    pub content: Option<String>,
    pub blog_id: BlogId,
}

/// Read model returned by post listings: the post joined with its blog name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostListing {
    pub post: Post,
    pub blog_name: String,
}

impl PostListing {
    /// Returns stored content, or [`NO_CONTENT_PLACEHOLDER`] when absent.
    pub fn content_or_placeholder(&self) -> &str {
        self.post
            .content
            .as_deref()
            .unwrap_or(NO_CONTENT_PLACEHOLDER)
    }
}
