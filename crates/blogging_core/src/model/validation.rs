//! Non-blank rules for blog names and post titles.
//!
//! Whitespace-only input counts as blank.

use std::error::Error;
use std::fmt::{Display, Formatter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityValidationError {
    BlankBlogName,
    BlankPostTitle,
}

impl Display for EntityValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankBlogName => write!(f, "blog name must not be blank"),
            Self::BlankPostTitle => write!(f, "post title must not be blank"),
        }
    }
}

impl Error for EntityValidationError {}

pub fn validate_blog_name(name: &str) -> Result<(), EntityValidationError> {
    if is_blank(name) {
        return Err(EntityValidationError::BlankBlogName);
    }
    Ok(())
}

pub fn validate_post_title(title: &str) -> Result<(), EntityValidationError> {
    if is_blank(title) {
        return Err(EntityValidationError::BlankPostTitle);
    }
    Ok(())
}

/// Maps blank optional text to `None`, keeping non-blank text verbatim.
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|text| !is_blank(text))
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
