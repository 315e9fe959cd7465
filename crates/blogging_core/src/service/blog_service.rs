//! Blog/post use-case service.
//!
//! # Responsibility
//! - Parse and validate user-entered ids, names and titles.
//! - Delegate persistence to a [`BloggingRepository`] implementation.
//!
//! # Invariants
//! - A rejected request never reaches a repository write.
//! - The service stays storage-agnostic and performs no terminal I/O.

use crate::model::blog::{Blog, BlogId};
use crate::model::post::{Post, PostListing};
use crate::model::validation::{non_blank, validate_post_title, EntityValidationError};
use crate::repo::blogging_repo::{BloggingRepository, RepoError, RepoResult};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Blog id value meaning "show posts of every blog".
pub const ALL_BLOGS_FILTER: BlogId = 0;

/// Recoverable input problem reported back to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    BlankBlogName,
    BlankPostTitle,
    /// Not an integer, or no blog has that id.
    InvalidBlogId,
    /// Post filter input is not an integer.
    InvalidBlogFilter,
}

impl Rejection {
    /// Stable machine-readable code used in log events.
    pub fn code(self) -> &'static str {
        match self {
            Self::BlankBlogName => "blank_blog_name",
            Self::BlankPostTitle => "blank_post_title",
            Self::InvalidBlogId => "invalid_blog_id",
            Self::InvalidBlogFilter => "invalid_blog_filter",
        }
    }
}

/// User-facing message text.
impl Display for Rejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankBlogName => write!(f, "Blog name cannot be empty."),
            Self::BlankPostTitle => write!(f, "Post title cannot be empty."),
            Self::InvalidBlogId => write!(f, "Invalid Blog ID."),
            Self::InvalidBlogFilter => write!(f, "Invalid input. Please enter a valid Blog ID."),
        }
    }
}

impl From<EntityValidationError> for Rejection {
    fn from(value: EntityValidationError) -> Self {
        match value {
            EntityValidationError::BlankBlogName => Self::BlankBlogName,
            EntityValidationError::BlankPostTitle => Self::BlankPostTitle,
        }
    }
}

/// Service error for blog/post use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input was rejected; nothing was written.
    Rejected(Rejection),
    /// Persistence-layer failure.
    Repo(RepoError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Rejected(rejection) => write!(f, "input rejected: {}", rejection.code()),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Rejected(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<Rejection> for ServiceError {
    fn from(value: Rejection) -> Self {
        Self::Rejected(value)
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::Validation(err) => Self::Rejected(err.into()),
            other => Self::Repo(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Parses the post listing filter; [`ALL_BLOGS_FILTER`] maps to `None`.
pub fn parse_post_filter(raw: &str) -> Result<Option<BlogId>, Rejection> {
    match parse_blog_id(raw) {
        Some(ALL_BLOGS_FILTER) => Ok(None),
        Some(blog_id) => Ok(Some(blog_id)),
        None => Err(Rejection::InvalidBlogFilter),
    }
}

/// Accepts only 32-bit integers; storage ids are widened afterwards.
fn parse_blog_id(raw: &str) -> Option<BlogId> {
    raw.trim().parse::<i32>().ok().map(BlogId::from)
}

/// Use-case facade over a blogging repository.
pub struct BlogService<R: BloggingRepository> {
    repo: R,
}

impl<R: BloggingRepository> BlogService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    pub fn list_blogs(&self) -> RepoResult<Vec<Blog>> {
        self.repo.list_blogs()
    }

    /// Creates a blog named exactly `name`.
    pub fn add_blog(&self, name: &str) -> ServiceResult<Blog> {
        let blog_id = self.repo.add_blog(name)?;
        Ok(Blog {
            blog_id,
            name: name.to_string(),
        })
    }

    /// Parses `raw` and confirms the blog exists.
    pub fn resolve_blog_id(&self, raw: &str) -> ServiceResult<BlogId> {
        let blog_id = parse_blog_id(raw).ok_or(Rejection::InvalidBlogId)?;
        if !self.repo.blog_exists(blog_id)? {
            return Err(Rejection::InvalidBlogId.into());
        }
        Ok(blog_id)
    }

    /// Checks a title before the caller asks for post content.
    pub fn check_post_title(&self, title: &str) -> Result<(), Rejection> {
        validate_post_title(title).map_err(Rejection::from)
    }

    /// Creates a post under a blog previously returned by [`Self::resolve_blog_id`].
    ///
    /// Blank content is stored as absent.
    pub fn create_post(
        &self,
        blog_id: BlogId,
        title: &str,
        content: Option<&str>,
    ) -> ServiceResult<Post> {
        let content = non_blank(content);
        let post_id = self.repo.add_post(title, content, blog_id)?;
        Ok(Post {
            post_id,
            title: title.to_string(),
            content: content.map(str::to_string),
            blog_id,
        })
    }

    pub fn list_posts(&self, blog_filter: Option<BlogId>) -> RepoResult<Vec<PostListing>> {
        self.repo.list_posts(blog_filter)
    }
}
