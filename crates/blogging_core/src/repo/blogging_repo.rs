//! Blog/post repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide typed list/insert APIs over the `blogs` and `posts` tables.
//! - Return posts as a denormalized read model joined with the blog name.
//!
//! # Invariants
//! - `list_blogs` is ordered by `name ASC, blog_id ASC` (binary collation).
//! - `list_posts` is ordered by `post_id ASC`, i.e. insertion order.
//! - Identifiers come from SQLite `AUTOINCREMENT` and are never reused.

use crate::model::blog::{Blog, BlogId};
use crate::model::post::{Post, PostId, PostListing};
use crate::model::validation::{validate_blog_name, validate_post_title, EntityValidationError};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const POST_LISTING_SELECT_SQL: &str = "SELECT
    p.post_id,
    p.title,
    p.content,
    p.blog_id,
    b.name AS blog_name
FROM posts p
INNER JOIN blogs b ON b.blog_id = p.blog_id";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for blog/post persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntityValidationError),
    Db(rusqlite::Error),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidData(message) => write!(f, "invalid persisted blogging data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::InvalidData(_) => None,
        }
    }
}

impl From<EntityValidationError> for RepoError {
    fn from(value: EntityValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(value)
    }
}

/// Storage gateway for blogs and their posts.
pub trait BloggingRepository {
    /// Lists every blog sorted by name.
    fn list_blogs(&self) -> RepoResult<Vec<Blog>>;
    /// Inserts a blog and returns its storage-assigned id.
    fn add_blog(&self, name: &str) -> RepoResult<BlogId>;
    /// Returns whether a blog with `blog_id` exists.
    fn blog_exists(&self, blog_id: BlogId) -> RepoResult<bool>;
    /// Inserts a post under an already-validated blog and returns its id.
    fn add_post(&self, title: &str, content: Option<&str>, blog_id: BlogId)
        -> RepoResult<PostId>;
    /// Lists posts with their blog name, optionally restricted to one blog.
    fn list_posts(&self, blog_filter: Option<BlogId>) -> RepoResult<Vec<PostListing>>;
}

/// SQLite-backed blogging repository borrowing the process connection.
pub struct SqliteBloggingRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteBloggingRepository<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`] or
    /// [`crate::db::open_db_in_memory`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl BloggingRepository for SqliteBloggingRepository<'_> {
    fn list_blogs(&self) -> RepoResult<Vec<Blog>> {
        let mut stmt = self.conn.prepare(
            "SELECT blog_id, name
             FROM blogs
             ORDER BY name ASC, blog_id ASC;",
        )?;

        let mut rows = stmt.query([])?;
        let mut blogs = Vec::new();
        while let Some(row) = rows.next()? {
            blogs.push(Blog {
                blog_id: row.get("blog_id")?,
                name: row.get("name")?,
            });
        }

        Ok(blogs)
    }

    fn add_blog(&self, name: &str) -> RepoResult<BlogId> {
        validate_blog_name(name)?;

        self.conn
            .execute("INSERT INTO blogs (name) VALUES (?1);", [name])?;

        Ok(self.conn.last_insert_rowid())
    }

    fn blog_exists(&self, blog_id: BlogId) -> RepoResult<bool> {
        let exists: i64 = self.conn.query_row(
            "SELECT EXISTS(SELECT 1 FROM blogs WHERE blog_id = ?1);",
            [blog_id],
            |row| row.get(0),
        )?;

        Ok(exists == 1)
    }

    fn add_post(
        &self,
        title: &str,
        content: Option<&str>,
        blog_id: BlogId,
    ) -> RepoResult<PostId> {
        validate_post_title(title)?;

        self.conn.execute(
            "INSERT INTO posts (title, content, blog_id) VALUES (?1, ?2, ?3);",
            params![title, content, blog_id],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_posts(&self, blog_filter: Option<BlogId>) -> RepoResult<Vec<PostListing>> {
        let mut stmt = self.conn.prepare(&format!(
            "{POST_LISTING_SELECT_SQL}
             WHERE (?1 IS NULL OR p.blog_id = ?1)
             ORDER BY p.post_id ASC;"
        ))?;

        let mut rows = stmt.query([blog_filter])?;
        let mut posts = Vec::new();
        while let Some(row) = rows.next()? {
            posts.push(parse_post_listing_row(row)?);
        }

        Ok(posts)
    }
}

fn parse_post_listing_row(row: &Row<'_>) -> RepoResult<PostListing> {
    let post_id: PostId = row.get("post_id")?;
    let title: String = row.get("title")?;
    if validate_post_title(&title).is_err() {
        return Err(RepoError::InvalidData(format!(
            "blank title in posts.title for post_id {post_id}"
        )));
    }

    Ok(PostListing {
        post: Post {
            post_id,
            title,
            content: row.get("content")?,
            blog_id: row.get("blog_id")?,
        },
        blog_name: row.get("blog_name")?,
    })
}
