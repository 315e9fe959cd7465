//! SQLite connection bootstrap.
//!
//! Opening a connection enables foreign keys and creates the `blogs` and
//! `posts` tables when they are absent. There is no versioned migration
//! history: `schema.sql` only uses `CREATE ... IF NOT EXISTS`.

mod open;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, rusqlite::Error>;
