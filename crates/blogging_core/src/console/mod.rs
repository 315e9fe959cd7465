//! Interactive console: menu loop and request handlers.
//!
//! # Responsibility
//! - Render prompts and results on any `BufRead`/`Write` pair.
//! - Report rejections to the user and keep the loop running.
//! - Stop the loop on storage or terminal I/O failure.
//!
//! # Invariants
//! - Each handler performs at most one repository write.
//! - Errors escaping a handler are logged once, in [`menu::run_session`].

use crate::repo::blogging_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod handlers;
pub mod menu;
pub mod terminal;

pub use handlers::HandlerOutcome;
pub use menu::{run_menu_loop, run_session, MenuChoice, SessionEnd, MENU_TEXT};
pub use terminal::Terminal;

pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Non-recoverable failure inside a console session.
#[derive(Debug)]
pub enum ConsoleError {
    Io(std::io::Error),
    Repo(RepoError),
}

impl Display for ConsoleError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "console i/o failed: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ConsoleError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ConsoleError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for ConsoleError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
