//! Menu loop and top-level session boundary.

use super::handlers::{add_blog, create_post, display_blogs, display_posts};
use super::terminal::Terminal;
use super::ConsoleResult;
use crate::repo::blogging_repo::BloggingRepository;
use crate::service::blog_service::BlogService;
use log::{error, info};
use std::io::{BufRead, Write};

/// Menu printed before every choice.
pub const MENU_TEXT: &str = "Choose an option:
1. Display all blogs
2. Add a blog
3. Create a post
4. Display posts
5. Exit";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    DisplayBlogs,
    AddBlog,
    CreatePost,
    DisplayPosts,
    Exit,
}

impl MenuChoice {
    /// Matches the literal option text; surrounding whitespace is not accepted.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(Self::DisplayBlogs),
            "2" => Some(Self::AddBlog),
            "3" => Some(Self::CreatePost),
            "4" => Some(Self::DisplayPosts),
            "5" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    /// User picked "Exit".
    Exited,
    /// Input closed at the menu prompt.
    InputClosed,
    /// A storage or terminal failure escaped a handler.
    Aborted,
}

impl SessionEnd {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Exited => "exited",
            Self::InputClosed => "input_closed",
            Self::Aborted => "aborted",
        }
    }
}

/// Runs the menu until the user exits or input closes.
///
/// Returns the first error a handler produces without running further
/// iterations.
pub fn run_menu_loop<R, I, O>(
    service: &BlogService<R>,
    terminal: &mut Terminal<I, O>,
) -> ConsoleResult<SessionEnd>
where
    R: BloggingRepository,
    I: BufRead,
    O: Write,
{
    loop {
        terminal.say("")?;
        terminal.say(MENU_TEXT)?;

        let Some(raw_choice) = terminal.read_line()? else {
            return Ok(SessionEnd::InputClosed);
        };

        match MenuChoice::parse(&raw_choice) {
            Some(MenuChoice::DisplayBlogs) => {
                display_blogs(service, terminal)?;
            }
            Some(MenuChoice::AddBlog) => {
                add_blog(service, terminal)?;
            }
            Some(MenuChoice::CreatePost) => {
                create_post(service, terminal)?;
            }
            Some(MenuChoice::DisplayPosts) => {
                display_posts(service, terminal)?;
            }
            Some(MenuChoice::Exit) => return Ok(SessionEnd::Exited),
            None => terminal.say("Invalid option, try again.")?,
        }
    }
}

/// Runs one interactive session and never fails.
///
/// Any error escaping the loop is logged here and ends the session as
/// [`SessionEnd::Aborted`].
pub fn run_session<R, I, O>(service: &BlogService<R>, input: I, output: O) -> SessionEnd
where
    R: BloggingRepository,
    I: BufRead,
    O: Write,
{
    let mut terminal = Terminal::new(input, output);
    let end = match run_menu_loop(service, &mut terminal) {
        Ok(end) => end,
        Err(err) => {
            error!("event=session_aborted module=console status=error error={err}");
            SessionEnd::Aborted
        }
    };

    info!(
        "event=session_end module=console status=ok end={}",
        end.as_str()
    );
    end
}

#[cfg(test)]
mod tests {
    use super::MenuChoice;

    #[test]
    fn only_literal_digits_map_to_choices() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::DisplayBlogs));
        assert_eq!(MenuChoice::parse("5"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse(" 1"), None);
        assert_eq!(MenuChoice::parse("6"), None);
        assert_eq!(MenuChoice::parse(""), None);
    }
}
