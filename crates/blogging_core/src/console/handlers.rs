//! Menu-triggered request handlers.
//!
//! Each handler is one synchronous request/response cycle: prompt, delegate
//! to [`BlogService`], render. Rejections come back as
//! [`HandlerOutcome::Rejected`]; storage and I/O failures as `Err`.

use super::terminal::Terminal;
use super::{ConsoleError, ConsoleResult};
use crate::logging::sanitize_for_log;
use crate::model::blog::Blog;
use crate::model::post::Post;
use crate::repo::blogging_repo::BloggingRepository;
use crate::service::blog_service::{
    parse_post_filter, BlogService, Rejection, ServiceError, ServiceResult,
};
use log::{info, warn};
use std::io::{BufRead, Write};

/// Result of one handler run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerOutcome {
    /// A listing was printed with `count` rows (zero for an empty post list).
    Listed { count: usize },
    BlogAdded(Blog),
    PostAdded(Post),
    /// Input was invalid; storage is unchanged.
    Rejected(Rejection),
}

/// Prints every blog sorted by name.
pub fn display_blogs<R, I, O>(
    service: &BlogService<R>,
    terminal: &mut Terminal<I, O>,
) -> ConsoleResult<HandlerOutcome>
where
    R: BloggingRepository,
    I: BufRead,
    O: Write,
{
    let blogs = service.list_blogs()?;
    terminal.say(format!("Total blogs: {}", blogs.len()))?;
    for blog in &blogs {
        terminal.say(format!("Blog ID: {}, Name: {}", blog.blog_id, blog.name))?;
    }
    Ok(HandlerOutcome::Listed { count: blogs.len() })
}

/// Prompts for a name and creates a blog.
pub fn add_blog<R, I, O>(
    service: &BlogService<R>,
    terminal: &mut Terminal<I, O>,
) -> ConsoleResult<HandlerOutcome>
where
    R: BloggingRepository,
    I: BufRead,
    O: Write,
{
    let name = terminal.prompt("Enter a name for a new Blog: ")?;
    let blog = match settle(service.add_blog(&name))? {
        Ok(blog) => blog,
        Err(rejection) => return reject(terminal, "blog_add", rejection),
    };

    info!(
        "event=blog_add module=console status=ok blog_id={} name={}",
        blog.blog_id,
        sanitize_for_log(&blog.name)
    );
    terminal.say(format!("Blog '{}' added.", blog.name))?;
    Ok(HandlerOutcome::BlogAdded(blog))
}

/// Lists blogs, then prompts for target blog, title and optional content.
pub fn create_post<R, I, O>(
    service: &BlogService<R>,
    terminal: &mut Terminal<I, O>,
) -> ConsoleResult<HandlerOutcome>
where
    R: BloggingRepository,
    I: BufRead,
    O: Write,
{
    display_blogs(service, terminal)?;

    let raw_blog_id = terminal.prompt("Enter a Blog ID to post to: ")?;
    let blog_id = match settle(service.resolve_blog_id(&raw_blog_id))? {
        Ok(blog_id) => blog_id,
        Err(rejection) => return reject(terminal, "post_add", rejection),
    };

    let title = terminal.prompt("Enter the post title: ")?;
    if let Err(rejection) = service.check_post_title(&title) {
        return reject(terminal, "post_add", rejection);
    }

    let content = terminal.prompt("Enter the post content (optional): ")?;
    let post = match settle(service.create_post(blog_id, &title, Some(&content)))? {
        Ok(post) => post,
        Err(rejection) => return reject(terminal, "post_add", rejection),
    };

    info!(
        "event=post_add module=console status=ok post_id={} blog_id={} title={}",
        post.post_id,
        post.blog_id,
        sanitize_for_log(&post.title)
    );
    terminal.say(format!(
        "Post '{}' added to blog ID {}.",
        post.title, post.blog_id
    ))?;
    Ok(HandlerOutcome::PostAdded(post))
}

/// Prompts for a blog filter (`0` = all) and prints matching posts.
pub fn display_posts<R, I, O>(
    service: &BlogService<R>,
    terminal: &mut Terminal<I, O>,
) -> ConsoleResult<HandlerOutcome>
where
    R: BloggingRepository,
    I: BufRead,
    O: Write,
{
    let raw_filter = terminal.prompt("Enter Blog ID to display posts (0 for all blogs): ")?;
    let blog_filter = match parse_post_filter(&raw_filter) {
        Ok(filter) => filter,
        Err(rejection) => return reject(terminal, "post_list", rejection),
    };

    let posts = service.list_posts(blog_filter)?;
    if posts.is_empty() {
        terminal.say("No posts found for this blog.")?;
        return Ok(HandlerOutcome::Listed { count: 0 });
    }

    terminal.say(format!("Total posts: {}", posts.len()))?;
    for listing in &posts {
        terminal.say(format!(
            "Blog Name: {}, Post Title: {}, Post Content: {}",
            listing.blog_name,
            listing.post.title,
            listing.content_or_placeholder()
        ))?;
    }
    Ok(HandlerOutcome::Listed { count: posts.len() })
}

/// Splits a service result into a recoverable rejection or a fatal error.
fn settle<T>(result: ServiceResult<T>) -> ConsoleResult<Result<T, Rejection>> {
    match result {
        Ok(value) => Ok(Ok(value)),
        Err(ServiceError::Rejected(rejection)) => Ok(Err(rejection)),
        Err(ServiceError::Repo(err)) => Err(ConsoleError::Repo(err)),
    }
}

fn reject<I: BufRead, O: Write>(
    terminal: &mut Terminal<I, O>,
    operation: &str,
    rejection: Rejection,
) -> ConsoleResult<HandlerOutcome> {
    warn!(
        "event=input_rejected module=console status=rejected op={operation} reason={}",
        rejection.code()
    );
    terminal.say(rejection.to_string())?;
    Ok(HandlerOutcome::Rejected(rejection))
}
