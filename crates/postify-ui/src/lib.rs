//! Askama templates for the two read views. The web layer renders these and
//! ships the HTML; no domain logic lives here.

use askama::Template;
use postify_core::models::{Post, PostSummary, Reply};

#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate<'a> {
    pub title: &'a str,
    pub posts: &'a [PostSummary],
    /// Display name from the session cookie; empty for anonymous visitors.
    pub user: &'a str,
}

#[derive(Template)]
#[template(path = "post.html")]
pub struct PostTemplate<'a> {
    pub post: &'a Post,
    pub replies: &'a [Reply],
}
