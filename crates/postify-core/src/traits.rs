//! # Core Traits (Ports)
//!
//! Any plugin must implement these traits to be used by the binary.

use crate::models::{Post, PostSummary, Reply, Report};
use async_trait::async_trait;
use uuid::Uuid;

/// Data persistence contract for posts and replies.
///
/// Implementations persist each row atomically; callers are responsible for
/// validation and identity assignment (see `BoardService`).
#[async_trait]
pub trait PostRepo: Send + Sync {
    async fn insert_post(&self, post: &Post) -> anyhow::Result<()>;
    async fn insert_reply(&self, reply: &Reply) -> anyhow::Result<()>;
    async fn get_post(&self, id: Uuid) -> anyhow::Result<Option<Post>>;
    /// Replies in physical insertion order; empty for unknown posts.
    async fn replies_for_post(&self, post_id: Uuid) -> anyhow::Result<Vec<Reply>>;
    /// All posts in insertion order, projected for the board index.
    async fn list_posts(&self) -> anyhow::Result<Vec<PostSummary>>;
}

/// Outbound moderation contract: one-shot, best-effort delivery of a report
/// to an external channel.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Delivers a single report. An error means the report was (probably)
    /// lost; the caller swallows it, there is no retry.
    async fn deliver(&self, report: &Report) -> anyhow::Result<()>;
}
