//! # BoardService
//!
//! Orchestrates validation, identity assignment, and persistence for posts
//! and replies, and dispatches moderation reports. This is the only component
//! that assigns identifiers or writes through the `PostRepo` port.

use std::sync::Arc;

use uuid::Uuid;

use crate::error::{AppError, Result};
use crate::models::{Post, PostSummary, Reply, Report};
use crate::traits::{PostRepo, ReportSink};
use crate::validation::{validate_post_input, validate_reply_input};

/// Reason attached to a report when the submitter left the field out.
pub const DEFAULT_REPORT_REASON: &str = "No reason provided";

/// The application service shared across request handlers.
#[derive(Clone)]
pub struct BoardService {
    repo: Arc<dyn PostRepo>,
    reports: Arc<dyn ReportSink>,
}

impl BoardService {
    pub fn new(repo: Arc<dyn PostRepo>, reports: Arc<dyn ReportSink>) -> Self {
        Self { repo, reports }
    }

    /// Creates a post and returns its fresh identifier.
    ///
    /// Validation runs before any write: on `Rejected` the store is untouched.
    pub async fn create_post(&self, name: &str, author: &str, content: &str) -> Result<Uuid> {
        validate_post_input(name, author, content).map_err(AppError::Rejected)?;

        let post = Post {
            id: Uuid::new_v4(),
            name: name.to_string(),
            author: author.to_string(),
            content: content.to_string(),
        };
        self.repo.insert_post(&post).await?;
        Ok(post.id)
    }

    /// Creates a reply under `post_id` and returns its fresh identifier.
    ///
    /// The referenced post is not checked for existence here; the FK is
    /// declared in the schema but writes rely on the caller's navigation
    /// context, matching the read path which 404s before listing replies.
    pub async fn create_reply(&self, post_id: Uuid, author: &str, content: &str) -> Result<Uuid> {
        validate_reply_input(author, content).map_err(AppError::Rejected)?;

        let reply = Reply {
            id: Uuid::new_v4(),
            post_id,
            author: author.to_string(),
            content: content.to_string(),
        };
        self.repo.insert_reply(&reply).await?;
        Ok(reply.id)
    }

    pub async fn get_post(&self, id: Uuid) -> Result<Post> {
        self.repo
            .get_post(id)
            .await?
            .ok_or_else(|| AppError::not_found("post", id))
    }

    /// Replies in insertion order; empty when the post has none.
    pub async fn get_replies(&self, post_id: Uuid) -> Result<Vec<Reply>> {
        Ok(self.repo.replies_for_post(post_id).await?)
    }

    pub async fn list_posts(&self) -> Result<Vec<PostSummary>> {
        Ok(self.repo.list_posts().await?)
    }

    /// The detail view: resolves the post first (so an unknown id is a
    /// `NotFound` before any replies are read), then its replies.
    pub async fn post_detail(&self, id: Uuid) -> Result<(Post, Vec<Reply>)> {
        let post = self.get_post(id).await?;
        let replies = self.get_replies(id).await?;
        Ok((post, replies))
    }

    /// Snapshots the post and forwards it to the moderation sink.
    ///
    /// Fire-and-forget semantics: an unknown post id is a silent no-op, and a
    /// delivery failure is logged and swallowed. Only a storage failure on
    /// the snapshot read surfaces to the caller.
    pub async fn report_post(&self, post_id: Uuid, reason: Option<String>) -> Result<()> {
        let Some(post) = self.repo.get_post(post_id).await? else {
            log::debug!("report for unknown post {post_id}, dropping");
            return Ok(());
        };

        let report = Report {
            post_id: post.id,
            post_name: post.name,
            author: post.author,
            content: post.content,
            reason: reason.unwrap_or_else(|| DEFAULT_REPORT_REASON.to_string()),
        };

        log::info!("dispatching report for post {post_id}");
        if let Err(err) = self.reports.deliver(&report).await {
            log::warn!("report delivery failed for post {post_id}: {err:#}");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// In-memory `PostRepo` double: two vecs behind mutexes.
    #[derive(Default)]
    struct MemRepo {
        posts: Mutex<Vec<Post>>,
        replies: Mutex<Vec<Reply>>,
    }

    #[async_trait]
    impl PostRepo for MemRepo {
        async fn insert_post(&self, post: &Post) -> anyhow::Result<()> {
            self.posts.lock().unwrap().push(post.clone());
            Ok(())
        }

        async fn insert_reply(&self, reply: &Reply) -> anyhow::Result<()> {
            self.replies.lock().unwrap().push(reply.clone());
            Ok(())
        }

        async fn get_post(&self, id: Uuid) -> anyhow::Result<Option<Post>> {
            Ok(self.posts.lock().unwrap().iter().find(|p| p.id == id).cloned())
        }

        async fn replies_for_post(&self, post_id: Uuid) -> anyhow::Result<Vec<Reply>> {
            Ok(self
                .replies
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.post_id == post_id)
                .cloned()
                .collect())
        }

        async fn list_posts(&self) -> anyhow::Result<Vec<PostSummary>> {
            Ok(self
                .posts
                .lock()
                .unwrap()
                .iter()
                .map(|p| PostSummary {
                    id: p.id,
                    name: p.name.clone(),
                    author: p.author.clone(),
                })
                .collect())
        }
    }

    #[derive(Default)]
    struct RecordingSink {
        sent: Mutex<Vec<Report>>,
    }

    #[async_trait]
    impl ReportSink for RecordingSink {
        async fn deliver(&self, report: &Report) -> anyhow::Result<()> {
            self.sent.lock().unwrap().push(report.clone());
            Ok(())
        }
    }

    struct FailingSink;

    #[async_trait]
    impl ReportSink for FailingSink {
        async fn deliver(&self, _report: &Report) -> anyhow::Result<()> {
            anyhow::bail!("sink offline")
        }
    }

    fn service() -> (BoardService, Arc<MemRepo>, Arc<RecordingSink>) {
        let repo = Arc::new(MemRepo::default());
        let sink = Arc::new(RecordingSink::default());
        (
            BoardService::new(repo.clone(), sink.clone()),
            repo,
            sink,
        )
    }

    #[tokio::test]
    async fn rejected_post_writes_nothing() {
        let (svc, repo, _) = service();
        let err = svc
            .create_post(&"a".repeat(50), "alice", "body")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Rejected(_)));
        assert!(repo.posts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn rejected_reply_writes_nothing() {
        let (svc, repo, _) = service();
        let err = svc
            .create_reply(Uuid::new_v4(), "bob", "caf\u{e9}")
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Rejected(_)));
        assert!(repo.replies.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn created_ids_are_unique() {
        let (svc, _, _) = service();
        let mut seen = std::collections::HashSet::new();
        for i in 0..20 {
            let id = svc
                .create_post(&format!("post {i}"), "alice", "body")
                .await
                .unwrap();
            assert!(seen.insert(id), "id {id} was handed out twice");
        }
    }

    #[tokio::test]
    async fn get_post_unknown_id_is_not_found() {
        let (svc, _, _) = service();
        let err = svc.get_post(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, AppError::NotFound(..)));
    }

    #[tokio::test]
    async fn report_unknown_post_skips_the_sink() {
        let (svc, _, sink) = service();
        svc.report_post(Uuid::new_v4(), Some("spam".into()))
            .await
            .unwrap();
        assert!(sink.sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn report_payload_mirrors_the_stored_post() {
        let (svc, _, sink) = service();
        let id = svc.create_post("Hello", "alice", "World").await.unwrap();
        svc.report_post(id, Some("off topic".into())).await.unwrap();

        let sent = sink.sent.lock().unwrap();
        assert_eq!(
            *sent,
            vec![Report {
                post_id: id,
                post_name: "Hello".into(),
                author: "alice".into(),
                content: "World".into(),
                reason: "off topic".into(),
            }]
        );
    }

    #[tokio::test]
    async fn report_without_reason_uses_the_default() {
        let (svc, _, sink) = service();
        let id = svc.create_post("Hello", "alice", "World").await.unwrap();
        svc.report_post(id, None).await.unwrap();
        assert_eq!(sink.sent.lock().unwrap()[0].reason, DEFAULT_REPORT_REASON);
    }

    #[tokio::test]
    async fn delivery_failure_is_swallowed() {
        let repo = Arc::new(MemRepo::default());
        let svc = BoardService::new(repo, Arc::new(FailingSink));
        let id = svc.create_post("Hello", "alice", "World").await.unwrap();
        // Must not surface the sink error.
        svc.report_post(id, None).await.unwrap();
    }
}
