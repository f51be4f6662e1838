//! # Domain Models
//!
//! These structs represent the core entities of Postify.
//! We use UUID v4 for globally unique, never-reused identification.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered account. Latent schema only: no exposed operation creates,
/// reads, or mutates users, but the relation is part of the persisted layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    pub password_hash: String,
}

/// A top-level board entry with a display title, an author claim, and a body.
///
/// `author` is free text, not a foreign key into `users`: posting is
/// anonymous and the claim is never verified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    /// Display title, strictly under 50 characters.
    pub name: String,
    pub author: String,
    /// Body text, strictly under 5000 characters, ASCII only.
    pub content: String,
}

/// Listing projection for the board index: no body text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: Uuid,
    pub name: String,
    pub author: String,
}

/// A threaded response attached to exactly one post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: Uuid,
    pub post_id: Uuid,
    pub author: String,
    /// ASCII only. Unlike post bodies there is no length ceiling.
    pub content: String,
}

/// Outbound moderation payload delivered to the report webhook.
///
/// Field names are the wire contract: the JSON body is exactly
/// `{post_id, post_name, author, content, reason}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub post_id: Uuid,
    pub post_name: String,
    pub author: String,
    pub content: String,
    pub reason: String,
}
