//! # postify-db-sqlite
//!
//! SQLite implementation of the `PostRepo` port. Maps the relational rows to
//! the postify-core domain models and owns the schema bootstrap.

use std::str::FromStr;

use async_trait::async_trait;
use postify_core::models::{Post, PostSummary, Reply};
use postify_core::traits::PostRepo;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use sqlx::Row;
use uuid::Uuid;

/// The board's persistent store: a single embedded SQLite file behind a
/// sqlx pool. Each operation acquires a connection from the pool; every
/// write is a single-row insert, so atomicity comes from SQLite itself.
pub struct SqlitePostStore {
    pool: SqlitePool,
}

// IDs are stored as hyphenated TEXT. A malformed cell decodes to the nil
// UUID rather than failing the whole read.
fn text_to_uuid(text: &str) -> Uuid {
    Uuid::from_str(text).unwrap_or_default()
}

impl SqlitePostStore {
    /// Opens (creating if missing) the database at `url`, e.g.
    /// `sqlite:postify.db`, and ensures the schema exists.
    pub async fn connect(url: &str) -> anyhow::Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);
        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        let store = Self { pool };
        store.ensure_schema().await?;
        log::info!("sqlite store ready at {url}");
        Ok(store)
    }

    /// An isolated in-memory store, used by tests. Capped at one connection
    /// so the pool does not hand out a second, empty `:memory:` database.
    pub async fn in_memory() -> anyhow::Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        let store = Self { pool };
        store.ensure_schema().await?;
        Ok(store)
    }

    /// Creates the three relations if they are not already present.
    /// Safe to call repeatedly; there are no further migrations.
    async fn ensure_schema(&self) -> anyhow::Result<()> {
        sqlx::query(
            "CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                username TEXT UNIQUE NOT NULL,
                password_hash TEXT NOT NULL
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS posts (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL CHECK(LENGTH(name) < 50),
                author TEXT NOT NULL,
                content TEXT NOT NULL CHECK(LENGTH(content) < 5000)
            )",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            "CREATE TABLE IF NOT EXISTS replies (
                id TEXT PRIMARY KEY,
                post_id TEXT NOT NULL,
                author TEXT NOT NULL,
                content TEXT NOT NULL,
                FOREIGN KEY (post_id) REFERENCES posts (id)
            )",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }
}

#[async_trait]
impl PostRepo for SqlitePostStore {
    async fn insert_post(&self, post: &Post) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO posts (id, name, author, content) VALUES (?, ?, ?, ?)")
            .bind(post.id.to_string())
            .bind(&post.name)
            .bind(&post.author)
            .bind(&post.content)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn insert_reply(&self, reply: &Reply) -> anyhow::Result<()> {
        sqlx::query("INSERT INTO replies (id, post_id, author, content) VALUES (?, ?, ?, ?)")
            .bind(reply.id.to_string())
            .bind(reply.post_id.to_string())
            .bind(&reply.author)
            .bind(&reply.content)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn get_post(&self, id: Uuid) -> anyhow::Result<Option<Post>> {
        let row = sqlx::query("SELECT id, name, author, content FROM posts WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(row.map(|row| Post {
            id: text_to_uuid(row.get::<&str, _>("id")),
            name: row.get("name"),
            author: row.get("author"),
            content: row.get("content"),
        }))
    }

    /// Replies come back in physical insertion order (rowid); nothing in
    /// scope ever deletes a row, so rowids are never reused.
    async fn replies_for_post(&self, post_id: Uuid) -> anyhow::Result<Vec<Reply>> {
        let rows = sqlx::query(
            "SELECT id, post_id, author, content FROM replies WHERE post_id = ? ORDER BY rowid",
        )
        .bind(post_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| Reply {
                id: text_to_uuid(row.get::<&str, _>("id")),
                post_id: text_to_uuid(row.get::<&str, _>("post_id")),
                author: row.get("author"),
                content: row.get("content"),
            })
            .collect())
    }

    async fn list_posts(&self) -> anyhow::Result<Vec<PostSummary>> {
        let rows = sqlx::query("SELECT id, name, author FROM posts ORDER BY rowid")
            .fetch_all(&self.pool)
            .await?;

        Ok(rows
            .into_iter()
            .map(|row| PostSummary {
                id: text_to_uuid(row.get::<&str, _>("id")),
                name: row.get("name"),
                author: row.get("author"),
            })
            .collect())
    }
}
