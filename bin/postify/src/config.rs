//! Process configuration, read once from the environment at startup.
//! Nothing in the codebase hard-codes an endpoint or a secret.

use std::env;

pub struct Config {
    pub bind_addr: String,
    pub database_url: String,
    /// Moderation webhook. When unset, reports are accepted and dropped.
    pub webhook_url: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_addr: env::var("POSTIFY_BIND_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".into()),
            database_url: env::var("POSTIFY_DATABASE_URL")
                .unwrap_or_else(|_| "sqlite:postify.db".into()),
            webhook_url: env::var("POSTIFY_WEBHOOK_URL").ok(),
        }
    }
}
