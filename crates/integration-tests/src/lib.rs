//! Shared fixtures for the end-to-end suites: a real SQLite-backed service
//! wired to recordable report sinks.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use postify_core::{BoardService, Report, ReportSink};
use postify_db_sqlite::SqlitePostStore;

/// Captures every delivered report for later assertions.
#[derive(Default)]
pub struct RecordingSink {
    pub sent: Mutex<Vec<Report>>,
}

impl RecordingSink {
    pub fn deliveries(&self) -> Vec<Report> {
        self.sent.lock().expect("sink lock poisoned").clone()
    }
}

#[async_trait]
impl ReportSink for RecordingSink {
    async fn deliver(&self, report: &Report) -> anyhow::Result<()> {
        self.sent.lock().expect("sink lock poisoned").push(report.clone());
        Ok(())
    }
}

/// Fails every delivery, for exercising the swallow-errors contract.
pub struct FailingSink;

#[async_trait]
impl ReportSink for FailingSink {
    async fn deliver(&self, _report: &Report) -> anyhow::Result<()> {
        anyhow::bail!("sink offline")
    }
}

/// A service over a fresh in-memory store, with its report sink exposed.
pub async fn board_with_sink() -> (BoardService, Arc<RecordingSink>) {
    let store = SqlitePostStore::in_memory()
        .await
        .expect("in-memory sqlite store");
    let sink = Arc::new(RecordingSink::default());
    (BoardService::new(Arc::new(store), sink.clone()), sink)
}

pub async fn board() -> BoardService {
    board_with_sink().await.0
}
