//! # postify-report
//!
//! `ReportSink` implementations. The real one forwards report payloads to a
//! single configured webhook as JSON; delivery is one-shot and best-effort,
//! the caller never retries.

use async_trait::async_trait;
use postify_core::models::Report;
use postify_core::traits::ReportSink;

/// Delivers reports to one fixed webhook URL over HTTPS.
pub struct WebhookReporter {
    client: reqwest::Client,
    url: String,
}

impl WebhookReporter {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.into(),
        }
    }
}

#[async_trait]
impl ReportSink for WebhookReporter {
    /// One outbound POST, `Content-Type: application/json`. A non-2xx status
    /// counts as a failed delivery; the response body is not consumed.
    async fn deliver(&self, report: &Report) -> anyhow::Result<()> {
        let response = self.client.post(&self.url).json(report).send().await?;
        let status = response.status();
        log::info!("webhook responded {status} for post {}", report.post_id);
        if !status.is_success() {
            anyhow::bail!("webhook returned {status}");
        }
        Ok(())
    }
}

/// Stand-in sink for deployments without a webhook configured: every report
/// is dropped on the floor, with a log line as the only trace.
pub struct DisabledReporter;

#[async_trait]
impl ReportSink for DisabledReporter {
    async fn deliver(&self, report: &Report) -> anyhow::Result<()> {
        log::warn!(
            "no report webhook configured, dropping report for post {}",
            report.post_id
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn sample_report() -> Report {
        Report {
            post_id: Uuid::new_v4(),
            post_name: "Hello".into(),
            author: "alice".into(),
            content: "World".into(),
            reason: "spam".into(),
        }
    }

    #[test]
    fn wire_payload_has_the_five_contract_fields() {
        let report = sample_report();
        let value = serde_json::to_value(&report).unwrap();
        let object = value.as_object().unwrap();

        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["author", "content", "post_id", "post_name", "reason"]);
        assert_eq!(object["post_id"], report.post_id.to_string());
        assert_eq!(object["post_name"], "Hello");
        assert_eq!(object["reason"], "spam");
    }

    #[tokio::test]
    async fn disabled_reporter_swallows_everything() {
        DisabledReporter.deliver(&sample_report()).await.unwrap();
    }

    #[tokio::test]
    async fn unreachable_webhook_is_a_delivery_error() {
        // Nothing listens on this port; the send itself must fail, not panic.
        let sink = WebhookReporter::new("http://127.0.0.1:1/hooks/reports");
        assert!(sink.deliver(&sample_report()).await.is_err());
    }
}
