use anyhow::{Context, Result, bail};
use reqwest::blocking::Client;

use super::{Notifier, Report};

/// Delivers reports by POSTing them as JSON to a mail/chat relay
///
/// The body is `{"from", "to", "subject", "text"}`. Any non-success status is
/// a delivery failure.
pub struct WebhookNotifier {
    client: Client,
    url: String,
    token: Option<String>,
}

impl WebhookNotifier {
    pub fn new(url: impl Into<String>, token: Option<String>) -> Self {
        Self { client: Client::new(), url: url.into(), token }
    }
}

impl Notifier for WebhookNotifier {
    fn deliver(&self, report: &Report) -> Result<()> {
        let mut request = self.client.post(&self.url).json(report);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let resp = request
            .send()
            .with_context(|| format!("Failed to reach notification webhook {}", self.url))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            bail!("Notification webhook rejected report (status {}): {}", status.as_u16(), body);
        }

        tracing::info!(to = %report.to, subject = %report.subject, "Report delivered to webhook");
        Ok(())
    }

    fn channel(&self) -> &'static str {
        "webhook"
    }
}
