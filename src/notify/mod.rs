//! Report composition and delivery.
//!
//! [`compose_report`] turns a run's classified cases into a [`Report`];
//! a [`Notifier`] sends it somewhere. Delivery failures are returned to the
//! run, which stops before history is written.

pub mod report;
pub mod webhook;

pub use report::{Report, compose_report, format_cost};
pub use webhook::WebhookNotifier;

use std::io::Write;

use anyhow::{Context, Result};

use crate::config::NotifySettings;

pub trait Notifier {
    fn deliver(&self, report: &Report) -> Result<()>;

    /// Short name for logs
    fn channel(&self) -> &'static str;
}

/// Prints reports to stdout, for cron mail or manual runs
pub struct StdoutNotifier;

impl StdoutNotifier {
    pub fn render(report: &Report) -> String {
        format!("From: {}\nTo: {}\nSubject: {}\n\n{}\n", report.from, report.to, report.subject, report.text)
    }
}

impl Notifier for StdoutNotifier {
    fn deliver(&self, report: &Report) -> Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(Self::render(report).as_bytes()).context("Failed to write report to stdout")?;
        stdout.flush().context("Failed to flush stdout")?;
        Ok(())
    }

    fn channel(&self) -> &'static str {
        "stdout"
    }
}

/// Notifier selected by configuration: the webhook when one is set, stdout otherwise
pub fn notifier_for(settings: &NotifySettings) -> Box<dyn Notifier> {
    match &settings.webhook_url {
        Some(url) => Box::new(WebhookNotifier::new(url.clone(), settings.webhook_token.clone())),
        None => Box::new(StdoutNotifier),
    }
}
