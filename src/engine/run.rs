use std::fmt::Display;

use anyhow::{Context, Result};
use chrono::{DateTime, TimeZone};
use rust_decimal::Decimal;

use super::detect::detect;
use super::prune::{prune, unseen_cases};
use super::search::SearchAggregator;
use super::window::{SearchWindow, compute_window};
use crate::client::{AuthService, SearchService};
use crate::config::Config;
use crate::history_store::HistoryStore;
use crate::models::RunMode;
use crate::notify::{Notifier, compose_report};

/// What a completed run did
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub window: SearchWindow,
    pub pages: u32,
    pub searched: usize,
    pub new_cases: usize,
    pub cost: Decimal,
    pub history_len: usize,
}

/// One end-to-end run against explicit collaborators
pub struct Engine<'a> {
    config: &'a Config,
    auth: &'a dyn AuthService,
    search: &'a dyn SearchService,
    store: &'a dyn HistoryStore,
    notifier: &'a dyn Notifier,
}

impl<'a> Engine<'a> {
    pub fn new(
        config: &'a Config,
        auth: &'a dyn AuthService,
        search: &'a dyn SearchService,
        store: &'a dyn HistoryStore,
        notifier: &'a dyn Notifier,
    ) -> Self {
        Self { config, auth, search, store, notifier }
    }

    /// Search, report new cases, then remember everything that was searched
    ///
    /// The session is invalidated on the way out whether or not the run
    /// succeeded. A failed logout fails an otherwise successful run; after a
    /// failure it is only logged.
    ///
    /// # Errors
    ///
    /// - Authentication rejected: nothing is searched.
    /// - Search failure on any page: nothing is reported or written.
    /// - Delivery failure: history is left as it was, so the same cases are
    ///   reported again next run.
    pub fn run<Tz>(&self, mode: RunMode, now: &DateTime<Tz>) -> Result<RunSummary>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let window = compute_window(mode, now);
        tracing::info!(%mode, %window, court = %self.config.pacer.court_id, "Starting case search");

        let token = self
            .auth
            .authenticate(&self.config.pacer.username, &self.config.pacer.password)
            .context("Authentication failed")?;

        let result = self.run_session(mode, now, window, &token);

        match result {
            Ok(summary) => {
                self.auth.logout(&token).context("Failed to invalidate PACER session")?;
                Ok(summary)
            }
            Err(err) => {
                if let Err(logout_err) = self.auth.logout(&token) {
                    tracing::warn!(error = %logout_err, "Failed to invalidate PACER session after error");
                }
                Err(err)
            }
        }
    }

    fn run_session<Tz>(
        &self,
        mode: RunMode,
        now: &DateTime<Tz>,
        window: SearchWindow,
        token: &str,
    ) -> Result<RunSummary>
    where
        Tz: TimeZone,
        Tz::Offset: Display,
    {
        let outcome = SearchAggregator::new(self.search)
            .search(&window, token, &self.config.pacer.court_id)
            .context("Case search failed; nothing was reported or recorded")?;
        tracing::info!(
            pages = outcome.pages,
            cases = outcome.cases.len(),
            cost = %outcome.cost,
            "Search complete"
        );

        let history = self
            .store
            .load()
            .with_context(|| format!("Failed to load history from {}", self.store.location()))?;

        let classified = detect(&outcome.cases, &history);
        tracing::info!(new_cases = classified.total, history = history.len(), "Detected new cases");

        let report = compose_report(
            &classified,
            outcome.cost,
            mode,
            &self.config.notify.sender,
            &self.config.notify.recipient,
            now,
        );
        self.notifier.deliver(&report).with_context(|| {
            format!("Failed to deliver report via {}; history was not updated", self.notifier.channel())
        })?;

        let unseen = unseen_cases(&outcome.cases, &history);
        let updated = prune(history, unseen, now);
        self.store
            .save(&updated)
            .with_context(|| format!("Failed to save history to {}", self.store.location()))?;
        tracing::info!(retained = updated.len(), location = %self.store.location(), "History updated");

        Ok(RunSummary {
            window,
            pages: outcome.pages,
            searched: outcome.cases.len(),
            new_cases: classified.total,
            cost: outcome.cost,
            history_len: updated.len(),
        })
    }
}
