//! PACER Watch - Report newly filed federal court cases
//!
//! This library polls the PACER Case Locator for cases filed in a recent
//! window, works out which of them have not been seen before, and reports
//! them. It provides:
//!
//! - Search windows for daily and weekly runs
//! - Paginated search aggregation with fee accounting
//! - New-case detection and classification against a rolling 14-day history
//! - History persistence in a local file or behind an HTTP object URL
//! - Report composition and delivery
//!
//! # Example
//!
//! ```no_run
//! use chrono::Utc;
//! use pacer_watch::client::PacerClient;
//! use pacer_watch::config::Config;
//! use pacer_watch::engine::Engine;
//! use pacer_watch::history_store::FileHistoryStore;
//! use pacer_watch::models::RunMode;
//! use pacer_watch::notify::StdoutNotifier;
//!
//! let config = Config::load("config.toml".as_ref())?;
//! let client = PacerClient::new(&config.pacer.auth_host, &config.pacer.api_host);
//! let store = FileHistoryStore::new("history.csv");
//! let now = Utc::now().with_timezone(&config.pacer.court_tz);
//!
//! let summary = Engine::new(&config, &client, &client, &store, &StdoutNotifier)
//!     .run(RunMode::Daily, &now)?;
//! println!("{} new cases", summary.new_cases);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod engine;
pub mod history_store;
pub mod models;
pub mod notify;
pub mod parsers;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use engine::{Engine, RunSummary, compute_window, detect, prune};
pub use history_store::HistoryStore;
pub use models::{CaseCategory, CaseRecord, ClassifiedCases, RunMode};
