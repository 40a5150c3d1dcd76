//! Persistence for the rolling case history.
//!
//! The engine only sees the [`HistoryStore`] trait. Both backends use the
//! same row format (see `parsers::history`):
//!
//! - [`FileHistoryStore`]: a local CSV file, replaced atomically on save
//! - [`BlobHistoryStore`]: one object behind an HTTP URL (`GET`/`PUT`)

pub mod blob;
pub mod file;

pub use blob::BlobHistoryStore;
pub use file::FileHistoryStore;

use anyhow::Result;

use crate::config::HistorySettings;
use crate::models::CaseRecord;
use crate::utils::default_history_path;

pub trait HistoryStore {
    /// Everything stored so far; empty when nothing has been saved yet
    fn load(&self) -> Result<Vec<CaseRecord>>;

    /// Replace the stored history with `cases`
    fn save(&self, cases: &[CaseRecord]) -> Result<()>;

    /// Human-readable location for logs and `stats`
    fn location(&self) -> String;
}

/// Backend selected by configuration: the blob URL when set, a local file otherwise
pub fn store_for(settings: &HistorySettings) -> Result<Box<dyn HistoryStore>> {
    if let Some(url) = &settings.url {
        return Ok(Box::new(BlobHistoryStore::new(url.clone(), settings.token.clone())));
    }

    let path = match &settings.path {
        Some(path) => path.clone(),
        None => default_history_path()?,
    };
    Ok(Box::new(FileHistoryStore::new(path)))
}
