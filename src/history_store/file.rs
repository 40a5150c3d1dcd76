//! Local history file with atomic writes

use std::fs::{self, File};
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};

use super::HistoryStore;
use crate::models::CaseRecord;
use crate::parsers::{decode_history, encode_history};
use crate::utils::{format_path_with_tilde, validate_file_size};

pub struct FileHistoryStore {
    path: PathBuf,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self.path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

impl HistoryStore for FileHistoryStore {
    /// A missing file is an empty history
    fn load(&self) -> Result<Vec<CaseRecord>> {
        if !self.path.exists() {
            tracing::info!(path = %self.path.display(), "No history file yet, starting empty");
            return Ok(Vec::new());
        }

        let file = File::open(&self.path)
            .with_context(|| format!("Failed to open history file: {}", self.path.display()))?;
        validate_file_size(&file, &self.path)?;

        decode_history(BufReader::new(file))
            .with_context(|| format!("Failed to read history file: {}", self.path.display()))
    }

    /// Replace the file wholesale (temp file + rename)
    fn save(&self, cases: &[CaseRecord]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create history directory: {}", parent.display())
            })?;
        }

        let bytes = encode_history(cases)?;
        let temp = self.temp_path();
        fs::write(&temp, bytes).context("Failed to write history temp file")?;
        fs::rename(&temp, &self.path).context("Failed to rename history temp file")?;
        Ok(())
    }

    fn location(&self) -> String {
        format_path_with_tilde(&self.path)
    }
}
