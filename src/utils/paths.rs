use std::borrow::Cow;
use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result, bail};

// Maximum size of a history file: 10MB
const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Validates that a file's size is within acceptable limits (10MB)
///
/// Takes an open file handle so the size check and the subsequent read see
/// the same file.
///
/// # Errors
///
/// Returns an error if:
/// - The file metadata cannot be read
/// - The file is larger than 10MB
pub fn validate_file_size(file: &File, path: &Path) -> Result<()> {
    let metadata = file
        .metadata()
        .with_context(|| format!("Failed to read file metadata: {}", path.display()))?;

    validate_byte_len(metadata.len(), &path.display().to_string())
}

/// Same limit as [`validate_file_size`] for payloads that never touch disk
pub fn validate_byte_len(len: u64, source: &str) -> Result<()> {
    if len > MAX_FILE_SIZE_BYTES {
        bail!("History too large: {} ({} bytes, max {} bytes)", source, len, MAX_FILE_SIZE_BYTES);
    }
    Ok(())
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &Path) -> String {
    let home = dirs::home_dir().map(|home| home.to_string_lossy().into_owned());
    format_path_with_tilde_internal(path, home.as_deref())
}

pub(crate) fn format_path_with_tilde_internal(path: &Path, home: Option<&str>) -> String {
    let path_str = path.to_string_lossy();
    if let Some(home) = home
        && !home.is_empty()
        && path_str.starts_with(home)
    {
        return path_str.replacen(home, "~", 1);
    }

    match path_str {
        Cow::Borrowed(s) => s.to_string(),
        Cow::Owned(s) => s,
    }
}

/// Joins a configured service location and an endpoint path
///
/// Bare host names get `https://`; anything that already carries a scheme is
/// used as-is, which lets tests and proxies point at plain HTTP.
pub fn service_url(host: &str, endpoint: &str) -> String {
    let host = host.trim().trim_end_matches('/');
    let endpoint = endpoint.trim_start_matches('/');
    if host.starts_with("http://") || host.starts_with("https://") {
        format!("{}/{}", host, endpoint)
    } else {
        format!("https://{}/{}", host, endpoint)
    }
}
