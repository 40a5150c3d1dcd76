//! History kept as a single object behind an HTTP URL
//!
//! Works with any store that serves the object on `GET` and replaces it on
//! `PUT`, such as a presigned object-storage URL or a WebDAV share. A `404`
//! on `GET` means no history has been written yet.

use anyhow::{Context, Result, bail};
use reqwest::StatusCode;
use reqwest::blocking::{Client, RequestBuilder};
use reqwest::header::CONTENT_TYPE;

use super::HistoryStore;
use crate::models::CaseRecord;
use crate::parsers::{decode_history, encode_history};
use crate::utils::validate_byte_len;

pub struct BlobHistoryStore {
    client: Client,
    url: String,
    token: Option<String>,
}

impl BlobHistoryStore {
    pub fn new(url: impl Into<String>, token: Option<String>) -> Self {
        Self { client: Client::new(), url: url.into(), token }
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }
}

impl HistoryStore for BlobHistoryStore {
    fn load(&self) -> Result<Vec<CaseRecord>> {
        let resp = self
            .authorize(self.client.get(&self.url))
            .send()
            .with_context(|| format!("Failed to fetch history from {}", self.url))?;

        let status = resp.status();
        if status == StatusCode::NOT_FOUND {
            tracing::info!(url = %self.url, "No history object yet, starting empty");
            return Ok(Vec::new());
        }
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            bail!("History fetch failed (status {}): {}", status.as_u16(), body);
        }

        let bytes = resp.bytes().context("Failed to read history object")?;
        validate_byte_len(bytes.len() as u64, &self.url)?;
        decode_history(&bytes[..]).with_context(|| format!("Failed to read history from {}", self.url))
    }

    fn save(&self, cases: &[CaseRecord]) -> Result<()> {
        let body = encode_history(cases)?;
        let resp = self
            .authorize(self.client.put(&self.url))
            .header(CONTENT_TYPE, "text/csv")
            .body(body)
            .send()
            .with_context(|| format!("Failed to upload history to {}", self.url))?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().unwrap_or_default();
            bail!("History upload failed (status {}): {}", status.as_u16(), body);
        }
        Ok(())
    }

    fn location(&self) -> String {
        // Presigned URLs carry credentials in the query string
        match self.url.split_once('?') {
            Some((base, _)) => base.to_string(),
            None => self.url.clone(),
        }
    }
}
