//! Blocking client for the PACER authentication service and Case Locator API.
//!
//! The engine only depends on the [`AuthService`] and [`SearchService`]
//! traits; [`PacerClient`] is the production implementation of both.

pub mod error;

pub use error::{PacerError, Result};

use reqwest::blocking::{Client, Response};
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::models::api::{LoginRequest, LoginResponse, LogoutRequest, SearchPage, SearchRequest};
use crate::utils::service_url;

const AUTH_ENDPOINT: &str = "services/cso-auth";
const LOGOUT_ENDPOINT: &str = "services/cso-logout";
const SEARCH_ENDPOINT: &str = "pcl-public-api/rest/cases/find";
const SESSION_HEADER: &str = "X-NEXT-GEN-CSO";
const SEARCH_SORT: &str = "sort=jurisdictionType,ASC&sort=dateFiled,DESC";
const JSON: &str = "application/json";

/// Session handshake with the authentication service
pub trait AuthService {
    /// Exchange credentials for a session token
    fn authenticate(&self, username: &str, password: &str) -> Result<String>;

    /// Invalidate a session token
    fn logout(&self, token: &str) -> Result<()>;
}

/// One page of a case locator search
pub trait SearchService {
    fn fetch_page(&self, request: &SearchRequest, page: u32, token: &str) -> Result<SearchPage>;
}

pub struct PacerClient {
    client: Client,
    auth_host: String,
    api_host: String,
}

impl PacerClient {
    pub fn new(auth_host: impl Into<String>, api_host: impl Into<String>) -> Self {
        Self { client: Client::new(), auth_host: auth_host.into(), api_host: api_host.into() }
    }

    fn post_auth<T: serde::Serialize>(&self, endpoint: &str, body: &T) -> Result<LoginResponse> {
        let url = service_url(&self.auth_host, endpoint);
        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .json(body)
            .send()?;

        parse_json(resp)
    }
}

impl AuthService for PacerClient {
    fn authenticate(&self, username: &str, password: &str) -> Result<String> {
        tracing::debug!(username, "Authenticating with PACER");

        let resp = self.post_auth(AUTH_ENDPOINT, &LoginRequest { login_id: username, password })?;
        if !resp.is_success() {
            return Err(PacerError::LoginRejected(describe_failure(&resp)));
        }

        resp.next_gen_cso
            .filter(|token| !token.is_empty())
            .ok_or_else(|| PacerError::Parse("login succeeded without a session token".to_string()))
    }

    fn logout(&self, token: &str) -> Result<()> {
        let resp = self.post_auth(LOGOUT_ENDPOINT, &LogoutRequest { next_gen_cso: token })?;
        if !resp.is_success() {
            return Err(PacerError::LogoutRejected(describe_failure(&resp)));
        }
        Ok(())
    }
}

impl SearchService for PacerClient {
    fn fetch_page(&self, request: &SearchRequest, page: u32, token: &str) -> Result<SearchPage> {
        let url = format!("{}?page={}&{}", service_url(&self.api_host, SEARCH_ENDPOINT), page, SEARCH_SORT);
        let resp = self
            .client
            .post(&url)
            .header(CONTENT_TYPE, JSON)
            .header(ACCEPT, JSON)
            .header(SESSION_HEADER, token)
            .json(request)
            .send()?;

        parse_json(resp)
    }
}

fn parse_json<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().unwrap_or_default();
        return Err(PacerError::Api { status: status.as_u16(), message: body });
    }

    let body = resp.text()?;
    Ok(serde_json::from_str(&body)?)
}

fn describe_failure(resp: &LoginResponse) -> String {
    resp.error_description
        .clone()
        .filter(|description| !description.trim().is_empty())
        .unwrap_or_else(|| format!("loginResult {}", resp.login_result))
}
