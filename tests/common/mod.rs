//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::cell::RefCell;
use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::path::Path;
use std::sync::{Arc, Mutex};
use std::thread::{self, JoinHandle};

use anyhow::{Result, bail};
use chrono::NaiveDate;
use pacer_watch::client::{AuthService, PacerError, SearchService};
use pacer_watch::config::Config;
use pacer_watch::history_store::HistoryStore;
use pacer_watch::models::CaseRecord;
use pacer_watch::models::api::{SearchPage, SearchRequest};
use pacer_watch::notify::{Notifier, Report};

/// Build a case record with a predictable link
pub fn case(number: &str, title: &str, filed: &str) -> CaseRecord {
    CaseRecord::new(
        number,
        title,
        NaiveDate::parse_from_str(filed, "%Y-%m-%d").expect("valid test date"),
        format!("https://ecf.nysd.uscourts.gov/cgi-bin/iqquerymenu.pl?{}", number),
        "cv",
    )
}

/// Config TOML pointing both PACER hosts at `host` and history at `history_path`
pub fn config_toml(host: &str, history_path: &Path) -> String {
    format!(
        r#"[pacer]
auth_host = "{host}"
api_host = "{host}"
court_id = "nysdce"
court_timezone = "America/New_York"
username = "clerk"
password = "hunter2"

[notify]
sender = "alerts@example.com"
recipient = "clerk@example.com"

[history]
path = "{path}"
"#,
        host = host,
        path = history_path.display()
    )
}

pub fn test_config(history_path: &Path) -> Config {
    Config::from_toml(&config_toml("pacer.invalid", history_path)).expect("valid test config")
}

/// Builder for one page of case locator JSON
pub struct SearchPageBuilder {
    cases: Vec<serde_json::Value>,
    total_pages: u32,
    fee: serde_json::Value,
}

impl SearchPageBuilder {
    pub fn new(total_pages: u32) -> Self {
        Self { cases: Vec::new(), total_pages, fee: serde_json::json!(0.10) }
    }

    pub fn fee(mut self, fee: serde_json::Value) -> Self {
        self.fee = fee;
        self
    }

    pub fn case(mut self, case: &CaseRecord) -> Self {
        self.cases.push(serde_json::json!({
            "caseNumberFull": case.case_number,
            "caseTitle": case.title,
            "dateFiled": case.date_filed.format("%Y-%m-%d").to_string(),
            "caseLink": case.link,
            "jurisdictionType": case.jurisdiction_type,
        }));
        self
    }

    pub fn terminated_case(mut self, case: &CaseRecord, date_termed: &str) -> Self {
        self.cases.push(serde_json::json!({
            "caseNumberFull": case.case_number,
            "caseTitle": case.title,
            "dateFiled": case.date_filed.format("%Y-%m-%d").to_string(),
            "dateTermed": date_termed,
            "caseLink": case.link,
            "jurisdictionType": case.jurisdiction_type,
        }));
        self
    }

    pub fn to_json(&self) -> String {
        serde_json::json!({
            "content": self.cases,
            "pageInfo": { "totalPages": self.total_pages, "number": 0 },
            "receipt": { "searchFee": self.fee },
        })
        .to_string()
    }

    pub fn build(&self) -> SearchPage {
        serde_json::from_str(&self.to_json()).expect("valid search page")
    }
}

/// In-process stand-in for the PACER services
pub struct FakePacer {
    pub login: std::result::Result<String, String>,
    pub logout_ok: bool,
    pub pages: Vec<std::result::Result<SearchPage, u16>>,
    pub calls: RefCell<Vec<String>>,
}

impl FakePacer {
    pub fn new(pages: Vec<SearchPage>) -> Self {
        Self {
            login: Ok("session-token".to_string()),
            logout_ok: true,
            pages: pages.into_iter().map(Ok).collect(),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }
}

impl AuthService for FakePacer {
    fn authenticate(&self, username: &str, _password: &str) -> pacer_watch::client::Result<String> {
        self.calls.borrow_mut().push(format!("login:{}", username));
        self.login.clone().map_err(PacerError::LoginRejected)
    }

    fn logout(&self, token: &str) -> pacer_watch::client::Result<()> {
        self.calls.borrow_mut().push(format!("logout:{}", token));
        if self.logout_ok {
            Ok(())
        } else {
            Err(PacerError::LogoutRejected("session already closed".to_string()))
        }
    }
}

impl SearchService for FakePacer {
    fn fetch_page(
        &self,
        _request: &SearchRequest,
        page: u32,
        token: &str,
    ) -> pacer_watch::client::Result<SearchPage> {
        self.calls.borrow_mut().push(format!("search:{}:{}", page, token));
        match self.pages.get(page as usize) {
            Some(Ok(page)) => Ok(page.clone()),
            Some(Err(status)) => {
                Err(PacerError::Api { status: *status, message: "service unavailable".to_string() })
            }
            None => Err(PacerError::Api { status: 404, message: "no such page".to_string() }),
        }
    }
}

/// History held in memory, counting loads and saves
#[derive(Default)]
pub struct MemoryStore {
    pub cases: RefCell<Vec<CaseRecord>>,
    pub loads: RefCell<usize>,
    pub saves: RefCell<usize>,
}

impl MemoryStore {
    pub fn with_cases(cases: Vec<CaseRecord>) -> Self {
        Self { cases: RefCell::new(cases), ..Default::default() }
    }
}

impl HistoryStore for MemoryStore {
    fn load(&self) -> Result<Vec<CaseRecord>> {
        *self.loads.borrow_mut() += 1;
        Ok(self.cases.borrow().clone())
    }

    fn save(&self, cases: &[CaseRecord]) -> Result<()> {
        *self.saves.borrow_mut() += 1;
        *self.cases.borrow_mut() = cases.to_vec();
        Ok(())
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}

/// Notifier that keeps reports instead of sending them
#[derive(Default)]
pub struct RecordingNotifier {
    pub reports: RefCell<Vec<Report>>,
    pub fail: bool,
}

impl RecordingNotifier {
    pub fn failing() -> Self {
        Self { fail: true, ..Default::default() }
    }
}

impl Notifier for RecordingNotifier {
    fn deliver(&self, report: &Report) -> Result<()> {
        if self.fail {
            bail!("relay refused connection");
        }
        self.reports.borrow_mut().push(report.clone());
        Ok(())
    }

    fn channel(&self) -> &'static str {
        "recording"
    }
}

/// A request seen by [`CannedServer`]
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub target: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.iter().find(|(key, _)| key.eq_ignore_ascii_case(name)).map(|(_, v)| v.as_str())
    }
}

/// Loopback HTTP server that answers each connection with the next canned response
pub struct CannedServer {
    pub base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: Option<JoinHandle<()>>,
}

impl CannedServer {
    pub fn start(responses: Vec<(u16, String)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind loopback");
        let base_url = format!("http://{}", listener.local_addr().expect("local addr"));
        let requests = Arc::new(Mutex::new(Vec::new()));
        let recorded = Arc::clone(&requests);

        let handle = thread::spawn(move || {
            for (status, body) in responses {
                let Ok((mut stream, _)) = listener.accept() else {
                    return;
                };
                if let Some(request) = read_request(&mut stream) {
                    recorded.lock().expect("request log").push(request);
                }
                let reason = if status < 400 { "OK" } else { "Error" };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    status,
                    reason,
                    body.len(),
                    body
                );
                let _ = stream.write_all(response.as_bytes());
                let _ = stream.flush();
            }
        });

        Self { base_url, requests, handle: Some(handle) }
    }

    /// Wait for every canned response to be served, then return what was received
    pub fn finish(mut self) -> Vec<RecordedRequest> {
        if let Some(handle) = self.handle.take() {
            handle.join().expect("server thread");
        }
        self.requests.lock().expect("request log").clone()
    }
}

fn read_request(stream: &mut TcpStream) -> Option<RecordedRequest> {
    let mut reader = BufReader::new(stream);

    let mut request_line = String::new();
    reader.read_line(&mut request_line).ok()?;
    let mut parts = request_line.split_whitespace();
    let method = parts.next()?.to_string();
    let target = parts.next()?.to_string();

    let mut headers = Vec::new();
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).ok()?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((key, value)) = line.split_once(':') {
            headers.push((key.trim().to_string(), value.trim().to_string()));
        }
    }

    let length = headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case("content-length"))
        .and_then(|(_, value)| value.parse::<usize>().ok())
        .unwrap_or(0);
    let mut body = vec![0; length];
    reader.read_exact(&mut body).ok()?;

    Some(RecordedRequest { method, target, headers, body: String::from_utf8_lossy(&body).into_owned() })
}
