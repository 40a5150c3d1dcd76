//! Run configuration.
//!
//! Built once at startup, either from a TOML file or from environment
//! variables, validated, and then passed by reference into every component.
//! Nothing below the CLI reads the environment or the filesystem for
//! settings.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use chrono_tz::Tz;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub pacer: PacerSettings,
    pub notify: NotifySettings,
    #[serde(default)]
    pub history: HistorySettings,
}

#[derive(Clone, Deserialize)]
pub struct PacerSettings {
    /// Authentication service host, e.g. `pacer.login.uscourts.gov`
    pub auth_host: String,
    /// Case locator host, e.g. `pcl.uscourts.gov`
    pub api_host: String,
    pub court_id: String,
    /// Dates are computed in the court's local time
    #[serde(
        rename = "court_timezone",
        deserialize_with = "crate::parsers::deserializers::deserialize_timezone"
    )]
    pub court_tz: Tz,
    pub username: String,
    pub password: String,
}

impl fmt::Debug for PacerSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PacerSettings")
            .field("auth_host", &self.auth_host)
            .field("api_host", &self.api_host)
            .field("court_id", &self.court_id)
            .field("court_tz", &self.court_tz)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[derive(Clone, Deserialize)]
pub struct NotifySettings {
    pub sender: String,
    pub recipient: String,
    /// Reports are printed to stdout when no webhook is configured
    #[serde(default)]
    pub webhook_url: Option<String>,
    #[serde(default)]
    pub webhook_token: Option<String>,
}

impl fmt::Debug for NotifySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NotifySettings")
            .field("sender", &self.sender)
            .field("recipient", &self.recipient)
            .field("webhook_url", &self.webhook_url)
            .field("webhook_token", &self.webhook_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Clone, Default, Deserialize)]
pub struct HistorySettings {
    /// Local history file; defaults to the platform data directory
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Remote object URL; takes precedence over `path` when set
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

impl fmt::Debug for HistorySettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistorySettings")
            .field("path", &self.path)
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

impl Config {
    /// Load and validate a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            bail!("Config file not found: {}", path.display());
        }

        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_toml(&raw)
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        Ok(config)
    }

    pub fn from_toml(raw: &str) -> Result<Self> {
        let config: Config = toml::from_str(raw).context("Failed to parse config TOML")?;
        config.validate()?;
        Ok(config)
    }

    /// Build configuration from `PACER_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from any key lookup (the environment in production)
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key).with_context(|| format!("{} environment variable is required", key))
        };
        let optional = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let tz_name = required("PACER_COURT_TZ")?;
        let court_tz = tz_name
            .trim()
            .parse::<Tz>()
            .map_err(|e| anyhow::anyhow!("Unknown time zone '{}' in PACER_COURT_TZ: {}", tz_name, e))?;

        let config = Config {
            pacer: PacerSettings {
                auth_host: required("PACER_AUTH_HOST")?,
                api_host: required("PACER_API_HOST")?,
                court_id: required("PACER_COURT_ID")?,
                court_tz,
                username: required("PACER_USERNAME")?,
                password: required("PACER_PASSWORD")?,
            },
            notify: NotifySettings {
                sender: required("PACER_NOTIFY_SENDER")?,
                recipient: required("PACER_NOTIFY_RECIPIENT")?,
                webhook_url: optional("PACER_WEBHOOK_URL"),
                webhook_token: optional("PACER_WEBHOOK_TOKEN"),
            },
            history: HistorySettings {
                path: optional("PACER_HISTORY_PATH").map(PathBuf::from),
                url: optional("PACER_HISTORY_URL"),
                token: optional("PACER_HISTORY_TOKEN"),
            },
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject empty required settings
    pub fn validate(&self) -> Result<()> {
        let required = [
            ("pacer.auth_host", &self.pacer.auth_host),
            ("pacer.api_host", &self.pacer.api_host),
            ("pacer.court_id", &self.pacer.court_id),
            ("pacer.username", &self.pacer.username),
            ("pacer.password", &self.pacer.password),
            ("notify.sender", &self.notify.sender),
            ("notify.recipient", &self.notify.recipient),
        ];

        let missing: Vec<&str> =
            required.iter().filter(|(_, value)| value.trim().is_empty()).map(|(key, _)| *key).collect();
        if !missing.is_empty() {
            bail!("Missing required settings: {}", missing.join(", "));
        }

        if let Some(url) = &self.history.url
            && !(url.starts_with("http://") || url.starts_with("https://"))
        {
            bail!("history.url must be an http(s) URL, got '{}'", url);
        }

        Ok(())
    }

    /// Log the effective configuration without secrets
    pub fn log_redacted(&self) {
        tracing::info!(
            auth_host = %self.pacer.auth_host,
            api_host = %self.pacer.api_host,
            court_id = %self.pacer.court_id,
            court_tz = %self.pacer.court_tz,
            username = %self.pacer.username,
            webhook = self.notify.webhook_url.is_some(),
            remote_history = self.history.url.is_some(),
            "Loaded configuration"
        );
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const VALID: &str = r#"
[pacer]
auth_host = "pacer.login.uscourts.gov"
api_host = "pcl.uscourts.gov"
court_id = "nysdce"
court_timezone = "America/New_York"
username = "clerk"
password = "hunter2"

[notify]
sender = "alerts@example.com"
recipient = "clerk@example.com"
"#;

    #[test]
    fn test_parse_minimal_config() {
        let config = Config::from_toml(VALID).unwrap();
        assert_eq!(config.pacer.court_id, "nysdce");
        assert_eq!(config.pacer.court_tz, chrono_tz::America::New_York);
        assert!(config.notify.webhook_url.is_none());
        assert!(config.history.path.is_none());
        assert!(config.history.url.is_none());
    }

    #[test]
    fn test_parse_history_and_webhook_sections() {
        let raw = format!(
            "{}\nwebhook_url = \"https://relay.example.com/send\"\n\n[history]\npath = \"/var/lib/pacer/history.csv\"\n",
            VALID.trim_end()
        );
        let config = Config::from_toml(&raw).unwrap();
        assert_eq!(config.notify.webhook_url.as_deref(), Some("https://relay.example.com/send"));
        assert_eq!(config.history.path, Some(PathBuf::from("/var/lib/pacer/history.csv")));
    }

    #[test]
    fn test_rejects_unknown_timezone() {
        let raw = VALID.replace("America/New_York", "Mars/Olympus_Mons");
        let err = Config::from_toml(&raw).unwrap_err();
        assert!(format!("{:#}", err).contains("unknown time zone"));
    }

    #[test]
    fn test_rejects_missing_section() {
        let raw = VALID.split("[notify]").next().unwrap();
        assert!(Config::from_toml(raw).is_err());
    }

    #[test]
    fn test_rejects_empty_required_values() {
        let raw = VALID.replace(r#"password = "hunter2""#, r#"password = "  ""#);
        let err = Config::from_toml(&raw).unwrap_err();
        assert!(err.to_string().contains("pacer.password"));
    }

    #[test]
    fn test_rejects_non_http_history_url() {
        let raw = format!("{}\n[history]\nurl = \"s3://bucket/history.csv\"\n", VALID);
        let err = Config::from_toml(&raw).unwrap_err();
        assert!(err.to_string().contains("history.url"));
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = Config::from_toml(VALID).unwrap();
        let debug = format!("{:?}", config);
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let err = Config::load(&dir.path().join("config.toml")).unwrap_err();
        assert!(err.to_string().contains("Config file not found"));
    }

    fn env_lookup(vars: &HashMap<&'static str, &'static str>) -> impl Fn(&str) -> Option<String> {
        let vars = vars.clone();
        move |key| vars.get(key).map(|v| v.to_string())
    }

    fn full_env() -> HashMap<&'static str, &'static str> {
        HashMap::from([
            ("PACER_AUTH_HOST", "pacer.login.uscourts.gov"),
            ("PACER_API_HOST", "pcl.uscourts.gov"),
            ("PACER_COURT_ID", "nysdce"),
            ("PACER_COURT_TZ", "America/Chicago"),
            ("PACER_USERNAME", "clerk"),
            ("PACER_PASSWORD", "hunter2"),
            ("PACER_NOTIFY_SENDER", "alerts@example.com"),
            ("PACER_NOTIFY_RECIPIENT", "clerk@example.com"),
            ("PACER_HISTORY_URL", "https://bucket.example.com/history.csv"),
            ("PACER_WEBHOOK_URL", ""),
        ])
    }

    #[test]
    fn test_from_lookup() {
        let config = Config::from_lookup(env_lookup(&full_env())).unwrap();
        assert_eq!(config.pacer.court_tz, chrono_tz::America::Chicago);
        assert_eq!(config.history.url.as_deref(), Some("https://bucket.example.com/history.csv"));
        // Empty optional values count as unset
        assert!(config.notify.webhook_url.is_none());
    }

    #[test]
    fn test_from_lookup_missing_variable() {
        let mut vars = full_env();
        vars.remove("PACER_PASSWORD");
        let err = Config::from_lookup(env_lookup(&vars)).unwrap_err();
        assert!(err.to_string().contains("PACER_PASSWORD environment variable is required"));
    }
}
