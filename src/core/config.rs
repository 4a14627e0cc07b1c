//! Application configuration management
//!
//! Configuration is read once at startup from the process environment (after
//! an optional `.env` file has been merged in) and is immutable afterwards.
//! Missing Twilio credentials are a fatal error: the caller is expected to
//! exit before binding a listener.

use crate::core::constants::{defaults, env};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use thiserror::Error;

/// Errors raised while assembling [`Config`]
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(
        "Missing Twilio credentials: {}. Ensure TWILIO_SID, TWILIO_AUTH_TOKEN, and TWILIO_PHONE are set.",
        .0.join(", ")
    )]
    MissingCredentials(Vec<&'static str>),

    #[error("Invalid {name} value {value:?}: {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },

    #[error("Failed to read dotenv file: {0}")]
    Dotenv(#[from] dotenv::Error),
}

/// Immutable application configuration
#[derive(Clone)]
pub struct Config {
    /// Twilio account identifier
    pub account_sid: String,

    /// Twilio authentication token
    pub auth_token: String,

    /// Sender address used as `From` for every outbound message
    pub sender: String,

    /// Twilio API root, without trailing slash
    pub twilio_base_url: String,

    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Logging level
    pub log_level: String,

    /// Provider request timeout in seconds
    pub request_timeout: u64,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("account_sid", &self.account_sid)
            .field("auth_token", &"<redacted>")
            .field("sender", &self.sender)
            .field("twilio_base_url", &self.twilio_base_url)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("log_level", &self.log_level)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl Config {
    /// Build configuration from an arbitrary key lookup
    ///
    /// Empty values are treated exactly like unset ones. All missing
    /// credentials are reported together.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Any of `TWILIO_SID`, `TWILIO_AUTH_TOKEN`, `TWILIO_PHONE` is missing
    /// - `PORT` or `REQUEST_TIMEOUT` is set but not a valid number
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| lookup(name).filter(|value| !value.is_empty());

        let account_sid = get(env::ACCOUNT_SID);
        let auth_token = get(env::AUTH_TOKEN);
        let sender = get(env::SENDER);

        let (account_sid, auth_token, sender) = match (account_sid, auth_token, sender) {
            (Some(sid), Some(token), Some(sender)) => (sid, token, sender),
            (sid, token, sender) => {
                let missing = [
                    (env::ACCOUNT_SID, sid.is_none()),
                    (env::AUTH_TOKEN, token.is_none()),
                    (env::SENDER, sender.is_none()),
                ]
                .into_iter()
                .filter_map(|(name, absent)| absent.then_some(name))
                .collect();
                return Err(ConfigError::MissingCredentials(missing));
            }
        };

        let port = match get(env::PORT) {
            Some(raw) => raw.trim().parse::<u16>().map_err(|e| ConfigError::InvalidValue {
                name: env::PORT,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults::PORT,
        };

        let request_timeout = match get(env::REQUEST_TIMEOUT) {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| ConfigError::InvalidValue {
                name: env::REQUEST_TIMEOUT,
                value: raw.clone(),
                reason: e.to_string(),
            })?,
            None => defaults::REQUEST_TIMEOUT,
        };

        let twilio_base_url = get(env::BASE_URL)
            .unwrap_or_else(|| defaults::TWILIO_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Config {
            account_sid,
            auth_token,
            sender,
            twilio_base_url,
            host: get(env::HOST).unwrap_or_else(|| defaults::HOST.to_string()),
            port,
            log_level: get(env::LOG_LEVEL).unwrap_or_else(|| defaults::LOG_LEVEL.to_string()),
            request_timeout,
        })
    }

    /// Load configuration from the process environment
    ///
    /// When `ENV_FILE` is set, settings come from that file alone. Otherwise a
    /// `.env` file in the working directory, if present, is merged into the
    /// environment first; variables that are already set are left untouched.
    pub fn from_env() -> Result<Self, ConfigError> {
        if let Some(path) = std::env::var_os(env::ENV_FILE) {
            return Self::from_dotenv_file(path);
        }

        dotenv::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration from a dotenv file only, ignoring the process environment
    pub fn from_dotenv_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let vars = dotenv::from_path_iter(path)?.collect::<Result<HashMap<_, _>, _>>()?;
        Self::from_lookup(|name| vars.get(name).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const CREDENTIALS: [(&str, &str); 3] = [
        ("TWILIO_SID", "ACtest"),
        ("TWILIO_AUTH_TOKEN", "secret"),
        ("TWILIO_PHONE", "+15550000000"),
    ];

    #[test]
    fn test_load_with_defaults() {
        let config = Config::from_lookup(lookup_from(&CREDENTIALS)).unwrap();
        assert_eq!(config.account_sid, "ACtest");
        assert_eq!(config.auth_token, "secret");
        assert_eq!(config.sender, "+15550000000");
        assert_eq!(config.port, 5000);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.request_timeout, 90);
        assert_eq!(config.twilio_base_url, "https://api.twilio.com");
    }

    #[test]
    fn test_each_missing_credential_is_reported() {
        for skipped in 0..CREDENTIALS.len() {
            let pairs: Vec<_> = CREDENTIALS
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != skipped)
                .map(|(_, pair)| *pair)
                .collect();

            match Config::from_lookup(lookup_from(&pairs)) {
                Err(ConfigError::MissingCredentials(missing)) => {
                    assert_eq!(missing, vec![CREDENTIALS[skipped].0]);
                }
                other => panic!("expected missing credentials, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_empty_credential_counts_as_missing() {
        let result = Config::from_lookup(lookup_from(&[
            ("TWILIO_SID", ""),
            ("TWILIO_AUTH_TOKEN", "secret"),
        ]));

        let err = result.unwrap_err();
        assert!(matches!(
            &err,
            ConfigError::MissingCredentials(missing) if missing == &vec!["TWILIO_SID", "TWILIO_PHONE"]
        ));
        assert!(err.to_string().contains("TWILIO_SID, TWILIO_PHONE"));
    }

    #[test]
    fn test_port_override_and_empty_port() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("PORT", "8080"));
        assert_eq!(Config::from_lookup(lookup_from(&pairs)).unwrap().port, 8080);

        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("PORT", ""));
        assert_eq!(Config::from_lookup(lookup_from(&pairs)).unwrap().port, 5000);
    }

    #[test]
    fn test_invalid_port_is_rejected() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("PORT", "http"));
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { name: "PORT", .. }));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("REQUEST_TIMEOUT", "soon"));
        let err = Config::from_lookup(lookup_from(&pairs)).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                name: "REQUEST_TIMEOUT",
                ..
            }
        ));
    }

    #[test]
    fn test_base_url_trailing_slash_is_trimmed() {
        let mut pairs = CREDENTIALS.to_vec();
        pairs.push(("TWILIO_BASE_URL", "http://127.0.0.1:9000/"));
        let config = Config::from_lookup(lookup_from(&pairs)).unwrap();
        assert_eq!(config.twilio_base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_load_from_dotenv_file() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            "TWILIO_SID=ACfile\nTWILIO_AUTH_TOKEN=file-token\nTWILIO_PHONE=+15551112222\nPORT=5050\n"
        )
        .unwrap();
        file.flush().unwrap();

        let config = Config::from_dotenv_file(file.path()).unwrap();
        assert_eq!(config.account_sid, "ACfile");
        assert_eq!(config.sender, "+15551112222");
        assert_eq!(config.port, 5050);
    }

    #[test]
    fn test_debug_redacts_auth_token() {
        let config = Config::from_lookup(lookup_from(&CREDENTIALS)).unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("secret"));
        assert!(rendered.contains("<redacted>"));
    }
}
