use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

pub use fortisecure_shared::DEFAULT_RELAY_TIMEOUT_SECS;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3001";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: {value}")]
    InvalidAddr { var: &'static str, value: String },
    #[error("{var} must be a positive number of seconds, got {value}")]
    InvalidTimeout { var: &'static str, value: String },
    #[error("{var} must be an http(s) url, got {value}")]
    InvalidUrl { var: &'static str, value: String },
}

/// Runtime settings read from the environment (after `.env` is loaded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub bind_addr: SocketAddr,
    /// When unset, submissions only go to the log.
    pub contact_webhook_url: Option<String>,
    /// Allowed CORS origin. Any origin when unset.
    pub frontend_url: Option<String>,
    pub relay_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_raw = non_empty("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
        let bind_addr = bind_raw.parse().map_err(|_| ConfigError::InvalidAddr {
            var: "BIND_ADDR",
            value: bind_raw.clone(),
        })?;

        let contact_webhook_url = non_empty("CONTACT_WEBHOOK_URL")
            .map(|url| check_url("CONTACT_WEBHOOK_URL", url))
            .transpose()?;
        let frontend_url = non_empty("FRONTEND_URL")
            .map(|url| check_url("FRONTEND_URL", url))
            .transpose()?;

        let relay_timeout = match non_empty("RELAY_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_RELAY_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: "RELAY_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
        };

        Ok(Self {
            bind_addr,
            contact_webhook_url,
            frontend_url,
            relay_timeout,
        })
    }
}

fn check_url(var: &'static str, value: String) -> Result<String, ConfigError> {
    let value = value.trim().trim_end_matches('/').to_string();
    if value.starts_with("http://") || value.starts_with("https://") {
        Ok(value)
    } else {
        Err(ConfigError::InvalidUrl { var, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let config = config_from(&[]).unwrap();

        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
        assert_eq!(config.contact_webhook_url, None);
        assert_eq!(config.frontend_url, None);
        assert_eq!(config.relay_timeout, Duration::from_secs(10));
    }

    #[test]
    fn reads_every_variable() {
        let config = config_from(&[
            ("BIND_ADDR", "0.0.0.0:8080"),
            ("CONTACT_WEBHOOK_URL", "https://hooks.example.com/contact"),
            ("FRONTEND_URL", "https://fortisecure.in/"),
            ("RELAY_TIMEOUT_SECS", "3"),
        ])
        .unwrap();

        assert_eq!(config.bind_addr, "0.0.0.0:8080".parse().unwrap());
        assert_eq!(
            config.contact_webhook_url.as_deref(),
            Some("https://hooks.example.com/contact")
        );
        assert_eq!(config.frontend_url.as_deref(), Some("https://fortisecure.in"));
        assert_eq!(config.relay_timeout, Duration::from_secs(3));
    }

    #[test]
    fn blank_values_count_as_unset() {
        let config = config_from(&[("CONTACT_WEBHOOK_URL", "  "), ("BIND_ADDR", "")]).unwrap();

        assert_eq!(config.contact_webhook_url, None);
        assert_eq!(config.bind_addr, DEFAULT_BIND_ADDR.parse().unwrap());
    }

    #[test]
    fn rejects_bad_values() {
        assert!(matches!(
            config_from(&[("BIND_ADDR", "localhost")]),
            Err(ConfigError::InvalidAddr { .. })
        ));
        assert!(matches!(
            config_from(&[("RELAY_TIMEOUT_SECS", "0")]),
            Err(ConfigError::InvalidTimeout { .. })
        ));
        assert!(matches!(
            config_from(&[("CONTACT_WEBHOOK_URL", "ftp://example.com")]),
            Err(ConfigError::InvalidUrl { var: "CONTACT_WEBHOOK_URL", .. })
        ));
    }
}
