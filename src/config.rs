use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "https://www.albion-online-data.com/";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a whole number of seconds, got {value:?}")]
    InvalidTimeout { key: &'static str, value: String },
}

/// Runtime settings read from the environment (and a `.env` file, if any).
#[derive(Clone, Debug, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    /// Request timeout; `None` waits indefinitely.
    pub api_timeout: Option<Duration>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            api_timeout: None,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_base_url = lookup("ALBION_API_BASE_URL")
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let api_timeout = match lookup("ALBION_API_TIMEOUT_SECS") {
            Some(raw) if !raw.trim().is_empty() => {
                let secs = raw.trim().parse::<u64>().map_err(|_| ConfigError::InvalidTimeout {
                    key: "ALBION_API_TIMEOUT_SECS",
                    value: raw.clone(),
                })?;
                Some(Duration::from_secs(secs))
            }
            _ => None,
        };

        Ok(Self {
            api_base_url,
            api_timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        AppConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        assert_eq!(config_from(&[]).unwrap(), AppConfig::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = config_from(&[
            ("ALBION_API_BASE_URL", "https://east.albion-online-data.com/"),
            ("ALBION_API_TIMEOUT_SECS", " 15 "),
        ])
        .unwrap();
        assert_eq!(config.api_base_url, "https://east.albion-online-data.com/");
        assert_eq!(config.api_timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn malformed_timeout_is_rejected() {
        let err = config_from(&[("ALBION_API_TIMEOUT_SECS", "soon")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidTimeout {
                key: "ALBION_API_TIMEOUT_SECS",
                value: "soon".to_string()
            }
        );
    }
}
