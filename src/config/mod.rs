//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `FACTLENS_*` environment variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::time::Duration;

use crate::classifier::ClassifierConfig;
use crate::constants::{DEFAULT_FETCH_TIMEOUT, DEFAULT_METADATA_USER_AGENT};
use crate::engine::DecisionPolicy;

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `FACTLENS_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Classifier model directory and tokenizer limits.
    pub classifier: ClassifierConfig,

    /// Timeout for the single metadata/preview fetch attempt. Default: 10s.
    pub fetch_timeout: Duration,

    /// User agent for metadata fetches. Default: `Mozilla/5.0`.
    pub user_agent: String,

    /// Decision thresholds and confidence bounds.
    pub policy: DecisionPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            classifier: ClassifierConfig::default(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            user_agent: DEFAULT_METADATA_USER_AGENT.to_string(),
            policy: DecisionPolicy::default(),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "FACTLENS_PORT";
    const ENV_BIND_ADDR: &'static str = "FACTLENS_BIND_ADDR";
    const ENV_FETCH_TIMEOUT_SECS: &'static str = "FACTLENS_FETCH_TIMEOUT_SECS";
    const ENV_USER_AGENT: &'static str = "FACTLENS_USER_AGENT";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let classifier = ClassifierConfig::from_env();
        let fetch_timeout = Self::parse_timeout_from_env(defaults.fetch_timeout)?;
        let user_agent = Self::parse_string_from_env(Self::ENV_USER_AGENT, defaults.user_agent);
        let policy = DecisionPolicy::from_env()?;

        Ok(Self {
            port,
            bind_addr,
            classifier,
            fetch_timeout,
            user_agent,
            policy,
        })
    }

    /// Validates paths and policy invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref path) = self.classifier.model_path {
            if !path.exists() {
                return Err(ConfigError::ClassifierPathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::ClassifierPathNotDirectory { path: path.clone() });
            }
        }

        if self.fetch_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout {
                value: "0".to_string(),
            });
        }

        self.policy.validate()
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_timeout_from_env(default: Duration) -> Result<Duration, ConfigError> {
        match env::var(Self::ENV_FETCH_TIMEOUT_SECS) {
            Ok(value) => match value.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
                _ => Err(ConfigError::InvalidTimeout { value }),
            },
            Err(_) => Ok(default),
        }
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name)
            .ok()
            .filter(|v| !v.trim().is_empty())
            .unwrap_or(default)
    }
}
