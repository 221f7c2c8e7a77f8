//! Logger configuration.
//!
//! [`LokiConfig`] is created once and never mutated by the logger that owns
//! it. Build one directly, through
//! [`LokiLoggerBuilder`](crate::LokiLoggerBuilder), or from an INI file with
//! [`LokiConfig::from_ini_file`].

use std::collections::HashMap;
use std::io;
use std::time::Duration;

use thiserror::Error;

use crate::arg::Labels;
use crate::transport::{AuthConfig, ConnectionMode, push_url};

/// Default timeout applied to the whole HTTP round trip.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Configuration shared read-only by every call of a logger.
#[derive(Clone, Debug)]
pub struct LokiConfig {
    /// Backend base address, used verbatim as the push URL prefix.
    pub address: String,
    /// Maximum duration of one HTTP round trip.
    pub timeout: Duration,
    /// Labels applied to every record unless a call overrides them.
    pub labels: Labels,
    /// Authentication sent with every request.
    pub auth: AuthConfig,
    /// Additional HTTP headers to include in requests.
    pub headers: HashMap<String, String>,
    /// Whether the HTTP agent is rebuilt per call or shared.
    pub connection: ConnectionMode,
}

impl LokiConfig {
    /// Configuration targeting `address` with default settings.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// Full URL of the push endpoint.
    pub fn push_url(&self) -> String {
        push_url(&self.address)
    }
}

impl Default for LokiConfig {
    fn default() -> Self {
        Self {
            address: String::new(),
            timeout: DEFAULT_TIMEOUT,
            labels: Labels::new(),
            auth: AuthConfig::default(),
            headers: HashMap::new(),
            connection: ConnectionMode::default(),
        }
    }
}

/// Errors that may occur while building a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid user supplied configuration.
    #[error("invalid loki configuration: {0}")]
    InvalidConfig(String),
    /// A configuration file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    /// A configuration file is not valid INI.
    #[error("{path} is invalid: {message}")]
    Parse { path: String, message: String },
    /// A configuration value could not be interpreted.
    #[error("invalid value for {key}: {value:?}")]
    InvalidValue { key: String, value: String },
}
