//! Builder for [`LokiLogger`](crate::LokiLogger).
//!
//! Collects the address, timeout, default labels, authentication, headers,
//! connection mode, failure sink and formatter, validates them, and produces
//! either a [`LokiConfig`] or a ready logger. The address is checked for
//! presence only; it is never parsed as a URL.

use std::{collections::HashMap, fmt, sync::Arc, time::Duration};

use crate::{
    arg::Labels,
    config::{ConfigError, LokiConfig},
    formatter::{LokiFormatter, SharedFormatter},
    logger::LokiLogger,
    sink::{FailureSink, StdoutSink},
    transport::{AuthConfig, ConnectionMode},
};

/// Header carrying the tenant ID on multi-tenant backends.
pub const TENANT_HEADER: &str = "X-Scope-OrgID";

macro_rules! ensure_positive {
    ($value:expr, $field:expr) => {{
        if $value == 0 {
            Err(ConfigError::InvalidConfig(format!(
                "{} must be greater than zero",
                $field
            )))
        } else {
            Ok($value)
        }
    }};
}

macro_rules! option_setter {
    ($(#[$meta:meta])* $fn_name:ident, $field:ident, $ty:ty) => {
        $(#[$meta])*
        pub fn $fn_name(mut self, value: $ty) -> Self {
            self.$field = Some(value);
            self
        }
    };
}

/// Builder for constructing [`LokiLogger`] instances.
#[derive(Clone, Default)]
pub struct LokiLoggerBuilder {
    address: Option<String>,
    timeout_ms: Option<u64>,
    labels: Labels,
    auth: Option<AuthConfig>,
    headers: HashMap<String, String>,
    connection: ConnectionMode,
    sink: Option<Arc<dyn FailureSink>>,
    formatter: Option<SharedFormatter>,
}

impl LokiLoggerBuilder {
    /// Create a new builder with no address configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the backend base address (required).
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }

    option_setter!(
        #[doc = "Set the request timeout in milliseconds."]
        with_timeout_ms,
        timeout_ms,
        u64
    );

    /// Add a default label applied to every record.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Add several default labels, replacing existing values for the same keys.
    pub fn with_labels<I, K, V>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.labels
            .extend(labels.into_iter().map(|(k, v)| (k.into(), v.into())));
        self
    }

    /// Configure HTTP Basic authentication.
    pub fn with_basic_auth(
        mut self,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.auth = Some(AuthConfig::Basic {
            username: username.into(),
            password: password.into(),
        });
        self
    }

    /// Configure Bearer token authentication.
    pub fn with_bearer_token(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(AuthConfig::Bearer {
            token: token.into(),
        });
        self
    }

    /// Add a single custom HTTP header.
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Send the tenant ID header with every request.
    pub fn with_tenant(self, tenant: impl Into<String>) -> Self {
        self.with_header(TENANT_HEADER, tenant)
    }

    /// Share one HTTP agent across sends instead of building one per call.
    pub fn with_connection_reuse(mut self) -> Self {
        self.connection = ConnectionMode::Reuse;
        self
    }

    /// Report delivery failures to `sink` instead of standard output.
    pub fn with_sink<S>(mut self, sink: S) -> Self
    where
        S: FailureSink + 'static,
    {
        self.sink = Some(Arc::new(sink));
        self
    }

    /// Format arguments with `formatter` instead of the default formatter.
    pub fn with_formatter<F>(mut self, formatter: F) -> Self
    where
        F: LokiFormatter + 'static,
    {
        self.formatter = Some(SharedFormatter::new(formatter));
        self
    }

    fn validate(&self) -> Result<(), ConfigError> {
        self.validate_address()?;
        self.validate_timeout()?;
        self.validate_labels()?;
        Ok(())
    }

    fn validate_address(&self) -> Result<(), ConfigError> {
        match &self.address {
            None => Err(ConfigError::InvalidConfig(
                "loki logger requires an address".into(),
            )),
            Some(address) if address.trim().is_empty() => Err(ConfigError::InvalidConfig(
                "address must not be empty".into(),
            )),
            _ => Ok(()),
        }
    }

    fn validate_timeout(&self) -> Result<(), ConfigError> {
        if let Some(timeout) = self.timeout_ms {
            ensure_positive!(timeout, "timeout_ms")?;
        }
        Ok(())
    }

    fn validate_labels(&self) -> Result<(), ConfigError> {
        if self.labels.keys().any(|key| key.trim().is_empty()) {
            return Err(ConfigError::InvalidConfig(
                "label keys must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Validate the collected settings and produce a configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidConfig`] when the address is missing or
    /// blank, the timeout is zero, or a label key is empty.
    pub fn build_config(&self) -> Result<LokiConfig, ConfigError> {
        self.validate()?;

        let defaults = LokiConfig::default();
        Ok(LokiConfig {
            address: self.address.clone().unwrap_or_default(),
            timeout: self
                .timeout_ms
                .map_or(defaults.timeout, Duration::from_millis),
            labels: self.labels.clone(),
            auth: self.auth.clone().unwrap_or(defaults.auth),
            headers: self.headers.clone(),
            connection: self.connection,
        })
    }

    /// Validate the collected settings and construct the logger.
    ///
    /// # Errors
    ///
    /// See [`build_config`](Self::build_config).
    pub fn build(&self) -> Result<LokiLogger, ConfigError> {
        let config = self.build_config()?;
        let formatter = self.formatter.clone().unwrap_or_default();
        let sink = self
            .sink
            .clone()
            .unwrap_or_else(|| Arc::new(StdoutSink) as Arc<dyn FailureSink>);
        Ok(LokiLogger::from_parts(config, formatter, sink))
    }
}

impl fmt::Debug for LokiLoggerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LokiLoggerBuilder")
            .field("address", &self.address)
            .field("timeout_ms", &self.timeout_ms)
            .field("labels", &self.labels)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("connection", &self.connection)
            .field("custom_sink", &self.sink.is_some())
            .field("formatter", &self.formatter)
            .finish()
    }
}
