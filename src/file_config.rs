//! INI configuration loading.
//!
//! Reads logger settings with the `rust-ini` crate:
//!
//! ```ini
//! [loki]
//! address = http://localhost:3100
//! timeout_ms = 2000
//! tenant = team-a
//! username = promtail
//! password = secret
//! reuse_connections = false
//!
//! [labels]
//! app = api
//! env = dev
//! ```
//!
//! `token` may replace `username`/`password` for bearer authentication.
//! Values pass through [`LokiLoggerBuilder`] validation, so a file yields the
//! same errors as the equivalent builder calls.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use ini::{Ini, Properties};

use crate::builder::LokiLoggerBuilder;
use crate::config::{ConfigError, LokiConfig};

const LOKI_SECTION: &str = "loki";
const LABELS_SECTION: &str = "labels";

impl LokiConfig {
    /// Load a configuration from the INI file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, and the errors
    /// of [`LokiConfig::from_ini_str`] otherwise.
    pub fn from_ini_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let text = fs::read_to_string(path).map_err(|source| match source.kind() {
            ErrorKind::NotFound => ConfigError::Io {
                path: format!("{display} (file does not exist)"),
                source,
            },
            _ => ConfigError::Io {
                path: display.clone(),
                source,
            },
        })?;
        parse_config(&display, &text)
    }

    /// Load a configuration from INI text.
    ///
    /// # Errors
    ///
    /// * [`ConfigError::Parse`] - the text is not valid INI or lacks a
    ///   `[loki]` section
    /// * [`ConfigError::InvalidValue`] - a value cannot be interpreted
    /// * [`ConfigError::InvalidConfig`] - the settings fail validation
    pub fn from_ini_str(text: &str) -> Result<Self, ConfigError> {
        parse_config("<string>", text)
    }
}

fn parse_config(origin: &str, text: &str) -> Result<LokiConfig, ConfigError> {
    let ini = Ini::load_from_str(text).map_err(|err| ConfigError::Parse {
        path: origin.to_owned(),
        message: err.to_string(),
    })?;
    let loki = ini
        .section(Some(LOKI_SECTION))
        .ok_or_else(|| ConfigError::Parse {
            path: origin.to_owned(),
            message: format!("missing [{LOKI_SECTION}] section"),
        })?;

    let mut builder = apply_loki_section(LokiLoggerBuilder::new(), loki)?;
    if let Some(labels) = ini.section(Some(LABELS_SECTION)) {
        builder = builder.with_labels(labels.iter());
    }
    builder.build_config()
}

fn apply_loki_section(
    mut builder: LokiLoggerBuilder,
    props: &Properties,
) -> Result<LokiLoggerBuilder, ConfigError> {
    if let Some(address) = props.get("address") {
        builder = builder.with_address(address);
    }
    if let Some(timeout) = props.get("timeout_ms") {
        builder = builder.with_timeout_ms(parse_value("timeout_ms", timeout)?);
    }
    if let Some(tenant) = props.get("tenant") {
        builder = builder.with_tenant(tenant);
    }
    builder = match (props.get("username"), props.get("password"), props.get("token")) {
        (Some(_), _, Some(_)) => {
            return Err(ConfigError::InvalidConfig(
                "username and token are mutually exclusive".into(),
            ));
        }
        (Some(username), password, None) => {
            builder.with_basic_auth(username, password.unwrap_or_default())
        }
        (None, Some(_), _) => {
            return Err(ConfigError::InvalidConfig(
                "password requires a username".into(),
            ));
        }
        (None, None, Some(token)) => builder.with_bearer_token(token),
        (None, None, None) => builder,
    };
    if let Some(reuse) = props.get("reuse_connections")
        && parse_bool("reuse_connections", reuse)?
    {
        builder = builder.with_connection_reuse();
    }
    Ok(builder)
}

fn parse_value<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key: key.to_owned(),
        value: value.to_owned(),
    })
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_owned(),
            value: value.to_owned(),
        }),
    }
}
