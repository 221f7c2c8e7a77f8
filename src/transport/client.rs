//! Single-attempt HTTP client for the push endpoint.

use std::{collections::HashMap, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD as BASE64_STANDARD};
use log::trace;
use ureq::{Agent, AgentBuilder, ErrorKind};

use crate::{config::LokiConfig, error::LokiError};

use super::config::{AuthConfig, ConnectionMode};

/// Path of the push endpoint, appended verbatim to the configured address.
pub const PUSH_PATH: &str = "/loki/api/v1/push";

const CONTENT_TYPE: &str = "Content-Type";

/// Build the push URL for `address`. The address is not validated.
pub fn push_url(address: &str) -> String {
    format!("{address}{PUSH_PATH}")
}

/// Sends serialised payloads to the backend.
#[derive(Clone)]
pub struct HttpTransport {
    url: String,
    timeout: Duration,
    auth: AuthConfig,
    headers: HashMap<String, String>,
    /// Present only in [`ConnectionMode::Reuse`].
    shared_agent: Option<Agent>,
}

impl HttpTransport {
    /// Construct a transport from the logger configuration.
    pub fn new(config: &LokiConfig) -> Self {
        let shared_agent = match config.connection {
            ConnectionMode::PerCall => None,
            ConnectionMode::Reuse => Some(build_agent(config.timeout)),
        };
        Self {
            url: push_url(&config.address),
            timeout: config.timeout,
            auth: config.auth.clone(),
            headers: config.headers.clone(),
            shared_agent,
        }
    }

    /// Target URL of every push.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether this transport shares one agent across sends.
    pub fn reuses_connections(&self) -> bool {
        self.shared_agent.is_some()
    }

    /// POST `body` to the push endpoint once.
    ///
    /// # Errors
    ///
    /// * [`LokiError::Rejected`] - the backend answered with a status other
    ///   than 200 or 204
    /// * [`LokiError::Request`] - the request could not be built
    /// * [`LokiError::Network`] - the request did not complete
    pub fn send(&self, body: &str) -> Result<(), LokiError> {
        let agent = match &self.shared_agent {
            Some(agent) => agent.clone(),
            None => build_agent(self.timeout),
        };
        trace!("pushing {} bytes to {}", body.len(), self.url);

        let mut req = agent.post(&self.url);
        req = self.apply_auth(req);
        req = self.apply_headers(req);
        req = req.set(CONTENT_TYPE, "application/json");

        match req.send_string(body) {
            Ok(response) => classify_status(response.status(), body),
            Err(ureq::Error::Status(code, _)) => classify_status(code, body),
            Err(ureq::Error::Transport(transport)) => Err(classify_transport(&transport)),
        }
    }

    fn apply_auth(&self, req: ureq::Request) -> ureq::Request {
        match &self.auth {
            AuthConfig::None => req,
            AuthConfig::Basic { username, password } => {
                let credentials = format!("{username}:{password}");
                let encoded = base64_encode(credentials.as_bytes());
                req.set("Authorization", &format!("Basic {encoded}"))
            }
            AuthConfig::Bearer { token } => req.set("Authorization", &format!("Bearer {token}")),
        }
    }

    /// Content-Type is owned by the transport and always JSON.
    fn apply_headers(&self, mut req: ureq::Request) -> ureq::Request {
        for (key, value) in &self.headers {
            if key.eq_ignore_ascii_case(CONTENT_TYPE) {
                continue;
            }
            req = req.set(key, value);
        }
        req
    }
}

impl std::fmt::Debug for HttpTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpTransport")
            .field("url", &self.url)
            .field("timeout", &self.timeout)
            .field("headers", &self.headers.keys().collect::<Vec<_>>())
            .field("reuses_connections", &self.reuses_connections())
            .finish()
    }
}

fn build_agent(timeout: Duration) -> Agent {
    AgentBuilder::new().timeout(timeout).build()
}

/// Only 200 and 204 count as delivered; other 2xx codes are rejections too.
pub(crate) fn classify_status(status: u16, body: &str) -> Result<(), LokiError> {
    match status {
        200 | 204 => Ok(()),
        _ => Err(LokiError::Rejected {
            status,
            body: body.to_owned(),
        }),
    }
}

fn classify_transport(err: &ureq::Transport) -> LokiError {
    match err.kind() {
        ErrorKind::InvalidUrl
        | ErrorKind::UnknownScheme
        | ErrorKind::BadHeader
        | ErrorKind::InvalidProxyUrl
        | ErrorKind::InsecureRequestHttpsOnly => LokiError::Request(err.to_string()),
        _ => LokiError::Network(err.to_string()),
    }
}

/// Base64-encode a byte slice for Basic auth.
fn base64_encode(input: &[u8]) -> String {
    BASE64_STANDARD.encode(input)
}
