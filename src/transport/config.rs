//! Request options consumed by [`HttpTransport`](super::HttpTransport).

/// Authentication configuration for push requests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthConfig {
    /// No authentication.
    #[default]
    None,
    /// HTTP Basic authentication with username and password.
    Basic { username: String, password: String },
    /// Bearer token authentication.
    Bearer { token: String },
}

/// How HTTP connections are managed across sends.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionMode {
    /// Build a new agent, and so a new connection, for every send.
    #[default]
    PerCall,
    /// Share one agent across sends so keep-alive connections are pooled.
    Reuse,
}
