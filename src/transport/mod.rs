//! HTTP delivery of push payloads.
//!
//! [`HttpTransport`] issues exactly one `POST` to
//! `<address>/loki/api/v1/push` per record and classifies the outcome:
//!
//! - **200 / 204**: accepted.
//! - **any other status**: rejected; the error carries the status and the
//!   body that was sent.
//! - **bad URL, scheme or header**: the request could not be built.
//! - **DNS, connection, I/O or timeout errors**: network failure.
//!
//! There are no retries. By default every send builds a fresh
//! `ureq::Agent`; [`ConnectionMode::Reuse`] shares one agent instead.

mod client;
mod config;

pub use client::{HttpTransport, PUSH_PATH, push_url};
pub use config::{AuthConfig, ConnectionMode};
