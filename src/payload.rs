//! Push payload construction.
//!
//! Builds the single-stream body accepted by the backend's push endpoint:
//!
//! ```json
//! {"streams":[{"stream":{"app":"api"},"values":[["1700000000000000000","line"]]}]}
//! ```
//!
//! Call-site labels are layered over the logger's default labels, so a call
//! can override any default while defaults fill in every key it leaves out.

use std::time::{SystemTime, UNIX_EPOCH};

use serde::{Deserialize, Serialize};

use crate::arg::Labels;
use crate::error::LokiError;

/// A label set plus its `[timestamp, line]` entries.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stream {
    /// Labels shared by every entry of the stream.
    pub stream: Labels,
    /// `[unix-nanoseconds, line]` pairs.
    pub values: Vec<[String; 2]>,
}

/// Body of one push request.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushPayload {
    pub streams: Vec<Stream>,
}

/// Overlay `call_labels` onto `defaults`; call-site values win.
pub fn effective_labels(defaults: &Labels, call_labels: Option<&Labels>) -> Labels {
    let mut labels = defaults.clone();
    if let Some(extra) = call_labels {
        labels.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    }
    labels
}

/// Nanoseconds between the Unix epoch and `at`.
///
/// Times before the epoch clamp to zero.
pub fn timestamp_nanos(at: SystemTime) -> u128 {
    at.duration_since(UNIX_EPOCH)
        .map(|dur| dur.as_nanos())
        .unwrap_or_default()
}

/// Build the payload for one call, stamped with the current wall clock time.
pub fn build_payload(line: &str, call_labels: Option<&Labels>, defaults: &Labels) -> PushPayload {
    build_payload_at(line, call_labels, defaults, SystemTime::now())
}

/// Build the payload for one call, stamped with `at`.
pub fn build_payload_at(
    line: &str,
    call_labels: Option<&Labels>,
    defaults: &Labels,
    at: SystemTime,
) -> PushPayload {
    let stream = Stream {
        stream: effective_labels(defaults, call_labels),
        values: vec![[timestamp_nanos(at).to_string(), line.to_owned()]],
    };
    PushPayload {
        streams: vec![stream],
    }
}

/// Serialise a payload to its JSON wire form.
///
/// # Errors
///
/// Returns [`LokiError::Serialisation`] if JSON encoding fails.
pub fn serialise_payload(payload: &PushPayload) -> Result<String, LokiError> {
    Ok(serde_json::to_string(payload)?)
}
