//! Log record representation for femtoloki.
//!
//! A [`LogRecord`] is the product of formatting one print-style call: the
//! joined log line plus the labels the arguments contributed. It lives only
//! for the duration of that call.

use std::fmt;

use crate::arg::Labels;

/// Formatted line and labels of a single print-style call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LogRecord {
    /// The joined log line.
    pub line: String,
    /// Labels contributed by the call's arguments.
    pub labels: Labels,
}

impl LogRecord {
    /// Construct a record carrying `line` and no labels.
    pub fn new(line: impl Into<String>) -> Self {
        Self {
            line: line.into(),
            labels: Labels::new(),
        }
    }

    /// Attach a label to the record, replacing any existing value for `key`.
    pub fn with_label(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.labels.insert(key.into(), value.into());
        self
    }

    /// Borrow the log line.
    pub fn line(&self) -> &str {
        &self.line
    }

    /// Borrow the labels.
    pub fn labels(&self) -> &Labels {
        &self.labels
    }
}

impl fmt::Display for LogRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.line)
    }
}
