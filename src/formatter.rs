//! Formatting of print-style argument lists into log records.
//!
//! Provides the [`LokiFormatter`] trait, the [`DefaultFormatter`] used by
//! every logger unless told otherwise, and [`SharedFormatter`] for sharing a
//! formatter trait object across threads.

use std::{fmt, sync::Arc};

use crate::{arg::LogArg, log_record::LogRecord};

/// Trait for reducing an argument list into a [`LogRecord`].
///
/// Implementors must be thread-safe (`Send + Sync`) so a single logger can
/// be used from many threads at once. Formatting never fails.
pub trait LokiFormatter: Send + Sync {
    /// Format the arguments of one logging call.
    fn format(&self, args: &[&dyn LogArg]) -> LogRecord;
}

/// Shared formatter trait object used by loggers.
#[derive(Clone)]
pub struct SharedFormatter {
    inner: Arc<dyn LokiFormatter + Send + Sync>,
}

impl SharedFormatter {
    /// Create a shared formatter from an owned formatter implementation.
    pub fn new<F>(formatter: F) -> Self
    where
        F: LokiFormatter + Send + Sync + 'static,
    {
        let inner: Arc<dyn LokiFormatter + Send + Sync> = Arc::new(formatter);
        Self { inner }
    }

    /// Wrap an existing shared formatter trait object.
    pub fn from_arc(inner: Arc<dyn LokiFormatter + Send + Sync>) -> Self {
        Self { inner }
    }

    /// Format arguments using the wrapped formatter instance.
    pub fn format(&self, args: &[&dyn LogArg]) -> LogRecord {
        self.inner.format(args)
    }
}

impl Default for SharedFormatter {
    fn default() -> Self {
        Self::new(DefaultFormatter)
    }
}

impl fmt::Debug for SharedFormatter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SharedFormatter(<dyn LokiFormatter>)")
    }
}

/// Space-joins argument text and merges argument labels in input order.
///
/// When two arguments contribute the same label key, the argument appearing
/// later in the list wins.
#[derive(Copy, Clone, Debug, Default)]
pub struct DefaultFormatter;

impl LokiFormatter for DefaultFormatter {
    fn format(&self, args: &[&dyn LogArg]) -> LogRecord {
        let mut record = LogRecord::default();
        for (idx, arg) in args.iter().enumerate() {
            if idx > 0 {
                record.line.push(' ');
            }
            record.line.push_str(&arg.log_text());
            if let Some(labels) = arg.log_labels() {
                record.labels.extend(labels);
            }
        }
        record
    }
}

impl LokiFormatter for Arc<dyn LokiFormatter + Send + Sync> {
    fn format(&self, args: &[&dyn LogArg]) -> LogRecord {
        (**self).format(args)
    }
}

impl LokiFormatter for Box<dyn LokiFormatter + Send + Sync> {
    fn format(&self, args: &[&dyn LogArg]) -> LogRecord {
        (**self).format(args)
    }
}
