//! Caller-facing logger.
//!
//! [`LokiLogger`] runs formatter → payload builder → transport for every
//! call. [`LokiLogger::print`] never returns an error: any failure is
//! handed to the configured [`FailureSink`] and the call returns normally,
//! so a logging call is safe to place anywhere. [`LokiLogger::send`] exposes
//! the same pipeline with its error for callers that want to handle it.
//!
//! Calls are synchronous and block for one HTTP round trip, bounded by the
//! configured timeout. The logger holds no mutable state, so one instance
//! may be shared freely across threads.

use std::{fmt, sync::Arc};

use log::debug;

use crate::{
    arg::{Labels, LogArg},
    builder::LokiLoggerBuilder,
    config::LokiConfig,
    error::LokiError,
    formatter::SharedFormatter,
    log_record::LogRecord,
    payload::{build_payload, serialise_payload},
    sink::{FailureSink, StdoutSink},
    transport::HttpTransport,
};

/// Print-style logger pushing to a Loki-compatible backend.
pub struct LokiLogger {
    config: LokiConfig,
    transport: HttpTransport,
    formatter: SharedFormatter,
    sink: Arc<dyn FailureSink>,
}

impl LokiLogger {
    /// Construct a logger with the default formatter, reporting failures to
    /// standard output.
    pub fn new(config: LokiConfig) -> Self {
        Self::from_parts(config, SharedFormatter::default(), Arc::new(StdoutSink))
    }

    /// Start building a logger.
    pub fn builder() -> LokiLoggerBuilder {
        LokiLoggerBuilder::new()
    }

    pub(crate) fn from_parts(
        config: LokiConfig,
        formatter: SharedFormatter,
        sink: Arc<dyn FailureSink>,
    ) -> Self {
        let transport = HttpTransport::new(&config);
        Self {
            config,
            transport,
            formatter,
            sink,
        }
    }

    /// Replace the failure sink.
    pub fn with_sink<S>(mut self, sink: S) -> Self
    where
        S: FailureSink + 'static,
    {
        self.sink = Arc::new(sink);
        self
    }

    /// The configuration this logger was built with.
    pub fn config(&self) -> &LokiConfig {
        &self.config
    }

    /// Format `args` and push the result, reporting any failure to the sink.
    ///
    /// Never returns an error and never panics on delivery failure.
    pub fn print(&self, args: &[&dyn LogArg]) {
        let record = self.format(args);
        if let Err(err) = self.send_record(&record) {
            self.sink.report(&err);
        }
    }

    /// Reduce `args` to a log line and label set.
    pub fn format(&self, args: &[&dyn LogArg]) -> LogRecord {
        self.formatter.format(args)
    }

    /// Push an already formatted record.
    ///
    /// # Errors
    ///
    /// See [`LokiLogger::send`].
    pub fn send_record(&self, record: &LogRecord) -> Result<(), LokiError> {
        self.send(&record.line, Some(&record.labels))
    }

    /// Build the payload for `line` and push it once.
    ///
    /// `labels` are layered over the configured default labels.
    ///
    /// # Errors
    ///
    /// Returns the first failure encountered: [`LokiError::Serialisation`]
    /// while building the payload, or the transport errors of
    /// [`HttpTransport::send`].
    pub fn send(&self, line: &str, labels: Option<&Labels>) -> Result<(), LokiError> {
        let payload = build_payload(line, labels, &self.config.labels);
        let body = serialise_payload(&payload)?;
        self.transport.send(&body)?;
        debug!("pushed {} byte record to {}", body.len(), self.transport.url());
        Ok(())
    }
}

impl fmt::Debug for LokiLogger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LokiLogger")
            .field("address", &self.config.address)
            .field("timeout", &self.config.timeout)
            .field("labels", &self.config.labels)
            .field("transport", &self.transport)
            .field("formatter", &self.formatter)
            .finish_non_exhaustive()
    }
}
