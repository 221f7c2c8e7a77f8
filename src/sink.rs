//! Fallback channel for delivery failures.
//!
//! [`LokiLogger::print`](crate::LokiLogger::print) never hands an error back
//! to its caller. Instead it reports the failure to a [`FailureSink`] and
//! returns normally. [`StdoutSink`] writes one line per failure to standard
//! output and is the default. [`WriterSink`] targets any `io::Write`, and
//! plain closures work as sinks too.

use std::fmt;
use std::io::{self, Write};

use parking_lot::Mutex;

use crate::error::LokiError;

/// Receives failures that [`LokiLogger::print`](crate::LokiLogger::print)
/// swallowed.
///
/// Implementations must not panic; write errors are ignored.
pub trait FailureSink: Send + Sync {
    /// Report one failed push.
    fn report(&self, error: &LokiError);
}

/// Writes each failure as one line on standard output.
#[derive(Copy, Clone, Debug, Default)]
pub struct StdoutSink;

impl FailureSink for StdoutSink {
    fn report(&self, error: &LokiError) {
        let mut out = io::stdout().lock();
        let _ = writeln!(out, "{error}").and_then(|()| out.flush());
    }
}

/// Writes each failure as one line to a wrapped writer.
pub struct WriterSink<W> {
    writer: Mutex<W>,
}

impl<W: Write + Send> WriterSink<W> {
    /// Wrap `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer: Mutex::new(writer),
        }
    }

    /// Recover the wrapped writer.
    pub fn into_inner(self) -> W {
        self.writer.into_inner()
    }
}

impl<W: Write + Send> FailureSink for WriterSink<W> {
    fn report(&self, error: &LokiError) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{error}").and_then(|()| writer.flush());
    }
}

impl<W> fmt::Debug for WriterSink<W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("WriterSink(<dyn Write>)")
    }
}

impl<F> FailureSink for F
where
    F: Fn(&LokiError) + Send + Sync,
{
    fn report(&self, error: &LokiError) {
        self(error);
    }
}
