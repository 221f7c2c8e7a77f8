//! Variadic logging macro.
//!
//! [`loki_print!`] takes any number of [`LogArg`](crate::LogArg) values and
//! forwards them to [`LokiLogger::print`](crate::LokiLogger::print) in order.
//!
//! # Examples
//!
//! ```rust,no_run
//! use femtoloki::{Labeled, LokiConfig, LokiLogger, loki_print};
//!
//! let logger = LokiLogger::new(LokiConfig::new("http://localhost:3100"));
//! loki_print!(logger, "request served in", 42, "ms");
//! loki_print!(logger, Labeled::new("cache miss").with_label("component", "cache"));
//! ```

/// Format the arguments and push them through `logger`.
///
/// Failures are reported to the logger's failure sink; the macro never
/// returns an error.
#[macro_export]
macro_rules! loki_print {
    ($logger:expr $(,)?) => {
        $logger.print(&[])
    };
    ($logger:expr, $($arg:expr),+ $(,)?) => {
        $logger.print(&[$(&$arg as &dyn $crate::LogArg),+])
    };
}
