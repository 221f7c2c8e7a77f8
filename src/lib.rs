//! Print-style logging with labels, pushed to a Loki-compatible backend.
//!
//! Each call reduces a heterogeneous argument list to one log line and one
//! label set, layers those labels over the logger's defaults, and delivers
//! the record as a single-stream payload to `<address>/loki/api/v1/push`.
//! There is no batching, buffering or retrying: one call issues one
//! synchronous request.
//!
//! ```rust,no_run
//! use femtoloki::{Labeled, LokiLogger, loki_print};
//!
//! let logger = LokiLogger::builder()
//!     .with_address("http://localhost:3100")
//!     .with_label("app", "api")
//!     .build()?;
//! loki_print!(logger, "served", 200, Labeled::new("GET /").with_label("route", "root"));
//! # Ok::<(), femtoloki::ConfigError>(())
//! ```

pub mod arg;
pub mod builder;
pub mod config;
pub mod error;
mod file_config;
pub mod formatter;
pub mod log_record;
pub mod logger;
mod macros;
pub mod payload;
pub mod sink;
pub mod transport;

pub use arg::{Debugged, Labeled, Labels, LogArg, Shown};
pub use builder::{LokiLoggerBuilder, TENANT_HEADER};
pub use config::{ConfigError, DEFAULT_TIMEOUT, LokiConfig};
pub use error::LokiError;
pub use formatter::{DefaultFormatter, LokiFormatter, SharedFormatter};
pub use log_record::LogRecord;
pub use logger::LokiLogger;
pub use payload::{PushPayload, Stream, build_payload, serialise_payload};
pub use sink::{FailureSink, StdoutSink, WriterSink};
pub use transport::{AuthConfig, ConnectionMode, HttpTransport, PUSH_PATH};
