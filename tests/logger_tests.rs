//! End-to-end behaviour of the print-style logger.

mod test_utils;

use std::borrow::Cow;
use std::net::TcpListener;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use femtoloki::{Labeled, Labels, LogArg, LokiLogger, WriterSink, loki_print};
use rstest::rstest;

use test_utils::{SharedBuf, base_address, closed_address, spawn_server, tcp_listener};

struct Request<'a> {
    route: &'a str,
    status: u16,
}

impl LogArg for Request<'_> {
    fn log_text(&self) -> Cow<'_, str> {
        Cow::Owned(format!("{} -> {}", self.route, self.status))
    }

    fn log_labels(&self) -> Option<Labels> {
        Some(Labels::from([
            ("route".to_owned(), self.route.to_owned()),
            ("app".to_owned(), "router".to_owned()),
        ]))
    }
}

fn logger_for(address: String, sink: SharedBuf) -> LokiLogger {
    LokiLogger::builder()
        .with_address(address)
        .with_timeout_ms(2_000)
        .with_label("app", "test")
        .with_label("host", "ci")
        .with_sink(WriterSink::new(sink))
        .build()
        .expect("valid logger")
}

#[rstest]
fn print_delivers_formatted_line_and_merged_labels(tcp_listener: TcpListener) {
    let (addr, rx) = spawn_server(tcp_listener, vec![204]);
    let sink = SharedBuf::default();
    let logger = logger_for(base_address(addr), sink.clone());

    let request = Request {
        route: "/health",
        status: 200,
    };
    loki_print!(logger, "log", 42, true, request);

    let captured = rx.recv_timeout(Duration::from_secs(5)).expect("request");
    let payload = captured.json();
    let stream = &payload["streams"][0];
    assert_eq!(stream["values"][0][1], "log 42 true /health -> 200");
    assert_eq!(stream["stream"]["route"], "/health");
    // Call-site labels win over defaults; untouched defaults survive.
    assert_eq!(stream["stream"]["app"], "router");
    assert_eq!(stream["stream"]["host"], "ci");
    assert!(sink.contents().is_empty());
}

#[rstest]
fn print_with_no_arguments_sends_empty_line(tcp_listener: TcpListener) {
    let (addr, rx) = spawn_server(tcp_listener, vec![200]);
    let sink = SharedBuf::default();
    let logger = logger_for(base_address(addr), sink.clone());

    loki_print!(logger);

    let captured = rx.recv_timeout(Duration::from_secs(5)).expect("request");
    assert_eq!(captured.json()["streams"][0]["values"][0][1], "");
    assert!(sink.contents().is_empty());
}

#[rstest]
fn print_reports_rejection_with_status(tcp_listener: TcpListener) {
    let (addr, _rx) = spawn_server(tcp_listener, vec![500]);
    let sink = SharedBuf::default();
    let logger = logger_for(base_address(addr), sink.clone());

    loki_print!(logger, "will be rejected");

    let output = sink.contents();
    assert_eq!(output.lines().count(), 1);
    assert!(output.starts_with("loki response: 500"));
    assert!(output.contains("will be rejected"));
}

#[test]
fn print_survives_unreachable_backend() {
    let sink = SharedBuf::default();
    let logger = logger_for(base_address(closed_address()), sink.clone());

    logger.print(&[&"nobody", &"listening"]);
    loki_print!(logger, Labeled::new("still fine").with_label("k", "v"));

    let output = sink.contents();
    assert_eq!(output.lines().count(), 2);
    assert!(
        output
            .lines()
            .all(|line| line.starts_with("send post request to loki"))
    );
}

#[test]
fn print_survives_malformed_address() {
    let sink = SharedBuf::default();
    let logger = logger_for("::not-an-address::".into(), sink.clone());

    loki_print!(logger, "dropped");

    assert!(sink.contents().starts_with("create post request to loki"));
}

#[rstest]
fn concurrent_prints_are_independent(tcp_listener: TcpListener) {
    const THREADS: usize = 4;
    let (addr, rx) = spawn_server(tcp_listener, vec![204; THREADS]);
    let sink = SharedBuf::default();
    let logger = Arc::new(logger_for(base_address(addr), sink.clone()));

    let handles: Vec<_> = (0..THREADS)
        .map(|idx| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                loki_print!(logger, Labeled::new("worker").with_label("idx", idx.to_string()), idx);
            })
        })
        .collect();
    for handle in handles {
        handle.join().expect("worker thread panicked");
    }

    let mut lines: Vec<String> = (0..THREADS)
        .map(|_| {
            let captured = rx.recv_timeout(Duration::from_secs(5)).expect("request");
            let payload = captured.json();
            let stream = &payload["streams"][0];
            assert_eq!(
                stream["stream"]["idx"].as_str(),
                stream["values"][0][1]
                    .as_str()
                    .and_then(|line| line.strip_prefix("worker "))
            );
            stream["values"][0][1].as_str().expect("line").to_owned()
        })
        .collect();
    lines.sort();
    assert_eq!(lines, ["worker 0", "worker 1", "worker 2", "worker 3"]);
    assert!(sink.contents().is_empty());
}
