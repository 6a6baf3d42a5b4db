//! Tests for the Outlier tracing setup.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::{fmt, prelude::*};

use outlier_core::tracing::env_filter;

/// Serializes tracing tests (env var manipulation).
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

/// In-memory log sink shared between the subscriber and the test.
#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `emit` under a subscriber filtered by `OUTLIER_LOG = value` and
/// returns what it wrote.
fn capture_with_log_env(value: &str, emit: impl FnOnce()) -> String {
    std::env::set_var("OUTLIER_LOG", value);
    let filter = env_filter();
    std::env::remove_var("OUTLIER_LOG");

    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(move || writer.clone()),
        )
        .with(filter);
    tracing::subscriber::with_default(subscriber, emit);
    sink.text()
}

#[test]
fn test_per_crate_filter_from_env() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    let out = capture_with_log_env("outlier_core=debug", || {
        tracing::debug!(target: "outlier_core", "core debug event");
        tracing::trace!(target: "outlier_analysis", "analysis trace event");
    });
    assert!(out.contains("core debug event"), "got: {out}");
    assert!(!out.contains("analysis trace event"), "got: {out}");
}

#[test]
fn test_unparsable_filter_falls_back_to_info() {
    let _lock = TRACING_MUTEX.lock().unwrap();
    let out = capture_with_log_env("outlier_core=notalevel", || {
        tracing::info!(target: "outlier_analysis", "analysis info event");
        tracing::debug!(target: "outlier_analysis", "analysis debug event");
        tracing::info!(target: "outlier_core", "core info event");
    });
    assert!(out.contains("analysis info event"), "got: {out}");
    assert!(out.contains("core info event"), "got: {out}");
    assert!(!out.contains("analysis debug event"), "got: {out}");
}
