//! Log events emitted by the detectors.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing::Level;

use outlier_analysis::outliers::{grubbs, knn, zscore};

/// Subscribers with different levels share callsite interest; run one at a time.
static TRACING_MUTEX: Mutex<()> = Mutex::new(());

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

fn capture<T>(level: Level, run: impl FnOnce() -> T) -> (T, String) {
    let _lock = TRACING_MUTEX.lock().unwrap_or_else(|e| e.into_inner());
    let sink = Captured::default();
    let writer = sink.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_max_level(level)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, run);
    (result, sink.text())
}

#[test]
fn test_grubbs_logs_each_removal() {
    let (outcome, out) = capture(Level::DEBUG, || {
        grubbs::test(&[10.0, 10.0, 10.0, 10.0, 100.0], 0.05).unwrap()
    });
    assert_eq!(outcome.removed_values(), vec![100.0]);
    assert_eq!(out.matches("grubbs removed outlier").count(), 1, "got: {out}");
    assert!(out.contains("index=4"), "got: {out}");
    assert!(out.contains("value=100.0"), "got: {out}");
    assert!(out.contains("grubbs finished"), "got: {out}");
    assert!(out.contains("ZeroVariance"), "got: {out}");
}

#[test]
fn test_zscore_logs_summary_count() {
    let (flagged, out) = capture(Level::DEBUG, || {
        zscore::detect_values(&[1.0, 2.0, 3.0, 4.0, 100.0], 1.5).unwrap()
    });
    assert_eq!(flagged, vec![100.0]);
    assert!(out.contains("z-score detection complete"), "got: {out}");
    assert!(out.contains("found=1"), "got: {out}");
}

#[test]
fn test_knn_rows_only_at_trace() {
    let values = [1.0, 2.0, 3.0, 100.0];
    let (_, out) = capture(Level::DEBUG, || knn::score(&values, 2).unwrap());
    assert!(!out.contains("knn row scored"), "got: {out}");

    let (_, out) = capture(Level::TRACE, || knn::score(&values, 2).unwrap());
    assert_eq!(out.matches("knn row scored").count(), 4, "got: {out}");
}
