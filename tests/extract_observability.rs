use std::fs;
use std::sync::{Arc, Mutex};

use address_codegen::observability::{
    ExtractContext, ExtractObserver, ExtractSeverity, ExtractStats,
};
use address_codegen::pipeline::{extract_addresses, ExtractOptions};
use address_codegen::ExtractError;

#[derive(Default)]
struct RecordingObserver {
    successes: Mutex<Vec<ExtractStats>>,
    failures: Mutex<Vec<ExtractSeverity>>,
    alerts: Mutex<Vec<ExtractSeverity>>,
}

impl ExtractObserver for RecordingObserver {
    fn on_success(&self, _ctx: &ExtractContext, stats: ExtractStats) {
        self.successes.lock().unwrap().push(stats);
    }

    fn on_failure(&self, _ctx: &ExtractContext, severity: ExtractSeverity, _error: &ExtractError) {
        self.failures.lock().unwrap().push(severity);
    }

    fn on_alert(&self, _ctx: &ExtractContext, severity: ExtractSeverity, _error: &ExtractError) {
        self.alerts.lock().unwrap().push(severity);
    }
}

fn options_with(dir: &std::path::Path, obs: Arc<dyn ExtractObserver>) -> ExtractOptions {
    ExtractOptions {
        input_path: dir.join("in.csv"),
        output_path: dir.join("out").join("addresses.ts"),
        observer: Some(obs),
        ..Default::default()
    }
}

#[test]
fn success_reports_stats() {
    let dir = tempfile::tempdir().unwrap();
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(dir.path(), obs.clone());
    fs::write(&opts.input_path, "addr:housenumber,addr:street\n1,A St\n,B St\n").unwrap();

    extract_addresses(&opts).unwrap();

    let successes = obs.successes.lock().unwrap().clone();
    assert_eq!(
        successes,
        vec![ExtractStats {
            rows_read: 2,
            emitted: 1,
            skipped: 1
        }]
    );
    assert!(obs.failures.lock().unwrap().is_empty());
}

#[test]
fn missing_input_is_critical_and_alerts() {
    let dir = tempfile::tempdir().unwrap();
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(dir.path(), obs.clone());

    extract_addresses(&opts).unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![ExtractSeverity::Critical]);
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![ExtractSeverity::Critical]);
}

#[test]
fn malformed_row_is_error_below_default_alert_threshold() {
    let dir = tempfile::tempdir().unwrap();
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(dir.path(), obs.clone());
    fs::write(&opts.input_path, b"addr:housenumber,addr:street\n1,\xff St\n").unwrap();

    extract_addresses(&opts).unwrap_err();

    assert_eq!(obs.failures.lock().unwrap().clone(), vec![ExtractSeverity::Error]);
    assert!(obs.alerts.lock().unwrap().is_empty());
}

#[test]
fn lower_alert_threshold_alerts_on_error() {
    let dir = tempfile::tempdir().unwrap();
    let obs = Arc::new(RecordingObserver::default());
    let opts = ExtractOptions {
        alert_at_or_above: ExtractSeverity::Error,
        ..options_with(dir.path(), obs.clone())
    };
    fs::write(&opts.input_path, b"addr:housenumber,addr:street\n1,\xff St\n").unwrap();

    extract_addresses(&opts).unwrap_err();

    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![ExtractSeverity::Error]);
}

#[test]
fn unreadable_input_is_critical() {
    let dir = tempfile::tempdir().unwrap();
    let obs = Arc::new(RecordingObserver::default());
    let opts = options_with(dir.path(), obs.clone());
    // A directory exists but cannot be read as a file.
    fs::create_dir(&opts.input_path).unwrap();

    let err = extract_addresses(&opts).unwrap_err();

    assert!(matches!(err, ExtractError::InputRead { .. }), "{err}");
    assert_eq!(obs.failures.lock().unwrap().clone(), vec![ExtractSeverity::Critical]);
    assert_eq!(obs.alerts.lock().unwrap().clone(), vec![ExtractSeverity::Critical]);
}
