use cc_telemetry::logging;

#[test]
fn test_init_logging_human() {
    // Should not panic; second call is a safe no-op.
    logging::init_logging("test-service", "debug");
    logging::init_logging("test-service", "info");

    tracing::info!(key = "value", "human-readable log line");
}

#[test]
fn test_init_logging_json() {
    // The global subscriber may already be set by another test; this then
    // silently no-ops.
    logging::init_logging_json("test-service-json", "info");

    tracing::info!(key = "value", "json log line");
}

#[test]
fn test_file_logging_creates_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("command-center.log");
    logging::init_logging_to_file("file-test", "info", &path, false).expect("open log file");
    assert!(path.exists());
}

#[test]
fn test_file_logging_bad_path_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing-dir").join("x.log");
    assert!(logging::init_logging_to_file("file-test", "info", &path, true).is_err());
}
