use taskdeck_core::{init_logging, logging_status};

// Logging state is process-global, so every scenario lives in one test body
// to keep ordering deterministic under the parallel test runner.
#[test]
fn init_logging_is_idempotent_and_rejects_conflicts() {
    let log_dir = tempfile::tempdir().unwrap();
    let log_dir_str = log_dir.path().to_str().unwrap().to_string();
    let other_dir = tempfile::tempdir().unwrap();
    let other_dir_str = other_dir.path().to_str().unwrap().to_string();

    init_logging("info", &log_dir_str).unwrap();
    init_logging("info", &log_dir_str).unwrap();

    let level_err = init_logging("debug", &log_dir_str).unwrap_err();
    assert!(level_err.contains("refusing to switch"));

    let dir_err = init_logging("info", &other_dir_str).unwrap_err();
    assert!(dir_err.contains("refusing to switch"));

    let (level, active_dir) = logging_status().unwrap();
    assert_eq!(level, "info");
    assert_eq!(active_dir, log_dir.path());
}

#[test]
fn init_logging_rejects_bad_inputs_without_activating() {
    assert!(init_logging("verbose", "/tmp/taskdeck-logs").is_err());
    assert!(init_logging("info", "relative/logs").is_err());
    assert!(init_logging("info", "").is_err());
}
