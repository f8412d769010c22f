use std::process::Command;

use add_version::config::*;
use add_version::wrapper::*;

const WRAPPER: &str = env!("CARGO_BIN_EXE_add-version");

#[test]
fn missing_target_exits_not_found() {
    if check_target(TARGET_PATH) != Err(TargetError::Missing) {
        return;
    }
    let output = Command::new(WRAPPER).args(["--product", "Foo", ""]).output().unwrap();
    assert_eq!(output.status.code(), Some(EXIT_NOT_FOUND));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains(&format!("ERROR: failed to execute {TARGET_PATH}")), "{stderr}");
}

#[test]
fn rust_log_does_not_change_wrapper_output() {
    if check_target(TARGET_PATH) != Err(TargetError::Missing) {
        return;
    }
    let quiet = Command::new(WRAPPER).env_remove("RUST_LOG").output().unwrap();
    let loud = Command::new(WRAPPER).env("RUST_LOG", "trace").output().unwrap();
    assert_eq!(quiet.status.code(), Some(EXIT_NOT_FOUND));
    assert_eq!(loud.status.code(), Some(EXIT_NOT_FOUND));
    assert_eq!(quiet.stderr, loud.stderr);
    let stderr = String::from_utf8_lossy(&loud.stderr);
    assert!(!stderr.contains("DEBUG"), "{stderr}");
}
