//! Violations are run in a child copy of this test binary, so the
//! terminating policy can be observed from the outside.

use std::env;
use std::process::{Command, ExitStatus, Output};

use gl_contract::{VIOLATION_POLICY, ViolationPolicy};

const CHILD_ENV: &str = "GL_CONTRACT_VIOLATION_CHILD";
const AFTER: &str = "still running after the check";

fn in_child() -> bool {
    env::var_os(CHILD_ENV).is_some()
}

/// Re-runs the single test `name` with the child marker set.
fn run_child(name: &str) -> Output {
    let exe = env::current_exe().unwrap();
    Command::new(exe)
        .args(["--exact", name, "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap()
}

#[cfg(unix)]
fn assert_aborted(status: ExitStatus) {
    use std::os::unix::process::ExitStatusExt;

    // SIGABRT
    assert_eq!(status.signal(), Some(6), "{status}");
}

#[cfg(not(unix))]
fn assert_aborted(status: ExitStatus) {
    assert!(!status.success());
    assert_ne!(status.code(), Some(101), "{status}");
}

fn assert_violation_ended(output: &Output) {
    assert!(!output.status.success());
    match VIOLATION_POLICY {
        ViolationPolicy::Terminate => assert_aborted(output.status),
        // The child test fails through the harness instead.
        ViolationPolicy::Raise => assert_eq!(output.status.code(), Some(101)),
    }
    assert!(!String::from_utf8_lossy(&output.stdout).contains(AFTER));
}

#[test]
fn failed_precondition_ends_the_process() {
    if in_child() {
        gl_contract::expects(false);
        println!("{AFTER}");
        return;
    }
    let output = run_child("failed_precondition_ends_the_process");
    assert_violation_ended(&output);
}

#[test]
fn fail_fast_ends_the_process() {
    if in_child() {
        gl_contract::fail_fast!("unreachable state");
    }
    let output = run_child("fail_fast_ends_the_process");
    assert_violation_ended(&output);
}

#[test]
fn passing_checks_let_the_child_finish() {
    if in_child() {
        gl_contract::expects(true);
        gl_contract::ensures(!AFTER.is_empty());
        println!("{AFTER}");
        return;
    }
    let output = run_child("passing_checks_let_the_child_finish");
    assert!(output.status.success(), "{}", output.status);
    assert!(String::from_utf8_lossy(&output.stdout).contains(AFTER));
}
