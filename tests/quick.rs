//! # Quick View Tests
//!
//! CLI-level behavior of `tuido --quick` plus the session marker gate.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

mod common;

use assert_cmd::Command;
use common::TestEnv;
use predicates::prelude::*;
use tuido::{quick, storage, Todo};

fn cmd() -> Command {
    Command::cargo_bin("tuido").expect("binary should build")
}

#[test]
fn test_quick_force_prints_active_todos() {
    let env = TestEnv::new();
    let mut done = Todo::new(2, "Already finished", "");
    done.completed = true;
    storage::save(
        &env.data_path(),
        &[Todo::new(1, "Water plants", "- fern\n- basil"), done],
    )
    .unwrap();

    cmd()
        .args(["--quick", "--force", "--file"])
        .arg(env.data_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Water plants"))
        .stdout(predicate::str::contains("fern"))
        .stdout(predicate::str::contains("(0/2 done)"))
        .stdout(predicate::str::contains("Already finished").not());
}

#[test]
fn test_quick_empty_collection_message() {
    let env = TestEnv::new();
    storage::save(&env.data_path(), &[]).unwrap();

    cmd()
        .args(["--quick", "--force", "--file"])
        .arg(env.data_path())
        .assert()
        .success()
        .stdout(predicate::str::contains("No active todos!"));
}

#[test]
fn test_quick_without_force_skips_non_interactive_stdout() {
    let env = TestEnv::new();
    storage::save(&env.data_path(), &[Todo::new(1, "Hidden", "")]).unwrap();

    // stdout is a pipe here, so the interactive-shell gate suppresses output.
    cmd()
        .args(["--quick", "--file"])
        .arg(env.data_path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_quick_unreadable_file_fails() {
    let env = TestEnv::new();
    // A directory where the data file should be forces a read failure.
    std::fs::create_dir_all(env.data_path()).unwrap();

    cmd()
        .args(["--quick", "--force", "--file"])
        .arg(env.data_path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn test_session_marker_gates_once_per_session() {
    let _env = TestEnv::new(); // holds the test lock around marker state

    quick::clear_marker();
    assert!(!quick::already_shown());

    quick::mark_shown().unwrap();
    assert!(quick::already_shown());

    quick::clear_marker();
    assert!(!quick::already_shown());
}
