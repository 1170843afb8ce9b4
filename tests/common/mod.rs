//! # Test Harness
//!
//! Utilities for integration testing tuido without touching the user's real
//! data file. Uses the library's thread-local home override instead of
//! environment variables, so tests never interfere with the shell
//! environment.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

use std::{
    path::PathBuf,
    sync::{Mutex, MutexGuard},
};

use tempfile::TempDir;

use tuido::set_home_override;

/// Global lock to ensure tests touching shared process state (the session
/// marker file) run sequentially.
static TEST_LOCK: Mutex<()> = Mutex::new(());

/// Test environment with a temporary home directory. The data file resolves
/// to `<temp home>/Documents/todos.csv` for the duration of the test.
pub struct TestEnv {
    /// Temporary directory simulating the user's home
    #[allow(dead_code)]
    pub home_dir: TempDir,
    /// Guard for the test lock
    #[allow(dead_code)]
    test_guard: MutexGuard<'static, ()>,
}

impl TestEnv {
    pub fn new() -> Self {
        // Recover from a poisoned mutex if a previous test panicked while
        // holding the lock.
        let test_guard = TEST_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let home_dir = TempDir::new().expect("Failed to create temp home dir");
        set_home_override(Some(home_dir.path().to_path_buf()));

        Self {
            home_dir,
            test_guard,
        }
    }

    /// Path of the data file inside the temp home.
    pub fn data_path(&self) -> PathBuf {
        tuido::config::default_data_path()
    }

    /// Reads the raw data file content.
    #[allow(dead_code)]
    pub fn read_data_file(&self) -> String {
        std::fs::read_to_string(self.data_path()).expect("Failed to read data file")
    }

    /// Writes raw content to the data file, creating parent directories.
    #[allow(dead_code)]
    pub fn write_data_file(&self, content: &str) {
        let path = self.data_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create data dir");
        }
        std::fs::write(path, content).expect("Failed to write data file");
    }
}

impl Drop for TestEnv {
    fn drop(&mut self) {
        set_home_override(None);
    }
}
