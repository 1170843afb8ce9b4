//! # Configuration
//!
//! Resolves the paths tuido reads and writes: the todo data file and the
//! quick view session marker. A thread-local home override lets integration
//! tests redirect everything to a temp directory without touching
//! environment variables.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

use std::{cell::RefCell, env, path::PathBuf};

use crate::constants::{DATA_DIR_NAME, DATA_FILE_NAME, SESSION_MARKER_PREFIX};

thread_local! {
    /// Thread-local override for the home directory path.
    /// Used by integration tests to redirect the data file to a temp
    /// directory without modifying environment variables.
    static HOME_OVERRIDE: RefCell<Option<PathBuf>> = const { RefCell::new(None) };
}

/// Sets a thread-local override for the home directory.
/// This is used by tests to redirect the data file without modifying env vars.
pub fn set_home_override(path: Option<PathBuf>) {
    HOME_OVERRIDE.with(|cell| {
        *cell.borrow_mut() = path;
    });
}

/// Gets the current home directory override, if set.
fn get_home_override() -> Option<PathBuf> {
    HOME_OVERRIDE.with(|cell| cell.borrow().clone())
}

/// Returns the user's home directory, honoring the test override.
fn home_dir() -> Option<PathBuf> {
    get_home_override().or_else(dirs::home_dir)
}

/// Returns the default path of the todo data file: `~/Documents/todos.csv`.
///
/// Falls back to `todos.csv` in the current directory when no home
/// directory can be determined.
pub fn default_data_path() -> PathBuf {
    home_dir().map_or_else(
        || PathBuf::from(DATA_FILE_NAME),
        |home| home.join(DATA_DIR_NAME).join(DATA_FILE_NAME),
    )
}

/// Returns the path of the once-per-login-session quick view marker.
///
/// Lives in the system temp directory (cleared on reboot) and carries the
/// user name to keep it user-specific on shared machines.
pub fn session_marker_path() -> PathBuf {
    let name = env::var("USER").map_or_else(
        |_| SESSION_MARKER_PREFIX.to_string(),
        |user| format!("{SESSION_MARKER_PREFIX}-{user}"),
    );
    env::temp_dir().join(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_data_path_with_override() {
        set_home_override(Some(PathBuf::from("/tmp/fake-home")));
        let path = default_data_path();
        set_home_override(None);

        assert_eq!(path, PathBuf::from("/tmp/fake-home/Documents/todos.csv"));
    }

    #[test]
    fn test_session_marker_in_temp_dir() {
        let path = session_marker_path();
        assert!(path.starts_with(env::temp_dir()));
        assert!(path
            .file_name()
            .and_then(|n| n.to_str())
            .is_some_and(|n| n.starts_with(SESSION_MARKER_PREFIX)));
    }
}
