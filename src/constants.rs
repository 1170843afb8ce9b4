//! # Constants
//!
//! Centralized constants for magic values used throughout tuido.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

// =============================================================================
// Data File
// =============================================================================

/// File name of the todo data file.
pub const DATA_FILE_NAME: &str = "todos.csv";

/// Directory under the user's home where the data file lives.
pub const DATA_DIR_NAME: &str = "Documents";

/// Line prefix that marks a sub-task inside a description.
pub const SUB_TODO_PREFIX: &str = "- ";

/// Prefix of the once-per-login-session quick view marker file.
pub const SESSION_MARKER_PREFIX: &str = "tuido-shown";

// =============================================================================
// UI Display
// =============================================================================

/// Column width for the ID column in the table view.
pub const UI_COL_ID_WIDTH: u16 = 4;

/// Column width for the Done column in the table view.
pub const UI_COL_DONE_WIDTH: u16 = 6;

/// Minimum width of the Title column.
pub const UI_MIN_TITLE_WIDTH: u16 = 15;

/// Minimum width of the Description column.
pub const UI_MIN_DESC_WIDTH: u16 = 20;

/// Maximum width of the detail and add/edit popups.
pub const UI_MAX_POPUP_WIDTH: u16 = 80;

/// Minimum width of the detail and add/edit popups.
pub const UI_MIN_POPUP_WIDTH: u16 = 40;

/// Checkbox glyph for a completed item.
pub const CHECKBOX_DONE: &str = "[x]";

/// Checkbox glyph for an open item.
pub const CHECKBOX_OPEN: &str = "[ ]";
