//! # tuido
//!
//! A single-user terminal todo-list manager.
//!
//! Todos live in a flat CSV file and carry an embedded sub-task checklist
//! declared with `"- "` lines inside the description. The full-screen TUI
//! offers a filterable table, a detail view with per-sub-task toggling, and
//! an add/edit form; a `--quick` mode prints a once-per-login-session
//! summary of active todos for shell startup files.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

pub mod config;
pub mod constants;
pub mod quick;
pub mod storage;
pub mod store;
pub mod todo;
pub mod tui;

pub use config::set_home_override;
pub use store::TodoStore;
pub use todo::{SubTodo, Todo};
