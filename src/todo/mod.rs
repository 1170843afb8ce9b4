//! # Todo
//!
//! The todo data model: top-level items and their embedded sub-task checklists.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

pub mod parser;

use chrono::{DateTime, Local, Utc};

use crate::constants::{CHECKBOX_DONE, CHECKBOX_OPEN};

/// A lightweight checklist entry embedded in a todo's description.
///
/// Sub-todos are owned exclusively by their parent [`Todo`] and are re-derived
/// wholesale whenever the parent's description is edited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubTodo {
    /// 1-based, sequential within the parent (assigned on parse).
    pub id: u64,
    pub title: String,
    pub completed: bool,
}

impl SubTodo {
    /// Creates a new, uncompleted sub-todo.
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            completed: false,
        }
    }

    /// Returns the checkbox glyph for this sub-todo.
    pub const fn checkbox(&self) -> &'static str {
        if self.completed {
            CHECKBOX_DONE
        } else {
            CHECKBOX_OPEN
        }
    }
}

/// A top-level task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Todo {
    /// Unique, 1-based, dense; renumbered after every deletion.
    pub id: u64,
    pub title: String,
    /// Free text with sub-task lines stripped out.
    pub description: String,
    pub completed: bool,
    /// Set once at creation. `None` only for records loaded with a
    /// missing or malformed timestamp.
    pub created_at: Option<DateTime<Utc>>,
    /// Present iff `completed` is true.
    pub completed_at: Option<DateTime<Utc>>,
    pub sub_todos: Vec<SubTodo>,
}

impl Todo {
    /// Creates a new open todo with the given id, parsing sub-tasks out of
    /// the raw description.
    pub fn new(id: u64, title: impl Into<String>, raw_description: &str) -> Self {
        let (description, sub_todos) = parser::parse(raw_description);
        Self {
            id,
            title: title.into(),
            description,
            completed: false,
            created_at: Some(Utc::now()),
            completed_at: None,
            sub_todos,
        }
    }

    /// Returns the checkbox glyph for this todo.
    pub const fn checkbox(&self) -> &'static str {
        if self.completed {
            CHECKBOX_DONE
        } else {
            CHECKBOX_OPEN
        }
    }

    /// Returns `(completed, total)` sub-task counts, or `None` when the todo
    /// has no sub-tasks.
    pub fn sub_progress(&self) -> Option<(usize, usize)> {
        if self.sub_todos.is_empty() {
            return None;
        }
        let done = self.sub_todos.iter().filter(|s| s.completed).count();
        Some((done, self.sub_todos.len()))
    }
}

/// Formats a stored UTC timestamp for display in the user's local time zone.
pub fn format_local(timestamp: DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%b %-d, %Y at %-I:%M %p")
        .to_string()
}
