//! # Storage
//!
//! CSV persistence for the todo collection.
//!
//! The file is a header row followed by one record per todo:
//! `id, title, description, completed, created_at, completed_at, sub_todos`.
//! Timestamps are RFC 3339 or empty. The `sub_todos` field encodes the
//! checklist as one `[x] title` / `[ ] title` line per sub-task; CSV quoting
//! keeps the embedded newlines inside a single field.
//!
//! Loading is lenient: a missing file yields an empty collection, and
//! malformed fields degrade to absent/zero values instead of failing the
//! whole load. Saving is a full truncate-and-rewrite on every call.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs::{self, File},
    io::ErrorKind,
    path::Path,
};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    constants::{CHECKBOX_DONE, CHECKBOX_OPEN},
    todo::{SubTodo, Todo},
};

/// Errors raised by the persistence layer.
#[derive(Debug, Error)]
pub enum StorageError {
    /// File open/create/read/write failure other than "does not exist".
    #[error("failed to access todo file: {0}")]
    Io(#[from] std::io::Error),

    /// Structurally broken CSV that cannot be recovered row by row.
    #[error("malformed todo file: {0}")]
    Parse(#[from] csv::Error),
}

/// Column names of the header row, in field order.
const HEADER: [&str; 7] = [
    "id",
    "title",
    "description",
    "completed",
    "created_at",
    "completed_at",
    "sub_todos",
];

/// On-disk row layout. Field order matches [`HEADER`].
#[derive(Debug, Serialize, Deserialize)]
struct Record {
    id: u64,
    title: String,
    description: String,
    completed: bool,
    created_at: String,
    completed_at: String,
    sub_todos: String,
}

impl From<&Todo> for Record {
    fn from(todo: &Todo) -> Self {
        Self {
            id: todo.id,
            title: todo.title.clone(),
            description: todo.description.clone(),
            completed: todo.completed,
            created_at: encode_timestamp(todo.created_at),
            completed_at: encode_timestamp(todo.completed_at),
            sub_todos: encode_sub_todos(&todo.sub_todos),
        }
    }
}

/// Loads the whole collection from `path`.
///
/// A missing file is not an error; it yields an empty collection.
pub fn load(path: &Path) -> Result<Vec<Todo>, StorageError> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
        Err(err) => return Err(err.into()),
    };

    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(file);

    let mut todos = Vec::new();
    for record in reader.records() {
        let record = record?;
        // Rows missing the core fields are skipped, matching the lenient
        // load contract.
        if record.len() < 4 {
            continue;
        }

        let completed = &record[3] == "true";
        todos.push(Todo {
            id: record[0].parse().unwrap_or(0),
            title: record[1].to_string(),
            description: record[2].to_string(),
            completed,
            created_at: record.get(4).and_then(decode_timestamp),
            completed_at: record.get(5).and_then(decode_timestamp),
            sub_todos: record.get(6).map_or_else(Vec::new, decode_sub_todos),
        });
    }

    Ok(todos)
}

/// Saves the whole collection to `path`, overwriting any existing file.
///
/// The parent directory is created when absent. There is no atomic rename;
/// a crash mid-write can corrupt the file.
pub fn save(path: &Path, todos: &[Todo]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let file = File::create(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    // Write the header ourselves so an empty collection still produces
    // a well-formed file.
    writer.write_record(HEADER)?;
    for todo in todos {
        writer.serialize(Record::from(todo))?;
    }
    writer.flush()?;

    Ok(())
}

fn encode_timestamp(timestamp: Option<DateTime<Utc>>) -> String {
    timestamp.map_or_else(String::new, |ts| ts.to_rfc3339())
}

/// Decodes an RFC 3339 timestamp field. Empty or malformed values are
/// treated as absent rather than aborting the load.
fn decode_timestamp(field: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(field)
        .ok()
        .map(|ts| ts.with_timezone(&Utc))
}

/// Encodes a checklist as one `[x] title` / `[ ] title` line per sub-task.
fn encode_sub_todos(sub_todos: &[SubTodo]) -> String {
    sub_todos
        .iter()
        .map(|sub| {
            let checkbox = if sub.completed {
                CHECKBOX_DONE
            } else {
                CHECKBOX_OPEN
            };
            format!("{checkbox} {}", sub.title)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Decodes the `sub_todos` field. Ids are re-assigned 1..N positionally;
/// lines without a checkbox prefix are dropped.
fn decode_sub_todos(field: &str) -> Vec<SubTodo> {
    let mut sub_todos = Vec::new();
    for line in field.lines() {
        let (completed, title) = if let Some(rest) = line.strip_prefix("[x] ") {
            (true, rest)
        } else if let Some(rest) = line.strip_prefix("[ ] ") {
            (false, rest)
        } else {
            continue;
        };

        let id = sub_todos.len() as u64 + 1;
        sub_todos.push(SubTodo {
            id,
            title: title.to_string(),
            completed,
        });
    }
    sub_todos
}
