//! # Todo Store
//!
//! In-memory ordered collection of todos. The store is the sole owner of all
//! todo values: consumers borrow transiently per redraw, and every mutating
//! operation is followed synchronously by a save to the data file.
//!
//! A failed save is returned to the caller for reporting but never rolls
//! back the in-memory mutation; the next successful save reconciles.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

use std::path::{Path, PathBuf};

use chrono::Utc;

use crate::{
    storage::{self, StorageError},
    todo::{parser, Todo},
};

/// Owns the todo collection and its backing file path.
#[derive(Debug)]
pub struct TodoStore {
    todos: Vec<Todo>,
    path: PathBuf,
}

impl TodoStore {
    /// Loads the store from the given data file. A missing file yields an
    /// empty store.
    pub fn load(path: PathBuf) -> Result<Self, StorageError> {
        let todos = storage::load(&path)?;
        Ok(Self { todos, path })
    }

    /// Returns all todos in display (append) order.
    pub fn todos(&self) -> &[Todo] {
        &self.todos
    }

    /// Path of the backing data file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.todos.len()
    }

    /// Looks up a todo by id.
    pub fn get(&self, id: u64) -> Option<&Todo> {
        self.todos.iter().find(|todo| todo.id == id)
    }

    /// Creates a new todo and appends it to the collection.
    ///
    /// The caller must not pass an empty (trimmed) title; the UI layer
    /// declines to commit such input before it reaches the store.
    pub fn add(&mut self, title: &str, raw_description: &str) -> Result<(), StorageError> {
        debug_assert!(
            !title.trim().is_empty(),
            "add called with an empty title; the UI must reject this"
        );

        let new_id = self.todos.iter().map(|todo| todo.id).max().unwrap_or(0) + 1;
        self.todos.push(Todo::new(new_id, title, raw_description));
        self.persist()
    }

    /// Overwrites the title and description of an existing todo, re-parsing
    /// the sub-task checklist from the raw description.
    ///
    /// The checklist is replaced wholesale; completion state of previous
    /// sub-tasks is not carried over. No-op if the id is unknown.
    pub fn update(
        &mut self,
        id: u64,
        title: &str,
        raw_description: &str,
    ) -> Result<(), StorageError> {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            let (description, sub_todos) = parser::parse(raw_description);
            todo.title = title.to_string();
            todo.description = description;
            todo.sub_todos = sub_todos;
        }
        self.persist()
    }

    /// Removes the todo with the given id, then renumbers every surviving
    /// todo to its 1-based position so ids stay a dense 1..N sequence.
    ///
    /// Callers holding an id from before the delete must re-resolve it.
    pub fn delete(&mut self, id: u64) -> Result<(), StorageError> {
        if let Some(pos) = self.todos.iter().position(|todo| todo.id == id) {
            self.todos.remove(pos);
        }
        for (index, todo) in self.todos.iter_mut().enumerate() {
            todo.id = index as u64 + 1;
        }
        self.persist()
    }

    /// Flips the completion flag, stamping `completed_at` on the way to
    /// completed and clearing it on the way back.
    pub fn toggle_complete(&mut self, id: u64) -> Result<(), StorageError> {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == id) {
            todo.completed = !todo.completed;
            todo.completed_at = todo.completed.then(Utc::now);
        }
        self.persist()
    }

    /// Flips one sub-task's completion flag. No-op when the parent or the
    /// index does not exist.
    ///
    /// Deliberately does NOT persist: in the detail view the caller saves
    /// immediately, while toggles inside an in-progress edit only become
    /// durable when the edit is committed.
    pub fn toggle_subtodo(&mut self, todo_id: u64, sub_index: usize) {
        if let Some(todo) = self.todos.iter_mut().find(|todo| todo.id == todo_id) {
            if let Some(sub) = todo.sub_todos.get_mut(sub_index) {
                sub.completed = !sub.completed;
            }
        }
    }

    /// Writes the whole collection to the data file.
    pub fn persist(&self) -> Result<(), StorageError> {
        storage::save(&self.path, &self.todos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> TodoStore {
        let dir = tempfile::tempdir().unwrap();
        // Keep the tempdir alive by leaking it; unit tests are short-lived.
        let path = dir.keep().join("todos.csv");
        TodoStore::load(path).unwrap()
    }

    #[test]
    fn test_add_assigns_dense_ids() {
        let mut store = store();
        store.add("first", "").unwrap();
        store.add("second", "").unwrap();
        let ids: Vec<u64> = store.todos().iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_delete_renumbers_survivors() {
        let mut store = store();
        store.add("one", "").unwrap();
        store.add("two", "").unwrap();
        store.add("three", "").unwrap();

        store.delete(2).unwrap();

        let remaining: Vec<(u64, &str)> = store
            .todos()
            .iter()
            .map(|t| (t.id, t.title.as_str()))
            .collect();
        assert_eq!(remaining, vec![(1, "one"), (2, "three")]);
    }

    #[test]
    fn test_delete_every_item_in_turn() {
        let mut store = store();
        for title in ["a", "b", "c", "d"] {
            store.add(title, "").unwrap();
        }
        while !store.is_empty() {
            store.delete(1).unwrap();
            let ids: Vec<u64> = store.todos().iter().map(|t| t.id).collect();
            let expected: Vec<u64> = (1..=store.len() as u64).collect();
            assert_eq!(ids, expected);
        }
    }

    #[test]
    fn test_toggle_complete_roundtrip() {
        let mut store = store();
        store.add("task", "").unwrap();

        store.toggle_complete(1).unwrap();
        assert!(store.get(1).unwrap().completed);
        assert!(store.get(1).unwrap().completed_at.is_some());

        store.toggle_complete(1).unwrap();
        assert!(!store.get(1).unwrap().completed);
        assert!(store.get(1).unwrap().completed_at.is_none());
    }

    #[test]
    fn test_update_replaces_sub_todos_wholesale() {
        let mut store = store();
        store.add("task", "- eggs\n- bread").unwrap();
        store.toggle_subtodo(1, 0);
        assert!(store.get(1).unwrap().sub_todos[0].completed);

        // Re-editing re-parses the checklist; prior completion state is lost.
        store.update(1, "task", "- eggs\n- bread").unwrap();
        assert!(!store.get(1).unwrap().sub_todos[0].completed);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let mut store = store();
        store.add("task", "").unwrap();
        store.update(99, "other", "text").unwrap();
        assert_eq!(store.get(1).unwrap().title, "task");
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_toggle_subtodo_bounds_checked() {
        let mut store = store();
        store.add("task", "- only").unwrap();

        store.toggle_subtodo(1, 5); // out of range
        store.toggle_subtodo(9, 0); // unknown parent
        assert!(!store.get(1).unwrap().sub_todos[0].completed);

        store.toggle_subtodo(1, 0);
        assert!(store.get(1).unwrap().sub_todos[0].completed);
    }

    #[test]
    fn test_toggle_subtodo_does_not_persist() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("todos.csv");

        let mut store = TodoStore::load(path.clone()).unwrap();
        store.add("task", "- step").unwrap();

        store.toggle_subtodo(1, 0);
        let on_disk = storage::load(&path).unwrap();
        assert!(!on_disk[0].sub_todos[0].completed);

        store.persist().unwrap();
        let on_disk = storage::load(&path).unwrap();
        assert!(on_disk[0].sub_todos[0].completed);
    }
}
