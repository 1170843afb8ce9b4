//! # Persistence Integration Tests
//!
//! File-format behavior: header row, quoting of awkward field content,
//! lenient recovery of hand-damaged files.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

mod common;

use common::TestEnv;
use tuido::{storage, Todo};

#[test]
fn test_header_row_written() {
    let env = TestEnv::new();
    storage::save(&env.data_path(), &[Todo::new(1, "task", "")]).unwrap();

    let first_line = env
        .read_data_file()
        .lines()
        .next()
        .map(String::from)
        .unwrap();
    assert_eq!(
        first_line,
        "id,title,description,completed,created_at,completed_at,sub_todos"
    );
}

#[test]
fn test_awkward_field_content_roundtrips() {
    let env = TestEnv::new();
    let todo = Todo::new(
        1,
        "title, with \"quotes\"",
        "line one\nline two, still line two\n- sub with, comma",
    );

    storage::save(&env.data_path(), &[todo.clone()]).unwrap();
    let loaded = storage::load(&env.data_path()).unwrap();

    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, todo.title);
    assert_eq!(loaded[0].description, "line one\nline two, still line two");
    assert_eq!(loaded[0].sub_todos.len(), 1);
    assert_eq!(loaded[0].sub_todos[0].title, "sub with, comma");
}

#[test]
fn test_save_overwrites_whole_file() {
    let env = TestEnv::new();
    storage::save(
        &env.data_path(),
        &[Todo::new(1, "one", ""), Todo::new(2, "two", "")],
    )
    .unwrap();
    storage::save(&env.data_path(), &[Todo::new(1, "only", "")]).unwrap();

    let loaded = storage::load(&env.data_path()).unwrap();
    assert_eq!(loaded.len(), 1);
    assert_eq!(loaded[0].title, "only");
}

#[test]
fn test_hand_damaged_file_loads_leniently() {
    let env = TestEnv::new();
    env.write_data_file(
        "id,title,description,completed,created_at,completed_at,sub_todos\n\
         1,Fine,desc,false,2026-08-30T09:00:00Z,,\n\
         nope,Bad id,desc,true,garbage,garbage,\n",
    );

    let loaded = storage::load(&env.data_path()).unwrap();
    assert_eq!(loaded.len(), 2);
    assert_eq!(loaded[0].id, 1);

    // Malformed fields degrade instead of failing the load.
    assert_eq!(loaded[1].id, 0);
    assert!(loaded[1].created_at.is_none());
    assert!(loaded[1].completed_at.is_none());
    assert!(loaded[1].completed);
}

#[test]
fn test_missing_file_yields_empty_collection() {
    let env = TestEnv::new();
    assert!(!env.data_path().exists());
    assert!(storage::load(&env.data_path()).unwrap().is_empty());
}

#[test]
fn test_spec_example_description() {
    let env = TestEnv::new();
    let todo = Todo::new(1, "Groceries", "buy milk\n- eggs\n- bread\n\nfor breakfast");
    assert_eq!(todo.description, "buy milk\nfor breakfast");

    storage::save(&env.data_path(), &[todo]).unwrap();
    let loaded = storage::load(&env.data_path()).unwrap();

    assert_eq!(loaded[0].description, "buy milk\nfor breakfast");
    let subs: Vec<(u64, &str)> = loaded[0]
        .sub_todos
        .iter()
        .map(|s| (s.id, s.title.as_str()))
        .collect();
    assert_eq!(subs, vec![(1, "eggs"), (2, "bread")]);
}
