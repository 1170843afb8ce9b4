//! # Sub-task Parser
//!
//! Extracts the embedded sub-task checklist from a free-text description.
//!
//! Lines whose trimmed form starts with `"- "` become sub-tasks; all other
//! non-blank lines are retained as the cleaned description. The function is
//! pure and idempotent: re-running it on an already-cleaned description
//! yields no sub-tasks.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

use super::SubTodo;
use crate::constants::SUB_TODO_PREFIX;

/// Splits a raw description into its cleaned text and sub-task checklist.
///
/// Sub-task ids are assigned sequentially starting at 1, in the order the
/// `"- "` lines appear. A line that is only the prefix (empty title) is
/// dropped entirely, as are blank lines. Retained lines keep their original
/// indentation; only the joined result is trimmed as a whole.
pub fn parse(description: &str) -> (String, Vec<SubTodo>) {
    let mut kept_lines: Vec<&str> = Vec::new();
    let mut sub_todos: Vec<SubTodo> = Vec::new();

    for line in description.lines() {
        let trimmed = line.trim();

        // Strip the prefix from the start-trimmed line, not the fully
        // trimmed one: a line that is only "- " trims down to "-" and
        // would otherwise stop matching the prefix.
        if let Some(rest) = line.trim_start().strip_prefix(SUB_TODO_PREFIX) {
            let title = rest.trim();
            if !title.is_empty() {
                let id = sub_todos.len() as u64 + 1;
                sub_todos.push(SubTodo::new(id, title));
            }
        } else if !trimmed.is_empty() {
            kept_lines.push(line);
        }
    }

    let cleaned = kept_lines.join("\n").trim().to_string();
    (cleaned, sub_todos)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_description_unchanged() {
        let (cleaned, subs) = parse("just some text");
        assert_eq!(cleaned, "just some text");
        assert!(subs.is_empty());
    }

    #[test]
    fn test_extracts_sub_todos_in_order() {
        let (cleaned, subs) = parse("buy milk\n- eggs\n- bread\n\nfor breakfast");
        assert_eq!(cleaned, "buy milk\nfor breakfast");
        assert_eq!(subs.len(), 2);
        assert_eq!((subs[0].id, subs[0].title.as_str()), (1, "eggs"));
        assert_eq!((subs[1].id, subs[1].title.as_str()), (2, "bread"));
        assert!(subs.iter().all(|s| !s.completed));
    }

    #[test]
    fn test_indented_sub_todo_lines() {
        let (cleaned, subs) = parse("  - first\n\t- second");
        assert!(cleaned.is_empty());
        assert_eq!(subs.len(), 2);
        assert_eq!(subs[0].title, "first");
        assert_eq!(subs[1].title, "second");
    }

    #[test]
    fn test_empty_sub_todo_dropped() {
        // A bare "- " is neither a sub-task nor description text.
        let (cleaned, subs) = parse("- \ntext");
        assert_eq!(cleaned, "text");
        assert!(subs.is_empty());
    }

    #[test]
    fn test_prefix_only_line_dropped_despite_whitespace() {
        // Indentation or extra trailing spaces around a bare prefix make
        // no difference; the line vanishes either way.
        let (cleaned, subs) = parse("  -  \nkeep\n\t- ");
        assert_eq!(cleaned, "keep");
        assert!(subs.is_empty());
    }

    #[test]
    fn test_dash_without_space_is_description() {
        let (cleaned, subs) = parse("-notasub");
        assert_eq!(cleaned, "-notasub");
        assert!(subs.is_empty());
    }

    #[test]
    fn test_blank_lines_dropped() {
        let (cleaned, subs) = parse("\n\nfirst\n\n\nsecond\n\n");
        assert_eq!(cleaned, "first\nsecond");
        assert!(subs.is_empty());
    }

    #[test]
    fn test_idempotent_on_cleaned_output() {
        let (cleaned, _) = parse("top\n- one\n- two\nbottom");
        let (recleaned, subs) = parse(&cleaned);
        assert_eq!(recleaned, cleaned);
        assert!(subs.is_empty());
    }

    #[test]
    fn test_whole_result_trimmed() {
        let (cleaned, _) = parse("   \nkeep me\n   ");
        assert_eq!(cleaned, "keep me");
    }
}
