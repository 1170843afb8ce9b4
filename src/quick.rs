//! # Quick View
//!
//! One-shot, non-interactive summary of active todos, intended for shell
//! startup files. Prints at most once per login session: a marker file in
//! the system temp directory (cleared on reboot) records that the summary
//! was already shown, and output is suppressed entirely when stdout is not
//! a terminal. `--force` bypasses both gates.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

use std::{
    fs::{self, File},
    io::IsTerminal,
    path::Path,
};

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::{config, storage};

/// Checks whether the quick view was already shown this login session.
pub fn already_shown() -> bool {
    config::session_marker_path().exists()
}

/// Records that the quick view was shown this login session.
pub fn mark_shown() -> Result<()> {
    let path = config::session_marker_path();
    File::create(&path)
        .with_context(|| format!("failed to create session marker: {}", path.display()))?;
    Ok(())
}

/// Clears the session marker. Missing marker is fine.
pub fn clear_marker() {
    let _ = fs::remove_file(config::session_marker_path());
}

/// Prints the active-todo summary and exits.
///
/// Unless `force` is set, does nothing when stdout is not an interactive
/// terminal or when the summary was already shown this session. Marker file
/// errors after printing are non-fatal.
pub fn run(path: &Path, force: bool) -> Result<()> {
    if !force && (!std::io::stdout().is_terminal() || already_shown()) {
        return Ok(());
    }

    let todos = storage::load(path).context("failed to load todos")?;
    let active: Vec<_> = todos.iter().filter(|todo| !todo.completed).collect();

    println!("{}", "Active Todos".magenta().bold());
    println!();

    if active.is_empty() {
        println!("{}", "No active todos!".dimmed().italic());
    } else {
        for (index, todo) in active.iter().enumerate() {
            println!(
                "{} {}",
                format!("{}.", todo.id).cyan().bold(),
                todo.title.cyan().bold()
            );

            if !todo.description.is_empty() {
                for line in todo.description.lines() {
                    println!("   {}", line.dimmed());
                }
            }

            for sub in &todo.sub_todos {
                println!("   {} {}", sub.checkbox().dimmed(), sub.title.dimmed());
            }
            if let Some((done, total)) = todo.sub_progress() {
                println!("   {}", format!("({done}/{total} done)").yellow());
            }

            if index < active.len() - 1 {
                println!();
            }
        }
    }

    println!();
    println!("{}", "Run 'tuido' to open the full app".dimmed());

    // Gate future sessions; failing to write the marker is not worth an error.
    let _ = mark_shown();

    Ok(())
}
