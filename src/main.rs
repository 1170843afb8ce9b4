//! # tuido CLI
//!
//! Launches the full-screen todo manager, or prints the quick view with
//! `--quick`.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use owo_colors::OwoColorize;

use tuido::{config, quick, tui, TodoStore};

#[derive(Parser)]
#[command(name = "tuido")]
#[command(version)]
#[command(about = "Terminal todo-list manager with sub-task checklists")]
#[command(
    long_about = "tuido is a full-screen terminal todo-list manager. Todos are stored in a \
plain CSV file (~/Documents/todos.csv by default) and can carry a sub-task checklist: \
start a description line with '- ' to turn it into a checkable sub-todo.

Run without flags for the interactive app. Add 'tuido --quick' to your shell startup \
file to see your active todos once per login session."
)]
struct Cli {
    /// Print a one-shot summary of active todos and exit
    #[arg(short, long)]
    quick: bool,

    /// With --quick: print even if already shown this session
    #[arg(short, long)]
    force: bool,

    /// Use a specific data file instead of ~/Documents/todos.csv
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{} {err:#}", "error:".red().bold());
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let path = cli.file.unwrap_or_else(config::default_data_path);

    if cli.quick {
        return quick::run(&path, cli.force);
    }

    let store = TodoStore::load(path).context("failed to load todos")?;
    let app = tui::app::TodoApp::new(store);
    tui::run(app)?;

    Ok(())
}
