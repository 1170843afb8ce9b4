//! Event handling for the TUI.
//!
//! Maps crossterm events to the small [`TuiEvent`] surface the screens
//! consume. Blocking reads only; the event loop is strictly synchronous.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};

/// Events delivered to a running TUI application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    /// A key press.
    Key(KeyEvent),
    /// Bracketed paste content.
    Paste(String),
    /// Terminal was resized to (width, height).
    Resize(u16, u16),
}

/// Blocking reader of terminal events.
#[derive(Debug, Default)]
pub struct EventHandler;

impl EventHandler {
    /// Reads the next event, skipping key releases and repeats so every
    /// returned key event is a single press.
    pub fn next(&self) -> Result<TuiEvent> {
        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    return Ok(TuiEvent::Key(key))
                }
                Event::Paste(content) => return Ok(TuiEvent::Paste(content)),
                Event::Resize(width, height) => return Ok(TuiEvent::Resize(width, height)),
                _ => {}
            }
        }
    }
}
