//! Multi-line text area widget for the description field.
//!
//! Wraps tui-textarea for multi-line editing.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};
use tui_textarea::TextArea;

/// Multi-line text area widget.
pub struct TextAreaWidget<'a> {
    textarea: TextArea<'a>,
    label: String,
}

impl TextAreaWidget<'_> {
    /// Create a new text area with the given label.
    pub fn new(label: impl Into<String>) -> Self {
        let mut textarea = TextArea::default();
        textarea.set_cursor_line_style(Style::default());
        Self {
            textarea,
            label: label.into(),
        }
    }

    /// Set placeholder text shown while empty.
    #[must_use]
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.textarea.set_placeholder_text(placeholder);
        self
    }

    /// Set initial content.
    #[must_use]
    pub fn with_initial(mut self, content: &str) -> Self {
        let lines: Vec<String> = content.lines().map(String::from).collect();
        self.textarea = TextArea::new(lines);
        self.textarea.set_cursor_line_style(Style::default());
        self
    }

    /// Get the current content as a string.
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Insert text at the current cursor position.
    ///
    /// Used for paste operations. Supports multi-line text.
    pub fn insert_text(&mut self, text: &str) {
        self.textarea.insert_str(text);
    }

    /// Handle a key event.
    ///
    /// Returns `true` if the event was consumed by the text area.
    /// Keys the surrounding form owns (Esc, Tab, Ctrl+S, Ctrl+C) are NOT
    /// consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Esc || key.code == KeyCode::Tab {
            return false;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('s' | 'c'))
        {
            return false;
        }

        self.textarea.input(key);
        true
    }

    /// Render the widget.
    pub fn render(&mut self, area: Rect, frame: &mut Frame, focused: bool) {
        let border_style = if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(format!(" {} ", self.label));

        self.textarea.set_block(block);

        if focused {
            self.textarea
                .set_cursor_style(Style::default().bg(Color::White).fg(Color::Black));
        } else {
            self.textarea.set_cursor_style(Style::default());
        }

        frame.render_widget(&self.textarea, area);
    }
}

impl Clone for TextAreaWidget<'_> {
    fn clone(&self) -> Self {
        let content = self.content();
        Self::new(self.label.clone()).with_initial(&content)
    }
}
