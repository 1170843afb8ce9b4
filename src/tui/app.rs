//! The interactive todo application.
//!
//! A single [`TuiApp`] with four view modes: the todo table, a detail popup
//! with a navigable sub-task checklist, and the add/edit form. Key input is
//! dispatched per mode; every mutation is saved synchronously and a failed
//! save surfaces on the status line without rolling back in-memory state.
//!
//! Copyright (c) 2026 The tuido authors. All rights reserved.
//! Licensed under the MIT License.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Row, Table, TableState, Widget},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::{
    constants::{
        SUB_TODO_PREFIX, UI_COL_DONE_WIDTH, UI_COL_ID_WIDTH, UI_MAX_POPUP_WIDTH,
        UI_MIN_DESC_WIDTH, UI_MIN_POPUP_WIDTH, UI_MIN_TITLE_WIDTH,
    },
    storage::StorageError,
    store::TodoStore,
    todo::{format_local, Todo},
    tui::{
        event::TuiEvent,
        widgets::{TextAreaWidget, TextInput},
        AppResult, TuiApp,
    },
};

/// Which screen is active and how key input is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Table,
    Detail,
    Add,
    Edit,
}

/// Which subset of the store the table shows. Projection only; the
/// underlying collection is never altered by filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    ActiveOnly,
    CompletedOnly,
}

impl FilterMode {
    /// Cycle order for the `f` key.
    const fn next(self) -> Self {
        match self {
            Self::All => Self::ActiveOnly,
            Self::ActiveOnly => Self::CompletedOnly,
            Self::CompletedOnly => Self::All,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::ActiveOnly => "Active",
            Self::CompletedOnly => "Completed",
        }
    }

    const fn matches(self, todo: &Todo) -> bool {
        match self {
            Self::All => true,
            Self::ActiveOnly => !todo.completed,
            Self::CompletedOnly => todo.completed,
        }
    }
}

/// Focused input in the add/edit form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Title,
    Description,
}

/// The full-screen todo application.
pub struct TodoApp<'a> {
    store: TodoStore,
    mode: ViewMode,
    filter: FilterMode,
    table_state: TableState,
    /// Ids of the rows currently visible, in display order. Rebuilt on
    /// every refresh; selection is resolved through these ids, never
    /// through a cached row index.
    visible_ids: Vec<u64>,
    title_input: TextInput,
    desc_input: TextAreaWidget<'a>,
    focus: Field,
    /// Id of the todo being edited; `None` while adding.
    editing_id: Option<u64>,
    /// Sub-task cursor, meaningful only in the detail view.
    selected_sub: usize,
    /// Last save failure, shown on the status line until the next
    /// successful save.
    save_error: Option<String>,
}

impl TodoApp<'_> {
    pub fn new(store: TodoStore) -> Self {
        let mut app = Self {
            store,
            mode: ViewMode::Table,
            filter: FilterMode::default(),
            table_state: TableState::default(),
            visible_ids: Vec::new(),
            title_input: Self::fresh_title_input(),
            desc_input: Self::fresh_desc_input(),
            focus: Field::Title,
            editing_id: None,
            selected_sub: 0,
            save_error: None,
        };
        app.refresh();
        app
    }

    fn fresh_title_input() -> TextInput {
        TextInput::new("Title").with_placeholder("Enter todo title")
    }

    fn fresh_desc_input() -> TextAreaWidget<'static> {
        TextAreaWidget::new("Description").with_placeholder("Enter todo description")
    }

    /// Rebuilds the visible row set from the store and the active filter,
    /// clamping the table selection into the new bounds.
    fn refresh(&mut self) {
        self.visible_ids = self
            .store
            .todos()
            .iter()
            .filter(|todo| self.filter.matches(todo))
            .map(|todo| todo.id)
            .collect();

        if self.visible_ids.is_empty() {
            self.table_state.select(None);
        } else {
            let row = self
                .table_state
                .selected()
                .unwrap_or(0)
                .min(self.visible_ids.len() - 1);
            self.table_state.select(Some(row));
        }
    }

    /// Resolves the current selection to a stable id.
    fn selected_id(&self) -> Option<u64> {
        self.table_state
            .selected()
            .and_then(|row| self.visible_ids.get(row))
            .copied()
    }

    fn selected_todo(&self) -> Option<&Todo> {
        self.selected_id().and_then(|id| self.store.get(id))
    }

    /// Records the outcome of a save-after-mutation. Failures are shown on
    /// the status line; in-memory state keeps serving either way.
    fn record_save(&mut self, result: Result<(), StorageError>) {
        self.save_error = result.err().map(|err| err.to_string());
    }

    fn select_previous_row(&mut self) {
        if self.visible_ids.is_empty() {
            return;
        }
        let row = self.table_state.selected().unwrap_or(0).saturating_sub(1);
        self.table_state.select(Some(row));
    }

    fn select_next_row(&mut self) {
        if self.visible_ids.is_empty() {
            return;
        }
        let row = self
            .table_state
            .selected()
            .map_or(0, |row| (row + 1).min(self.visible_ids.len() - 1));
        self.table_state.select(Some(row));
    }

    /// Rebuilds an editable description: the cleaned text followed by one
    /// `- title` line per sub-task, so the checklist survives an edit
    /// round-trip (completion state is re-derived on save).
    fn edit_buffer(todo: &Todo) -> String {
        let mut buffer = todo.description.clone();
        if !todo.sub_todos.is_empty() {
            if !buffer.is_empty() {
                buffer.push('\n');
            }
            for sub in &todo.sub_todos {
                buffer.push_str(SUB_TODO_PREFIX);
                buffer.push_str(&sub.title);
                buffer.push('\n');
            }
        }
        buffer
    }

    fn open_add_form(&mut self) {
        self.mode = ViewMode::Add;
        self.editing_id = None;
        self.title_input = Self::fresh_title_input();
        self.desc_input = Self::fresh_desc_input();
        self.focus = Field::Title;
    }

    fn open_edit_form(&mut self) {
        let Some(todo) = self.selected_todo() else {
            return;
        };
        let id = todo.id;
        let title = todo.title.clone();
        let buffer = Self::edit_buffer(todo);

        self.mode = ViewMode::Edit;
        self.editing_id = Some(id);
        self.title_input = Self::fresh_title_input().with_initial(title);
        self.desc_input = Self::fresh_desc_input().with_initial(&buffer);
        self.focus = Field::Title;
    }

    fn close_form(&mut self) {
        self.mode = ViewMode::Table;
        self.editing_id = None;
    }

    /// Commits the form. An empty trimmed title is silently declined and
    /// the form stays open.
    fn commit_form(&mut self) {
        let title = self.title_input.content().trim().to_string();
        if title.is_empty() {
            return;
        }

        let description = self.desc_input.content();
        let result = match self.editing_id {
            Some(id) => self.store.update(id, &title, &description),
            None => self.store.add(&title, &description),
        };
        self.record_save(result);
        self.close_form();
        self.refresh();
    }

    fn handle_table_key(&mut self, key: KeyEvent) -> Option<AppResult<()>> {
        match key.code {
            KeyCode::Char('q') => return Some(AppResult::Done(())),
            KeyCode::Char('a') => self.open_add_form(),
            KeyCode::Char('e') => self.open_edit_form(),
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    let result = self.store.delete(id);
                    self.record_save(result);
                    self.refresh();
                }
            }
            KeyCode::Char(' ') => {
                if let Some(id) = self.selected_id() {
                    let result = self.store.toggle_complete(id);
                    self.record_save(result);
                    self.refresh();
                }
            }
            KeyCode::Char('f') => {
                self.filter = self.filter.next();
                self.refresh();
            }
            KeyCode::Enter => {
                if self.selected_id().is_some() {
                    self.mode = ViewMode::Detail;
                    // The cursor belongs to this item's checklist only.
                    self.selected_sub = 0;
                }
            }
            KeyCode::Up | KeyCode::Char('k') => self.select_previous_row(),
            KeyCode::Down | KeyCode::Char('j') => self.select_next_row(),
            _ => {}
        }
        None
    }

    fn handle_detail_key(&mut self, key: KeyEvent) -> Option<AppResult<()>> {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Enter => {
                self.mode = ViewMode::Table;
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id() {
                    let result = self.store.delete(id);
                    self.record_save(result);
                    self.refresh();
                }
                self.mode = ViewMode::Table;
            }
            KeyCode::Char(' ') => {
                let Some(todo) = self.selected_todo() else {
                    return None;
                };
                let id = todo.id;
                if todo.sub_todos.is_empty() {
                    // No checklist: space toggles the whole item.
                    let result = self.store.toggle_complete(id);
                    self.record_save(result);
                } else {
                    // Detail-view sub-task toggles are durable immediately.
                    self.store.toggle_subtodo(id, self.selected_sub);
                    let result = self.store.persist();
                    self.record_save(result);
                }
                self.refresh();
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_sub = self.selected_sub.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let len = self.selected_todo().map_or(0, |todo| todo.sub_todos.len());
                if len > 0 {
                    self.selected_sub = (self.selected_sub + 1).min(len - 1);
                }
            }
            _ => {}
        }
        None
    }

    fn handle_form_key(&mut self, key: KeyEvent) -> Option<AppResult<()>> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.commit_form();
            return None;
        }

        match key.code {
            KeyCode::Esc => self.close_form(),
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Field::Title => Field::Description,
                    Field::Description => Field::Title,
                };
            }
            _ => {
                match self.focus {
                    Field::Title => {
                        self.title_input.handle_key(key);
                    }
                    Field::Description => {
                        self.desc_input.handle_key(key);
                    }
                };
            }
        }
        None
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Column widths for the table, adapted to the terminal width with the
    /// same minimums the layout was designed around.
    fn column_widths(width: u16) -> [Constraint; 4] {
        let available = width.saturating_sub(16).max(40);
        let remaining = available.saturating_sub(UI_COL_ID_WIDTH + UI_COL_DONE_WIDTH);
        let title = (remaining / 3).max(UI_MIN_TITLE_WIDTH);
        let desc = remaining.saturating_sub(title).max(UI_MIN_DESC_WIDTH);
        [
            Constraint::Length(UI_COL_ID_WIDTH),
            Constraint::Length(title),
            Constraint::Length(desc),
            Constraint::Length(UI_COL_DONE_WIDTH),
        ]
    }

    fn render_table_view(&mut self, frame: &mut Frame) {
        let chunks = Layout::vertical([
            Constraint::Min(3),    // Table
            Constraint::Length(1), // Filter status
            Constraint::Length(1), // Help
            Constraint::Length(1), // Save errors
        ])
        .split(frame.area());

        if self.store.is_empty() {
            let empty = Paragraph::new("No todos yet! Press 'a' to add your first todo.")
                .style(Style::default().fg(Color::DarkGray))
                .centered()
                .block(Block::default().borders(Borders::ALL));
            frame.render_widget(empty, chunks[0]);
        } else {
            let rows: Vec<Row> = self
                .visible_ids
                .iter()
                .filter_map(|id| self.store.get(*id))
                .map(|todo| {
                    let mut desc = todo.description.replace('\n', " ");
                    if let Some((done, total)) = todo.sub_progress() {
                        if !desc.is_empty() {
                            desc.push(' ');
                        }
                        desc.push_str(&format!("({done}/{total} done)"));
                    }
                    Row::new(vec![
                        todo.id.to_string(),
                        todo.title.clone(),
                        desc,
                        todo.checkbox().to_string(),
                    ])
                })
                .collect();

            let header = Row::new(vec!["ID", "Title", "Description", "Done"])
                .style(Style::default().add_modifier(Modifier::BOLD))
                .bottom_margin(1);

            let table = Table::new(rows, Self::column_widths(frame.area().width))
                .header(header)
                .block(Block::default().borders(Borders::ALL))
                .row_highlight_style(
                    Style::default()
                        .bg(Color::Indexed(57))
                        .fg(Color::Indexed(229)),
                );

            frame.render_stateful_widget(table, chunks[0], &mut self.table_state);
        }

        let filter = Paragraph::new(format!("Filter: {}", self.filter.label()))
            .style(Style::default().fg(Color::Indexed(62)))
            .centered();
        frame.render_widget(filter, chunks[1]);

        let help = Paragraph::new(
            "[a] add  [e] edit  [d] delete  [space] toggle  [f] filter  [enter] details  [q] quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .centered();
        frame.render_widget(help, chunks[2]);

        if let Some(error) = &self.save_error {
            let status = Paragraph::new(format!("save failed: {error}"))
                .style(Style::default().fg(Color::Red))
                .centered();
            frame.render_widget(status, chunks[3]);
        }
    }

    fn render_detail_view(&self, frame: &mut Frame) {
        let area = frame.area();
        let Some(todo) = self.selected_todo() else {
            frame.render_widget(Paragraph::new("No todo selected"), area);
            return;
        };

        let mut lines: Vec<Line> = vec![
            Line::from(Span::styled(
                todo.title.clone(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(format!(
                "Status: {}",
                if todo.completed { "Completed" } else { "Incomplete" }
            )),
            Line::default(),
        ];

        if !todo.description.is_empty() {
            lines.push(Line::from("Description:"));
            for text in todo.description.lines() {
                lines.push(Line::from(text.to_string()));
            }
            lines.push(Line::default());
        }

        if let Some(created) = todo.created_at {
            lines.push(Line::from(format!("Created: {}", format_local(created))));
        }
        if let Some(completed) = todo.completed_at {
            lines.push(Line::from(format!(
                "Completed: {}",
                format_local(completed)
            )));
        }

        if !todo.sub_todos.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from("Sub-Todos:"));
            for (index, sub) in todo.sub_todos.iter().enumerate() {
                let text = format!("  {} {}", sub.checkbox(), sub.title);
                let style = if index == self.selected_sub {
                    Style::default()
                        .bg(Color::Indexed(57))
                        .fg(Color::Indexed(229))
                } else {
                    Style::default()
                };
                lines.push(Line::from(Span::styled(text, style)));
            }
        }

        lines.push(Line::default());
        let help = if todo.sub_todos.is_empty() {
            "[enter/esc] back  [space] toggle  [d] delete"
        } else {
            "[enter/esc] back  [space] toggle sub  [up/down] navigate  [d] delete"
        };
        lines.push(Line::from(Span::styled(
            help,
            Style::default().fg(Color::DarkGray),
        )));

        let width = popup_width(area, todo.title.width());
        let height = (lines.len() as u16 + 2).min(area.height);
        let popup = centered_rect(width, height, area);

        Clear.render(popup, frame.buffer_mut());
        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(Color::Indexed(62))),
        );
        frame.render_widget(paragraph, popup);
    }

    fn render_form_view(&mut self, frame: &mut Frame) {
        let area = frame.area();
        let width = popup_width(area, 0);
        let height = area.height.saturating_sub(4).max(14).min(area.height);
        let popup = centered_rect(width, height, area);

        Clear.render(popup, frame.buffer_mut());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Indexed(62)))
            .title(if self.mode == ViewMode::Edit {
                " Edit Todo "
            } else {
                " Add Todo "
            });
        let inner = block.inner(popup);
        block.render(popup, frame.buffer_mut());

        let chunks = Layout::vertical([
            Constraint::Length(3), // Title input
            Constraint::Min(4),    // Description input
            Constraint::Length(1), // Sub-task hint
            Constraint::Length(1), // Help
        ])
        .split(inner);

        self.title_input
            .render(chunks[0], frame.buffer_mut(), self.focus == Field::Title);
        self.desc_input
            .render(chunks[1], frame, self.focus == Field::Description);

        let hint = Paragraph::new("(Use '- ' at start of line for sub-todos)")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(hint, chunks[2]);

        let help = Paragraph::new("[ctrl+s] save  [tab] switch field  [esc] cancel")
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(help, chunks[3]);
    }
}

impl TuiApp for TodoApp<'_> {
    type Output = ();

    fn handle_event(&mut self, event: &TuiEvent) -> Option<AppResult<Self::Output>> {
        match event {
            TuiEvent::Key(key) => {
                // Ctrl+C aborts from any mode; 'q' in the table view is the
                // ordinary exit.
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    && key.code == KeyCode::Char('c')
                {
                    return Some(AppResult::Cancelled);
                }
                match self.mode {
                    ViewMode::Table => self.handle_table_key(*key),
                    ViewMode::Detail => self.handle_detail_key(*key),
                    ViewMode::Add | ViewMode::Edit => self.handle_form_key(*key),
                }
            }
            TuiEvent::Paste(content) => {
                if matches!(self.mode, ViewMode::Add | ViewMode::Edit) {
                    match self.focus {
                        Field::Title => self.title_input.insert_text(content),
                        Field::Description => self.desc_input.insert_text(content),
                    }
                }
                None
            }
            // Layout is recomputed from the frame on every draw.
            TuiEvent::Resize(..) => None,
        }
    }

    fn render(&mut self, frame: &mut Frame) {
        match self.mode {
            ViewMode::Table => self.render_table_view(frame),
            ViewMode::Detail => self.render_detail_view(frame),
            ViewMode::Add | ViewMode::Edit => self.render_form_view(frame),
        }
    }
}

/// Popup width: terminal width minus margins, clamped, widened if needed to
/// fit `content_width` columns of text.
#[allow(clippy::cast_possible_truncation)]
fn popup_width(area: Rect, content_width: usize) -> u16 {
    area.width
        .saturating_sub(20)
        .clamp(UI_MIN_POPUP_WIDTH, UI_MAX_POPUP_WIDTH)
        .max((content_width as u16 + 4).min(area.width))
}

/// Calculate a centered rectangle within the given area.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
