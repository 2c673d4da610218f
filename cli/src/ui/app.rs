//! Application State and Logic
//!
//! This module defines the terminal front end's state and input handling. It
//! manages:
//!
//! - The `CourseListModel` holding every course entry
//! - Which course row and which column currently has focus
//! - Turning key presses into model operations
//! - A one-line status message for refused operations
//!
//! The `App` struct is the central state container, and `run_app` is the
//! main event loop that processes user input and redraws the UI.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use gpa_core::{CourseId, CourseListModel, Field, Grade, ModelError};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::Stdout;
use std::time::Duration;
use tracing::{debug, info};

pub type AppResult<T> = Result<T>;

/// Focusable columns of a course row, left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Name,
    CreditHours,
    Grade,
    Remove,
}

impl Column {
    pub fn all() -> Vec<Column> {
        vec![Column::Name, Column::CreditHours, Column::Grade, Column::Remove]
    }

    pub fn title(&self) -> &'static str {
        match self {
            Column::Name => Field::Name.label(),
            Column::CreditHours => Field::CreditHours.label(),
            Column::Grade => Field::Grade.label(),
            Column::Remove => "Remove",
        }
    }

    /// The model field behind this column, if it edits one.
    pub fn field(&self) -> Option<Field> {
        match self {
            Column::Name => Some(Field::Name),
            Column::CreditHours => Some(Field::CreditHours),
            Column::Grade => Some(Field::Grade),
            Column::Remove => None,
        }
    }

    /// Columns that take typed characters.
    pub fn is_text(&self) -> bool {
        matches!(self, Column::Name | Column::CreditHours)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

pub struct App {
    pub model: CourseListModel,
    pub running: bool,

    // Focus
    pub selected_row: usize,
    pub selected_column: Column,

    // Status
    pub status_message: Option<String>,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    pub fn new() -> Self {
        Self {
            model: CourseListModel::new(),
            running: true,
            selected_row: 0,
            selected_column: Column::Name,
            status_message: None,
        }
    }

    /// An app whose list starts with `count` blank courses.
    pub fn with_courses(count: usize) -> Self {
        let mut app = Self::new();
        while app.model.len() < count && app.model.add_course().is_ok() {}
        app
    }

    pub fn selected_course_id(&self) -> Option<CourseId> {
        self.model.courses().get(self.selected_row).map(|c| c.id())
    }

    // Row / column navigation

    pub fn select_next(&mut self) {
        let len = self.model.len();
        if len > 0 {
            self.selected_row = (self.selected_row + 1) % len;
        }
    }

    pub fn select_prev(&mut self) {
        let len = self.model.len();
        if len > 0 {
            self.selected_row = if self.selected_row == 0 {
                len - 1
            } else {
                self.selected_row - 1
            };
        }
    }

    pub fn select_first(&mut self) {
        self.selected_row = 0;
    }

    pub fn select_last(&mut self) {
        self.selected_row = self.model.len().saturating_sub(1);
    }

    /// Moves focus right, wrapping onto the next row.
    pub fn next_column(&mut self) {
        let columns = Column::all();
        let index = self.selected_column.index();
        if index + 1 < columns.len() {
            self.selected_column = columns[index + 1];
        } else {
            self.selected_column = columns[0];
            self.select_next();
        }
    }

    /// Moves focus left, wrapping onto the previous row.
    pub fn prev_column(&mut self) {
        let columns = Column::all();
        let index = self.selected_column.index();
        if index > 0 {
            self.selected_column = columns[index - 1];
        } else {
            self.selected_column = columns[columns.len() - 1];
            self.select_prev();
        }
    }

    // Editing

    pub fn handle_char(&mut self, c: char) {
        if self.selected_column == Column::Grade && c == ' ' {
            self.cycle_grade(true);
            return;
        }
        if !self.selected_column.is_text() {
            return;
        }
        self.edit_selected(|value| value.push(c));
    }

    pub fn handle_backspace(&mut self) {
        if self.selected_column.is_text() {
            self.edit_selected(|value| {
                value.pop();
            });
        } else if self.selected_column == Column::Grade {
            self.set_selected(Field::Grade, String::new());
        }
    }

    /// Steps the focused course's grade through "unselected" and the table.
    pub fn cycle_grade(&mut self, forward: bool) {
        let Some(id) = self.selected_course_id() else {
            return;
        };
        let current = self
            .model
            .course(id)
            .and_then(|c| c.grade().parse::<Grade>().ok())
            .map(|g| g.index() + 1)
            .unwrap_or(0);

        // Slot 0 is the unselected state.
        let slots = Grade::ALL.len() + 1;
        let next = if forward {
            (current + 1) % slots
        } else {
            (current + slots - 1) % slots
        };
        let value = match next {
            0 => String::new(),
            n => Grade::ALL[n - 1].as_str().to_string(),
        };
        self.set_selected(Field::Grade, value);
    }

    fn edit_selected(&mut self, edit: impl FnOnce(&mut String)) {
        let (Some(id), Some(field)) = (self.selected_course_id(), self.selected_column.field())
        else {
            return;
        };
        let Some(course) = self.model.course(id) else {
            return;
        };
        let mut value = course.value(field).to_string();
        edit(&mut value);
        self.set_selected(field, value);
    }

    fn set_selected(&mut self, field: Field, value: String) {
        let Some(id) = self.selected_course_id() else {
            return;
        };
        let result = self.model.update_field(id, field, value).map(|_| ());
        self.report(result);
    }

    // List operations

    pub fn add_course(&mut self) {
        match self.model.add_course() {
            Ok(id) => {
                self.selected_row = self.model.position(id).unwrap_or(self.selected_row);
                self.selected_column = Column::Name;
                self.status_message = None;
            }
            Err(e) => self.report(Err(e)),
        }
    }

    pub fn remove_selected(&mut self) {
        let Some(id) = self.selected_course_id() else {
            return;
        };
        let result = self.model.remove_course(id).map(|_| ());
        if result.is_ok() && self.selected_row >= self.model.len() {
            self.select_last();
        }
        self.report(result);
    }

    fn report(&mut self, result: Result<(), ModelError>) {
        match result {
            Ok(()) => self.status_message = None,
            Err(e) => {
                debug!(error = %e, "operation refused");
                self.status_message = Some(e.to_string());
            }
        }
    }

    /// Applies one key press to the app.
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.running = false,
                KeyCode::Char('n') => self.add_course(),
                KeyCode::Char('d') => self.remove_selected(),
                _ => {}
            }
            return;
        }

        match key.code {
            KeyCode::Esc => {
                self.running = false;
            }
            // Row navigation
            KeyCode::Down => self.select_next(),
            KeyCode::Up => self.select_prev(),
            KeyCode::Home => self.select_first(),
            KeyCode::End => self.select_last(),
            // Column navigation
            KeyCode::Tab => self.next_column(),
            KeyCode::BackTab => self.prev_column(),
            // On the grade column the arrows act as a picker
            KeyCode::Right if self.selected_column == Column::Grade => self.cycle_grade(true),
            KeyCode::Left if self.selected_column == Column::Grade => self.cycle_grade(false),
            KeyCode::Right => self.next_column(),
            KeyCode::Left => self.prev_column(),
            KeyCode::Enter => {
                if self.selected_column == Column::Remove {
                    self.remove_selected();
                } else {
                    self.next_column();
                }
            }
            KeyCode::Delete if self.selected_column == Column::Remove => {
                self.remove_selected();
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                self.handle_char(c);
            }
            KeyCode::Backspace => {
                self.handle_backspace();
            }
            _ => {}
        }
    }
}

pub fn run_app(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    mut app: App,
    tick_rate: Duration,
) -> AppResult<()> {
    info!(courses = app.model.len(), "event loop started");

    loop {
        terminal.draw(|f| super::views::draw(f, &mut app))?;

        if event::poll(tick_rate)? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        if !app.running {
            info!(
                courses = app.model.len(),
                gpa = app.model.gpa(),
                "event loop stopped"
            );
            return Ok(());
        }
    }
}

#[cfg(test)]
#[path = "tests/app_tests.rs"]
mod tests;
