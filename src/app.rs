//! Application state and core logic

use crate::config::ProfileConfig;
use crate::error::{ProfileError, Result as ProfileResult};
use crate::export::DocumentWriter;
use crate::profile::{age_on, compose};
use crate::state::{AppState, FieldName, Form, ProfileForm, ScreenLayout};
use chrono::{Local, NaiveDate};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;
use std::path::PathBuf;

/// Title of the dialog shown after a successful export
pub const NOTICE_TITLE: &str = "PDF Gerado";

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Serializes the declaration on submit
    writer: Box<dyn DocumentWriter>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App exporting through the configured PDF writer
    pub fn new(config: &ProfileConfig) -> Self {
        let writer = config.pdf_writer();
        tracing::info!(
            "Declarations will be saved to {}",
            writer.target_path().display()
        );
        Self::with_writer(Box::new(writer))
    }

    pub fn with_writer(writer: Box<dyn DocumentWriter>) -> Self {
        Self {
            state: AppState::default(),
            writer,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Dialogs are modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }
        if self.state.notice.is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_notice();
            }
            return;
        }

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(crate::platform::SUBMIT_MODIFIER) =>
            {
                self.submit(today());
            }
            KeyCode::Tab | KeyCode::Down => self.state.next_form_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_form_field(),
            KeyCode::Char(' ') | KeyCode::Enter if self.state.form.is_terms_active() => {
                self.state.update_form(ProfileForm::with_terms_toggled);
            }
            KeyCode::Enter if self.state.form.is_submit_row_active() => self.submit(today()),
            KeyCode::Enter => self.state.next_form_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.update_form(|form| form.with_char(c));
            }
            KeyCode::Backspace => self.state.update_form(ProfileForm::with_backspace),
            _ => {}
        }
    }

    /// Handle a mouse event on a terminal of size `screen`: a left click
    /// focuses the form row under the cursor
    pub fn handle_mouse(&mut self, mouse: MouseEvent, screen: Rect) {
        if self.state.has_modal() {
            return;
        }
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if let Some(index) = ScreenLayout::new(screen).form_row_at(mouse.column, mouse.row) {
                self.state.form.set_active_field(index);
            }
        }
    }

    /// Run the submit pipeline with `today` as the reference date for the age.
    ///
    /// An incomplete form is rejected with a single notification and nothing
    /// is exported. On success the form is discarded.
    pub fn submit(&mut self, today: NaiveDate) {
        if !self.state.form.is_valid() {
            let missing: Vec<&str> = self
                .state
                .form
                .missing_fields()
                .into_iter()
                .map(FieldName::key)
                .collect();
            tracing::warn!("Submission rejected, missing: {}", missing.join(", "));
            self.push_error(ProfileError::Incomplete.to_string());
            return;
        }

        match self.export(today) {
            Ok(path) => {
                tracing::info!("Profile exported to {}", path.display());
                self.state.notice = Some(format!("Arquivo salvo em {}", path.display()));
                self.state.reset_form();
            }
            Err(e) => {
                tracing::error!("Export failed: {e}");
                self.push_error(e.to_string());
            }
        }
    }

    /// Age, compose and write, attempted once
    fn export(&self, today: NaiveDate) -> ProfileResult<PathBuf> {
        let fields = self.state.form.fields();
        let age = age_on(&fields.birth_date, today)?;
        let document = compose(&fields, age);
        self.writer.write(&document)
    }
}

/// Reference date for age computation
fn today() -> NaiveDate {
    Local::now().date_naive()
}
