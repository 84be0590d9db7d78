//! Screen geometry shared by rendering and mouse hit-testing
//!
//! ```text
//! Rows 0-2:  Title banner (3 rows with borders)
//! Row 3:     Form block top border
//! Row 4+:    Form rows, FORM_ROW_HEIGHT each (six inputs, then the button),
//!            warning line, help line
//! Bottom:    Status bar (1 row)
//! ```
//!
//! On a short terminal the layout solver shrinks the form rows, so hit-testing
//! always goes through the same split the renderer uses.

use super::forms::SUBMIT_ROW;
use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};
use std::rc::Rc;

/// Height of the title banner (with borders: top + content + bottom)
pub const HEADER_HEIGHT: u16 = 3;

/// Height of every form row (bordered single-line box)
pub const FORM_ROW_HEIGHT: u16 = 3;

/// Index of the warning line in `ScreenLayout::form_rows`
pub const WARNING_ROW: usize = SUBMIT_ROW + 1;

/// Index of the help line in `ScreenLayout::form_rows`
pub const HELP_ROW: usize = SUBMIT_ROW + 2;

/// Top-level split of the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub form: Rect,
    pub status: Rect,
}

impl ScreenLayout {
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT), // Banner
                Constraint::Min(0),                // Form
                Constraint::Length(1),             // Status bar
            ])
            .split(area);

        Self {
            header: chunks[0],
            form: chunks[1],
            status: chunks[2],
        }
    }

    /// Rows inside the form block: one per input, the submit button, then
    /// the warning and help lines
    pub fn form_rows(&self) -> Rc<[Rect]> {
        let mut constraints: Vec<Constraint> = (0..=SUBMIT_ROW)
            .map(|_| Constraint::Length(FORM_ROW_HEIGHT))
            .collect();
        constraints.extend([
            Constraint::Length(1), // Warning
            Constraint::Length(1), // Help text
            Constraint::Min(0),
        ]);

        Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .margin(1)
            .split(self.form)
    }

    /// Focusable form row (input or submit button) under a screen cell, if any
    pub fn form_row_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.form_rows()
            .iter()
            .take(SUBMIT_ROW + 1)
            .position(|rect| rect.contains(position))
    }
}
