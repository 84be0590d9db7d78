//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::{App, NOTICE_TITLE};
use crate::state::ScreenLayout;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let screen = ScreenLayout::new(frame.area());

    layout::draw_header(frame, screen.header);
    forms::draw_profile_form(frame, &screen, app);
    layout::draw_status_bar(frame, screen.status, app);

    // Dialogs are drawn last so they overlay the form
    if let Some(error) = app.state.current_error() {
        components::render_error_dialog(frame, error);
    } else if let Some(notice) = &app.state.notice {
        components::render_notice_dialog(frame, NOTICE_TITLE, notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::MockDocumentWriter;
    use crate::state::{FieldName, FieldValue};
    use crossterm::event::{KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
    use ratatui::{backend::TestBackend, layout::Rect, Terminal};

    /// Rendered screen, one string per terminal row
    fn render_rows(app: &App, width: u16, height: u16) -> Vec<String> {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .chunks(width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect())
            .collect()
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        render_rows(app, width, height).concat()
    }

    fn app() -> App {
        App::with_writer(Box::new(MockDocumentWriter::new()))
    }

    #[test]
    fn test_renders_form_labels() {
        let screen = render(&app(), 80, 32);
        assert!(screen.contains(layout::TITLE));
        for name in FieldName::ALL.iter().filter(|n| **n != FieldName::TermsAccepted) {
            assert!(screen.contains(name.label()), "missing {}", name.label());
        }
        assert!(screen.contains("[ ] Aceito os termos"));
        assert!(screen.contains(forms::SUBMIT_LABEL));
        assert!(screen.contains(forms::WARNING_TEXT));
        assert!(screen.contains("Incompleto"));
    }

    #[test]
    fn test_renders_typed_values() {
        let mut app = app();
        app.state.update_form(|form| {
            form.set_field(FieldName::Email, FieldValue::Text("a@b.com".into()))
                .set_field(FieldName::TermsAccepted, FieldValue::Toggle(true))
        });
        let screen = render(&app, 80, 32);
        assert!(screen.contains("a@b.com"));
        assert!(screen.contains("[x] Aceito os termos"));
    }

    #[test]
    fn test_renders_error_dialog() {
        let mut app = app();
        app.push_error("Falhou");
        let screen = render(&app, 80, 32);
        assert!(screen.contains("Erro"));
        assert!(screen.contains("Falhou"));
    }

    #[test]
    fn test_renders_notice_dialog() {
        let mut app = app();
        app.state.notice = Some("Arquivo salvo".to_string());
        let screen = render(&app, 80, 32);
        assert!(screen.contains(NOTICE_TITLE));
        assert!(screen.contains("Arquivo salvo"));
    }

    #[test]
    fn test_click_on_rendered_label_focuses_that_field() {
        for height in [32, 28] {
            let mut app = app();
            let rows = render_rows(&app, 80, height);
            let label_row = rows
                .iter()
                .position(|row| row.contains("Data de Nascimento"))
                .unwrap_or_else(|| panic!("birth date label not rendered at height {height}"));

            app.handle_mouse(
                MouseEvent {
                    kind: MouseEventKind::Down(MouseButton::Left),
                    column: 10,
                    row: label_row as u16,
                    modifiers: KeyModifiers::NONE,
                },
                Rect::new(0, 0, 80, height),
            );

            assert_eq!(app.state.form.active_field_index, 3, "height {height}");
        }
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let mut app = app();
        app.push_error("Por favor, preencha todos os campos e aceite os termos.");
        render(&app, 10, 4);
    }
}
