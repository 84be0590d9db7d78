//! Profile form rendering

use super::field_renderer::{draw_checkbox_field, draw_field};
use crate::app::App;
use crate::state::{FieldName, ScreenLayout, HELP_ROW, SUBMIT_ROW, WARNING_ROW};
use crate::ui::components::render_button;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Label of the submit button
pub const SUBMIT_LABEL: &str = "Gerar PDF";

/// Reminder shown under the button
pub const WARNING_TEXT: &str = "Importante! Preencha todos os campos";

/// Draw the profile form into the rows computed by `ScreenLayout::form_rows`
pub fn draw_profile_form(frame: &mut Frame, screen: &ScreenLayout, app: &App) {
    let form = &app.state.form;
    let chunks = screen.form_rows();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, screen.form);

    for (index, name) in FieldName::ALL.iter().enumerate() {
        let field = form.field(*name);
        let is_active = form.active_field_index == index;
        if field.is_toggle() {
            draw_checkbox_field(frame, chunks[index], field, is_active);
        } else {
            draw_field(frame, chunks[index], field, is_active);
        }
    }

    let button_area = Rect {
        width: chunks[SUBMIT_ROW].width.min(SUBMIT_LABEL.len() as u16 + 4),
        ..chunks[SUBMIT_ROW]
    };
    render_button(
        frame,
        button_area,
        SUBMIT_LABEL,
        form.is_submit_row_active(),
        app.state.gate().is_open(),
    );

    let warning = Paragraph::new(WARNING_TEXT)
        .style(Style::default().fg(Color::Red))
        .alignment(Alignment::Center);
    frame.render_widget(warning, chunks[WARNING_ROW]);

    let help_spans = if form.is_terms_active() {
        vec![
            Span::styled("Space", Style::default().fg(Color::Cyan)),
            Span::raw(": marcar  "),
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": próximo campo  "),
            Span::styled(
                crate::platform::SUBMIT_SHORTCUT,
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(": gerar PDF"),
        ]
    } else {
        vec![
            Span::styled("Tab", Style::default().fg(Color::Cyan)),
            Span::raw(": próximo campo  "),
            Span::styled(
                crate::platform::SUBMIT_SHORTCUT,
                Style::default().fg(Color::Cyan),
            ),
            Span::raw(": gerar PDF  "),
            Span::styled("Esc", Style::default().fg(Color::Cyan)),
            Span::raw(": sair"),
        ]
    };

    let help = Paragraph::new(Line::from(help_spans)).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(help, chunks[HELP_ROW]);
}
