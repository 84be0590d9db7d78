//! Layout components (title banner, status bar)

use crate::app::App;
use crate::state::SubmitGate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Title shown in the banner
pub const TITLE: &str = "Perfil";

/// Banner background
const BANNER_COLOR: Color = Color::Rgb(0x62, 0x00, 0xea);

/// Draw the title banner
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(
            Style::default()
                .fg(Color::White)
                .bg(BANNER_COLOR)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(BANNER_COLOR)),
        );
    frame.render_widget(title, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let gate = app.state.gate();
    let gate_status = match gate {
        SubmitGate::Complete => Span::styled(" ● ", Style::default().fg(Color::Green)),
        SubmitGate::Incomplete => Span::styled(" ○ ", Style::default().fg(Color::Red)),
    };

    let spans = vec![
        gate_status,
        Span::styled(gate.label(), Style::default().fg(Color::White)),
        Span::raw(" | "),
        Span::styled(
            format!(
                "Tab:próximo  ↑/↓:navegar  Space:marcar  {}:gerar",
                crate::platform::SUBMIT_SHORTCUT
            ),
            Style::default().fg(Color::Gray),
        ),
    ];

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " Esc:sair ";
    let quit_width = quit_hint.chars().count() as u16;
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_width),
        y: area.y,
        width: quit_width.min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}
