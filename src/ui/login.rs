//! Login panel rendering.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::app::{App, LoginField};

use super::helpers::{centered_rect, hint_line, render_input_field};
use super::theme::{COLOR_BORDER, COLOR_HEADER};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let panel = centered_rect(46, 12, area);

    let block = Block::default()
        .title(Span::styled(" Charmbooks ", Style::default().fg(COLOR_HEADER)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(panel);
    frame.render_widget(block, panel);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    let welcome = Paragraph::new("Sign in to your books").alignment(Alignment::Center);
    frame.render_widget(welcome, chunks[0]);

    render_input_field(
        frame,
        inset(chunks[1]),
        "Email",
        &app.login_form.email,
        app.login_form.field == LoginField::Email,
        false,
    );
    render_input_field(
        frame,
        inset(chunks[2]),
        "Passcode",
        &app.login_form.passcode,
        app.login_form.field == LoginField::Passcode,
        true,
    );

    frame.render_widget(
        hint_line("enter login · ctrl+r register · ctrl+c quit").alignment(Alignment::Center),
        chunks[4],
    );
}

fn inset(area: Rect) -> Rect {
    Rect {
        x: area.x + 1,
        width: area.width.saturating_sub(2),
        ..area
    }
}
