//! Modal dialog rendering: new-book prompt, charm editor, delete
//! confirmations, and the blocking notice.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{App, CharmField, CharmForm, Dialog};
use crate::widgets::InputField;

use super::helpers::{centered_rect, dialog_title_style, hint_line, render_input_field};
use super::theme::{charm_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR};

pub fn render(frame: &mut Frame, app: &App) {
    if let Some(dialog) = &app.dialog {
        match dialog {
            Dialog::NewBook(title) => render_new_book(frame, title),
            Dialog::CharmEditor(form) => render_charm_editor(frame, form),
            Dialog::ConfirmDeleteCharm { title, .. } => {
                render_confirm(frame, " Delete charm ", &format!("Delete charm \"{title}\"?"))
            }
            Dialog::ConfirmDeleteBook { title, .. } => render_confirm(
                frame,
                " Delete book ",
                &format!("Delete book \"{title}\" and all of its charms?"),
            ),
        }
    }

    // The notice overlays everything, including open dialogs.
    if let Some(notice) = &app.notice {
        render_notice(frame, notice);
    }
}

fn dialog_block(title: &str, border: Color) -> Block<'_> {
    Block::default()
        .title(Span::styled(title, dialog_title_style()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(border))
}

fn render_new_book(frame: &mut Frame, title: &InputField) {
    let area = centered_rect(44, 6, frame.area());
    frame.render_widget(Clear, area);
    let block = dialog_block(" New book ", COLOR_BORDER);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Length(1)])
        .split(inner);

    render_input_field(frame, chunks[0], "Title", title, true, false);
    frame.render_widget(
        hint_line("enter create · esc cancel").alignment(Alignment::Center),
        chunks[1],
    );
}

fn render_charm_editor(frame: &mut Frame, form: &CharmForm) {
    let title = if form.existing_id.is_some() {
        " Edit charm "
    } else {
        " New charm "
    };
    let area = centered_rect(48, 14, frame.area());
    frame.render_widget(Clear, area);
    let block = dialog_block(title, COLOR_BORDER);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(inner);

    render_input_field(
        frame,
        chunks[0],
        "Title",
        &form.title,
        form.field == CharmField::Title,
        false,
    );
    render_input_field(
        frame,
        chunks[1],
        "Value",
        &form.value,
        form.field == CharmField::Value,
        false,
    );

    render_selector(
        frame,
        chunks[2],
        "Shape",
        form.shape.as_str(),
        form.field == CharmField::Shape,
        None,
    );
    render_selector(
        frame,
        chunks[3],
        "Color",
        form.color.as_str(),
        form.field == CharmField::Color,
        Some(charm_color(&form.color)),
    );

    frame.render_widget(
        hint_line("tab field · ◂ ▸ choose · enter save · esc cancel").alignment(Alignment::Center),
        chunks[5],
    );
}

/// A `◂ value ▸` row for the shape/color pickers, with an optional
/// color swatch.
fn render_selector(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: &str,
    active: bool,
    swatch: Option<Color>,
) {
    let label_style = Style::default().fg(if active { COLOR_ACCENT } else { COLOR_DIM });
    let mut spans = vec![
        Span::styled(format!(" {label:<6}"), label_style),
        Span::styled(if active { "◂ " } else { "  " }, label_style),
    ];
    if let Some(color) = swatch {
        spans.push(Span::styled("■ ", Style::default().fg(color)));
    }
    spans.push(Span::styled(value.to_string(), label_style));
    spans.push(Span::styled(if active { " ▸" } else { "" }, label_style));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_confirm(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(46, 6, frame.area());
    frame.render_widget(Clear, area);
    let block = dialog_block(title, COLOR_ERROR);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let body = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, chunks[0]);
    frame.render_widget(
        hint_line("y delete · n cancel").alignment(Alignment::Center),
        chunks[1],
    );
}

/// Blocking notice used for auth failures; any key dismisses it.
fn render_notice(frame: &mut Frame, message: &str) {
    let area = centered_rect(46, 7, frame.area());
    frame.render_widget(Clear, area);
    let block = dialog_block(" Notice ", COLOR_ERROR);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let body = Paragraph::new(message.to_string())
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(body, chunks[0]);
    frame.render_widget(
        hint_line("press any key").alignment(Alignment::Center),
        chunks[1],
    );
}
