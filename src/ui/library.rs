//! Library screen: book tabs, book editor panel, charm grid.
//!
//! The tab strip and the grid are rebuilt from store state on every draw;
//! there is no incremental diffing. The active tab is the one whose id
//! equals the selected book's id.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Context, Line as CanvasLine},
        Block, BorderType, Borders, Paragraph, Wrap,
    },
    Frame,
};

use crate::app::{App, BookField, Focus};
use crate::glyph::{Outline, VIEWBOX};
use crate::models::{Book, Charm};

use super::helpers::render_input_field;
use super::theme::{
    charm_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER,
};
use super::view_model::charm_view_model;

/// Outer size of one charm card in terminal cells.
pub const CARD_WIDTH: u16 = 18;
pub const CARD_HEIGHT: u16 = 10;

/// Width of the book editor panel.
const BOOK_PANEL_WIDTH: u16 = 40;

/// Charm cards per grid row at the given terminal width. Used by key
/// handling for row-wise cursor movement, so it must match the layout
/// arithmetic below.
pub fn grid_columns(terminal_width: u16) -> usize {
    let grid = terminal_width
        .saturating_sub(BOOK_PANEL_WIDTH)
        .saturating_sub(2);
    (grid / CARD_WIDTH).max(1) as usize
}

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.area());

    render_tabs(frame, chunks[0], app);

    let main = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(BOOK_PANEL_WIDTH), Constraint::Min(0)])
        .split(chunks[1]);

    render_book_panel(frame, main[0], app);
    render_charm_grid(frame, main[1], app);
    render_status_bar(frame, chunks[2], app);
}

/// The tab strip, rebuilt wholesale from the book list.
fn render_tabs(frame: &mut Frame, area: Rect, app: &App) {
    let selected = app.books.selected_id();
    let mut spans = vec![Span::styled(" Charmbooks ", Style::default().fg(COLOR_HEADER))];
    for book in &app.books.books {
        let active = selected == Some(book.id.as_str());
        let style = if active {
            Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(COLOR_DIM)
        };
        spans.push(Span::styled(format!(" {} ", book.title), style));
        spans.push(Span::raw(" "));
    }
    if app.books.books.is_empty() {
        spans.push(Span::styled(
            "no books yet — press n to create one",
            Style::default().fg(COLOR_DIM),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// The book editor panel for the current selection.
fn render_book_panel(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus == Focus::BookForm;
    let block = Block::default()
        .title(Span::styled(
            " Book ",
            Style::default().fg(if focused { COLOR_HEADER } else { COLOR_DIM }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if focused { COLOR_FOCUS } else { COLOR_BORDER }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let Some(book) = &app.books.current else {
        let empty = Paragraph::new("No book selected")
            .style(Style::default().fg(COLOR_DIM))
            .alignment(Alignment::Center);
        frame.render_widget(empty, inner);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(inner);

    render_input_field(
        frame,
        chunks[0],
        "Title",
        &app.book_form.title,
        focused && app.book_form.field == BookField::Title,
        false,
    );
    render_input_field(
        frame,
        chunks[1],
        "Note",
        &app.book_form.note,
        focused && app.book_form.field == BookField::Note,
        false,
    );

    let public_focused = focused && app.book_form.field == BookField::Public;
    let checkbox = if app.book_form.is_public { "[x]" } else { "[ ]" };
    let public = Paragraph::new(Line::from(vec![
        Span::styled(
            format!(" {checkbox} public"),
            Style::default().fg(if public_focused { COLOR_ACCENT } else { COLOR_DIM }),
        ),
        Span::styled(
            if public_focused { "  (space toggles)" } else { "" },
            Style::default().fg(COLOR_DIM),
        ),
    ]));
    frame.render_widget(public, chunks[2]);

    frame.render_widget(timestamp_line("Created", book, true), chunks[3]);
    frame.render_widget(timestamp_line("Last edit", book, false), chunks[4]);

    let link = Paragraph::new(Span::styled(
        format!(" {}", app.api.public_book_url(&book.id)),
        Style::default().fg(COLOR_DIM),
    ))
    .wrap(Wrap { trim: true });
    frame.render_widget(link, chunks[5]);
}

fn timestamp_line<'a>(label: &'a str, book: &Book, created: bool) -> Paragraph<'a> {
    let at = if created {
        book.created_at
    } else {
        book.updated_at
    };
    Paragraph::new(Span::styled(
        format!(" {label}: {}", at.format("%Y-%m-%d %H:%M")),
        Style::default().fg(COLOR_DIM),
    ))
}

/// The charm grid, rebuilt wholesale from the charm list.
fn render_charm_grid(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(Span::styled(
            " Charms ",
            Style::default().fg(if app.focus == Focus::Grid { COLOR_HEADER } else { COLOR_DIM }),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.charms.charms.is_empty() {
        let placeholder = Paragraph::new("No charms yet — press a to add one")
            .style(Style::default().fg(COLOR_DIM))
            .alignment(Alignment::Center);
        let middle = Rect {
            y: inner.y + inner.height / 2,
            height: 1,
            ..inner
        };
        frame.render_widget(placeholder, middle);
        return;
    }

    let cols = ((inner.width / CARD_WIDTH).max(1)) as usize;
    let visible_rows = ((inner.height / CARD_HEIGHT).max(1)) as usize;
    let cursor_row = app.selected_charm / cols;
    let first_row = cursor_row.saturating_sub(visible_rows.saturating_sub(1));

    for (idx, charm) in app.charms.charms.iter().enumerate() {
        let row = idx / cols;
        if row < first_row || row >= first_row + visible_rows {
            continue;
        }
        let col = idx % cols;
        let card = Rect {
            x: inner.x + col as u16 * CARD_WIDTH,
            y: inner.y + (row - first_row) as u16 * CARD_HEIGHT,
            width: CARD_WIDTH.min(inner.width.saturating_sub(col as u16 * CARD_WIDTH)),
            height: CARD_HEIGHT.min(inner.height),
        };
        if card.width < 4 || card.height < 4 {
            continue;
        }
        let selected = app.focus == Focus::Grid && idx == app.selected_charm;
        render_charm_card(frame, card, charm, selected);
    }
}

fn render_charm_card(frame: &mut Frame, area: Rect, charm: &Charm, selected: bool) {
    let vm = charm_view_model(charm);
    let color = charm_color(&charm.color);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(if selected { COLOR_FOCUS } else { COLOR_BORDER }));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let glyph_area = Rect {
        height: inner.height.saturating_sub(1),
        ..inner
    };
    let canvas = Canvas::default()
        .marker(Marker::Braille)
        .x_bounds([0.0, VIEWBOX])
        .y_bounds([0.0, VIEWBOX])
        .paint(|ctx| draw_outline(ctx, &vm.outline, color));
    frame.render_widget(canvas, glyph_area);

    let title_area = Rect {
        y: inner.y + inner.height.saturating_sub(1),
        height: 1,
        ..inner
    };
    let title_style = if selected {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_HEADER)
    };
    let title = Paragraph::new(Span::styled(vm.title, title_style)).alignment(Alignment::Center);
    frame.render_widget(title, title_area);
}

/// Stroke an outline into a canvas context. The viewbox is y-down while
/// the canvas is y-up, so points flip here.
fn draw_outline(ctx: &mut Context, outline: &Outline, color: Color) {
    for path in &outline.paths {
        for pair in path.points.windows(2) {
            draw_segment(ctx, pair[0], pair[1], color);
        }
        if path.closed && path.points.len() > 2 {
            if let (Some(&first), Some(&last)) = (path.points.first(), path.points.last()) {
                draw_segment(ctx, last, first, color);
            }
        }
    }
}

fn draw_segment(ctx: &mut Context, from: (f64, f64), to: (f64, f64), color: Color) {
    ctx.draw(&CanvasLine {
        x1: from.0,
        y1: VIEWBOX - from.1,
        x2: to.0,
        y2: VIEWBOX - to.1,
        color,
    });
}

/// One-line footer: identity on the left, transient status or keybind
/// hints on the right.
fn render_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut id = app.session.user_id.chars().take(8).collect::<String>();
    if !id.is_empty() {
        id.push('…');
    }
    if app.session.dev {
        id.push_str(" (dev)");
    }

    let message = match &app.status {
        Some(status) => Span::styled(status.clone(), Style::default().fg(COLOR_ACCENT)),
        None => Span::styled(
            "[/] book · tab focus · a add · e edit · d delete · enter copy · ^s save · n new book · D del book · L logout · q quit",
            Style::default().fg(COLOR_DIM),
        ),
    };

    let line = Line::from(vec![
        Span::styled(format!(" {id}  "), Style::default().fg(COLOR_DIM)),
        message,
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
