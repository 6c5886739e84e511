//! Small shared rendering helpers.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::widgets::InputField;

use super::theme::{COLOR_BORDER, COLOR_DIM, COLOR_FOCUS, COLOR_HEADER};

/// A rect of at most `width` x `height`, centered inside `area`.
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render a bordered single-line input field. Places the terminal cursor
/// inside the field when focused; masks the content when `masked`.
pub fn render_input_field(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    field: &InputField,
    focused: bool,
    masked: bool,
) {
    let border = if focused { COLOR_FOCUS } else { COLOR_BORDER };
    let text = if masked {
        field.masked()
    } else {
        field.content().to_string()
    };
    let widget = Paragraph::new(text).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border))
            .title(Span::styled(
                format!(" {title} "),
                Style::default().fg(if focused { COLOR_HEADER } else { COLOR_DIM }),
            )),
    );
    frame.render_widget(widget, area);

    if focused {
        let inner_width = area.width.saturating_sub(2);
        let offset = (field.width_before_cursor() as u16).min(inner_width.saturating_sub(1));
        frame.set_cursor_position((area.x + 1 + offset, area.y + 1));
    }
}

/// A dim one-line hint paragraph.
pub fn hint_line(text: &str) -> Paragraph<'_> {
    Paragraph::new(Span::styled(text, Style::default().fg(COLOR_DIM)))
}

/// Style for a dialog title span.
pub fn dialog_title_style() -> Style {
    Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD)
}
