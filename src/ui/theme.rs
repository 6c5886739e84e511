//! Color theme constants for the Charmbooks UI.

use ratatui::style::Color;

use crate::models::ColorTag;

/// Primary border color.
pub const COLOR_BORDER: Color = Color::DarkGray;

/// Accent color for highlights and the active tab.
pub const COLOR_ACCENT: Color = Color::White;

/// Header / title text.
pub const COLOR_HEADER: Color = Color::White;

/// Dim text for hints and secondary info.
pub const COLOR_DIM: Color = Color::DarkGray;

/// Focused element borders.
pub const COLOR_FOCUS: Color = Color::LightGreen;

/// Error / destructive accents.
pub const COLOR_ERROR: Color = Color::Red;

/// Terminal color for a charm color tag.
///
/// The ten known names map to fixed RGB values; unknown tags fall
/// through to the terminal default. The tag itself still travels
/// verbatim in the view model; rendering never validates it.
pub fn charm_color(tag: &ColorTag) -> Color {
    match tag {
        ColorTag::Red => Color::Rgb(224, 49, 49),
        ColorTag::Green => Color::Rgb(47, 158, 68),
        ColorTag::Blue => Color::Rgb(25, 113, 194),
        ColorTag::Yellow => Color::Rgb(250, 204, 21),
        ColorTag::Purple => Color::Rgb(112, 72, 232),
        ColorTag::Pink => Color::Rgb(214, 51, 108),
        ColorTag::Gold => Color::Rgb(212, 175, 55),
        ColorTag::Black => Color::Rgb(73, 73, 80),
        ColorTag::Orange => Color::Rgb(232, 89, 12),
        ColorTag::Darkgray => Color::Rgb(110, 117, 124),
        ColorTag::Other(_) => Color::Reset,
    }
}
