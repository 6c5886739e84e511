//! Pure charm-to-view-model construction.
//!
//! The grid renderer consumes plain data built here, keeping glyph and
//! tooltip construction unit-testable without a terminal.

use crate::glyph::{self, Outline};
use crate::models::Charm;

/// Plain-data description of one charm card.
#[derive(Debug, Clone, PartialEq)]
pub struct CharmViewModel {
    pub id: String,
    pub title: String,
    /// CSS-class-like color tag, carried verbatim (e.g. `color-gold`).
    pub color_class: String,
    pub outline: Outline,
    /// The hidden value plus the copy hint.
    pub tooltip: String,
}

pub fn charm_view_model(charm: &Charm) -> CharmViewModel {
    CharmViewModel {
        id: charm.id.clone(),
        title: charm.title.clone(),
        color_class: format!("color-{}", charm.color.as_str()),
        outline: glyph::outline(&charm.shape),
        tooltip: format!("{}\n(enter to copy)", charm.text_value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glyph::FALLBACK_ID;
    use crate::models::{ColorTag, Shape};
    use chrono::Utc;

    fn charm(shape: Shape, color: ColorTag) -> Charm {
        Charm {
            id: "ch-1".to_string(),
            book_id: "bk-1".to_string(),
            shape,
            color,
            title: "PIN".to_string(),
            text_value: "1234".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_known_shape_maps_to_named_outline() {
        let vm = charm_view_model(&charm(Shape::Star, ColorTag::Gold));
        assert_eq!(vm.outline.id, "star");
        assert_eq!(vm.color_class, "color-gold");
    }

    #[test]
    fn test_unknown_shape_uses_fallback_outline() {
        let vm = charm_view_model(&charm(
            Shape::Other("unknown-shape".to_string()),
            ColorTag::Gold,
        ));
        assert_eq!(vm.outline.id, FALLBACK_ID);
    }

    #[test]
    fn test_unknown_color_class_is_verbatim() {
        let vm = charm_view_model(&charm(Shape::Star, ColorTag::Other("mauve".to_string())));
        assert_eq!(vm.color_class, "color-mauve");
    }

    #[test]
    fn test_tooltip_carries_hidden_value() {
        let vm = charm_view_model(&charm(Shape::Star, ColorTag::Gold));
        assert!(vm.tooltip.starts_with("1234"));
        assert!(vm.tooltip.contains("copy"));
    }
}
