//! Data model for the Charmbooks API.
//!
//! Records mirror the server's JSON wire shapes. Shape and color are
//! closed enumerations with an `Other` variant that preserves unknown
//! strings verbatim, so persisted records round-trip through the client
//! unmodified.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identity reported by the session endpoint.
///
/// `user_id` is the empty string for anonymous sessions; the endpoint
/// answers 200 either way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default)]
    pub user_id: String,
    /// Set when the server runs with auth disabled (dev mode).
    #[serde(default)]
    pub dev: bool,
}

impl Session {
    pub fn is_authenticated(&self) -> bool {
        !self.user_id.is_empty()
    }
}

/// A user-owned container of charms.
///
/// Timestamps are server-assigned and read-only to the client; `owner_id`
/// is reported by the server and never transmitted back.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub id: String,
    #[serde(default)]
    pub owner_id: String,
    pub title: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The writable fields of a book.
#[derive(Debug, Clone, Serialize)]
pub struct BookDraft {
    pub title: String,
    pub note: String,
    pub is_public: bool,
}

impl BookDraft {
    /// Draft for a brand-new book: empty note, private.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            note: String::new(),
            is_public: false,
        }
    }
}

/// A single decorated note. Belongs to exactly one book; `book_id` is set
/// at creation and immutable thereafter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Charm {
    pub id: String,
    pub book_id: String,
    pub shape: Shape,
    pub color: ColorTag,
    pub title: String,
    /// The hidden, copyable payload. May be empty.
    #[serde(default)]
    pub text_value: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The writable fields of a charm.
#[derive(Debug, Clone, Serialize)]
pub struct CharmDraft {
    pub title: String,
    pub text_value: String,
    pub shape: Shape,
    pub color: ColorTag,
}

/// The closed set of charm shapes.
///
/// Unknown names deserialize into `Other` and serialize back verbatim;
/// the glyph renderer maps them to its fallback outline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Shape {
    Square,
    Star,
    Circle,
    Triangle,
    Rectangle,
    Diamond,
    Heart,
    Clover,
    Spade,
    Hexagon,
    Squiggle,
    Other(String),
}

impl Shape {
    /// Every known shape, in the order the charm editor offers them.
    pub const ALL: [Shape; 11] = [
        Shape::Square,
        Shape::Star,
        Shape::Circle,
        Shape::Triangle,
        Shape::Rectangle,
        Shape::Diamond,
        Shape::Heart,
        Shape::Clover,
        Shape::Spade,
        Shape::Hexagon,
        Shape::Squiggle,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Shape::Square => "square",
            Shape::Star => "star",
            Shape::Circle => "circle",
            Shape::Triangle => "triangle",
            Shape::Rectangle => "rectangle",
            Shape::Diamond => "diamond",
            Shape::Heart => "heart",
            Shape::Clover => "clover",
            Shape::Spade => "spade",
            Shape::Hexagon => "hexagon",
            Shape::Squiggle => "squiggle",
            Shape::Other(name) => name,
        }
    }
}

impl From<String> for Shape {
    fn from(s: String) -> Self {
        match s.as_str() {
            "square" => Shape::Square,
            "star" => Shape::Star,
            "circle" => Shape::Circle,
            "triangle" => Shape::Triangle,
            "rectangle" => Shape::Rectangle,
            "diamond" => Shape::Diamond,
            "heart" => Shape::Heart,
            "clover" => Shape::Clover,
            "spade" => Shape::Spade,
            "hexagon" => Shape::Hexagon,
            "squiggle" => Shape::Squiggle,
            _ => Shape::Other(s),
        }
    }
}

impl From<Shape> for String {
    fn from(shape: Shape) -> Self {
        shape.as_str().to_string()
    }
}

/// The closed set of charm colors.
///
/// The client never validates colors: unknown names are carried verbatim
/// in `Other` and applied as-is at render time, with no fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ColorTag {
    Red,
    Green,
    Blue,
    Yellow,
    Purple,
    Pink,
    Gold,
    Black,
    Orange,
    Darkgray,
    Other(String),
}

impl ColorTag {
    /// Every known color, in the order the charm editor offers them.
    pub const ALL: [ColorTag; 10] = [
        ColorTag::Red,
        ColorTag::Green,
        ColorTag::Blue,
        ColorTag::Yellow,
        ColorTag::Purple,
        ColorTag::Pink,
        ColorTag::Gold,
        ColorTag::Black,
        ColorTag::Orange,
        ColorTag::Darkgray,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            ColorTag::Red => "red",
            ColorTag::Green => "green",
            ColorTag::Blue => "blue",
            ColorTag::Yellow => "yellow",
            ColorTag::Purple => "purple",
            ColorTag::Pink => "pink",
            ColorTag::Gold => "gold",
            ColorTag::Black => "black",
            ColorTag::Orange => "orange",
            ColorTag::Darkgray => "darkgray",
            ColorTag::Other(name) => name,
        }
    }
}

impl From<String> for ColorTag {
    fn from(s: String) -> Self {
        match s.as_str() {
            "red" => ColorTag::Red,
            "green" => ColorTag::Green,
            "blue" => ColorTag::Blue,
            "yellow" => ColorTag::Yellow,
            "purple" => ColorTag::Purple,
            "pink" => ColorTag::Pink,
            "gold" => ColorTag::Gold,
            "black" => ColorTag::Black,
            "orange" => ColorTag::Orange,
            "darkgray" => ColorTag::Darkgray,
            _ => ColorTag::Other(s),
        }
    }
}

impl From<ColorTag> for String {
    fn from(color: ColorTag) -> Self {
        color.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shape_known_round_trip() {
        for shape in Shape::ALL {
            let json = serde_json::to_string(&shape).unwrap();
            let parsed: Shape = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, shape);
        }
    }

    #[test]
    fn test_shape_unknown_preserved_verbatim() {
        let parsed: Shape = serde_json::from_str(r#""pentagon""#).unwrap();
        assert_eq!(parsed, Shape::Other("pentagon".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""pentagon""#);
    }

    #[test]
    fn test_color_unknown_preserved_verbatim() {
        let parsed: ColorTag = serde_json::from_str(r#""chartreuse""#).unwrap();
        assert_eq!(parsed, ColorTag::Other("chartreuse".to_string()));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#""chartreuse""#);
    }

    #[test]
    fn test_charm_parses_server_json() {
        let json = r#"{
            "id": "ch-1",
            "book_id": "bk-1",
            "shape": "star",
            "color": "gold",
            "title": "PIN",
            "text_value": "1234",
            "created_at": "2025-06-01T12:00:00Z",
            "updated_at": "2025-06-02T08:30:00Z"
        }"#;
        let charm: Charm = serde_json::from_str(json).unwrap();
        assert_eq!(charm.shape, Shape::Star);
        assert_eq!(charm.color, ColorTag::Gold);
        assert_eq!(charm.book_id, "bk-1");
        assert_eq!(charm.text_value, "1234");
    }

    #[test]
    fn test_session_anonymous() {
        let session: Session = serde_json::from_str(r#"{"user_id":""}"#).unwrap();
        assert!(!session.is_authenticated());
        assert!(!session.dev);

        let dev: Session = serde_json::from_str(r#"{"user_id":"dev-user","dev":true}"#).unwrap();
        assert!(dev.is_authenticated());
        assert!(dev.dev);
    }

    #[test]
    fn test_book_draft_titled() {
        let draft = BookDraft::titled("Trip Notes");
        assert_eq!(draft.title, "Trip Notes");
        assert!(draft.note.is_empty());
        assert!(!draft.is_public);
    }
}
