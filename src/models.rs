//! Board Models
//!
//! The note record and the fixed color palette, in the shape they are
//! stored under the board's storage key.

use serde::{Deserialize, Serialize};

/// Note color palette, in picker order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoteColor {
    #[default]
    #[serde(alias = "bg-yellow-200")]
    Yellow,
    #[serde(alias = "bg-blue-200")]
    Blue,
    #[serde(alias = "bg-pink-200")]
    Pink,
    #[serde(alias = "bg-green-200")]
    Green,
    #[serde(alias = "bg-orange-200")]
    Orange,
    #[serde(alias = "bg-purple-200")]
    Purple,
}

impl NoteColor {
    /// All colors, first entry is the compose default
    pub const PALETTE: [NoteColor; 6] = [
        NoteColor::Yellow,
        NoteColor::Blue,
        NoteColor::Pink,
        NoteColor::Green,
        NoteColor::Orange,
        NoteColor::Purple,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NoteColor::Yellow => "yellow",
            NoteColor::Blue => "blue",
            NoteColor::Pink => "pink",
            NoteColor::Green => "green",
            NoteColor::Orange => "orange",
            NoteColor::Purple => "purple",
        }
    }

    /// CSS class for the note background
    pub fn css_class(&self) -> &'static str {
        match self {
            NoteColor::Yellow => "note-yellow",
            NoteColor::Blue => "note-blue",
            NoteColor::Pink => "note-pink",
            NoteColor::Green => "note-green",
            NoteColor::Orange => "note-orange",
            NoteColor::Purple => "note-purple",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NoteColor::Yellow => "黃色",
            NoteColor::Blue => "藍色",
            NoteColor::Pink => "粉紅色",
            NoteColor::Green => "綠色",
            NoteColor::Orange => "橘色",
            NoteColor::Purple => "紫色",
        }
    }
}

/// A single sticky note
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Unique identifier, fixed at creation
    pub id: String,
    /// Trimmed, non-empty text
    pub content: String,
    /// Creation time in epoch milliseconds
    pub created_at: i64,
    pub color: NoteColor,
    /// Display tilt in degrees, within [-3, 3]
    pub rotation: f64,
    pub is_completed: bool,
}

impl Note {
    /// Create a new, not yet completed note
    pub fn new(id: String, content: String, color: NoteColor, created_at: i64, rotation: f64) -> Self {
        Self {
            id,
            content,
            created_at,
            color,
            rotation,
            is_completed: false,
        }
    }

    /// Flip completion, returning the new state
    pub fn toggle(&mut self) -> bool {
        self.is_completed = !self.is_completed;
        self.is_completed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_note_creation() {
        let note = Note::new("abc1234".to_string(), "Buy milk".to_string(), NoteColor::Yellow, 1_700_000_000_000, 1.5);
        assert_eq!(note.id, "abc1234");
        assert_eq!(note.color, NoteColor::Yellow);
        assert!(!note.is_completed);
    }

    #[test]
    fn test_note_toggle() {
        let mut note = Note::new("a".to_string(), "x".to_string(), NoteColor::Blue, 0, 0.0);
        assert!(note.toggle());
        assert!(!note.toggle());
    }

    #[test]
    fn test_note_serialized_field_names() {
        let note = Note::new("n1".to_string(), "Call mom".to_string(), NoteColor::Pink, 42, -2.0);
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["id"], "n1");
        assert_eq!(json["content"], "Call mom");
        assert_eq!(json["createdAt"], 42);
        assert_eq!(json["color"], "pink");
        assert_eq!(json["rotation"], -2.0);
        assert_eq!(json["isCompleted"], false);
    }

    #[test]
    fn test_legacy_css_color_names_accepted() {
        let json = r#"{"id":"x","content":"old","createdAt":1,"color":"bg-green-200","rotation":0.5,"isCompleted":true}"#;
        let note: Note = serde_json::from_str(json).unwrap();
        assert_eq!(note.color, NoteColor::Green);
        assert!(note.is_completed);
    }

    #[test]
    fn test_unknown_color_rejected() {
        let json = r#"{"id":"x","content":"c","createdAt":1,"color":"teal","rotation":0.0,"isCompleted":false}"#;
        assert!(serde_json::from_str::<Note>(json).is_err());
    }

    #[test]
    fn test_as_str_matches_serialized_name() {
        for color in NoteColor::PALETTE {
            assert_eq!(serde_json::to_value(color).unwrap(), color.as_str());
        }
    }

    #[test]
    fn test_palette_default_is_first() {
        assert_eq!(NoteColor::default(), NoteColor::PALETTE[0]);
        assert_eq!(NoteColor::PALETTE[3].as_str(), "green");
    }
}
