//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
    /// Key released
    KeyUp {
        /// Key released
        key: Key,
    },
    /// Contents of the filter input changed
    TextInput {
        /// Full text of the input after the change
        text: String,
    },
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

/// Keyboard key identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
    /// Enter / Return
    Enter,
    /// Escape
    Escape,
    /// Tab
    Tab,
    /// Backspace
    Backspace,
    /// Delete
    Delete,
    /// Space bar
    Space,
    /// Home
    Home,
    /// End
    End,
    /// Page up
    PageUp,
    /// Page down
    PageDown,
    /// Either shift key
    Shift,
    /// Either control key
    Control,
    /// Either alt key
    Alt,
    /// Meta / command key
    Meta,
    /// A printable character
    Char(char),
    /// Anything the widget does not recognise
    Unidentified,
}

impl Key {
    /// Map a DOM `KeyboardEvent.key` value onto a [`Key`].
    #[must_use]
    pub fn from_key_name(name: &str) -> Self {
        match name {
            "ArrowUp" | "Up" => Self::Up,
            "ArrowDown" | "Down" => Self::Down,
            "ArrowLeft" | "Left" => Self::Left,
            "ArrowRight" | "Right" => Self::Right,
            "Enter" => Self::Enter,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            "Backspace" => Self::Backspace,
            "Delete" | "Del" => Self::Delete,
            " " | "Spacebar" => Self::Space,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Shift" => Self::Shift,
            "Control" => Self::Control,
            "Alt" | "AltGraph" => Self::Alt,
            "Meta" | "OS" => Self::Meta,
            other => {
                let mut chars = other.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Char(c),
                    _ => Self::Unidentified,
                }
            }
        }
    }

    /// Whether this key moves the keyboard cursor.
    #[must_use]
    pub const fn is_arrow(&self) -> bool {
        matches!(self, Self::Up | Self::Down | Self::Left | Self::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_from_arrow_names() {
        assert_eq!(Key::from_key_name("ArrowUp"), Key::Up);
        assert_eq!(Key::from_key_name("ArrowDown"), Key::Down);
        assert_eq!(Key::from_key_name("Up"), Key::Up); // legacy Edge names
        assert_eq!(Key::from_key_name("Down"), Key::Down);
    }

    #[test]
    fn test_key_from_named_keys() {
        assert_eq!(Key::from_key_name("Enter"), Key::Enter);
        assert_eq!(Key::from_key_name("Escape"), Key::Escape);
        assert_eq!(Key::from_key_name("Backspace"), Key::Backspace);
        assert_eq!(Key::from_key_name(" "), Key::Space);
        assert_eq!(Key::from_key_name("Shift"), Key::Shift);
    }

    #[test]
    fn test_key_from_character() {
        assert_eq!(Key::from_key_name("a"), Key::Char('a'));
        assert_eq!(Key::from_key_name("Ä"), Key::Char('Ä'));
    }

    #[test]
    fn test_key_unidentified() {
        assert_eq!(Key::from_key_name("F13"), Key::Unidentified);
        assert_eq!(Key::from_key_name(""), Key::Unidentified);
    }

    #[test]
    fn test_key_is_arrow() {
        assert!(Key::Up.is_arrow());
        assert!(Key::Right.is_arrow());
        assert!(!Key::Enter.is_arrow());
        assert!(!Key::Char('x').is_arrow());
    }

    #[test]
    fn test_event_key_up() {
        let e = Event::KeyUp { key: Key::Enter };
        if let Event::KeyUp { key } = e {
            assert_eq!(key, Key::Enter);
        } else {
            panic!("Expected KeyUp event");
        }
    }

    #[test]
    fn test_event_text_input() {
        let e = Event::TextInput {
            text: "app".to_string(),
        };
        if let Event::TextInput { text } = e {
            assert_eq!(text, "app");
        } else {
            panic!("Expected TextInput event");
        }
    }

    #[test]
    fn test_event_json_roundtrip() {
        let e = Event::MouseDown {
            position: Point::new(4.0, 8.0),
            button: MouseButton::Left,
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }

    #[test]
    fn test_event_json_rejects_unknown_kind() {
        assert!(serde_json::from_str::<Event>(r#""FocusOut""#).is_err());
        assert!(serde_json::from_str::<Event>(r#"{"KeyUp": {"key": "Enter"}}"#).is_ok());
    }
}
