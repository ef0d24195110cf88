//! Widget trait and related types.
//!
//! Widgets receive their bounds from the host through [`Widget::layout`] and
//! react to input through [`Widget::event`]. State changes that the host may
//! care about come back as boxed messages which the caller downcasts.
//!
//! # Examples
//!
//! ```
//! use selectsearch_core::TypeId;
//!
//! let string_type = TypeId::of::<String>();
//! let i32_type = TypeId::of::<i32>();
//! assert_ne!(string_type, i32_type);
//! ```

use crate::event::Event;
use crate::geometry::{Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
///
/// Widgets are driven by a single-threaded host event loop, so neither
/// `Send` nor `Sync` is required: hooks supplied by a browser host capture
/// JS handles.
pub trait Widget {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Record the bounds the host allocated to this widget.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Handle input events.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Check if this widget is interactive (can receive focus/events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Check if this widget can receive keyboard focus.
    fn is_focusable(&self) -> bool {
        false
    }

    /// Get the accessible name for screen readers.
    fn accessible_name(&self) -> Option<&str> {
        None
    }

    /// Get the accessible role.
    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Generic
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, 0.0, 0.0)
    }
}

/// Accessible role for screen readers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccessibleRole {
    /// Generic element
    #[default]
    Generic,
    /// Combo box (text input with popup list)
    ComboBox,
    /// Search input
    SearchBox,
    /// List box
    ListBox,
    /// Option inside a list box
    Option,
    /// Group of options
    Group,
}

impl AccessibleRole {
    /// ARIA `role` attribute value.
    #[must_use]
    pub const fn aria(&self) -> &'static str {
        match self {
            Self::Generic => "generic",
            Self::ComboBox => "combobox",
            Self::SearchBox => "searchbox",
            Self::ListBox => "listbox",
            Self::Option => "option",
            Self::Group => "group",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Key;

    struct Recorder {
        bounds: Rect,
        events: usize,
    }

    impl Widget for Recorder {
        fn type_id(&self) -> TypeId {
            TypeId::of::<Self>()
        }

        fn layout(&mut self, bounds: Rect) -> LayoutResult {
            self.bounds = bounds;
            LayoutResult {
                size: bounds.size(),
            }
        }

        fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
            self.events += 1;
            Some(Box::new(self.events))
        }

        fn bounds(&self) -> Rect {
            self.bounds
        }
    }

    #[test]
    fn test_type_id() {
        let id1 = TypeId::of::<u32>();
        let id2 = TypeId::of::<u32>();
        let id3 = TypeId::of::<String>();

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_widget_defaults() {
        let recorder = Recorder {
            bounds: Rect::default(),
            events: 0,
        };
        assert!(!recorder.is_interactive());
        assert!(!recorder.is_focusable());
        assert_eq!(recorder.accessible_name(), None);
        assert_eq!(recorder.accessible_role(), AccessibleRole::Generic);
        assert_eq!(recorder.test_id(), None);
    }

    #[test]
    fn test_widget_layout_records_bounds() {
        let mut recorder = Recorder {
            bounds: Rect::default(),
            events: 0,
        };
        let result = recorder.layout(Rect::new(0.0, 0.0, 120.0, 30.0));
        assert_eq!(result.size, Size::new(120.0, 30.0));
        assert_eq!(recorder.bounds().width, 120.0);
    }

    #[test]
    fn test_widget_event_message_downcast() {
        let mut recorder = Recorder {
            bounds: Rect::default(),
            events: 0,
        };
        let msg = recorder.event(&Event::KeyUp { key: Key::Enter }).unwrap();
        assert_eq!(msg.downcast_ref::<usize>(), Some(&1));
    }

    #[test]
    fn test_accessible_role_aria() {
        assert_eq!(AccessibleRole::ComboBox.aria(), "combobox");
        assert_eq!(AccessibleRole::ListBox.aria(), "listbox");
        assert_eq!(AccessibleRole::default().aria(), "generic");
    }
}
