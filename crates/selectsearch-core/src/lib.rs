//! Core types and traits for the SelectSearch dropdown widget.
//!
//! This crate provides foundational types used by the widget and its hosts:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Events: [`Event`], [`Key`]
//! - The [`Widget`] trait
//! - Ancestor containment for outside-click detection: [`NodeTree`], [`contains`]

mod ancestry;
mod event;
mod geometry;
pub mod widget;

pub use ancestry::{contains, ArenaTree, NodeId, NodeTree};
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use widget::{AccessibleRole, LayoutResult, TypeId, Widget};
