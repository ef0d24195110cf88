//! Searchable dropdown state machine for SelectSearch.
//!
//! The widget derives a grouped, capped list of items from a bound option
//! source, maps typing, arrow keys and clicks onto selection changes, and
//! keeps the source and the overlay consistent. Everything here is headless;
//! the browser binding lives in the `selectsearch` crate.

pub mod config;
pub mod error;
pub mod filter;
pub mod navigation;
pub mod option;
pub mod overlay;
pub mod select_search;
pub mod source;

pub use config::{ClassTarget, Config, CustomClass, Lang};
pub use error::{Result, SelectSearchError};
pub use filter::{render_list, RenderMode, RenderedItem, RenderedList, RenderedSection};
pub use navigation::{ArrowCursor, NavKey};
pub use option::{
    render_label, strip_markup, OptionRecord, RawOption, RenderHook, EMPTY_VALUE,
    UNKNOWN_VALUE_MARKER,
};
pub use overlay::{ListViewport, Overlay, OverlayToggled};
pub use select_search::{
    KeyConsumed, Placeholder, SelectEvent, SelectHook, SelectSearch, SelectedValue,
    SelectionChanged, SelectionMode,
};
pub use source::{Binder, MemorySource, OptionAdapter, OptionSource};
