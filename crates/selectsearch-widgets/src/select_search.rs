//! Searchable dropdown widget.
//!
//! [`SelectSearch`] owns an [`OptionSource`] and keeps three things in step:
//! the source's checked flags (the only selection state), the rendered list
//! derived from the query, and the overlay's visibility.

use crate::config::Config;
use crate::error::{Result, SelectSearchError};
use crate::filter::{render_list, RenderMode, RenderedList};
use crate::navigation::{ArrowCursor, NavKey};
use crate::option::{OptionRecord, RenderHook};
use crate::overlay::{Overlay, OverlayToggled};
use crate::source::{Binder, OptionAdapter, OptionSource};
use selectsearch_core::{
    contains,
    widget::{AccessibleRole, LayoutResult},
    Event, Key, MouseButton, NodeTree, Point, Rect, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use tracing::{debug, warn};

/// Notification hook invoked after every successful selection.
pub type SelectHook = Box<dyn FnMut(&SelectEvent)>;

/// Payload passed to the [`SelectHook`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectEvent {
    /// Selected value
    pub value: String,
    /// Plain text of the option
    pub text: String,
    /// Position in the rendered list at selection time, if it was rendered
    pub index: Option<usize>,
}

/// Message emitted when a selection changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionChanged {
    /// Option value
    pub value: String,
    /// Plain text of the option
    pub text: String,
    /// Whether the option is now checked
    pub selected: bool,
}

/// Message emitted when a key press was swallowed by the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyConsumed {
    /// Key that must not reach the host (Enter would submit the form)
    pub key: Key,
}

/// Cardinality of the bound control, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectionMode {
    /// One option at a time
    Single,
    /// Any number of options
    Multiple,
}

/// Current value of the bound control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectedValue {
    /// Single mode: the selected value, `""` when nothing is selected
    Single(String),
    /// Multiple mode: every checked value in document order
    Multiple(Vec<String>),
}

impl SelectedValue {
    /// Whether `value` is part of the selection.
    #[must_use]
    pub fn contains(&self, value: &str) -> bool {
        match self {
            Self::Single(v) => v == value,
            Self::Multiple(values) => values.iter().any(|v| v == value),
        }
    }

    /// Selected values as a list (empty for an unselected single control).
    #[must_use]
    pub fn to_vec(&self) -> Vec<String> {
        match self {
            Self::Single(v) if v.is_empty() => Vec::new(),
            Self::Single(v) => vec![v.clone()],
            Self::Multiple(values) => values.clone(),
        }
    }
}

/// Summary shown in the always-visible control.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Placeholder {
    /// Markup
    pub content: String,
    /// Plain text
    pub text: String,
}

/// Searchable, filterable dropdown bound to an option source.
pub struct SelectSearch<S> {
    adapter: OptionAdapter<S>,
    config: Config,
    query: String,
    cursor: ArrowCursor,
    rendered: RenderedList,
    overlay: Overlay,
    placeholder: Placeholder,
    on_select: Option<SelectHook>,
    bounds: Rect,
    accessible_name_value: Option<String>,
    test_id_value: Option<String>,
}

impl<S: fmt::Debug> fmt::Debug for SelectSearch<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SelectSearch")
            .field("adapter", &self.adapter)
            .field("query", &self.query)
            .field("cursor", &self.cursor)
            .field("open", &self.overlay.is_open())
            .field("placeholder", &self.placeholder)
            .finish_non_exhaustive()
    }
}

impl<S: OptionSource> SelectSearch<S> {
    /// Create a widget over `source`.
    pub fn new(source: S, config: Config) -> Self {
        let mut widget = Self {
            adapter: OptionAdapter::new(source),
            config,
            query: String::new(),
            cursor: ArrowCursor::new(),
            rendered: RenderedList::new(),
            overlay: Overlay::new(),
            placeholder: Placeholder::default(),
            on_select: None,
            bounds: Rect::default(),
            accessible_name_value: None,
            test_id_value: None,
        };
        widget.update_placeholder();
        widget.refresh(None, RenderMode::Reset);
        widget
    }

    /// Resolve `locator` through `binder` and create a widget over the
    /// element it designates.
    pub fn bind<B>(binder: &B, locator: &str, config: Config) -> Result<Self>
    where
        B: Binder<Source = S>,
    {
        binder.resolve(locator).map_or_else(
            || {
                warn!(locator, "selectsearch: no element matches locator");
                Err(SelectSearchError::BindingNotFound(locator.to_string()))
            },
            |source| Ok(Self::new(source, config)),
        )
    }

    /// Set the render hook.
    #[must_use]
    pub fn with_render(mut self, render: RenderHook) -> Self {
        self.adapter.set_render(render);
        self.update_placeholder();
        self.refresh(None, RenderMode::Reset);
        self
    }

    /// Set the selection hook.
    #[must_use]
    pub fn with_on_select(mut self, on_select: SelectHook) -> Self {
        self.on_select = Some(on_select);
        self
    }

    /// Set the accessible name.
    #[must_use]
    pub fn with_accessible_name(mut self, name: impl Into<String>) -> Self {
        self.accessible_name_value = Some(name.into());
        self
    }

    /// Set the test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Active configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// Borrow the option source.
    #[must_use]
    pub const fn source(&self) -> &S {
        self.adapter.source()
    }

    /// Whether the bound control accepts several values.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        self.adapter.is_multiple()
    }

    /// Selection cardinality.
    #[must_use]
    pub const fn mode(&self) -> SelectionMode {
        if self.is_multiple() {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single
        }
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// Current value of the bound control.
    #[must_use]
    pub fn value(&self) -> SelectedValue {
        let mut checked = self.adapter.checked().into_iter().map(|r| r.value);
        if self.is_multiple() {
            SelectedValue::Multiple(checked.collect())
        } else {
            SelectedValue::Single(checked.next().unwrap_or_default())
        }
    }

    /// Select `value` (single mode) or toggle it (multiple mode).
    ///
    /// Unknown values are ignored. Otherwise the placeholder is refreshed,
    /// the query cleared and the select hook run. The list then re-renders
    /// without rewinding, and the cursor moves to the item, which is
    /// scrolled into view.
    pub fn set_value(&mut self, value: &str) -> Option<SelectionChanged> {
        if !self.adapter.has_value(value) {
            debug!(value, "selectsearch: ignoring unknown value");
            return None;
        }
        let record = self.adapter.resolve_option(value);

        let index = self.rendered.position(value);

        let selected = !(self.is_multiple() && record.selected);
        self.adapter.source_mut().set_selected(value, selected);
        self.update_placeholder();
        self.query.clear();
        debug!(value, selected, "selectsearch: selection changed");

        if let Some(on_select) = self.on_select.as_mut() {
            on_select(&SelectEvent {
                value: value.to_string(),
                text: record.text.clone(),
                index,
            });
        }

        self.refresh(None, RenderMode::Preserve);
        self.follow(value);
        Some(SelectionChanged {
            value: value.to_string(),
            text: record.text,
            selected,
        })
    }

    /// Put the cursor on `value` in the current list and scroll its row
    /// into view. No-op when the value is not rendered.
    fn follow(&mut self, value: &str) {
        let Some(position) = self.rendered.position(value) else {
            return;
        };
        self.cursor.set(position, self.rendered.len());
        if let Some(item) = self.rendered.item(position) {
            self.overlay.viewport_mut().scroll_into_view(item.row);
        }
    }

    /// Recompute the placeholder from the checked, enabled options.
    pub fn update_placeholder(&mut self) {
        let checked: Vec<OptionRecord> = self
            .adapter
            .checked()
            .into_iter()
            .filter(|r| !r.disabled)
            .collect();

        self.placeholder = if checked.is_empty() {
            self.adapter
                .records()
                .into_iter()
                .find(OptionRecord::is_empty_option)
                .map_or_else(Placeholder::default, |empty| Placeholder {
                    content: empty.content,
                    text: empty.text,
                })
        } else {
            let separator = self.config.separator.as_str();
            Placeholder {
                content: join(checked.iter().map(|r| r.content.as_str()), separator),
                text: join(checked.iter().map(|r| r.text.as_str()), separator),
            }
        };
    }

    /// Current placeholder summary.
    #[must_use]
    pub const fn placeholder(&self) -> &Placeholder {
        &self.placeholder
    }

    // =========================================================================
    // Query and rendering
    // =========================================================================

    /// Current filter text.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Replace the filter text and re-render from the top.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.refresh(None, RenderMode::Reset);
    }

    /// Empty the filter text and re-render from the top.
    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// Rebuild the visible list for `query`.
    ///
    /// The arrow cursor moves to `hint` when given and is clamped to the new
    /// item count either way.
    pub fn render(&mut self, query: &str, hint: Option<usize>, mode: RenderMode) -> &RenderedList {
        self.rendered = render_list(&self.adapter.list_options(), query, &self.config);
        let count = self.rendered.len();
        match hint {
            Some(index) => self.cursor.set(index, count),
            None => self.cursor.clamp(count),
        }
        if mode == RenderMode::Reset {
            self.overlay.viewport_mut().rewind();
        }
        &self.rendered
    }

    fn refresh(&mut self, hint: Option<usize>, mode: RenderMode) {
        let query = std::mem::take(&mut self.query);
        self.render(&query, hint, mode);
        self.query = query;
    }

    /// Last rendered list.
    #[must_use]
    pub const fn rendered(&self) -> &RenderedList {
        &self.rendered
    }

    /// Keyboard cursor into the rendered list.
    #[must_use]
    pub const fn arrow_index(&self) -> usize {
        self.cursor.index()
    }

    // =========================================================================
    // Keyboard
    // =========================================================================

    /// React to a released key.
    ///
    /// Arrows move the cursor and select the item under it; Enter closes;
    /// anything else rewinds the cursor.
    pub fn handle_key(&mut self, key: Key) -> Option<SelectionChanged> {
        let nav = NavKey::from(key);
        match nav {
            NavKey::Other => {
                self.cursor.reset();
                None
            }
            NavKey::Enter => {
                self.close();
                None
            }
            NavKey::Up | NavKey::Down => {
                if nav == NavKey::Up {
                    self.cursor.up();
                } else {
                    self.cursor.down(self.rendered.len());
                }
                let value = self.rendered.item(self.cursor.index())?.value.clone();
                self.set_value(&value)
            }
        }
    }

    // =========================================================================
    // Overlay
    // =========================================================================

    /// Show the overlay at the placeholder's width and render from the top.
    pub fn open(&mut self) {
        self.overlay.show();
        self.refresh(None, RenderMode::Reset);
        debug!(width = self.overlay.width(), "selectsearch: overlay opened");
    }

    /// Hide the overlay. The query is kept.
    pub fn close(&mut self) {
        self.overlay.hide();
        debug!("selectsearch: overlay closed");
    }

    /// Open when closed, close when open.
    pub fn toggle_open(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    /// Whether the overlay is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.overlay.is_open()
    }

    /// Overlay state.
    #[must_use]
    pub const fn overlay(&self) -> &Overlay {
        &self.overlay
    }

    /// Consume a pending request to focus the filter input.
    pub fn take_focus_request(&mut self) -> bool {
        self.overlay.take_focus_request()
    }

    /// Current list scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f32 {
        self.overlay.viewport().scroll_offset()
    }

    /// Adopt a scroll offset reported by the host.
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.overlay.viewport_mut().set_scroll_offset(offset);
    }

    /// Set the visible list height and row height used for scrolling.
    pub fn set_list_metrics(&mut self, height: f32, row_height: f32) {
        let viewport = self.overlay.viewport_mut();
        viewport.set_height(height);
        viewport.set_row_height(row_height);
    }

    /// Close the overlay unless `target` lies inside `root`.
    ///
    /// Returns `true` when the click closed the overlay. A missing or
    /// detached target counts as outside.
    pub fn handle_outside_click<T>(&mut self, tree: &T, root: &T::Node, target: Option<&T::Node>) -> bool
    where
        T: NodeTree + ?Sized,
    {
        if !self.is_open() || contains(tree, root, target) {
            return false;
        }
        self.close();
        true
    }

    /// Select the rendered item at `index`. Single mode also closes.
    pub fn click_item(&mut self, index: usize) -> Option<SelectionChanged> {
        let value = self.rendered.item(index)?.value.clone();
        let changed = self.set_value(&value);
        if !self.is_multiple() {
            self.close();
        }
        changed
    }

    /// Swap the whole option set, then select `value` or the first
    /// rendered item.
    ///
    /// In multiple mode a target that is already checked stays checked.
    pub fn update_options_list(
        &mut self,
        replacement: S::Replacement,
        value: Option<&str>,
    ) -> Option<SelectionChanged> {
        self.adapter.source_mut().replace(replacement);
        self.refresh(None, RenderMode::Reset);
        self.update_placeholder();

        let target = value
            .map(str::to_string)
            .or_else(|| self.rendered.item(0).map(|item| item.value.clone()));
        debug!(value = ?target, "selectsearch: options replaced");

        let target = target?;
        if self.is_multiple() && self.adapter.resolve_option(&target).selected {
            return None;
        }
        self.set_value(&target)
    }

    fn item_at(&self, position: &Point) -> Option<usize> {
        let list = self.overlay.bounds();
        if !list.contains_point(position) {
            return None;
        }
        let viewport = self.overlay.viewport();
        let offset = position.y - list.y + viewport.scroll_offset();
        let row = (offset / viewport.row_height()) as usize;
        self.rendered.items().position(|item| item.row == row)
    }
}

fn join<'a>(parts: impl Iterator<Item = &'a str>, separator: &str) -> String {
    parts.collect::<Vec<_>>().join(separator)
}

impl<S: OptionSource + 'static> Widget for SelectSearch<S> {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        self.overlay.set_anchor(bounds);
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let was_open = self.is_open();
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => {
                if self.bounds.contains_point(position) {
                    self.toggle_open();
                } else if was_open {
                    if let Some(index) = self.item_at(position) {
                        return self.click_item(index).map(|c| Box::new(c) as Box<dyn Any + Send>);
                    }
                    if !self.overlay.bounds().contains_point(position) {
                        self.close();
                    }
                }
            }
            Event::KeyDown { key: Key::Enter } if was_open => {
                return Some(Box::new(KeyConsumed { key: Key::Enter }));
            }
            Event::KeyUp { key } if was_open => {
                if let Some(changed) = self.handle_key(*key) {
                    return Some(Box::new(changed));
                }
            }
            Event::TextInput { text } if was_open => {
                self.set_query(text.clone());
            }
            _ => {}
        }

        if was_open == self.is_open() {
            None
        } else {
            Some(Box::new(OverlayToggled {
                open: self.is_open(),
            }))
        }
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn is_focusable(&self) -> bool {
        true
    }

    fn accessible_name(&self) -> Option<&str> {
        self.accessible_name_value.as_deref()
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ComboBox
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
