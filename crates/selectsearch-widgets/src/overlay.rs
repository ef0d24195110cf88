//! Overlay visibility and list scrolling.

use selectsearch_core::Rect;

/// Message emitted when the overlay opens or closes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayToggled {
    /// Whether the overlay is now visible
    pub open: bool,
}

/// Scroll state of the rendered list.
///
/// Rows have a uniform height; section headings count as rows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ListViewport {
    scroll_offset: f32,
    height: f32,
    row_height: f32,
}

impl Default for ListViewport {
    fn default() -> Self {
        Self::new(Self::DEFAULT_HEIGHT, Self::DEFAULT_ROW_HEIGHT)
    }
}

impl ListViewport {
    /// Default visible list height.
    pub const DEFAULT_HEIGHT: f32 = 240.0;
    /// Default row height.
    pub const DEFAULT_ROW_HEIGHT: f32 = 32.0;

    /// Create a viewport.
    #[must_use]
    pub fn new(height: f32, row_height: f32) -> Self {
        Self {
            scroll_offset: 0.0,
            height: height.max(0.0),
            row_height: row_height.max(1.0),
        }
    }

    /// Current scroll offset.
    #[must_use]
    pub const fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Adopt a scroll offset reported by the host (user scrolled).
    pub fn set_scroll_offset(&mut self, offset: f32) {
        self.scroll_offset = offset.max(0.0);
    }

    /// Visible height.
    #[must_use]
    pub const fn height(&self) -> f32 {
        self.height
    }

    /// Set the visible height.
    pub fn set_height(&mut self, height: f32) {
        self.height = height.max(0.0);
    }

    /// Row height.
    #[must_use]
    pub const fn row_height(&self) -> f32 {
        self.row_height
    }

    /// Set the row height.
    pub fn set_row_height(&mut self, row_height: f32) {
        self.row_height = row_height.max(1.0);
    }

    /// Back to the top.
    pub fn rewind(&mut self) {
        self.scroll_offset = 0.0;
    }

    /// Top edge of `row` in list coordinates.
    #[must_use]
    pub fn row_top(&self, row: usize) -> f32 {
        row as f32 * self.row_height
    }

    /// Scroll the least amount that brings `row` fully into view.
    pub fn scroll_into_view(&mut self, row: usize) {
        let row_top = self.row_top(row);
        let row_end = row_top + self.row_height;
        let viewport_end = self.scroll_offset + self.height;

        if row_top < self.scroll_offset {
            self.scroll_offset = row_top;
        } else if row_end > viewport_end {
            self.scroll_offset = (row_end - self.height).max(0.0);
        }
    }

    /// Whether `row` is fully visible.
    #[must_use]
    pub fn is_row_visible(&self, row: usize) -> bool {
        let row_top = self.row_top(row);
        row_top >= self.scroll_offset && row_top + self.row_height <= self.scroll_offset + self.height
    }
}

/// Visibility of the floating panel and its geometry.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Overlay {
    open: bool,
    anchor: Rect,
    width: f32,
    focus_requested: bool,
    viewport: ListViewport,
}

impl Overlay {
    /// Closed overlay.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the overlay is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Show the overlay, matching the placeholder width and asking for
    /// input focus.
    pub fn show(&mut self) {
        self.open = true;
        self.width = self.anchor.width;
        self.focus_requested = true;
    }

    /// Hide the overlay.
    pub fn hide(&mut self) {
        self.open = false;
        self.focus_requested = false;
    }

    /// Record the placeholder bounds.
    pub fn set_anchor(&mut self, anchor: Rect) {
        self.anchor = anchor;
    }

    /// Placeholder bounds.
    #[must_use]
    pub const fn anchor(&self) -> Rect {
        self.anchor
    }

    /// Width fixed at the last `show`.
    #[must_use]
    pub const fn width(&self) -> f32 {
        self.width
    }

    /// Panel bounds: directly below the placeholder.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        let below = self.anchor.below(self.viewport.height());
        Rect::new(below.x, below.y, self.width, below.height)
    }

    /// Consume a pending focus request for the filter input.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    /// List scroll state.
    #[must_use]
    pub const fn viewport(&self) -> &ListViewport {
        &self.viewport
    }

    /// Mutable list scroll state.
    pub fn viewport_mut(&mut self) -> &mut ListViewport {
        &mut self.viewport
    }
}
