//! Filter/render engine.
//!
//! Turns the ordered option records into the grouped, capped list the
//! overlay shows. Groups are detected by adjacency only: a section opens
//! whenever an included item's group differs from the open section's label,
//! so a group split by other options shows its heading twice.

use crate::config::Config;
use crate::option::OptionRecord;
use serde::{Deserialize, Serialize};

/// What a render pass does to the list scroll position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RenderMode {
    /// Rewind the list to the top (opening, typing)
    #[default]
    Reset,
    /// Leave scrolling alone (keyboard-driven selection)
    Preserve,
}

/// One rendered, selectable item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderedItem {
    /// Option value
    pub value: String,
    /// Rendered content (may contain markup)
    pub content: String,
    /// Plain text
    pub text: String,
    /// Whether the bound control has this option checked
    pub selected: bool,
    /// Row in the list, counting group headings
    pub row: usize,
}

/// Run of adjacent items sharing a group.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderedSection {
    /// Group heading, `None` for ungrouped options
    pub label: Option<String>,
    /// Items in display order
    pub items: Vec<RenderedItem>,
}

impl RenderedSection {
    /// Whether this section draws a heading row.
    #[must_use]
    pub const fn has_heading(&self) -> bool {
        self.label.is_some()
    }
}

/// Output of a render pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RenderedList {
    sections: Vec<RenderedSection>,
    rows: usize,
}

impl RenderedList {
    /// An empty list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sections: Vec::new(),
            rows: 0,
        }
    }

    /// Sections in display order.
    #[must_use]
    pub fn sections(&self) -> &[RenderedSection] {
        &self.sections
    }

    /// Number of rendered items (headings excluded).
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.items.len()).sum()
    }

    /// Whether nothing was rendered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sections.iter().all(|s| s.items.is_empty())
    }

    /// Number of rows: items plus group headings.
    #[must_use]
    pub const fn row_count(&self) -> usize {
        self.rows
    }

    /// Items in display order.
    pub fn items(&self) -> impl Iterator<Item = &RenderedItem> {
        self.sections.iter().flat_map(|s| s.items.iter())
    }

    /// Item at `index` in display order.
    #[must_use]
    pub fn item(&self, index: usize) -> Option<&RenderedItem> {
        self.items().nth(index)
    }

    /// Display index of the first item with `value`.
    #[must_use]
    pub fn position(&self, value: &str) -> Option<usize> {
        self.items().position(|item| item.value == value)
    }

    /// Rendered values in display order.
    #[must_use]
    pub fn values(&self) -> Vec<&str> {
        self.items().map(|item| item.value.as_str()).collect()
    }

    /// Group headings in display order.
    #[must_use]
    pub fn headings(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(|s| s.label.as_deref())
            .collect()
    }

    fn push(&mut self, record: &OptionRecord) {
        let opens_section = self
            .sections
            .last()
            .map_or(true, |section| section.label != record.group);
        if opens_section {
            let section = RenderedSection {
                label: record.group.clone(),
                items: Vec::new(),
            };
            if section.has_heading() {
                self.rows += 1;
            }
            self.sections.push(section);
        }
        let row = self.rows;
        self.rows += 1;
        if let Some(section) = self.sections.last_mut() {
            section.items.push(RenderedItem {
                value: record.value.clone(),
                content: record.content.clone(),
                text: record.text.clone(),
                selected: record.selected,
                row,
            });
        }
    }
}

/// Build the visible list for `query` from records in display order.
///
/// Nothing renders while the query is shorter than `min_length` characters.
/// Disabled options are skipped. The empty option is skipped unless
/// `display_empty` (then it must match like any other) or
/// `always_display_empty` (then it bypasses the match) is set; either way it
/// never counts toward `list_limit`, and it is dropped once the limit is hit.
#[must_use]
pub fn render_list(records: &[OptionRecord], query: &str, config: &Config) -> RenderedList {
    let mut list = RenderedList::new();
    if query.chars().count() < config.min_length {
        return list;
    }
    let limit = config.limit();
    let under_cap = |counter: usize| limit.map_or(true, |limit| counter < limit);
    let needle = query.to_lowercase();
    let mut counter = 0usize;

    for record in records {
        if record.disabled {
            continue;
        }
        if record.is_empty_option() {
            let include = if config.always_display_empty {
                under_cap(counter)
            } else {
                config.display_empty && under_cap(counter) && matches(record, &needle)
            };
            if include {
                list.push(record);
            }
            continue;
        }
        if !matches(record, &needle) || !under_cap(counter) {
            continue;
        }
        list.push(record);
        counter += 1;
    }
    list
}

fn matches(record: &OptionRecord, needle: &str) -> bool {
    needle.is_empty() || record.text.to_lowercase().contains(needle)
}
