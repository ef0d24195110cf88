//! Option source adapter.
//!
//! The bound control is the single source of truth for the option list and
//! for what is selected. [`OptionSource`] abstracts it so the widget can run
//! against a DOM `<select>` in the browser or a [`MemorySource`] in tests.

use crate::option::{render_label, OptionRecord, RawOption, RenderHook};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Provider of the authoritative option list.
pub trait OptionSource {
    /// Payload accepted by [`OptionSource::replace`] (markup for a DOM
    /// source, option records for an in-memory one).
    type Replacement;

    /// All options in document order.
    fn options(&self) -> Vec<RawOption>;

    /// Whether the bound control accepts several selected options.
    fn is_multiple(&self) -> bool;

    /// Set the checked state of the first option with `value`.
    fn set_selected(&mut self, value: &str, selected: bool);

    /// Replace the whole option set.
    fn replace(&mut self, replacement: Self::Replacement);
}

/// Resolves an element locator to an option source.
///
/// Any `Fn(&str) -> Option<S>` is a binder.
pub trait Binder {
    /// Source produced for a matching element.
    type Source: OptionSource;

    /// Find the element `locator` designates.
    fn resolve(&self, locator: &str) -> Option<Self::Source>;
}

impl<S, F> Binder for F
where
    S: OptionSource,
    F: Fn(&str) -> Option<S>,
{
    type Source = S;

    fn resolve(&self, locator: &str) -> Option<S> {
        self(locator)
    }
}

/// In-memory option source with native `<select>` selection rules.
///
/// In single mode exactly one enabled option is selected whenever one
/// exists: the last one flagged, or the first enabled option otherwise.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemorySource {
    options: Vec<RawOption>,
    multiple: bool,
}

impl MemorySource {
    /// Single-selection source.
    #[must_use]
    pub fn single(options: impl IntoIterator<Item = RawOption>) -> Self {
        let mut source = Self {
            options: options.into_iter().collect(),
            multiple: false,
        };
        source.reset_selectedness();
        source
    }

    /// Multiple-selection source.
    #[must_use]
    pub fn multiple(options: impl IntoIterator<Item = RawOption>) -> Self {
        Self {
            options: options.into_iter().collect(),
            multiple: true,
        }
    }

    /// Borrow the options without cloning.
    #[must_use]
    pub fn as_slice(&self) -> &[RawOption] {
        &self.options
    }

    fn reset_selectedness(&mut self) {
        if self.multiple {
            return;
        }
        let keep = self
            .options
            .iter()
            .rposition(|o| o.selected)
            .or_else(|| self.options.iter().position(|o| !o.disabled));
        for (i, option) in self.options.iter_mut().enumerate() {
            option.selected = Some(i) == keep;
        }
    }
}

impl OptionSource for MemorySource {
    type Replacement = Vec<RawOption>;

    fn options(&self) -> Vec<RawOption> {
        self.options.clone()
    }

    fn is_multiple(&self) -> bool {
        self.multiple
    }

    fn set_selected(&mut self, value: &str, selected: bool) {
        let Some(index) = self.options.iter().position(|o| o.value == value) else {
            return;
        };
        if !self.multiple && selected {
            for option in &mut self.options {
                option.selected = false;
            }
        }
        self.options[index].selected = selected;
        if !self.multiple && !selected {
            self.reset_selectedness();
        }
    }

    fn replace(&mut self, replacement: Vec<RawOption>) {
        self.options = replacement;
        self.reset_selectedness();
    }
}

/// Normalized, render-hook aware view over an [`OptionSource`].
pub struct OptionAdapter<S> {
    source: S,
    render: RenderHook,
    multiple: bool,
}

impl<S: fmt::Debug> fmt::Debug for OptionAdapter<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OptionAdapter")
            .field("source", &self.source)
            .field("multiple", &self.multiple)
            .finish_non_exhaustive()
    }
}

impl<S: OptionSource> OptionAdapter<S> {
    /// Wrap a source. Multiplicity is read once, here.
    pub fn new(source: S) -> Self {
        let multiple = source.is_multiple();
        Self {
            source,
            render: Box::new(render_label),
            multiple,
        }
    }

    /// Replace the render hook.
    pub fn set_render(&mut self, render: RenderHook) {
        self.render = render;
    }

    /// Multiplicity fixed at construction.
    #[must_use]
    pub const fn is_multiple(&self) -> bool {
        self.multiple
    }

    /// Borrow the underlying source.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Mutably borrow the underlying source.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// All records in document order.
    #[must_use]
    pub fn records(&self) -> Vec<OptionRecord> {
        self.source
            .options()
            .iter()
            .map(|raw| OptionRecord::from_raw(raw, (self.render)(raw)))
            .collect()
    }

    /// Records in display order.
    ///
    /// Document order in single mode. In multiple mode the checked options
    /// come first, then the unchecked ones, each keeping document order, so
    /// the current selection surfaces whatever the query.
    #[must_use]
    pub fn list_options(&self) -> Vec<OptionRecord> {
        let records = self.records();
        if !self.multiple {
            return records;
        }
        let (mut checked, unchecked): (Vec<_>, Vec<_>) =
            records.into_iter().partition(|r| r.selected);
        checked.extend(unchecked);
        checked
    }

    /// Record for `value`, or the sentinel when no option has it.
    #[must_use]
    pub fn resolve_option(&self, value: &str) -> OptionRecord {
        self.source
            .options()
            .iter()
            .find(|raw| raw.value == value)
            .map_or_else(OptionRecord::unknown, |raw| {
                OptionRecord::from_raw(raw, (self.render)(raw))
            })
    }

    /// Whether an option with `value` exists.
    #[must_use]
    pub fn has_value(&self, value: &str) -> bool {
        self.source.options().iter().any(|raw| raw.value == value)
    }

    /// Checked records in document order.
    #[must_use]
    pub fn checked(&self) -> Vec<OptionRecord> {
        self.records().into_iter().filter(|r| r.selected).collect()
    }
}
