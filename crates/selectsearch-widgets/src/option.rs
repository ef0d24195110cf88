//! Option records: what the bound control reports and how the widget sees it.

use serde::{Deserialize, Serialize};

/// Value of the empty / placeholder option.
pub const EMPTY_VALUE: &str = "";

/// Value and text of the record returned for a value that does not exist.
pub const UNKNOWN_VALUE_MARKER: &str = "-";

/// Transform hook producing the displayed markup for an option.
pub type RenderHook = Box<dyn Fn(&RawOption) -> String>;

/// One option as reported by an [`OptionSource`](crate::OptionSource).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawOption {
    /// Value submitted with the form
    pub value: String,
    /// Inner markup of the option
    pub label: String,
    /// Whether this option is disabled
    pub disabled: bool,
    /// Label of the enclosing group, if any
    pub group: Option<String>,
    /// Whether the bound control has this option checked
    pub selected: bool,
}

impl RawOption {
    /// Create a new option.
    #[must_use]
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
            group: None,
            selected: false,
        }
    }

    /// Create an option where value equals label.
    #[must_use]
    pub fn simple(text: impl Into<String>) -> Self {
        let text = text.into();
        Self::new(text.clone(), text)
    }

    /// Create the empty / placeholder option.
    #[must_use]
    pub fn empty(label: impl Into<String>) -> Self {
        Self::new(EMPTY_VALUE, label)
    }

    /// Set disabled state.
    #[must_use]
    pub const fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set the group label.
    #[must_use]
    pub fn group(mut self, group: impl Into<String>) -> Self {
        self.group = Some(group.into());
        self
    }

    /// Set checked state.
    #[must_use]
    pub const fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Whether this is the empty / placeholder option.
    #[must_use]
    pub fn is_empty_option(&self) -> bool {
        self.value == EMPTY_VALUE
    }
}

/// Default render hook: the option's own markup.
pub fn render_label(option: &RawOption) -> String {
    option.label.clone()
}

/// Normalized view of one selectable choice.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OptionRecord {
    /// Option value
    pub value: String,
    /// Render hook output (may contain markup)
    pub content: String,
    /// `content` without markup, used for matching
    pub text: String,
    /// Whether this option is disabled
    pub disabled: bool,
    /// Group label
    pub group: Option<String>,
    /// Whether the bound control has this option checked
    pub selected: bool,
}

impl OptionRecord {
    /// Build a record from a raw option and its rendered content.
    #[must_use]
    pub fn from_raw(raw: &RawOption, content: String) -> Self {
        let text = strip_markup(&content);
        Self {
            value: raw.value.clone(),
            content,
            text,
            disabled: raw.disabled,
            group: raw.group.clone(),
            selected: raw.selected,
        }
    }

    /// Record returned when a value lookup finds nothing.
    #[must_use]
    pub fn unknown() -> Self {
        Self {
            value: UNKNOWN_VALUE_MARKER.to_string(),
            content: UNKNOWN_VALUE_MARKER.to_string(),
            text: UNKNOWN_VALUE_MARKER.to_string(),
            disabled: false,
            group: None,
            selected: false,
        }
    }

    /// Whether this is the sentinel returned for unknown values.
    #[must_use]
    pub fn is_unknown(&self) -> bool {
        self.value == UNKNOWN_VALUE_MARKER && self.content == UNKNOWN_VALUE_MARKER
    }

    /// Whether this is the empty / placeholder option.
    #[must_use]
    pub fn is_empty_option(&self) -> bool {
        self.value == EMPTY_VALUE
    }

    /// Case-insensitive substring match against the plain text.
    #[must_use]
    pub fn matches(&self, query: &str) -> bool {
        query.is_empty() || self.text.to_lowercase().contains(&query.to_lowercase())
    }
}

/// Strip tags from `markup` and decode the common character entities.
#[must_use]
pub fn strip_markup(markup: &str) -> String {
    let mut text = String::with_capacity(markup.len());
    let mut in_tag = false;
    for c in markup.chars() {
        match (in_tag, c) {
            (false, '<') => in_tag = true,
            (true, '>') => in_tag = false,
            (false, c) => text.push(c),
            (true, _) => {}
        }
    }
    decode_entities(&text).trim().to_string()
}

fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(amp) = rest.find('&') {
        out.push_str(&rest[..amp]);
        let tail = &rest[amp..];
        let decoded = tail
            .find(';')
            .filter(|&semi| semi <= 10)
            .and_then(|semi| decode_entity(&tail[1..semi]).map(|c| (c, semi)));
        match decoded {
            Some((c, semi)) => {
                out.push(c);
                rest = &tail[semi + 1..];
            }
            None => {
                out.push('&');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

fn decode_entity(name: &str) -> Option<char> {
    match name {
        "amp" => Some('&'),
        "lt" => Some('<'),
        "gt" => Some('>'),
        "quot" => Some('"'),
        "apos" | "#39" => Some('\''),
        "nbsp" => Some('\u{a0}'),
        _ => {
            let code = name.strip_prefix('#')?;
            let n = match code.strip_prefix(|c: char| c == 'x' || c == 'X') {
                Some(hex) => u32::from_str_radix(hex, 16).ok()?,
                None => code.parse().ok()?,
            };
            char::from_u32(n)
        }
    }
}
