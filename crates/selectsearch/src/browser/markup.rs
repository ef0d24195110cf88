//! HTML for the overlay list.
//!
//! Item content comes from the render hook and is inserted as markup;
//! group labels, values and localized strings are escaped.

use selectsearch_core::AccessibleRole;
use selectsearch_widgets::{ClassTarget, Config, RenderedItem, RenderedList};
use std::fmt::Write;

/// Outer container class.
pub const CONTAINER_CLASS: &str = "ss-container";
/// Placeholder class.
pub const PLACEHOLDER_CLASS: &str = "ss-placeholder";
/// Floating panel class.
pub const MODAL_CLASS: &str = "ss-modal";
/// Filter input class.
pub const INPUT_CLASS: &str = "ss-input";
/// Item list class.
pub const LIST_CLASS: &str = "ss-list";
/// Group heading class.
pub const GROUP_CLASS: &str = "ss-group";
/// Item class.
pub const ITEM_CLASS: &str = "ss-item";
/// "No results" message class.
pub const EMPTY_CLASS: &str = "ss-empty";
/// Modifier for checked items.
pub const SELECTED_CLASS: &str = "ss-selected";
/// Modifier for the item under the arrow cursor.
pub const ACTIVE_CLASS: &str = "ss-active";

/// Attribute carrying an item's display index.
pub const INDEX_ATTR: &str = "data-index";
/// Attribute carrying an item's value.
pub const VALUE_ATTR: &str = "data-value";

/// Escape text for use in element content or a quoted attribute.
#[must_use]
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Markup for the whole list.
///
/// `active` marks the item under the arrow cursor. When nothing rendered
/// and `show_no_results` is set, the localized message is shown instead.
#[must_use]
pub fn list_html(
    list: &RenderedList,
    config: &Config,
    active: Option<usize>,
    show_no_results: bool,
) -> String {
    let mut html = String::new();
    if list.is_empty() {
        if show_no_results {
            let _ = write!(
                html,
                "<div class=\"{EMPTY_CLASS}\">{}</div>",
                escape_html(&config.lang.no_results)
            );
        }
        return html;
    }

    let group_class = config.class_list(GROUP_CLASS, ClassTarget::Group);
    let mut index = 0;
    for section in list.sections() {
        if let Some(label) = &section.label {
            let _ = write!(
                html,
                "<div class=\"{}\" role=\"presentation\">{}</div>",
                escape_html(&group_class),
                escape_html(label)
            );
        }
        for item in &section.items {
            html.push_str(&item_html(item, index, active == Some(index), config));
            index += 1;
        }
    }
    html
}

/// Markup for one item.
#[must_use]
pub fn item_html(item: &RenderedItem, index: usize, active: bool, config: &Config) -> String {
    let mut class = config.class_list(ITEM_CLASS, ClassTarget::Item);
    if item.selected {
        class.push(' ');
        class.push_str(SELECTED_CLASS);
    }
    if active {
        class.push(' ');
        class.push_str(ACTIVE_CLASS);
    }
    format!(
        "<div class=\"{}\" role=\"{}\" aria-selected=\"{}\" {INDEX_ATTR}=\"{index}\" {VALUE_ATTR}=\"{}\">{}</div>",
        escape_html(&class),
        AccessibleRole::Option.aria(),
        item.selected,
        escape_html(&item.value),
        item.content
    )
}
