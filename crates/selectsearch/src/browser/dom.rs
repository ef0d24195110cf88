//! Live `<select>` element as an option source.

use selectsearch_core::NodeTree;
use selectsearch_widgets::{OptionSource, RawOption};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlOptionElement, HtmlSelectElement, Node};

/// Option source reading a `<select>` element on every call.
#[derive(Debug, Clone)]
pub struct DomSource {
    select: HtmlSelectElement,
}

impl DomSource {
    /// Wrap a select element.
    pub fn new(select: HtmlSelectElement) -> Self {
        Self { select }
    }

    /// Resolve a CSS selector to a select element.
    pub fn find(document: &Document, locator: &str) -> Option<Self> {
        document
            .query_selector(locator)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlSelectElement>().ok())
            .map(Self::new)
    }

    /// The bound element.
    pub fn element(&self) -> &HtmlSelectElement {
        &self.select
    }

    fn option_elements(&self) -> Vec<HtmlOptionElement> {
        let options = self.select.options();
        (0..options.length())
            .filter_map(|i| options.get_with_index(i))
            .filter_map(|el| el.dyn_into::<HtmlOptionElement>().ok())
            .collect()
    }

    fn notify_change(&self) {
        if let Ok(event) = web_sys::Event::new("change") {
            let _ = self.select.dispatch_event(&event);
        }
    }
}

fn raw_option(option: &HtmlOptionElement) -> RawOption {
    let optgroup = option
        .parent_element()
        .filter(|parent| parent.tag_name().eq_ignore_ascii_case("optgroup"));
    let group_disabled = optgroup
        .as_ref()
        .is_some_and(|group| group.has_attribute("disabled"));

    RawOption {
        value: option.value(),
        label: option.inner_html(),
        disabled: option.disabled() || group_disabled,
        group: optgroup.and_then(|group| group.get_attribute("label")),
        selected: option.selected(),
    }
}

impl OptionSource for DomSource {
    type Replacement = String;

    fn options(&self) -> Vec<RawOption> {
        self.option_elements().iter().map(raw_option).collect()
    }

    fn is_multiple(&self) -> bool {
        self.select.multiple()
    }

    fn set_selected(&mut self, value: &str, selected: bool) {
        if let Some(option) = self
            .option_elements()
            .into_iter()
            .find(|option| option.value() == value)
        {
            option.set_selected(selected);
            self.notify_change();
        }
    }

    fn replace(&mut self, markup: String) {
        self.select.set_inner_html(&markup);
    }
}

/// The live document, walked through `parentNode`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomTree;

impl NodeTree for DomTree {
    type Node = Node;

    fn parent(&self, node: &Node) -> Option<Node> {
        node.parent_node()
    }
}
