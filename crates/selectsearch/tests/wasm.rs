//! WASM browser tests - run with `wasm-pack test --headless --chrome`

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

use selectsearch::browser::{DomSource, DomTree, SelectSearchHandle};
use selectsearch::widgets::{OptionSource, RawOption};
use selectsearch::{contains, NodeTree};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlSelectElement, Node};

fn document() -> Document {
    web_sys::window()
        .and_then(|w| w.document())
        .expect("document")
}

fn mount_select(id: &str, multiple: bool, markup: &str) -> HtmlSelectElement {
    let doc = document();
    let select = doc
        .create_element("select")
        .expect("create select")
        .dyn_into::<HtmlSelectElement>()
        .expect("select element");
    select.set_id(id);
    select.set_multiple(multiple);
    select.set_inner_html(markup);
    doc.body()
        .expect("body")
        .append_child(&select)
        .expect("append");
    select
}

const FRUIT: &str = "<option value=\"\">-- choose --</option>\
                     <option value=\"a\">Apple</option>\
                     <option value=\"b\">Banana</option>";

const GROCERY: &str = "<optgroup label=\"Fruit\"><option value=\"a\">Apple</option>\
                       <option value=\"b\">Banana</option></optgroup>\
                       <optgroup label=\"Veg\" disabled><option value=\"c\">Cabbage</option></optgroup>";

// ============================================================================
// DomSource Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_dom_source_reads_options() {
    let select = mount_select("dom-source-read", false, GROCERY);
    let source = DomSource::new(select);
    let options = source.options();

    assert_eq!(options.len(), 3);
    assert_eq!(options[0].group.as_deref(), Some("Fruit"));
    assert_eq!(options[1].label, "Banana");
    assert!(options[2].disabled);
    assert!(options[0].selected);
    assert!(!source.is_multiple());
}

#[wasm_bindgen_test]
fn test_dom_source_set_selected_and_replace() {
    let select = mount_select("dom-source-write", true, FRUIT);
    let mut source = DomSource::new(select.clone());
    source.set_selected("b", true);
    assert!(source.options().iter().any(|o: &RawOption| o.value == "b" && o.selected));

    source.replace("<option value=\"x\">Xigua</option>".to_string());
    assert_eq!(select.options().length(), 1);
}

#[wasm_bindgen_test]
fn test_dom_tree_containment() {
    let doc = document();
    let outer: Node = doc.create_element("div").expect("div").into();
    let inner: Node = doc.create_element("span").expect("span").into();
    outer.append_child(&inner).expect("append");

    assert!(contains(&DomTree, &outer, Some(&inner)));
    assert!(!contains(&DomTree, &inner, Some(&outer)));
    assert_eq!(DomTree.parent(&inner), Some(outer));
}

// ============================================================================
// Handle Tests
// ============================================================================

#[wasm_bindgen_test]
fn test_missing_locator_is_inert() {
    let handle = SelectSearchHandle::new("#does-not-exist", JsValue::UNDEFINED).expect("handle");
    assert!(!handle.is_bound());
    handle.open();
    assert!(!handle.is_open());
    handle.set_value("a");
    handle.update_options_list("<option>x</option>", None);
    assert!(handle.get_value().is_undefined());
}

#[wasm_bindgen_test]
fn test_handle_single_selection() {
    mount_select("handle-single", false, FRUIT);
    let handle = SelectSearchHandle::new("#handle-single", JsValue::UNDEFINED).expect("handle");
    assert!(handle.is_bound());
    assert_eq!(handle.get_value().as_string().as_deref(), Some(""));

    handle.set_value("b");
    assert_eq!(handle.get_value().as_string().as_deref(), Some("b"));

    let placeholder = document()
        .query_selector("#handle-single + .ss-container .ss-placeholder")
        .expect("query")
        .expect("placeholder");
    assert_eq!(placeholder.text_content().as_deref(), Some("Banana"));
}

#[wasm_bindgen_test]
fn test_handle_open_close() {
    mount_select("handle-open", false, FRUIT);
    let handle = SelectSearchHandle::new("#handle-open", JsValue::UNDEFINED).expect("handle");

    handle.toggle_open();
    assert!(handle.is_open());
    let items = document()
        .query_selector_all("#handle-open + .ss-container .ss-item")
        .expect("items");
    assert_eq!(items.length(), 2);

    handle.close();
    assert!(!handle.is_open());
}

#[wasm_bindgen_test]
fn test_handle_paints_overlay_state() {
    mount_select("handle-paint", false, FRUIT);
    let handle = SelectSearchHandle::new("#handle-paint", JsValue::UNDEFINED).expect("handle");
    let doc = document();
    let placeholder = doc
        .query_selector("#handle-paint + .ss-container .ss-placeholder")
        .expect("query")
        .expect("placeholder");
    let modal = doc
        .query_selector("#handle-paint + .ss-container .ss-modal")
        .expect("query")
        .expect("modal")
        .dyn_into::<HtmlElement>()
        .expect("html element");

    handle.open();
    assert_eq!(placeholder.get_attribute("aria-expanded").as_deref(), Some("true"));
    assert_eq!(modal.style().get_property_value("display").as_deref(), Ok("block"));

    handle.close();
    assert_eq!(placeholder.get_attribute("aria-expanded").as_deref(), Some("false"));
    assert_eq!(modal.style().get_property_value("display").as_deref(), Ok("none"));
}

#[wasm_bindgen_test]
fn test_handle_multiple_value_is_array() {
    mount_select("handle-multi", true, FRUIT);
    let handle = SelectSearchHandle::new("#handle-multi", JsValue::UNDEFINED).expect("handle");
    handle.set_value("a");
    handle.set_value("b");

    let value = handle.get_value();
    let array = value.dyn_ref::<js_sys::Array>().expect("array");
    assert_eq!(array.length(), 2);

    handle.set_value("a");
    let array: js_sys::Array = handle.get_value().unchecked_into();
    assert_eq!(array.get(0).as_string().as_deref(), Some("b"));
}

#[wasm_bindgen_test]
fn test_handle_update_options_list() {
    mount_select("handle-update", false, FRUIT);
    let handle = SelectSearchHandle::new("#handle-update", JsValue::UNDEFINED).expect("handle");
    handle.update_options_list(
        "<option value=\"x\">Xigua</option><option value=\"y\">Yuzu</option>",
        Some("y".to_string()),
    );
    assert_eq!(handle.get_value().as_string().as_deref(), Some("y"));
}

#[wasm_bindgen_test]
fn test_handle_invalid_config_rejected() {
    mount_select("handle-bad-config", false, FRUIT);
    let options = js_sys::JSON::parse(r#"{"list_limit": -5}"#).expect("json");
    assert!(SelectSearchHandle::new("#handle-bad-config", options).is_err());
}

#[wasm_bindgen_test]
fn test_handle_custom_class_applied() {
    mount_select("handle-class", false, FRUIT);
    let options = js_sys::JSON::parse(r#"{"custom_class": {"placeholder": "form-select"}}"#)
        .expect("json");
    let _handle = SelectSearchHandle::new("#handle-class", options).expect("handle");
    let placeholder = document()
        .query_selector("#handle-class + .ss-container .ss-placeholder")
        .expect("query")
        .expect("placeholder")
        .dyn_into::<HtmlElement>()
        .expect("html element");
    assert_eq!(placeholder.class_name(), "ss-placeholder form-select");
}
