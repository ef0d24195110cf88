//! JavaScript entry point.
//!
//! ```javascript
//! import init, { SelectSearchHandle } from './selectsearch.js';
//!
//! await init();
//! const country = new SelectSearchHandle('#country', {
//!     list_limit: 20,
//!     custom_class: { placeholder: 'form-select' },
//!     render: (option) => `<span class="flag-${option.value}"></span> ${option.label}`,
//!     onSelect: (item, value, text) => console.log(value, text),
//! });
//! country.setValue('it');
//! ```

use super::dom::{DomSource, DomTree};
use super::events::{
    closest_target, dom_rect_to_rect, event_target_node, keyboard_event_to_selectsearch,
};
use super::markup::{
    list_html, CONTAINER_CLASS, INDEX_ATTR, INPUT_CLASS, ITEM_CLASS, LIST_CLASS, MODAL_CLASS,
    PLACEHOLDER_CLASS, VALUE_ATTR,
};
use selectsearch_core::{AccessibleRole, Event, Widget};
use selectsearch_widgets::{
    ClassTarget, Config, KeyConsumed, RawOption, RenderHook, SelectEvent, SelectSearch,
};
use std::cell::RefCell;
use std::rc::Rc;
use tracing::debug;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    window, Document, Element, EventTarget, HtmlElement, HtmlInputElement, HtmlSelectElement,
    KeyboardEvent, Node,
};

/// Searchable dropdown attached to a `<select>` element.
///
/// When the locator matches nothing the handle is inert: a warning is
/// written to the console and every method does nothing. Freeing the handle
/// detaches its event listeners.
#[wasm_bindgen]
pub struct SelectSearchHandle {
    mounted: Option<Rc<Mounted>>,
    listeners: Vec<Listener>,
}

#[wasm_bindgen]
impl SelectSearchHandle {
    /// Bind to the first `<select>` matching `locator`.
    ///
    /// `options` is merged over the default configuration; its `render`
    /// and `onSelect` functions become the render and selection hooks.
    #[wasm_bindgen(constructor)]
    pub fn new(locator: &str, options: JsValue) -> Result<SelectSearchHandle, JsValue> {
        console_error_panic_hook::set_once();

        let config = read_config(&options)?;
        let document = window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let binder = |locator: &str| DomSource::find(&document, locator);
        let widget = match SelectSearch::bind(&binder, locator, config) {
            Ok(widget) => widget,
            Err(err) => {
                web_sys::console::warn_1(&JsValue::from_str(&format!("SelectSearch: {err}")));
                return Ok(Self::inert());
            }
        };

        let pending = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&pending);
        let mut widget = widget
            .with_accessible_name(locator)
            .with_on_select(Box::new(move |event: &SelectEvent| {
                sink.borrow_mut().push(event.clone());
            }));
        if let Some(render) = read_function(&options, "render") {
            widget = widget.with_render(js_render_hook(render));
        }

        let skeleton = Skeleton::mount(&document, widget.source().element(), widget.config())?;
        let mounted = Rc::new(Mounted {
            widget: RefCell::new(widget),
            skeleton,
            pending,
            on_select: read_function(&options, "onSelect"),
        });
        mounted.with_widget(|_| ());

        let listeners = wire(&document, &mounted)?;
        debug!(locator, "selectsearch: mounted");
        Ok(Self {
            mounted: Some(mounted),
            listeners,
        })
    }

    /// Show the overlay.
    pub fn open(&self) {
        if let Some(m) = &self.mounted {
            m.with_widget(|w| {
                m.sync_layout(w);
                w.open();
            });
        }
    }

    /// Hide the overlay.
    pub fn close(&self) {
        if let Some(m) = &self.mounted {
            m.with_widget(SelectSearch::close);
        }
    }

    /// Open when closed, close when open.
    pub fn toggle_open(&self) {
        if let Some(m) = &self.mounted {
            m.with_widget(|w| {
                m.sync_layout(w);
                w.toggle_open();
            });
        }
    }

    /// Whether the overlay is visible.
    pub fn is_open(&self) -> bool {
        self.mounted
            .as_ref()
            .and_then(|m| m.widget.try_borrow().ok().map(|w| w.is_open()))
            .unwrap_or(false)
    }

    /// Selected value: a string in single mode, an array in multiple mode.
    #[wasm_bindgen(js_name = getValue)]
    pub fn get_value(&self) -> JsValue {
        self.mounted
            .as_ref()
            .and_then(|m| m.widget.try_borrow().ok().map(|w| w.value()))
            .and_then(|value| serde_json::to_string(&value).ok())
            .and_then(|json| js_sys::JSON::parse(&json).ok())
            .unwrap_or(JsValue::UNDEFINED)
    }

    /// Select (single) or toggle (multiple) `value`.
    #[wasm_bindgen(js_name = setValue)]
    pub fn set_value(&self, value: &str) {
        if let Some(m) = &self.mounted {
            m.with_widget(|w| {
                w.set_value(value);
            });
        }
    }

    /// Replace the `<select>` content with `markup` and select `value`, or
    /// the first listed option.
    #[wasm_bindgen(js_name = updateOptionsList)]
    pub fn update_options_list(&self, markup: &str, value: Option<String>) {
        if let Some(m) = &self.mounted {
            m.with_widget(|w| {
                w.update_options_list(markup.to_string(), value.as_deref());
            });
        }
    }
}

impl SelectSearchHandle {
    fn inert() -> Self {
        Self {
            mounted: None,
            listeners: Vec::new(),
        }
    }

    /// Whether the handle is bound to an element.
    pub fn is_bound(&self) -> bool {
        self.mounted.is_some()
    }
}

/// Elements created next to the bound `<select>`.
struct Skeleton {
    container: HtmlElement,
    placeholder: HtmlElement,
    modal: HtmlElement,
    input: HtmlInputElement,
    list: HtmlElement,
}

fn create_div(document: &Document, class: &str) -> Result<HtmlElement, JsValue> {
    let element = document.create_element("div")?.dyn_into::<HtmlElement>()?;
    element.set_class_name(class);
    Ok(element)
}

impl Skeleton {
    fn mount(
        document: &Document,
        select: &HtmlSelectElement,
        config: &Config,
    ) -> Result<Self, JsValue> {
        let container = create_div(
            document,
            &config.class_list(CONTAINER_CLASS, ClassTarget::Container),
        )?;

        let placeholder = create_div(
            document,
            &config.class_list(PLACEHOLDER_CLASS, ClassTarget::Placeholder),
        )?;
        placeholder.set_attribute("role", AccessibleRole::ComboBox.aria())?;
        placeholder.set_attribute("aria-expanded", "false")?;
        placeholder.set_tab_index(0);

        let modal = create_div(document, MODAL_CLASS)?;
        modal.style().set_property("display", "none")?;

        let input = document
            .create_element("input")?
            .dyn_into::<HtmlInputElement>()?;
        input.set_type("text");
        input.set_class_name(&config.class_list(INPUT_CLASS, ClassTarget::Input));
        input.set_placeholder(&config.lang.search);
        input.set_attribute("role", AccessibleRole::SearchBox.aria())?;
        input.set_attribute("autocomplete", "off")?;

        let list = create_div(document, &config.class_list(LIST_CLASS, ClassTarget::List))?;
        list.set_attribute("role", AccessibleRole::ListBox.aria())?;
        if select.multiple() {
            list.set_attribute("aria-multiselectable", "true")?;
        }

        modal.append_child(&input)?;
        modal.append_child(&list)?;
        container.append_child(&placeholder)?;
        container.append_child(&modal)?;

        if let Some(parent) = select.parent_node() {
            parent.insert_before(&container, select.next_sibling().as_ref())?;
        }
        select.style().set_property("display", "none")?;

        Ok(Self {
            container,
            placeholder,
            modal,
            input,
            list,
        })
    }
}

/// Shared state behind every listener.
struct Mounted {
    widget: RefCell<SelectSearch<DomSource>>,
    skeleton: Skeleton,
    pending: Rc<RefCell<Vec<SelectEvent>>>,
    on_select: Option<js_sys::Function>,
}

impl Mounted {
    /// Run `f`, repaint, then deliver selection notifications.
    ///
    /// Notifications go out after the widget is released so the host's
    /// `onSelect` may call back into the handle.
    fn with_widget<R>(&self, f: impl FnOnce(&mut SelectSearch<DomSource>) -> R) -> Option<R> {
        let result = {
            let Ok(mut widget) = self.widget.try_borrow_mut() else {
                web_sys::console::warn_1(&JsValue::from_str(
                    "SelectSearch: ignoring call made while the widget is busy",
                ));
                return None;
            };
            let result = f(&mut widget);
            self.paint(&mut widget);
            result
        };
        self.flush_notifications();
        Some(result)
    }

    fn sync_layout(&self, widget: &mut SelectSearch<DomSource>) {
        let rect = self.skeleton.placeholder.get_bounding_client_rect();
        widget.layout(dom_rect_to_rect(&rect));
    }

    fn paint(&self, widget: &mut SelectSearch<DomSource>) {
        let sk = &self.skeleton;
        let open = widget.is_open();

        sk.placeholder.set_inner_html(&widget.placeholder().content);
        let modal_style = sk.modal.style();
        let styled = sk
            .placeholder
            .set_attribute("aria-expanded", if open { "true" } else { "false" })
            .and_then(|()| modal_style.set_property("display", if open { "block" } else { "none" }))
            .and_then(|()| {
                if open {
                    modal_style.set_property("width", &format!("{}px", widget.overlay().width()))
                } else {
                    Ok(())
                }
            });
        if let Err(err) = styled {
            debug!(?err, "selectsearch: overlay styling failed");
        }

        let show_no_results = widget.query().chars().count() >= widget.config().min_length;
        let active = open.then(|| widget.arrow_index());
        sk.list.set_inner_html(&list_html(
            widget.rendered(),
            widget.config(),
            active,
            show_no_results,
        ));
        if sk.input.value() != widget.query() {
            sk.input.set_value(widget.query());
        }

        if open {
            self.measure(widget);
            sk.list.set_scroll_top(widget.scroll_offset() as i32);
        }
        if widget.take_focus_request() {
            if let Err(err) = sk.input.focus() {
                debug!(?err, "selectsearch: focusing the filter input failed");
            }
        }
    }

    fn measure(&self, widget: &mut SelectSearch<DomSource>) {
        if widget.rendered().is_empty() {
            return;
        }
        let list = &self.skeleton.list;
        let row_height = list
            .first_element_child()
            .map(|row| row.get_bounding_client_rect().height() as f32)
            .filter(|height| *height > 0.0);
        if let Some(row_height) = row_height {
            widget.set_list_metrics(list.client_height() as f32, row_height);
        }
    }

    fn flush_notifications(&self) {
        let events: Vec<SelectEvent> = self.pending.borrow_mut().drain(..).collect();
        let Some(callback) = &self.on_select else {
            return;
        };
        for event in events {
            let item = self.find_item(&event.value).map_or(JsValue::NULL, JsValue::from);
            if let Err(err) = callback.call3(
                &JsValue::NULL,
                &item,
                &JsValue::from_str(&event.value),
                &JsValue::from_str(&event.text),
            ) {
                web_sys::console::warn_2(&JsValue::from_str("SelectSearch: onSelect threw"), &err);
            }
        }
    }

    fn find_item(&self, value: &str) -> Option<Element> {
        let children = self.skeleton.list.children();
        (0..children.length())
            .filter_map(|i| children.item(i))
            .find(|el| el.get_attribute(VALUE_ATTR).as_deref() == Some(value))
    }
}

/// Event listener removed from its target on drop.
struct Listener {
    target: EventTarget,
    kind: &'static str,
    closure: Closure<dyn FnMut(web_sys::Event)>,
}

impl Listener {
    fn attach(
        target: &EventTarget,
        kind: &'static str,
        handler: impl FnMut(web_sys::Event) + 'static,
    ) -> Result<Self, JsValue> {
        let closure = Closure::<dyn FnMut(web_sys::Event)>::new(handler);
        target.add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            kind,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.kind, self.closure.as_ref().unchecked_ref());
    }
}

fn wire(document: &Document, mounted: &Rc<Mounted>) -> Result<Vec<Listener>, JsValue> {
    let sk = &mounted.skeleton;
    let mut listeners = Vec::with_capacity(6);

    let m = Rc::clone(mounted);
    listeners.push(Listener::attach(&sk.placeholder, "click", move |_| {
        m.with_widget(|w| {
            m.sync_layout(w);
            w.toggle_open();
        });
    })?);

    let m = Rc::clone(mounted);
    listeners.push(Listener::attach(document, "click", move |event| {
        let target = event_target_node(&event);
        let root: Node = m.skeleton.container.clone().into();
        if m.widget.try_borrow().is_ok_and(|w| w.is_open()) {
            m.with_widget(|w| w.handle_outside_click(&DomTree, &root, target.as_ref()));
        }
    })?);

    let m = Rc::clone(mounted);
    listeners.push(Listener::attach(&sk.list, "click", move |event| {
        // The repaint replaces the clicked item, so the document listener
        // would see a detached target.
        event.stop_propagation();
        let index = closest_target(&event, &format!(".{ITEM_CLASS}"))
            .and_then(|item| item.get_attribute(INDEX_ATTR))
            .and_then(|index| index.parse::<usize>().ok());
        if let Some(index) = index {
            m.with_widget(|w| w.click_item(index));
        }
    })?);

    let m = Rc::clone(mounted);
    listeners.push(Listener::attach(&sk.input, "input", move |_| {
        let text = m.skeleton.input.value();
        m.with_widget(|w| w.event(&Event::TextInput { text }));
    })?);

    let m = Rc::clone(mounted);
    listeners.push(Listener::attach(&sk.input, "keyup", move |event| {
        if let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() {
            let key_event = keyboard_event_to_selectsearch(keyboard, "keyup");
            m.with_widget(|w| w.event(&key_event));
        }
    })?);

    let m = Rc::clone(mounted);
    listeners.push(Listener::attach(&sk.input, "keydown", move |event| {
        let Some(keyboard) = event.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        let key_event = keyboard_event_to_selectsearch(keyboard, "keydown");
        let consumed = m
            .with_widget(|w| w.event(&key_event).is_some_and(|msg| msg.is::<KeyConsumed>()))
            .unwrap_or(false);
        if consumed {
            event.prevent_default();
        }
    })?);

    let m = Rc::clone(mounted);
    listeners.push(Listener::attach(&sk.list, "scroll", move |_| {
        let top = m.skeleton.list.scroll_top() as f32;
        if let Ok(mut w) = m.widget.try_borrow_mut() {
            w.set_scroll_offset(top);
        }
    })?);

    Ok(listeners)
}

fn read_config(options: &JsValue) -> Result<Config, JsValue> {
    if options.is_undefined() || options.is_null() {
        return Ok(Config::default());
    }
    let json: String = js_sys::JSON::stringify(options)?.into();
    Config::from_json(&json).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn read_function(options: &JsValue, name: &str) -> Option<js_sys::Function> {
    if !options.is_object() {
        return None;
    }
    js_sys::Reflect::get(options, &JsValue::from_str(name))
        .ok()?
        .dyn_into::<js_sys::Function>()
        .ok()
}

fn js_render_hook(render: js_sys::Function) -> RenderHook {
    Box::new(move |raw: &RawOption| {
        let option = serde_json::to_string(raw)
            .ok()
            .and_then(|json| js_sys::JSON::parse(&json).ok())
            .unwrap_or(JsValue::NULL);
        render
            .call1(&JsValue::NULL, &option)
            .ok()
            .and_then(|markup| markup.as_string())
            .unwrap_or_else(|| raw.label.clone())
    })
}
