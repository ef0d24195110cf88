//! Browser event handling - converts web events to selectsearch Events.

use selectsearch_core::{Event, Key, Rect};
use wasm_bindgen::JsCast;
use web_sys::{DomRect, Element, KeyboardEvent, Node};

/// Convert a web_sys KeyboardEvent to a selectsearch Event.
pub fn keyboard_event_to_selectsearch(event: &KeyboardEvent, event_type: &str) -> Event {
    let key = Key::from_key_name(&event.key());

    match event_type {
        "keyup" => Event::KeyUp { key },
        _ => Event::KeyDown { key },
    }
}

/// Layout rectangle of a DOM rect, in viewport coordinates.
pub fn dom_rect_to_rect(rect: &DomRect) -> Rect {
    Rect::new(
        rect.x() as f32,
        rect.y() as f32,
        rect.width() as f32,
        rect.height() as f32,
    )
}

/// Node an event was dispatched to, if it is one.
pub fn event_target_node(event: &web_sys::Event) -> Option<Node> {
    event.target().and_then(|t| t.dyn_into::<Node>().ok())
}

/// Closest ancestor-or-self of the event target matching `selector`.
pub fn closest_target(event: &web_sys::Event, selector: &str) -> Option<Element> {
    event
        .target()
        .and_then(|t| t.dyn_into::<Element>().ok())
        .and_then(|el| el.closest(selector).ok().flatten())
}
