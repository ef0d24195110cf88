//! Integration tests for the selectsearch facade.

use selectsearch::browser::{list_html, markup::ACTIVE_CLASS};
use selectsearch::widgets::{Config, MemorySource, RawOption, SelectSearch};
use selectsearch::{Key, Rect, Widget};

fn grocery() -> MemorySource {
    MemorySource::single(vec![
        RawOption::new("a", "Apple").group("Fruit"),
        RawOption::new("b", "Banana").group("Fruit"),
        RawOption::new("c", "Cabbage").group("Veg"),
    ])
}

#[test]
fn test_widget_state_paints_to_markup() {
    let mut select = SelectSearch::new(grocery(), Config::default());
    select.layout(Rect::new(0.0, 0.0, 200.0, 32.0));
    select.open();
    select.handle_key(Key::Down);

    let html = list_html(select.rendered(), select.config(), Some(select.arrow_index()), true);
    assert_eq!(html.matches("ss-group").count(), 2);
    assert_eq!(html.matches(ACTIVE_CLASS).count(), 1);
    assert!(html.contains("ss-item ss-selected ss-active"));
}

#[test]
fn test_short_query_paints_nothing() {
    let config = Config::from_json(r#"{"min_length": 2}"#).unwrap();
    let mut select = SelectSearch::new(grocery(), config);
    select.open();
    select.set_query("b");

    let show_no_results = select.query().chars().count() >= select.config().min_length;
    assert!(!show_no_results);
    assert_eq!(list_html(select.rendered(), select.config(), None, show_no_results), "");
}
