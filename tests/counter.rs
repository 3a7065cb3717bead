//! End-to-end behavior of the worked counter example.

use ripple::dom::DomEvent;
use ripple::prelude::*;

struct Counter;

impl View for Counter {
    fn body(self, env: &Environment) -> impl View {
        let count = env.state(0i32);
        let clicks = count.clone();
        div(count.get().to_string())
            .id("value")
            .on_click(move || clicks.update(|n| *n += 1))
    }
}

#[test]
fn counter_lowers_to_a_div_with_the_current_value() {
    let app = App::new(|| Counter).launch();
    assert_eq!(
        app.html(),
        r#"<div id="value">0</div>"#
    );
    assert_eq!(app.renderer().passes(), 1);
}

#[test]
fn a_click_synchronously_replaces_the_rendered_content() {
    let app = App::new(|| Counter).launch();

    assert!(app.dispatch_by_id("value", &DomEvent::new("click")));
    assert_eq!(app.html(), r#"<div id="value">1</div>"#);
    assert_eq!(app.renderer().passes(), 2);

    assert!(app.dispatch_by_id("value", &DomEvent::new("click")));
    assert_eq!(app.html(), r#"<div id="value">2</div>"#);
}

#[test]
fn dispatch_to_a_missing_element_is_reported() {
    let app = App::new(|| Counter).launch();
    assert!(!app.dispatch_by_id("absent", &DomEvent::new("click")));
    assert_eq!(app.renderer().passes(), 1);
}

struct DoubleWriter;

impl View for DoubleWriter {
    fn body(self, env: &Environment) -> impl View {
        let count = env.state(0i32);
        let writer = count.clone();
        div(count.get().to_string())
            .id("value")
            .on_click(move || {
                // Two writes in one handler: two full passes, no
                // coalescing.
                writer.update(|n| *n += 1);
                writer.update(|n| *n += 1);
            })
    }
}

#[test]
fn writes_within_one_handler_are_not_coalesced() {
    let app = App::new(|| DoubleWriter).launch();
    assert_eq!(app.renderer().passes(), 1);

    app.dispatch_by_id("value", &DomEvent::new("click"));
    assert_eq!(app.renderer().passes(), 3);
    assert_eq!(app.html(), r#"<div id="value">2</div>"#);
}
