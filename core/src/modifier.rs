//! Modifiers: decorations attached to the element a view produces.

use std::rc::Rc;

use ripple_dom::{DomEvent, Listener};

use crate::{Builder, Environment, View};

/// One augmentation — an attribute, a style declaration set, or an event
/// binding — applied to the element its child view produces.
///
/// A modifier never introduces an element boundary: it merges into the
/// element the builder currently targets, which after the child's
/// lowering is the outermost element the child opened.
pub trait Modifier: 'static {
    /// Emits this modifier's merge instructions.
    fn build(self, env: &Environment, out: &mut Builder);
}

/// A view wrapped with one modifier.
///
/// Lowering builds the wrapped content first and the modifier second, so
/// chained modifiers apply base → A → B, with B able to overwrite
/// anything A merged.
pub struct ModifiedContent<V, M> {
    content: V,
    modifier: M,
}

impl<V: View, M: Modifier> ModifiedContent<V, M> {
    /// Wraps `content` with `modifier`.
    pub const fn new(content: V, modifier: M) -> Self {
        Self { content, modifier }
    }
}

impl<V: View, M: Modifier> View for ModifiedContent<V, M> {
    no_body!();

    fn build(self, env: &Environment, out: &mut Builder) {
        self.content.build(env, out);
        self.modifier.build(env, out);
    }
}

impl<V, M> core::fmt::Debug for ModifiedContent<V, M> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(core::any::type_name::<Self>())
    }
}

/// An attribute merge.
#[derive(Debug, Clone)]
pub struct Attr {
    name: String,
    value: Option<String>,
}

impl Attr {
    /// Sets an attribute to a value, overwriting any previous value
    /// under the same name.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(value.into()),
        }
    }

    /// Sets a boolean attribute by bare presence (`disabled`, `hidden`).
    pub fn flag(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: Some(String::new()),
        }
    }

    /// Removes the attribute if present.
    pub fn unset(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
        }
    }
}

impl Modifier for Attr {
    fn build(self, _env: &Environment, out: &mut Builder) {
        out.attribute(self.name, self.value);
    }
}

/// An event binding merge.
pub struct On {
    event: String,
    listener: Listener,
}

impl On {
    /// Binds `handler` to the named event on the target element,
    /// replacing any previous binding for the same event.
    pub fn new(event: impl Into<String>, handler: impl Fn(&DomEvent) + 'static) -> Self {
        Self {
            event: event.into(),
            listener: Rc::new(handler),
        }
    }
}

impl Modifier for On {
    fn build(self, _env: &Environment, out: &mut Builder) {
        out.listener(self.event, self.listener);
    }
}

impl core::fmt::Debug for On {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("On").field("event", &self.event).finish()
    }
}

/// An ordered set of style declarations merged as one `style` attribute.
///
/// The whole accumulated set renders as a single `;`-joined string and
/// merges under the single `style` key. Two independent `Style`
/// modifiers on one element therefore *overwrite* rather than union:
/// the later modifier's declarations fully replace the earlier one's.
/// Declarations meant to coexist belong in the same `Style` value.
#[derive(Debug, Clone, Default)]
pub struct Style {
    declarations: Vec<(String, String)>,
}

impl Style {
    /// Creates an empty declaration set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one `property: value` declaration.
    #[must_use]
    pub fn declare(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    /// Returns `true` if no declarations have been added.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// The joined declaration string, e.g. `color: red; margin: 0`.
    #[must_use]
    pub fn css(&self) -> String {
        self.declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value}"))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

impl Modifier for Style {
    fn build(self, _env: &Environment, out: &mut Builder) {
        out.attribute("style", Some(self.css()));
    }
}

#[cfg(test)]
mod tests {
    use ripple_dom::Document;

    use super::*;

    // A minimal element view, enough to exercise modifier targeting
    // without pulling in the element catalog.
    struct El<V>(&'static str, V);

    impl<V: View> View for El<V> {
        no_body!();

        fn build(self, env: &Environment, out: &mut Builder) {
            out.element(self.0, [], |b| self.1.build(env, b));
        }
    }

    // A composite whose body opens (and closes) an inner element before
    // its own outer element closes.
    struct Panel;

    impl View for Panel {
        fn body(self, _env: &Environment) -> impl View {
            El("section", El("p", "inner"))
        }
    }

    fn render(view: impl View) -> String {
        let env = Environment::new();
        let mut builder = Builder::new();
        view.build(&env, &mut builder);
        let mut document = Document::new();
        let root = document.root();
        builder.render(&mut document, root);
        document.inner_html(root)
    }

    #[test]
    fn attribute_modifier_attaches_to_the_produced_element() {
        let view = ModifiedContent::new(El("div", ()), Attr::new("id", "host"));
        assert_eq!(render(view), r#"<div id="host"></div>"#);
    }

    #[test]
    fn modifier_targets_the_outermost_element_of_a_composite() {
        let view = ModifiedContent::new(Panel, Attr::new("data-kind", "panel"));
        assert_eq!(
            render(view),
            r#"<section data-kind="panel"><p>inner</p></section>"#
        );
    }

    #[test]
    fn chained_modifiers_apply_in_order_and_later_wins() {
        let view = ModifiedContent::new(
            ModifiedContent::new(El("div", ()), Attr::new("title", "first")),
            Attr::new("title", "second"),
        );
        assert_eq!(render(view), r#"<div title="second"></div>"#);
    }

    #[test]
    fn unset_removes_an_attribute_set_earlier() {
        let view = ModifiedContent::new(
            ModifiedContent::new(El("input", ()), Attr::flag("disabled")),
            Attr::unset("disabled"),
        );
        assert_eq!(render(view), "<input>");
    }

    #[test]
    fn style_joins_its_whole_declaration_set() {
        let style = Style::new().declare("color", "red").declare("margin", "0");
        let view = ModifiedContent::new(El("div", ()), style);
        assert_eq!(render(view), r#"<div style="color: red; margin: 0"></div>"#);
    }

    #[test]
    fn independent_style_modifiers_overwrite_rather_than_union() {
        // The earlier declaration set is fully discarded; only the later
        // modifier's declarations survive.
        let first = Style::new().declare("color", "red");
        let second = Style::new().declare("margin", "0");
        let view = ModifiedContent::new(ModifiedContent::new(El("div", ()), first), second);
        assert_eq!(render(view), r#"<div style="margin: 0"></div>"#);
    }

    #[test]
    fn event_modifier_binds_a_listener() {
        let view = ModifiedContent::new(El("button", "go"), On::new("click", |_| {}));

        let env = Environment::new();
        let mut builder = Builder::new();
        view.build(&env, &mut builder);
        let mut document = Document::new();
        let root = document.root();
        builder.render(&mut document, root);

        let button = document.children(root)[0];
        assert!(document.listener(button, "click").is_some());
    }
}
