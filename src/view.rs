//! Extension methods available on every view.

use ripple_core::{AnyView, Attr, ModifiedContent, Modifier, On, Style, View};
use ripple_dom::DomEvent;

/// Extension trait for views, adding the common modifier shorthands.
///
/// Every method wraps `self` in a [`ModifiedContent`]; the augmentation
/// attaches to the element the wrapped view produces (the outermost one,
/// for composite views). Later modifiers overwrite earlier ones that
/// merge under the same key.
pub trait ViewExt: View + Sized {
    /// Attaches an arbitrary modifier to this view.
    fn modifier<M: Modifier>(self, modifier: M) -> ModifiedContent<Self, M> {
        ModifiedContent::new(self, modifier)
    }

    /// Sets an attribute on the produced element.
    fn attr(self, name: impl Into<String>, value: impl Into<String>) -> ModifiedContent<Self, Attr> {
        self.modifier(Attr::new(name, value))
    }

    /// Sets a boolean attribute (`disabled`, `hidden`) by bare presence.
    fn flag(self, name: impl Into<String>) -> ModifiedContent<Self, Attr> {
        self.modifier(Attr::flag(name))
    }

    /// Sets the `class` attribute.
    fn class(self, value: impl Into<String>) -> ModifiedContent<Self, Attr> {
        self.attr("class", value)
    }

    /// Sets the `id` attribute.
    fn id(self, value: impl Into<String>) -> ModifiedContent<Self, Attr> {
        self.attr("id", value)
    }

    /// Applies a style declaration set.
    ///
    /// The whole set merges as one `style` attribute: applying a second
    /// set to the same element replaces the first one entirely.
    fn style(self, style: Style) -> ModifiedContent<Self, Style> {
        self.modifier(style)
    }

    /// Binds an event handler on the produced element.
    fn on(
        self,
        event: impl Into<String>,
        handler: impl Fn(&DomEvent) + 'static,
    ) -> ModifiedContent<Self, On> {
        self.modifier(On::new(event, handler))
    }

    /// Binds a `click` handler that ignores the event payload.
    fn on_click(self, handler: impl Fn() + 'static) -> ModifiedContent<Self, On> {
        self.on("click", move |_| handler())
    }

    /// Converts this view to an [`AnyView`] type-erased container.
    fn anyview(self) -> AnyView {
        AnyView::new(self)
    }
}

impl<V: View + Sized> ViewExt for V {}
