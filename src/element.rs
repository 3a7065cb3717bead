//! The element catalog.
//!
//! Every constructor here is a one-line call into the core's fixed entry
//! points: an element view opens its tag with an initial attribute set,
//! lowers its content as children, and closes the tag. The catalog knows
//! nothing the builder doesn't; containment legality lives in
//! [`schema`](crate::schema), not here.

use ripple_core::{Builder, Environment, View, no_body};

/// An element view: a tag, its initial attributes, and its content.
#[derive(Debug)]
pub struct El<V> {
    tag: &'static str,
    attributes: Vec<(String, String)>,
    content: V,
}

impl<V: View> El<V> {
    /// Creates an element view for `tag` wrapping `content`.
    pub const fn new(tag: &'static str, content: V) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            content,
        }
    }

    /// Adds an initial attribute, overwriting an earlier one of the same
    /// name.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attributes.push((name, value));
        }
        self
    }
}

impl<V: View> View for El<V> {
    no_body!();

    fn build(self, env: &Environment, out: &mut Builder) {
        out.element(self.tag, self.attributes, |b| self.content.build(env, b));
    }
}

/// A void element view: a tag and attributes, no content.
#[derive(Debug, Clone)]
pub struct Void {
    tag: &'static str,
    attributes: Vec<(String, String)>,
}

impl Void {
    /// Creates a void element view for `tag`.
    #[must_use]
    pub const fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
        }
    }

    /// Adds an initial attribute, overwriting an earlier one of the same
    /// name.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(existing) = self.attributes.iter_mut().find(|(n, _)| *n == name) {
            existing.1 = value;
        } else {
            self.attributes.push((name, value));
        }
        self
    }
}

impl View for Void {
    no_body!();

    fn build(self, _env: &Environment, out: &mut Builder) {
        out.element(self.tag, self.attributes, |_| {});
    }
}

macro_rules! elements {
    ($($name:ident),* $(,)?) => {
        $(
            paste::paste! {
                #[doc = "Creates a `<" $name ">` element wrapping `content`."]
                pub fn $name<V: View>(content: V) -> El<V> {
                    El::new(stringify!($name), content)
                }
            }
        )*
    };
}

elements!(
    div, section, article, header, footer, nav, aside, h1, h2, h3, h4, h5, h6, p, span, em,
    strong, small, pre, code, blockquote, ul, ol, li, table, caption, thead, tbody, tfoot, tr,
    td, th, button, label, form, select, option, textarea, figure, figcaption,
);

/// Creates an `<a>` element with an `href`.
pub fn a<V: View>(href: impl Into<String>, content: V) -> El<V> {
    El::new("a", content).attr("href", href)
}

/// Creates a `<br>` element.
#[must_use]
pub fn br() -> Void {
    Void::new("br")
}

/// Creates an `<hr>` element.
#[must_use]
pub fn hr() -> Void {
    Void::new("hr")
}

/// Creates an `<img>` element with a `src`.
pub fn img(src: impl Into<String>) -> Void {
    Void::new("img").attr("src", src)
}

/// Creates an `<input>` element with a `type`.
pub fn input(kind: impl Into<String>) -> Void {
    Void::new("input").attr("type", kind)
}

#[cfg(test)]
mod tests {
    use ripple_core::Environment;
    use ripple_dom::Document;

    use super::*;

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
    fn constructors_emit_their_tags() {
        assert_eq!(render(div("x")), "<div>x</div>");
        assert_eq!(render(h1("title")), "<h1>title</h1>");
        assert_eq!(render(ul((li("a"), li("b")))), "<ul><li>a</li><li>b</li></ul>");
    }

    #[test]
    fn initial_attributes_render_before_content() {
        assert_eq!(
            render(div("x").attr("class", "c").attr("lang", "en")),
            r#"<div class="c" lang="en">x</div>"#
        );
    }

    #[test]
    fn duplicate_initial_attribute_overwrites() {
        assert_eq!(
            render(div(()).attr("class", "a").attr("class", "b")),
            r#"<div class="b"></div>"#
        );
    }

    #[test]
    fn anchors_carry_their_href() {
        assert_eq!(
            render(a("https://example.org", "link")),
            r#"<a href="https://example.org">link</a>"#
        );
    }

    #[test]
    fn void_elements_render_without_closing_tags() {
        assert_eq!(render(br()), "<br>");
        assert_eq!(render(img("x.png")), r#"<img src="x.png">"#);
        assert_eq!(render(input("text")), r#"<input type="text">"#);
    }

    #[test]
    #[should_panic(expected = "must not be evaluated")]
    fn element_views_reject_body() {
        let env = Environment::new();
        let _ = div("x").body(&env);
    }
}
