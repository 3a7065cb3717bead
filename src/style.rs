//! Typed helpers over the core style declaration set.

use ripple_core::Style;

/// Shorthand constructors for common CSS declarations.
///
/// All helpers append to the same [`Style`] value; the set renders as
/// one `style` attribute. Build the complete set for an element in a
/// single chain — two separate [`Style`] modifiers overwrite each other.
pub trait StyleExt: Sized {
    /// Appends a `color` declaration.
    #[must_use]
    fn color(self, value: impl Into<String>) -> Style;
    /// Appends a `background` declaration.
    #[must_use]
    fn background(self, value: impl Into<String>) -> Style;
    /// Appends a `font-size` declaration.
    #[must_use]
    fn font_size(self, value: impl Into<String>) -> Style;
    /// Appends a `font-family` declaration.
    #[must_use]
    fn font_family(self, value: impl Into<String>) -> Style;
    /// Appends a `margin` declaration.
    #[must_use]
    fn margin(self, value: impl Into<String>) -> Style;
    /// Appends a `padding` declaration.
    #[must_use]
    fn padding(self, value: impl Into<String>) -> Style;
    /// Appends a `width` declaration.
    #[must_use]
    fn width(self, value: impl Into<String>) -> Style;
    /// Appends a `height` declaration.
    #[must_use]
    fn height(self, value: impl Into<String>) -> Style;
    /// Appends a `display` declaration.
    #[must_use]
    fn display(self, value: impl Into<String>) -> Style;
    /// Appends a `text-align` declaration.
    #[must_use]
    fn text_align(self, value: impl Into<String>) -> Style;
}

impl StyleExt for Style {
    fn color(self, value: impl Into<String>) -> Style {
        self.declare("color", value)
    }

    fn background(self, value: impl Into<String>) -> Style {
        self.declare("background", value)
    }

    fn font_size(self, value: impl Into<String>) -> Style {
        self.declare("font-size", value)
    }

    fn font_family(self, value: impl Into<String>) -> Style {
        self.declare("font-family", value)
    }

    fn margin(self, value: impl Into<String>) -> Style {
        self.declare("margin", value)
    }

    fn padding(self, value: impl Into<String>) -> Style {
        self.declare("padding", value)
    }

    fn width(self, value: impl Into<String>) -> Style {
        self.declare("width", value)
    }

    fn height(self, value: impl Into<String>) -> Style {
        self.declare("height", value)
    }

    fn display(self, value: impl Into<String>) -> Style {
        self.declare("display", value)
    }

    fn text_align(self, value: impl Into<String>) -> Style {
        self.declare("text-align", value)
    }
}
