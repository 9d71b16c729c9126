//! CSS property names.

use std::fmt;

use serde::{Serialize, Serializer};

/// A CSS property emitted by the component styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Property {
    Appearance,
    AlignItems,
    BackgroundColor,
    BorderRadius,
    BorderWidth,
    BoxShadow,
    Color,
    Cursor,
    Display,
    FontFamily,
    FontSize,
    FontWeight,
    Height,
    JustifyContent,
    LineHeight,
    Margin,
    MinWidth,
    Outline,
    Padding,
    Width,
}

impl Property {
    /// The hyphenated CSS name.
    pub fn as_str(self) -> &'static str {
        match self {
            Property::Appearance => "appearance",
            Property::AlignItems => "align-items",
            Property::BackgroundColor => "background-color",
            Property::BorderRadius => "border-radius",
            Property::BorderWidth => "border-width",
            Property::BoxShadow => "box-shadow",
            Property::Color => "color",
            Property::Cursor => "cursor",
            Property::Display => "display",
            Property::FontFamily => "font-family",
            Property::FontSize => "font-size",
            Property::FontWeight => "font-weight",
            Property::Height => "height",
            Property::JustifyContent => "justify-content",
            Property::LineHeight => "line-height",
            Property::Margin => "margin",
            Property::MinWidth => "min-width",
            Property::Outline => "outline",
            Property::Padding => "padding",
            Property::Width => "width",
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Property {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
