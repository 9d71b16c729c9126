//! Ordered declaration blocks and the merge rule.

use std::fmt::Write as _;

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};

use super::Property;

/// A single property value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub value: String,
    /// Important declarations survive later, non-important ones.
    pub important: bool,
}

impl Declaration {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            important: false,
        }
    }

    pub fn important(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            important: true,
        }
    }

    /// Whether `incoming` may replace this declaration.
    fn yields_to(&self, incoming: &Declaration) -> bool {
        !self.important || incoming.important
    }
}

/// An ordered block of declarations.
///
/// Order is insertion order; replacing a property keeps its original
/// position, so the rendered block stays stable as overlays are layered on.
///
/// # Example
///
/// ```rust
/// use spacekit::style::{Declarations, Property};
///
/// let mut resting = Declarations::new()
///     .set(Property::BackgroundColor, "#f4f6f8")
///     .set_important(Property::Color, "#777f8e");
///
/// let hover = Declarations::new()
///     .set(Property::BackgroundColor, "#ebeef0")
///     .set(Property::Color, "#2075d6");
///
/// resting.merge(&hover);
///
/// assert_eq!(resting.value(Property::BackgroundColor), Some("#ebeef0"));
/// // The important color is not replaced by a plain one.
/// assert_eq!(resting.value(Property::Color), Some("#777f8e"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Declarations {
    entries: Vec<(Property, Declaration)>,
}

impl Declarations {
    /// Creates an empty block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a declaration, returning the block for chaining.
    pub fn set(mut self, property: Property, value: impl Into<String>) -> Self {
        self.insert(property, Declaration::new(value));
        self
    }

    /// Adds an important declaration, returning the block for chaining.
    pub fn set_important(mut self, property: Property, value: impl Into<String>) -> Self {
        self.insert(property, Declaration::important(value));
        self
    }

    /// Applies one declaration using the merge rule.
    ///
    /// Returns `false` when an existing important declaration kept its value.
    pub fn insert(&mut self, property: Property, declaration: Declaration) -> bool {
        match self.entries.iter_mut().find(|(p, _)| *p == property) {
            Some((_, existing)) => {
                if !existing.yields_to(&declaration) {
                    return false;
                }
                *existing = declaration;
                true
            }
            None => {
                self.entries.push((property, declaration));
                true
            }
        }
    }

    /// Layers `overlay` on top of this block, walking it in order.
    pub fn merge(&mut self, overlay: &Declarations) {
        for (property, declaration) in &overlay.entries {
            self.insert(*property, declaration.clone());
        }
    }

    pub fn get(&self, property: Property) -> Option<&Declaration> {
        self.entries
            .iter()
            .find(|(p, _)| *p == property)
            .map(|(_, d)| d)
    }

    /// Returns just the value of a property.
    pub fn value(&self, property: Property) -> Option<&str> {
        self.get(property).map(|d| d.value.as_str())
    }

    pub fn has(&self, property: Property) -> bool {
        self.get(property).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Property, &Declaration)> {
        self.entries.iter().map(|(p, d)| (*p, d))
    }

    /// Renders the body of a CSS rule, one declaration per line.
    pub fn to_css_body(&self, indent: &str) -> String {
        let mut out = String::new();
        for (property, declaration) in &self.entries {
            let _ = write!(out, "{}{}: {}", indent, property, declaration.value);
            if declaration.important {
                out.push_str(" !important");
            }
            out.push_str(";\n");
        }
        out
    }
}

impl Serialize for Declarations {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (property, declaration) in &self.entries {
            map.serialize_entry(property, declaration)?;
        }
        map.end()
    }
}
