#![forbid(unsafe_code)]

//! Surface style pass-through.
//!
//! Hosts hand a widget an opaque set of style declarations; the widget stores
//! them and re-applies them through the environment when it mounts. The
//! declarations are never interpreted, only forwarded in order.

/// An ordered list of `(property, value)` style declarations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceStyle {
    declarations: Vec<(String, String)>,
}

impl SurfaceStyle {
    /// Create an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a declaration (builder).
    #[must_use]
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.declarations.push((property.into(), value.into()));
        self
    }

    /// Add a declaration in place.
    pub fn push(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.declarations.push((property.into(), value.into()));
    }

    /// Iterate over declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(property, value)| (property.as_str(), value.as_str()))
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Check if there are no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_preserves_order() {
        let style = SurfaceStyle::new()
            .with("min-height", "40px")
            .with("font-family", "monospace");

        let entries: Vec<_> = style.iter().collect();
        assert_eq!(
            entries,
            vec![("min-height", "40px"), ("font-family", "monospace")]
        );
    }

    #[test]
    fn push_appends() {
        let mut style = SurfaceStyle::new();
        assert!(style.is_empty());
        style.push("color", "red");
        assert_eq!(style.len(), 1);
    }
}
