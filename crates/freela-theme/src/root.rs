//! The document root that receives theme custom properties.

use indexmap::IndexMap;

/// Where the provider writes CSS custom properties.
pub trait DocumentRoot {
    fn set_property(&mut self, name: &str, value: &str);
    fn remove_property(&mut self, name: &str);
    fn property(&self, name: &str) -> Option<&str>;
}

/// In-memory root style, rendered as a `:root { ... }` block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleRoot {
    properties: IndexMap<String, String>,
}

impl StyleRoot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn properties(&self) -> &IndexMap<String, String> {
        &self.properties
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }

    pub fn to_css(&self) -> String {
        freela_tokens::css::render_root(&self.properties)
    }
}

impl DocumentRoot for StyleRoot {
    fn set_property(&mut self, name: &str, value: &str) {
        self.properties.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.properties.shift_remove(name);
    }

    fn property(&self, name: &str) -> Option<&str> {
        self.properties.get(name).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_remove() {
        let mut root = StyleRoot::new();
        root.set_property("--ds-colors-primary-500", "#ec4464");
        root.set_property("--ds-colors-primary-500", "#3b82f6");
        assert_eq!(root.property("--ds-colors-primary-500"), Some("#3b82f6"));
        assert_eq!(root.properties().len(), 1);

        root.remove_property("--ds-colors-primary-500");
        assert!(root.is_empty());
        assert_eq!(root.to_css(), ":root {\n}");
    }
}
