//! Root element attributes.

use std::collections::BTreeMap;

/// Attributes set on the document's root (`<html>`) element.
///
/// Pages emit these verbatim so stylesheets can target selectors such as
/// `[data-theme="dark"]`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentRoot {
    attributes: BTreeMap<String, String>,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an attribute, replacing any previous value.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Iterates attributes in name order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Clones the attributes into an ordered map for template contexts.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        self.attributes.clone()
    }
}
