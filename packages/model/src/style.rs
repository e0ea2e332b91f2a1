use std::collections::BTreeMap;

/// Style property driven by the drag controller
pub const HEIGHT: &str = "height";

/// Inline style declarations for a block (property name → CSS value)
///
/// Ordered so that projection output is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    properties: BTreeMap<String, String>,
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Style holding only `height: <value>px`
    pub fn with_height(height: f64) -> Self {
        Self::new().with(HEIGHT, px(height))
    }

    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(property.into(), value.into());
    }

    pub fn get(&self, property: &str) -> Option<&str> {
        self.properties.get(property).map(String::as_str)
    }

    /// Height in pixels, if the height property is a `px` value
    pub fn height_px(&self) -> Option<f64> {
        self.get(HEIGHT).and_then(parse_px)
    }

    /// Merge `patch` into a copy of this style. Patch keys win.
    pub fn merge(&self, patch: &Style) -> Style {
        let mut merged = self.clone();
        for (key, value) in &patch.properties {
            merged.properties.insert(key.clone(), value.clone());
        }
        merged
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.properties
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.properties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Style {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            properties: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl From<Style> for BTreeMap<String, String> {
    fn from(style: Style) -> Self {
        style.properties
    }
}

/// Format a pointer coordinate as a CSS pixel length
pub fn px(value: f64) -> String {
    format!("{}px", value)
}

/// Parse a CSS pixel length (`"50px"` → `50.0`)
pub fn parse_px(value: &str) -> Option<f64> {
    value.trim().strip_suffix("px")?.trim().parse().ok()
}
