//! Dataset
//!
//! `data-*` attributes of the document root, keyed by camelCase name.

use std::collections::BTreeMap;

/// String map for data-* attributes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringMap {
    data: BTreeMap<String, String>,
}

impl StringMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get value by camelCase key
    pub fn get(&self, key: &str) -> Option<&str> {
        self.data.get(key).map(|s| s.as_str())
    }

    /// Set value by camelCase key
    pub fn set(&mut self, key: &str, value: &str) {
        self.data.insert(key.to_string(), value.to_string());
    }

    /// `fontSize` -> `data-font-size`
    pub fn to_attribute_name(key: &str) -> String {
        format!("data-{}", to_kebab_case(key))
    }

    /// Get as attribute pairs, sorted by key
    pub fn to_attributes(&self) -> Vec<(String, String)> {
        self.data.iter()
            .map(|(k, v)| (Self::to_attribute_name(k), v.clone()))
            .collect()
    }
}

/// Convert camelCase to kebab-case
fn to_kebab_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);

    for c in s.chars() {
        if c.is_ascii_uppercase() {
            result.push('-');
            result.push(c.to_ascii_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kebab_case() {
        assert_eq!(to_kebab_case("fontSize"), "font-size");
        assert_eq!(to_kebab_case("reduceMotion"), "reduce-motion");
        assert_eq!(to_kebab_case("theme"), "theme");
    }

    #[test]
    fn test_set_get() {
        let mut map = StringMap::new();
        map.set("reduceMotion", "false");
        map.set("reduceMotion", "true");

        assert_eq!(map.to_attributes().len(), 1);
        assert_eq!(map.get("reduceMotion"), Some("true"));
        assert_eq!(map.get("theme"), None);
    }

    #[test]
    fn test_to_attributes() {
        let mut map = StringMap::new();
        map.set("theme", "dark");
        map.set("fontSize", "large");

        assert_eq!(
            map.to_attributes(),
            vec![
                ("data-font-size".to_string(), "large".to_string()),
                ("data-theme".to_string(), "dark".to_string()),
            ]
        );
    }
}
