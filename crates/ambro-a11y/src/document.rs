//! Document Attributes
//!
//! Derives the root element's classes and `data-*` attributes from the
//! current preferences and writes them onto a [`DocumentRoot`].

use crate::classlist::TokenList;
use crate::dataset::StringMap;
use crate::preferences::{reduce_motion_as_str, AccessibilityPreferences, FontSize, Theme};

pub const DARK_CLASS: &str = "dark";
pub const REDUCE_MOTION_CLASS: &str = "reduce-motion";

/// Dataset keys written on the root element
pub mod data_keys {
    pub const FONT_SIZE: &str = "fontSize";
    pub const THEME: &str = "theme";
    pub const REDUCE_MOTION: &str = "reduceMotion";
}

pub fn font_size_class(size: FontSize) -> String {
    format!("text-{}", size.as_str())
}

pub fn theme_class(theme: Theme) -> String {
    format!("theme-{}", theme.as_str())
}

/// Every class the store may set. Anything else on the root is left alone.
pub fn managed_classes() -> Vec<String> {
    FontSize::ALL.iter().map(|s| font_size_class(*s))
        .chain(Theme::ALL.iter().map(|t| theme_class(*t)))
        .chain([DARK_CLASS.to_string(), REDUCE_MOTION_CLASS.to_string()])
        .collect()
}

/// Attribute set derived from a preference snapshot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentAttributes {
    pub classes: Vec<String>,
    pub dataset: Vec<(&'static str, String)>,
}

impl DocumentAttributes {
    /// Pure function of the preferences
    pub fn derive(prefs: &AccessibilityPreferences) -> Self {
        let mut classes = vec![font_size_class(prefs.font_size), theme_class(prefs.theme)];
        if prefs.theme.is_dark() {
            classes.push(DARK_CLASS.to_string());
        }
        if prefs.reduce_motion {
            classes.push(REDUCE_MOTION_CLASS.to_string());
        }

        let dataset = vec![
            (data_keys::FONT_SIZE, prefs.font_size.as_str().to_string()),
            (data_keys::THEME, prefs.theme.as_str().to_string()),
            (data_keys::REDUCE_MOTION, reduce_motion_as_str(prefs.reduce_motion).to_string()),
        ];

        Self { classes, dataset }
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }
}

/// The document's root (`<html>`) element
#[derive(Debug, Clone, Default)]
pub struct DocumentRoot {
    class_list: TokenList,
    dataset: StringMap,
}

impl DocumentRoot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Root element carrying server-rendered classes (e.g. font variables)
    pub fn with_classes(classes: &str) -> Self {
        Self { class_list: TokenList::from_string(classes), dataset: StringMap::new() }
    }

    pub fn class_list(&self) -> &TokenList {
        &self.class_list
    }

    pub fn dataset(&self) -> &StringMap {
        &self.dataset
    }

    /// Replace the whole managed attribute set with `attrs`
    pub fn apply(&mut self, attrs: &DocumentAttributes) {
        let managed = managed_classes();
        let managed: Vec<&str> = managed.iter().map(String::as_str).collect();
        self.class_list.remove(&managed);

        let derived: Vec<&str> = attrs.classes.iter().map(String::as_str).collect();
        self.class_list.add(&derived);

        for (key, value) in &attrs.dataset {
            self.dataset.set(key, value);
        }

        tracing::debug!("Synchronized document root: class=\"{}\"", self.class_list);
    }

    /// Root element attributes as name/value pairs
    pub fn to_attributes(&self) -> Vec<(String, String)> {
        let mut attrs = vec![("class".to_string(), self.class_list.value())];
        attrs.extend(self.dataset.to_attributes());
        attrs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_light_large_reduced() {
        let prefs = AccessibilityPreferences::new()
            .with_font_size(FontSize::Large)
            .with_theme(Theme::Light)
            .with_reduce_motion(true);

        let attrs = DocumentAttributes::derive(&prefs);
        assert_eq!(attrs.classes, vec!["text-large", "theme-light", "reduce-motion"]);
        assert!(!attrs.has_class(DARK_CLASS));
    }

    #[test]
    fn test_derive_default_is_dark() {
        let attrs = DocumentAttributes::derive(&AccessibilityPreferences::new());
        assert_eq!(attrs.classes, vec!["text-normal", "theme-default", "dark"]);
        assert_eq!(attrs.dataset[2], ("reduceMotion", "false".to_string()));
    }

    #[test]
    fn test_derive_high_contrast_not_dark() {
        let prefs = AccessibilityPreferences::new().with_theme(Theme::HighContrast);
        let attrs = DocumentAttributes::derive(&prefs);
        assert!(attrs.has_class("theme-high-contrast"));
        assert!(!attrs.has_class(DARK_CLASS));
    }

    #[test]
    fn test_managed_classes() {
        let managed = managed_classes();
        assert_eq!(managed.len(), 9);
        assert!(managed.contains(&"text-x-large".to_string()));
        assert!(managed.contains(&"theme-high-contrast".to_string()));
    }

    #[test]
    fn test_apply_replaces_managed_classes() {
        let mut root = DocumentRoot::with_classes("font-primary text-large theme-dark dark");
        let prefs = AccessibilityPreferences::new().with_theme(Theme::Light);

        root.apply(&DocumentAttributes::derive(&prefs));
        assert_eq!(root.class_list().value(), "font-primary text-normal theme-light");
        assert_eq!(root.dataset().get("theme"), Some("light"));
    }

    #[test]
    fn test_apply_twice_is_idempotent() {
        let mut root = DocumentRoot::new();
        let attrs = DocumentAttributes::derive(&AccessibilityPreferences::new().with_reduce_motion(true));

        root.apply(&attrs);
        let once = root.to_attributes();
        root.apply(&attrs);
        assert_eq!(root.to_attributes(), once);
    }

    #[test]
    fn test_to_attributes() {
        let mut root = DocumentRoot::new();
        root.apply(&DocumentAttributes::derive(&AccessibilityPreferences::new()));
        assert_eq!(
            root.to_attributes(),
            vec![
                ("class".to_string(), "text-normal theme-default dark".to_string()),
                ("data-font-size".to_string(), "normal".to_string()),
                ("data-reduce-motion".to_string(), "false".to_string()),
                ("data-theme".to_string(), "default".to_string()),
            ]
        );
    }
}
