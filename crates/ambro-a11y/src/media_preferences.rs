//! Media Preferences
//!
//! Ambient environment signals consulted when no choice is persisted.

/// Color scheme preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorSchemePreference {
    #[default]
    NoPreference,
    Light,
    Dark,
}

/// Source of ambient signals (OS-level dark mode, reduced motion).
pub trait EnvironmentSignals {
    /// `(prefers-color-scheme: dark)`
    fn prefers_dark_color_scheme(&self) -> bool;

    /// `(prefers-reduced-motion: reduce)`
    fn prefers_reduced_motion(&self) -> bool;
}

/// Combined media preferences
#[derive(Debug, Clone, Default)]
pub struct MediaPreferences {
    /// prefers-color-scheme
    pub color_scheme: ColorSchemePreference,
    /// prefers-reduced-motion
    pub reduced_motion: bool,
}

impl MediaPreferences {
    pub fn new() -> Self { Self::default() }

    /// Signals of a dark-mode environment
    pub fn dark() -> Self {
        Self { color_scheme: ColorSchemePreference::Dark, ..Self::default() }
    }

    /// Check if a media query matches
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();

        if query.contains("prefers-reduced-motion") {
            // "reduce" is a substring of "reduced-motion", check no-preference first
            if query.contains("no-preference") { return !self.reduced_motion; }
            if query.contains(": reduce") { return self.reduced_motion; }
            return false;
        }

        if query.contains("prefers-color-scheme") {
            if query.contains("dark") {
                return self.color_scheme == ColorSchemePreference::Dark;
            }
            if query.contains("light") {
                return self.color_scheme == ColorSchemePreference::Light;
            }
            return false;
        }

        false
    }

    pub fn set_color_scheme(&mut self, scheme: ColorSchemePreference) {
        self.color_scheme = scheme;
    }

    pub fn set_reduced_motion(&mut self, reduce: bool) {
        self.reduced_motion = reduce;
    }
}

impl EnvironmentSignals for MediaPreferences {
    fn prefers_dark_color_scheme(&self) -> bool {
        self.matches("(prefers-color-scheme: dark)")
    }

    fn prefers_reduced_motion(&self) -> bool {
        self.matches("(prefers-reduced-motion: reduce)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_media_query_matching() {
        let mut prefs = MediaPreferences::new();

        prefs.reduced_motion = true;
        assert!(prefs.matches("(prefers-reduced-motion: reduce)"));
        assert!(!prefs.matches("(prefers-reduced-motion: no-preference)"));

        prefs.reduced_motion = false;
        assert!(!prefs.matches("(prefers-reduced-motion: reduce)"));
        assert!(prefs.matches("(prefers-reduced-motion: no-preference)"));
    }

    #[test]
    fn test_color_scheme() {
        let mut prefs = MediaPreferences::new();
        assert!(!prefs.matches("(prefers-color-scheme: dark)"));
        assert!(!prefs.matches("(prefers-color-scheme: light)"));

        prefs.set_color_scheme(ColorSchemePreference::Dark);
        assert!(prefs.matches("(prefers-color-scheme: dark)"));
        assert!(!prefs.matches("(prefers-color-scheme: light)"));

        prefs.set_color_scheme(ColorSchemePreference::Light);
        assert!(prefs.matches("(PREFERS-COLOR-SCHEME: LIGHT)"));
    }

    #[test]
    fn test_unsupported_media_feature() {
        // Only color scheme and motion are consulted
        assert!(!MediaPreferences::new().matches("(prefers-contrast: more)"));
    }

    #[test]
    fn test_unknown_query() {
        assert!(!MediaPreferences::dark().matches("(min-width: 640px)"));
    }

    #[test]
    fn test_signals() {
        let mut prefs = MediaPreferences::dark();
        prefs.set_reduced_motion(true);
        assert!(prefs.prefers_dark_color_scheme());
        assert!(prefs.prefers_reduced_motion());
        assert!(!MediaPreferences::new().prefers_dark_color_scheme());
    }
}
