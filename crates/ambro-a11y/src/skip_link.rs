//! Skip link
//!
//! "Skip to content" link rendered first in the body. Hidden off-screen
//! until it receives keyboard focus.

pub const MAIN_CONTENT_ID: &str = "main-content";

#[derive(Debug, Clone)]
pub struct SkipLink {
    pub label: String,
    target_id: String,
    visible: bool,
}

impl Default for SkipLink {
    fn default() -> Self {
        Self::new("Przejdź do treści", MAIN_CONTENT_ID)
    }
}

impl SkipLink {
    pub fn new(label: &str, target: &str) -> Self {
        Self {
            label: label.to_string(),
            target_id: target.to_string(),
            visible: false,
        }
    }

    pub fn target_id(&self) -> &str {
        &self.target_id
    }

    pub fn href(&self) -> String {
        format!("#{}", self.target_id)
    }

    pub fn is_visible(&self) -> bool { self.visible }

    pub fn focus(&mut self) { self.visible = true; }

    pub fn blur(&mut self) { self.visible = false; }

    /// Translate class used to slide the link in and out of view
    pub fn transform_class(&self) -> &'static str {
        if self.visible { "translate-y-0" } else { "-translate-y-full" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_target() {
        let link = SkipLink::default();
        assert_eq!(link.href(), "#main-content");
        assert_eq!(link.target_id(), MAIN_CONTENT_ID);
        assert!(!link.is_visible());
    }

    #[test]
    fn test_focus_visibility() {
        let mut link = SkipLink::default();
        link.focus();
        assert_eq!(link.transform_class(), "translate-y-0");
        link.blur();
        assert_eq!(link.transform_class(), "-translate-y-full");
    }
}
