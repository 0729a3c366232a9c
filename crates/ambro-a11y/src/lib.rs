//! ambro Accessibility
//!
//! Accessibility preferences for the ambro-dev site.
//!
//! Features:
//! - Font size, theme and reduced-motion preferences
//! - Preference store with persisted > ambient > default bootstrap
//! - Durable key-value storage (in-memory, file-backed, unavailable)
//! - Ambient media preferences (prefers-color-scheme, prefers-reduced-motion)
//! - Document root class list and dataset synchronization
//! - Preference widget and skip-to-content link models

pub mod preferences;
pub mod media_preferences;
pub mod storage;
pub mod classlist;
pub mod dataset;
pub mod document;
pub mod store;
pub mod widget;
pub mod skip_link;

// Core exports
pub use preferences::{AccessibilityPreferences, FontSize, Theme};
pub use media_preferences::{ColorSchemePreference, EnvironmentSignals, MediaPreferences};
pub use storage::{DurableStore, Storage, StorageError, UnavailableStorage, keys};
pub use classlist::TokenList;
pub use dataset::StringMap;
pub use document::{DocumentAttributes, DocumentRoot};
pub use store::{PreferenceStore, SubscriptionId};
pub use widget::{PreferenceWidget, WidgetAction, WidgetControl, ControlKind};
pub use skip_link::SkipLink;

/// Accessibility error
#[derive(Debug, thiserror::Error)]
pub enum A11yError {
    #[error("Invalid {field} value: {value:?}")]
    InvalidValue { field: &'static str, value: String },
}

impl A11yError {
    pub(crate) fn invalid(field: &'static str, value: &str) -> Self {
        Self::InvalidValue { field, value: value.to_string() }
    }
}
