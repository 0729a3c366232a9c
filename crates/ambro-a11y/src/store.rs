//! Preference Store
//!
//! Holds the session's accessibility preferences. Every change is written
//! to durable storage, mirrored onto the document root and reported to
//! observers, in that order.

use crate::document::{DocumentAttributes, DocumentRoot};
use crate::media_preferences::EnvironmentSignals;
use crate::preferences::{
    parse_reduce_motion, reduce_motion_as_str, reduce_motion_from_str, AccessibilityPreferences,
    FontSize, Theme,
};
use crate::storage::{keys, DurableStore, Storage, StorageError};
use crate::A11yError;

/// Handle returned by [`PreferenceStore::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Observer = Box<dyn FnMut(&AccessibilityPreferences)>;

/// Accessibility preference store
///
/// Constructed once per session and handed to every consumer. Mutation goes
/// through `&mut self`, so there is exactly one writer at a time.
pub struct PreferenceStore<S = Storage> {
    state: AccessibilityPreferences,
    storage: S,
    document: DocumentRoot,
    observers: Vec<(SubscriptionId, Observer)>,
    next_subscription: u64,
    bootstrapped: bool,
}

impl<S: DurableStore> PreferenceStore<S> {
    /// Create a store with default preferences
    pub fn new(storage: S) -> Self {
        Self::with_document(storage, DocumentRoot::new())
    }

    /// Create a store that synchronizes an existing root element
    pub fn with_document(storage: S, document: DocumentRoot) -> Self {
        Self {
            state: AccessibilityPreferences::default(),
            storage,
            document,
            observers: Vec::new(),
            next_subscription: 0,
            bootstrapped: false,
        }
    }

    /// Resolve the session's starting preferences.
    ///
    /// Each field independently takes the persisted value, else the ambient
    /// signal, else the default. Runs once; later calls are ignored.
    pub fn bootstrap(&mut self, env: &dyn EnvironmentSignals) {
        if self.bootstrapped {
            tracing::debug!("Preference store already bootstrapped");
            return;
        }
        self.bootstrapped = true;

        let font_size = self.read_persisted(keys::FONT_SIZE, |raw| raw.parse::<FontSize>().ok());
        let theme = self.read_persisted(keys::THEME, |raw| raw.parse::<Theme>().ok());
        let reduce_motion = self.read_persisted(keys::REDUCE_MOTION, |raw| Some(parse_reduce_motion(raw)));

        self.state = AccessibilityPreferences {
            font_size: font_size.unwrap_or_default(),
            theme: theme.unwrap_or(if env.prefers_dark_color_scheme() { Theme::Dark } else { Theme::Default }),
            reduce_motion: reduce_motion.unwrap_or_else(|| env.prefers_reduced_motion()),
        };

        tracing::info!(
            "Bootstrapped accessibility preferences: font-size={} theme={} reduce-motion={}",
            self.state.font_size, self.state.theme, self.state.reduce_motion
        );

        self.write(keys::FONT_SIZE, self.state.font_size.as_str());
        self.write(keys::THEME, self.state.theme.as_str());
        self.write(keys::REDUCE_MOTION, reduce_motion_as_str(self.state.reduce_motion));
        self.commit();
    }

    pub fn is_bootstrapped(&self) -> bool {
        self.bootstrapped
    }

    /// Current preferences
    pub fn get_state(&self) -> AccessibilityPreferences {
        self.state
    }

    pub fn set_font_size(&mut self, font_size: FontSize) {
        if self.state.font_size == font_size {
            return;
        }
        self.state.font_size = font_size;
        self.write(keys::FONT_SIZE, font_size.as_str());
        self.commit();
    }

    pub fn set_theme(&mut self, theme: Theme) {
        if self.state.theme == theme {
            return;
        }
        self.state.theme = theme;
        self.write(keys::THEME, theme.as_str());
        self.commit();
    }

    pub fn set_reduce_motion(&mut self, reduce_motion: bool) {
        if self.state.reduce_motion == reduce_motion {
            return;
        }
        self.state.reduce_motion = reduce_motion;
        self.write(keys::REDUCE_MOTION, reduce_motion_as_str(reduce_motion));
        self.commit();
    }

    /// Set font size from its token (`normal`, `large`, `x-large`)
    pub fn set_font_size_str(&mut self, value: &str) -> Result<(), A11yError> {
        self.set_font_size(value.parse()?);
        Ok(())
    }

    /// Set theme from its token (`default`, `high-contrast`, `dark`, `light`)
    pub fn set_theme_str(&mut self, value: &str) -> Result<(), A11yError> {
        self.set_theme(value.parse()?);
        Ok(())
    }

    /// Set reduce-motion from `"true"` or `"false"`
    pub fn set_reduce_motion_str(&mut self, value: &str) -> Result<(), A11yError> {
        self.set_reduce_motion(reduce_motion_from_str(value)?);
        Ok(())
    }

    /// Register an observer called synchronously after every change
    pub fn subscribe(&mut self, observer: impl FnMut(&AccessibilityPreferences) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, Box::new(observer)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(i, _)| *i != id);
        self.observers.len() != before
    }

    pub fn document(&self) -> &DocumentRoot {
        &self.document
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Tear down the session, handing back its storage
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn read_persisted<T>(&self, key: &str, parse: impl Fn(&str) -> Option<T>) -> Option<T> {
        let raw = match self.storage.get_item(key) {
            Ok(raw) => raw?,
            Err(e) => {
                tracing::debug!("Cannot read {}: {}", key, e);
                return None;
            }
        };
        let value = parse(&raw);
        if value.is_none() {
            tracing::warn!("Ignoring invalid persisted value {:?} for {}", raw, key);
        }
        value
    }

    fn write(&mut self, key: &str, value: &str) {
        match self.storage.set_item(key, value) {
            Ok(()) => {}
            Err(StorageError::Unavailable) => tracing::debug!("Storage unavailable, {} kept in memory", key),
            Err(e) => tracing::warn!("Failed to persist {}: {}", key, e),
        }
    }

    fn commit(&mut self) {
        self.document.apply(&DocumentAttributes::derive(&self.state));

        let state = self.state;
        for (_, observer) in &mut self.observers {
            observer(&state);
        }
    }
}

impl<S> std::fmt::Debug for PreferenceStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreferenceStore")
            .field("state", &self.state)
            .field("document", &self.document)
            .field("observers", &self.observers.len())
            .field("bootstrapped", &self.bootstrapped)
            .finish()
    }
}
