//! Preference Widget
//!
//! The floating accessibility panel: which controls it shows, their
//! pressed state and labels, and how activating one mutates the store.

use crate::preferences::{AccessibilityPreferences, FontSize, Theme};
use crate::storage::DurableStore;
use crate::store::PreferenceStore;

pub const TITLE: &str = "Opcje dostępności";
const OPEN_LABEL: &str = "Otwórz opcje dostępności";
const CLOSE_LABEL: &str = "Zamknij opcje dostępności";

/// Themes offered as buttons. High contrast has its own toggle.
pub const THEME_BUTTONS: [Theme; 3] = [Theme::Default, Theme::Dark, Theme::Light];

/// Something the user can activate in the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetAction {
    SetFontSize(FontSize),
    SetTheme(Theme),
    SetReduceMotion(bool),
    ToggleHighContrast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlKind {
    Button,
    Checkbox,
}

/// Rendered control with its ARIA state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetControl {
    pub kind: ControlKind,
    pub label: &'static str,
    /// `aria-pressed` for buttons, `checked` for the checkbox
    pub pressed: bool,
    pub action: WidgetAction,
}

fn font_size_label(size: FontSize) -> &'static str {
    match size {
        FontSize::Normal => "Normalny rozmiar tekstu",
        FontSize::Large => "Duży rozmiar tekstu",
        FontSize::XLarge => "Bardzo duży rozmiar tekstu",
    }
}

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Default => "Domyślny motyw",
        Theme::Dark => "Ciemny motyw",
        Theme::Light => "Jasny motyw",
        Theme::HighContrast => "Wysoki kontrast",
    }
}

/// Accessibility panel state
#[derive(Debug, Clone, Copy, Default)]
pub struct PreferenceWidget {
    open: bool,
}

impl PreferenceWidget {
    pub fn new() -> Self { Self::default() }

    pub fn is_open(&self) -> bool { self.open }

    pub fn toggle_open(&mut self) { self.open = !self.open; }

    pub fn close(&mut self) { self.open = false; }

    /// `aria-label` of the floating trigger button
    pub fn trigger_label(&self) -> &'static str {
        if self.open { CLOSE_LABEL } else { OPEN_LABEL }
    }

    /// `aria-expanded` of the trigger button
    pub fn aria_expanded(&self) -> bool { self.open }

    /// Controls shown for the given preferences; empty while closed
    pub fn controls(&self, prefs: &AccessibilityPreferences) -> Vec<WidgetControl> {
        if !self.open {
            return Vec::new();
        }

        let mut controls: Vec<WidgetControl> = FontSize::ALL.iter()
            .map(|&size| WidgetControl {
                kind: ControlKind::Button,
                label: font_size_label(size),
                pressed: prefs.font_size == size,
                action: WidgetAction::SetFontSize(size),
            })
            .collect();

        controls.extend(THEME_BUTTONS.iter().map(|&theme| WidgetControl {
            kind: ControlKind::Button,
            label: theme_label(theme),
            pressed: prefs.theme == theme,
            action: WidgetAction::SetTheme(theme),
        }));

        controls.push(WidgetControl {
            kind: ControlKind::Checkbox,
            label: "Redukuj animacje",
            pressed: prefs.reduce_motion,
            action: WidgetAction::SetReduceMotion(!prefs.reduce_motion),
        });

        controls.push(WidgetControl {
            kind: ControlKind::Button,
            label: theme_label(Theme::HighContrast),
            pressed: prefs.theme == Theme::HighContrast,
            action: WidgetAction::ToggleHighContrast,
        });

        controls
    }

    /// Route a control activation to the store
    pub fn activate<S: DurableStore>(&self, action: WidgetAction, store: &mut PreferenceStore<S>) {
        match action {
            WidgetAction::SetFontSize(size) => store.set_font_size(size),
            WidgetAction::SetTheme(theme) => store.set_theme(theme),
            WidgetAction::SetReduceMotion(reduce) => store.set_reduce_motion(reduce),
            WidgetAction::ToggleHighContrast => {
                let next = if store.get_state().theme == Theme::HighContrast {
                    Theme::Default
                } else {
                    Theme::HighContrast
                };
                store.set_theme(next);
            }
        }
    }
}
