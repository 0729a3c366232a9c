//! Accessibility Preferences
//!
//! Font size, theme and reduced-motion choices exposed by the site.

use crate::A11yError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Text size preset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontSize {
    #[default]
    Normal,
    Large,
    XLarge,
}

impl FontSize {
    /// All presets, smallest first
    pub const ALL: [FontSize; 3] = [Self::Normal, Self::Large, Self::XLarge];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::Large => "large",
            Self::XLarge => "x-large",
        }
    }
}

impl FromStr for FontSize {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "normal" => Ok(Self::Normal),
            "large" => Ok(Self::Large),
            "x-large" => Ok(Self::XLarge),
            _ => Err(A11yError::invalid("font-size", s)),
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    #[default]
    Default,
    HighContrast,
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 4] = [Self::Default, Self::HighContrast, Self::Dark, Self::Light];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::HighContrast => "high-contrast",
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    /// Whether the theme renders with the `dark` class.
    ///
    /// The site's default theme is dark, so `Default` counts too.
    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Default | Self::Dark)
    }
}

impl FromStr for Theme {
    type Err = A11yError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Default),
            "high-contrast" => Ok(Self::HighContrast),
            "dark" => Ok(Self::Dark),
            "light" => Ok(Self::Light),
            _ => Err(A11yError::invalid("theme", s)),
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Current accessibility preferences
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessibilityPreferences {
    pub font_size: FontSize,
    pub theme: Theme,
    pub reduce_motion: bool,
}

impl AccessibilityPreferences {
    pub fn new() -> Self { Self::default() }

    pub fn with_font_size(mut self, font_size: FontSize) -> Self {
        self.font_size = font_size;
        self
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    pub fn with_reduce_motion(mut self, reduce_motion: bool) -> Self {
        self.reduce_motion = reduce_motion;
        self
    }
}

/// Parse a persisted reduce-motion flag.
///
/// Only the literal `"true"` enables it; any other stored value disables it.
pub fn parse_reduce_motion(s: &str) -> bool {
    s == "true"
}

/// Validate a reduce-motion token at the string boundary
pub fn reduce_motion_from_str(s: &str) -> Result<bool, A11yError> {
    match s {
        "true" => Ok(true),
        "false" => Ok(false),
        _ => Err(A11yError::invalid("reduce-motion", s)),
    }
}

pub fn reduce_motion_as_str(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}
